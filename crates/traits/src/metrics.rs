//! GlyphMetrics trait for abstracting advance-width lookup.
//!
//! Font and glyph-metric lookup is an external collaborator; the layout
//! engine only ever asks "how wide is this character at this size".

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for metric lookup operations.
#[derive(Error, Debug, Clone)]
pub enum MetricsError {
    #[error("No advance recorded for character '{0}'")]
    Unknown(char),

    #[error("Metric store is poisoned")]
    Poisoned,
}

/// A source of glyph advance widths.
///
/// # Implementations
///
/// - `FixedMetrics`: em-grid widths from East-Asian-width classification
/// - `TableMetrics`: per-character advances pre-populated by the caller
pub trait GlyphMetrics: Send + Sync + Debug {
    /// Advance width for `ch` rendered at `font_size`, in device-independent
    /// units. Must be total (every char gets some width); providers with
    /// partial data fall back to a default.
    fn advance(&self, ch: char, font_size: f32) -> f32;

    /// Returns a human-readable name for this provider (for logging).
    fn name(&self) -> &'static str;
}

/// Whether `ch` occupies a full em in East-Asian typography.
///
/// Covers the CJK ideograph, kana, hangul, full-width-forms and CJK
/// punctuation blocks; everything else is treated as half-width.
pub fn is_full_width(ch: char) -> bool {
    matches!(ch,
        '\u{1100}'..='\u{115F}'   // Hangul Jamo
        | '\u{2E80}'..='\u{303E}' // CJK Radicals .. CJK Symbols and Punctuation
        | '\u{3041}'..='\u{33FF}' // Hiragana .. CJK Compatibility
        | '\u{3400}'..='\u{4DBF}' // CJK Extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
        | '\u{A000}'..='\u{A4CF}' // Yi
        | '\u{AC00}'..='\u{D7A3}' // Hangul Syllables
        | '\u{F900}'..='\u{FAFF}' // CJK Compatibility Ideographs
        | '\u{FE30}'..='\u{FE4F}' // CJK Compatibility Forms
        | '\u{FF00}'..='\u{FF60}' // Fullwidth Forms
        | '\u{FFE0}'..='\u{FFE6}')
}

/// Em-grid metrics: full-width characters advance one em, everything else
/// half an em. Deterministic and font-free, which makes layout results
/// exactly predictable in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedMetrics;

impl FixedMetrics {
    pub fn new() -> Self {
        Self
    }
}

impl GlyphMetrics for FixedMetrics {
    fn advance(&self, ch: char, font_size: f32) -> f32 {
        if is_full_width(ch) {
            font_size
        } else {
            font_size * 0.5
        }
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Per-character advance table (in ems), pre-populated by the caller.
///
/// Characters absent from the table fall back to the `FixedMetrics` grid.
#[derive(Debug, Default)]
pub struct TableMetrics {
    advances: RwLock<HashMap<char, f32>>,
}

impl TableMetrics {
    pub fn new() -> Self {
        Self {
            advances: RwLock::new(HashMap::new()),
        }
    }

    /// Record the advance of `ch` in ems (1.0 = one full em at any size).
    pub fn add(&self, ch: char, em_advance: f32) -> Result<(), MetricsError> {
        let mut advances = self.advances.write().map_err(|_| MetricsError::Poisoned)?;
        advances.insert(ch, em_advance);
        Ok(())
    }

    /// Look up the recorded em advance without the fallback.
    pub fn get(&self, ch: char) -> Result<f32, MetricsError> {
        let advances = self.advances.read().map_err(|_| MetricsError::Poisoned)?;
        advances.get(&ch).copied().ok_or(MetricsError::Unknown(ch))
    }
}

impl GlyphMetrics for TableMetrics {
    fn advance(&self, ch: char, font_size: f32) -> f32 {
        match self.get(ch) {
            Ok(em) => em * font_size,
            Err(_) => FixedMetrics.advance(ch, font_size),
        }
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_metrics_use_the_em_grid() {
        let m = FixedMetrics::new();
        assert_eq!(m.advance('漢', 10.0), 10.0);
        assert_eq!(m.advance('a', 10.0), 5.0);
        assert_eq!(m.advance('。', 10.0), 10.0);
    }

    #[test]
    fn table_metrics_fall_back_to_the_grid() {
        let m = TableMetrics::new();
        m.add('i', 0.3).unwrap();
        assert_eq!(m.advance('i', 10.0), 3.0);
        assert_eq!(m.advance('w', 10.0), 5.0);
        assert!(matches!(m.get('w'), Err(MetricsError::Unknown('w'))));
    }
}
