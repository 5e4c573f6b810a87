//! LineBreakRule trait for abstracting kinsoku policy.
//!
//! The layout engine never hard-codes character classes; every prohibition
//! and allowance is asked of a rule object supplied by the caller.

use std::fmt::Debug;

/// Line-breaking prohibition and allowance policy.
///
/// All queries operate on the character a glyph renders; non-character
/// glyphs (inline images) are never queried.
///
/// # Implementations
///
/// - `JapaneseRule`: standard Japanese kinsoku classes (always available)
/// - `PermissiveRule`: allows every break (useful in tests)
pub trait LineBreakRule: Send + Sync + Debug {
    /// May `ch` begin a line? Closing punctuation and small kana may not.
    fn forbidden_at_line_start(&self, ch: char) -> bool;

    /// May `ch` end a line? Opening punctuation may not.
    fn forbidden_at_line_end(&self, ch: char) -> bool;

    /// May a line break fall between `before` and `after`?
    ///
    /// Distinct from the per-character prohibitions: this guards pairs that
    /// must stay together even though each member is individually harmless
    /// (letters inside a Latin word, leader/dash runs).
    fn can_break_between(&self, before: char, after: char) -> bool;

    /// May `ch` hang into the margin past the width budget (burasage)?
    fn can_hang(&self, ch: char) -> bool;

    /// Full-width punctuation that renders at half width when squeezed
    /// against a following prohibited-at-line-start glyph at a zone
    /// boundary.
    fn half_width_candidate(&self, ch: char) -> bool {
        let _ = ch;
        false
    }

    /// Opening punctuation that renders at half width when it begins a line.
    fn half_width_at_line_start(&self, ch: char) -> bool {
        let _ = ch;
        false
    }

    /// Returns a human-readable name for this rule (for logging/debugging).
    fn name(&self) -> &'static str;
}

const FORBIDDEN_AT_LINE_START: &str = "、。，．）」』】〉》〕｝？！・：；ヽヾゝゞ々ーぁぃぅぇぉっゃゅょゎァィゥェォッャュョヮ";
const FORBIDDEN_AT_LINE_END: &str = "（「『【〈《〔｛";
const HANGABLE: &str = "、。，．";
const FULL_WIDTH_PUNCTUATION: &str = "、。，．（）「」『』【】〈〉《》〔〕｛｝";

/// Standard Japanese kinsoku rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct JapaneseRule;

impl JapaneseRule {
    pub fn new() -> Self {
        Self
    }
}

impl LineBreakRule for JapaneseRule {
    fn forbidden_at_line_start(&self, ch: char) -> bool {
        FORBIDDEN_AT_LINE_START.contains(ch)
    }

    fn forbidden_at_line_end(&self, ch: char) -> bool {
        FORBIDDEN_AT_LINE_END.contains(ch)
    }

    fn can_break_between(&self, before: char, after: char) -> bool {
        // Latin word integrity: never separate adjacent letters/digits.
        if before.is_ascii_alphanumeric() && after.is_ascii_alphanumeric() {
            return false;
        }
        // Leader and dash runs stay together.
        if (before == '…' && after == '…') || (before == '—' && after == '—') {
            return false;
        }
        true
    }

    fn can_hang(&self, ch: char) -> bool {
        HANGABLE.contains(ch)
    }

    fn half_width_candidate(&self, ch: char) -> bool {
        FULL_WIDTH_PUNCTUATION.contains(ch)
    }

    fn half_width_at_line_start(&self, ch: char) -> bool {
        FORBIDDEN_AT_LINE_END.contains(ch)
    }

    fn name(&self) -> &'static str {
        "japanese"
    }
}

/// A rule that permits every break and prohibits nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveRule;

impl PermissiveRule {
    pub fn new() -> Self {
        Self
    }
}

impl LineBreakRule for PermissiveRule {
    fn forbidden_at_line_start(&self, _ch: char) -> bool {
        false
    }

    fn forbidden_at_line_end(&self, _ch: char) -> bool {
        false
    }

    fn can_break_between(&self, _before: char, _after: char) -> bool {
        true
    }

    fn can_hang(&self, _ch: char) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "permissive"
    }
}
