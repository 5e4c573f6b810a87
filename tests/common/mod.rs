use kumihan::{
    FixedMetrics, JapaneseRule, LayoutConfig, LayoutEngine, PlacedLine, RunInstruction,
};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Engine with a 10pt base size: full-width glyphs advance 10pt,
/// half-width 5pt under `FixedMetrics`, keeping expected widths round.
pub fn create_engine() -> LayoutEngine {
    LayoutEngine::new(Arc::new(JapaneseRule), Arc::new(FixedMetrics)).with_config(LayoutConfig {
        base_font_size: 10.0,
        ..Default::default()
    })
}

/// Lay out a plain text string as a single run.
pub fn layout_text(text: &str, budget: f32) -> Result<Vec<PlacedLine>, kumihan::LayoutError> {
    create_engine().layout(&[RunInstruction::text(text)], budget, None)
}

/// The visible main-glyph text of an output line.
pub fn visible_text(line: &PlacedLine) -> String {
    line.glyphs
        .iter()
        .filter(|p| !p.is_ruby && !p.is_zero_width)
        .filter_map(|p| p.glyph.ch())
        .collect()
}

/// Every main-glyph character across all lines, zero-width included.
pub fn coverage(lines: &[PlacedLine]) -> String {
    lines
        .iter()
        .flat_map(|l| l.glyphs.iter())
        .filter(|p| !p.is_ruby)
        .filter_map(|p| p.glyph.ch())
        .collect()
}
