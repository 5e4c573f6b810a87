#![cfg(test)]

use crate::builder::ZoneBuilder;
use crate::config::LayoutConfig;
use crate::engine::LayoutEngine;
use crate::placement::PlacedLine;
use crate::zone::ParagraphLine;
use kumihan_stream::RunInstruction;
use kumihan_traits::{FixedMetrics, JapaneseRule};
use std::sync::Arc;

/// Config with a 10pt base size: full-width glyphs advance 10, half-width 5
/// under `FixedMetrics`, which keeps test arithmetic round.
pub fn test_config() -> LayoutConfig {
    LayoutConfig {
        base_font_size: 10.0,
        ..Default::default()
    }
}

pub fn create_test_engine() -> LayoutEngine {
    LayoutEngine::new(Arc::new(JapaneseRule), Arc::new(FixedMetrics)).with_config(test_config())
}

pub fn create_test_builder() -> ZoneBuilder {
    ZoneBuilder::new(
        &test_config(),
        Arc::new(JapaneseRule),
        Arc::new(FixedMetrics),
    )
}

/// One paragraph line of plain text: each character is a minimal
/// one-element zone.
pub fn plain_line(text: &str, font_size: f32) -> ParagraphLine {
    let cfg = LayoutConfig {
        base_font_size: font_size,
        ..Default::default()
    };
    let mut builder = ZoneBuilder::new(&cfg, Arc::new(JapaneseRule), Arc::new(FixedMetrics));
    builder.process(&RunInstruction::text(text));
    builder
        .build()
        .into_iter()
        .next()
        .expect("builder always has a line")
}

/// Paragraph lines built from a full instruction stream.
pub fn build_lines(stream: &[RunInstruction]) -> Vec<ParagraphLine> {
    let mut builder = create_test_builder();
    for instruction in stream {
        builder.process(instruction);
    }
    builder.build()
}

/// The visible main-glyph text of an output line (ruby and zero-width
/// glyphs excluded).
pub fn visible_text(line: &PlacedLine) -> String {
    line.glyphs
        .iter()
        .filter(|p| !p.is_ruby && !p.is_zero_width)
        .filter_map(|p| p.glyph.ch())
        .collect()
}

/// Every main-glyph character of an output line in structural order,
/// zero-width glyphs included (the coverage view).
pub fn structural_text(line: &PlacedLine) -> String {
    line.glyphs
        .iter()
        .filter(|p| !p.is_ruby)
        .filter_map(|p| p.glyph.ch())
        .collect()
}

/// Concatenated coverage view over all output lines.
pub fn coverage(lines: &[PlacedLine]) -> String {
    lines.iter().map(structural_text).collect()
}
