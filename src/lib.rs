//! Kumihan: a kinsoku-aware line-breaking and glyph-placement engine.
//!
//! Takes a flat, style-annotated run stream (the output contract of a
//! markup compiler) and produces, per paragraph, an ordered sequence of
//! lines of positioned glyphs — honoring Japanese line-breaking
//! prohibitions (kinsoku), hanging punctuation (burasage), non-splittable
//! zones, ruby annotations, and half-width punctuation corrections.
//!
//! This crate is the integration layer: it re-exports the foundation
//! crates and offers the one-call [`typeset`] pipeline. Callers with
//! richer needs (custom policies, per-paragraph registries, incremental
//! building) use [`LayoutEngine`] and [`ZoneBuilder`] directly.

// Foundation re-exports
pub use kumihan_stream::{RunInstruction, TextStr};
pub use kumihan_style::{
    Dimension, FontStyle, FontWeight, LetterCase, Margins, RubyStyle, StyleModifier, TextAlign,
};
pub use kumihan_traits::{
    FixedMetrics, GlyphMetrics, JapaneseRule, LineBreakRule, PermissiveRule, TableMetrics,
};
pub use kumihan_types::{Color, Offset, Rect, Size};

// Engine re-exports
pub use kumihan_layout::{
    Cursor, EllipsisReservation, FontGlyph, Glyph, GlyphPlacement, HalfWidthRegistry, ImageGlyph,
    LayoutConfig, LayoutEngine, LayoutError, ParagraphLine, PlacedLine, ShapedGlyph, Zone,
    ZoneBuilder,
};

use std::sync::Arc;

/// Typeset a run stream against a width budget with the default
/// configuration.
///
/// Each explicit-break-delimited paragraph is laid out independently and
/// the resulting lines concatenated. Purely functional: no state survives
/// the call.
pub fn typeset(
    stream: &[RunInstruction],
    budget: f32,
    rule: Arc<dyn LineBreakRule>,
    metrics: Arc<dyn GlyphMetrics>,
) -> Result<Vec<PlacedLine>, LayoutError> {
    LayoutEngine::new(rule, metrics).layout(stream, budget, None)
}

/// [`typeset`] with standard Japanese kinsoku rules and em-grid metrics.
pub fn typeset_japanese(
    stream: &[RunInstruction],
    budget: f32,
) -> Result<Vec<PlacedLine>, LayoutError> {
    typeset(
        stream,
        budget,
        Arc::new(JapaneseRule),
        Arc::new(FixedMetrics),
    )
}
