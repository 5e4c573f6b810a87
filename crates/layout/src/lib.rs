use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(
        "Restart ceiling of {0} exceeded while converging half-width corrections. This indicates an internal logic error."
    )]
    RestartLimitExceeded(usize),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod breaker;
pub mod builder;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod glyph;
pub mod halfwidth;
pub mod perf;
pub mod placement;
pub mod scope;
pub mod zone;

// Re-exports for convenience
pub use self::breaker::{BreakKind, BreakOutcome, BreakResult, CandidateLine};
pub use self::builder::{GlyphSpec, ZoneBuilder};
pub use self::config::LayoutConfig;
pub use self::cursor::Cursor;
pub use self::engine::{EllipsisReservation, LayoutEngine};
pub use self::glyph::{FontGlyph, Glyph, ImageGlyph, ShapedGlyph};
pub use self::halfwidth::HalfWidthRegistry;
pub use self::perf::{DebugProfiler, NoOpProfiler, Profiler};
pub use self::placement::{GlyphPlacement, LineRange, PlacedLine};
pub use self::scope::{ScopeStack, StyleScope};
pub use self::zone::{GlyphGroup, ParagraphLine, Zone};

#[cfg(test)]
mod test_utils;


#[cfg(test)]
mod builder_test;
