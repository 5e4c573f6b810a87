pub mod metrics;
pub mod rule;

pub use metrics::{FixedMetrics, GlyphMetrics, MetricsError, TableMetrics};
pub use rule::{JapaneseRule, LineBreakRule, PermissiveRule};
