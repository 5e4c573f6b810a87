//! Paragraph orchestration: the bounded restart fixed point around the
//! line-break search, and the multi-paragraph driver.

use crate::breaker::{find_break, BreakOutcome};
use crate::builder::ZoneBuilder;
use crate::config::LayoutConfig;
use crate::cursor::Cursor;
use crate::halfwidth::HalfWidthRegistry;
use crate::perf::{NoOpProfiler, Profiler};
use crate::placement::{emit_line, LineRange, PlacedLine};
use crate::zone::ParagraphLine;
use crate::LayoutError;
use kumihan_stream::RunInstruction;
use kumihan_traits::{GlyphMetrics, LineBreakRule};
use std::sync::Arc;

/// Reserves width on one specific output line for a trailing ellipsis
/// glyph. The index counts output lines across the whole driver call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsisReservation {
    pub line_index: usize,
    pub width_offset: f32,
}

/// The layout engine: owns the configuration and the collaborator seams,
/// and runs the zone build → line break → placement pipeline to completion
/// for each paragraph.
///
/// Purely functional per call: no state survives between `layout` calls,
/// and each paragraph gets an independent half-width registry.
pub struct LayoutEngine {
    cfg: LayoutConfig,
    rule: Arc<dyn LineBreakRule>,
    metrics: Arc<dyn GlyphMetrics>,
    profiler: Arc<dyn Profiler>,
}

impl LayoutEngine {
    pub fn new(rule: Arc<dyn LineBreakRule>, metrics: Arc<dyn GlyphMetrics>) -> Self {
        Self {
            cfg: LayoutConfig::default(),
            rule,
            metrics,
            profiler: Arc::new(NoOpProfiler),
        }
    }

    pub fn with_config(mut self, cfg: LayoutConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn with_profiler(mut self, profiler: Arc<dyn Profiler>) -> Self {
        self.profiler = profiler;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.cfg
    }

    /// A zone builder wired to this engine's rule and metrics.
    pub fn builder(&self) -> ZoneBuilder {
        ZoneBuilder::new(&self.cfg, self.rule.clone(), self.metrics.clone())
    }

    /// Lay out a whole run stream against a width budget.
    ///
    /// Paragraphs (explicit-break-delimited lines) are processed
    /// independently and their output lines concatenated.
    pub fn layout(
        &self,
        stream: &[RunInstruction],
        budget: f32,
        ellipsis: Option<EllipsisReservation>,
    ) -> Result<Vec<PlacedLine>, LayoutError> {
        let mut builder = self.builder();
        for instruction in stream {
            builder.process(instruction);
        }
        let mut lines = builder.build();

        let mut out = Vec::new();
        for line in &mut lines {
            if line.zone_count() == 0 {
                continue;
            }
            let mut registry = HalfWidthRegistry::new();
            let placed =
                self.layout_paragraph(line, budget, &mut registry, out.len(), ellipsis.as_ref())?;
            out.extend(placed);
        }
        Ok(out)
    }

    /// Lay out one paragraph: iterate the break search, restarting from the
    /// paragraph beginning whenever a half-width discovery invalidates the
    /// widths measured so far.
    ///
    /// The registry persists across this paragraph's restart attempts (it
    /// only grows, which bounds the fixed point); callers running multiple
    /// paragraphs must pass each its own instance. A pre-seeded registry
    /// reproduces the corrected layout directly.
    pub fn layout_paragraph(
        &self,
        line: &mut ParagraphLine,
        budget: f32,
        registry: &mut HalfWidthRegistry,
        first_line_index: usize,
        ellipsis: Option<&EllipsisReservation>,
    ) -> Result<Vec<PlacedLine>, LayoutError> {
        #[cfg(feature = "profiling")]
        let started = instant::Instant::now();

        apply_half_width_corrections(line, registry);

        // Defensive ceiling: the registry grows by one glyph per restart,
        // so glyph count bounds the fixed point structurally.
        let ceiling = self.cfg.max_restarts.min(line.glyph_count().max(1));
        let mut restarts = 0usize;

        let result = 'attempt: loop {
            let mut out: Vec<PlacedLine> = Vec::new();
            let mut cursor = Cursor::start();

            while !cursor.is_at_end(line) {
                let start = cursor;
                let visible_start = if self.cfg.retain_trailing_spaces {
                    start
                } else {
                    skip_whitespace_zones(line, start)
                };

                if visible_start.is_at_end(line) {
                    // Only whitespace remains; attach it zero-width.
                    let end = line.end_cursor();
                    out.push(emit_line(
                        line,
                        LineRange {
                            start,
                            visible_start: end,
                            visible_end: end,
                            end,
                        },
                        &self.cfg,
                    ));
                    cursor = end;
                    continue;
                }

                let line_index = first_line_index + out.len();
                let reserve = ellipsis
                    .filter(|e| e.line_index == line_index)
                    .map(|e| e.width_offset)
                    .unwrap_or(0.0);

                match find_break(line, visible_start, budget - reserve, registry) {
                    BreakOutcome::HalfWidthDiscovered(index) => {
                        // Earlier width sums are now wrong: discard all
                        // progress for this paragraph and start over with
                        // the corrected geometry.
                        registry.register(index);
                        apply_half_width_corrections(line, registry);
                        restarts += 1;
                        if restarts > ceiling {
                            break 'attempt Err(LayoutError::RestartLimitExceeded(ceiling));
                        }
                        self.profiler.count_restart();
                        log::debug!(
                            "paragraph restart {}: {} half-width correction(s)",
                            restarts,
                            registry.len()
                        );
                        continue 'attempt;
                    }
                    BreakOutcome::Break(found) => {
                        out.push(emit_line(
                            line,
                            LineRange {
                                start,
                                visible_start,
                                visible_end: found.to,
                                end: found.absorbed_to,
                            },
                            &self.cfg,
                        ));
                        cursor = found.absorbed_to;
                    }
                }
            }

            break 'attempt Ok(out);
        };

        #[cfg(feature = "profiling")]
        self.profiler.record("paragraph", started.elapsed());

        result
    }
}

/// Advance past whitespace-only zones.
fn skip_whitespace_zones(line: &ParagraphLine, mut cursor: Cursor) -> Cursor {
    while !cursor.is_at_end(line) && line.zone_at(cursor.zone).is_whitespace() {
        match cursor.next_zone_boundary(line) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    cursor
}

/// Re-derive the zones containing registered glyphs that are not yet
/// flagged: corrected elements, identity preserved.
fn apply_half_width_corrections(line: &mut ParagraphLine, registry: &HalfWidthRegistry) {
    for index in registry.iter() {
        for zi in 0..line.zone_count() {
            let zone = line.zone_at(zi);
            let needs_correction = zone
                .groups()
                .iter()
                .any(|g| g.main().index() == index && !g.main().is_half_width());
            if needs_correction {
                let corrected = zone.with_half_width_glyph(index);
                line.replace_zone(zi, corrected);
                break;
            }
        }
    }
}
