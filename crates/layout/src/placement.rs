//! The glyph placement emitter: converts a finalized line range into
//! concrete placements.
//!
//! Offsets are line-local: x grows rightward from the line start, y grows
//! downward from the baseline (ruby glyphs get negative y).

use crate::config::LayoutConfig;
use crate::cursor::Cursor;
use crate::glyph::Glyph;
use crate::zone::{GlyphGroup, ParagraphLine};
use kumihan_style::text::TextAlign;
use kumihan_types::Offset;
use serde::{Deserialize, Serialize};

/// Final output record for one rendered glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphPlacement {
    pub glyph: Glyph,
    /// Position within the line (x from line start, y from baseline).
    pub offset: Offset,
    /// A ruby sub-glyph, emitted immediately after its main glyph.
    pub is_ruby: bool,
    /// Present in the structural range but contributing no advance
    /// (trimmed trailing/leading whitespace).
    pub is_zero_width: bool,
    /// The policy renders this line-leading glyph at half width.
    pub half_width_at_line_start: bool,
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub glyphs: Vec<GlyphPlacement>,
    /// Total advance width of the visible content.
    pub width: f32,
    /// Pass-through alignment marker captured from the run stream.
    pub align: TextAlign,
    /// Pass-through bidi override marker captured from the run stream.
    pub force_ltr: Option<bool>,
}

/// The cursor range one output line occupies.
///
/// `start..visible_start` and `visible_end..end` hold structurally attached
/// whitespace; `visible_start..visible_end` is the measured content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineRange {
    pub start: Cursor,
    pub visible_start: Cursor,
    pub visible_end: Cursor,
    pub end: Cursor,
}

/// Walk back from `visible_end` over trailing whitespace to the cursor
/// where the trimmed run begins.
fn trailing_whitespace_start(line: &ParagraphLine, range: &LineRange) -> Cursor {
    let mut c = range.visible_end;
    while c > range.visible_start {
        let Some(prev) = c.previous_element(line) else {
            break;
        };
        match line.glyph_at(prev) {
            Some(g) if g.is_whitespace_or_control() => c = prev,
            _ => break,
        }
    }
    c
}

/// Emit placements for one finalized line range.
pub fn emit_line(line: &ParagraphLine, range: LineRange, cfg: &LayoutConfig) -> PlacedLine {
    let trailing_ws = if cfg.retain_trailing_spaces {
        range.visible_end
    } else {
        trailing_whitespace_start(line, &range)
    };

    let mut glyphs = Vec::new();
    let mut x = 0.0;
    let mut cursor = range.start;

    while cursor < range.end {
        let Some(group) = line.group_at(cursor) else {
            break;
        };

        let leading_skip = cursor < range.visible_start;
        let absorbed = cursor >= range.visible_end && !cfg.retain_trailing_spaces;
        let trimmed = cursor >= trailing_ws && cursor < range.visible_end;
        let zero = leading_skip || absorbed || trimmed;

        let half_at_start = cursor == range.visible_start
            && group
                .main()
                .font()
                .filter(|f| !f.half_width)
                .is_some_and(|f| {
                    line.zone_at(cursor.zone)
                        .rule()
                        .half_width_at_line_start(f.ch)
                });

        let group_advance = group.advance();
        let mut used = if zero { 0.0 } else { group_advance };
        if half_at_start && !zero
            && let Some(f) = group.main().font()
        {
            used -= f.advance / 2.0;
        }

        emit_group(&mut glyphs, group, x, zero, half_at_start);
        x += used;

        match cursor.next_element(line) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    PlacedLine {
        glyphs,
        width: x,
        align: line.align,
        force_ltr: line.force_ltr,
    }
}

/// Emit one group: the main glyph, then its ruby sub-glyphs positioned
/// relative to it (centered over the group span, raised by the group's
/// ruby offset).
fn emit_group(
    out: &mut Vec<GlyphPlacement>,
    group: &GlyphGroup,
    x: f32,
    zero: bool,
    half_at_start: bool,
) {
    let group_advance = group.advance();
    let main = group.main();
    let main_advance = main.advance();

    let main_offset = match main {
        Glyph::Font(_) => Offset::new(x + (group_advance - main_advance) / 2.0, 0.0),
        Glyph::Image(g) => Offset::new(x + g.margins.left, g.offset_y),
        Glyph::Shaped(g) => Offset::new(
            x + (group_advance - main_advance) / 2.0 + g.render_offset.x,
            g.render_offset.y,
        ),
    };

    out.push(GlyphPlacement {
        glyph: main.clone(),
        offset: main_offset,
        is_ruby: false,
        is_zero_width: zero,
        half_width_at_line_start: half_at_start,
    });

    if group.ruby().is_empty() {
        return;
    }
    let ruby_total = group.ruby_advance();
    let mut ruby_x = x + (group_advance - ruby_total) / 2.0;
    let ruby_y = -group.ruby_offset();
    for ruby in group.ruby() {
        out.push(GlyphPlacement {
            glyph: ruby.clone(),
            offset: Offset::new(ruby_x, ruby_y),
            is_ruby: true,
            is_zero_width: zero,
            half_width_at_line_start: false,
        });
        ruby_x += ruby.advance();
    }
}
