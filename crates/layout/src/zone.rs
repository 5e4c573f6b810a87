//! The two-level structural model: non-splittable zones of glyph groups,
//! ordered into paragraph lines.

use crate::cursor::Cursor;
use crate::glyph::Glyph;
use kumihan_style::text::TextAlign;
use kumihan_traits::LineBreakRule;
use std::sync::Arc;

/// One main glyph plus its ordered ruby sub-glyphs.
///
/// Sealed groups never change; the zone-replacement path builds corrected
/// copies instead of mutating.
#[derive(Debug, Clone)]
pub struct GlyphGroup {
    main: Glyph,
    ruby: Vec<Glyph>,
    /// Raise of the ruby glyphs above the baseline, resolved from the scope
    /// that produced this group (pt). Zero when the group has no ruby.
    ruby_offset: f32,
}

impl GlyphGroup {
    pub fn solo(main: Glyph) -> Self {
        Self {
            main,
            ruby: Vec::new(),
            ruby_offset: 0.0,
        }
    }

    pub fn with_ruby(main: Glyph, ruby: Vec<Glyph>, ruby_offset: f32) -> Self {
        Self {
            main,
            ruby,
            ruby_offset,
        }
    }

    pub fn main(&self) -> &Glyph {
        &self.main
    }

    pub fn ruby(&self) -> &[Glyph] {
        &self.ruby
    }

    pub fn ruby_offset(&self) -> f32 {
        self.ruby_offset
    }

    pub fn ruby_advance(&self) -> f32 {
        self.ruby.iter().map(Glyph::advance).sum()
    }

    /// The advance the group contributes: ruby wider than its base widens
    /// the group.
    pub fn advance(&self) -> f32 {
        self.main.advance().max(self.ruby_advance())
    }
}

/// A non-empty run of glyph groups that must never be separated across a
/// line break. The atomic unit of the break search.
#[derive(Debug, Clone)]
pub struct Zone {
    groups: Vec<GlyphGroup>,
    rule: Arc<dyn LineBreakRule>,
}

impl Zone {
    /// Callers (the zone builder, the correction path) guarantee `groups`
    /// is non-empty; empty zones are discarded before construction.
    pub fn new(groups: Vec<GlyphGroup>, rule: Arc<dyn LineBreakRule>) -> Self {
        debug_assert!(!groups.is_empty(), "zones are never empty");
        Self { groups, rule }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_at(&self, i: usize) -> &GlyphGroup {
        &self.groups[i]
    }

    pub fn groups(&self) -> &[GlyphGroup] {
        &self.groups
    }

    /// The line-break policy active for this zone's glyphs.
    pub fn rule(&self) -> &Arc<dyn LineBreakRule> {
        &self.rule
    }

    pub fn first_glyph(&self) -> &Glyph {
        self.groups.first().expect("zones are never empty").main()
    }

    pub fn last_glyph(&self) -> &Glyph {
        self.groups.last().expect("zones are never empty").main()
    }

    pub fn advance(&self) -> f32 {
        self.groups.iter().map(GlyphGroup::advance).sum()
    }

    /// True when every glyph in the zone is whitespace or control.
    pub fn is_whitespace(&self) -> bool {
        self.groups
            .iter()
            .all(|g| g.main().is_whitespace_or_control())
    }

    /// A corrected copy with the glyph at `index` re-derived at half width.
    pub fn with_half_width_glyph(&self, index: usize) -> Self {
        let groups = self
            .groups
            .iter()
            .map(|g| {
                if g.main().index() == index {
                    GlyphGroup {
                        main: g.main().at_half_width(),
                        ruby: g.ruby.clone(),
                        ruby_offset: g.ruby_offset,
                    }
                } else {
                    g.clone()
                }
            })
            .collect();
        Zone::new(groups, self.rule.clone())
    }
}

/// An immutable, randomly-addressable view over one paragraph's zones,
/// plus the pass-through markers captured while building it.
///
/// The one controlled mutation is `replace_zone`, used by the half-width
/// correction path: identity (position in line) is preserved, content is
/// replaced.
#[derive(Debug, Clone)]
pub struct ParagraphLine {
    zones: Vec<Zone>,
    pub align: TextAlign,
    pub force_ltr: Option<bool>,
}

impl ParagraphLine {
    pub fn new(align: TextAlign, force_ltr: Option<bool>) -> Self {
        Self {
            zones: Vec::new(),
            align,
            force_ltr,
        }
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn zone_at(&self, i: usize) -> &Zone {
        &self.zones[i]
    }

    pub fn push_zone(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    /// The one controlled mutation: swap in a corrected zone by index.
    pub fn replace_zone(&mut self, i: usize, zone: Zone) {
        self.zones[i] = zone;
    }

    pub fn end_cursor(&self) -> Cursor {
        Cursor::new(self.zones.len(), 0)
    }

    /// Total main-glyph count (the bound on half-width restarts).
    pub fn glyph_count(&self) -> usize {
        self.zones.iter().map(Zone::len).sum()
    }

    /// The group the cursor points at, `None` at the end cursor.
    pub fn group_at(&self, cursor: Cursor) -> Option<&GlyphGroup> {
        self.zones.get(cursor.zone)?.groups().get(cursor.element)
    }

    /// The main glyph immediately at/after the cursor.
    pub fn glyph_at(&self, cursor: Cursor) -> Option<&Glyph> {
        self.group_at(cursor).map(GlyphGroup::main)
    }

    /// The main glyph immediately before the cursor.
    pub fn glyph_before(&self, cursor: Cursor) -> Option<&Glyph> {
        let prev = cursor.previous_element(self)?;
        self.glyph_at(prev)
    }

    /// Width of the whole line with edge treatment applied: trailing
    /// whitespace in the final zone and leading whitespace in the first
    /// contribute nothing, and an opening glyph the policy renders at half
    /// width at line start contributes half its base advance.
    pub fn total_width(&self) -> f32 {
        let mut width: f32 = self.zones.iter().map(Zone::advance).sum();

        if let Some(first) = self.zones.first() {
            for group in first.groups() {
                if group.main().is_whitespace_or_control() {
                    width -= group.advance();
                } else {
                    break;
                }
            }
            let lead = first.first_glyph();
            if let Some(font) = lead.font()
                && !font.half_width
                && first.rule().half_width_at_line_start(font.ch)
            {
                width -= font.advance / 2.0;
            }
        }
        if let Some(last) = self.zones.last() {
            for group in last.groups().iter().rev() {
                if group.main().is_whitespace_or_control() {
                    width -= group.advance();
                } else {
                    break;
                }
            }
        }
        width.max(0.0)
    }
}
