//! The zone builder: converts the flat run stream into the
//! `ParagraphLine → Zone → GlyphGroup → Glyph` structure.

use crate::config::LayoutConfig;
use crate::glyph::{FontGlyph, Glyph, ImageGlyph, ShapedGlyph};
use crate::scope::ScopeStack;
use crate::zone::{GlyphGroup, ParagraphLine, Zone};
use kumihan_stream::RunInstruction;
use kumihan_style::dimension::Margins;
use kumihan_style::modifier::StyleModifier;
use kumihan_style::text::TextAlign;
use kumihan_traits::{GlyphMetrics, LineBreakRule};
use kumihan_types::{Offset, Size};
use std::sync::Arc;

/// Specification of one main glyph to add.
#[derive(Debug, Clone, PartialEq)]
pub enum GlyphSpec {
    Char {
        ch: char,
        render_offset: Option<Offset>,
    },
    Image {
        width: f32,
        height: f32,
        margins: Margins,
        offset_y: f32,
    },
}

/// Collects the main and ruby glyphs of the currently open ruby scope.
#[derive(Debug, Default)]
struct OpenRubyGroup {
    mains: Vec<Glyph>,
    rubies: Vec<Glyph>,
    ruby_offset: f32,
}

/// Incremental builder from run instructions to paragraph lines.
///
/// Scope nesting is a stack; zones and groups seal bottom-up exactly once,
/// and empty groups/zones are silently discarded rather than emitted.
pub struct ZoneBuilder {
    rule: Arc<dyn LineBreakRule>,
    metrics: Arc<dyn GlyphMetrics>,
    scopes: ScopeStack,
    lines: Vec<ParagraphLine>,
    open_zone: Option<Vec<GlyphGroup>>,
    open_ruby: Option<OpenRubyGroup>,
    /// Open span-like scopes (ruby scopes included).
    span_depth: usize,
    ruby_depth: usize,
    next_index: usize,
    current_align: TextAlign,
    current_ltr: Option<bool>,
}

impl ZoneBuilder {
    pub fn new(
        cfg: &LayoutConfig,
        rule: Arc<dyn LineBreakRule>,
        metrics: Arc<dyn GlyphMetrics>,
    ) -> Self {
        Self {
            rule,
            metrics,
            scopes: ScopeStack::new(cfg),
            lines: vec![ParagraphLine::new(TextAlign::default(), None)],
            open_zone: None,
            open_ruby: None,
            span_depth: 0,
            ruby_depth: 0,
            next_index: 0,
            current_align: TextAlign::default(),
            current_ltr: None,
        }
    }

    /// Feed one run instruction.
    pub fn process(&mut self, instruction: &RunInstruction) {
        match instruction {
            RunInstruction::PushStyle(modifier) => self.push_modifier(modifier),
            RunInstruction::PopStyle => self.pop_modifier(),
            RunInstruction::LineBreak => self.add_line_break(),
            RunInstruction::Text { text, offsets } => {
                for (i, ch) in text.chars().enumerate() {
                    let render_offset = offsets
                        .as_ref()
                        .and_then(|v| v.get(i))
                        .map(|&(x, y)| Offset::new(x, y));
                    self.add_main_glyph(GlyphSpec::Char { ch, render_offset });
                }
            }
            RunInstruction::InlineImage {
                width,
                height,
                margins,
                offset_y,
            } => self.add_main_glyph(GlyphSpec::Image {
                width: *width,
                height: *height,
                margins: *margins,
                offset_y: *offset_y,
            }),
            RunInstruction::Ruby { base, text } => {
                self.start_ruby(&StyleModifier::span());
                for ch in base.chars() {
                    self.add_main_glyph(GlyphSpec::Char {
                        ch,
                        render_offset: None,
                    });
                }
                for ch in text.chars() {
                    self.add_ruby_glyph(ch);
                }
                self.end_ruby();
            }
            RunInstruction::Align(align) => self.set_alignment(*align),
            RunInstruction::BidiOverride { force_ltr } => self.set_bidi_override(*force_ltr),
        }
    }

    pub fn push_modifier(&mut self, modifier: &StyleModifier) {
        self.scopes.push(modifier);
        if modifier.span_like {
            self.span_depth += 1;
            if self.open_zone.is_none() {
                self.open_zone = Some(Vec::new());
            }
        }
    }

    pub fn pop_modifier(&mut self) {
        let Some(popped) = self.scopes.pop() else {
            return;
        };
        if popped.span_like {
            self.span_depth = self.span_depth.saturating_sub(1);
            if self.span_depth == 0 && self.ruby_depth == 0 {
                self.seal_open_ruby();
                self.seal_open_zone();
            }
        }
    }

    /// Enter a ruby scope. Mirrors span semantics, additionally collecting
    /// ruby sub-glyphs until the matching `end_ruby`.
    pub fn start_ruby(&mut self, modifier: &StyleModifier) {
        // Nested ruby is not meaningful; seal any group already collecting.
        self.seal_open_ruby();
        let mut span_modifier = modifier.clone();
        span_modifier.span_like = true;
        self.scopes.push(&span_modifier);
        self.span_depth += 1;
        self.ruby_depth += 1;
        if self.open_zone.is_none() {
            self.open_zone = Some(Vec::new());
        }
        let ruby_offset = self.scopes.current().ruby().offset;
        self.open_ruby = Some(OpenRubyGroup {
            ruby_offset,
            ..Default::default()
        });
    }

    /// Close the innermost ruby scope, sealing the collected
    /// (main, ruby-list) groups into the open zone.
    pub fn end_ruby(&mut self) {
        if self.ruby_depth == 0 {
            log::warn!("end_ruby without matching start_ruby; ignored");
            return;
        }
        self.seal_open_ruby();
        self.ruby_depth -= 1;
        self.span_depth = self.span_depth.saturating_sub(1);
        self.scopes.pop();
        if self.span_depth == 0 && self.ruby_depth == 0 {
            self.seal_open_zone();
        }
    }

    /// Add one main glyph in the current scope.
    ///
    /// Outside any span/ruby scope, the glyph is emitted straight to the
    /// line as a minimal one-element zone (the fast path for plain runs).
    pub fn add_main_glyph(&mut self, spec: GlyphSpec) {
        let glyph = self.make_glyph(spec);
        if let Some(open) = &mut self.open_ruby {
            open.mains.push(glyph);
        } else if let Some(zone) = &mut self.open_zone {
            zone.push(GlyphGroup::solo(glyph));
        } else {
            let zone = Zone::new(vec![GlyphGroup::solo(glyph)], self.rule.clone());
            self.current_line().push_zone(zone);
        }
    }

    /// Add one ruby sub-glyph to the open group. No-op outside ruby scope.
    pub fn add_ruby_glyph(&mut self, ch: char) {
        let scope = self.scopes.current().clone();
        let ruby = scope.ruby();
        let Some(open) = &mut self.open_ruby else {
            log::warn!("ruby glyph '{}' outside a ruby scope; ignored", ch);
            return;
        };
        let size = scope.font_size * ruby.scale;
        let ch = scope.letter_case.apply(ch);
        let glyph = Glyph::Font(FontGlyph {
            ch,
            font_size: size,
            font_style: scope.font_style,
            font_weight: scope.font_weight.clone(),
            color: scope.color,
            advance: self.metrics.advance(ch, size),
            spacing: 0.0,
            index: self.next_index,
            half_width: false,
        });
        self.next_index += 1;
        open.rubies.push(glyph);
    }

    /// Start a new paragraph line. Explicit breaks inside a span/ruby
    /// scope are illegal and ignored.
    pub fn add_line_break(&mut self) {
        if self.span_depth > 0 || self.ruby_depth > 0 {
            log::warn!("line break inside a non-splittable region; ignored");
            return;
        }
        self.lines
            .push(ParagraphLine::new(self.current_align, self.current_ltr));
    }

    pub fn set_alignment(&mut self, align: TextAlign) {
        self.current_align = align;
        self.current_line().align = align;
    }

    pub fn set_bidi_override(&mut self, force_ltr: bool) {
        self.current_ltr = Some(force_ltr);
        self.current_line().force_ltr = Some(force_ltr);
    }

    /// Snapshot of the sealed lines and zones. The builder stays usable;
    /// callers may keep accumulating afterwards.
    pub fn build(&self) -> Vec<ParagraphLine> {
        self.lines.clone()
    }

    /// Total glyphs created so far (mains and rubies).
    pub fn glyph_count(&self) -> usize {
        self.next_index
    }

    // --- Internals ---

    fn current_line(&mut self) -> &mut ParagraphLine {
        self.lines.last_mut().expect("builder always has a line")
    }

    fn make_glyph(&mut self, spec: GlyphSpec) -> Glyph {
        let index = self.next_index;
        self.next_index += 1;
        match spec {
            GlyphSpec::Char { ch, render_offset } => {
                let scope = self.scopes.current();
                let ch = scope.letter_case.apply(ch);
                let font = FontGlyph {
                    ch,
                    font_size: scope.font_size,
                    font_style: scope.font_style,
                    font_weight: scope.font_weight.clone(),
                    color: scope.color,
                    advance: self.metrics.advance(ch, scope.font_size),
                    spacing: scope.letter_spacing,
                    index,
                    half_width: false,
                };
                match render_offset {
                    Some(render_offset) => Glyph::Shaped(ShapedGlyph { font, render_offset }),
                    None => Glyph::Font(font),
                }
            }
            GlyphSpec::Image {
                width,
                height,
                margins,
                offset_y,
            } => Glyph::Image(ImageGlyph {
                size: Size::new(width, height),
                margins,
                offset_y,
                index,
            }),
        }
    }

    /// Seal the open ruby group, distributing collected ruby glyphs across
    /// the base glyphs by even division (earlier groups take the extras).
    /// An empty group is discarded rather than emitted.
    fn seal_open_ruby(&mut self) {
        let Some(open) = self.open_ruby.take() else {
            return;
        };
        if open.mains.is_empty() {
            if !open.rubies.is_empty() {
                log::warn!("ruby glyphs with no base glyphs; discarded");
            }
            return;
        }
        let zone = self
            .open_zone
            .as_mut()
            .expect("ruby scope always has an open zone");

        let base_count = open.mains.len();
        let per_base = open.rubies.len() / base_count;
        let extras = open.rubies.len() % base_count;
        let mut rubies = open.rubies.into_iter();
        for (i, main) in open.mains.into_iter().enumerate() {
            let take = per_base + usize::from(i < extras);
            let sub: Vec<Glyph> = rubies.by_ref().take(take).collect();
            zone.push(GlyphGroup::with_ruby(main, sub, open.ruby_offset));
        }
    }

    /// Seal the open zone into the current line, discarding it if empty.
    fn seal_open_zone(&mut self) {
        if let Some(groups) = self.open_zone.take()
            && !groups.is_empty()
        {
            let zone = Zone::new(groups, self.rule.clone());
            self.current_line().push_zone(zone);
        }
    }
}
