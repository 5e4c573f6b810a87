//! The style modifier record carried by style-push instructions.

use crate::dimension::Dimension;
use crate::font::{FontStyle, FontWeight};
use crate::text::LetterCase;
use kumihan_types::Color;
use serde::{Deserialize, Serialize};

/// A partial style override pushed onto the scope stack.
///
/// Every field is optional; unset fields inherit from the parent scope.
/// `span_like` marks modifiers that additionally group their glyphs into a
/// single non-splittable zone (emphasis spans, quotation spans), as opposed
/// to pure appearance changes (a color swap) that leave breaking unaffected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleModifier {
    pub span_like: bool,
    pub font_size: Option<Dimension>,
    pub font_style: Option<FontStyle>,
    pub font_weight: Option<FontWeight>,
    /// Fixed extra advance added after every glyph in the scope (pt).
    pub letter_spacing: Option<f32>,
    pub color: Option<Color>,
    pub letter_case: Option<LetterCase>,
    /// Raise of ruby glyphs above the main baseline (pt).
    pub ruby_offset: Option<f32>,
    /// Ruby glyph size relative to the main font size.
    pub ruby_scale: Option<f32>,
}

impl StyleModifier {
    /// A span-like modifier with no field overrides (pure grouping).
    pub fn span() -> Self {
        Self {
            span_like: true,
            ..Default::default()
        }
    }

    pub fn with_font_size(mut self, size: Dimension) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_letter_case(mut self, case: LetterCase) -> Self {
        self.letter_case = Some(case);
        self
    }

    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    /// True if no field is overridden (the modifier only groups or scopes).
    pub fn is_empty(&self) -> bool {
        self.font_size.is_none()
            && self.font_style.is_none()
            && self.font_weight.is_none()
            && self.letter_spacing.is_none()
            && self.color.is_none()
            && self.letter_case.is_none()
            && self.ruby_offset.is_none()
            && self.ruby_scale.is_none()
    }
}
