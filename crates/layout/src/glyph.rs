//! The closed set of glyph kinds this engine places.
//!
//! Glyphs are immutable once created; the single exception is the
//! half-width flag, set only through the zone-replacement path when a
//! punctuation correction re-derives the containing zone.

use kumihan_style::dimension::Margins;
use kumihan_style::font::{FontStyle, FontWeight};
use kumihan_types::{Color, Offset, Rect, Size};
use serde::{Deserialize, Serialize};

/// One rendered character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontGlyph {
    pub ch: char,
    pub font_size: f32,
    pub font_style: FontStyle,
    pub font_weight: FontWeight,
    pub color: Color,
    /// Full-width base advance from the metrics provider (pt).
    pub advance: f32,
    /// Fixed letter spacing added after the glyph (pt).
    pub spacing: f32,
    /// Paragraph-unique index assigned by the zone builder.
    pub index: usize,
    /// Renders at half the base advance. Set only via zone replacement.
    pub half_width: bool,
}

impl FontGlyph {
    /// The advance this glyph contributes to its line.
    pub fn advance(&self) -> f32 {
        let base = if self.half_width {
            self.advance / 2.0
        } else {
            self.advance
        };
        base + self.spacing
    }

    pub fn is_whitespace_or_control(&self) -> bool {
        self.ch.is_whitespace() || self.ch.is_control()
    }

    /// A copy with the half-width flag set (the zone-replacement path).
    pub fn at_half_width(&self) -> Self {
        Self {
            half_width: true,
            ..self.clone()
        }
    }
}

/// A fixed box occupying space within the line (an inline image).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGlyph {
    pub size: Size,
    pub margins: Margins,
    /// Vertical shift of the drawn box relative to the baseline.
    pub offset_y: f32,
    pub index: usize,
}

impl ImageGlyph {
    pub fn advance(&self) -> f32 {
        self.margins.left + self.size.width + self.margins.right
    }

    /// The drawn box when the glyph is placed at `offset`.
    pub fn bounds(&self, offset: Offset) -> Rect {
        Rect {
            x: offset.x,
            y: offset.y,
            width: self.size.width,
            height: self.size.height,
        }
    }
}

/// A font glyph carrying script-supplied render offsets (e.g. a
/// repositioned Thai tone mark). Offsets displace the drawn glyph only;
/// the advance is the inner glyph's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapedGlyph {
    pub font: FontGlyph,
    pub render_offset: Offset,
}

/// The closed union of glyph kinds known to this subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Glyph {
    Font(FontGlyph),
    Image(ImageGlyph),
    Shaped(ShapedGlyph),
}

impl Glyph {
    pub fn advance(&self) -> f32 {
        match self {
            Glyph::Font(g) => g.advance(),
            Glyph::Image(g) => g.advance(),
            Glyph::Shaped(g) => g.font.advance(),
        }
    }

    pub fn is_whitespace_or_control(&self) -> bool {
        match self {
            Glyph::Font(g) => g.is_whitespace_or_control(),
            Glyph::Image(_) => false,
            Glyph::Shaped(g) => g.font.is_whitespace_or_control(),
        }
    }

    /// The character this glyph renders, if any.
    pub fn ch(&self) -> Option<char> {
        match self {
            Glyph::Font(g) => Some(g.ch),
            Glyph::Image(_) => None,
            Glyph::Shaped(g) => Some(g.font.ch),
        }
    }

    /// The paragraph-unique index assigned by the zone builder.
    pub fn index(&self) -> usize {
        match self {
            Glyph::Font(g) => g.index,
            Glyph::Image(g) => g.index,
            Glyph::Shaped(g) => g.font.index,
        }
    }

    pub fn font(&self) -> Option<&FontGlyph> {
        match self {
            Glyph::Font(g) => Some(g),
            Glyph::Image(_) => None,
            Glyph::Shaped(g) => Some(&g.font),
        }
    }

    pub fn is_half_width(&self) -> bool {
        self.font().is_some_and(|g| g.half_width)
    }

    /// A copy with the inner font glyph at half width. Images are returned
    /// unchanged (they have no half-width rendition).
    pub fn at_half_width(&self) -> Self {
        match self {
            Glyph::Font(g) => Glyph::Font(g.at_half_width()),
            Glyph::Image(g) => Glyph::Image(g.clone()),
            Glyph::Shaped(g) => Glyph::Shaped(ShapedGlyph {
                font: g.font.at_half_width(),
                render_offset: g.render_offset,
            }),
        }
    }
}
