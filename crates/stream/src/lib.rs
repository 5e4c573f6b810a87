//! Run-stream contract.
//! This crate defines the flat, ordered instruction sequence a markup
//! compiler emits for one block of text, after parsing and shaping but
//! before layout. The layout engine consumes it; nothing here is produced
//! by this workspace.

use kumihan_style::dimension::Margins;
use kumihan_style::modifier::StyleModifier;
use kumihan_style::text::TextAlign;

/// A string type for run content.
pub type TextStr = String;

/// A script-supplied per-character render offset (x, y), e.g. a repositioned
/// Thai tone mark. Offsets displace the drawn glyph; they never change its
/// advance.
pub type RenderOffset = (f32, f32);

/// One instruction in the flat run stream.
#[derive(Debug, Clone, PartialEq)]
pub enum RunInstruction {
    /// Push a style scope. Span-like modifiers additionally open a
    /// non-splittable zone around their glyphs.
    PushStyle(StyleModifier),
    /// Pop the innermost style scope.
    PopStyle,
    /// An explicit paragraph-line break.
    LineBreak,
    /// A run of plain text in the current scope. When `offsets` is present
    /// it carries one render offset per character of `text`.
    Text {
        text: TextStr,
        offsets: Option<Vec<RenderOffset>>,
    },
    /// An inline image occupying a fixed box within the line.
    InlineImage {
        width: f32,
        height: f32,
        margins: Margins,
        offset_y: f32,
    },
    /// A ruby annotation: `text` rendered small above `base`.
    Ruby { base: TextStr, text: TextStr },
    /// Alignment marker. Passed through to the output; never affects
    /// structural decisions.
    Align(TextAlign),
    /// Bidi override marker. Passed through to the output; never affects
    /// structural decisions.
    BidiOverride { force_ltr: bool },
}

impl RunInstruction {
    /// Plain text helper without shaping offsets.
    pub fn text(s: impl Into<TextStr>) -> Self {
        RunInstruction::Text {
            text: s.into(),
            offsets: None,
        }
    }

    /// Returns a string identifier for the instruction kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RunInstruction::PushStyle(_) => "push-style",
            RunInstruction::PopStyle => "pop-style",
            RunInstruction::LineBreak => "line-break",
            RunInstruction::Text { .. } => "text",
            RunInstruction::InlineImage { .. } => "inline-image",
            RunInstruction::Ruby { .. } => "ruby",
            RunInstruction::Align(_) => "align",
            RunInstruction::BidiOverride { .. } => "bidi-override",
        }
    }
}
