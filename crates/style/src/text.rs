use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

/// Letter-case transformation applied to text runs inside a style scope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum LetterCase {
    #[default]
    None,
    Upper,
    Lower,
}

impl LetterCase {
    /// Apply the transformation to a single character.
    ///
    /// Multi-character case expansions (e.g. U+00DF) keep only the first
    /// mapped character; this engine places one glyph per input character.
    pub fn apply(self, ch: char) -> char {
        match self {
            LetterCase::None => ch,
            LetterCase::Upper => ch.to_uppercase().next().unwrap_or(ch),
            LetterCase::Lower => ch.to_lowercase().next().unwrap_or(ch),
        }
    }
}

/// Ruby annotation parameters resolved from a style scope.
///
/// `offset` raises ruby glyphs above the main glyph's baseline (pt);
/// `scale` sizes ruby glyphs relative to the main font size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RubyStyle {
    pub offset: f32,
    pub scale: f32,
}

impl Default for RubyStyle {
    fn default() -> Self {
        Self {
            offset: 0.0,
            scale: 0.5,
        }
    }
}
