pub mod dimension;
pub mod font;
pub mod modifier;
pub mod parsers;
pub mod text;

pub use dimension::{Dimension, Margins};
pub use font::{FontStyle, FontWeight};
pub use modifier::StyleModifier;
pub use parsers::StyleParseError;
pub use text::{LetterCase, RubyStyle, TextAlign};
