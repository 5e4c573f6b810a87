use kumihan_style::text::RubyStyle;
use kumihan_types::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Whether whitespace following a line break is kept on the broken line
    /// with its real advance (`true`) or carried structurally but rendered
    /// zero-width (`false`).
    ///
    /// With retention off, a line never starts with whitespace: leading
    /// spaces attach to the line as zero-width glyphs instead.
    ///
    /// Defaults to `false`.
    pub retain_trailing_spaces: bool,

    /// Upper bound on half-width-correction restarts per paragraph, applied
    /// on top of the structural bound (the paragraph's glyph count).
    /// Exceeding the effective ceiling is an internal-logic failure, not a
    /// recoverable condition.
    ///
    /// Defaults to `1024`.
    pub max_restarts: usize,

    /// Font size of the root style scope (pt).
    ///
    /// Defaults to `12.0`.
    pub base_font_size: f32,

    /// Color of the root style scope.
    pub base_color: Color,

    /// Ruby parameters of the root style scope.
    pub base_ruby: RubyStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            retain_trailing_spaces: false,
            max_restarts: 1024,
            base_font_size: 12.0,
            base_color: Color::default(),
            base_ruby: RubyStyle::default(),
        }
    }
}
