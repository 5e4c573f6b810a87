//! Parent-chained style scopes.
//!
//! Each style-push creates an immutable scope node linked to its parent;
//! fields the modifier leaves unset inherit the parent's resolved values,
//! so reading a scope never walks the chain.

use crate::config::LayoutConfig;
use kumihan_style::font::{FontStyle, FontWeight};
use kumihan_style::modifier::StyleModifier;
use kumihan_style::text::{LetterCase, RubyStyle};
use kumihan_types::Color;
use std::sync::Arc;

/// One resolved scope in the chain.
#[derive(Debug, Clone)]
pub struct StyleScope {
    parent: Option<Arc<StyleScope>>,
    /// Whether this scope groups its glyphs into a non-splittable zone.
    pub span_like: bool,
    pub font_size: f32,
    pub font_style: FontStyle,
    pub font_weight: FontWeight,
    pub letter_spacing: f32,
    pub color: Color,
    pub letter_case: LetterCase,
    ruby: RubyStyle,
}

impl StyleScope {
    /// The root scope, from the engine configuration's base values.
    pub fn root(cfg: &LayoutConfig) -> Arc<Self> {
        Arc::new(Self {
            parent: None,
            span_like: false,
            font_size: cfg.base_font_size,
            font_style: FontStyle::default(),
            font_weight: FontWeight::default(),
            letter_spacing: 0.0,
            color: cfg.base_color,
            letter_case: LetterCase::default(),
            ruby: cfg.base_ruby,
        })
    }

    /// A child scope inheriting from `parent`, overridden by `modifier`.
    ///
    /// Percent font sizes resolve against the parent's font size here, at
    /// push time, so the stored value is always absolute.
    pub fn derive(parent: &Arc<StyleScope>, modifier: &StyleModifier) -> Arc<Self> {
        Arc::new(Self {
            parent: Some(parent.clone()),
            span_like: modifier.span_like,
            font_size: modifier
                .font_size
                .map(|d| d.resolve(parent.font_size))
                .unwrap_or(parent.font_size),
            font_style: modifier.font_style.unwrap_or(parent.font_style),
            font_weight: modifier
                .font_weight
                .clone()
                .unwrap_or_else(|| parent.font_weight.clone()),
            letter_spacing: modifier.letter_spacing.unwrap_or(parent.letter_spacing),
            color: modifier.color.unwrap_or(parent.color),
            letter_case: modifier.letter_case.unwrap_or(parent.letter_case),
            ruby: RubyStyle {
                offset: modifier.ruby_offset.unwrap_or(parent.ruby.offset),
                scale: modifier.ruby_scale.unwrap_or(parent.ruby.scale),
            },
        })
    }

    /// The separately resolved ruby parameters for this scope.
    pub fn ruby(&self) -> RubyStyle {
        self.ruby
    }
}

/// The live scope stack during zone building.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    top: Arc<StyleScope>,
}

impl ScopeStack {
    pub fn new(cfg: &LayoutConfig) -> Self {
        Self {
            top: StyleScope::root(cfg),
        }
    }

    pub fn current(&self) -> &Arc<StyleScope> {
        &self.top
    }

    pub fn push(&mut self, modifier: &StyleModifier) {
        self.top = StyleScope::derive(&self.top, modifier);
    }

    /// Pop the innermost scope. A pop on the root scope is a recoverable
    /// caller bug: logged and ignored. Returns the popped scope, or `None`
    /// for the malformed case.
    pub fn pop(&mut self) -> Option<Arc<StyleScope>> {
        match self.top.parent.clone() {
            Some(parent) => {
                let popped = std::mem::replace(&mut self.top, parent);
                Some(popped)
            }
            None => {
                log::warn!("style scope pop without matching push; ignored");
                None
            }
        }
    }

    /// Depth of the chain above the root (0 = only the root scope).
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut scope = &self.top;
        while let Some(parent) = &scope.parent {
            depth += 1;
            scope = parent;
        }
        depth
    }
}
