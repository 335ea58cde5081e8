//! Configuration for LaTeX rendering

use crate::stylesheet::MacroRole;

/// How link numbers like `(1)` are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStyle {
    #[default]
    Boxed,
    Circled,
}

impl LinkStyle {
    /// Stylesheet role holding the macro for this style
    pub fn role(self) -> MacroRole {
        match self {
            LinkStyle::Boxed => MacroRole::Boxed,
            LinkStyle::Circled => MacroRole::Circled,
        }
    }
}

/// Configuration options for LaTeX output
#[derive(Debug, Clone, PartialEq)]
pub struct LatexConfig {
    /// Presentation of link numbers
    pub link_style: LinkStyle,

    /// Scale factor of the whole figure (named input only)
    pub scale: f64,

    /// Whether to print the preamble of macro definitions first
    pub preamble: bool,
}

impl Default for LatexConfig {
    fn default() -> Self {
        Self {
            link_style: LinkStyle::Boxed,
            scale: 0.6,
            preamble: false,
        }
    }
}

impl LatexConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the link number presentation
    pub fn with_link_style(mut self, style: LinkStyle) -> Self {
        self.link_style = style;
        self
    }

    /// Set the figure scale factor
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set whether the preamble is printed
    pub fn with_preamble(mut self, preamble: bool) -> Self {
        self.preamble = preamble;
        self
    }
}
