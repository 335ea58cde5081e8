//! stag-forest - LaTeX `forest` trees from bracketed tree notation
//!
//! This library parses bracketed trees (`[S [NP] [VP]]`) two at a time into
//! source/target pairs, as used for synchronous tree-adjoining grammar
//! examples, and renders each pair as a LaTeX macro call.
//!
//! # Example
//!
//! ```rust
//! use stag_forest::render;
//!
//! let tex = render("[NP [N dog]] [VP [V barked]]").unwrap();
//! assert_eq!(tex, "\\stagrule{[NP [N dog]]}{[VP [V barked]]}\n");
//! ```

pub mod error;
pub mod parser;
pub mod renderer;
pub mod stylesheet;

pub use error::ParseError;
pub use parser::{parse, InputFormat, Pairs, TreePair};
pub use renderer::{LatexConfig, LatexRenderer, LinkStyle};

use thiserror::Error;

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during parsing
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Input notation
    pub format: InputFormat,
    /// LaTeX output configuration
    pub latex: LatexConfig,
    /// Stylesheet for macro names
    pub stylesheet: Stylesheet,
    /// Debug mode: print every parsed pair to stderr
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input notation
    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the LaTeX configuration
    pub fn with_latex(mut self, config: LatexConfig) -> Self {
        self.latex = config;
        self
    }

    /// Set the stylesheet for macro names
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Build the renderer this configuration describes
    pub fn renderer(&self) -> LatexRenderer {
        LatexRenderer::new(self.latex.clone(), self.stylesheet.clone(), self.format)
    }
}

/// One-line summary of a pair: tree count and the link numbers it uses
pub fn pair_summary(pair: &TreePair) -> String {
    let sides = [&pair.source.expr, &pair.target.expr];
    let trees: usize = sides.iter().map(|expr| expr.tree_count()).sum();
    let links: Vec<String> = sides
        .iter()
        .flat_map(|expr| expr.trees())
        .flat_map(renderer::links::link_numbers)
        .collect();
    format!("  {} trees, links [{}]", trees, links.join(", "))
}

/// Print a parsed pair to stderr
pub fn debug_pair(pair: &TreePair) {
    eprint!("{}", pair);
    eprintln!("{}", pair_summary(pair));
}

/// Render bracket notation to LaTeX with default configuration
///
/// Trees are read two at a time as plain bracket expressions, links are
/// boxed and no preamble is printed.
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render input to LaTeX with custom configuration
///
/// Nothing is returned unless every pair parses.
///
/// # Example
///
/// ```rust
/// use stag_forest::{render_with_config, InputFormat, LatexConfig, LinkStyle, RenderConfig};
///
/// let config = RenderConfig::new()
///     .with_format(InputFormat::Flat)
///     .with_latex(LatexConfig::default().with_link_style(LinkStyle::Circled));
///
/// let tex = render_with_config("[NP(1)]#[N(1)]", config).unwrap();
/// assert_eq!(tex, "\\stagrule{[NP\\circled{1}]}{[N\\circled{1}]}\n");
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    // Parse everything first so that an error leaves no partial output
    let pairs = parse(source, config.format)?;

    if config.debug {
        eprintln!("=== Parsed Pairs ===");
        for pair in &pairs {
            debug_pair(pair);
        }
        eprintln!("====================");
    }

    Ok(config.renderer().render_document(&pairs))
}
