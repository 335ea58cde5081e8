//! LaTeX generation from parsed pairs

use crate::parser::{Expr, InputFormat, TreePair};
use crate::stylesheet::{MacroRole, Stylesheet};

use super::links::substitute_links;
use super::preamble::PREAMBLE;
use super::LatexConfig;

/// Renders pairs into LaTeX macro calls, one output unit per pair
#[derive(Debug, Clone)]
pub struct LatexRenderer {
    config: LatexConfig,
    stylesheet: Stylesheet,
    format: InputFormat,
}

impl LatexRenderer {
    pub fn new(config: LatexConfig, stylesheet: Stylesheet, format: InputFormat) -> Self {
        Self {
            config,
            stylesheet,
            format,
        }
    }

    fn call(&self, role: MacroRole, args: &[&str]) -> String {
        let mut out = format!("\\{}", self.stylesheet.macro_name(role));
        for arg in args {
            out.push('{');
            out.push_str(arg);
            out.push('}');
        }
        out
    }

    /// Preamble text, when the configuration asks for it
    pub fn preamble(&self) -> Option<&str> {
        if !self.config.preamble {
            return None;
        }
        Some(self.stylesheet.preamble.as_deref().unwrap_or(PREAMBLE))
    }

    /// Opening of the scaling wrapper (named input only)
    pub fn begin(&self) -> Option<String> {
        match self.format {
            InputFormat::Named => Some(format!("\\begin{{adjustbox}}{{scale={}}}", self.config.scale)),
            InputFormat::Bracket | InputFormat::Flat => None,
        }
    }

    /// Closing of the scaling wrapper (named input only)
    pub fn end(&self) -> Option<String> {
        match self.format {
            InputFormat::Named => Some("\\end{adjustbox}".to_string()),
            InputFormat::Bracket | InputFormat::Flat => None,
        }
    }

    /// Trimmed tree text with its link numbers substituted
    pub fn tree_text(&self, text: &str) -> String {
        substitute_links(
            text.trim(),
            self.stylesheet.macro_name(self.config.link_style.role()),
        )
    }

    /// Render one side's substructure
    pub fn render_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Tree(text) => self.call(MacroRole::Tree, &[self.tree_text(text).as_str()]),
            Expr::Pair(left, right) => self.call(
                MacroRole::McSet,
                &[
                    self.render_expr(left).as_str(),
                    self.render_expr(right).as_str(),
                ],
            ),
            Expr::NamedPair {
                left_name,
                left,
                right_name,
                right,
            } => self.call(
                MacroRole::NamedMcSet,
                &[
                    left_name.as_str(),
                    self.render_expr(left).as_str(),
                    right_name.as_str(),
                    self.render_expr(right).as_str(),
                ],
            ),
        }
    }

    fn rule_side(&self, expr: &Expr) -> String {
        match expr {
            Expr::Tree(text) => self.tree_text(text),
            other => self.render_expr(other),
        }
    }

    /// Render one pair as a single output unit
    pub fn render_pair(&self, pair: &TreePair) -> String {
        match self.format {
            InputFormat::Bracket | InputFormat::Flat => self.call(
                MacroRole::Rule,
                &[
                    self.rule_side(&pair.source.expr).as_str(),
                    self.rule_side(&pair.target.expr).as_str(),
                ],
            ),
            InputFormat::Named => self.render_composite(pair),
        }
    }

    fn render_composite(&self, pair: &TreePair) -> String {
        let source = self.render_expr(&pair.source.expr);
        let target = self.render_expr(&pair.target.expr);
        match (pair.source.name(), pair.target.name()) {
            (Some(source_name), Some(target_name)) => self.call(
                MacroRole::NamedPair,
                &[source_name, source.as_str(), target_name, target.as_str()],
            ),
            (Some(source_name), None) => self.call(
                MacroRole::NamedSourcePair,
                &[source_name, source.as_str(), target.as_str()],
            ),
            // a lone target name has no template and is dropped
            (None, _) => self.call(MacroRole::Pair, &[source.as_str(), target.as_str()]),
        }
    }

    /// Render a whole document: preamble, wrapper and every pair
    pub fn render_document(&self, pairs: &[TreePair]) -> String {
        let mut out = String::new();
        let mut line = |text: &str| {
            out.push_str(text);
            out.push('\n');
        };
        if let Some(preamble) = self.preamble() {
            line(preamble);
        }
        if let Some(begin) = self.begin() {
            line(&begin);
        }
        for pair in pairs {
            line(&self.render_pair(pair));
        }
        if let Some(end) = self.end() {
            line(&end);
        }
        out
    }
}
