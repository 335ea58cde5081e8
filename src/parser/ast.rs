//! Parsed tree expressions

use std::fmt;

pub use crate::error::Span;

/// Input notation, selected by the caller and never auto-detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Plain bracket expressions, taken two at a time
    #[default]
    Bracket,
    /// Optionally named expressions and `{ ... }` MC-sets, taken two at a time
    Named,
    /// One `source#target` pair per line
    Flat,
}

/// The substructure of one side of a pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A single bracket expression, verbatim
    Tree(String),
    /// MC-set where at least one side was unnamed
    Pair(Box<Expr>, Box<Expr>),
    /// MC-set where both sides carried a name
    NamedPair {
        left_name: String,
        left: Box<Expr>,
        right_name: String,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn tree(text: impl Into<String>) -> Self {
        Expr::Tree(text.into())
    }

    /// Number of bracket trees beneath this expression
    pub fn tree_count(&self) -> usize {
        match self {
            Expr::Tree(_) => 1,
            Expr::Pair(left, right) | Expr::NamedPair { left, right, .. } => {
                left.tree_count() + right.tree_count()
            }
        }
    }

    /// Text of every bracket tree beneath this expression, left to right
    pub fn trees(&self) -> Vec<&str> {
        match self {
            Expr::Tree(text) => vec![text.as_str()],
            Expr::Pair(left, right) | Expr::NamedPair { left, right, .. } => {
                let mut trees = left.trees();
                trees.extend(right.trees());
                trees
            }
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Expr::Tree(text) => writeln!(f, "{}tree {}", indent, text.trim()),
            Expr::Pair(left, right) => {
                writeln!(f, "{}mc-set", indent)?;
                left.write_indented(f, depth + 1)?;
                right.write_indented(f, depth + 1)
            }
            Expr::NamedPair {
                left_name,
                left,
                right_name,
                right,
            } => {
                writeln!(f, "{}named mc-set", indent)?;
                writeln!(f, "{}  {}:", indent, left_name)?;
                left.write_indented(f, depth + 2)?;
                writeln!(f, "{}  {}:", indent, right_name)?;
                right.write_indented(f, depth + 2)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// An expression with its optional name label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Named {
    pub name: Option<String>,
    pub expr: Expr,
}

impl Named {
    pub fn new(name: Option<&str>, expr: Expr) -> Self {
        Self {
            name: name.map(str::to_string),
            expr,
        }
    }

    pub fn unnamed(expr: Expr) -> Self {
        Self { name: None, expr }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// One source/target pair, the unit of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePair {
    pub source: Named,
    pub target: Named,
    /// Byte range from the start of the source to the end of the target
    pub span: Span,
}

impl fmt::Display for TreePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "pair {:?}", self.span)?;
        for (role, side) in [("source", &self.source), ("target", &self.target)] {
            match side.name() {
                Some(name) => writeln!(f, "  {} {}:", role, name)?,
                None => writeln!(f, "  {}:", role)?,
            }
            side.expr.write_indented(f, 2)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_count() {
        let expr = Expr::Pair(
            Box::new(Expr::tree("[A]")),
            Box::new(Expr::NamedPair {
                left_name: "a".to_string(),
                left: Box::new(Expr::tree("[B]")),
                right_name: "b".to_string(),
                right: Box::new(Expr::tree("[C]")),
            }),
        );
        assert_eq!(expr.tree_count(), 3);
    }

    #[test]
    fn test_trees_in_order() {
        let expr = Expr::Pair(Box::new(Expr::tree("[A]")), Box::new(Expr::tree("[B]")));
        assert_eq!(expr.trees(), vec!["[A]", "[B]"]);
        assert_eq!(expr.trees().len(), expr.tree_count());
    }

    #[test]
    fn test_display_pair() {
        let pair = TreePair {
            source: Named::new(Some("alpha"), Expr::tree("[S [NP] [VP]]")),
            target: Named::unnamed(Expr::tree(" [S] ")),
            span: 0..20,
        };
        assert_eq!(
            pair.to_string(),
            "pair 0..20\n  source alpha:\n    tree [S [NP] [VP]]\n  target:\n    tree [S]\n"
        );
    }

    #[test]
    fn test_default_format_is_bracket() {
        assert_eq!(InputFormat::default(), InputFormat::Bracket);
    }
}
