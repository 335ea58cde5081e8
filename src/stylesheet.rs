//! Stylesheets naming the LaTeX macros the renderer emits
//!
//! Every piece of output is a call to a macro playing some role (a pair of
//! trees, an MC-set, a link number). A stylesheet maps those roles to macro
//! names so that documents with their own macro definitions can be targeted
//! without touching the renderer.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Roles a macro can play in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroRole {
    /// Link number in a box
    Boxed,
    /// Link number in a circle
    Circled,
    /// Source/target pair of raw trees (bracket and flat input)
    Rule,
    /// One tree of a composite
    Tree,
    /// MC-set with at least one unnamed side
    McSet,
    /// MC-set with both sides named
    NamedMcSet,
    /// Composite pair, neither side named
    Pair,
    /// Composite pair, source named
    NamedSourcePair,
    /// Composite pair, both sides named
    NamedPair,
}

impl MacroRole {
    pub const ALL: [MacroRole; 9] = [
        MacroRole::Boxed,
        MacroRole::Circled,
        MacroRole::Rule,
        MacroRole::Tree,
        MacroRole::McSet,
        MacroRole::NamedMcSet,
        MacroRole::Pair,
        MacroRole::NamedSourcePair,
        MacroRole::NamedPair,
    ];

    /// Key used for this role in the `[macros]` table
    pub fn key(self) -> &'static str {
        match self {
            MacroRole::Boxed => "boxed",
            MacroRole::Circled => "circled",
            MacroRole::Rule => "rule",
            MacroRole::Tree => "tree",
            MacroRole::McSet => "mcset",
            MacroRole::NamedMcSet => "named-mcset",
            MacroRole::Pair => "pair",
            MacroRole::NamedSourcePair => "named-source-pair",
            MacroRole::NamedPair => "named-pair",
        }
    }

    /// Built-in macro name, as defined by the default preamble
    pub fn default_macro(self) -> &'static str {
        match self {
            MacroRole::Boxed => "boxed",
            MacroRole::Circled => "circled",
            MacroRole::Rule => "stagrule",
            MacroRole::Tree => "stagtree",
            MacroRole::McSet => "mcset",
            MacroRole::NamedMcSet => "namedmcset",
            MacroRole::Pair => "stagpair",
            MacroRole::NamedSourcePair => "namedsrcpair",
            MacroRole::NamedPair => "namedpair",
        }
    }
}

/// A stylesheet mapping macro roles to macro names
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Macro mappings: role key -> macro name without backslash
    pub macros: HashMap<String, String>,
    /// Replacement for the built-in preamble
    pub preamble: Option<String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    macros: HashMap<String, String>,
    preamble: Option<TomlPreamble>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlPreamble {
    text: String,
}

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_toml(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        let macros = parsed
            .macros
            .into_iter()
            .map(|(role, name)| (role, name.trim_start_matches('\\').to_string()))
            .collect();

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            macros,
            preamble: parsed.preamble.map(|p| p.text),
        })
    }

    /// Macro name set by this stylesheet for a role, if any
    pub fn resolve(&self, role: MacroRole) -> Option<&str> {
        self.macros.get(role.key()).map(|s| s.as_str())
    }

    /// Macro name for a role, falling back to the built-in name
    pub fn macro_name(&self, role: MacroRole) -> &str {
        self.resolve(role).unwrap_or_else(|| role.default_macro())
    }

    /// Keys in the `[macros]` table that name no role
    pub fn unknown_roles(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .macros
            .keys()
            .map(|k| k.as_str())
            .filter(|k| !MacroRole::ALL.iter().any(|role| role.key() == *k))
            .collect();
        unknown.sort_unstable();
        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stylesheet_uses_builtin_names() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve(MacroRole::Rule), None);
        assert_eq!(stylesheet.macro_name(MacroRole::Rule), "stagrule");
        assert_eq!(stylesheet.macro_name(MacroRole::Boxed), "boxed");
        assert!(stylesheet.preamble.is_none());
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r#"
[metadata]
name = "Thesis"
description = "Macros from the thesis preamble"

[macros]
rule = "\\treepair"
circled = "linknum"
"#;
        let stylesheet = Stylesheet::from_toml(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Thesis".to_string()));
        assert_eq!(
            stylesheet.description,
            Some("Macros from the thesis preamble".to_string())
        );
        assert_eq!(stylesheet.macro_name(MacroRole::Rule), "treepair");
        assert_eq!(stylesheet.macro_name(MacroRole::Circled), "linknum");
        assert_eq!(stylesheet.macro_name(MacroRole::Boxed), "boxed");
    }

    #[test]
    fn test_parse_toml_without_macros() {
        let toml_str = r#"
[preamble]
text = "\\usepackage{forest}"
"#;
        let stylesheet = Stylesheet::from_toml(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, None);
        assert!(stylesheet.macros.is_empty());
        assert_eq!(stylesheet.preamble.as_deref(), Some("\\usepackage{forest}"));
    }

    #[test]
    fn test_unknown_roles() {
        let toml_str = r#"
[macros]
pair = "p"
zeta = "z"
alpha = "a"
"#;
        let stylesheet = Stylesheet::from_toml(toml_str).expect("Should parse");
        assert_eq!(stylesheet.unknown_roles(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_role_keys_are_distinct() {
        for (i, a) in MacroRole::ALL.iter().enumerate() {
            for b in &MacroRole::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Stylesheet::from_toml(invalid);
        assert!(matches!(result, Err(StylesheetError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_error() {
        let result = Stylesheet::from_file(Path::new("/nonexistent/stylesheet.toml"));
        assert!(matches!(result, Err(StylesheetError::IoError(_))));
    }
}
