//! Error types for parsing bracket notation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unbalanced brackets, or no tree where one was expected
    #[error("malformed tree at {span:?}: {message}")]
    MalformedTree { span: Span, message: String },

    /// MC-set without its closing brace after two expressions
    #[error("unbalanced MC-set at {span:?}: expected '}}', found {found}")]
    UnbalancedMcSet { span: Span, found: String },

    /// Flat-pair line without exactly one separator
    #[error("malformed line {line}: expected exactly one '#', found {separators} in {content:?}")]
    MalformedLine {
        line: usize,
        span: Span,
        separators: usize,
        content: String,
    },

    /// Odd number of top-level expressions
    #[error("source expression at {span:?} has no matching target")]
    InputCount { span: Span },
}

impl ParseError {
    pub(crate) fn expected_tree(offset: usize, found: Option<char>) -> Self {
        ParseError::MalformedTree {
            span: offset..offset + found.map_or(0, char::len_utf8),
            message: format!("expected '[', found {}", describe(found)),
        }
    }

    /// Short name of the failure kind, used as the report headline
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::MalformedTree { .. } => "malformed tree",
            ParseError::UnbalancedMcSet { .. } => "unbalanced MC-set",
            ParseError::MalformedLine { .. } => "malformed line",
            ParseError::InputCount { .. } => "odd number of expressions",
        }
    }

    /// Byte range of the input the error points at
    pub fn span(&self) -> Span {
        match self {
            ParseError::MalformedTree { span, .. }
            | ParseError::UnbalancedMcSet { span, .. }
            | ParseError::MalformedLine { span, .. }
            | ParseError::InputCount { span } => span.clone(),
        }
    }

    fn label(&self) -> String {
        match self {
            ParseError::MalformedTree { message, .. } => message.clone(),
            ParseError::UnbalancedMcSet { found, .. } => {
                format!("expected '}}' after two expressions, found {}", found)
            }
            ParseError::MalformedLine { separators, .. } => {
                format!("expected exactly one '#', found {}", separators)
            }
            ParseError::InputCount { .. } => {
                "this source has no target; the input must hold an even number of trees"
                    .to_string()
            }
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        // ariadne counts characters, spans count bytes
        let span = self.span();
        let total = source.chars().count();
        let end = char_offset(source, span.end)
            .max(char_offset(source, span.start) + 1)
            .min(total);
        let start = char_offset(source, span.start).min(end.saturating_sub(1));

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, start)
            .with_message(self.kind())
            .with_label(
                Label::new((filename, start..end))
                    .with_message(self.label())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, self),
        }
    }
}

/// Describe a lookahead character for error messages
pub(crate) fn describe(found: Option<char>) -> String {
    match found {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}

fn char_offset(source: &str, byte: usize) -> usize {
    let byte = byte.min(source.len());
    source
        .char_indices()
        .take_while(|(i, _)| *i < byte)
        .count()
}
