//! Line-based `source#target` pairs

use crate::error::ParseError;

use super::ast::{Expr, Named, TreePair};

pub const SEPARATOR: char = '#';

/// Iterator over the non-blank lines of a flat-pair input
#[derive(Debug, Clone)]
pub struct FlatLines<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> FlatLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 0,
        }
    }

    pub(crate) fn resume(text: &'a str, pos: usize, line: usize) -> Self {
        Self { text, pos, line }
    }

    /// Byte offset of the first line not yet read
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of lines read so far, blank ones included
    pub fn line(&self) -> usize {
        self.line
    }
}

impl Iterator for FlatLines<'_> {
    type Item = Result<TreePair, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let len = rest.find('\n').map_or(rest.len(), |i| i + 1);
            let start = self.pos;
            self.pos += len;
            self.line += 1;

            let content = rest[..len].trim_end_matches(['\n', '\r']);
            if content.trim().is_empty() {
                continue;
            }
            return Some(split_line(content, start, self.line));
        }
        None
    }
}

/// Split one line at its separator; fields are kept verbatim
pub fn split_line(content: &str, offset: usize, line: usize) -> Result<TreePair, ParseError> {
    let separators = content.matches(SEPARATOR).count();
    let Some((source, target)) = content.split_once(SEPARATOR).filter(|_| separators == 1) else {
        return Err(ParseError::MalformedLine {
            line,
            span: offset..offset + content.len(),
            separators,
            content: content.to_string(),
        });
    };

    Ok(TreePair {
        source: Named::unnamed(Expr::tree(source)),
        target: Named::unnamed(Expr::tree(target)),
        span: offset..offset + content.len(),
    })
}
