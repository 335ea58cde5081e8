//! Walking the input one source/target pair at a time

use std::borrow::Cow;

use crate::error::ParseError;

use super::ast::{Expr, InputFormat, Named, Span, TreePair};
use super::extract::extract_tree;
use super::flat::FlatLines;
use super::named::{normalize_whitespace, parse_named};
use super::stream::Stream;

/// Lazy iterator over the pairs of an input.
///
/// Each item is parsed completely before it is yielded, so a caller that
/// emits pairs as they arrive never emits half a pair. After the first error
/// the iterator is finished.
///
/// # Example
///
/// ```rust
/// use stag_forest::parser::{InputFormat, Pairs};
///
/// let mut pairs = Pairs::new("[A] [B]\n[C] [D]", InputFormat::Bracket);
/// assert!(pairs.next().unwrap().is_ok());
/// assert!(pairs.next().unwrap().is_ok());
/// assert!(pairs.next().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    text: Cow<'a, str>,
    format: InputFormat,
    pos: usize,
    line: usize,
    failed: bool,
}

impl<'a> Pairs<'a> {
    pub fn new(source: &'a str, format: InputFormat) -> Self {
        let text = match format {
            InputFormat::Named => normalize_whitespace(source),
            InputFormat::Bracket | InputFormat::Flat => Cow::Borrowed(source),
        };
        Self {
            text,
            format,
            pos: 0,
            line: 0,
            failed: false,
        }
    }

    fn next_flat(&mut self) -> Option<Result<TreePair, ParseError>> {
        let mut lines = FlatLines::resume(self.text.as_ref(), self.pos, self.line);
        let item = lines.next();
        self.pos = lines.offset();
        self.line = lines.line();
        item
    }

    fn next_expressions(&mut self) -> Option<Result<TreePair, ParseError>> {
        let stream = Stream::at(self.text.as_ref(), self.pos);
        if stream.is_exhausted() {
            return None;
        }

        let result = parse_pair(stream, self.format);
        if let Ok((rest, _)) = &result {
            self.pos = rest.offset();
        }
        Some(result.map(|(_, pair)| pair))
    }
}

impl Iterator for Pairs<'_> {
    type Item = Result<TreePair, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = match self.format {
            InputFormat::Flat => self.next_flat(),
            InputFormat::Bracket | InputFormat::Named => self.next_expressions(),
        }?;
        if item.is_err() {
            self.failed = true;
        }
        Some(item)
    }
}

fn parse_pair(stream: Stream<'_>, format: InputFormat) -> Result<(Stream<'_>, TreePair), ParseError> {
    let (stream, source, source_span) = parse_side(stream, format)?;
    if stream.is_exhausted() {
        return Err(ParseError::InputCount { span: source_span });
    }
    let (stream, target, target_span) = parse_side(stream, format)?;

    Ok((
        stream,
        TreePair {
            source,
            target,
            span: source_span.start..target_span.end,
        },
    ))
}

fn parse_side(stream: Stream<'_>, format: InputFormat) -> Result<(Stream<'_>, Named, Span), ParseError> {
    let stream = stream.skip_whitespace();
    let start = stream.offset();
    let (rest, named) = match format {
        InputFormat::Named => {
            let (name, rest, expr) = parse_named(stream)?;
            (rest, Named::new(name, expr))
        }
        _ => {
            let (rest, tree) = extract_tree(stream)?;
            (rest, Named::unnamed(Expr::tree(tree)))
        }
    };
    Ok((rest, named, start..rest.offset()))
}

/// Parse every pair of `source`, failing on the first error
pub fn parse(source: &str, format: InputFormat) -> Result<Vec<TreePair>, ParseError> {
    Pairs::new(source, format).collect()
}
