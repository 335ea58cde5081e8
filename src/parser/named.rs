//! Named expressions and `{ ... }` MC-sets

use std::borrow::Cow;

use crate::error::{describe, ParseError};

use super::ast::Expr;
use super::extract::extract_tree;
use super::stream::Stream;

/// Replace tabs and line breaks with single spaces.
///
/// Names are split from their expression at the first space, and an
/// expression may span several lines of the input. The replacement is one
/// byte for one byte, so spans into the normalized text are valid spans
/// into the original.
pub fn normalize_whitespace(input: &str) -> Cow<'_, str> {
    if input.contains(['\t', '\n', '\r']) {
        Cow::Owned(input.replace(['\t', '\n', '\r'], " "))
    } else {
        Cow::Borrowed(input)
    }
}

/// Parse one optionally named expression.
///
/// Returns the name (if any), the stream after the expression, and the
/// expression itself. Dispatch is on the first non-whitespace character:
/// `{` starts an MC-set, `[` a tree, anything else is a name followed by a
/// space and then a tree or MC-set.
///
/// # Example
///
/// ```rust
/// use stag_forest::parser::{parse_named, Expr, Stream};
///
/// let (name, rest, expr) = parse_named(Stream::new("alpha [S [NP]] [T]")).unwrap();
/// assert_eq!(name, Some("alpha"));
/// assert_eq!(expr, Expr::tree("[S [NP]]"));
/// assert_eq!(rest.rest(), " [T]");
/// ```
pub fn parse_named(stream: Stream<'_>) -> Result<(Option<&str>, Stream<'_>, Expr), ParseError> {
    parse_named_at(stream, 0)
}

/// Deepest MC-set nesting accepted; parsing and rendering recurse per level
pub const MAX_MC_DEPTH: usize = 64;

fn parse_named_at(
    stream: Stream<'_>,
    depth: usize,
) -> Result<(Option<&str>, Stream<'_>, Expr), ParseError> {
    let stream = stream.skip_whitespace();
    match stream.peek() {
        Some('{') | Some('[') => {
            let (rest, expr) = parse_unnamed(stream, depth)?;
            Ok((None, rest, expr))
        }
        Some(']') | Some('}') | None => Err(missing_expression(stream)),
        Some(_) => {
            let rest = stream.rest();
            let end = rest.find(' ').unwrap_or(rest.len());
            let name = &rest[..end];
            let after = stream.advance(end).skip_whitespace();
            match after.peek() {
                Some('{') | Some('[') => {
                    let (rest, expr) = parse_unnamed(after, depth)?;
                    Ok((Some(name), rest, expr))
                }
                found => Err(ParseError::MalformedTree {
                    span: stream.offset()..after.offset() + found.map_or(0, char::len_utf8),
                    message: format!(
                        "expected '[' or '{{' after name '{}', found {}",
                        name,
                        describe(found)
                    ),
                }),
            }
        }
    }
}

fn parse_unnamed(stream: Stream<'_>, depth: usize) -> Result<(Stream<'_>, Expr), ParseError> {
    if stream.peek() == Some('{') {
        parse_mc_set(stream, depth + 1)
    } else {
        let (rest, tree) = extract_tree(stream)?;
        Ok((rest, Expr::tree(tree)))
    }
}

/// Parse `{ left right }` where both sides are named expressions.
///
/// Names survive only when both sides carry one; a set with a single named
/// side loses that name too.
fn parse_mc_set(stream: Stream<'_>, depth: usize) -> Result<(Stream<'_>, Expr), ParseError> {
    let open = stream.offset();
    if depth > MAX_MC_DEPTH {
        return Err(ParseError::MalformedTree {
            span: open..open + 1,
            message: format!("MC-sets nested deeper than {} levels", MAX_MC_DEPTH),
        });
    }
    let stream = stream
        .eat('{')
        .ok_or_else(|| ParseError::expected_tree(open, stream.peek()))?;

    let (left_name, stream, left) = parse_named_at(stream, depth)?;
    let (right_name, stream, right) = parse_named_at(stream, depth)?;

    let stream = stream.skip_whitespace();
    let found = stream.peek();
    let stream = stream.eat('}').ok_or_else(|| ParseError::UnbalancedMcSet {
        span: open..stream.offset() + found.map_or(0, char::len_utf8),
        found: describe(found),
    })?;

    let expr = match (left_name, right_name) {
        (Some(left_name), Some(right_name)) => Expr::NamedPair {
            left_name: left_name.to_string(),
            left: Box::new(left),
            right_name: right_name.to_string(),
            right: Box::new(right),
        },
        _ => Expr::Pair(Box::new(left), Box::new(right)),
    };
    Ok((stream, expr))
}

fn missing_expression(stream: Stream<'_>) -> ParseError {
    let found = stream.peek();
    ParseError::MalformedTree {
        span: stream.offset()..stream.offset() + found.map_or(0, char::len_utf8),
        message: format!("expected an expression, found {}", describe(found)),
    }
}
