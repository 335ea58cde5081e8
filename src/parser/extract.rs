//! Depth-counting extraction of a single bracket expression

use crate::error::ParseError;

use super::stream::Stream;

/// Extract the bracket expression at the head of `stream`.
///
/// The stream must start with `[`. Returns the stream positioned just after
/// the matching `]` together with the expression text, brackets included.
/// Concatenating the returned text and the returned stream's remainder gives
/// back the input remainder exactly.
///
/// # Example
///
/// ```rust
/// use stag_forest::parser::{extract_tree, Stream};
///
/// let (rest, tree) = extract_tree(Stream::new("[NP [N dog]] [VP]")).unwrap();
/// assert_eq!(tree, "[NP [N dog]]");
/// assert_eq!(rest.rest(), " [VP]");
/// ```
pub fn extract_tree(stream: Stream<'_>) -> Result<(Stream<'_>, &str), ParseError> {
    let rest = stream.rest();
    match rest.chars().next() {
        Some('[') => {}
        found => return Err(ParseError::expected_tree(stream.offset(), found)),
    }

    let mut depth = 0usize;
    for (i, c) in rest.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                // depth >= 1 here: the first character was '['
                depth -= 1;
                if depth == 0 {
                    let end = i + 1;
                    return Ok((stream.advance(end), &rest[..end]));
                }
            }
            _ => {}
        }
    }

    Err(ParseError::MalformedTree {
        span: stream.offset()..stream.offset() + rest.len(),
        message: format!(
            "expected ']' to close tree, found end of input ({} unclosed)",
            depth
        ),
    })
}
