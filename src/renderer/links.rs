//! Substitution of link numbers using logos

use logos::Logos;

/// Pieces of tree text as far as link numbers are concerned
#[derive(Logos, Debug, Clone, PartialEq)]
enum Piece {
    /// `(` digits `)`; the digits are kept as written
    #[regex(r"\([0-9]+\)", |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    Link(String),

    /// A parenthesis that does not start a link number
    #[token("(")]
    Paren,

    #[regex(r"[^(]+")]
    Text,
}

/// Replace every `(n)` in `text` with `\macro_name{n}`.
///
/// Nested trees are covered since the whole text is scanned. Parenthesized
/// text that is not all digits is copied unchanged.
pub fn substitute_links(text: &str, macro_name: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut lexer = Piece::lexer(text);
    while let Some(piece) = lexer.next() {
        match piece {
            Ok(Piece::Link(number)) => {
                out.push('\\');
                out.push_str(macro_name);
                out.push('{');
                out.push_str(&number);
                out.push('}');
            }
            Ok(Piece::Paren) | Ok(Piece::Text) | Err(_) => out.push_str(lexer.slice()),
        }
    }
    out
}

/// Link numbers appearing in `text`, in order
pub fn link_numbers(text: &str) -> Vec<String> {
    Piece::lexer(text)
        .filter_map(|piece| match piece {
            Ok(Piece::Link(number)) => Some(number),
            _ => None,
        })
        .collect()
}
