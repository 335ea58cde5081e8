//! Parser for bracketed tree notation

pub mod ast;
mod extract;
mod flat;
mod named;
mod pairs;
mod stream;

pub use ast::*;
pub use extract::extract_tree;
pub use flat::{split_line, FlatLines, SEPARATOR};
pub use named::{normalize_whitespace, parse_named, MAX_MC_DEPTH};
pub use pairs::{parse, Pairs};
pub use stream::Stream;
