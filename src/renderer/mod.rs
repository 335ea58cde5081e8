//! LaTeX renderer for generating output from parsed pairs
//!
//! This module takes parsed tree pairs and produces `forest` markup wrapped
//! in the macros named by a stylesheet.

pub mod config;
pub mod latex;
pub mod links;
pub mod preamble;

pub use config::{LatexConfig, LinkStyle};
pub use latex::LatexRenderer;
pub use links::substitute_links;
pub use preamble::PREAMBLE;
