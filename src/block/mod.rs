//! Block line classifier.
//!
//! The classifier is line-oriented and handles:
//! - Headings (`## `)
//! - Bullet items (`- `)
//! - Blockquotes (`> `)
//! - Blank lines
//! - Paragraphs

mod line;
mod parser;

pub use line::LineKind;
pub use parser::{classify_line, BlockRenderer};
