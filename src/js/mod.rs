//! Tree-sitter integration for JavaScript parsing.
//!
//! This module wraps tree-sitter with the JavaScript grammar from
//! ast-grep-language, producing CSTs the extraction engine walks. Parse
//! trees carry ERROR nodes for malformed input rather than failing
//! outright, so callers can report and skip broken files.

pub mod errors;
pub mod parser;

pub use errors::JsError;
pub use parser::{ErrorNode, JsParser, ParsedSource};
