//! Jstags: ctags index generation for JavaScript
//!
//! Generates exuberant-ctags-compatible tag files from JavaScript source,
//! built on tree-sitter parsing for structural construct recognition.
//!
//! # Architecture
//!
//! Extraction walks every node of a parsed file and dispatches on node
//! kind. Three construct families produce [`Tag`] records: named function
//! declarations (`f`, or `c` for constructor-style names), variable
//! bindings to `require(...)` imports (`i`, including imports reached
//! through a member-access chain), and prototype/method-table bindings
//! whose object literal carries function-valued properties (`m`).
//! Everything else is skipped without error.
//!
//! Records accumulate in a [`TagCollector`] shared across all input
//! files, then flush once, sorted by their rendered line.
//!
//! # Example
//!
//! ```no_run
//! use jstags::{extract_tags, JsParser, TagCollector};
//! use std::path::Path;
//!
//! let mut parser = JsParser::new()?;
//! let source = "const fs = require('fs');\nfunction main() {}\n";
//! let parsed = parser.parse_with_source(source)?;
//!
//! let mut collector = TagCollector::new();
//! extract_tags(&parsed, Path::new("main.js"), &mut collector);
//!
//! for tag in collector.into_sorted() {
//!     println!("{tag}");
//! }
//! # Ok::<(), jstags::JsError>(())
//! ```

pub mod collector;
pub mod extract;
pub mod js;
pub mod output;
pub mod tag;

// Re-exports
pub use collector::TagCollector;
pub use extract::extract_tags;
pub use js::{JsError, JsParser, ParsedSource};
pub use output::{header, write_tags};
pub use tag::{locate_pattern, Tag, TagKind};
