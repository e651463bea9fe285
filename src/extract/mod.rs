//! The tag-extraction engine: shape classifiers plus per-node-kind
//! extractors dispatched during a pre-order walk of the parse tree.
//!
//! Only two node kinds produce tags (variable declarators and named
//! function declarations); everything else is silently skipped.

pub mod classify;
pub mod visit;

pub use classify::{
    is_function_expression, is_object_literal, is_require_call, is_uppercase_lead,
    unwrap_member_chain,
};
pub use visit::extract_tags;
