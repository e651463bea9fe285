//! Shape predicates over syntax-tree nodes.
//!
//! All predicates fail closed: a node missing a normally-required field
//! is a non-match, never an error.

use tree_sitter::Node;

/// Callee name that marks a module-import call.
const IMPORT_CALLEE: &str = "require";

/// True iff `node` is a call expression whose callee is the bare
/// identifier `require`. Arguments are not inspected.
pub fn is_require_call(node: Node<'_>, source: &str) -> bool {
    if node.kind() != "call_expression" {
        return false;
    }
    let Some(callee) = node.child_by_field_name("function") else {
        return false;
    };
    callee.kind() == "identifier" && &source[callee.byte_range()] == IMPORT_CALLEE
}

/// True iff `node` is an object literal expression.
pub fn is_object_literal(node: Node<'_>) -> bool {
    node.kind() == "object"
}

/// Follow the `object` link of a member-access chain (`a.b.c`) until the
/// current node is no longer a member expression, and return it.
///
/// Lets `const x = require('y').some.prop` be recognized regardless of
/// how deeply the import call is wrapped.
pub fn unwrap_member_chain(node: Node<'_>) -> Node<'_> {
    let mut current = node;
    while current.kind() == "member_expression" {
        match current.child_by_field_name("object") {
            Some(object) => current = object,
            None => break,
        }
    }
    current
}

/// True iff `node` is a function expression (the grammar's older
/// releases used the bare `function` kind for the same construct).
pub fn is_function_expression(node: Node<'_>) -> bool {
    matches!(node.kind(), "function_expression" | "function")
}

/// True iff the first character of `name`, uppercased, equals itself.
/// Caseless leads (`_`, digits) therefore count as uppercase, matching
/// the classic ctags convention for constructor names.
pub fn is_uppercase_lead(name: &str) -> bool {
    name.chars().next().is_some_and(|c| {
        let mut upper = c.to_uppercase();
        upper.next() == Some(c) && upper.next().is_none()
    })
}
