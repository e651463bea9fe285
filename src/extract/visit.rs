//! Per-kind tag extractors driven by a pre-order tree walk.

use std::path::Path;

use tree_sitter::Node;

use crate::collector::TagCollector;
use crate::extract::classify;
use crate::js::ParsedSource;
use crate::tag::{locate_pattern, Tag, TagKind};

/// Walk every node of a parsed file and append one tag per recognized
/// construct to the collector. Unrecognized node kinds produce nothing.
pub fn extract_tags(parsed: &ParsedSource<'_>, file: &Path, collector: &mut TagCollector) {
    walk(parsed.root_node(), parsed, file, collector);
}

fn walk(node: Node<'_>, parsed: &ParsedSource<'_>, file: &Path, collector: &mut TagCollector) {
    match node.kind() {
        "variable_declarator" => binding_tags(node, parsed, file, collector),
        "function_declaration" => {
            if let Some(tag) = function_tag(node, parsed, file) {
                collector.append(tag);
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, parsed, file, collector);
    }
}

/// Handle a single `name = initializer` binding. The three cases are
/// mutually exclusive and checked in priority order; first match wins.
fn binding_tags(
    node: Node<'_>,
    parsed: &ParsedSource<'_>,
    file: &Path,
    collector: &mut TagCollector,
) {
    let Some(name_node) = node.child_by_field_name("name") else {
        return;
    };
    if name_node.kind() != "identifier" {
        return;
    }
    let Some(init) = node.child_by_field_name("value") else {
        return;
    };
    let binding = parsed.node_text(name_node);

    if classify::is_require_call(init, parsed.source) {
        collector.append(import_tag(binding, node, file));
    } else if init.kind() == "member_expression" {
        let terminal = classify::unwrap_member_chain(init);
        if classify::is_require_call(terminal, parsed.source) {
            collector.append(import_tag(binding, node, file));
        }
    } else if init.kind() == "assignment_expression" {
        if let Some(right) = init.child_by_field_name("right") {
            if classify::is_object_literal(right) {
                method_tags(binding, right, parsed, file, collector);
            }
        }
    }
}

/// Import binding. The pattern points at the binding itself, not the
/// require call, so the editor lands on the declaration line.
fn import_tag(binding: &str, node: Node<'_>, file: &Path) -> Tag {
    let row = node.start_position().row;
    Tag::new(
        binding,
        file,
        locate_pattern(row, binding),
        TagKind::Import,
        row as u32 + 1,
    )
}

/// One `m` tag per function-valued property of a prototype/method-table
/// object literal, named `<binding>.<property>` and located at the key.
fn method_tags(
    binding: &str,
    object: Node<'_>,
    parsed: &ParsedSource<'_>,
    file: &Path,
    collector: &mut TagCollector,
) {
    let mut cursor = object.walk();
    for property in object.named_children(&mut cursor) {
        if property.kind() != "pair" {
            continue;
        }
        let Some(key) = property.child_by_field_name("key") else {
            continue;
        };
        if key.kind() != "property_identifier" {
            continue;
        }
        let Some(value) = property.child_by_field_name("value") else {
            continue;
        };
        if !classify::is_function_expression(value) {
            continue;
        }

        let property_name = parsed.node_text(key);
        let row = key.start_position().row;
        collector.append(Tag::new(
            format!("{binding}.{property_name}"),
            file,
            locate_pattern(row, property_name),
            TagKind::Method,
            row as u32 + 1,
        ));
    }
}

/// Named function declaration: `c` for an uppercase lead, `f` otherwise.
fn function_tag(node: Node<'_>, parsed: &ParsedSource<'_>, file: &Path) -> Option<Tag> {
    let name_node = node.child_by_field_name("name")?;
    let name = parsed.node_text(name_node);
    let kind = if classify::is_uppercase_lead(name) {
        TagKind::Constructor
    } else {
        TagKind::Function
    };

    let row = node.start_position().row;
    Some(Tag::new(
        name,
        file,
        locate_pattern(row, name),
        kind,
        row as u32 + 1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js::JsParser;
    use std::path::PathBuf;

    fn tags_for(source: &str) -> Vec<Tag> {
        let mut parser = JsParser::new().unwrap();
        let parsed = parser.parse_with_source(source).unwrap();
        let mut collector = TagCollector::new();
        extract_tags(&parsed, &PathBuf::from("test.js"), &mut collector);
        collector.into_sorted()
    }

    #[test]
    fn constructor_function_at_line_five() {
        let tags = tags_for("\n\n\n\nfunction Foo() {}\n");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].render(), "Foo\ttest.js\t4/\\<Foo\\>/;\"\tc\tlineno:5");
    }

    #[test]
    fn lowercase_function_gets_f_kind() {
        let tags = tags_for("function doWork() {}\n");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind, TagKind::Function);
        assert_eq!(tags[0].name, "doWork");
    }

    #[test]
    fn require_binding_at_line_one() {
        let tags = tags_for("const bar = require('baz');\n");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].render(), "bar\ttest.js\t0/\\<bar\\>/;\"\ti\tlineno:1");
    }

    #[test]
    fn require_through_member_chain() {
        for init in [
            "require('baz').one",
            "require('baz').one.two",
            "require('baz').one.two.three",
        ] {
            let tags = tags_for(&format!("var bound = {init};\n"));
            assert_eq!(tags.len(), 1, "chain {init} should yield one tag");
            assert_eq!(tags[0].name, "bound");
            assert_eq!(tags[0].kind, TagKind::Import);
        }
    }

    #[test]
    fn member_chain_without_require_is_skipped() {
        let tags = tags_for("var x = config.server.port;\n");
        assert!(tags.is_empty());
    }

    #[test]
    fn method_table_emits_function_properties_only() {
        let source = "\
var proto = Thing.prototype = {
  greet: function () {},
  count: 1,
  wave: function () {}
};
";
        let tags = tags_for(source);
        assert_eq!(tags.len(), 2);
        assert_eq!(
            tags[0].render(),
            "proto.greet\ttest.js\t1/\\<greet\\>/;\"\tm\tlineno:2"
        );
        assert_eq!(
            tags[1].render(),
            "proto.wave\ttest.js\t3/\\<wave\\>/;\"\tm\tlineno:4"
        );
    }

    #[test]
    fn prototype_scenario_key_at_line_ten() {
        let source = format!(
            "{}var Thing = Thing.prototype = {{\n  greet: function () {{}}\n}};\n",
            "\n".repeat(8)
        );
        let tags = tags_for(&source);
        assert_eq!(tags.len(), 1);
        assert_eq!(
            tags[0].render(),
            "Thing.greet\ttest.js\t9/\\<greet\\>/;\"\tm\tlineno:10"
        );
    }

    #[test]
    fn uninitialized_binding_is_skipped() {
        assert!(tags_for("var later;\n").is_empty());
    }

    #[test]
    fn plain_initializers_produce_nothing() {
        assert!(tags_for("var n = 42;\nlet s = 'hi';\nconst f = () => {};\n").is_empty());
    }

    #[test]
    fn plain_object_literal_binding_produces_nothing() {
        // Case C needs an assignment expression; a direct object literal
        // initializer is not a method table.
        assert!(tags_for("var o = { greet: function () {} };\n").is_empty());
    }

    #[test]
    fn declaration_list_handles_each_binding() {
        let source = "var fs = require('fs'),\n    path = require('path'),\n    depth = 0;\n";
        let tags = tags_for(source);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "fs");
        assert_eq!(tags[0].lineno, 1);
        assert_eq!(tags[1].name, "path");
        assert_eq!(tags[1].lineno, 2);
    }

    #[test]
    fn nested_functions_are_all_tagged() {
        let source = "function outer() {\n  function Inner() {}\n}\n";
        let tags = tags_for(source);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "Inner");
        assert_eq!(tags[0].kind, TagKind::Constructor);
        assert_eq!(tags[1].name, "outer");
        assert_eq!(tags[1].kind, TagKind::Function);
    }
}
