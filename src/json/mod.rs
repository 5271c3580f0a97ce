//! # JSON Conversion
//!
//! The `json` module converts parsed AST Nodes to `serde_json` values. Every node becomes a JSON
//! object with a `kind` field naming its node type, as returned by [`ASTKind::as_str`], and one
//! key per child, named in camelCase as in the reference GraphQL implementations.
//!
//! - Lists of children become JSON arrays in source order.
//! - Absent optional children become `null`. So do the optional `variableDefinitions`,
//!   `arguments` and `directives` lists when they're empty.
//! - Int and Float values keep their source text as a JSON string.
//! - Source spans are left out, unless [`JsonOptions::locations`] is set, which adds a `loc`
//!   object to every node.
//!
//! Object keys are always emitted in sorted order, hence converting the same AST twice yields
//! byte-for-byte identical output, and documents that only differ by whitespace convert to the
//! same JSON.
//!
//! ```
//! use graphql_ast_json::ast::*;
//! use graphql_ast_json::json::ToJson;
//! use graphql_ast_json::options::JsonOptions;
//!
//! let ast = Document::parse("{ field }").unwrap();
//! let json = ast.to_json(&JsonOptions::default());
//! assert_eq!(json["definitions"][0]["kind"], "OperationDefinition");
//! ```

mod nodes;
mod values;

use crate::ast::{ASTKind, Span};
use crate::options::JsonOptions;
use serde_json::{json, Map as JSMap, Value as JSValue};

/// Trait for converting AST Nodes of a GraphQL language document to [serde_json::Value]s.
pub trait ToJson {
    /// Convert the current AST Node to a [serde_json::Value].
    fn to_json(&self, options: &JsonOptions) -> JSValue;

    /// Convert the current AST Node to a compact JSON string.
    fn to_json_string(&self, options: &JsonOptions) -> String {
        self.to_json(options).to_string()
    }
}

/// Builds the JSON object of a single node from its kind, span and child fields.
#[inline]
pub(crate) fn node<const N: usize>(
    kind: ASTKind,
    span: Span,
    options: &JsonOptions,
    fields: [(&'static str, JSValue); N],
) -> JSValue {
    let mut map = JSMap::new();
    map.insert("kind".to_string(), JSValue::from(kind.as_str()));
    for (key, value) in fields {
        map.insert(key.to_string(), value);
    }
    if options.locations {
        map.insert("loc".to_string(), loc(span));
    }
    JSValue::Object(map)
}

fn loc(span: Span) -> JSValue {
    json!({
        "start": { "line": span.start.line, "column": span.start.column },
        "end": { "line": span.end.line, "column": span.end.column },
    })
}

#[inline]
pub(crate) fn optional<T: ToJson>(node: Option<&T>, options: &JsonOptions) -> JSValue {
    node.map_or(JSValue::Null, |node| node.to_json(options))
}

#[inline]
pub(crate) fn list<T: ToJson>(nodes: &[T], options: &JsonOptions) -> JSValue {
    JSValue::Array(nodes.iter().map(|node| node.to_json(options)).collect())
}

/// Like [list], but an empty list is treated as absent.
#[inline]
pub(crate) fn optional_list<T: ToJson>(nodes: &[T], options: &JsonOptions) -> JSValue {
    if nodes.is_empty() {
        JSValue::Null
    } else {
        list(nodes, options)
    }
}

#[cfg(test)]
mod tests {
    use super::ToJson;
    use crate::ast::*;
    use crate::options::JsonOptions;
    use indoc::indoc;
    use serde_json::json;

    fn to_json(source: &str) -> serde_json::Value {
        Document::parse(source)
            .unwrap()
            .to_json(&JsonOptions::default())
    }

    #[test]
    fn single_field_document() {
        let json = to_json("{ field }");
        assert_eq!(json["kind"], "Document");
        let operation = &json["definitions"][0];
        assert_eq!(operation["kind"], "OperationDefinition");
        assert_eq!(operation["operation"], "query");
        let selections = operation["selectionSet"]["selections"].as_array().unwrap();
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0]["kind"], "Field");
        assert_eq!(selections[0]["name"]["value"], "field");
    }

    #[test]
    fn query_with_arguments() {
        let json = to_json(indoc! {"
            query {
              account(id: 1) {
                name
              }
            }
        "});
        assert_eq!(
            json,
            json!({
                "kind": "Document",
                "definitions": [{
                    "kind": "OperationDefinition",
                    "name": null,
                    "operation": "query",
                    "directives": null,
                    "variableDefinitions": null,
                    "selectionSet": {
                        "kind": "SelectionSet",
                        "selections": [{
                            "kind": "Field",
                            "name": { "kind": "Name", "value": "account" },
                            "alias": null,
                            "arguments": [{
                                "kind": "Argument",
                                "name": { "kind": "Name", "value": "id" },
                                "value": { "kind": "IntValue", "value": "1" }
                            }],
                            "directives": null,
                            "selectionSet": {
                                "kind": "SelectionSet",
                                "selections": [{
                                    "kind": "Field",
                                    "name": { "kind": "Name", "value": "name" },
                                    "alias": null,
                                    "arguments": null,
                                    "directives": null,
                                    "selectionSet": null
                                }]
                            }
                        }]
                    }
                }]
            })
        );
    }

    #[test]
    fn fragments_and_variables() {
        let json = to_json(indoc! {r#"
            query Q($id: [ID!]! = ["a"]) @cached {
              node(id: $id) { ...F ... on User @include(if: true) { name } }
            }
            fragment F on Node { id }
        "#});
        let operation = &json["definitions"][0];
        assert_eq!(operation["name"]["value"], "Q");
        assert_eq!(operation["directives"][0]["name"]["value"], "cached");
        assert_eq!(operation["directives"][0]["arguments"], json!(null));

        let definition = &operation["variableDefinitions"][0];
        assert_eq!(definition["kind"], "VariableDefinition");
        assert_eq!(
            definition["variable"],
            json!({ "kind": "Variable", "name": { "kind": "Name", "value": "id" } })
        );
        assert_eq!(
            definition["type"],
            json!({
                "kind": "NonNullType",
                "type": {
                    "kind": "ListType",
                    "type": {
                        "kind": "NonNullType",
                        "type": { "kind": "NamedType", "name": { "kind": "Name", "value": "ID" } }
                    }
                }
            })
        );
        assert_eq!(
            definition["defaultValue"],
            json!({
                "kind": "ListValue",
                "values": [{ "kind": "StringValue", "value": "a", "block": false }]
            })
        );

        let selections = &operation["selectionSet"]["selections"][0]["selectionSet"]["selections"];
        assert_eq!(
            selections[0],
            json!({
                "kind": "FragmentSpread",
                "name": { "kind": "Name", "value": "F" },
                "directives": null
            })
        );
        assert_eq!(selections[1]["kind"], "InlineFragment");
        assert_eq!(selections[1]["typeCondition"]["name"]["value"], "User");

        let fragment = &json["definitions"][1];
        assert_eq!(fragment["kind"], "FragmentDefinition");
        assert_eq!(fragment["typeCondition"]["kind"], "NamedType");
    }

    #[test]
    fn values() {
        let json = to_json(
            r#"{ f(a: -1.5e3, b: "A", c: null, d: ENUM, e: {x: [true]}, f: """ block """) }"#,
        );
        let arguments = &json["definitions"][0]["selectionSet"]["selections"][0]["arguments"];
        assert_eq!(
            arguments[0]["value"],
            json!({ "kind": "FloatValue", "value": "-1.5e3" })
        );
        assert_eq!(
            arguments[1]["value"],
            json!({ "kind": "StringValue", "value": "A", "block": false })
        );
        assert_eq!(arguments[2]["value"], json!({ "kind": "NullValue" }));
        assert_eq!(
            arguments[3]["value"],
            json!({ "kind": "EnumValue", "value": "ENUM" })
        );
        assert_eq!(
            arguments[4]["value"],
            json!({
                "kind": "ObjectValue",
                "fields": [{
                    "kind": "ObjectField",
                    "name": { "kind": "Name", "value": "x" },
                    "value": {
                        "kind": "ListValue",
                        "values": [{ "kind": "BooleanValue", "value": true }]
                    }
                }]
            })
        );
        assert_eq!(
            arguments[5]["value"],
            json!({ "kind": "StringValue", "value": " block ", "block": true })
        );
    }

    #[test]
    fn locations() {
        let ast = Document::parse("{\n  field\n}").unwrap();
        let json = ast.to_json(&JsonOptions { locations: true });
        assert_eq!(
            json["loc"],
            json!({ "start": { "line": 1, "column": 1 }, "end": { "line": 3, "column": 2 } })
        );
        let field = &json["definitions"][0]["selectionSet"]["selections"][0];
        assert_eq!(
            field["loc"],
            json!({ "start": { "line": 2, "column": 3 }, "end": { "line": 2, "column": 8 } })
        );
        assert!(to_json("{ field }")["definitions"][0].get("loc").is_none());
    }

    #[test]
    fn deterministic_output() {
        let options = JsonOptions::default();
        let compact = Document::parse("{a(x:1){b}}").unwrap();
        let spaced = Document::parse("{\n  a(x: 1) {\n    b\n  }\n}\n").unwrap();
        assert_eq!(compact.to_json_string(&options), spaced.to_json_string(&options));
        assert_eq!(compact.to_json_string(&options), compact.to_json_string(&options));
        assert!(compact
            .to_json_string(&options)
            .starts_with(r#"{"definitions":[{"directives":null,"kind":"OperationDefinition""#));
    }
}
