use super::{list, node, optional, optional_list, ToJson};
use crate::ast::*;
use crate::options::JsonOptions;
use serde_json::Value as JSValue;

impl ToJson for Argument {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::Argument,
            self.span,
            options,
            [
                ("name", self.name.to_json(options)),
                ("value", self.value.to_json(options)),
            ],
        )
    }
}

impl ToJson for Arguments {
    /// Converts the list of Arguments to an array, or to `null` when there are none.
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        optional_list(&self.children, options)
    }
}

impl ToJson for Directive {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::Directive,
            self.span,
            options,
            [
                ("name", self.name.to_json(options)),
                ("arguments", self.arguments.to_json(options)),
            ],
        )
    }
}

impl ToJson for Directives {
    /// Converts the list of Directives to an array, or to `null` when there are none.
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        optional_list(&self.children, options)
    }
}

impl ToJson for NamedType {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::NamedType,
            self.span,
            options,
            [("name", self.name.to_json(options))],
        )
    }
}

impl ToJson for Type {
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        match self {
            Type::Named(named) => named.to_json(options),
            Type::List(list) => node(
                ASTKind::ListType,
                list.span,
                options,
                [("type", list.of_type.to_json(options))],
            ),
            Type::NonNull(non_null) => node(
                ASTKind::NonNullType,
                non_null.span,
                options,
                [("type", non_null.of_type.to_json(options))],
            ),
        }
    }
}

impl ToJson for VariableDefinition {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::VariableDefinition,
            self.span,
            options,
            [
                ("variable", self.variable.to_json(options)),
                ("type", self.of_type.to_json(options)),
                ("defaultValue", optional(self.default_value.as_ref(), options)),
                ("directives", self.directives.to_json(options)),
            ],
        )
    }
}

impl ToJson for VariableDefinitions {
    /// Converts the list of Variable Definitions to an array, or to `null` when there are none.
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        optional_list(&self.children, options)
    }
}

impl ToJson for SelectionSet {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::SelectionSet,
            self.span,
            options,
            [("selections", list(&self.selections, options))],
        )
    }
}

impl ToJson for Field {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::Field,
            self.span,
            options,
            [
                ("alias", optional(self.alias.as_ref(), options)),
                ("name", self.name.to_json(options)),
                ("arguments", self.arguments.to_json(options)),
                ("directives", self.directives.to_json(options)),
                ("selectionSet", optional(self.selection_set.as_ref(), options)),
            ],
        )
    }
}

impl ToJson for FragmentSpread {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::FragmentSpread,
            self.span,
            options,
            [
                ("name", self.name.to_json(options)),
                ("directives", self.directives.to_json(options)),
            ],
        )
    }
}

impl ToJson for InlineFragment {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::InlineFragment,
            self.span,
            options,
            [
                ("typeCondition", optional(self.type_condition.as_ref(), options)),
                ("directives", self.directives.to_json(options)),
                ("selectionSet", self.selection_set.to_json(options)),
            ],
        )
    }
}

impl ToJson for Selection {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        match self {
            Selection::Field(field) => field.to_json(options),
            Selection::FragmentSpread(spread) => spread.to_json(options),
            Selection::InlineFragment(fragment) => fragment.to_json(options),
        }
    }
}

impl ToJson for FragmentDefinition {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::FragmentDefinition,
            self.span,
            options,
            [
                ("name", self.name.to_json(options)),
                ("typeCondition", self.type_condition.to_json(options)),
                ("directives", self.directives.to_json(options)),
                ("selectionSet", self.selection_set.to_json(options)),
            ],
        )
    }
}

impl ToJson for OperationDefinition {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::OperationDefinition,
            self.span,
            options,
            [
                ("operation", JSValue::from(self.operation.as_str())),
                ("name", optional(self.name.as_ref(), options)),
                (
                    "variableDefinitions",
                    self.variable_definitions.to_json(options),
                ),
                ("directives", self.directives.to_json(options)),
                ("selectionSet", self.selection_set.to_json(options)),
            ],
        )
    }
}

impl ToJson for Definition {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        match self {
            Definition::Operation(operation) => operation.to_json(options),
            Definition::Fragment(fragment) => fragment.to_json(options),
        }
    }
}

impl ToJson for Document {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::Document,
            self.span,
            options,
            [("definitions", list(&self.definitions, options))],
        )
    }
}
