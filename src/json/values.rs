use super::{list, node, ToJson};
use crate::ast::*;
use crate::options::JsonOptions;
use serde_json::Value as JSValue;

impl ToJson for Name {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::Name,
            self.span,
            options,
            [("value", JSValue::from(self.value.as_str()))],
        )
    }
}

impl ToJson for Value {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        match self {
            Value::Variable(var) => var.to_json(options),
            Value::List(list) => list.to_json(options),
            Value::Object(obj) => obj.to_json(options),
            Value::Int(node) => node.to_json(options),
            Value::Float(node) => node.to_json(options),
            Value::Boolean(node) => node.to_json(options),
            Value::String(node) => node.to_json(options),
            Value::Enum(node) => node.to_json(options),
            Value::Null(node) => node.to_json(options),
        }
    }
}

impl ToJson for IntValue {
    /// Converts an IntValue Node, keeping its source text.
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::IntValue,
            self.span,
            options,
            [("value", JSValue::from(self.value.as_str()))],
        )
    }
}

impl ToJson for FloatValue {
    /// Converts a FloatValue Node, keeping its source text.
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::FloatValue,
            self.span,
            options,
            [("value", JSValue::from(self.value.as_str()))],
        )
    }
}

impl ToJson for BooleanValue {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::BooleanValue,
            self.span,
            options,
            [("value", JSValue::from(self.value))],
        )
    }
}

impl ToJson for StringValue {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::StringValue,
            self.span,
            options,
            [
                ("value", JSValue::from(self.value.as_str())),
                ("block", JSValue::from(self.block)),
            ],
        )
    }
}

impl ToJson for EnumValue {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::EnumValue,
            self.span,
            options,
            [("value", JSValue::from(self.value.as_str()))],
        )
    }
}

impl ToJson for NullValue {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(ASTKind::NullValue, self.span, options, [])
    }
}

impl ToJson for Variable {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::Variable,
            self.span,
            options,
            [("name", self.name.to_json(options))],
        )
    }
}

impl ToJson for ListValue {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::ListValue,
            self.span,
            options,
            [("values", list(&self.values, options))],
        )
    }
}

impl ToJson for ObjectField {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::ObjectField,
            self.span,
            options,
            [
                ("name", self.name.to_json(options)),
                ("value", self.value.to_json(options)),
            ],
        )
    }
}

impl ToJson for ObjectValue {
    #[inline]
    fn to_json(&self, options: &JsonOptions) -> JSValue {
        node(
            ASTKind::ObjectValue,
            self.span,
            options,
            [("fields", list(&self.fields, options))],
        )
    }
}
