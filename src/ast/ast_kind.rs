use std::fmt;

/// An enum of identifiers representing AST nodes and the grammar rules that select between them.
///
/// This enum can be printed using the [`fmt::Display`] trait.
/// When parsing this enum is used to indicate what AST node or rule was expected when a parsing
/// error was encountered. When serializing, [`ASTKind::as_str`] names the `kind` of each node.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ASTKind {
    /// See: [crate::ast::Document]
    Document,
    /// See: [crate::ast::Definition]
    Definition,
    /// See: [crate::ast::OperationDefinition]
    OperationDefinition,
    /// See: [crate::ast::OperationKind]
    OperationType,
    /// See: [crate::ast::FragmentDefinition]
    FragmentDefinition,
    /// See: [crate::ast::VariableDefinition]
    VariableDefinition,
    /// See: [crate::ast::Type]
    Type,
    /// See: [crate::ast::NamedType]
    NamedType,
    /// See: [crate::ast::ListType]
    ListType,
    /// See: [crate::ast::NonNullType]
    NonNullType,
    /// See: [crate::ast::SelectionSet]
    SelectionSet,
    /// See: [crate::ast::Selection]
    Selection,
    /// See: [crate::ast::Field]
    Field,
    /// See: [crate::ast::FragmentSpread]
    FragmentSpread,
    /// See: [crate::ast::InlineFragment]
    InlineFragment,
    /// See: [crate::ast::Directive]
    Directive,
    /// See: [crate::ast::Argument]
    Argument,
    /// See: [crate::ast::Value]
    Value,
    /// See: [crate::ast::Variable]
    Variable,
    /// See: [crate::ast::IntValue]
    IntValue,
    /// See: [crate::ast::FloatValue]
    FloatValue,
    /// See: [crate::ast::StringValue]
    StringValue,
    /// See: [crate::ast::BooleanValue]
    BooleanValue,
    /// See: [crate::ast::NullValue]
    NullValue,
    /// See: [crate::ast::EnumValue]
    EnumValue,
    /// See: [crate::ast::ListValue]
    ListValue,
    /// See: [crate::ast::ObjectValue]
    ObjectValue,
    /// See: [crate::ast::ObjectField]
    ObjectField,
    /// See: [crate::ast::Name]
    Name,
}

impl ASTKind {
    /// Returns the identifier of this kind as it appears in the `kind` field of serialized nodes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ASTKind::Document => "Document",
            ASTKind::Definition => "Definition",
            ASTKind::OperationDefinition => "OperationDefinition",
            ASTKind::OperationType => "OperationType",
            ASTKind::FragmentDefinition => "FragmentDefinition",
            ASTKind::VariableDefinition => "VariableDefinition",
            ASTKind::Type => "Type",
            ASTKind::NamedType => "NamedType",
            ASTKind::ListType => "ListType",
            ASTKind::NonNullType => "NonNullType",
            ASTKind::SelectionSet => "SelectionSet",
            ASTKind::Selection => "Selection",
            ASTKind::Field => "Field",
            ASTKind::FragmentSpread => "FragmentSpread",
            ASTKind::InlineFragment => "InlineFragment",
            ASTKind::Directive => "Directive",
            ASTKind::Argument => "Argument",
            ASTKind::Value => "Value",
            ASTKind::Variable => "Variable",
            ASTKind::IntValue => "IntValue",
            ASTKind::FloatValue => "FloatValue",
            ASTKind::StringValue => "StringValue",
            ASTKind::BooleanValue => "BooleanValue",
            ASTKind::NullValue => "NullValue",
            ASTKind::EnumValue => "EnumValue",
            ASTKind::ListValue => "ListValue",
            ASTKind::ObjectValue => "ObjectValue",
            ASTKind::ObjectField => "ObjectField",
            ASTKind::Name => "Name",
        }
    }
}

impl fmt::Display for ASTKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTKind::Document => f.write_str("Document"),
            ASTKind::Definition => f.write_str("Definition"),
            ASTKind::OperationDefinition => f.write_str("Operation Definition"),
            ASTKind::OperationType => f.write_str("Operation Type"),
            ASTKind::FragmentDefinition => f.write_str("Fragment Definition"),
            ASTKind::VariableDefinition => f.write_str("Variable Definition"),
            ASTKind::Type => f.write_str("Type"),
            ASTKind::NamedType => f.write_str("Type Name"),
            ASTKind::ListType => f.write_str("List Type"),
            ASTKind::NonNullType => f.write_str("Non-null Type"),
            ASTKind::SelectionSet => f.write_str("Selection Set"),
            ASTKind::Selection => f.write_str("Selection"),
            ASTKind::Field => f.write_str("Field"),
            ASTKind::FragmentSpread => f.write_str("Fragment Spread"),
            ASTKind::InlineFragment => f.write_str("Inline Fragment"),
            ASTKind::Directive => f.write_str("Directive"),
            ASTKind::Argument => f.write_str("Argument"),
            ASTKind::Value => f.write_str("Value"),
            ASTKind::Variable => f.write_str("Variable"),
            ASTKind::IntValue => f.write_str("Integer"),
            ASTKind::FloatValue => f.write_str("Float"),
            ASTKind::StringValue => f.write_str("String"),
            ASTKind::BooleanValue => f.write_str("Boolean"),
            ASTKind::NullValue => f.write_str("Null"),
            ASTKind::EnumValue => f.write_str("Enum"),
            ASTKind::ListValue => f.write_str("List"),
            ASTKind::ObjectValue => f.write_str("Object"),
            ASTKind::ObjectField => f.write_str("Object Field"),
            ASTKind::Name => f.write_str("Name"),
        }
    }
}
