pub use super::span::{Position, Span};
use std::fmt;

/// AST Node of a name, which identifies fields, arguments, types, fragments, operations and
/// directives.
///
/// [Reference](https://spec.graphql.org/October2021/#Name)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Name {
    pub value: String,
    pub span: Span,
}

impl Name {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// AST Node of a boolean value
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct BooleanValue {
    pub value: bool,
    pub span: Span,
}

/// AST Node of a `null` literal.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Null-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NullValue {
    pub span: Span,
}

/// AST Node of a variable identifier value.
///
/// These are identifiers prefixed with a `$` sign, typically in variable definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Variable {
    pub name: Name,
    pub span: Span,
}

/// AST Node of an enum value.
///
/// These are typically written in all caps and snake case, e.g. "`MOBILE_WEB`".
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct EnumValue {
    pub value: String,
    pub span: Span,
}

/// AST Node of an integer value.
///
/// The value is kept as it was written in the source text. Integers in GraphQL are limited to
/// 32-bit signed, non-fractional values, which however isn't checked while parsing.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Int)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct IntValue {
    pub value: String,
    pub span: Span,
}

impl IntValue {
    /// Converts the literal to a 32-bit integer, if it's in range.
    #[inline]
    pub fn as_i32(&self) -> Option<i32> {
        lexical_core::parse::<i32>(self.value.as_bytes()).ok()
    }
}

/// AST Node of a floating point value.
///
/// Floats in GraphQL are signed, double precision values as defined by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_754).
/// They are however limited to finite values only. The value is kept as it was written in the
/// source text.
/// [Reference](https://spec.graphql.org/October2021/#sec-Float)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct FloatValue {
    pub value: String,
    pub span: Span,
}

impl FloatValue {
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        lexical_core::parse::<f64>(self.value.as_bytes())
            .ok()
            .filter(|value| value.is_finite())
    }
}

/// AST Node of a string value.
///
/// GraphQL has a number of escaped characters that are normalised away when parsing and
/// hence this `value` is expected to not contain escaped characters. Block strings have their
/// common indentation removed.
/// The strings in GraphQL can be compared to JSON Unicode strings.
/// [Reference](https://spec.graphql.org/October2021/#sec-String)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct StringValue {
    pub value: String,
    /// Whether the string was written as a `"""` block string.
    pub block: bool,
    pub span: Span,
}

/// AST Node of possible input values in GraphQL.
///
/// Fields and Directives accept input values as arguments.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Variable(Variable),
    String(StringValue),
    Float(FloatValue),
    Int(IntValue),
    Boolean(BooleanValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
    /// Representing JSON-like `null` values
    Null(NullValue),
}

impl Value {
    pub fn span(&self) -> Span {
        match self {
            Value::Variable(node) => node.span,
            Value::String(node) => node.span,
            Value::Float(node) => node.span,
            Value::Int(node) => node.span,
            Value::Boolean(node) => node.span,
            Value::Enum(node) => node.span,
            Value::List(node) => node.span,
            Value::Object(node) => node.span,
            Value::Null(node) => node.span,
        }
    }
}

/// AST Node for a List of values.
///
/// Lists in GraphQL are ordered sequences and serialize to JSON arrays. Its
/// contents may be any arbitrary value literal or variable.
/// [Reference](https://spec.graphql.org/October2021/#sec-List-Value)
#[derive(Debug, PartialEq, Clone)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub span: Span,
}

impl ListValue {
    /// Checks whether this List contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// AST Node for a field of an Object value.
///
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub span: Span,
}

/// AST Node for an Object value, which is a list of Object fields.
///
/// Objects in GraphQL are unordered lists of keyed input values and serialize to JSON objects.
/// An Object literal's contents may be any arbitrary value literal or variable.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub span: Span,
}

impl ObjectValue {
    /// Checks whether this Object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// AST Node for an Argument, which carries a name and a value.
///
/// [Reference](https://spec.graphql.org/October2021/#Argument)
#[derive(Debug, PartialEq, Clone)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub span: Span,
}

/// AST Node for a list of Arguments, which are similar to parameterized inputs to a function.
///
/// Arguments in GraphQL are unordered lists of inputs to a field's or directive's arguments.
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Arguments {
    pub children: Vec<Argument>,
}

impl Arguments {
    /// Checks whether this list of Arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Finds an argument by its name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.children
            .iter()
            .find(|argument| argument.name.value == name)
            .map(|argument| &argument.value)
    }
}

/// AST Node for GraphQL Directives, which provide a way to describe alternate behavior in GraphQL.
///
/// Typical directives that occur in queries are for example `@skip`, @include`, and `@defer`.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directive {
    pub name: Name,
    pub arguments: Arguments,
    pub span: Span,
}

/// AST Node for lists of GraphQL Directives.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Directives {
    pub children: Vec<Directive>,
}

impl Directives {
    /// Checks whether this list of Directives contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for Selection Sets, which provide a way to select more information on a given parent.
///
/// A parsed Selection Set always contains at least one selection.
/// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
#[derive(Debug, PartialEq, Clone)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub span: Span,
}

/// AST Node for Fields, which can be likened to functions or properties on a parent object.
///
/// In JSON this would represent a property in a JSON object.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug, PartialEq, Clone)]
pub struct Field {
    /// A Field's `alias`, which is used to request information under a different name than the
    /// Field's `name`.
    /// [Reference](https://spec.graphql.org/October2021/#sec-Field-Alias)
    pub alias: Option<Name>,
    /// A Field's `name`, which represents a resolver on a GraphQL schema's object type.
    pub name: Name,
    /// Arguments that are passed to a Field.
    ///
    /// When no Arguments are passed, this will be an empty
    /// list, as can be checked using `Arguments::is_empty`.
    pub arguments: Arguments,
    /// Directives that are annotating this Field.
    pub directives: Directives,
    /// A sub-Selection Set that is passed below this field to add selections to this field's
    /// returned GraphQL object type. Leaf fields have none.
    pub selection_set: Option<SelectionSet>,
    pub span: Span,
}

impl Field {
    /// Get the alias of the field, if present, otherwise get the name.
    #[inline]
    pub fn alias_or_name(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

/// AST Node for a Fragment Spread, which refers to a [`FragmentDefinition`] by name.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentSpread {
    /// The name of the [FragmentDefinition] that is spread in place of this selection. This is
    /// never `on`.
    pub name: Name,
    pub directives: Directives,
    pub span: Span,
}

/// AST Node for an inline Fragment definition with an additional [`SelectionSet`].
/// This may only be applied when the type condition matches or when no type condition is present.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Inline-Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Directives,
    pub selection_set: SelectionSet,
    pub span: Span,
}

/// AST Node of a selection as contained inside a [`SelectionSet`].
///
/// [Reference](https://spec.graphql.org/October2021/#Selection)
#[derive(Debug, PartialEq, Clone)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    /// Helper method to return the [`Field`] if the Selection is a `Field`.
    #[inline]
    pub fn field(&self) -> Option<&Field> {
        match self {
            Selection::Field(field) => Some(field),
            Selection::FragmentSpread(_) | Selection::InlineFragment(_) => None,
        }
    }

    /// Helper method to return the [`FragmentSpread`] if the Selection is a `FragmentSpread`.
    #[inline]
    pub fn fragment_spread(&self) -> Option<&FragmentSpread> {
        match self {
            Selection::FragmentSpread(spread) => Some(spread),
            Selection::Field(_) | Selection::InlineFragment(_) => None,
        }
    }

    /// Helper method to return the [`InlineFragment`] if the Selection is an `InlineFragment`.
    #[inline]
    pub fn inline_fragment(&self) -> Option<&InlineFragment> {
        match self {
            Selection::InlineFragment(fragment) => Some(fragment),
            Selection::Field(_) | Selection::FragmentSpread(_) => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Selection::Field(field) => field.span,
            Selection::FragmentSpread(spread) => spread.span,
            Selection::InlineFragment(fragment) => fragment.span,
        }
    }
}

/// AST Node for a reference to a named type, as used by type conditions and type references.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NamedType {
    pub name: Name,
    pub span: Span,
}

/// A list wrapper of a [Type], written as `[Type]`.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct ListType {
    pub of_type: Box<Type>,
    pub span: Span,
}

/// A non-null wrapper of a [Type], written as `Type!`. The wrapped type is never itself
/// non-null.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NonNullType {
    pub of_type: Box<Type>,
    pub span: Span,
}

/// AST Node for a type reference.
///
/// [`VariableDefinitions`] must describe their type when they're defined, including whether they expect
/// lists, non-null values, or a type reference, which is a recursive type definition.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Type {
    /// A reference to a named input type, which is a leaf node of a [Type].
    Named(NamedType),
    /// A list node wrapper for a Type, which indicates that a GraphQL API will always pass a list of the
    /// contained type in place.
    List(ListType),
    /// A non-null node wrapper for a Type, which indicates that a GraphQL API may not pass `null` instead
    /// of the contained type.
    NonNull(NonNullType),
}

impl Type {
    /// Unwraps a Type recursively and returns the `NamedType` that is contained within its
    /// wrappers.
    pub fn named_type(&self) -> &NamedType {
        match self {
            Type::Named(named) => named,
            Type::List(list) => list.of_type.named_type(),
            Type::NonNull(non_null) => non_null.of_type.named_type(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Type::Named(named) => named.span,
            Type::List(list) => list.span,
            Type::NonNull(non_null) => non_null.span,
        }
    }
}

/// AST Node for a variable definition.
///
/// [Reference](https://spec.graphql.org/October2021/#VariableDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition {
    /// The variable's name, as in, its identifier, which is prefixed with a `$` sign in the
    /// document.
    pub variable: Variable,
    /// Annotation of the type of a given variable, which ultimately leads to a type reference of
    /// an input type, as defined on a GraphQL schema.
    pub of_type: Type,
    /// A constant value that's used when the variable isn't passed.
    pub default_value: Option<Value>,
    pub directives: Directives,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct VariableDefinitions {
    pub children: Vec<VariableDefinition>,
}

impl VariableDefinitions {
    /// Checks whether the list of Variable Definitions is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a Fragment definition with an additional Selection Set.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDefinition {
    /// A given name of the Fragment Definition that is used by [FragmentSpread] selections to
    /// refer to this definition.
    pub name: Name,
    /// A given type condition's type name that must match before this fragment is applied.
    pub type_condition: NamedType,
    pub directives: Directives,
    pub selection_set: SelectionSet,
    pub span: Span,
}

/// AST Node for a kind of operation, as referred to by an [`OperationDefinition`].
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// The keyword introducing this kind of operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AST Node for an Operation Definition, which defines the entrypoint for GraphQL's execution.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Clone)]
pub struct OperationDefinition {
    /// The kind of operation that this definition specifies. Shorthand selection sets are
    /// queries.
    pub operation: OperationKind,
    // An optional name, as given to the operation definition.
    //
    // A [Document] may contain multiple
    // Operation Definitions from which a single one can be selected during execution. When a
    // Document contains only a single operation, it doesn't have to have a name.
    pub name: Option<Name>,
    /// A list of variables that the operation defines and accepts during execution.
    pub variable_definitions: VariableDefinitions,
    pub directives: Directives,
    pub selection_set: SelectionSet,
    pub span: Span,
}

/// AST Root Node for a GraphQL query language document. This contains one or more definitions of
/// fragments or operations.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub span: Span,
}

impl Document {
    /// Iterates over all operation definitions in document order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(Definition::operation)
    }

    /// Iterates over all fragment definitions in document order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(Definition::fragment)
    }
}

/// AST Node for a Definition inside a query language document, which may either be an Operation
/// Definition or a Fragment Definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

impl Definition {
    /// Helper method to return the [`OperationDefinition`] if the Definition is an `OperationDefinition`.
    #[inline]
    pub fn operation(&self) -> Option<&OperationDefinition> {
        match self {
            Definition::Operation(operation) => Some(operation),
            Definition::Fragment(_) => None,
        }
    }

    /// Helper method to return the [`FragmentDefinition`] if the Definition is a `FragmentDefinition`.
    #[inline]
    pub fn fragment(&self) -> Option<&FragmentDefinition> {
        match self {
            Definition::Fragment(fragment) => Some(fragment),
            Definition::Operation(_) => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Definition::Operation(operation) => operation.span,
            Definition::Fragment(fragment) => fragment.span,
        }
    }
}
