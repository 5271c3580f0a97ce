use super::ast::*;
use super::ast_kind::ASTKind;
use super::lexer::TokenKind;
use crate::error::Result;
use crate::options::ParseOptions;

pub(crate) mod private {
    use super::super::lexer::{Lexer, Token, TokenKind};
    use super::super::span::{position_at, Position, Span};
    use crate::error::{Error, Result};
    use crate::options::ParseOptions;
    use std::fmt;

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains a [Lexer] with one token of lookahead and the current nesting depth.
    pub struct ParserContext<'a> {
        pub(crate) lexer: Lexer<'a>,
        pub(crate) peek: Option<Token<'a>>,
        pub(crate) last_end: Position,
        pub(crate) depth: usize,
        pub(crate) max_depth: usize,
        pub(crate) in_const: bool,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given input source string to parse from.
        pub(crate) fn new(source: &'a str, options: &ParseOptions) -> Self {
            ParserContext {
                lexer: Lexer::new(source),
                peek: None,
                last_end: Position::START,
                depth: 0,
                max_depth: options.max_depth,
                in_const: false,
            }
        }

        #[inline]
        pub(crate) fn source(&self) -> &'a str {
            self.lexer.source()
        }

        fn advance(&mut self) -> Result<Token<'a>> {
            match self.lexer.next() {
                Some(result) => result,
                None => {
                    let source = self.source();
                    let end = position_at(source, source.len());
                    Ok(Token {
                        kind: TokenKind::End,
                        span: Span::new(end, end),
                    })
                }
            }
        }

        /// Consumes the current token. The end of the input is never consumed and is returned
        /// repeatedly instead.
        #[inline]
        pub(crate) fn next(&mut self) -> Result<Token<'a>> {
            let token = match self.peek.take() {
                Some(token) => token,
                None => self.advance()?,
            };
            if token.kind == TokenKind::End {
                self.peek = Some(token.clone());
            } else {
                self.last_end = token.span.end;
            }
            Ok(token)
        }

        #[inline]
        pub(crate) fn peek(&mut self) -> Result<&Token<'a>> {
            let token = match self.peek.take() {
                Some(token) => token,
                None => self.advance()?,
            };
            let token: &Token<'a> = self.peek.insert(token);
            Ok(token)
        }

        #[inline]
        pub(crate) fn peek_is(&mut self, kind: TokenKind<'a>) -> Result<bool> {
            Ok(self.peek()?.kind == kind)
        }

        /// Consumes the current token if it matches `kind`.
        #[inline]
        pub(crate) fn eat(&mut self, kind: TokenKind<'a>) -> Result<bool> {
            if self.peek_is(kind)? {
                self.next()?;
                Ok(true)
            } else {
                Ok(false)
            }
        }

        /// Consumes a punctuator token and fails unless it matches `kind`.
        pub(crate) fn expect(&mut self, kind: TokenKind<'a>) -> Result<Span> {
            let token = self.next()?;
            if token.kind == kind {
                Ok(token.span)
            } else {
                Err(self.unexpected(&token, &kind))
            }
        }

        /// Consumes a name token and fails unless it's the given `keyword`.
        pub(crate) fn expect_keyword(&mut self, keyword: &str) -> Result<Span> {
            let token = self.next()?;
            match token.kind {
                TokenKind::Name(name) if name == keyword => Ok(token.span),
                _ => Err(self.unexpected(&token, format_args!("\"{}\"", keyword))),
            }
        }

        pub(crate) fn unexpected(&self, token: &Token<'a>, expected: impl fmt::Display) -> Error {
            let expected = expected.to_string();
            Error::syntax(
                self.source(),
                token.span,
                format!("Expected {}, found {}", expected, token.kind),
                Some(expected),
            )
        }

        /// Returns the span from `start` up to the end of the last consumed token.
        #[inline]
        pub(crate) fn span_from(&self, start: Span) -> Span {
            Span::new(start.start, self.last_end)
        }

        /// Enters a nested list, object, selection set or list type opened by the token at `at`.
        pub(crate) fn enter(&mut self, at: Span) -> Result<()> {
            self.depth += 1;
            if self.depth > self.max_depth {
                Err(Error::syntax(
                    self.source(),
                    at,
                    format!(
                        "Document exceeds maximum nesting depth of {}",
                        self.max_depth
                    ),
                    None,
                ))
            } else {
                Ok(())
            }
        }

        #[inline]
        pub(crate) fn leave(&mut self) {
            self.depth -= 1;
        }

        /// Fails unless the whole input has been consumed.
        pub(crate) fn finish(&mut self) -> Result<()> {
            let token = self.next()?;
            if token.kind == TokenKind::End {
                Ok(())
            } else {
                Err(self.unexpected(&token, &TokenKind::End))
            }
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode: Sized {
        fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Self>;
    }
}

use private::{ParseNode as _, ParserContext};

/// Trait for parsing AST Nodes from source texts using recursive descent and a lexer.
///
/// This trait is implemented by all AST Nodes and can hence be used to granularly parse GraphQL language.
/// However, mostly this will be used via `Document::parse`. The entire source text must be
/// consumed by the parsed node, otherwise parsing fails.
pub trait ParseNode: private::ParseNode {
    /// Parse an input source text into the implementor's AST Node structure.
    fn parse<S: AsRef<str>>(source: S) -> Result<Self> {
        Self::parse_with_options(source, &ParseOptions::default())
    }

    /// Parse an input source text into the implementor's AST Node structure, with a custom
    /// nesting depth limit.
    fn parse_with_options<S: AsRef<str>>(source: S, options: &ParseOptions) -> Result<Self> {
        let mut ctx = ParserContext::new(source.as_ref(), options);
        let node = Self::new_with_ctx(&mut ctx)?;
        ctx.finish()?;
        Ok(node)
    }
}

impl<T: private::ParseNode> ParseNode for T {}

impl private::ParseNode for Name {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Name> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::Name(value) => Ok(Name {
                value: value.to_string(),
                span: token.span,
            }),
            _ => Err(ctx.unexpected(&token, ASTKind::Name)),
        }
    }
}

impl private::ParseNode for BooleanValue {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<BooleanValue> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::Name("true") => Ok(BooleanValue {
                value: true,
                span: token.span,
            }),
            TokenKind::Name("false") => Ok(BooleanValue {
                value: false,
                span: token.span,
            }),
            _ => Err(ctx.unexpected(&token, ASTKind::BooleanValue)),
        }
    }
}

impl private::ParseNode for NullValue {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<NullValue> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::Name("null") => Ok(NullValue { span: token.span }),
            _ => Err(ctx.unexpected(&token, ASTKind::NullValue)),
        }
    }
}

impl private::ParseNode for EnumValue {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<EnumValue> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::Name("true" | "false" | "null") => {
                Err(ctx.unexpected(&token, ASTKind::EnumValue))
            }
            TokenKind::Name(value) => Ok(EnumValue {
                value: value.to_string(),
                span: token.span,
            }),
            _ => Err(ctx.unexpected(&token, ASTKind::EnumValue)),
        }
    }
}

impl private::ParseNode for FloatValue {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<FloatValue> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::Float(value) => Ok(FloatValue {
                value: value.to_string(),
                span: token.span,
            }),
            _ => Err(ctx.unexpected(&token, ASTKind::FloatValue)),
        }
    }
}

impl private::ParseNode for IntValue {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<IntValue> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::Int(value) => Ok(IntValue {
                value: value.to_string(),
                span: token.span,
            }),
            _ => Err(ctx.unexpected(&token, ASTKind::IntValue)),
        }
    }
}

impl private::ParseNode for StringValue {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<StringValue> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::String(value) => Ok(StringValue {
                value: value.into_owned(),
                block: false,
                span: token.span,
            }),
            TokenKind::BlockString(value) => Ok(StringValue {
                value: value.into_owned(),
                block: true,
                span: token.span,
            }),
            _ => Err(ctx.unexpected(&token, ASTKind::StringValue)),
        }
    }
}

impl private::ParseNode for Variable {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Variable> {
        let token = ctx.next()?;
        if token.kind != TokenKind::Dollar {
            return Err(ctx.unexpected(&token, ASTKind::Variable));
        }
        let name = Name::new_with_ctx(ctx)?;
        Ok(Variable {
            span: token.span.to(&name.span),
            name,
        })
    }
}

impl private::ParseNode for Value {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Value> {
        let in_const = ctx.in_const;
        match &ctx.peek()?.kind {
            TokenKind::Dollar if in_const => {
                let token = ctx.next()?;
                Err(ctx.unexpected(&token, "constant Value"))
            }
            TokenKind::Dollar => Variable::new_with_ctx(ctx).map(Value::Variable),
            TokenKind::Name("true" | "false") => {
                BooleanValue::new_with_ctx(ctx).map(Value::Boolean)
            }
            TokenKind::Name("null") => NullValue::new_with_ctx(ctx).map(Value::Null),
            TokenKind::Name(_) => EnumValue::new_with_ctx(ctx).map(Value::Enum),
            TokenKind::Float(_) => FloatValue::new_with_ctx(ctx).map(Value::Float),
            TokenKind::Int(_) => IntValue::new_with_ctx(ctx).map(Value::Int),
            TokenKind::String(_) | TokenKind::BlockString(_) => {
                StringValue::new_with_ctx(ctx).map(Value::String)
            }
            TokenKind::BracketOpen => ListValue::new_with_ctx(ctx).map(Value::List),
            TokenKind::BraceOpen => ObjectValue::new_with_ctx(ctx).map(Value::Object),
            _ => {
                let token = ctx.next()?;
                Err(ctx.unexpected(&token, ASTKind::Value))
            }
        }
    }
}

impl private::ParseNode for ObjectField {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<ObjectField> {
        let token = ctx.next()?;
        let name = match token.kind {
            TokenKind::Name(value) => Name {
                value: value.to_string(),
                span: token.span,
            },
            _ => return Err(ctx.unexpected(&token, ASTKind::ObjectField)),
        };
        ctx.expect(TokenKind::Colon)?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(ObjectField {
            span: ctx.span_from(name.span),
            name,
            value,
        })
    }
}

impl private::ParseNode for ObjectValue {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<ObjectValue> {
        let open = ctx.next()?;
        if open.kind != TokenKind::BraceOpen {
            return Err(ctx.unexpected(&open, ASTKind::ObjectValue));
        }
        ctx.enter(open.span)?;
        let mut fields = Vec::new();
        while !ctx.eat(TokenKind::BraceClose)? {
            fields.push(ObjectField::new_with_ctx(ctx)?);
        }
        ctx.leave();
        Ok(ObjectValue {
            fields,
            span: ctx.span_from(open.span),
        })
    }
}

impl private::ParseNode for ListValue {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<ListValue> {
        let open = ctx.next()?;
        if open.kind != TokenKind::BracketOpen {
            return Err(ctx.unexpected(&open, ASTKind::ListValue));
        }
        ctx.enter(open.span)?;
        let mut values = Vec::new();
        while !ctx.eat(TokenKind::BracketClose)? {
            values.push(Value::new_with_ctx(ctx)?);
        }
        ctx.leave();
        Ok(ListValue {
            values,
            span: ctx.span_from(open.span),
        })
    }
}

impl private::ParseNode for Argument {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Argument> {
        let token = ctx.next()?;
        let name = match token.kind {
            TokenKind::Name(value) => Name {
                value: value.to_string(),
                span: token.span,
            },
            _ => return Err(ctx.unexpected(&token, ASTKind::Argument)),
        };
        ctx.expect(TokenKind::Colon)?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(Argument {
            span: ctx.span_from(name.span),
            name,
            value,
        })
    }
}

impl private::ParseNode for Arguments {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Arguments> {
        if !ctx.eat(TokenKind::ParenOpen)? {
            return Ok(Arguments::default());
        }
        let mut children = vec![Argument::new_with_ctx(ctx)?];
        while !ctx.eat(TokenKind::ParenClose)? {
            children.push(Argument::new_with_ctx(ctx)?);
        }
        Ok(Arguments { children })
    }
}

impl private::ParseNode for Directive {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Directive> {
        let token = ctx.next()?;
        if token.kind != TokenKind::At {
            return Err(ctx.unexpected(&token, ASTKind::Directive));
        }
        let name = Name::new_with_ctx(ctx)?;
        let arguments = Arguments::new_with_ctx(ctx)?;
        Ok(Directive {
            name,
            arguments,
            span: ctx.span_from(token.span),
        })
    }
}

impl private::ParseNode for Directives {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Directives> {
        let mut children = Vec::new();
        while ctx.peek_is(TokenKind::At)? {
            children.push(Directive::new_with_ctx(ctx)?);
        }
        Ok(Directives { children })
    }
}

impl private::ParseNode for Field {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Field> {
        let name_or_alias = Name::new_with_ctx(ctx)?;
        let start = name_or_alias.span;
        let (alias, name) = if ctx.eat(TokenKind::Colon)? {
            (Some(name_or_alias), Name::new_with_ctx(ctx)?)
        } else {
            (None, name_or_alias)
        };

        let arguments = Arguments::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = if ctx.peek_is(TokenKind::BraceOpen)? {
            Some(SelectionSet::new_with_ctx(ctx)?)
        } else {
            None
        };

        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: ctx.span_from(start),
        })
    }
}

/// Parses a fragment's name, which may be any name except `on`.
fn fragment_name(ctx: &mut ParserContext<'_>) -> Result<Name> {
    let token = ctx.next()?;
    match token.kind {
        TokenKind::Name(value) if value != "on" => Ok(Name {
            value: value.to_string(),
            span: token.span,
        }),
        _ => Err(ctx.unexpected(&token, "Fragment Name")),
    }
}

fn fragment_spread_after(ctx: &mut ParserContext<'_>, ellipsis: Span) -> Result<FragmentSpread> {
    let name = fragment_name(ctx)?;
    let directives = Directives::new_with_ctx(ctx)?;
    Ok(FragmentSpread {
        name,
        directives,
        span: ctx.span_from(ellipsis),
    })
}

fn inline_fragment_after(ctx: &mut ParserContext<'_>, ellipsis: Span) -> Result<InlineFragment> {
    let type_condition = if ctx.eat(TokenKind::Name("on"))? {
        Some(NamedType::new_with_ctx(ctx)?)
    } else {
        None
    };
    let directives = Directives::new_with_ctx(ctx)?;
    let selection_set = SelectionSet::new_with_ctx(ctx)?;
    Ok(InlineFragment {
        type_condition,
        directives,
        selection_set,
        span: ctx.span_from(ellipsis),
    })
}

impl private::ParseNode for FragmentSpread {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<FragmentSpread> {
        let ellipsis = ctx.expect(TokenKind::Ellipsis)?;
        fragment_spread_after(ctx, ellipsis)
    }
}

impl private::ParseNode for InlineFragment {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<InlineFragment> {
        let ellipsis = ctx.expect(TokenKind::Ellipsis)?;
        inline_fragment_after(ctx, ellipsis)
    }
}

impl private::ParseNode for NamedType {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<NamedType> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::Name(value) => Ok(NamedType {
                name: Name {
                    value: value.to_string(),
                    span: token.span,
                },
                span: token.span,
            }),
            _ => Err(ctx.unexpected(&token, ASTKind::NamedType)),
        }
    }
}

impl private::ParseNode for Selection {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Selection> {
        match &ctx.peek()?.kind {
            TokenKind::Name(_) => Field::new_with_ctx(ctx).map(Selection::Field),
            TokenKind::Ellipsis => {
                let ellipsis = ctx.next()?.span;
                match &ctx.peek()?.kind {
                    TokenKind::At | TokenKind::BraceOpen | TokenKind::Name("on") => {
                        inline_fragment_after(ctx, ellipsis).map(Selection::InlineFragment)
                    }
                    TokenKind::Name(_) => {
                        fragment_spread_after(ctx, ellipsis).map(Selection::FragmentSpread)
                    }
                    _ => {
                        let token = ctx.next()?;
                        Err(ctx.unexpected(&token, ASTKind::Selection))
                    }
                }
            }
            _ => {
                let token = ctx.next()?;
                Err(ctx.unexpected(&token, ASTKind::Selection))
            }
        }
    }
}

impl private::ParseNode for SelectionSet {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<SelectionSet> {
        let open = ctx.next()?;
        if open.kind != TokenKind::BraceOpen {
            return Err(ctx.unexpected(&open, ASTKind::SelectionSet));
        }
        ctx.enter(open.span)?;
        let mut selections = vec![Selection::new_with_ctx(ctx)?];
        while !ctx.eat(TokenKind::BraceClose)? {
            selections.push(Selection::new_with_ctx(ctx)?);
        }
        ctx.leave();
        Ok(SelectionSet {
            selections,
            span: ctx.span_from(open.span),
        })
    }
}

impl private::ParseNode for Type {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Type> {
        let token = ctx.next()?;
        let of_type = match token.kind {
            TokenKind::Name(value) => Type::Named(NamedType {
                name: Name {
                    value: value.to_string(),
                    span: token.span,
                },
                span: token.span,
            }),
            TokenKind::BracketOpen => {
                ctx.enter(token.span)?;
                let inner = Type::new_with_ctx(ctx)?;
                ctx.expect(TokenKind::BracketClose)?;
                ctx.leave();
                Type::List(ListType {
                    of_type: Box::new(inner),
                    span: ctx.span_from(token.span),
                })
            }
            _ => return Err(ctx.unexpected(&token, ASTKind::Type)),
        };
        if ctx.eat(TokenKind::Exclam)? {
            Ok(Type::NonNull(NonNullType {
                of_type: Box::new(of_type),
                span: ctx.span_from(token.span),
            }))
        } else {
            Ok(of_type)
        }
    }
}

impl private::ParseNode for VariableDefinition {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<VariableDefinition> {
        let variable = Variable::new_with_ctx(ctx)?;
        ctx.expect(TokenKind::Colon)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = if ctx.eat(TokenKind::Equal)? {
            ctx.in_const = true;
            let value = Value::new_with_ctx(ctx);
            ctx.in_const = false;
            Some(value?)
        } else {
            None
        };
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(VariableDefinition {
            span: ctx.span_from(variable.span),
            variable,
            of_type,
            default_value,
            directives,
        })
    }
}

impl private::ParseNode for VariableDefinitions {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<VariableDefinitions> {
        if !ctx.eat(TokenKind::ParenOpen)? {
            return Ok(VariableDefinitions::default());
        }
        let mut children = vec![VariableDefinition::new_with_ctx(ctx)?];
        while !ctx.eat(TokenKind::ParenClose)? {
            children.push(VariableDefinition::new_with_ctx(ctx)?);
        }
        Ok(VariableDefinitions { children })
    }
}

impl private::ParseNode for FragmentDefinition {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<FragmentDefinition> {
        let start = ctx.expect_keyword("fragment")?;
        let name = fragment_name(ctx)?;
        ctx.expect_keyword("on")?;
        let type_condition = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: ctx.span_from(start),
        })
    }
}

impl private::ParseNode for OperationKind {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<OperationKind> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::Name("query") => Ok(OperationKind::Query),
            TokenKind::Name("mutation") => Ok(OperationKind::Mutation),
            TokenKind::Name("subscription") => Ok(OperationKind::Subscription),
            _ => Err(ctx.unexpected(&token, ASTKind::OperationType)),
        }
    }
}

impl private::ParseNode for OperationDefinition {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<OperationDefinition> {
        if ctx.peek_is(TokenKind::BraceOpen)? {
            let selection_set = SelectionSet::new_with_ctx(ctx)?;
            return Ok(OperationDefinition {
                operation: OperationKind::Query,
                name: None,
                variable_definitions: VariableDefinitions::default(),
                directives: Directives::default(),
                span: selection_set.span,
                selection_set,
            });
        }
        let start = ctx.peek()?.span;
        let operation = OperationKind::new_with_ctx(ctx)?;
        let name = if let TokenKind::Name(_) = ctx.peek()?.kind {
            Some(Name::new_with_ctx(ctx)?)
        } else {
            None
        };
        let variable_definitions = VariableDefinitions::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            span: ctx.span_from(start),
        })
    }
}

impl private::ParseNode for Definition {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Definition> {
        match &ctx.peek()?.kind {
            TokenKind::BraceOpen | TokenKind::Name("query" | "mutation" | "subscription") => {
                OperationDefinition::new_with_ctx(ctx).map(Definition::Operation)
            }
            TokenKind::Name("fragment") => {
                FragmentDefinition::new_with_ctx(ctx).map(Definition::Fragment)
            }
            _ => {
                let token = ctx.next()?;
                Err(ctx.unexpected(&token, ASTKind::Definition))
            }
        }
    }
}

impl private::ParseNode for Document {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'_>) -> Result<Document> {
        let mut definitions = vec![Definition::new_with_ctx(ctx)?];
        while !ctx.peek_is(TokenKind::End)? {
            definitions.push(Definition::new_with_ctx(ctx)?);
        }
        let end = ctx.peek()?.span.end;
        Ok(Document {
            definitions,
            span: Span::new(Position::START, end),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::ast::*;
    use super::ParseNode;
    use crate::error::{Error, ErrorType};
    use crate::options::ParseOptions;
    use indoc::indoc;

    fn parse_error<T: ParseNode + std::fmt::Debug>(source: &str) -> Error {
        T::parse(source).expect_err("parsing should fail")
    }

    fn assert_error_at<T: ParseNode + std::fmt::Debug>(
        source: &str,
        message: &str,
        line: usize,
        column: usize,
    ) {
        let error = parse_error::<T>(source);
        assert_eq!(error.message(), message, "for source {:?}", source);
        assert_eq!(
            (error.location().line, error.location().column),
            (line, column),
            "for source {:?}",
            source
        );
    }

    #[test]
    fn error() {
        let error = parse_error::<Document>("query { document { $ }}");
        assert_eq!(error.location().line, 1);
        assert_eq!(error.location().column, 20);
        assert_eq!(error.error_type(), ErrorType::Syntax);

        let error = parse_error::<Document>(indoc! {"
            query {
              document {
                $
              }
            }
        "});
        assert_eq!(error.location().line, 3);
        assert_eq!(error.location().column, 5);
        assert_eq!(error.message(), "Expected Selection, found \"$\"");
    }

    #[test]
    fn named_type() {
        let named = NamedType::parse("TypeName").unwrap();
        assert_eq!(named.name.as_str(), "TypeName");
        assert_eq!(named.span.range(), 0..8);
    }

    #[test]
    fn variable() {
        let variable = Variable::parse("$test").unwrap();
        assert_eq!(variable.name.as_str(), "test");
        assert_eq!(variable.span.range(), 0..5);
    }

    #[test]
    fn lists() {
        let list = ListValue::parse("[]").unwrap();
        assert!(list.is_empty());

        let list = ListValue::parse("[null, null]").unwrap();
        assert_eq!(list.values.len(), 2);
        assert!(list
            .values
            .iter()
            .all(|value| matches!(value, Value::Null(_))));
        assert_eq!(list.span.range(), 0..12);
    }

    #[test]
    fn objects() {
        let object = ObjectValue::parse("{}").unwrap();
        assert!(object.is_empty());

        let object = ObjectValue::parse("{ test: true }").unwrap();
        assert_eq!(object.fields.len(), 1);
        assert_eq!(object.fields[0].name.as_str(), "test");
        assert!(matches!(
            object.fields[0].value,
            Value::Boolean(BooleanValue { value: true, .. })
        ));
    }

    #[test]
    fn values() {
        assert!(matches!(
            Value::parse("true").unwrap(),
            Value::Boolean(BooleanValue { value: true, .. })
        ));
        assert!(matches!(
            Value::parse("false").unwrap(),
            Value::Boolean(BooleanValue { value: false, .. })
        ));
        assert!(matches!(
            Value::parse("$var").unwrap(),
            Value::Variable(Variable { name, .. }) if name.as_str() == "var"
        ));
        assert!(matches!(
            Value::parse("Opt").unwrap(),
            Value::Enum(EnumValue { value, .. }) if value == "Opt"
        ));
        assert!(matches!(
            Value::parse("123").unwrap(),
            Value::Int(IntValue { value, .. }) if value == "123"
        ));
        assert!(matches!(
            Value::parse("-0.0").unwrap(),
            Value::Float(FloatValue { value, .. }) if value == "-0.0"
        ));
        assert!(matches!(Value::parse("null").unwrap(), Value::Null(_)));
        assert!(matches!(
            Value::parse("\"hello world\"").unwrap(),
            Value::String(StringValue { value, block: false, .. }) if value == "hello world"
        ));
        assert!(matches!(
            Value::parse("\"\"\"  block\n  string \"\"\"").unwrap(),
            Value::String(StringValue { value, block: true, .. }) if value == "  block\nstring "
        ));
        assert!(matches!(
            Value::parse("[[1], {a: [2]}]").unwrap(),
            Value::List(ListValue { values, .. }) if values.len() == 2
        ));
    }

    #[test]
    fn bad_values() {
        assert_error_at::<Value>("}", "Expected Value, found \"}\"", 1, 1);
        assert_error_at::<Value>("[1, 2", "Expected Value, found <EOF>", 1, 6);
        assert_error_at::<Value>("{ a 1 }", "Expected \":\", found Int \"1\"", 1, 5);
        assert_error_at::<Value>("{ 1: 1 }", "Expected Object Field, found Int \"1\"", 1, 3);
        assert_error_at::<Value>("1 2", "Expected <EOF>, found Int \"2\"", 1, 3);
    }

    #[test]
    fn arguments() {
        let arguments = Arguments::parse("").unwrap();
        assert!(arguments.is_empty());

        let arguments = Arguments::parse("(a: 1, b: 2)").unwrap();
        let names: Vec<_> = arguments
            .children
            .iter()
            .map(|argument| argument.name.as_str())
            .collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(arguments.children[1].span.range(), 7..11);

        assert_error_at::<Arguments>("()", "Expected Argument, found \")\"", 1, 2);
    }

    #[test]
    fn directives() {
        assert!(Directives::parse("#").unwrap().is_empty());

        let directives = Directives::parse("@defer @defer").unwrap();
        assert_eq!(directives.children.len(), 2);
        assert!(directives.children[0].arguments.is_empty());

        let directive = Directive::parse("@include(if: $hi)").unwrap();
        assert_eq!(directive.name.as_str(), "include");
        assert!(matches!(
            directive.arguments.get("if"),
            Some(Value::Variable(Variable { name, .. })) if name.as_str() == "hi"
        ));
        assert_eq!(directive.span.range(), 0..17);
    }

    #[test]
    fn fields() {
        let field = Field::parse("name").unwrap();
        assert!(field.alias.is_none());
        assert_eq!(field.name.as_str(), "name");
        assert!(field.arguments.is_empty());
        assert!(field.directives.is_empty());
        assert!(field.selection_set.is_none());

        let field = Field::parse("alias: name(x: null) @skip(if: true) { child }").unwrap();
        assert_eq!(field.alias.as_ref().map(Name::as_str), Some("alias"));
        assert_eq!(field.name.as_str(), "name");
        assert!(matches!(field.arguments.get("x"), Some(Value::Null(_))));
        assert_eq!(field.directives.children[0].name.as_str(), "skip");
        let selection_set = field.selection_set.as_ref().unwrap();
        assert_eq!(
            selection_set.selections[0].field().unwrap().name.as_str(),
            "child"
        );
        assert_eq!(field.span.range().start, 0);
        assert_eq!(field.span.end.column, 47);
    }

    #[test]
    fn fragment_spreads_and_inline_fragments() {
        let selection_set =
            SelectionSet::parse("{ ...Frag @defer ... on Type { a } ... @skip(if: true) { b } ... { c } }")
                .unwrap();
        let selections = &selection_set.selections;
        assert_eq!(selections.len(), 4);

        let spread = selections[0].fragment_spread().unwrap();
        assert_eq!(spread.name.as_str(), "Frag");
        assert_eq!(spread.directives.children.len(), 1);
        assert_eq!(spread.span.range(), 2..16);

        let inline = selections[1].inline_fragment().unwrap();
        assert_eq!(
            inline.type_condition.as_ref().map(|named| named.name.as_str()),
            Some("Type")
        );
        assert!(selections[2]
            .inline_fragment()
            .unwrap()
            .type_condition
            .is_none());
        assert!(selections[3].inline_fragment().unwrap().directives.is_empty());

        assert!(FragmentSpread::parse("...Frag").is_ok());
        assert!(InlineFragment::parse("... on Type { a }").is_ok());
    }

    #[test]
    fn selection_sets() {
        assert_error_at::<SelectionSet>("{}", "Expected Selection, found \"}\"", 1, 2);
        assert_error_at::<SelectionSet>("{ { }", "Expected Selection, found \"{\"", 1, 3);
        assert_error_at::<SelectionSet>("{ ... }", "Expected Selection, found \"}\"", 1, 7);
        assert_error_at::<SelectionSet>("{ a", "Expected Selection, found <EOF>", 1, 4);
    }

    #[test]
    fn types() {
        let of_type = Type::parse("Int").unwrap();
        assert!(matches!(of_type, Type::Named(_)));

        let of_type = Type::parse("[Int!]!").unwrap();
        match of_type {
            Type::NonNull(NonNullType { of_type, span }) => {
                assert_eq!(span.range(), 0..7);
                match *of_type {
                    Type::List(ListType { of_type, .. }) => {
                        assert!(matches!(*of_type, Type::NonNull(_)))
                    }
                    other => panic!("unexpected type {:?}", other),
                }
            }
            other => panic!("unexpected type {:?}", other),
        }

        assert_error_at::<Type>("Int!!", "Expected <EOF>, found \"!\"", 1, 5);
        assert_error_at::<Type>("[Int", "Expected \"]\", found <EOF>", 1, 5);
        assert_error_at::<Type>("!", "Expected Type, found \"!\"", 1, 1);
    }

    #[test]
    fn variable_definitions() {
        let definitions =
            VariableDefinitions::parse("($a: Int = 1, $b: [String!]! @deprecated)").unwrap();
        assert_eq!(definitions.children.len(), 2);

        let first = &definitions.children[0];
        assert_eq!(first.variable.name.as_str(), "a");
        assert!(matches!(first.default_value, Some(Value::Int(_))));
        assert_eq!(first.span.range(), 1..12);

        let second = &definitions.children[1];
        assert!(second.default_value.is_none());
        assert_eq!(second.of_type.named_type().name.as_str(), "String");
        assert_eq!(second.directives.children.len(), 1);

        assert_error_at::<VariableDefinitions>(
            "($a: Int = { a: $b })",
            "Expected constant Value, found \"$\"",
            1,
            17,
        );
        assert_error_at::<VariableDefinitions>(
            "()",
            "Expected Variable, found \")\"",
            1,
            2,
        );
        assert!(VariableDefinitions::parse("($a: Int = 1) ").is_ok());
    }

    #[test]
    fn fragment_definitions() {
        let fragment =
            FragmentDefinition::parse("fragment Frag on Query @skip(if: false) { hello }")
                .unwrap();
        assert_eq!(fragment.name.as_str(), "Frag");
        assert_eq!(fragment.type_condition.name.as_str(), "Query");
        assert_eq!(fragment.directives.children.len(), 1);

        assert_error_at::<FragmentDefinition>(
            "fragment on on Query { hello }",
            "Expected Fragment Name, found Name \"on\"",
            1,
            10,
        );
        assert_error_at::<FragmentDefinition>(
            "fragment Frag Query { hello }",
            "Expected \"on\", found Name \"Query\"",
            1,
            15,
        );
        assert_error_at::<FragmentDefinition>(
            "fragment Frag on Query",
            "Expected Selection Set, found <EOF>",
            1,
            23,
        );
    }

    #[test]
    fn operations() {
        let operation = OperationDefinition::parse("{ hello }").unwrap();
        assert_eq!(operation.operation, OperationKind::Query);
        assert!(operation.name.is_none());
        assert!(operation.variable_definitions.is_empty());

        let operation = OperationDefinition::parse(
            "mutation Create($input: Input!) @live { create(input: $input) { id } }",
        )
        .unwrap();
        assert_eq!(operation.operation, OperationKind::Mutation);
        assert_eq!(operation.name.as_ref().map(Name::as_str), Some("Create"));
        assert_eq!(operation.variable_definitions.children.len(), 1);
        assert_eq!(operation.directives.children.len(), 1);

        let operation = OperationDefinition::parse("subscription { onEvent }").unwrap();
        assert_eq!(operation.operation, OperationKind::Subscription);
        assert!(operation.name.is_none());

        assert_error_at::<OperationDefinition>(
            "query Name",
            "Expected Selection Set, found <EOF>",
            1,
            11,
        );
        assert_error_at::<OperationDefinition>(
            "mutation { }",
            "Expected Selection, found \"}\"",
            1,
            12,
        );
    }

    #[test]
    fn documents() {
        let document = Document::parse(indoc! {"
            query Hero($episode: Episode = JEDI) {
              hero(episode: $episode) {
                name
                ...Friends
              }
            }

            fragment Friends on Character {
              friends { name }
            }
        "})
        .unwrap();
        assert_eq!(document.definitions.len(), 2);
        assert_eq!(document.definitions[1].span().start.line, 8);
        assert_eq!(document.span.start, Position::START);

        assert_error_at::<Document>("", "Expected Definition, found <EOF>", 1, 1);
        assert_error_at::<Document>("# just a comment\n", "Expected Definition, found <EOF>", 2, 1);
        assert_error_at::<Document>("{ hero( ", "Expected Argument, found <EOF>", 1, 9);
        assert_error_at::<Document>("type Query { a: Int }", "Expected Definition, found Name \"type\"", 1, 1);
        assert_error_at::<Document>("{ a } }", "Expected Definition, found \"}\"", 1, 7);
    }

    #[test]
    fn lexical_errors_surface() {
        let error = parse_error::<Document>("{ hello(arg: \"unterminated) }");
        assert_eq!(error.error_type(), ErrorType::Lexical);
        assert_eq!(error.message(), "Unterminated string");
        assert_eq!(error.location().column, 14);

        let error = parse_error::<Document>("{ a(x: 0123) }");
        assert_eq!(error.error_type(), ErrorType::Lexical);
    }

    #[test]
    fn depth_guard() {
        let options = ParseOptions { max_depth: 3 };
        assert!(Document::parse_with_options("{ a { b { c } } }", &options).is_ok());
        let error = Document::parse_with_options("{ a { b { c { d } } } }", &options).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Syntax);
        assert_eq!(error.message(), "Document exceeds maximum nesting depth of 3");
        assert_eq!(error.location().column, 13);

        assert!(Value::parse_with_options("[[[1]]]", &options).is_ok());
        assert!(Value::parse_with_options("[[[[1]]]]", &options).is_err());
        assert!(Value::parse_with_options("{a: [{b: 1}]}", &options).is_ok());
        assert!(Value::parse_with_options("{a: [{b: [1]}]}", &options).is_err());
        assert!(Type::parse_with_options("[[[Int]]]", &options).is_ok());
        assert!(Type::parse_with_options("[[[[Int]]]]", &options).is_err());
    }

    #[test]
    fn nested_selection_sets() {
        let document = Document::parse("{ a { b { c } } }").unwrap();
        let operation = document.definitions[0].operation().unwrap();
        let a = operation.selection_set.selections[0].field().unwrap();
        assert_eq!(a.name.as_str(), "a");
        let b = a.selection_set.as_ref().unwrap().selections[0]
            .field()
            .unwrap();
        assert_eq!(b.name.as_str(), "b");
        let inner = b.selection_set.as_ref().unwrap();
        assert_eq!(inner.selections.len(), 1);
        let c = inner.selections[0].field().unwrap();
        assert_eq!(c.name.as_str(), "c");
        assert!(c.selection_set.is_none());
        assert_eq!(inner.span.start.column, 9);
        assert_eq!(inner.span.end.column, 14);
    }

    #[test]
    fn deep_nesting_is_rejected_without_overflow() {
        let source = format!("{{ a(x: {}1{}) }}", "[".repeat(100_000), "]".repeat(100_000));
        let error = Document::parse(source).unwrap_err();
        assert_eq!(
            error.message(),
            "Document exceeds maximum nesting depth of 128"
        );
    }
}
