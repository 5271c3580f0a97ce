//! # GraphQL Query Language AST
//!
//! The `graphql_ast_json::ast` module contains the GraphQL query language AST, its lexer and the
//! trait to parse the AST. The AST implemented in this crate is specialized to only implement the
//! client-side GraphQL query language that clients use to make requests to a GraphQL service,
//! i.e. executable documents made of operations and fragments.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its main parts are:
//! - [`tokenize`], which splits a source text into [`Token`]s
//! - [`ParseNode`], a trait using which AST Nodes are parsed from source text
//! - [`ASTKind`], which names each kind of AST Node
//!
//! Every AST Node owns its children and carries the [`Span`] of source text it was parsed from.
//!
//! ```
//! use graphql_ast_json::ast::*;
//!
//! // Parse a source text into a Document AST root node
//! let ast = Document::parse("{ field }").unwrap();
//! assert_eq!(ast.definitions.len(), 1);
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_kind;
mod lexer;
mod parser;
pub(crate) mod span;

pub use ast::*;
pub use ast_kind::ASTKind;
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::ParseNode;
