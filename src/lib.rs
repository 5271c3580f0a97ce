//! `graphql_ast_json`
//! =========
//!
//! _Fail-fast GraphQL document parsing with a stable JSON AST._
//!
//! The **`graphql_ast_json`** library parses GraphQL executable documents, i.e. queries,
//! mutations, subscriptions and fragments, into an owned AST and converts that AST to JSON.
//!
//! - Parsing stops at the first lexical or syntax error, which is reported with its line and
//!   column and a snippet of the offending source text.
//! - Nesting depth is bounded, so adversarial documents fail with an error instead of exhausting
//!   the stack.
//! - The JSON output tags every node with its `kind` and is deterministic, which makes it suitable
//!   to be stored or compared by a host.
//!
//! The crate does not validate documents against a schema, nor does it execute them, and the
//! GraphQL schema definition language isn't supported.
//!
//! ```
//! use graphql_ast_json::{parse_document, options::JsonOptions};
//!
//! let output = parse_document("query { hero { name } }").into_output(&JsonOptions::default());
//! assert!(output.errors.is_none());
//! assert_eq!(output.ast.unwrap()["kind"], "Document");
//! ```
//!
//! [A good place to start learning more about this crate is the `ast` module...](ast)

pub mod ast;
pub mod error;
pub mod options;

mod facade;

#[cfg(feature = "json")]
pub mod json;

pub use facade::{parse_document, parse_document_with_options, ParseResult};

#[cfg(feature = "json")]
pub use facade::ParseOutput;
