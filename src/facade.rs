//! # Parsing entry point
//!
//! [parse_document] turns a source text into a [ParseResult], which holds either the parsed
//! [Document] or the first [Error] that was encountered, but never both. Parsing is stateless and
//! may run concurrently from any number of threads.
//!
//! ```
//! use graphql_ast_json::{parse_document, ParseResult};
//!
//! match parse_document("query { hero { name } }") {
//!     ParseResult::Document(document) => assert_eq!(document.definitions.len(), 1),
//!     ParseResult::Error(error) => panic!("{}", error),
//! }
//! ```

use crate::ast::{Document, ParseNode};
use crate::error::{Error, Result};
use crate::options::ParseOptions;
use log::{debug, trace};

#[cfg(feature = "json")]
use crate::json::ToJson;
#[cfg(feature = "json")]
use crate::options::JsonOptions;

/// The outcome of parsing a document: exactly one of a [Document] or an [Error].
#[derive(Debug, PartialEq, Clone)]
pub enum ParseResult {
    Document(Document),
    Error(Error),
}

impl ParseResult {
    /// Checks whether the document was parsed successfully.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, ParseResult::Document(_))
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    #[inline]
    pub fn document(&self) -> Option<&Document> {
        match self {
            ParseResult::Document(document) => Some(document),
            ParseResult::Error(_) => None,
        }
    }

    #[inline]
    pub fn error(&self) -> Option<&Error> {
        match self {
            ParseResult::Document(_) => None,
            ParseResult::Error(error) => Some(error),
        }
    }

    /// Converts the outcome into this crate's [Result].
    #[inline]
    pub fn into_result(self) -> Result<Document> {
        match self {
            ParseResult::Document(document) => Ok(document),
            ParseResult::Error(error) => Err(error),
        }
    }
}

impl From<Result<Document>> for ParseResult {
    #[inline]
    fn from(result: Result<Document>) -> Self {
        match result {
            Ok(document) => ParseResult::Document(document),
            Err(error) => ParseResult::Error(error),
        }
    }
}

impl From<ParseResult> for Result<Document> {
    #[inline]
    fn from(result: ParseResult) -> Self {
        result.into_result()
    }
}

/// The two-column form of a [ParseResult], which a host stores or returns as a single row.
///
/// Exactly one of `ast` and `errors` is set. `errors` holds the one-line rendering of the error,
/// e.g. `Syntax Error: Expected Argument, found <EOF> (1:9)`.
#[cfg(feature = "json")]
#[derive(Debug, PartialEq, Eq, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseOutput {
    pub ast: Option<serde_json::Value>,
    pub errors: Option<String>,
}

#[cfg(feature = "json")]
impl ParseResult {
    /// Converts the outcome to a JSON object with an `ast` and an `errors` key.
    pub fn to_json(&self, options: &JsonOptions) -> serde_json::Value {
        match self {
            ParseResult::Document(document) => serde_json::json!({
                "ast": document.to_json(options),
                "errors": null,
            }),
            ParseResult::Error(error) => serde_json::json!({
                "ast": null,
                "errors": error.print(false),
            }),
        }
    }

    pub fn into_output(self, options: &JsonOptions) -> ParseOutput {
        match self {
            ParseResult::Document(document) => ParseOutput {
                ast: Some(document.to_json(options)),
                errors: None,
            },
            ParseResult::Error(error) => ParseOutput {
                ast: None,
                errors: Some(error.print(false)),
            },
        }
    }
}

/// Parses a GraphQL executable document with the default [ParseOptions].
pub fn parse_document<S: AsRef<str>>(source: S) -> ParseResult {
    parse_document_with_options(source, &ParseOptions::default())
}

/// Parses a GraphQL executable document.
///
/// Parsing stops at the first lexical or syntax error, which is then returned in place of the
/// document.
pub fn parse_document_with_options<S: AsRef<str>>(
    source: S,
    options: &ParseOptions,
) -> ParseResult {
    let source = source.as_ref();
    trace!(
        "parsing document of {} bytes with a maximum depth of {}",
        source.len(),
        options.max_depth
    );
    let result = Document::parse_with_options(source, options);
    match &result {
        Ok(document) => trace!("parsed {} definitions", document.definitions.len()),
        Err(error) => debug!("rejected document: {}", error.print(false)),
    }
    result.into()
}
