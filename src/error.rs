//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's returned for any document that fails to
//! lex or parse. Only the first error of a document is ever reported.

use crate::ast::{Position, Span};
use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure.
///
/// The error carries a main message, the [Span] of the offending source text and a context
/// string, which is populated with a snippet of the source text pointing at the error.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) span: Span,
    pub(crate) expected: Option<String>,
    pub(crate) context: String,
    pub(crate) error_type: ErrorType,
}

/// Which stage of parsing rejected a document.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ErrorType {
    /// The source text contains characters or literals that can't be tokenized.
    Lexical,
    /// The tokens of the source text don't form a valid document.
    Syntax,
}

impl Error {
    /// Create a new lexical Error for the given `span` of the `source` text.
    pub fn lexical<S: Into<String>>(source: &str, span: Span, message: S) -> Self {
        Self {
            message: message.into(),
            span,
            expected: None,
            context: print_span(source, span),
            error_type: ErrorType::Lexical,
        }
    }

    /// Create a new syntax Error for the given `span` of the `source` text, optionally describing
    /// the grammar rule that was expected at this position.
    pub fn syntax<S: Into<String>>(
        source: &str,
        span: Span,
        message: S,
        expected: Option<String>,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            expected,
            context: print_span(source, span),
            error_type: ErrorType::Syntax,
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the position at which the error starts.
    pub fn location(&self) -> Position {
        self.span.start
    }

    /// Returns the source span of the token or literal that caused the error.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns a description of the construct that was expected, if this is a syntax error.
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let location = self.location();
        let formatted = match self.error_type {
            ErrorType::Lexical => format!(
                "Lexical Error: {} ({}:{})",
                self.message, location.line, location.column
            ),
            ErrorType::Syntax => format!(
                "Syntax Error: {} ({}:{})",
                self.message, location.line, location.column
            ),
        };

        if include_ctx && !self.context.is_empty() {
            format!("{}\n{}", formatted, self.context)
        } else {
            formatted
        }
    }
}

fn split_lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = source;
    while let Some(idx) = rest.find(['\n', '\r']) {
        lines.push(&rest[..idx]);
        rest = if rest[idx..].starts_with("\r\n") {
            &rest[idx + 2..]
        } else {
            &rest[idx + 1..]
        };
    }
    lines.push(rest);
    lines
}

/// Renders the line of `source` containing the start of `span` and the line preceding it, with
/// line numbers and carets underlining the span.
pub(crate) fn print_span(source: &str, span: Span) -> String {
    let lines = split_lines(source);
    let line_idx = span.start.line.saturating_sub(1).min(lines.len() - 1);
    let first_idx = line_idx.saturating_sub(1);
    let line_num_pad = (line_idx + 1).to_string().len();

    let mut out = String::new();
    for (index, line) in lines[first_idx..=line_idx].iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let line_num = (first_idx + index + 1).to_string();
        out.push_str(&" ".repeat(line_num_pad - line_num.len() + 1));
        out.push_str(&line_num);
        out.push_str(" | ");
        out.push_str(line);
    }

    let carets = if span.end.line == span.start.line {
        span.end.column.saturating_sub(span.start.column).max(1)
    } else {
        1
    };
    out.push('\n');
    out.push_str(&" ".repeat(line_num_pad + 1));
    out.push_str(" | ");
    out.push_str(&" ".repeat(span.start.column.saturating_sub(1)));
    out.push_str(&"^".repeat(carets));
    out
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::span::position_at;

    fn span_of(source: &str, start: usize, end: usize) -> Span {
        Span::new(position_at(source, start), position_at(source, end))
    }

    #[test]
    fn single_line_snippet() {
        let source = "{ { }";
        let error = Error::syntax(source, span_of(source, 2, 3), "Expected Selection", None);
        assert_eq!(error.context, " 1 | { { }\n   |   ^");
        assert_eq!(
            error.print(false),
            "Syntax Error: Expected Selection (1:3)"
        );
    }

    #[test]
    fn multi_line_snippet() {
        let source = "query {\n  hero {\n    $\n  }\n}";
        let offset = source.find('$').unwrap();
        let error = Error::lexical(source, span_of(source, offset, offset + 1), "Unexpected");
        assert_eq!(
            error.context,
            " 2 |   hero {\n 3 |     $\n   |     ^"
        );
        assert_eq!(error.location().line, 3);
        assert_eq!(error.location().column, 5);
    }

    #[test]
    fn snippet_at_end_of_input() {
        let source = "{ hero(\n";
        let error = Error::syntax(
            source,
            span_of(source, source.len(), source.len()),
            "Expected Argument, found <EOF>",
            Some("Argument".to_string()),
        );
        assert_eq!(error.context, " 1 | { hero(\n 2 | \n   | ^");
        assert_eq!(error.expected(), Some("Argument"));
    }
}
