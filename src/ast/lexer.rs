use super::span::{Cursor, Span};
use crate::error::{Error, Result};
use logos::{Lexer as LogosLexer, Logos};
use std::{borrow::Cow, fmt, iter::FusedIterator, ops::Range};

/// Reasons for which a token callback rejects its input.
///
/// Callbacks record the reason and the byte range of the fault in the lexer's [Extras] before
/// failing the match, since logos itself only reports a bare error token.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum LexError {
    UnterminatedString,
    UnterminatedBlockString,
    InvalidEscape(String),
    InvalidUnicodeEscape(String),
    InvalidNumber(String),
    InvalidStringCharacter,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnterminatedString => f.write_str("Unterminated string"),
            LexError::UnterminatedBlockString => f.write_str("Unterminated block string"),
            LexError::InvalidEscape(escape) => {
                write!(f, "Invalid character escape sequence: {}", escape)
            }
            LexError::InvalidUnicodeEscape(escape) => {
                write!(f, "Invalid Unicode escape sequence: {}", escape)
            }
            LexError::InvalidNumber(reason) => write!(f, "Invalid number, {}", reason),
            LexError::InvalidStringCharacter => f.write_str("Invalid character within String"),
        }
    }
}

#[derive(Default, Clone)]
pub struct Extras {
    pub(crate) error: Option<(LexError, Range<usize>)>,
}

/// The kinds of tokens of the GraphQL language.
///
/// Names, numbers and block strings borrow from the source text, while strings containing escape
/// sequences are decoded into owned values.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Source-Text.Lexical-Tokens)
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = Extras)]
pub enum TokenKind<'a> {
    #[token("!")]
    Exclam,

    #[token("$")]
    Dollar,

    #[token("&")]
    Ampersand,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("...")]
    Ellipsis,

    #[token(":")]
    Colon,

    #[token("=")]
    Equal,

    #[token("@")]
    At,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("|")]
    Pipe,

    #[token("}")]
    BraceClose,

    #[regex(r"[_a-zA-Z][_0-9a-zA-Z]*", |lex| lex.slice())]
    Name(&'a str),

    #[regex(r"-?(0|[1-9][0-9]*)", lex_number)]
    Int(&'a str),

    #[regex(r"-?(0|[1-9][0-9]*)[.][0-9]+", lex_number)]
    #[regex(r"-?(0|[1-9][0-9]*)([.][0-9]+)?[eE][+-]?[0-9]+", lex_number)]
    Float(&'a str),

    #[token("\"", lex_string)]
    String(Cow<'a, str>),

    #[token("\"\"\"", lex_block_string)]
    BlockString(Cow<'a, str>),

    #[error]
    #[regex(r"([ \t\n\r\x{FEFF},]+|#[^\n\r]*)+", logos::skip)]
    Error,

    /// Token indicates the end of the input
    End,
}

impl<'a> TokenKind<'a> {
    fn punctuator(&self) -> Option<&'static str> {
        let punctuator = match self {
            TokenKind::Exclam => "!",
            TokenKind::Dollar => "$",
            TokenKind::Ampersand => "&",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::Ellipsis => "...",
            TokenKind::Colon => ":",
            TokenKind::Equal => "=",
            TokenKind::At => "@",
            TokenKind::BracketOpen => "[",
            TokenKind::BracketClose => "]",
            TokenKind::BraceOpen => "{",
            TokenKind::Pipe => "|",
            TokenKind::BraceClose => "}",
            _ => return None,
        };
        Some(punctuator)
    }
}

impl<'a> fmt::Display for TokenKind<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(punctuator) = self.punctuator() {
            return write!(f, "\"{}\"", punctuator);
        }
        match self {
            TokenKind::Name(name) => write!(f, "Name {:?}", name),
            TokenKind::Int(value) => write!(f, "Int {:?}", value),
            TokenKind::Float(value) => write!(f, "Float {:?}", value),
            TokenKind::String(value) => write!(f, "String {:?}", value),
            TokenKind::BlockString(value) => write!(f, "BlockString {:?}", value),
            TokenKind::End => f.write_str("<EOF>"),
            _ => f.write_str("<invalid token>"),
        }
    }
}

#[derive(Logos, Debug, PartialEq)]
pub(crate) enum StringPart {
    #[regex(r#"[^\x00-\x08\x0A-\x1F\\"]+"#)]
    Text,

    #[regex(r"\\u[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]")]
    EscapedCodepoint,

    #[token(r#"\""#)]
    EscapedQuote,
    #[token(r#"\\"#)]
    EscapedBackslash,
    #[token(r#"\/"#)]
    EscapedSlash,
    #[token(r#"\b"#)]
    EscapedBackspace,
    #[token(r#"\f"#)]
    EscapedFormFeed,
    #[token(r#"\n"#)]
    EscapedNewline,
    #[token(r#"\r"#)]
    EscapedReturn,
    #[token(r#"\t"#)]
    EscapedTab,

    #[token("\"")]
    EndString,

    #[error]
    Error,
}

#[inline]
fn fail<'a, T>(
    lex: &mut LogosLexer<'a, TokenKind<'a>>,
    error: LexError,
    at: Range<usize>,
) -> Option<T> {
    lex.extras.error = Some((error, at));
    None
}

/// Control characters other than tabs and line terminators aren't valid source characters.
#[inline]
fn is_control(c: char) -> bool {
    c < ' ' && !matches!(c, '\t' | '\n' | '\r')
}

#[inline]
fn parse_hex(digits: &str) -> Option<u32> {
    use lexical_core::*;
    const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
    const OPTIONS: ParseIntegerOptions = ParseIntegerOptions::new();
    parse_with_options::<u32, FORMAT>(digits.as_bytes(), &OPTIONS).ok()
}

/// Numbers may not be directly followed by a digit, a `.`, or a name.
fn lex_number<'a>(lex: &mut LogosLexer<'a, TokenKind<'a>>) -> Option<&'a str> {
    let slice = lex.slice();
    let span = lex.span();
    match lex.remainder().chars().next() {
        Some(c @ '0'..='9') => fail(
            lex,
            LexError::InvalidNumber(format!("unexpected digit after 0: {:?}", c)),
            span,
        ),
        Some('.') if !slice.contains(['.', 'e', 'E']) => fail(
            lex,
            LexError::InvalidNumber("expected digit after \".\"".to_string()),
            span,
        ),
        Some(c) if c == '.' || c == '_' || c.is_ascii_alphabetic() => fail(
            lex,
            LexError::InvalidNumber(format!("unexpected character {:?}", c)),
            span,
        ),
        _ => Some(slice),
    }
}

#[inline]
fn lex_escaped_string<'a>(
    lex: &mut LogosLexer<'a, TokenKind<'a>>,
    prefix: usize,
) -> Option<Cow<'a, str>> {
    let remainder = lex.remainder();
    let base = lex.span().end + prefix;
    let source = &remainder[prefix..];
    let mut output = remainder[..prefix].to_string();
    let mut sublex = StringPart::lexer(source);
    while let Some(part) = sublex.next() {
        match part {
            StringPart::Text => output.push_str(sublex.slice()),
            StringPart::EscapedQuote => output.push('"'),
            StringPart::EscapedBackslash => output.push('\\'),
            StringPart::EscapedSlash => output.push('/'),
            StringPart::EscapedBackspace => output.push('\u{0008}'),
            StringPart::EscapedFormFeed => output.push('\u{000C}'),
            StringPart::EscapedNewline => output.push('\n'),
            StringPart::EscapedReturn => output.push('\r'),
            StringPart::EscapedTab => output.push('\t'),
            StringPart::EscapedCodepoint => {
                let start = sublex.span().start;
                let code = parse_hex(&sublex.slice()[2..]).unwrap_or(u32::MAX);
                let decoded = if (0xD800..=0xDBFF).contains(&code) {
                    // A leading surrogate must be followed by a trailing surrogate escape
                    match sublex.next() {
                        Some(StringPart::EscapedCodepoint) => {
                            match parse_hex(&sublex.slice()[2..]) {
                                Some(low @ 0xDC00..=0xDFFF) => std::char::from_u32(
                                    0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00),
                                ),
                                _ => None,
                            }
                        }
                        _ => None,
                    }
                } else {
                    std::char::from_u32(code)
                };
                match decoded {
                    Some(c) => output.push(c),
                    None => {
                        let escape = source[start..start + 6].to_string();
                        return fail(
                            lex,
                            LexError::InvalidUnicodeEscape(escape),
                            base + start..base + start + 6,
                        );
                    }
                }
            }
            StringPart::EndString => {
                lex.bump(prefix + sublex.span().end);
                return Some(Cow::Owned(output));
            }
            StringPart::Error => {
                let start = sublex.span().start;
                let rest = &source[start..];
                if rest.starts_with('\\') {
                    let (escape, error) = if rest.starts_with("\\u") {
                        let digits = rest[2..]
                            .chars()
                            .take(4)
                            .take_while(|c| c.is_ascii_hexdigit())
                            .count();
                        let escape = rest[..2 + digits].to_string();
                        (escape.clone(), LexError::InvalidUnicodeEscape(escape))
                    } else {
                        let escape: String = rest.chars().take(2).collect();
                        (escape.clone(), LexError::InvalidEscape(escape))
                    };
                    return fail(lex, error, base + start..base + start + escape.len());
                }
                if let Some(c) = rest.chars().next().filter(|c| is_control(*c)) {
                    let at = base + start;
                    return fail(lex, LexError::InvalidStringCharacter, at..at + c.len_utf8());
                }
                break;
            }
        }
    }
    let span = lex.span();
    fail(lex, LexError::UnterminatedString, span)
}

fn lex_string<'a>(lex: &mut LogosLexer<'a, TokenKind<'a>>) -> Option<Cow<'a, str>> {
    // Most strings contain no escape sequences and can be borrowed from the source as-is
    let remainder = lex.remainder();
    for (i, c) in remainder.char_indices() {
        match c {
            '\n' | '\r' => break,
            '\\' => return lex_escaped_string(lex, i),
            c if is_control(c) => {
                let at = lex.span().end + i;
                return fail(lex, LexError::InvalidStringCharacter, at..at + 1);
            }
            '"' => {
                lex.bump(i + 1);
                return Some(Cow::Borrowed(&remainder[0..i]));
            }
            _ => {}
        }
    }
    let span = lex.span();
    fail(lex, LexError::UnterminatedString, span)
}

fn lex_block_string<'a>(lex: &mut LogosLexer<'a, TokenKind<'a>>) -> Option<Cow<'a, str>> {
    let remainder = lex.remainder();
    let mut raw = String::new();
    let mut idx = 0;
    while let Some(rest) = remainder.get(idx..).filter(|rest| !rest.is_empty()) {
        if rest.starts_with("\\\"\"\"") {
            raw.push_str("\"\"\"");
            idx += 4;
        } else if rest.starts_with("\"\"\"") {
            lex.bump(idx + 3);
            return Some(Cow::Owned(block_string_value(&raw)));
        } else if let Some(c) = rest.chars().next() {
            if is_control(c) {
                let at = lex.span().end + idx;
                return fail(lex, LexError::InvalidStringCharacter, at..at + 1);
            }
            raw.push(c);
            idx += c.len_utf8();
        }
    }
    let span = lex.span();
    fail(lex, LexError::UnterminatedBlockString, span)
}

/// Removes the common indentation and surrounding blank lines of a block string's raw value.
///
/// [Reference](https://spec.graphql.org/October2021/#BlockStringValue())
pub(crate) fn block_string_value(raw: &str) -> String {
    let mut lines = Vec::new();
    let mut rest = raw;
    while let Some(idx) = rest.find(['\n', '\r']) {
        lines.push(&rest[..idx]);
        rest = if rest[idx..].starts_with("\r\n") {
            &rest[idx + 2..]
        } else {
            &rest[idx + 1..]
        };
    }
    lines.push(rest);

    let indent_of = |line: &str| line.len() - line.trim_start_matches([' ', '\t']).len();
    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| indent_of(line) < line.len())
        .map(|line| indent_of(line))
        .min();

    if let Some(common_indent) = common_indent {
        for line in lines.iter_mut().skip(1) {
            *line = &line[common_indent.min(line.len())..];
        }
    }

    let is_blank = |line: &&str| line.trim_start_matches([' ', '\t']).is_empty();
    let first = lines.iter().position(|line| !is_blank(line));
    let last = lines.iter().rposition(|line| !is_blank(line));
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

/// A GraphQL token together with the source span it was lexed from.
#[derive(Debug, PartialEq, Clone)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub span: Span,
}

/// A lazy lexer over a GraphQL source text.
///
/// The lexer yields tokens in source order, followed by a single [`TokenKind::End`] token. When
/// the source text contains an invalid token, the lexer yields one [Error] and stops. Restarting
/// requires creating a new lexer for the same source.
pub struct Lexer<'a> {
    source: &'a str,
    iter: LogosLexer<'a, TokenKind<'a>>,
    cursor: Cursor<'a>,
    done: bool,
}

/// Creates a [Lexer] over the given source text.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            iter: TokenKind::lexer(source),
            cursor: Cursor::new(source),
            done: false,
        }
    }

    /// Returns the full source text this lexer is reading from.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    fn span_of(&mut self, range: Range<usize>) -> Span {
        let start = self.cursor.advance(range.start);
        let end = self.cursor.advance(range.end);
        Span::new(start, end)
    }

    fn error(&mut self) -> Error {
        let (message, range) = match self.iter.extras.error.take() {
            Some((error, range)) => (error.to_string(), range),
            None => {
                let start = self.iter.span().start;
                match self.source.get(start..).and_then(|rest| rest.chars().next()) {
                    Some(c) => (
                        format!("Unexpected character {:?}", c),
                        start..start + c.len_utf8(),
                    ),
                    None => ("Unexpected end of input".to_string(), start..start),
                }
            }
        };
        let span = self.span_of(range);
        Error::lexical(self.source, span, message)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            None => {
                self.done = true;
                let end = self.source.len();
                let span = self.span_of(end..end);
                Some(Ok(Token {
                    kind: TokenKind::End,
                    span,
                }))
            }
            Some(TokenKind::Error) => {
                self.done = true;
                Some(Err(self.error()))
            }
            Some(kind) => {
                let span = self.span_of(self.iter.span());
                Some(Ok(Token { kind, span }))
            }
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
