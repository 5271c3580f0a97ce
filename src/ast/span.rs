/// A point in a source text.
///
/// Lines and columns start at `1`. Columns count Unicode scalar values, while `offset` is the
/// byte offset into the source string, which makes it usable for slicing.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    /// The position of the first character of any source text.
    pub const START: Position = Position {
        line: 1,
        column: 1,
        offset: 0,
    };
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

/// The range of source text that a token or AST Node was parsed from.
///
/// The `end` position is exclusive and points just past the last character.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[inline]
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Returns a span starting at this span's start and ending at `other`'s end.
    #[inline]
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }

    /// Byte range of this span, usable to slice the source text.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.offset..self.end.offset
    }
}

/// Incrementally converts byte offsets into [Position]s.
///
/// Offsets passed to [`Cursor::advance`] must never decrease, which holds for a lexer moving
/// through its source from left to right. `\r\n`, `\n` and `\r` each count as one line break.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    position: Position,
    after_cr: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            source,
            position: Position::START,
            after_cr: false,
        }
    }

    pub(crate) fn advance(&mut self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        if offset > self.position.offset {
            let skipped = self.source.get(self.position.offset..offset).unwrap_or("");
            for c in skipped.chars() {
                match c {
                    '\n' if self.after_cr => self.after_cr = false,
                    '\n' => {
                        self.position.line += 1;
                        self.position.column = 1;
                    }
                    '\r' => {
                        self.after_cr = true;
                        self.position.line += 1;
                        self.position.column = 1;
                    }
                    _ => {
                        self.after_cr = false;
                        self.position.column += 1;
                    }
                }
            }
            self.position.offset = offset;
        }
        self.position
    }
}

/// Computes the [Position] of a byte offset from the start of `source`.
pub(crate) fn position_at(source: &str, offset: usize) -> Position {
    Cursor::new(source).advance(offset)
}
