//! Lexer contract and the position-cooking token stream.
//!
//! Lexing is split in two layers:
//!
//! - **Raw layer** ([`Lexer::pieces`]): each language scanner is a
//!   single-pass state machine over the source bytes producing
//!   [`Piece`] values — `(category, text)` with no positions. This is
//!   the fast path consumed by formatters that do not group lines.
//! - **Cooking layer** ([`TokenStream`]): wraps any piece iterator and
//!   threads a `(line, column)` cursor over the emitted texts, yielding
//!   full [`Token`] values. Position accounting lives here and nowhere
//!   else; scanners never track lines.
//!
//! # Scanner invariants
//!
//! Every scanner behind [`Lexer::pieces`] must satisfy, for any input:
//!
//! - *Reconstruction*: concatenating piece texts reproduces the input.
//! - *Linear time*: each byte is examined O(1) times; lookahead is
//!   bounded by a compile-time constant.
//! - *Non-emptiness*: every piece text is non-empty.
//! - *Totality*: unclassifiable code points become one-code-point
//!   [`Error`](crate::TokenCategory::Error) pieces; scanning never fails.
//! - *Determinism*: no state outside the scanner struct and read-only
//!   tables is consulted.

use crate::token::{Piece, Token};

/// Boxed lazy piece stream borrowed from a source string.
pub type Pieces<'a> = Box<dyn Iterator<Item = Piece<'a>> + 'a>;

/// A language tokenizer.
///
/// Implementations are immutable after construction and shared across
/// threads by the registry; all per-scan state lives in the iterator
/// returned by [`pieces()`](Self::pieces).
pub trait Lexer: Send + Sync {
    /// Canonical language name (lowercase).
    fn name(&self) -> &'static str;

    /// Alternative names resolving to this lexer.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Scan `source` into classified pieces, in source order, without
    /// position tracking.
    fn pieces<'a>(&self, source: &'a str) -> Pieces<'a>;

    /// Scan `source` into full tokens with 1-based line/column positions.
    fn tokens<'a>(&self, source: &'a str) -> TokenStream<'a> {
        TokenStream::new(self.pieces(source))
    }
}

/// Iterator adapter that cooks raw pieces into positioned tokens.
///
/// Maintains a running `(line, column)` cursor: each `\n` in an emitted
/// text increments the line and resets the column to 1 (so `\r\n` counts
/// as one break); every other code point advances the column by one.
/// The position attached to a token is the cursor value at its first
/// code point.
pub struct TokenStream<'a> {
    pieces: Pieces<'a>,
    line: u32,
    column: u32,
}

impl<'a> TokenStream<'a> {
    /// Wrap a raw piece stream, starting at line 1, column 1.
    #[must_use]
    pub fn new(pieces: Pieces<'a>) -> Self {
        Self {
            pieces,
            line: 1,
            column: 1,
        }
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let piece = self.pieces.next()?;
        let token = Token::new(piece.category, piece.text, self.line, self.column);

        // Advance the cursor over the text just emitted. Columns count
        // code points, not bytes.
        for ch in piece.text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenCategory;

    fn pieces_of(parts: &'static [(TokenCategory, &'static str)]) -> Pieces<'static> {
        Box::new(parts.iter().map(|&(category, text)| Piece { category, text }))
    }

    #[test]
    fn positions_start_at_one_one() {
        let mut stream = TokenStream::new(pieces_of(&[(TokenCategory::Name, "x")]));
        let tok = stream.next().unwrap();
        assert_eq!((tok.line, tok.column), (1, 1));
    }

    #[test]
    fn columns_advance_by_code_points() {
        let mut stream = TokenStream::new(pieces_of(&[
            (TokenCategory::Name, "λλ"),
            (TokenCategory::Operator, "="),
        ]));
        stream.next();
        let tok = stream.next().unwrap();
        // Two code points consumed, not four bytes.
        assert_eq!((tok.line, tok.column), (1, 3));
    }

    #[test]
    fn newline_resets_column() {
        let mut stream = TokenStream::new(pieces_of(&[
            (TokenCategory::Name, "a"),
            (TokenCategory::Whitespace, "\n"),
            (TokenCategory::Name, "b"),
        ]));
        stream.next();
        stream.next();
        let tok = stream.next().unwrap();
        assert_eq!((tok.line, tok.column), (2, 1));
    }

    #[test]
    fn crlf_counts_as_one_break() {
        let mut stream = TokenStream::new(pieces_of(&[
            (TokenCategory::Whitespace, "\r\n"),
            (TokenCategory::Name, "b"),
        ]));
        stream.next();
        let tok = stream.next().unwrap();
        assert_eq!((tok.line, tok.column), (2, 1));
    }

    #[test]
    fn multiline_text_advances_past_last_newline() {
        let mut stream = TokenStream::new(pieces_of(&[
            (TokenCategory::CommentMultiline, "/* a\nb */"),
            (TokenCategory::Name, "x"),
        ]));
        let first = stream.next().unwrap();
        assert_eq!((first.line, first.column), (1, 1));
        let tok = stream.next().unwrap();
        // "b */" is 4 code points on line 2, so x lands at column 5.
        assert_eq!((tok.line, tok.column), (2, 5));
    }
}
