//! YAML scanner.
//!
//! Line-oriented with bounded lookahead: a word at the start of a line
//! (or after a `- ` bullet) followed by `:` is a mapping key. Anchors,
//! aliases, and tags key off their sigils. Block scalars (`|`, `>`) emit
//! the indicator as an operator and their bodies as plain lines, which
//! keeps the machine state-free across lines.

use crate::cursor::Cursor;
use crate::lexer::{Lexer, Pieces};
use crate::scan::{is_ident_continue, scan_line_comment, scan_quoted};
use crate::token::{Piece, TokenCategory};

/// The `yaml` lexer (alias: `yml`).
pub struct YamlLexer;

impl Lexer for YamlLexer {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["yml"]
    }

    fn pieces<'a>(&self, source: &'a str) -> Pieces<'a> {
        Box::new(YamlScanner {
            cur: Cursor::new(source),
            at_line_start: true,
        })
    }
}

fn is_plain_byte(b: u8) -> bool {
    !matches!(
        b,
        b' ' | b'\t' | b'\n' | b'\r' | b'#' | b':' | b',' | b'[' | b']' | b'{' | b'}' | b'"'
            | b'\'' | b'&' | b'*' | b'!'
    )
}

struct YamlScanner<'a> {
    cur: Cursor<'a>,
    at_line_start: bool,
}

impl<'a> Iterator for YamlScanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        if self.cur.is_eof() {
            return None;
        }
        let piece = self.piece();
        let is_ws = piece.category == TokenCategory::Whitespace;
        let ends_line = is_ws && piece.text.as_bytes().last() == Some(&b'\n');
        self.at_line_start = ends_line || (self.at_line_start && is_ws);
        Some(piece)
    }
}

impl<'a> YamlScanner<'a> {
    fn piece(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        let b = self.cur.current();

        match b {
            b' ' | b'\t' => {
                self.cur.eat_whitespace();
                Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start))
            }
            b'\r' => {
                if self.cur.peek() == b'\n' {
                    self.cur.advance_n(2);
                } else {
                    self.cur.advance();
                }
                Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start))
            }
            b'\n' => {
                self.cur.advance();
                Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start))
            }
            b'#' => scan_line_comment(&mut self.cur, TokenCategory::CommentSingle),
            b'-' if self.at_line_start && self.cur.at(b"---") => {
                self.cur.advance_n(3);
                Piece::new(TokenCategory::PunctuationMarker, self.cur.slice_from(start))
            }
            b'.' if self.at_line_start && self.cur.at(b"...") => {
                self.cur.advance_n(3);
                Piece::new(TokenCategory::PunctuationMarker, self.cur.slice_from(start))
            }
            b'-' if matches!(self.cur.peek(), b' ' | b'\t' | b'\n' | b'\r' | 0) => {
                self.cur.advance();
                Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start))
            }
            b'"' => scan_quoted(&mut self.cur, b'"', TokenCategory::StringDouble, false),
            b'\'' => {
                // Single-quoted: `''` is the only escape.
                self.cur.advance();
                loop {
                    self.cur
                        .eat_while(|b| !matches!(b, b'\'' | b'\n' | b'\r'));
                    if self.cur.current() == b'\'' && self.cur.peek() == b'\'' {
                        self.cur.advance_n(2);
                        continue;
                    }
                    break;
                }
                if self.cur.current() == b'\'' {
                    self.cur.advance();
                    Piece::new(TokenCategory::StringSingle, self.cur.slice_from(start))
                } else {
                    Piece::new(TokenCategory::Error, self.cur.slice_from(start))
                }
            }
            b'&' | b'*' if is_ident_continue(self.cur.peek()) => {
                self.cur.advance();
                self.cur.eat_while(|b| is_ident_continue(b) || b == b'-');
                Piece::new(TokenCategory::NameLabel, self.cur.slice_from(start))
            }
            b'!' => {
                self.cur
                    .eat_while(|b| is_ident_continue(b) || matches!(b, b'!' | b'-' | b'/'));
                Piece::new(TokenCategory::KeywordType, self.cur.slice_from(start))
            }
            b'[' | b']' | b'{' | b'}' | b',' | b':' | b'|' | b'>' | b'?' => {
                self.cur.advance();
                let category = if matches!(b, b'|' | b'>') {
                    TokenCategory::Operator
                } else {
                    TokenCategory::Punctuation
                };
                Piece::new(category, self.cur.slice_from(start))
            }
            _ => self.scalar(),
        }
    }

    /// Plain scalar word: a key if it stops at a `:`, otherwise a typed
    /// value when it parses as a number/boolean/null, otherwise text.
    /// Multi-word scalars come out as text pieces separated by
    /// whitespace pieces.
    fn scalar(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        self.cur.eat_while(is_plain_byte);
        if self.cur.pos() == start {
            // A sigil byte with no construct behind it (`&` before a
            // space, stray `*`): one code point of text.
            self.cur.advance_char();
            return Piece::new(TokenCategory::Text, self.cur.slice_from(start));
        }
        let text = self.cur.slice_from(start);
        let category = if self.cur.current() == b':'
            && matches!(self.cur.peek(), b' ' | b'\t' | b'\n' | b'\r' | 0)
        {
            TokenCategory::NameAttribute
        } else {
            classify_scalar(text)
        };
        Piece::new(category, text)
    }
}

fn classify_scalar(text: &str) -> TokenCategory {
    match text {
        "true" | "false" | "True" | "False" => return TokenCategory::LiteralBoolean,
        "null" | "Null" | "NULL" | "~" => return TokenCategory::KeywordConstant,
        _ => {}
    }
    let bytes = text.as_bytes();
    if !bytes.is_empty()
        && bytes
            .iter()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E' | b'_'))
        && bytes.iter().any(|b| b.is_ascii_digit())
    {
        return if text.contains('.') || text.contains('e') || text.contains('E') {
            TokenCategory::NumberFloat
        } else {
            TokenCategory::NumberInteger
        };
    }
    TokenCategory::Text
}
