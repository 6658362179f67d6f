//! CSS scanner.
//!
//! Two states tracked by brace depth: selector context (elements,
//! `.class`, `#id`, at-rules) and declaration context (property names,
//! values, units, hex colors). Nested blocks (`@media`) stay in
//! declaration context, which classifies their inner selectors loosely —
//! an accepted simplification.

use crate::cursor::Cursor;
use crate::lexer::{Lexer, Pieces};
use crate::scan::{is_ident_continue, scan_block_comment, scan_quoted};
use crate::token::{Piece, TokenCategory};

/// The `css` lexer.
pub struct CssLexer;

impl Lexer for CssLexer {
    fn name(&self) -> &'static str {
        "css"
    }

    fn pieces<'a>(&self, source: &'a str) -> Pieces<'a> {
        Box::new(CssScanner {
            cur: Cursor::new(source),
            depth: 0,
        })
    }
}

fn is_css_name_byte(b: u8) -> bool {
    is_ident_continue(b) || b == b'-'
}

struct CssScanner<'a> {
    cur: Cursor<'a>,
    depth: u32,
}

impl<'a> Iterator for CssScanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        if self.cur.is_eof() {
            return None;
        }
        let start = self.cur.pos();
        let piece = match self.cur.current() {
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
            b'/' if self.cur.peek() == b'*' => {
                scan_block_comment(&mut self.cur, 2, b"*/", TokenCategory::CommentMultiline)
            }
            b'"' => scan_quoted(&mut self.cur, b'"', TokenCategory::StringDouble, false),
            b'\'' => scan_quoted(&mut self.cur, b'\'', TokenCategory::StringSingle, false),
            b'{' => {
                self.depth += 1;
                self.cur.advance();
                Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start))
            }
            b'}' => {
                self.depth = self.depth.saturating_sub(1);
                self.cur.advance();
                Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start))
            }
            b'@' => {
                // At-rule: `@media`, `@import`.
                self.cur.advance();
                self.cur.eat_while(is_css_name_byte);
                Piece::new(TokenCategory::KeywordNamespace, self.cur.slice_from(start))
            }
            b'.' if self.depth == 0 && is_css_name_byte(self.cur.peek()) => {
                self.cur.advance();
                self.cur.eat_while(is_css_name_byte);
                Piece::new(TokenCategory::NameClass, self.cur.slice_from(start))
            }
            b'#' => self.hash(),
            b'!' if self.cur.at(b"!important") => {
                self.cur.advance_n(10);
                Piece::new(TokenCategory::Keyword, self.cur.slice_from(start))
            }
            b'0'..=b'9' => self.number_with_unit(),
            b'-' if self.cur.peek().is_ascii_digit() => self.number_with_unit(),
            b if is_css_name_byte(b) && b != b'-' || b == b'-' && is_css_name_byte(self.cur.peek()) => {
                self.cur.eat_while(is_css_name_byte);
                let category = if self.depth == 0 {
                    TokenCategory::NameTag
                } else if self.cur.current() == b':' {
                    TokenCategory::NameAttribute
                } else {
                    TokenCategory::Name
                };
                Piece::new(category, self.cur.slice_from(start))
            }
            b',' | b';' | b':' | b'(' | b')' | b'[' | b']' | b'=' => {
                self.cur.advance();
                Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start))
            }
            b'>' | b'+' | b'~' | b'*' | b'%' | b'/' | b'-' => {
                self.cur.advance();
                Piece::new(TokenCategory::Operator, self.cur.slice_from(start))
            }
            _ => {
                self.cur.advance_char();
                Piece::new(TokenCategory::Error, self.cur.slice_from(start))
            }
        };
        Some(piece)
    }
}

impl<'a> CssScanner<'a> {
    /// `#id` selector at top level, `#fff` hex color in a block.
    fn hash(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        self.cur.advance();
        if self.depth > 0 && self.cur.current().is_ascii_hexdigit() {
            self.cur.eat_while(|b| b.is_ascii_hexdigit());
            return Piece::new(TokenCategory::NumberHex, self.cur.slice_from(start));
        }
        self.cur.eat_while(is_css_name_byte);
        Piece::new(TokenCategory::NameVariable, self.cur.slice_from(start))
    }

    /// A number keeps its unit (`10px`, `1.5em`, `80%`) in one piece.
    fn number_with_unit(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        if self.cur.current() == b'-' {
            self.cur.advance();
        }
        self.cur.eat_while(|b| b.is_ascii_digit());
        let mut is_float = false;
        if self.cur.current() == b'.' && self.cur.peek().is_ascii_digit() {
            is_float = true;
            self.cur.advance();
            self.cur.eat_while(|b| b.is_ascii_digit());
        }
        self.cur.eat_while(|b| b.is_ascii_alphabetic() || b == b'%');
        let category = if is_float {
            TokenCategory::NumberFloat
        } else {
            TokenCategory::NumberInteger
        };
        Piece::new(category, self.cur.slice_from(start))
    }
}
