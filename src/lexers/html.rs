//! HTML scanner.
//!
//! Two states: content and inside-a-tag. Content handles comments,
//! doctype, CDATA, entities, and text runs; tag state handles the tag
//! name, attributes, `=`, and quoted or bare values. A `<` that does not
//! open anything recognizable stays literal text.

use crate::cursor::Cursor;
use crate::lexer::{Lexer, Pieces};
use crate::scan::scan_block_comment;
use crate::token::{Piece, TokenCategory};

/// The `html` lexer (aliases: `htm`, `xhtml`).
pub struct HtmlLexer;

impl Lexer for HtmlLexer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["htm", "xhtml"]
    }

    fn pieces<'a>(&self, source: &'a str) -> Pieces<'a> {
        Box::new(HtmlScanner {
            cur: Cursor::new(source),
            in_tag: false,
            expect_tag_name: false,
        })
    }
}

fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':')
}

fn is_attr_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.')
}

struct HtmlScanner<'a> {
    cur: Cursor<'a>,
    in_tag: bool,
    expect_tag_name: bool,
}

impl<'a> Iterator for HtmlScanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        if self.cur.is_eof() {
            return None;
        }
        Some(if self.in_tag {
            self.tag_piece()
        } else {
            self.content_piece()
        })
    }
}

impl<'a> HtmlScanner<'a> {
    fn content_piece(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        match self.cur.current() {
            b'<' if self.cur.at(b"<!--") => {
                scan_block_comment(&mut self.cur, 4, b"-->", TokenCategory::CommentMultiline)
            }
            b'<' if self.at_doctype() => {
                self.cur.eat_until_byte(b'>');
                if !self.cur.is_eof() {
                    self.cur.advance();
                }
                Piece::new(TokenCategory::CommentPreproc, self.cur.slice_from(start))
            }
            b'<' if self.cur.at(b"<![CDATA[") => {
                scan_block_comment(&mut self.cur, 9, b"]]>", TokenCategory::String)
            }
            b'<' => {
                let close = self.cur.peek() == b'/';
                let name_byte = if close { self.cur.peek2() } else { self.cur.peek() };
                if is_tag_name_byte(name_byte) && !name_byte.is_ascii_digit() {
                    self.cur.advance();
                    if close {
                        self.cur.advance();
                    }
                    self.in_tag = true;
                    self.expect_tag_name = true;
                    Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start))
                } else {
                    // Bare `<`: literal text.
                    self.cur.advance();
                    Piece::new(TokenCategory::Text, self.cur.slice_from(start))
                }
            }
            b'&' => self.entity(),
            _ => {
                // Text run up to the next markup byte. An all-whitespace
                // run reads as whitespace.
                self.cur.eat_while(|b| !matches!(b, b'<' | b'&'));
                let text = self.cur.slice_from(start);
                let category = if text.bytes().all(|b| b.is_ascii_whitespace()) {
                    TokenCategory::Whitespace
                } else {
                    TokenCategory::Text
                };
                Piece::new(category, text)
            }
        }
    }

    fn at_doctype(&self) -> bool {
        let probe = b"<!DOCTYPE";
        let mut cur = self.cur;
        for &expect in probe {
            if !cur.current().eq_ignore_ascii_case(&expect) {
                return false;
            }
            cur.advance();
        }
        true
    }

    /// `&name;` / `&#160;` entity. Without the closing `;` the scanned
    /// head is plain text.
    fn entity(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        self.cur.advance();
        self.cur
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'#');
        if self.cur.current() == b';' {
            self.cur.advance();
            Piece::new(TokenCategory::NameEntity, self.cur.slice_from(start))
        } else {
            Piece::new(TokenCategory::Text, self.cur.slice_from(start))
        }
    }

    fn tag_piece(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        if self.expect_tag_name {
            self.expect_tag_name = false;
            self.cur.eat_while(is_tag_name_byte);
            return Piece::new(TokenCategory::NameTag, self.cur.slice_from(start));
        }
        match self.cur.current() {
            b' ' | b'\t' | b'\n' | b'\r' => {
                self.cur
                    .eat_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
                Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start))
            }
            b'>' => {
                self.cur.advance();
                self.in_tag = false;
                Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start))
            }
            b'/' if self.cur.peek() == b'>' => {
                self.cur.advance_n(2);
                self.in_tag = false;
                Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start))
            }
            b'=' => {
                self.cur.advance();
                Piece::new(TokenCategory::Operator, self.cur.slice_from(start))
            }
            b'"' | b'\'' => {
                let quote = self.cur.current();
                self.cur.advance();
                self.cur.eat_until_byte(quote);
                if !self.cur.is_eof() {
                    self.cur.advance();
                }
                Piece::new(TokenCategory::String, self.cur.slice_from(start))
            }
            b if b.is_ascii_alphabetic() || matches!(b, b'_' | b':') => {
                self.cur.eat_while(is_attr_name_byte);
                Piece::new(TokenCategory::NameAttribute, self.cur.slice_from(start))
            }
            b if !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'"' | b'\'' | b'=') => {
                // Bare attribute value.
                self.cur.eat_while(|b| {
                    !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'"' | b'\'')
                });
                Piece::new(TokenCategory::String, self.cur.slice_from(start))
            }
            _ => {
                self.cur.advance_char();
                Piece::new(TokenCategory::Error, self.cur.slice_from(start))
            }
        }
    }
}
