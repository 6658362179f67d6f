//! JSON scanner.
//!
//! The grammar is small enough that the whole machine fits in one
//! dispatch: strings, numbers (with leading `-`), the three literal
//! words, punctuation, whitespace. Anything else is an error byte.

use crate::cursor::Cursor;
use crate::lexer::{Lexer, Pieces};
use crate::scan::scan_quoted;
use crate::token::{Piece, TokenCategory};

/// The `json` lexer.
pub struct JsonLexer;

impl Lexer for JsonLexer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn pieces<'a>(&self, source: &'a str) -> Pieces<'a> {
        Box::new(JsonScanner {
            cur: Cursor::new(source),
        })
    }
}

struct JsonScanner<'a> {
    cur: Cursor<'a>,
}

impl<'a> Iterator for JsonScanner<'a> {
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
            b'"' => scan_quoted(&mut self.cur, b'"', TokenCategory::StringDouble, false),
            b'-' | b'0'..=b'9' => self.number(),
            b't' if self.cur.at(b"true") => self.literal(4),
            b'f' if self.cur.at(b"false") => self.literal(5),
            b'n' if self.cur.at(b"null") => {
                self.cur.advance_n(4);
                Piece::new(TokenCategory::KeywordConstant, self.cur.slice_from(start))
            }
            b'[' | b']' | b'{' | b'}' | b',' | b':' => {
                self.cur.advance();
                Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start))
            }
            _ => {
                self.cur.advance_char();
                Piece::new(TokenCategory::Error, self.cur.slice_from(start))
            }
        };
        Some(piece)
    }
}

impl<'a> JsonScanner<'a> {
    fn literal(&mut self, len: u32) -> Piece<'a> {
        let start = self.cur.pos();
        self.cur.advance_n(len);
        Piece::new(TokenCategory::LiteralBoolean, self.cur.slice_from(start))
    }

    /// JSON numbers: optional minus, digits, optional fraction and
    /// exponent. No underscores, no base prefixes.
    fn number(&mut self) -> Piece<'a> {
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
        if matches!(self.cur.current(), b'e' | b'E') {
            let sign: u32 = if matches!(self.cur.peek(), b'+' | b'-') { 1 } else { 0 };
            let digit = if sign == 0 { self.cur.peek() } else { self.cur.peek2() };
            if digit.is_ascii_digit() {
                is_float = true;
                self.cur.advance_n(1 + sign);
                self.cur.eat_while(|b| b.is_ascii_digit());
            }
        }
        let category = if is_float {
            TokenCategory::NumberFloat
        } else {
            TokenCategory::NumberInteger
        };
        Piece::new(category, self.cur.slice_from(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Vec<(TokenCategory, &str)> {
        JsonLexer
            .pieces(source)
            .map(|p| (p.category, p.text))
            .collect()
    }

    #[test]
    fn object_with_mixed_values() {
        let pieces = scan(r#"{"a": 1, "b": -2.5, "c": true, "d": null}"#);
        assert!(pieces.contains(&(TokenCategory::StringDouble, "\"a\"")));
        assert!(pieces.contains(&(TokenCategory::NumberInteger, "1")));
        assert!(pieces.contains(&(TokenCategory::NumberFloat, "-2.5")));
        assert!(pieces.contains(&(TokenCategory::LiteralBoolean, "true")));
        assert!(pieces.contains(&(TokenCategory::KeywordConstant, "null")));
    }

    #[test]
    fn scientific_notation() {
        let pieces = scan("1e10 1E-5");
        assert_eq!(pieces[0], (TokenCategory::NumberFloat, "1e10"));
        assert_eq!(pieces[2], (TokenCategory::NumberFloat, "1E-5"));
    }

    #[test]
    fn bare_words_are_errors() {
        let pieces = scan("nope");
        // `n` starts a `null` probe that fails; each byte errors out.
        assert!(pieces.iter().all(|(c, _)| *c == TokenCategory::Error));
        let joined: String = pieces.iter().map(|(_, t)| *t).collect();
        assert_eq!(joined, "nope");
    }

    #[test]
    fn string_escapes_pass_through() {
        let pieces = scan(r#""a\"b\\c""#);
        assert_eq!(pieces[0], (TokenCategory::StringDouble, r#""a\"b\\c""#));
    }

    #[test]
    fn unterminated_string_is_error() {
        let pieces = scan("\"oops");
        assert_eq!(pieces[0], (TokenCategory::Error, "\"oops"));
    }

    #[test]
    fn reconstruction() {
        let source = "{\n  \"k\": [1, 2e4, false]\n}\n";
        let joined: String = scan(source).iter().map(|(_, t)| *t).collect();
        assert_eq!(joined, source);
    }
}
