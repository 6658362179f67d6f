//! TOML scanner.
//!
//! Keys live at line start (bare, dotted, or quoted), values after `=`.
//! Table headers consume the whole `[…]` group. Dates come out as date
//! literals when a number runs into `-` or `:` shapes.

use crate::cursor::Cursor;
use crate::lexer::{Lexer, Pieces};
use crate::scan::{is_ident_continue, scan_line_comment, scan_quoted, scan_triple};
use crate::token::{Piece, TokenCategory};

/// The `toml` lexer.
pub struct TomlLexer;

impl Lexer for TomlLexer {
    fn name(&self) -> &'static str {
        "toml"
    }

    fn pieces<'a>(&self, source: &'a str) -> Pieces<'a> {
        Box::new(TomlScanner {
            cur: Cursor::new(source),
            at_line_start: true,
        })
    }
}

fn is_key_byte(b: u8) -> bool {
    is_ident_continue(b) || b == b'-'
}

struct TomlScanner<'a> {
    cur: Cursor<'a>,
    at_line_start: bool,
}

impl<'a> Iterator for TomlScanner<'a> {
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

impl<'a> TomlScanner<'a> {
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
            b'[' if self.at_line_start => self.table_header(),
            b'"' if self.cur.at(b"\"\"\"") => {
                scan_triple(&mut self.cur, b'"', TokenCategory::StringDouble)
            }
            b'"' => scan_quoted(&mut self.cur, b'"', TokenCategory::StringDouble, false),
            b'\'' if self.cur.at(b"'''") => {
                scan_triple(&mut self.cur, b'\'', TokenCategory::StringSingle)
            }
            b'\'' => {
                // Literal string: no escapes.
                self.cur.advance();
                self.cur
                    .eat_while(|b| !matches!(b, b'\'' | b'\n' | b'\r'));
                if self.cur.current() == b'\'' {
                    self.cur.advance();
                    Piece::new(TokenCategory::StringSingle, self.cur.slice_from(start))
                } else {
                    Piece::new(TokenCategory::Error, self.cur.slice_from(start))
                }
            }
            b'=' => {
                self.cur.advance();
                Piece::new(TokenCategory::Operator, self.cur.slice_from(start))
            }
            b'[' | b']' | b'{' | b'}' | b',' | b'.' => {
                self.cur.advance();
                Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start))
            }
            b'0'..=b'9' => self.number_or_date(),
            b'-' | b'+' if self.cur.peek().is_ascii_digit() => self.number_or_date(),
            _ if is_key_byte(b) => {
                self.cur.eat_while(is_key_byte);
                let word = self.cur.slice_from(start);
                let category = match word {
                    "true" | "false" => TokenCategory::LiteralBoolean,
                    "inf" | "nan" => TokenCategory::NumberFloat,
                    _ if self.at_line_start => TokenCategory::NameAttribute,
                    _ => TokenCategory::Name,
                };
                Piece::new(category, word)
            }
            _ => {
                self.cur.advance_char();
                Piece::new(TokenCategory::Error, self.cur.slice_from(start))
            }
        }
    }

    /// `[server]` / `[[products]]`: the whole header is one piece.
    fn table_header(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        self.cur
            .eat_while(|b| !matches!(b, b']' | b'\n' | b'\r'));
        self.cur.eat_while(|b| b == b']');
        Piece::new(TokenCategory::NameNamespace, self.cur.slice_from(start))
    }

    /// Number, or a date/time when the digits run into `-`/`:` shapes
    /// (`1979-05-27T07:32:00Z`, `07:32:00`).
    fn number_or_date(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        if matches!(self.cur.current(), b'-' | b'+') {
            self.cur.advance();
        }
        self.cur.eat_while(|b| b.is_ascii_digit() || b == b'_');

        if matches!(self.cur.current(), b'-' | b':') && self.cur.peek().is_ascii_digit() {
            // Datetime: digits plus the RFC 3339 separators.
            self.cur.eat_while(|b| {
                b.is_ascii_digit()
                    || matches!(b, b'-' | b':' | b'T' | b't' | b'Z' | b'z' | b'.' | b'+')
            });
            return Piece::new(TokenCategory::LiteralDate, self.cur.slice_from(start));
        }

        // Base prefixes.
        if self.cur.slice_from(start) == "0" {
            let (category, digits): (_, fn(u8) -> bool) = match self.cur.current() {
                b'x' => (TokenCategory::NumberHex, |b: u8| {
                    b.is_ascii_hexdigit() || b == b'_'
                }),
                b'o' => (TokenCategory::NumberOct, |b: u8| {
                    (b'0'..=b'7').contains(&b) || b == b'_'
                }),
                b'b' => (TokenCategory::NumberBin, |b: u8| {
                    matches!(b, b'0' | b'1' | b'_')
                }),
                _ => (TokenCategory::NumberInteger, |_| false),
            };
            if category != TokenCategory::NumberInteger && digits(self.cur.peek()) {
                self.cur.advance();
                self.cur.eat_while(digits);
                return Piece::new(category, self.cur.slice_from(start));
            }
        }

        let mut is_float = false;
        if self.cur.current() == b'.' && self.cur.peek().is_ascii_digit() {
            is_float = true;
            self.cur.advance();
            self.cur.eat_while(|b| b.is_ascii_digit() || b == b'_');
        }
        if matches!(self.cur.current(), b'e' | b'E') {
            let sign: u32 = if matches!(self.cur.peek(), b'+' | b'-') { 1 } else { 0 };
            let digit = if sign == 0 { self.cur.peek() } else { self.cur.peek2() };
            if digit.is_ascii_digit() {
                is_float = true;
                self.cur.advance_n(1 + sign);
                self.cur.eat_while(|b| b.is_ascii_digit() || b == b'_');
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
        TomlLexer
            .pieces(source)
            .map(|p| (p.category, p.text))
            .collect()
    }

    fn reconstruct(source: &str) -> String {
        TomlLexer.pieces(source).map(|p| p.text).collect()
    }

    #[test]
    fn table_and_key_value() {
        let pieces = scan("[server]\nhost = \"[::1]\"\nport = 8080\n");
        assert_eq!(pieces[0], (TokenCategory::NameNamespace, "[server]"));
        assert!(pieces.contains(&(TokenCategory::NameAttribute, "host")));
        assert!(pieces.contains(&(TokenCategory::Operator, "=")));
        assert!(pieces.contains(&(TokenCategory::StringDouble, "\"[::1]\"")));
        assert!(pieces.contains(&(TokenCategory::NumberInteger, "8080")));
    }

    #[test]
    fn array_of_tables_header() {
        let pieces = scan("[[products]]\n");
        assert_eq!(pieces[0], (TokenCategory::NameNamespace, "[[products]]"));
    }

    #[test]
    fn datetime_literal() {
        let pieces = scan("date = 1979-05-27T07:32:00Z\n");
        assert!(pieces.contains(&(TokenCategory::LiteralDate, "1979-05-27T07:32:00Z")));
    }

    #[test]
    fn value_types() {
        let pieces = scan("a = true\nb = 0xFF\nc = 3.5e2\nd = 'lit'\n");
        assert!(pieces.contains(&(TokenCategory::LiteralBoolean, "true")));
        assert!(pieces.contains(&(TokenCategory::NumberHex, "0xFF")));
        assert!(pieces.contains(&(TokenCategory::NumberFloat, "3.5e2")));
        assert!(pieces.contains(&(TokenCategory::StringSingle, "'lit'")));
    }

    #[test]
    fn multiline_basic_string() {
        let source = "s = \"\"\"a\nb\"\"\"\n";
        let pieces = scan(source);
        assert!(pieces.contains(&(TokenCategory::StringDouble, "\"\"\"a\nb\"\"\"")));
        assert_eq!(reconstruct(source), source);
    }

    #[test]
    fn dotted_keys() {
        let pieces = scan("a.b = 1\n");
        assert_eq!(pieces[0], (TokenCategory::NameAttribute, "a"));
        assert_eq!(pieces[1], (TokenCategory::Punctuation, "."));
        // The segment after the dot is no longer at line start; it still
        // reads as a plain name.
        assert_eq!(pieces[2], (TokenCategory::Name, "b"));
    }

    #[test]
    fn comment() {
        let pieces = scan("# top\nkey = 1 # inline\n");
        assert_eq!(pieces[0], (TokenCategory::CommentSingle, "# top"));
        assert!(pieces.contains(&(TokenCategory::CommentSingle, "# inline")));
    }

    #[test]
    fn reconstruction() {
        let source = "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n\n[deps]\nx = { version = \"1\", features = [\"a\"] }\n";
        assert_eq!(reconstruct(source), source);
    }
}
