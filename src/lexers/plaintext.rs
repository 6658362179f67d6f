//! Plaintext fallback lexer.
//!
//! Always present: callers that cannot resolve a language can fall back
//! to `plaintext` and still get a valid, round-tripping token stream.
//! Emits one `Text` piece per line segment and one `Whitespace` piece per
//! newline, satisfying every scanner invariant trivially.

use crate::cursor::Cursor;
use crate::lexer::{Lexer, Pieces};
use crate::token::{Piece, TokenCategory};

/// The `plaintext` lexer (aliases: `text`, `plain`, `txt`).
pub struct PlaintextLexer;

impl Lexer for PlaintextLexer {
    fn name(&self) -> &'static str {
        "plaintext"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["text", "plain", "txt"]
    }

    fn pieces<'a>(&self, source: &'a str) -> Pieces<'a> {
        Box::new(PlaintextScanner {
            cur: Cursor::new(source),
        })
    }
}

struct PlaintextScanner<'a> {
    cur: Cursor<'a>,
}

impl<'a> Iterator for PlaintextScanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        if self.cur.is_eof() {
            return None;
        }
        let start = self.cur.pos();
        match self.cur.current() {
            b'\n' => {
                self.cur.advance();
                Some(Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start)))
            }
            b'\r' => {
                // \r\n is one break; a lone \r is whitespace of its own.
                if self.cur.peek() == b'\n' {
                    self.cur.advance_n(2);
                } else {
                    self.cur.advance();
                }
                Some(Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start)))
            }
            _ => {
                self.cur.eat_until_line_break();
                Some(Piece::new(TokenCategory::Text, self.cur.slice_from(start)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Vec<(TokenCategory, &str)> {
        PlaintextLexer
            .pieces(source)
            .map(|p| (p.category, p.text))
            .collect()
    }

    #[test]
    fn empty_source_yields_nothing() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn one_text_piece_per_line() {
        assert_eq!(
            scan("a\nbc\n"),
            vec![
                (TokenCategory::Text, "a"),
                (TokenCategory::Whitespace, "\n"),
                (TokenCategory::Text, "bc"),
                (TokenCategory::Whitespace, "\n"),
            ]
        );
    }

    #[test]
    fn blank_lines_are_bare_newlines() {
        assert_eq!(
            scan("a\n\nb"),
            vec![
                (TokenCategory::Text, "a"),
                (TokenCategory::Whitespace, "\n"),
                (TokenCategory::Whitespace, "\n"),
                (TokenCategory::Text, "b"),
            ]
        );
    }

    #[test]
    fn crlf_is_one_whitespace_piece()  {
        assert_eq!(
            scan("a\r\nb"),
            vec![
                (TokenCategory::Text, "a"),
                (TokenCategory::Whitespace, "\r\n"),
                (TokenCategory::Text, "b"),
            ]
        );
    }

    #[test]
    fn reconstruction_holds() {
        let source = "one\r\ntwo\n\nthree λ four";
        let joined: String = scan(source).iter().map(|(_, t)| *t).collect();
        assert_eq!(joined, source);
    }
}
