//! Markdown scanner.
//!
//! Line-start position drives most of the grammar: headings, fences,
//! blockquotes, bullets, rules. Inline constructs (code spans, emphasis,
//! links) fire anywhere. The machine keys on one `at_line_start` bit and
//! bounded probes; link scanning is depth-bounded by the line.

use crate::cursor::Cursor;
use crate::lexer::{Lexer, Pieces};
use crate::token::{Piece, TokenCategory};

/// The `markdown` lexer (alias: `md`).
pub struct MarkdownLexer;

impl Lexer for MarkdownLexer {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["md"]
    }

    fn pieces<'a>(&self, source: &'a str) -> Pieces<'a> {
        Box::new(MarkdownScanner {
            cur: Cursor::new(source),
            at_line_start: true,
        })
    }
}

struct MarkdownScanner<'a> {
    cur: Cursor<'a>,
    at_line_start: bool,
}

impl<'a> Iterator for MarkdownScanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        if self.cur.is_eof() {
            return None;
        }
        let piece = self.piece();
        self.at_line_start = piece.text.as_bytes().last() == Some(&b'\n');
        Some(piece)
    }
}

impl<'a> MarkdownScanner<'a> {
    #[allow(
        clippy::too_many_lines,
        reason = "single flat dispatch over line-start and inline forms"
    )]
    fn piece(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        let b = self.cur.current();

        if b == b'\n' {
            self.cur.advance();
            return Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start));
        }
        if b == b'\r' {
            if self.cur.peek() == b'\n' {
                self.cur.advance_n(2);
            } else {
                self.cur.advance();
            }
            return Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start));
        }

        if self.at_line_start {
            // Fenced code block.
            if self.cur.at(b"```") {
                return self.fenced_block();
            }
            // Heading.
            if b == b'#' {
                let mut probe = self.cur;
                probe.eat_while(|b| b == b'#');
                if matches!(probe.current(), b' ' | b'\t') {
                    self.cur.eat_until_newline_or_eof();
                    return Piece::new(TokenCategory::GenericHeading, self.cur.slice_from(start));
                }
            }
            // Blockquote.
            if b == b'>' {
                self.cur.eat_until_newline_or_eof();
                return Piece::new(TokenCategory::GenericOutput, self.cur.slice_from(start));
            }
            // Horizontal rule: three or more of - * _ (with spaces) alone
            // on the line.
            if matches!(b, b'-' | b'*' | b'_') {
                let mut probe = self.cur;
                let mut count = 0u32;
                while matches!(probe.current(), b' ' | b'\t') || probe.current() == b {
                    if probe.current() == b {
                        count += 1;
                    }
                    probe.advance();
                }
                if count >= 3 && (probe.is_eof() || matches!(probe.current(), b'\n' | b'\r')) {
                    self.cur = probe;
                    return Piece::new(
                        TokenCategory::PunctuationMarker,
                        self.cur.slice_from(start),
                    );
                }
            }
            // List bullet.
            if matches!(b, b'-' | b'*' | b'+') && matches!(self.cur.peek(), b' ' | b'\t') {
                self.cur.advance();
                return Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start));
            }
            // Numbered list.
            if b.is_ascii_digit() {
                let mut probe = self.cur;
                probe.eat_while(|b| b.is_ascii_digit());
                if probe.current() == b'.' && matches!(probe.peek(), b' ' | b'\t') {
                    probe.advance();
                    self.cur = probe;
                    return Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start));
                }
            }
            // Indented code block.
            if self.cur.at(b"    ") || b == b'\t' {
                self.cur.eat_until_newline_or_eof();
                return Piece::new(TokenCategory::String, self.cur.slice_from(start));
            }
        }

        match b {
            // Inline code span.
            b'`' => {
                self.cur.advance();
                self.cur
                    .eat_while(|b| !matches!(b, b'`' | b'\n' | b'\r'));
                if self.cur.current() == b'`' {
                    self.cur.advance();
                }
                Piece::new(TokenCategory::String, self.cur.slice_from(start))
            }
            // Emphasis markers.
            b'*' | b'_' => {
                self.cur.eat_while(|x| x == b);
                let text = self.cur.slice_from(start);
                let category = if text.len() >= 4 {
                    TokenCategory::Text
                } else if text.len() >= 2 {
                    TokenCategory::GenericStrong
                } else {
                    TokenCategory::GenericEmph
                };
                Piece::new(category, text)
            }
            // Link or image.
            b'[' => self.link(),
            b'!' if self.cur.peek() == b'[' => {
                self.cur.advance();
                let mut piece = self.link();
                piece.text = self.cur.slice(start, self.cur.pos());
                piece
            }
            b' ' | b'\t' => {
                self.cur.eat_whitespace();
                Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start))
            }
            _ => {
                // Plain run up to the next markup byte.
                self.cur.eat_while(|b| {
                    !matches!(
                        b,
                        b'\n' | b'\r' | b'`' | b'*' | b'_' | b'[' | b'!'
                    )
                });
                if self.cur.pos() == start {
                    // The byte is a markup char with no construct (e.g.
                    // `!` not followed by `[`): emit it alone.
                    self.cur.advance_char();
                }
                Piece::new(TokenCategory::Text, self.cur.slice_from(start))
            }
        }
    }

    /// ```` ```lang … ``` ```` fence: the whole block is one string piece.
    fn fenced_block(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        self.cur.advance_n(3);
        self.cur.eat_until_newline_or_eof();
        loop {
            if self.cur.is_eof() {
                break;
            }
            self.cur.advance(); // the newline
            if self.cur.at(b"```") {
                self.cur.advance_n(3);
                self.cur.eat_until_newline_or_eof();
                break;
            }
            self.cur.eat_until_newline_or_eof();
        }
        Piece::new(TokenCategory::String, self.cur.slice_from(start))
    }

    /// `[text](url)` / `[text][ref]`: one label piece. Unclosed brackets
    /// fall back to whatever was scanned, still on one line.
    fn link(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        self.cur.advance();
        let mut depth: u32 = 1;
        while depth > 0 {
            match self.cur.current() {
                b'[' => depth += 1,
                b']' => depth -= 1,
                b'\n' | b'\r' => break,
                _ if self.cur.is_eof() => break,
                _ => {}
            }
            if depth > 0 {
                self.cur.advance_char();
            } else {
                self.cur.advance();
            }
        }
        match self.cur.current() {
            b'(' => {
                self.cur
                    .eat_while(|b| !matches!(b, b')' | b'\n' | b'\r'));
                if self.cur.current() == b')' {
                    self.cur.advance();
                }
            }
            b'[' => {
                self.cur
                    .eat_while(|b| !matches!(b, b']' | b'\n' | b'\r'));
                if self.cur.current() == b']' {
                    self.cur.advance();
                }
            }
            _ => {}
        }
        Piece::new(TokenCategory::NameLabel, self.cur.slice_from(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Vec<(TokenCategory, &str)> {
        MarkdownLexer
            .pieces(source)
            .map(|p| (p.category, p.text))
            .collect()
    }

    fn reconstruct(source: &str) -> String {
        MarkdownLexer.pieces(source).map(|p| p.text).collect()
    }

    #[test]
    fn heading() {
        let pieces = scan("## Title\ntext\n");
        assert_eq!(pieces[0], (TokenCategory::GenericHeading, "## Title"));
        assert!(pieces.contains(&(TokenCategory::Text, "text")));
    }

    #[test]
    fn hashes_without_space_are_text() {
        let pieces = scan("#nospace\n");
        assert_eq!(pieces[0].0, TokenCategory::Text);
    }

    #[test]
    fn fenced_code_block() {
        let source = "```rust\nfn main() {}\n```\nafter";
        let pieces = scan(source);
        assert_eq!(
            pieces[0],
            (TokenCategory::String, "```rust\nfn main() {}\n```")
        );
        assert_eq!(reconstruct(source), source);
    }

    #[test]
    fn unterminated_fence_runs_out() {
        let source = "```\ncode";
        let pieces = scan(source);
        assert_eq!(pieces[0], (TokenCategory::String, "```\ncode"));
    }

    #[test]
    fn blockquote_and_bullet() {
        let pieces = scan("> quote\n- item\n");
        assert_eq!(pieces[0], (TokenCategory::GenericOutput, "> quote"));
        assert!(pieces.contains(&(TokenCategory::Punctuation, "-")));
    }

    #[test]
    fn horizontal_rule() {
        let pieces = scan("---\n");
        assert_eq!(pieces[0], (TokenCategory::PunctuationMarker, "---"));
    }

    #[test]
    fn emphasis_markers() {
        let pieces = scan("**bold** and *em*");
        assert!(pieces.contains(&(TokenCategory::GenericStrong, "**")));
        assert!(pieces.contains(&(TokenCategory::GenericEmph, "*")));
    }

    #[test]
    fn inline_code() {
        let pieces = scan("use `foo()` here");
        assert!(pieces.contains(&(TokenCategory::String, "`foo()`")));
    }

    #[test]
    fn links_and_images() {
        let pieces = scan("[text](http://x) ![alt](img.png)");
        assert_eq!(pieces[0], (TokenCategory::NameLabel, "[text](http://x)"));
        assert!(pieces.contains(&(TokenCategory::NameLabel, "![alt](img.png)")));
    }

    #[test]
    fn numbered_list_marker() {
        let pieces = scan("12. item\n");
        assert_eq!(pieces[0], (TokenCategory::Punctuation, "12."));
    }

    #[test]
    fn reconstruction() {
        let source = "# H\n\n- a\n- b\n\n```py\nx = 1\n```\n\n> q\n";
        assert_eq!(reconstruct(source), source);
    }
}
