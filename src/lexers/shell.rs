//! Shell scanner (POSIX-ish, bash-flavored).
//!
//! Single-quoted strings take no escapes; double-quoted strings escape
//! with backslash; backticks are command substitution. `$name`, `${…}`,
//! and the special parameters read as variables. Heredocs are out of
//! scope: the `<<` operator scans as an operator and the body as
//! ordinary words.

use crate::cursor::Cursor;
use crate::lexer::{Lexer, Pieces};
use crate::scan::{is_ident_continue, is_ident_start, scan_identifier, scan_line_comment, WordTable};
use crate::token::{Piece, TokenCategory};

/// The `shell` lexer (aliases: `bash`, `sh`, `zsh`).
pub struct ShellLexer;

static WORDS: WordTable = WordTable {
    booleans: &["false", "true"],
    constants: &[],
    declarations: &["function"],
    namespaces: &["source"],
    types: &[],
    reserved: &[],
    pseudos: &[],
    word_operators: &["in"],
    keywords: &[
        "case", "do", "done", "elif", "else", "esac", "fi", "for", "if", "select", "then",
        "time", "until", "while",
    ],
    builtins: &[
        "alias", "cd", "echo", "eval", "exec", "exit", "export", "kill", "local", "printf",
        "read", "return", "set", "shift", "test", "trap", "unset", "wait",
    ],
};

impl Lexer for ShellLexer {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["bash", "sh", "zsh"]
    }

    fn pieces<'a>(&self, source: &'a str) -> Pieces<'a> {
        Box::new(ShellScanner {
            cur: Cursor::new(source),
            pending_fn: false,
        })
    }
}

struct ShellScanner<'a> {
    cur: Cursor<'a>,
    pending_fn: bool,
}

impl<'a> Iterator for ShellScanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        if self.cur.is_eof() {
            return None;
        }
        Some(self.piece())
    }
}

impl<'a> ShellScanner<'a> {
    fn piece(&mut self) -> Piece<'a> {
        let pending_fn = std::mem::take(&mut self.pending_fn);
        let start = self.cur.pos();
        let b = self.cur.current();

        match b {
            b' ' | b'\t' => {
                self.pending_fn = pending_fn;
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
            b'#' => {
                let category = if start == 0 && self.cur.peek() == b'!' {
                    TokenCategory::CommentHashbang
                } else {
                    TokenCategory::CommentSingle
                };
                scan_line_comment(&mut self.cur, category)
            }
            // Single quotes: no escapes at all.
            b'\'' => {
                self.cur.advance();
                self.cur.eat_until_byte(b'\'');
                if !self.cur.is_eof() {
                    self.cur.advance();
                }
                Piece::new(TokenCategory::StringSingle, self.cur.slice_from(start))
            }
            // Double quotes: backslash escapes, may span lines.
            b'"' => {
                self.cur.advance();
                loop {
                    self.cur.eat_while(|b| !matches!(b, b'"' | b'\\'));
                    match self.cur.current() {
                        b'"' => {
                            self.cur.advance();
                            break;
                        }
                        b'\\' => {
                            self.cur.advance();
                            if !self.cur.is_eof() {
                                self.cur.advance_char();
                            }
                        }
                        _ => break, // EOF
                    }
                }
                Piece::new(TokenCategory::StringDouble, self.cur.slice_from(start))
            }
            b'`' => {
                self.cur.advance();
                self.cur.eat_until_byte(b'`');
                if !self.cur.is_eof() {
                    self.cur.advance();
                }
                Piece::new(TokenCategory::StringBacktick, self.cur.slice_from(start))
            }
            b'$' => self.variable(),
            b'0'..=b'9' => {
                self.cur.eat_while(|b| b.is_ascii_digit());
                if is_ident_continue(self.cur.current()) {
                    // `2fast`: a word, not a number.
                    self.cur.eat_while(is_ident_continue);
                    return Piece::new(TokenCategory::Text, self.cur.slice_from(start));
                }
                Piece::new(TokenCategory::NumberInteger, self.cur.slice_from(start))
            }
            _ if is_ident_start(b) => {
                let word = scan_identifier(&mut self.cur, false);
                let mut category = WORDS.classify(word);
                if category == TokenCategory::Name {
                    if pending_fn || self.cur.at(b"()") {
                        category = TokenCategory::NameFunction;
                    }
                } else if category == TokenCategory::KeywordDeclaration {
                    self.pending_fn = true;
                }
                Piece::new(category, word)
            }
            b'&' | b'|' | b';' | b'<' | b'>' | b'=' | b'!' | b'*' | b'?' | b'~' | b'+' | b'-' => {
                // Greedy two-byte forms first.
                for op in [b"&&" as &[u8], b"||", b";;", b">>", b"<<", b"|&"] {
                    if self.cur.at(op) {
                        self.cur.advance_n(2);
                        return Piece::new(TokenCategory::Operator, self.cur.slice_from(start));
                    }
                }
                self.cur.advance();
                Piece::new(TokenCategory::Operator, self.cur.slice_from(start))
            }
            b'(' | b')' | b'{' | b'}' | b'[' | b']' | b',' | b':' | b'.' | b'/' => {
                self.cur.advance();
                Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start))
            }
            _ => {
                self.cur.advance_char();
                Piece::new(TokenCategory::Error, self.cur.slice_from(start))
            }
        }
    }

    /// `$name`, `${name}`, `$1`, `$?`, `$@`, `$#`, `$*`, `$$`.
    fn variable(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        self.cur.advance();
        match self.cur.current() {
            b'{' => {
                self.cur
                    .eat_while(|b| !matches!(b, b'}' | b'\n' | b'\r'));
                if self.cur.current() == b'}' {
                    self.cur.advance();
                }
                Piece::new(TokenCategory::NameVariable, self.cur.slice_from(start))
            }
            b'(' => {
                // `$(cmd)`: emit the opener; the command tokenizes
                // normally and the `)` closes as punctuation.
                self.cur.advance();
                Piece::new(TokenCategory::StringInterpol, self.cur.slice_from(start))
            }
            b'?' | b'@' | b'#' | b'*' | b'$' | b'!' | b'-' => {
                self.cur.advance();
                Piece::new(TokenCategory::NameVariable, self.cur.slice_from(start))
            }
            b if b.is_ascii_digit() => {
                self.cur.advance();
                Piece::new(TokenCategory::NameVariable, self.cur.slice_from(start))
            }
            b if is_ident_start(b) => {
                self.cur.eat_while(is_ident_continue);
                Piece::new(TokenCategory::NameVariable, self.cur.slice_from(start))
            }
            _ => Piece::new(TokenCategory::Text, self.cur.slice_from(start)),
        }
    }
}
