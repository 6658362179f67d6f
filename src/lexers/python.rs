//! Python scanner.
//!
//! Beyond the shared sub-scanners, Python needs: `#` comments, triple
//! quotes, string prefixes (`r`, `b`, `f`, `u` and two-letter combos),
//! f-string interpolation with `{{`/`}}` escapes, decorators, and the
//! `def`/`class` follow-ups. F-string bodies use the same mode-stack
//! shape as template literals elsewhere: a body state per open string,
//! an interpolation state per open `{`.

use crate::cursor::Cursor;
use crate::lexer::{Lexer, Pieces};
use crate::scan::{
    is_ident_continue, is_ident_start, scan_identifier, scan_line_comment, scan_number,
    scan_quoted, scan_triple, NumberSyntax, WordTable,
};
use crate::token::{Piece, TokenCategory};

/// The `python` lexer (aliases: `py`, `python3`).
pub struct PythonLexer;

static WORDS: WordTable = WordTable {
    booleans: &["False", "True"],
    constants: &["Ellipsis", "None"],
    declarations: &["class", "def", "lambda"],
    namespaces: &["from", "import"],
    types: &[],
    reserved: &[],
    pseudos: &["cls", "self"],
    word_operators: &["and", "in", "is", "not", "or"],
    keywords: &[
        "assert", "async", "await", "break", "continue", "del", "elif", "else", "except",
        "finally", "for", "global", "if", "nonlocal", "pass", "raise", "return", "try",
        "while", "with", "yield",
    ],
    builtins: &[
        "abs", "all", "any", "bin", "bool", "bytearray", "bytes", "callable", "chr",
        "classmethod", "complex", "dict", "dir", "divmod", "enumerate", "filter", "float",
        "format", "frozenset", "getattr", "globals", "hasattr", "hash", "hex", "id", "input",
        "int", "isinstance", "issubclass", "iter", "len", "list", "locals", "map", "max",
        "min", "next", "object", "oct", "open", "ord", "pow", "print", "property", "range",
        "repr", "reversed", "round", "set", "setattr", "slice", "sorted", "staticmethod",
        "str", "sum", "super", "tuple", "type", "vars", "zip",
    ],
};

static NUMBERS: NumberSyntax = NumberSyntax {
    underscores: true,
    hex: true,
    octal: true,
    binary: true,
    float: true,
    suffixes: &["j", "J"],
};

static OPERATORS3: &[&str] = &["**=", "//=", ">>=", "<<="];
static OPERATORS2: &[&str] = &[
    "**", "//", "<<", ">>", "<=", ">=", "==", "!=", "->", ":=", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "@=",
];
static OPERATORS1: &[u8] = b"+-*/%@<>=&|^~";
static PUNCTUATION: &[u8] = b"()[]{}:;,.";

impl Lexer for PythonLexer {
    fn name(&self) -> &'static str {
        "python"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["py", "python3"]
    }

    fn pieces<'a>(&self, source: &'a str) -> Pieces<'a> {
        Box::new(PythonScanner {
            cur: Cursor::new(source),
            modes: Vec::new(),
            pending: Pending::None,
            fstring_next: false,
            at_line_start: true,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    Function,
    Type,
}

enum Mode {
    /// Inside an f-string body delimited by `quote`.
    FString { quote: u8 },
    /// Inside an `{…}` interpolation, tracking nested braces.
    Interp { brace_depth: u32 },
}

struct PythonScanner<'a> {
    cur: Cursor<'a>,
    modes: Vec<Mode>,
    pending: Pending,
    fstring_next: bool,
    at_line_start: bool,
}

impl<'a> Iterator for PythonScanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        if self.cur.is_eof() {
            return None;
        }
        let piece = if let Some(Mode::FString { quote }) = self.modes.last() {
            let quote = *quote;
            self.fstring_piece(quote)
        } else {
            self.code_piece()
        };
        let is_ws = piece.category == TokenCategory::Whitespace;
        let ends_line = is_ws && piece.text.as_bytes().last() == Some(&b'\n');
        self.at_line_start = ends_line || (self.at_line_start && is_ws);
        Some(piece)
    }
}

impl<'a> PythonScanner<'a> {
    // ─── F-string body ───────────────────────────────────────────────

    fn fstring_piece(&mut self, quote: u8) -> Piece<'a> {
        let start = self.cur.pos();
        let string_category = if quote == b'"' {
            TokenCategory::StringDouble
        } else {
            TokenCategory::StringSingle
        };
        match self.cur.current() {
            b if b == quote => {
                self.cur.advance();
                self.modes.pop();
                Piece::new(string_category, self.cur.slice_from(start))
            }
            b'{' if self.cur.peek() != b'{' => {
                self.cur.advance();
                self.modes.push(Mode::Interp { brace_depth: 0 });
                Piece::new(TokenCategory::StringInterpol, self.cur.slice_from(start))
            }
            b'\\' => {
                self.cur.advance();
                if !self.cur.is_eof() {
                    self.cur.advance_char();
                }
                Piece::new(TokenCategory::StringEscape, self.cur.slice_from(start))
            }
            b'\n' | b'\r' => {
                // Unterminated single-line f-string: close the mode and
                // let the newline scan as whitespace.
                self.modes.pop();
                if self.cur.current() == b'\r' && self.cur.peek() == b'\n' {
                    self.cur.advance_n(2);
                } else {
                    self.cur.advance();
                }
                Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start))
            }
            _ => {
                // Run of plain content; doubled braces stay in the run.
                loop {
                    self.cur.eat_while(|b| {
                        !matches!(b, b'{' | b'}' | b'\\' | b'\n' | b'\r') && b != quote
                    });
                    match self.cur.current() {
                        b'{' if self.cur.peek() == b'{' => self.cur.advance_n(2),
                        b'}' if self.cur.peek() == b'}' => self.cur.advance_n(2),
                        // A lone `}` is literal text in an f-string body.
                        b'}' => self.cur.advance(),
                        _ => break,
                    }
                }
                Piece::new(TokenCategory::String, self.cur.slice_from(start))
            }
        }
    }

    // ─── Code ────────────────────────────────────────────────────────

    fn code_piece(&mut self) -> Piece<'a> {
        let pending = std::mem::replace(&mut self.pending, Pending::None);
        let start = self.cur.pos();
        let b = self.cur.current();

        if let Some(Mode::Interp { brace_depth }) = self.modes.last_mut() {
            if b == b'{' {
                *brace_depth += 1;
            } else if b == b'}' {
                if *brace_depth == 0 {
                    self.modes.pop();
                    self.cur.advance();
                    return Piece::new(TokenCategory::StringInterpol, self.cur.slice_from(start));
                }
                *brace_depth -= 1;
            }
        }

        match b {
            b' ' | b'\t' => {
                self.pending = pending;
                self.cur.eat_whitespace();
                Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start))
            }
            b'\r' => {
                self.pending = pending;
                if self.cur.peek() == b'\n' {
                    self.cur.advance_n(2);
                } else {
                    self.cur.advance();
                }
                Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start))
            }
            b'\n' => {
                self.pending = pending;
                self.cur.advance();
                Piece::new(TokenCategory::Whitespace, self.cur.slice_from(start))
            }
            b'#' => {
                self.pending = pending;
                let category = if start == 0 && self.cur.peek() == b'!' {
                    TokenCategory::CommentHashbang
                } else {
                    TokenCategory::CommentSingle
                };
                scan_line_comment(&mut self.cur, category)
            }
            b'"' | b'\'' => {
                let is_f = std::mem::take(&mut self.fstring_next);
                self.string(b, is_f)
            }
            b'@' if self.at_line_start && is_ident_start(self.cur.peek()) => {
                // Decorator: `@` plus a dotted name. Mid-line `@` is the
                // matmul operator and falls through to the operator arm.
                self.cur.advance();
                loop {
                    self.cur.eat_while(is_ident_continue);
                    if self.cur.current() == b'.' && is_ident_start(self.cur.peek()) {
                        self.cur.advance();
                    } else {
                        break;
                    }
                }
                Piece::new(TokenCategory::NameDecorator, self.cur.slice_from(start))
            }
            b'0'..=b'9' => scan_number(&mut self.cur, &NUMBERS),
            _ if is_ident_start(b) => self.identifier(pending),
            _ => self.operator_or_punct(),
        }
    }

    /// Scan a string opener. `is_f` marks an f-string armed by a prefix.
    fn string(&mut self, quote: u8, is_f: bool) -> Piece<'a> {
        let triple = [quote, quote, quote];
        if self.cur.at(&triple) {
            return scan_triple(&mut self.cur, quote, TokenCategory::StringDoc);
        }
        if is_f {
            let start = self.cur.pos();
            self.cur.advance();
            self.modes.push(Mode::FString { quote });
            let category = if quote == b'"' {
                TokenCategory::StringDouble
            } else {
                TokenCategory::StringSingle
            };
            return Piece::new(category, self.cur.slice_from(start));
        }
        let category = if quote == b'"' {
            TokenCategory::StringDouble
        } else {
            TokenCategory::StringSingle
        };
        scan_quoted(&mut self.cur, quote, category, false)
    }

    fn identifier(&mut self, pending: Pending) -> Piece<'a> {
        let word = scan_identifier(&mut self.cur, false);

        // String prefix: up to two letters from rbfuRBFU directly before
        // a quote (`r"…"`, `rb'…'`, `f"…"`).
        if word.len() <= 2
            && word.bytes().all(|b| matches!(b, b'r' | b'b' | b'f' | b'u' | b'R' | b'B' | b'F' | b'U'))
            && matches!(self.cur.current(), b'"' | b'\'')
        {
            self.fstring_next = word.bytes().any(|b| b == b'f' || b == b'F');
            self.pending = pending;
            return Piece::new(TokenCategory::StringAffix, word);
        }

        let mut category = WORDS.classify(word);
        if category == TokenCategory::Name {
            match pending {
                Pending::Function => category = TokenCategory::NameFunction,
                Pending::Type => category = TokenCategory::NameClass,
                Pending::None => {}
            }
            // Dunder names read as magic (`__init__`, `__name__`).
            if word.len() > 4 && word.starts_with("__") && word.ends_with("__") {
                category = TokenCategory::NameFunctionMagic;
            }
        } else if category == TokenCategory::KeywordDeclaration {
            match word {
                "def" => self.pending = Pending::Function,
                "class" => self.pending = Pending::Type,
                _ => {}
            }
        }

        Piece::new(category, word)
    }

    fn operator_or_punct(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        for op in OPERATORS3 {
            if self.cur.at(op.as_bytes()) {
                self.cur.advance_n(3);
                return Piece::new(TokenCategory::Operator, self.cur.slice_from(start));
            }
        }
        for op in OPERATORS2 {
            if self.cur.at(op.as_bytes()) {
                self.cur.advance_n(2);
                return Piece::new(TokenCategory::Operator, self.cur.slice_from(start));
            }
        }
        let b = self.cur.current();
        if OPERATORS1.contains(&b) {
            self.cur.advance();
            return Piece::new(TokenCategory::Operator, self.cur.slice_from(start));
        }
        if PUNCTUATION.contains(&b) {
            self.cur.advance();
            return Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start));
        }
        self.cur.advance_char();
        Piece::new(TokenCategory::Error, self.cur.slice_from(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Vec<(TokenCategory, &str)> {
        PythonLexer
            .pieces(source)
            .map(|p| (p.category, p.text))
            .collect()
    }

    fn reconstruct(source: &str) -> String {
        PythonLexer.pieces(source).map(|p| p.text).collect()
    }

    #[test]
    fn def_and_function_name() {
        let pieces = scan("def hello(): pass");
        assert_eq!(pieces[0], (TokenCategory::KeywordDeclaration, "def"));
        assert_eq!(pieces[2], (TokenCategory::NameFunction, "hello"));
        assert!(pieces.contains(&(TokenCategory::Keyword, "pass")));
    }

    #[test]
    fn class_name_follows_class() {
        let pieces = scan("class Point:");
        assert_eq!(pieces[2], (TokenCategory::NameClass, "Point"));
    }

    #[test]
    fn keyword_buckets() {
        let pieces = scan("from os import path");
        assert_eq!(pieces[0], (TokenCategory::KeywordNamespace, "from"));
        assert_eq!(pieces[4], (TokenCategory::KeywordNamespace, "import"));

        let pieces = scan("x is not None and True");
        assert!(pieces.contains(&(TokenCategory::OperatorWord, "is")));
        assert!(pieces.contains(&(TokenCategory::OperatorWord, "not")));
        assert!(pieces.contains(&(TokenCategory::KeywordConstant, "None")));
        assert!(pieces.contains(&(TokenCategory::LiteralBoolean, "True")));
    }

    #[test]
    fn self_is_pseudo() {
        let pieces = scan("self.x");
        assert_eq!(pieces[0], (TokenCategory::NameBuiltinPseudo, "self"));
    }

    #[test]
    fn dunder_is_magic() {
        let pieces = scan("__init__");
        assert_eq!(pieces[0], (TokenCategory::NameFunctionMagic, "__init__"));
    }

    #[test]
    fn comment_and_hashbang() {
        let pieces = scan("#!/usr/bin/env python\n# plain\n");
        assert_eq!(
            pieces[0],
            (TokenCategory::CommentHashbang, "#!/usr/bin/env python")
        );
        assert_eq!(pieces[2], (TokenCategory::CommentSingle, "# plain"));
    }

    #[test]
    fn triple_quoted_is_doc() {
        let pieces = scan("\"\"\"Module docstring.\"\"\"");
        assert_eq!(
            pieces[0],
            (TokenCategory::StringDoc, "\"\"\"Module docstring.\"\"\"")
        );
    }

    #[test]
    fn raw_prefix_is_affix() {
        let pieces = scan("r\"\\d+\"");
        assert_eq!(pieces[0], (TokenCategory::StringAffix, "r"));
        assert_eq!(pieces[1], (TokenCategory::StringDouble, "\"\\d+\""));
    }

    #[test]
    fn fstring_interpolation() {
        let pieces = scan("f\"hi {name}!\"");
        assert_eq!(
            pieces,
            vec![
                (TokenCategory::StringAffix, "f"),
                (TokenCategory::StringDouble, "\""),
                (TokenCategory::String, "hi "),
                (TokenCategory::StringInterpol, "{"),
                (TokenCategory::Name, "name"),
                (TokenCategory::StringInterpol, "}"),
                (TokenCategory::String, "!"),
                (TokenCategory::StringDouble, "\""),
            ]
        );
    }

    #[test]
    fn fstring_doubled_braces_stay_in_run() {
        let pieces = scan("f\"{{literal}}\"");
        assert!(pieces.contains(&(TokenCategory::String, "{{literal}}")));
        assert_eq!(reconstruct("f\"{{literal}}\""), "f\"{{literal}}\"");
    }

    #[test]
    fn fstring_nested_braces_in_expression() {
        let source = "f\"{ {'k': 1}['k'] }\"";
        assert_eq!(reconstruct(source), source);
    }

    #[test]
    fn decorator_dotted() {
        let pieces = scan("@functools.cache\ndef f(): pass");
        assert_eq!(pieces[0], (TokenCategory::NameDecorator, "@functools.cache"));
    }

    #[test]
    fn matmul_at_is_operator() {
        let pieces = scan("a @ b");
        assert_eq!(pieces[2], (TokenCategory::Operator, "@"));
    }

    #[test]
    fn walrus_and_arrow() {
        let pieces = scan("if (n := 1) -> None:");
        assert!(pieces.contains(&(TokenCategory::Operator, ":=")));
        assert!(pieces.contains(&(TokenCategory::Operator, "->")));
    }

    #[test]
    fn numbers() {
        let pieces = scan("0x_ff 1_000 3.14 1e-9 2j");
        assert_eq!(pieces[0], (TokenCategory::NumberHex, "0x_ff"));
        assert_eq!(pieces[2], (TokenCategory::NumberInteger, "1_000"));
        assert_eq!(pieces[4], (TokenCategory::NumberFloat, "3.14"));
        assert_eq!(pieces[6], (TokenCategory::NumberFloat, "1e-9"));
        assert_eq!(pieces[8], (TokenCategory::NumberInteger, "2j"));
    }

    #[test]
    fn unterminated_string_is_error() {
        let pieces = scan("x = \"oops\ny = 1");
        assert!(pieces.contains(&(TokenCategory::Error, "\"oops")));
        assert_eq!(reconstruct("x = \"oops\ny = 1"), "x = \"oops\ny = 1");
    }

    #[test]
    fn unterminated_fstring_recovers_at_newline() {
        let source = "f\"oops\nx = 1";
        assert_eq!(reconstruct(source), source);
    }

    #[test]
    fn reconstruction_mixed() {
        let source = "@app.route(\"/\")\ndef index():\n    return f\"hello {user.name}\"\n";
        assert_eq!(reconstruct(source), source);
    }
}
