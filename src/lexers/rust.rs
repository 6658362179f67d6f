//! Rust scanner.
//!
//! The disambiguations that keep this machine interesting: `'a` is a
//! lifetime while `'a'` is a char literal (one extra byte of lookahead
//! settles it); `r#"…"#` raw strings close only on a quote followed by
//! the opening hash count; block comments nest; `///` and `//!` are doc
//! comments; `#[…]` attributes swallow balanced brackets.

use crate::cursor::Cursor;
use crate::lexer::{Lexer, Pieces};
use crate::scan::{
    is_ident_continue, is_ident_start, scan_identifier, scan_line_comment, scan_nested_comment,
    scan_number, scan_quoted, NumberSyntax, WordTable,
};
use crate::token::{Piece, TokenCategory};

/// The `rust` lexer (alias: `rs`).
pub struct RustLexer;

static WORDS: WordTable = WordTable {
    booleans: &["false", "true"],
    constants: &[],
    declarations: &[
        "const", "enum", "fn", "impl", "let", "mod", "static", "struct", "trait", "type",
    ],
    namespaces: &["extern", "use"],
    types: &[
        "bool", "char", "f32", "f64", "i128", "i16", "i32", "i64", "i8", "isize", "str",
        "u128", "u16", "u32", "u64", "u8", "usize",
    ],
    reserved: &[
        "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try",
        "typeof", "unsized", "virtual", "yield",
    ],
    pseudos: &["Self", "self"],
    word_operators: &["as", "in"],
    keywords: &[
        "async", "await", "break", "continue", "crate", "dyn", "else", "for", "if", "loop",
        "match", "move", "mut", "pub", "ref", "return", "super", "unsafe", "where", "while",
    ],
    builtins: &[
        "Box", "Err", "None", "Ok", "Option", "Result", "Some", "String", "Vec",
    ],
};

static NUMBERS: NumberSyntax = NumberSyntax {
    underscores: true,
    hex: true,
    octal: true,
    binary: true,
    float: true,
    suffixes: &[
        "isize", "usize", "i128", "u128", "f32", "f64", "i16", "i32", "i64", "u16", "u32",
        "u64", "i8", "u8",
    ],
};

static OPERATORS3: &[&str] = &["..=", "<<=", ">>="];
static OPERATORS2: &[&str] = &[
    "::", "->", "=>", "==", "!=", "<=", ">=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "<<", ">>", "..",
];
static OPERATORS1: &[u8] = b"+-*/%<>=!&|^@?";
static PUNCTUATION: &[u8] = b"()[]{};,.:#";

impl Lexer for RustLexer {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["rs"]
    }

    fn pieces<'a>(&self, source: &'a str) -> Pieces<'a> {
        Box::new(RustScanner {
            cur: Cursor::new(source),
            pending: Pending::None,
            raw_next: false,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    Function,
    Type,
    Namespace,
}

struct RustScanner<'a> {
    cur: Cursor<'a>,
    pending: Pending,
    /// The next piece is a raw-string body (armed by an `r`/`br` affix).
    raw_next: bool,
}

impl<'a> Iterator for RustScanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        if self.cur.is_eof() {
            return None;
        }
        Some(self.piece())
    }
}

impl<'a> RustScanner<'a> {
    fn piece(&mut self) -> Piece<'a> {
        if std::mem::take(&mut self.raw_next) {
            return self.raw_string_body();
        }
        let pending = std::mem::replace(&mut self.pending, Pending::None);
        let start = self.cur.pos();
        let b = self.cur.current();

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
            b'/' if self.cur.peek() == b'/' => {
                self.pending = pending;
                let category = if matches!(self.cur.peek2(), b'/' | b'!') {
                    TokenCategory::CommentSpecial
                } else {
                    TokenCategory::CommentSingle
                };
                scan_line_comment(&mut self.cur, category)
            }
            b'/' if self.cur.peek() == b'*' => {
                self.pending = pending;
                scan_nested_comment(&mut self.cur, b"/*", b"*/", TokenCategory::CommentMultiline)
            }
            b'#' if matches!(self.cur.peek(), b'[')
                || (self.cur.peek() == b'!' && self.cur.peek2() == b'[') =>
            {
                self.attribute()
            }
            b'"' => scan_quoted(&mut self.cur, b'"', TokenCategory::StringDouble, true),
            b'\'' => self.char_or_lifetime(),
            b'0'..=b'9' => scan_number(&mut self.cur, &NUMBERS),
            _ if is_ident_start(b) => self.identifier(pending),
            _ => self.operator_or_punct(),
        }
    }

    /// `#[…]` / `#![…]` attribute: consumed whole, balanced brackets.
    fn attribute(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        self.cur.advance(); // '#'
        if self.cur.current() == b'!' {
            self.cur.advance();
        }
        self.cur.advance(); // '['
        let mut depth: u32 = 1;
        while depth > 0 && !self.cur.is_eof() {
            match self.cur.current() {
                b'[' => {
                    depth += 1;
                    self.cur.advance();
                }
                b']' => {
                    depth -= 1;
                    self.cur.advance();
                }
                _ => self.cur.advance_char(),
            }
        }
        Piece::new(TokenCategory::CommentPreproc, self.cur.slice_from(start))
    }

    /// `'a'` is a char, `'a` is a lifetime. A quote followed by an
    /// identifier byte is a lifetime unless the byte after that closes
    /// the literal.
    fn char_or_lifetime(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        if (is_ident_start(self.cur.peek())) && self.cur.peek2() != b'\'' {
            self.cur.advance();
            self.cur.eat_while(is_ident_continue);
            return Piece::new(TokenCategory::NameAttribute, self.cur.slice_from(start));
        }
        // Char literal, possibly with an escape of arbitrary length.
        self.cur.advance();
        loop {
            match self.cur.current() {
                b'\'' => {
                    self.cur.advance();
                    return Piece::new(TokenCategory::StringChar, self.cur.slice_from(start));
                }
                b'\\' => {
                    self.cur.advance();
                    if !self.cur.is_eof() {
                        self.cur.advance_char();
                    }
                }
                b'\n' | b'\r' => {
                    return Piece::new(TokenCategory::Error, self.cur.slice_from(start));
                }
                _ if self.cur.is_eof() => {
                    return Piece::new(TokenCategory::Error, self.cur.slice_from(start));
                }
                _ => self.cur.advance_char(),
            }
        }
    }

    /// `r"…"`, `r#"…"#`, `br"…"`: the body closes only on a quote
    /// followed by as many hashes as the opener had.
    fn raw_string_body(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        self.cur.eat_while(|b| b == b'#');
        let hashes = (self.cur.pos() - start) as usize;
        if self.cur.current() != b'"' {
            // `r#foo`: a raw identifier, not a string. The hashes scanned
            // so far become the piece; the identifier follows normally.
            return Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start));
        }
        self.cur.advance(); // opening quote
        loop {
            self.cur.eat_until_byte(b'"');
            if self.cur.is_eof() {
                return Piece::new(TokenCategory::String, self.cur.slice_from(start));
            }
            self.cur.advance(); // closing-candidate quote
            let mut probe = self.cur;
            let mut matched = 0usize;
            while matched < hashes && probe.current() == b'#' {
                probe.advance();
                matched += 1;
            }
            if matched == hashes {
                self.cur = probe;
                return Piece::new(TokenCategory::String, self.cur.slice_from(start));
            }
        }
    }

    fn identifier(&mut self, pending: Pending) -> Piece<'a> {
        let word = scan_identifier(&mut self.cur, false);

        // String prefixes: `r`/`br`/`b` before a quote or raw-string hash.
        match word {
            "r" | "br" if matches!(self.cur.current(), b'"' | b'#') => {
                self.raw_next = true;
                return Piece::new(TokenCategory::StringAffix, word);
            }
            "b" if self.cur.current() == b'"' => {
                self.pending = pending;
                return Piece::new(TokenCategory::StringAffix, word);
            }
            "b" if self.cur.current() == b'\'' => {
                self.pending = pending;
                return Piece::new(TokenCategory::StringAffix, word);
            }
            _ => {}
        }

        let mut category = WORDS.classify(word);
        if category == TokenCategory::Name {
            match pending {
                Pending::Function => category = TokenCategory::NameFunction,
                Pending::Type => category = TokenCategory::NameClass,
                Pending::Namespace => category = TokenCategory::NameNamespace,
                Pending::None => {}
            }
            // `name!(…)` is a macro invocation.
            if category == TokenCategory::Name
                && self.cur.current() == b'!'
                && matches!(self.cur.peek(), b'(' | b'[' | b'{')
            {
                category = TokenCategory::NameFunction;
            }
            // UpperCamelCase reads as a type name.
            if category == TokenCategory::Name
                && word.as_bytes()[0].is_ascii_uppercase()
            {
                category = TokenCategory::NameClass;
            }
        } else if category == TokenCategory::KeywordDeclaration {
            match word {
                "fn" => self.pending = Pending::Function,
                "struct" | "enum" | "trait" | "type" | "impl" => self.pending = Pending::Type,
                "mod" => self.pending = Pending::Namespace,
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
