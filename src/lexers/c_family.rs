//! Generic C-family scanner: one machine, six languages.
//!
//! The curly-brace languages differ in keyword tables, numeric suffixes,
//! and a handful of lexical features (preprocessor lines, template
//! literals, raw backtick strings, annotations). Everything else — the
//! dispatch loop, comments, strings, operators — is identical, so the
//! machine is written once and parameterized by a static [`CFamilySpec`].
//!
//! # States
//!
//! The scanner is in one of three states, tracked by an explicit mode
//! stack:
//!
//! - code (stack empty or below an `Interp` entry): the main dispatch;
//! - `Template`: inside a template literal body, emitting string runs,
//!   escapes, and `${` interpolation openers;
//! - `Interp`: inside `${…}`, scanning code with brace-depth tracking so
//!   the closing `}` is recognized at depth 0.
//!
//! Template literals nest through interpolations (`` `a${`b`}c` ``): each
//! opener pushes, each closer pops.

use crate::cursor::Cursor;
use crate::lexer::{Lexer, Pieces};
use crate::scan::{
    is_ident_continue, is_ident_start, scan_block_comment, scan_identifier, scan_line_comment,
    scan_number, scan_quoted, scan_raw, NumberSyntax, WordTable,
};
use crate::token::{Piece, TokenCategory};

/// Static parameter pack describing one C-family language.
pub(crate) struct CFamilySpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub words: WordTable,
    pub numbers: NumberSyntax,
    /// Three-byte operators, matched before shorter ones.
    pub operators3: &'static [&'static str],
    /// Two-byte operators.
    pub operators2: &'static [&'static str],
    /// Single-byte operators.
    pub operators1: &'static [u8],
    /// Punctuation bytes.
    pub punctuation: &'static [u8],
    /// `#` at line start opens a preprocessor directive.
    pub preprocessor: bool,
    /// Backtick opens a template literal with `${…}` interpolation.
    pub templates: bool,
    /// Backtick opens a raw string with no escapes.
    pub backtick_raw: bool,
    /// `$` participates in identifiers.
    pub dollar_ident: bool,
    /// `@Word` is an annotation.
    pub annotations: bool,
    /// `'…'` is a character literal (otherwise a single-quoted string).
    pub char_literals: bool,
    /// Declaration keywords whose following identifier names a function.
    pub fn_decl: &'static [&'static str],
    /// Declaration keywords whose following identifier names a type.
    pub type_decl: &'static [&'static str],
}

/// A C-family language lexer: a name and a parameter pack.
pub(crate) struct CFamilyLexer {
    spec: &'static CFamilySpec,
}

impl Lexer for CFamilyLexer {
    fn name(&self) -> &'static str {
        self.spec.name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.spec.aliases
    }

    fn pieces<'a>(&self, source: &'a str) -> Pieces<'a> {
        Box::new(CFamilyScanner {
            cur: Cursor::new(source),
            spec: self.spec,
            modes: Vec::new(),
            pending: Pending::None,
            at_line_start: true,
        })
    }
}

/// Follow-up classification armed by the previous significant token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    None,
    /// Next plain identifier is a function name (`function foo`).
    Function,
    /// Next plain identifier is a type name (`class Foo`).
    Type,
    /// Next `<…>` or `"…"` is an include path (`#include <stdio.h>`).
    IncludePath,
}

/// Scanner mode above plain code.
#[derive(Debug)]
enum Mode {
    /// Inside a template literal body.
    Template,
    /// Inside a `${…}` interpolation, tracking nested braces.
    Interp { brace_depth: u32 },
}

struct CFamilyScanner<'a> {
    cur: Cursor<'a>,
    spec: &'static CFamilySpec,
    modes: Vec<Mode>,
    pending: Pending,
    at_line_start: bool,
}

impl<'a> Iterator for CFamilyScanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        if self.cur.is_eof() {
            return None;
        }
        let piece = if matches!(self.modes.last(), Some(Mode::Template)) {
            self.template_piece()
        } else {
            self.code_piece()
        };
        let is_ws = piece.category == TokenCategory::Whitespace;
        let ends_line = is_ws && piece.text.as_bytes().last() == Some(&b'\n');
        self.at_line_start = ends_line || (self.at_line_start && is_ws);
        Some(piece)
    }
}

impl<'a> CFamilyScanner<'a> {
    // ─── Template literals ───────────────────────────────────────────

    fn template_piece(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        match self.cur.current() {
            b'`' => {
                self.cur.advance();
                self.modes.pop();
                Piece::new(TokenCategory::StringBacktick, self.cur.slice_from(start))
            }
            b'$' if self.cur.peek() == b'{' => {
                self.cur.advance_n(2);
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
            _ => {
                // Plain run up to the next delimiter. A `$` not followed
                // by `{` belongs to the run.
                loop {
                    self.cur
                        .eat_while(|b| !matches!(b, b'`' | b'$' | b'\\'));
                    if self.cur.current() == b'$' && self.cur.peek() != b'{' {
                        self.cur.advance();
                        continue;
                    }
                    break;
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

        // Interpolation bookkeeping: a `}` at depth 0 closes the `${…}`.
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
            b'/' if self.cur.peek() == b'/' => {
                self.pending = pending;
                scan_line_comment(&mut self.cur, TokenCategory::CommentSingle)
            }
            b'/' if self.cur.peek() == b'*' => {
                self.pending = pending;
                scan_block_comment(&mut self.cur, 2, b"*/", TokenCategory::CommentMultiline)
            }
            b'<' if pending == Pending::IncludePath => self.include_path(),
            b'"' if pending == Pending::IncludePath => {
                scan_quoted(&mut self.cur, b'"', TokenCategory::CommentPreprocFile, false)
            }
            b'"' => scan_quoted(&mut self.cur, b'"', TokenCategory::StringDouble, false),
            b'\'' if self.spec.char_literals => self.char_literal(),
            b'\'' => scan_quoted(&mut self.cur, b'\'', TokenCategory::StringSingle, false),
            b'`' if self.spec.templates => {
                self.cur.advance();
                self.modes.push(Mode::Template);
                Piece::new(TokenCategory::StringBacktick, self.cur.slice_from(start))
            }
            b'`' if self.spec.backtick_raw => {
                scan_raw(&mut self.cur, b'`', TokenCategory::StringBacktick)
            }
            b'#' if self.spec.preprocessor && self.at_line_start => self.preprocessor(),
            b'@' if self.spec.annotations && is_ident_start(self.cur.peek()) => {
                self.cur.advance();
                self.cur.eat_while(is_ident_continue);
                Piece::new(TokenCategory::NameDecorator, self.cur.slice_from(start))
            }
            b'0'..=b'9' => scan_number(&mut self.cur, &self.spec.numbers),
            _ if is_ident_start(b) || (self.spec.dollar_ident && b == b'$') => {
                self.identifier(pending)
            }
            _ => self.operator_or_punct(),
        }
    }

    fn identifier(&mut self, pending: Pending) -> Piece<'a> {
        let word = scan_identifier(&mut self.cur, self.spec.dollar_ident);
        let mut category = self.spec.words.classify(word);

        if category == TokenCategory::Name {
            match pending {
                Pending::Function => category = TokenCategory::NameFunction,
                Pending::Type => category = TokenCategory::NameClass,
                Pending::None | Pending::IncludePath => {}
            }
        } else if category == TokenCategory::KeywordDeclaration {
            if self.spec.fn_decl.contains(&word) {
                self.pending = Pending::Function;
            } else if self.spec.type_decl.contains(&word) {
                self.pending = Pending::Type;
            }
        }

        Piece::new(category, word)
    }

    /// Scan a character literal. Escapes of any length are consumed; the
    /// literal ends at the closing quote. A line break or end-of-input
    /// before the closing quote makes the head an error token.
    fn char_literal(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
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

    /// Scan `#directive`. The directive marker and name form one piece;
    /// the rest of the line is tokenized normally, except that after
    /// `#include` the `<…>` or `"…"` argument reads as an include path.
    fn preprocessor(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        self.cur.advance();
        self.cur.eat_whitespace();
        self.cur.eat_while(is_ident_continue);
        let text = self.cur.slice_from(start);
        if text.trim_start_matches(|c: char| c == '#' || c == ' ' || c == '\t') == "include" {
            self.pending = Pending::IncludePath;
        }
        Piece::new(TokenCategory::CommentPreproc, text)
    }

    /// Scan `<stdio.h>` after `#include`. Stops at `>` (inclusive) or the
    /// end of line (exclusive).
    fn include_path(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        self.cur.advance();
        self.cur
            .eat_while(|b| !matches!(b, b'>' | b'\n' | b'\r'));
        if self.cur.current() == b'>' {
            self.cur.advance();
        }
        Piece::new(TokenCategory::CommentPreprocFile, self.cur.slice_from(start))
    }

    fn operator_or_punct(&mut self) -> Piece<'a> {
        let start = self.cur.pos();
        for op in self.spec.operators3 {
            if self.cur.at(op.as_bytes()) {
                self.cur.advance_n(3);
                return Piece::new(TokenCategory::Operator, self.cur.slice_from(start));
            }
        }
        for op in self.spec.operators2 {
            if self.cur.at(op.as_bytes()) {
                self.cur.advance_n(2);
                return Piece::new(TokenCategory::Operator, self.cur.slice_from(start));
            }
        }
        let b = self.cur.current();
        if self.spec.operators1.contains(&b) {
            self.cur.advance();
            return Piece::new(TokenCategory::Operator, self.cur.slice_from(start));
        }
        if self.spec.punctuation.contains(&b) {
            self.cur.advance();
            return Piece::new(TokenCategory::Punctuation, self.cur.slice_from(start));
        }
        self.cur.advance_char();
        Piece::new(TokenCategory::Error, self.cur.slice_from(start))
    }
}

// ─── Language parameter packs ────────────────────────────────────────
//
// Word-table buckets are sorted ascending (byte order: digits, uppercase,
// underscore, lowercase) for binary search.

static C_SPEC: CFamilySpec = CFamilySpec {
    name: "c",
    aliases: &[],
    words: WordTable {
        booleans: &["false", "true"],
        constants: &["NULL"],
        declarations: &["enum", "struct", "typedef", "union"],
        namespaces: &[],
        types: &[
            "_Bool", "char", "double", "float", "int", "long", "short", "signed", "size_t",
            "unsigned", "void",
        ],
        reserved: &[],
        pseudos: &[],
        word_operators: &["sizeof"],
        keywords: &[
            "auto", "break", "case", "const", "continue", "default", "do", "else", "extern",
            "for", "goto", "if", "inline", "register", "restrict", "return", "static", "switch",
            "volatile", "while",
        ],
        builtins: &[],
    },
    numbers: NumberSyntax {
        underscores: false,
        hex: true,
        octal: false,
        binary: true,
        float: true,
        suffixes: &["ULL", "ull", "LL", "UL", "ll", "ul", "F", "L", "U", "f", "l", "u"],
    },
    operators3: &["<<=", ">>=", "..."],
    operators2: &[
        "->", "++", "--", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "+=", "-=", "*=",
        "/=", "%=", "&=", "|=", "^=",
    ],
    operators1: b"+-*/%<>=!&|^~?:",
    punctuation: b"()[]{};,.",
    preprocessor: true,
    templates: false,
    backtick_raw: false,
    dollar_ident: false,
    annotations: false,
    char_literals: true,
    fn_decl: &[],
    type_decl: &["enum", "struct", "union"],
};

static CPP_SPEC: CFamilySpec = CFamilySpec {
    name: "cpp",
    aliases: &["c++", "cxx"],
    words: WordTable {
        booleans: &["false", "true"],
        constants: &["NULL", "nullptr"],
        declarations: &["class", "enum", "struct", "template", "typedef", "typename", "union"],
        namespaces: &["namespace", "using"],
        types: &[
            "auto", "bool", "char", "double", "float", "int", "long", "short", "signed",
            "size_t", "unsigned", "void", "wchar_t",
        ],
        reserved: &[],
        pseudos: &["this"],
        word_operators: &["and", "not", "or", "sizeof"],
        keywords: &[
            "break", "case", "catch", "const", "constexpr", "continue", "default", "delete",
            "do", "else", "explicit", "export", "extern", "final", "for", "friend", "goto",
            "if", "inline", "mutable", "new", "noexcept", "operator", "override", "private",
            "protected", "public", "register", "return", "static", "switch", "throw", "try",
            "virtual", "volatile", "while",
        ],
        builtins: &[],
    },
    numbers: NumberSyntax {
        underscores: true,
        hex: true,
        octal: false,
        binary: true,
        float: true,
        suffixes: &["ULL", "ull", "LL", "UL", "ll", "ul", "F", "L", "U", "f", "l", "u"],
    },
    operators3: &["<<=", ">>=", "<=>", "..."],
    operators2: &[
        "::", "->", "++", "--", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "+=", "-=",
        "*=", "/=", "%=", "&=", "|=", "^=",
    ],
    operators1: b"+-*/%<>=!&|^~?:",
    punctuation: b"()[]{};,.",
    preprocessor: true,
    templates: false,
    backtick_raw: false,
    dollar_ident: false,
    annotations: false,
    char_literals: true,
    fn_decl: &[],
    type_decl: &["class", "enum", "struct", "typename", "union"],
};

static JAVA_SPEC: CFamilySpec = CFamilySpec {
    name: "java",
    aliases: &[],
    words: WordTable {
        booleans: &["false", "true"],
        constants: &["null"],
        declarations: &["class", "enum", "interface", "record", "var"],
        namespaces: &["import", "package"],
        types: &["boolean", "byte", "char", "double", "float", "int", "long", "short", "void"],
        reserved: &["const", "goto"],
        pseudos: &["super", "this"],
        word_operators: &["instanceof"],
        keywords: &[
            "abstract", "assert", "break", "case", "catch", "continue", "default", "do",
            "else", "extends", "final", "finally", "for", "if", "implements", "native", "new",
            "private", "protected", "public", "return", "static", "strictfp", "switch",
            "synchronized", "throw", "throws", "transient", "try", "volatile", "while",
            "yield",
        ],
        builtins: &[],
    },
    numbers: NumberSyntax {
        underscores: true,
        hex: true,
        octal: false,
        binary: true,
        float: true,
        suffixes: &["D", "F", "L", "d", "f", "l"],
    },
    operators3: &["<<=", ">>=", ">>>"],
    operators2: &[
        "->", "++", "--", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "+=", "-=", "*=",
        "/=", "%=", "&=", "|=", "^=", "::",
    ],
    operators1: b"+-*/%<>=!&|^~?:",
    punctuation: b"()[]{};,.",
    preprocessor: false,
    templates: false,
    backtick_raw: false,
    dollar_ident: true,
    annotations: true,
    char_literals: true,
    fn_decl: &[],
    type_decl: &["class", "enum", "interface", "record"],
};

static JAVASCRIPT_SPEC: CFamilySpec = CFamilySpec {
    name: "javascript",
    aliases: &["js", "ecmascript"],
    words: WordTable {
        booleans: &["false", "true"],
        constants: &["Infinity", "NaN", "null", "undefined"],
        declarations: &["class", "const", "function", "let", "var"],
        namespaces: &["export", "import"],
        types: &[],
        reserved: &[
            "enum", "implements", "interface", "package", "private", "protected", "public",
        ],
        pseudos: &["this"],
        word_operators: &["delete", "in", "instanceof", "new", "of", "typeof", "void"],
        keywords: &[
            "async", "await", "break", "case", "catch", "continue", "debugger", "default",
            "do", "else", "extends", "finally", "for", "if", "return", "static", "super",
            "switch", "throw", "try", "while", "with", "yield",
        ],
        builtins: &[
            "Array", "Boolean", "Date", "Error", "Function", "JSON", "Map", "Math", "Number",
            "Object", "Promise", "Proxy", "Reflect", "RegExp", "Set", "String", "Symbol",
            "WeakMap", "WeakSet", "clearInterval", "clearTimeout", "console", "decodeURI",
            "decodeURIComponent", "document", "encodeURI", "encodeURIComponent", "exports",
            "fetch", "globalThis", "isFinite", "isNaN", "module", "parseFloat", "parseInt",
            "require", "setInterval", "setTimeout", "window",
        ],
    },
    numbers: NumberSyntax {
        underscores: true,
        hex: true,
        octal: true,
        binary: true,
        float: true,
        suffixes: &["n"],
    },
    operators3: &["===", "!==", ">>>", "**=", "&&=", "||=", "??="],
    operators2: &[
        "==", "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=",
        "%=", "&=", "|=", "^=", "<<", ">>", "=>", "**",
    ],
    operators1: b"+-*/%&|^~!<>=?:.",
    punctuation: b"()[]{};,",
    preprocessor: false,
    templates: true,
    backtick_raw: false,
    dollar_ident: true,
    annotations: false,
    char_literals: false,
    fn_decl: &["function"],
    type_decl: &["class"],
};

static TYPESCRIPT_SPEC: CFamilySpec = CFamilySpec {
    name: "typescript",
    aliases: &["ts"],
    words: WordTable {
        booleans: &["false", "true"],
        constants: &["Infinity", "NaN", "null", "undefined"],
        declarations: &[
            "class", "const", "enum", "function", "interface", "let", "namespace", "type",
            "var",
        ],
        namespaces: &["export", "import"],
        types: &[
            "any", "bigint", "boolean", "never", "number", "object", "string", "symbol",
            "unknown", "void",
        ],
        reserved: &[],
        pseudos: &["this"],
        word_operators: &[
            "as", "delete", "in", "instanceof", "keyof", "new", "of", "satisfies", "typeof",
        ],
        keywords: &[
            "abstract", "async", "await", "break", "case", "catch", "continue", "debugger",
            "declare", "default", "do", "else", "extends", "finally", "for", "if",
            "implements", "private", "protected", "public", "readonly", "return", "static",
            "super", "switch", "throw", "try", "while", "with", "yield",
        ],
        builtins: &[
            "Array", "Boolean", "Date", "Error", "Function", "JSON", "Map", "Math", "Number",
            "Object", "Promise", "Proxy", "Reflect", "RegExp", "Set", "String", "Symbol",
            "WeakMap", "WeakSet", "console", "document", "fetch", "globalThis", "parseFloat",
            "parseInt", "window",
        ],
    },
    numbers: NumberSyntax {
        underscores: true,
        hex: true,
        octal: true,
        binary: true,
        float: true,
        suffixes: &["n"],
    },
    operators3: &["===", "!==", ">>>", "**=", "&&=", "||=", "??="],
    operators2: &[
        "==", "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=",
        "%=", "&=", "|=", "^=", "<<", ">>", "=>", "**",
    ],
    operators1: b"+-*/%&|^~!<>=?:.",
    punctuation: b"()[]{};,",
    preprocessor: false,
    templates: true,
    backtick_raw: false,
    dollar_ident: true,
    annotations: true,
    char_literals: false,
    fn_decl: &["function"],
    type_decl: &["class", "enum", "interface", "namespace", "type"],
};

static GO_SPEC: CFamilySpec = CFamilySpec {
    name: "go",
    aliases: &["golang"],
    words: WordTable {
        booleans: &["false", "true"],
        constants: &["iota", "nil"],
        declarations: &["const", "func", "interface", "struct", "type", "var"],
        namespaces: &["import", "package"],
        types: &[
            "any", "bool", "byte", "complex128", "complex64", "error", "float32", "float64",
            "int", "int16", "int32", "int64", "int8", "rune", "string", "uint", "uint16",
            "uint32", "uint64", "uint8", "uintptr",
        ],
        reserved: &[],
        pseudos: &[],
        word_operators: &[],
        keywords: &[
            "break", "case", "chan", "continue", "default", "defer", "else", "fallthrough",
            "for", "go", "goto", "if", "map", "range", "return", "select", "switch",
        ],
        builtins: &[
            "append", "cap", "clear", "close", "complex", "copy", "delete", "imag", "len",
            "make", "max", "min", "new", "panic", "print", "println", "real", "recover",
        ],
    },
    numbers: NumberSyntax {
        underscores: true,
        hex: true,
        octal: true,
        binary: true,
        float: true,
        suffixes: &["i"],
    },
    operators3: &["<<=", ">>=", "&^=", "..."],
    operators2: &[
        ":=", "<-", "++", "--", "==", "!=", "<=", ">=", "&&", "||", "+=", "-=", "*=", "/=",
        "%=", "&=", "|=", "^=", "<<", ">>", "&^",
    ],
    operators1: b"+-*/%<>=!&|^:",
    punctuation: b"()[]{};,.",
    preprocessor: false,
    templates: false,
    backtick_raw: true,
    dollar_ident: false,
    annotations: false,
    char_literals: true,
    fn_decl: &["func"],
    type_decl: &["type"],
};

impl CFamilyLexer {
    pub(crate) fn c() -> Self {
        Self { spec: &C_SPEC }
    }

    pub(crate) fn cpp() -> Self {
        Self { spec: &CPP_SPEC }
    }

    pub(crate) fn java() -> Self {
        Self { spec: &JAVA_SPEC }
    }

    pub(crate) fn javascript() -> Self {
        Self { spec: &JAVASCRIPT_SPEC }
    }

    pub(crate) fn typescript() -> Self {
        Self { spec: &TYPESCRIPT_SPEC }
    }

    pub(crate) fn go() -> Self {
        Self { spec: &GO_SPEC }
    }
}
