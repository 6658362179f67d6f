//! Shared scanning building blocks.
//!
//! Every language machine is assembled from the same sub-scanners, keyed
//! by a per-language parameter pack: a [`WordTable`] for identifier
//! classification, a [`NumberSyntax`] for numeric literal rules, and the
//! quoted-string / comment scanners below. Language modules contribute
//! tables and dispatch; the consuming loops live here, once.
//!
//! All scanners take the cursor positioned at the first byte of the
//! construct and leave it one past the last consumed byte, returning the
//! finished [`Piece`]. None of them backtracks; bounded probes use the
//! cursor's `Copy` snapshots.

use crate::cursor::Cursor;
use crate::token::{Piece, TokenCategory};

// ─── Character classification ────────────────────────────────────────

/// 256-byte lookup table for identifier start bytes (`a-z`, `A-Z`, `_`).
///
/// Table lookup replaces the multi-range `matches!` with a single indexed
/// read.
static IS_IDENT_START_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0usize;
    while i < 256 {
        table[i] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'_');
        i += 1;
    }
    table
};

/// 256-byte lookup table for identifier continuation bytes
/// (`a-z`, `A-Z`, `0-9`, `_`).
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0usize;
    while i < 256 {
        table[i] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_');
        i += 1;
    }
    table
};

/// Returns `true` if `b` can start an ASCII identifier.
#[inline]
#[must_use]
pub fn is_ident_start(b: u8) -> bool {
    IS_IDENT_START_TABLE[b as usize]
}

/// Returns `true` if `b` can continue an ASCII identifier.
#[inline]
#[must_use]
pub fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

// ─── Identifier classification ───────────────────────────────────────

/// Per-language word classification tables.
///
/// Each slice is sorted ascending so lookup is a binary search; the
/// classifier probes the buckets most-specific first and falls back to
/// plain [`Name`](TokenCategory::Name). Empty slices cost one length
/// check.
#[derive(Debug)]
pub struct WordTable {
    /// Boolean literals (`true`, `false`).
    pub booleans: &'static [&'static str],
    /// Constant-valued keywords (`null`, `None`, `nil`).
    pub constants: &'static [&'static str],
    /// Declaration keywords (`fn`, `def`, `class`, `let`).
    pub declarations: &'static [&'static str],
    /// Import / namespace keywords.
    pub namespaces: &'static [&'static str],
    /// Built-in type keywords.
    pub types: &'static [&'static str],
    /// Reserved-but-unused keywords.
    pub reserved: &'static [&'static str],
    /// Pseudo identifiers (`self`, `this`).
    pub pseudos: &'static [&'static str],
    /// Word operators (`and`, `or`, `not`, `in`).
    pub word_operators: &'static [&'static str],
    /// Remaining plain keywords.
    pub keywords: &'static [&'static str],
    /// Built-in functions and objects.
    pub builtins: &'static [&'static str],
}

impl WordTable {
    /// A table with every bucket empty: all words classify as `Name`.
    pub const EMPTY: WordTable = WordTable {
        booleans: &[],
        constants: &[],
        declarations: &[],
        namespaces: &[],
        types: &[],
        reserved: &[],
        pseudos: &[],
        word_operators: &[],
        keywords: &[],
        builtins: &[],
    };

    /// Classify an identifier against the table.
    #[must_use]
    pub fn classify(&self, word: &str) -> TokenCategory {
        if contains(self.booleans, word) {
            return TokenCategory::LiteralBoolean;
        }
        if contains(self.constants, word) {
            return TokenCategory::KeywordConstant;
        }
        if contains(self.declarations, word) {
            return TokenCategory::KeywordDeclaration;
        }
        if contains(self.namespaces, word) {
            return TokenCategory::KeywordNamespace;
        }
        if contains(self.types, word) {
            return TokenCategory::KeywordType;
        }
        if contains(self.reserved, word) {
            return TokenCategory::KeywordReserved;
        }
        if contains(self.pseudos, word) {
            return TokenCategory::NameBuiltinPseudo;
        }
        if contains(self.word_operators, word) {
            return TokenCategory::OperatorWord;
        }
        if contains(self.keywords, word) {
            return TokenCategory::Keyword;
        }
        if contains(self.builtins, word) {
            return TokenCategory::NameBuiltin;
        }
        TokenCategory::Name
    }
}

#[inline]
fn contains(table: &[&str], word: &str) -> bool {
    !table.is_empty() && table.binary_search(&word).is_ok()
}

/// Scan an identifier starting at the current position.
///
/// The first byte must already be a valid start byte (checked by the
/// caller's dispatch). `allow_dollar` admits `$` as a continuation byte.
pub fn scan_identifier<'a>(cur: &mut Cursor<'a>, allow_dollar: bool) -> &'a str {
    let start = cur.pos();
    cur.advance();
    if allow_dollar {
        cur.eat_while(|b| is_ident_continue(b) || b == b'$');
    } else {
        cur.eat_while(is_ident_continue);
    }
    cur.slice_from(start)
}

// ─── Numeric literals ────────────────────────────────────────────────

/// Per-language numeric literal rules.
#[derive(Debug, Clone, Copy)]
pub struct NumberSyntax {
    /// Allow `_` separators between digits.
    pub underscores: bool,
    /// Recognize `0x` / `0X` hex literals.
    pub hex: bool,
    /// Recognize `0o` / `0O` octal literals.
    pub octal: bool,
    /// Recognize `0b` / `0B` binary literals.
    pub binary: bool,
    /// Recognize `.` fractions and `e`/`E` exponents.
    pub float: bool,
    /// Suffixes consumed after the digits (`n` for BigInt, `u32`, `f64`).
    /// Matched greedily, longest first; must be sorted by descending
    /// length by the language table.
    pub suffixes: &'static [&'static str],
}

impl NumberSyntax {
    /// C-like default: hex, binary, float, no underscores, no suffixes.
    pub const C: NumberSyntax = NumberSyntax {
        underscores: false,
        hex: true,
        octal: false,
        binary: false,
        float: true,
        suffixes: &[],
    };
}

/// Scan a numeric literal. The current byte must be an ASCII digit.
///
/// Classification follows the literal shape: base prefixes win, then a
/// fraction or exponent makes a float, otherwise an integer. A base
/// prefix with no digits after it is not a literal: `0x` emits `0` as an
/// integer and the scan resumes from the `x` (which then reads as an
/// identifier start).
pub fn scan_number<'a>(cur: &mut Cursor<'a>, syntax: &NumberSyntax) -> Piece<'a> {
    let start = cur.pos();
    let first = cur.current();
    cur.advance();

    if first == b'0' {
        let marker = cur.current();
        let (wanted, category): (fn(u8) -> bool, _) = match marker {
            b'x' | b'X' if syntax.hex => (|b: u8| b.is_ascii_hexdigit(), TokenCategory::NumberHex),
            b'o' | b'O' if syntax.octal => {
                (|b: u8| (b'0'..=b'7').contains(&b), TokenCategory::NumberOct)
            }
            b'b' | b'B' if syntax.binary => (|b: u8| b == b'0' || b == b'1', TokenCategory::NumberBin),
            _ => (|_| false, TokenCategory::NumberInteger),
        };
        if category != TokenCategory::NumberInteger {
            // Probe: the prefix only counts if at least one digit follows.
            if wanted(cur.peek()) || (syntax.underscores && cur.peek() == b'_') {
                cur.advance(); // consume the base marker
                let underscores = syntax.underscores;
                cur.eat_while(|b| wanted(b) || (underscores && b == b'_'));
                return Piece::new(category, cur.slice_from(start));
            }
            // `0x` with no digits: emit the `0` alone.
            return Piece::new(TokenCategory::NumberInteger, cur.slice_from(start));
        }
    }

    eat_digits(cur, syntax.underscores);

    let mut is_float = false;
    if syntax.float {
        // Fraction: a dot counts only when a digit follows (`1..2` is a
        // range in several languages, `1.` alone stays an integer + dot).
        if cur.current() == b'.' && cur.peek().is_ascii_digit() {
            is_float = true;
            cur.advance();
            eat_digits(cur, syntax.underscores);
        }
        // Exponent: `e`/`E`, optional sign, at least one digit.
        if matches!(cur.current(), b'e' | b'E') {
            let sign_len: u32 = if matches!(cur.peek(), b'+' | b'-') { 1 } else { 0 };
            let digit = if sign_len == 0 { cur.peek() } else { cur.peek2() };
            if digit.is_ascii_digit() {
                is_float = true;
                cur.advance_n(1 + sign_len);
                eat_digits(cur, syntax.underscores);
            }
        }
    }

    for suffix in syntax.suffixes {
        if cur.at(suffix.as_bytes()) {
            let after = suffix.len() as u32;
            // Suffix must not continue into a longer identifier.
            let next = {
                let mut probe = *cur;
                probe.advance_n(after);
                probe.current()
            };
            if !is_ident_continue(next) {
                cur.advance_n(after);
                break;
            }
        }
    }

    let category = if is_float {
        TokenCategory::NumberFloat
    } else {
        TokenCategory::NumberInteger
    };
    Piece::new(category, cur.slice_from(start))
}

#[inline]
fn eat_digits(cur: &mut Cursor<'_>, underscores: bool) {
    if underscores {
        cur.eat_while(|b| b.is_ascii_digit() || b == b'_');
    } else {
        cur.eat_while(|b| b.is_ascii_digit());
    }
}

// ─── Quoted strings ──────────────────────────────────────────────────

/// Scan a quoted string. The current byte must be the opening quote.
///
/// Backslash escapes are skipped wholesale (the escape and the following
/// byte). A single-line string that hits a line break or end-of-input
/// before its closing quote is unterminated: the scanned head is emitted
/// as [`Error`](TokenCategory::Error). Multiline strings consume line
/// breaks and emit whatever was scanned under `category` even when the
/// closing quote never arrives.
pub fn scan_quoted<'a>(
    cur: &mut Cursor<'a>,
    quote: u8,
    category: TokenCategory,
    multiline: bool,
) -> Piece<'a> {
    let start = cur.pos();
    cur.advance(); // opening quote
    loop {
        match cur.skip_to_string_delim(quote) {
            b if b == quote => {
                cur.advance();
                return Piece::new(category, cur.slice_from(start));
            }
            b'\\' => {
                cur.advance();
                if !cur.is_eof() {
                    cur.advance_char();
                }
            }
            b'\n' | b'\r' => {
                if multiline {
                    cur.advance();
                } else {
                    return Piece::new(TokenCategory::Error, cur.slice_from(start));
                }
            }
            _ => {
                // EOF
                let category = if multiline { category } else { TokenCategory::Error };
                return Piece::new(category, cur.slice_from(start));
            }
        }
    }
}

/// Scan a delimiter-bracketed raw string with no escapes (Go backtick
/// strings). Unterminated raw strings run to end-of-input and keep the
/// string category (they are multiline by nature).
pub fn scan_raw<'a>(cur: &mut Cursor<'a>, delim: u8, category: TokenCategory) -> Piece<'a> {
    let start = cur.pos();
    cur.advance();
    cur.eat_until_byte(delim);
    if !cur.is_eof() {
        cur.advance();
    }
    Piece::new(category, cur.slice_from(start))
}

/// Scan a triple-quoted string (`"""…"""` / `'''…'''`). The cursor must
/// be at the first quote; the caller has verified all three are present.
///
/// Escapes are skipped; the body may span lines; an unterminated literal
/// runs to end-of-input and keeps `category`.
pub fn scan_triple<'a>(cur: &mut Cursor<'a>, quote: u8, category: TokenCategory) -> Piece<'a> {
    let start = cur.pos();
    cur.advance_n(3);
    let closer = [quote, quote, quote];
    loop {
        cur.eat_until_byte(quote);
        if cur.is_eof() {
            return Piece::new(category, cur.slice_from(start));
        }
        if cur.at(&closer) {
            cur.advance_n(3);
            return Piece::new(category, cur.slice_from(start));
        }
        cur.advance();
    }
}

// ─── Comments ────────────────────────────────────────────────────────

/// Scan a line comment from its marker to the end of line (exclusive:
/// the `\n` is left for the whitespace scanner). The `\r` of a CRLF stays
/// inside the comment text; line accounting keys on `\n` alone.
pub fn scan_line_comment<'a>(cur: &mut Cursor<'a>, category: TokenCategory) -> Piece<'a> {
    let start = cur.pos();
    cur.eat_until_newline_or_eof();
    Piece::new(category, cur.slice_from(start))
}

/// Scan a block comment. The cursor must be at the opening marker, which
/// is consumed along with everything up to and including `close`. An
/// unterminated comment consumes to end-of-input and still emits as one
/// piece of `category` (round-trip is preserved; no error).
pub fn scan_block_comment<'a>(
    cur: &mut Cursor<'a>,
    open_len: u32,
    close: &[u8],
    category: TokenCategory,
) -> Piece<'a> {
    let start = cur.pos();
    cur.advance_n(open_len);
    let first = close[0];
    loop {
        cur.eat_until_byte(first);
        if cur.is_eof() {
            return Piece::new(category, cur.slice_from(start));
        }
        if cur.at(close) {
            cur.advance_n(close.len() as u32);
            return Piece::new(category, cur.slice_from(start));
        }
        cur.advance();
    }
}

/// Scan a nesting block comment (`/* /* */ */`). Same contract as
/// [`scan_block_comment`], with balanced open/close tracking.
pub fn scan_nested_comment<'a>(
    cur: &mut Cursor<'a>,
    open: &[u8],
    close: &[u8],
    category: TokenCategory,
) -> Piece<'a> {
    let start = cur.pos();
    cur.advance_n(open.len() as u32);
    let mut depth: u32 = 1;
    while depth > 0 && !cur.is_eof() {
        if cur.at(close) {
            depth -= 1;
            cur.advance_n(close.len() as u32);
        } else if cur.at(open) {
            depth += 1;
            cur.advance_n(open.len() as u32);
        } else {
            cur.advance_char();
        }
    }
    Piece::new(category, cur.slice_from(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(source: &str) -> Cursor<'_> {
        Cursor::new(source)
    }

    // === Character classes ===

    #[test]
    fn ident_tables() {
        assert!(is_ident_start(b'a'));
        assert!(is_ident_start(b'Z'));
        assert!(is_ident_start(b'_'));
        assert!(!is_ident_start(b'0'));
        assert!(!is_ident_start(b'$'));
        assert!(is_ident_continue(b'0'));
        assert!(!is_ident_continue(b'-'));
        assert!(!is_ident_continue(0));
    }

    // === WordTable ===

    const TABLE: WordTable = WordTable {
        booleans: &["false", "true"],
        constants: &["null"],
        declarations: &["fn", "let"],
        namespaces: &["import"],
        types: &["int"],
        reserved: &["goto"],
        pseudos: &["self"],
        word_operators: &["in"],
        keywords: &["if", "return"],
        builtins: &["print"],
    };

    #[test]
    fn classify_hits_each_bucket() {
        assert_eq!(TABLE.classify("true"), TokenCategory::LiteralBoolean);
        assert_eq!(TABLE.classify("null"), TokenCategory::KeywordConstant);
        assert_eq!(TABLE.classify("fn"), TokenCategory::KeywordDeclaration);
        assert_eq!(TABLE.classify("import"), TokenCategory::KeywordNamespace);
        assert_eq!(TABLE.classify("int"), TokenCategory::KeywordType);
        assert_eq!(TABLE.classify("goto"), TokenCategory::KeywordReserved);
        assert_eq!(TABLE.classify("self"), TokenCategory::NameBuiltinPseudo);
        assert_eq!(TABLE.classify("in"), TokenCategory::OperatorWord);
        assert_eq!(TABLE.classify("if"), TokenCategory::Keyword);
        assert_eq!(TABLE.classify("print"), TokenCategory::NameBuiltin);
        assert_eq!(TABLE.classify("banana"), TokenCategory::Name);
    }

    #[test]
    fn empty_table_classifies_everything_as_name() {
        assert_eq!(WordTable::EMPTY.classify("if"), TokenCategory::Name);
    }

    // === scan_identifier ===

    #[test]
    fn identifier_longest_run() {
        let mut cur = cursor("foo_bar42 rest");
        assert_eq!(scan_identifier(&mut cur, false), "foo_bar42");
        assert_eq!(cur.current(), b' ');
    }

    #[test]
    fn identifier_dollar_only_when_allowed() {
        let mut cur = cursor("a$b");
        assert_eq!(scan_identifier(&mut cur, false), "a");

        let mut cur = cursor("a$b");
        assert_eq!(scan_identifier(&mut cur, true), "a$b");
    }

    // === scan_number ===

    const RUSTY: NumberSyntax = NumberSyntax {
        underscores: true,
        hex: true,
        octal: true,
        binary: true,
        float: true,
        suffixes: &["u32", "f64", "n"],
    };

    #[test]
    fn number_decimal_integer() {
        let mut cur = cursor("42 ");
        let p = scan_number(&mut cur, &NumberSyntax::C);
        assert_eq!((p.category, p.text), (TokenCategory::NumberInteger, "42"));
    }

    #[test]
    fn number_float_fraction_and_exponent() {
        let mut cur = cursor("3.14");
        let p = scan_number(&mut cur, &NumberSyntax::C);
        assert_eq!((p.category, p.text), (TokenCategory::NumberFloat, "3.14"));

        let mut cur = cursor("1e10");
        let p = scan_number(&mut cur, &NumberSyntax::C);
        assert_eq!((p.category, p.text), (TokenCategory::NumberFloat, "1e10"));

        let mut cur = cursor("2.5e-3");
        let p = scan_number(&mut cur, &NumberSyntax::C);
        assert_eq!((p.category, p.text), (TokenCategory::NumberFloat, "2.5e-3"));
    }

    #[test]
    fn number_bases() {
        let mut cur = cursor("0xFF");
        let p = scan_number(&mut cur, &RUSTY);
        assert_eq!((p.category, p.text), (TokenCategory::NumberHex, "0xFF"));

        let mut cur = cursor("0o777");
        let p = scan_number(&mut cur, &RUSTY);
        assert_eq!((p.category, p.text), (TokenCategory::NumberOct, "0o777"));

        let mut cur = cursor("0b1010");
        let p = scan_number(&mut cur, &RUSTY);
        assert_eq!((p.category, p.text), (TokenCategory::NumberBin, "0b1010"));
    }

    #[test]
    fn number_bare_prefix_emits_zero_only() {
        let mut cur = cursor("0xray");
        let p = scan_number(&mut cur, &RUSTY);
        assert_eq!((p.category, p.text), (TokenCategory::NumberInteger, "0"));
        // Scanning resumes at the `x`, which reads as an identifier.
        assert_eq!(cur.current(), b'x');
    }

    #[test]
    fn number_underscore_separators() {
        let mut cur = cursor("1_000_000");
        let p = scan_number(&mut cur, &RUSTY);
        assert_eq!(p.text, "1_000_000");
        assert_eq!(p.category, TokenCategory::NumberInteger);
    }

    #[test]
    fn number_suffix_consumed_when_terminal() {
        let mut cur = cursor("42u32 ");
        let p = scan_number(&mut cur, &RUSTY);
        assert_eq!(p.text, "42u32");

        // Suffix followed by more identifier bytes is not a suffix.
        let mut cur = cursor("42u32x");
        let p = scan_number(&mut cur, &RUSTY);
        assert_eq!(p.text, "42");
    }

    #[test]
    fn number_dot_dot_is_not_a_fraction() {
        let mut cur = cursor("1..2");
        let p = scan_number(&mut cur, &RUSTY);
        assert_eq!((p.category, p.text), (TokenCategory::NumberInteger, "1"));
        assert_eq!(cur.current(), b'.');
    }

    // === scan_quoted ===

    #[test]
    fn quoted_simple() {
        let mut cur = cursor("\"hello\" rest");
        let p = scan_quoted(&mut cur, b'"', TokenCategory::StringDouble, false);
        assert_eq!((p.category, p.text), (TokenCategory::StringDouble, "\"hello\""));
    }

    #[test]
    fn quoted_with_escapes() {
        let mut cur = cursor(r#""a\"b""#);
        let p = scan_quoted(&mut cur, b'"', TokenCategory::String, false);
        assert_eq!(p.text, r#""a\"b""#);
        assert_eq!(p.category, TokenCategory::String);
    }

    #[test]
    fn quoted_unterminated_at_newline_is_error() {
        let mut cur = cursor("\"abc\nrest");
        let p = scan_quoted(&mut cur, b'"', TokenCategory::String, false);
        assert_eq!((p.category, p.text), (TokenCategory::Error, "\"abc"));
        assert_eq!(cur.current(), b'\n');
    }

    #[test]
    fn quoted_unterminated_at_eof_is_error() {
        let mut cur = cursor("\"abc");
        let p = scan_quoted(&mut cur, b'"', TokenCategory::String, false);
        assert_eq!((p.category, p.text), (TokenCategory::Error, "\"abc"));
    }

    #[test]
    fn quoted_multiline_consumes_breaks() {
        let mut cur = cursor("`a\nb`");
        let p = scan_quoted(&mut cur, b'`', TokenCategory::StringBacktick, true);
        assert_eq!(p.text, "`a\nb`");
        assert_eq!(p.category, TokenCategory::StringBacktick);
    }

    #[test]
    fn quoted_escape_of_multibyte_char() {
        let mut cur = cursor("\"\\λ\"");
        let p = scan_quoted(&mut cur, b'"', TokenCategory::String, false);
        assert_eq!(p.text, "\"\\λ\"");
    }

    // === scan_raw / scan_triple ===

    #[test]
    fn raw_backtick_no_escapes() {
        let mut cur = cursor("`a\\nb` rest");
        let p = scan_raw(&mut cur, b'`', TokenCategory::StringBacktick);
        assert_eq!(p.text, "`a\\nb`");
    }

    #[test]
    fn raw_unterminated_runs_to_eof() {
        let mut cur = cursor("`abc");
        let p = scan_raw(&mut cur, b'`', TokenCategory::StringBacktick);
        assert_eq!(p.text, "`abc");
        assert_eq!(p.category, TokenCategory::StringBacktick);
    }

    #[test]
    fn triple_quoted_spans_lines() {
        let mut cur = cursor("\"\"\"a\nb\"\"\" rest");
        let p = scan_triple(&mut cur, b'"', TokenCategory::StringDoc);
        assert_eq!(p.text, "\"\"\"a\nb\"\"\"");
    }

    #[test]
    fn triple_quoted_skips_lone_quotes() {
        let mut cur = cursor("'''it''s fine'''");
        let p = scan_triple(&mut cur, b'\'', TokenCategory::StringDoc);
        assert_eq!(p.text, "'''it''s fine'''");
    }

    #[test]
    fn triple_unterminated_runs_to_eof() {
        let mut cur = cursor("\"\"\"abc");
        let p = scan_triple(&mut cur, b'"', TokenCategory::StringDoc);
        assert_eq!(p.text, "\"\"\"abc");
        assert_eq!(p.category, TokenCategory::StringDoc);
    }

    // === Comments ===

    #[test]
    fn line_comment_stops_before_newline() {
        let mut cur = cursor("// hi\nrest");
        let p = scan_line_comment(&mut cur, TokenCategory::CommentSingle);
        assert_eq!(p.text, "// hi");
        assert_eq!(cur.current(), b'\n');
    }

    #[test]
    fn line_comment_keeps_cr_of_crlf() {
        let mut cur = cursor("// hi\r\nrest");
        let p = scan_line_comment(&mut cur, TokenCategory::CommentSingle);
        assert_eq!(p.text, "// hi\r");
        assert_eq!(cur.current(), b'\n');
    }

    #[test]
    fn line_comment_at_eof() {
        let mut cur = cursor("// tail");
        let p = scan_line_comment(&mut cur, TokenCategory::CommentSingle);
        assert_eq!(p.text, "// tail");
        assert!(cur.is_eof());
    }

    #[test]
    fn block_comment_consumes_closer() {
        let mut cur = cursor("/* hi */ rest");
        let p = scan_block_comment(&mut cur, 2, b"*/", TokenCategory::CommentMultiline);
        assert_eq!(p.text, "/* hi */");
        assert_eq!(cur.current(), b' ');
    }

    #[test]
    fn block_comment_star_runs_stay_linear() {
        let mut cur = cursor("/*****/ x");
        let p = scan_block_comment(&mut cur, 2, b"*/", TokenCategory::CommentMultiline);
        assert_eq!(p.text, "/*****/");
    }

    #[test]
    fn block_comment_unterminated_covers_rest() {
        let mut cur = cursor("/* incomplete");
        let p = scan_block_comment(&mut cur, 2, b"*/", TokenCategory::CommentMultiline);
        assert_eq!(p.text, "/* incomplete");
        assert_eq!(p.category, TokenCategory::CommentMultiline);
        assert!(cur.is_eof());
    }

    #[test]
    fn nested_comment_balances() {
        let mut cur = cursor("/* a /* b */ c */ rest");
        let p = scan_nested_comment(&mut cur, b"/*", b"*/", TokenCategory::CommentMultiline);
        assert_eq!(p.text, "/* a /* b */ c */");
    }

    #[test]
    fn nested_comment_unterminated() {
        let mut cur = cursor("/* a /* b */");
        let p = scan_nested_comment(&mut cur, b"/*", b"*/", TokenCategory::CommentMultiline);
        assert_eq!(p.text, "/* a /* b */");
    }
}
