//! Token model: the category taxonomy, its tag and role tables, and the
//! token value types.
//!
//! `TokenCategory` is the closed set of lexical classifications every
//! scanner emits. Categories map to three fixed tables:
//!
//! - [`short_tag()`](TokenCategory::short_tag) — the compatibility CSS
//!   class suffix (`k`, `nf`, `mi`, …) understood by existing themes;
//! - [`long_tag()`](TokenCategory::long_tag) — the semantic CSS class
//!   (`syntax-function`, `syntax-string`, …), derived through the role;
//! - [`role()`](TokenCategory::role) — the semantic [`Role`] consumed by
//!   color palettes. Many categories share one role; the role table is
//!   total.
//!
//! # Discriminant Layout
//!
//! Variants are organized into semantic ranges with gaps for future
//! expansion:
//!
//! | Range   | Category group |
//! |---------|----------------|
//! | 0-15    | Special (text, whitespace, error) |
//! | 16-31   | Keywords |
//! | 32-63   | Names |
//! | 64-95   | Literals & Strings |
//! | 96-111  | Numbers |
//! | 112-119 | Operators |
//! | 120-127 | Punctuation |
//! | 128-143 | Comments |
//! | 144-159 | Generic (markup / diff) |

/// Lexical classification of a token.
///
/// # Representation
///
/// `#[repr(u8)]` keeps each category a single byte, enabling compact
/// tokens and direct table indexing by discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenCategory {
    // === Special (0-15) ===
    /// Unclassified text.
    Text = 0,
    /// Horizontal whitespace run, or a single newline.
    Whitespace = 1,
    /// A single code point the scanner could not classify.
    Error = 2,
    /// Catch-all for constructs outside the taxonomy.
    Other = 3,

    // === Keywords (16-31) ===
    /// Plain keyword (`if`, `return`, `while`).
    Keyword = 16,
    /// Constant-valued keyword (`true`, `null`, `None`).
    KeywordConstant = 17,
    /// Declaration keyword (`fn`, `def`, `let`, `class`).
    KeywordDeclaration = 18,
    /// Namespace / import keyword (`import`, `use`, `package`).
    KeywordNamespace = 19,
    /// Pseudo keyword (`self`-like words that read as keywords).
    KeywordPseudo = 20,
    /// Reserved-but-unused keyword.
    KeywordReserved = 21,
    /// Built-in type keyword (`int`, `u32`, `bool`).
    KeywordType = 22,

    // === Names (32-63) ===
    /// Plain identifier.
    Name = 32,
    /// Attribute name (HTML attributes, CSS properties).
    NameAttribute = 33,
    /// Built-in function or object (`print`, `console`).
    NameBuiltin = 34,
    /// Built-in pseudo identifier (`self`, `this`, `cls`).
    NameBuiltinPseudo = 35,
    /// Class name at its declaration site.
    NameClass = 36,
    /// Constant identifier (`UPPER_CASE` conventions).
    NameConstant = 37,
    /// Decorator or annotation (`@property`, `@Override`).
    NameDecorator = 38,
    /// Entity (`&amp;`-style markup entities).
    NameEntity = 39,
    /// Exception name.
    NameException = 40,
    /// Function name at its declaration site.
    NameFunction = 41,
    /// Dunder-style magic function name.
    NameFunctionMagic = 42,
    /// Label (link labels, goto labels).
    NameLabel = 43,
    /// Namespace segment in an import path.
    NameNamespace = 44,
    /// Identifier outside the main namespace.
    NameOther = 45,
    /// Property name.
    NameProperty = 46,
    /// Markup tag name.
    NameTag = 47,
    /// Variable name.
    NameVariable = 48,
    /// Class-scoped variable.
    NameVariableClass = 49,
    /// Global variable.
    NameVariableGlobal = 50,
    /// Instance variable.
    NameVariableInstance = 51,
    /// Magic variable (`__name__`).
    NameVariableMagic = 52,

    // === Literals & Strings (64-95) ===
    /// Generic literal.
    Literal = 64,
    /// Date literal.
    LiteralDate = 65,
    /// Boolean literal. Shares the compatibility tag with
    /// [`KeywordConstant`] (external themes know no boolean class) but
    /// carries its own role.
    LiteralBoolean = 66,
    /// Generic string literal.
    String = 68,
    /// String affix (`r`, `b`, `f` prefixes).
    StringAffix = 69,
    /// Backtick string.
    StringBacktick = 70,
    /// Character literal.
    StringChar = 71,
    /// String delimiter emitted as its own token.
    StringDelimiter = 72,
    /// Documentation string.
    StringDoc = 73,
    /// Double-quoted string.
    StringDouble = 74,
    /// Escape sequence inside a string.
    StringEscape = 75,
    /// Heredoc body.
    StringHeredoc = 76,
    /// Interpolation delimiter inside a string (`${`, `}`).
    StringInterpol = 77,
    /// Other string form.
    StringOther = 78,
    /// Regex literal.
    StringRegex = 79,
    /// Single-quoted string.
    StringSingle = 80,
    /// Symbol literal (`:name`).
    StringSymbol = 81,

    // === Numbers (96-111) ===
    /// Generic number.
    Number = 96,
    /// Binary integer (`0b1010`).
    NumberBin = 97,
    /// Floating-point literal (fraction or exponent present).
    NumberFloat = 98,
    /// Hexadecimal integer (`0xFF`).
    NumberHex = 99,
    /// Decimal integer.
    NumberInteger = 100,
    /// Long integer (suffix forms).
    NumberIntegerLong = 101,
    /// Octal integer (`0o777`).
    NumberOct = 102,

    // === Operators (112-119) ===
    /// Symbolic operator (`+`, `=>`, `&&`).
    Operator = 112,
    /// Word operator (`and`, `not`, `in`).
    OperatorWord = 113,

    // === Punctuation (120-127) ===
    /// Punctuation (`(`, `]`, `,`, `;`).
    Punctuation = 120,
    /// Marker punctuation (list bullets, rules).
    PunctuationMarker = 121,

    // === Comments (128-143) ===
    /// Generic comment.
    Comment = 128,
    /// Hashbang line (`#!/usr/bin/env …`).
    CommentHashbang = 129,
    /// Block comment (may span lines).
    CommentMultiline = 130,
    /// Preprocessor directive (`#include`, `<!DOCTYPE`).
    CommentPreproc = 131,
    /// Preprocessor file argument (`<stdio.h>`).
    CommentPreprocFile = 132,
    /// Line comment.
    CommentSingle = 133,
    /// Special comment (doc comments).
    CommentSpecial = 134,

    // === Generic markup / diff (144-159) ===
    /// Generic formatted run.
    Generic = 144,
    /// Deleted line (diff).
    GenericDeleted = 145,
    /// Emphasized run.
    GenericEmph = 146,
    /// Error output run.
    GenericError = 147,
    /// Heading.
    GenericHeading = 148,
    /// Inserted line (diff).
    GenericInserted = 149,
    /// Program output run (blockquotes).
    GenericOutput = 150,
    /// Prompt run.
    GenericPrompt = 151,
    /// Strong (bold) run.
    GenericStrong = 152,
    /// Subheading.
    GenericSubheading = 153,
    /// Traceback run.
    GenericTraceback = 154,
}

/// Semantic role shared by several categories.
///
/// Roles answer *why* a color, not *which* color: palettes define colors
/// for ~25 roles instead of ~75 categories, so categories can grow without
/// touching themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Role {
    /// Control-flow keywords.
    ControlFlow,
    /// Declaration keywords.
    Declaration,
    /// Import / namespace keywords and preprocessor directives.
    Import,
    /// String data.
    Str,
    /// Numeric data.
    Number,
    /// Boolean literals.
    Boolean,
    /// Type names.
    Type,
    /// Function names and builtins.
    Function,
    /// Variable identifiers.
    Variable,
    /// Constant identifiers.
    Constant,
    /// Comments.
    Comment,
    /// Documentation comments and docstrings.
    Docstring,
    /// Error feedback.
    Error,
    /// Warning feedback.
    Warning,
    /// Inserted content (diff).
    Added,
    /// Removed content (diff).
    Removed,
    /// Plain text (unstyled).
    Text,
    /// De-emphasized content.
    Muted,
    /// Punctuation.
    Punctuation,
    /// Operators.
    Operator,
    /// Attributes, properties, decorators.
    Attribute,
    /// Namespaces.
    Namespace,
    /// Markup tags and headings.
    Tag,
    /// Regex literals.
    Regex,
    /// Escape sequences and interpolation markers.
    Escape,
}

impl Role {
    /// Semantic CSS class for this role, or `""` for unstyled roles.
    #[must_use]
    pub const fn semantic_class(self) -> &'static str {
        match self {
            Role::ControlFlow => "syntax-control",
            Role::Declaration => "syntax-declaration",
            Role::Import => "syntax-import",
            Role::Str => "syntax-string",
            Role::Number => "syntax-number",
            Role::Boolean => "syntax-boolean",
            Role::Type => "syntax-type",
            Role::Function => "syntax-function",
            Role::Variable => "syntax-variable",
            Role::Constant => "syntax-constant",
            Role::Comment => "syntax-comment",
            Role::Docstring => "syntax-docstring",
            Role::Error => "syntax-error",
            Role::Warning => "syntax-warning",
            Role::Added => "syntax-added",
            Role::Removed => "syntax-removed",
            Role::Text => "",
            Role::Muted => "syntax-muted",
            Role::Punctuation => "syntax-punctuation",
            Role::Operator => "syntax-operator",
            Role::Attribute => "syntax-attribute",
            Role::Namespace => "syntax-namespace",
            Role::Tag => "syntax-tag",
            Role::Regex => "syntax-regex",
            Role::Escape => "syntax-escape",
        }
    }
}

impl TokenCategory {
    /// Every category, in discriminant order.
    ///
    /// Used to precompute per-category tables (span templates, ANSI
    /// escapes) at formatter construction.
    pub const ALL: &'static [TokenCategory] = &[
        TokenCategory::Text,
        TokenCategory::Whitespace,
        TokenCategory::Error,
        TokenCategory::Other,
        TokenCategory::Keyword,
        TokenCategory::KeywordConstant,
        TokenCategory::KeywordDeclaration,
        TokenCategory::KeywordNamespace,
        TokenCategory::KeywordPseudo,
        TokenCategory::KeywordReserved,
        TokenCategory::KeywordType,
        TokenCategory::Name,
        TokenCategory::NameAttribute,
        TokenCategory::NameBuiltin,
        TokenCategory::NameBuiltinPseudo,
        TokenCategory::NameClass,
        TokenCategory::NameConstant,
        TokenCategory::NameDecorator,
        TokenCategory::NameEntity,
        TokenCategory::NameException,
        TokenCategory::NameFunction,
        TokenCategory::NameFunctionMagic,
        TokenCategory::NameLabel,
        TokenCategory::NameNamespace,
        TokenCategory::NameOther,
        TokenCategory::NameProperty,
        TokenCategory::NameTag,
        TokenCategory::NameVariable,
        TokenCategory::NameVariableClass,
        TokenCategory::NameVariableGlobal,
        TokenCategory::NameVariableInstance,
        TokenCategory::NameVariableMagic,
        TokenCategory::Literal,
        TokenCategory::LiteralDate,
        TokenCategory::LiteralBoolean,
        TokenCategory::String,
        TokenCategory::StringAffix,
        TokenCategory::StringBacktick,
        TokenCategory::StringChar,
        TokenCategory::StringDelimiter,
        TokenCategory::StringDoc,
        TokenCategory::StringDouble,
        TokenCategory::StringEscape,
        TokenCategory::StringHeredoc,
        TokenCategory::StringInterpol,
        TokenCategory::StringOther,
        TokenCategory::StringRegex,
        TokenCategory::StringSingle,
        TokenCategory::StringSymbol,
        TokenCategory::Number,
        TokenCategory::NumberBin,
        TokenCategory::NumberFloat,
        TokenCategory::NumberHex,
        TokenCategory::NumberInteger,
        TokenCategory::NumberIntegerLong,
        TokenCategory::NumberOct,
        TokenCategory::Operator,
        TokenCategory::OperatorWord,
        TokenCategory::Punctuation,
        TokenCategory::PunctuationMarker,
        TokenCategory::Comment,
        TokenCategory::CommentHashbang,
        TokenCategory::CommentMultiline,
        TokenCategory::CommentPreproc,
        TokenCategory::CommentPreprocFile,
        TokenCategory::CommentSingle,
        TokenCategory::CommentSpecial,
        TokenCategory::Generic,
        TokenCategory::GenericDeleted,
        TokenCategory::GenericEmph,
        TokenCategory::GenericError,
        TokenCategory::GenericHeading,
        TokenCategory::GenericInserted,
        TokenCategory::GenericOutput,
        TokenCategory::GenericPrompt,
        TokenCategory::GenericStrong,
        TokenCategory::GenericSubheading,
        TokenCategory::GenericTraceback,
    ];

    /// Compatibility CSS class suffix for this category.
    ///
    /// These short tags are the de facto convention targeted by existing
    /// stylesheet themes and are part of the external contract. [`Text`]
    /// maps to the empty tag (no span is emitted for it).
    ///
    /// [`Text`]: TokenCategory::Text
    #[must_use]
    pub const fn short_tag(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "k",
            TokenCategory::KeywordConstant => "kc",
            TokenCategory::KeywordDeclaration => "kd",
            TokenCategory::KeywordNamespace => "kn",
            TokenCategory::KeywordPseudo => "kp",
            TokenCategory::KeywordReserved => "kr",
            TokenCategory::KeywordType => "kt",
            TokenCategory::Name => "n",
            TokenCategory::NameAttribute => "na",
            TokenCategory::NameBuiltin => "nb",
            TokenCategory::NameBuiltinPseudo => "bp",
            TokenCategory::NameClass => "nc",
            TokenCategory::NameConstant => "no",
            TokenCategory::NameDecorator => "nd",
            TokenCategory::NameEntity => "ni",
            TokenCategory::NameException => "ne",
            TokenCategory::NameFunction => "nf",
            TokenCategory::NameFunctionMagic => "fm",
            TokenCategory::NameLabel => "nl",
            TokenCategory::NameNamespace => "nn",
            TokenCategory::NameOther => "nx",
            TokenCategory::NameProperty => "py",
            TokenCategory::NameTag => "nt",
            TokenCategory::NameVariable => "nv",
            TokenCategory::NameVariableClass => "vc",
            TokenCategory::NameVariableGlobal => "vg",
            TokenCategory::NameVariableInstance => "vi",
            TokenCategory::NameVariableMagic => "vm",
            TokenCategory::Literal => "l",
            TokenCategory::LiteralDate => "ld",
            // Boolean literals render with the constant-keyword tag: the
            // compatibility convention has no boolean class.
            TokenCategory::LiteralBoolean => "kc",
            TokenCategory::String => "s",
            TokenCategory::StringAffix => "sa",
            TokenCategory::StringBacktick => "sb",
            TokenCategory::StringChar => "sc",
            TokenCategory::StringDelimiter => "dl",
            TokenCategory::StringDoc => "sd",
            TokenCategory::StringDouble => "s2",
            TokenCategory::StringEscape => "se",
            TokenCategory::StringHeredoc => "sh",
            TokenCategory::StringInterpol => "si",
            TokenCategory::StringOther => "sx",
            TokenCategory::StringRegex => "sr",
            TokenCategory::StringSingle => "s1",
            TokenCategory::StringSymbol => "ss",
            TokenCategory::Number => "m",
            TokenCategory::NumberBin => "mb",
            TokenCategory::NumberFloat => "mf",
            TokenCategory::NumberHex => "mh",
            TokenCategory::NumberInteger => "mi",
            TokenCategory::NumberIntegerLong => "il",
            TokenCategory::NumberOct => "mo",
            TokenCategory::Operator => "o",
            TokenCategory::OperatorWord => "ow",
            TokenCategory::Punctuation => "p",
            TokenCategory::PunctuationMarker => "pm",
            TokenCategory::Comment => "c",
            TokenCategory::CommentHashbang => "ch",
            TokenCategory::CommentMultiline => "cm",
            TokenCategory::CommentPreproc => "cp",
            TokenCategory::CommentPreprocFile => "cpf",
            TokenCategory::CommentSingle => "c1",
            TokenCategory::CommentSpecial => "cs",
            TokenCategory::Generic => "g",
            TokenCategory::GenericDeleted => "gd",
            TokenCategory::GenericEmph => "ge",
            TokenCategory::GenericError => "gr",
            TokenCategory::GenericHeading => "gh",
            TokenCategory::GenericInserted => "gi",
            TokenCategory::GenericOutput => "go",
            TokenCategory::GenericPrompt => "gp",
            TokenCategory::GenericStrong => "gs",
            TokenCategory::GenericSubheading => "gu",
            TokenCategory::GenericTraceback => "gt",
            TokenCategory::Text => "",
            TokenCategory::Whitespace => "w",
            TokenCategory::Error => "err",
            TokenCategory::Other => "x",
        }
    }

    /// Semantic role for this category. Total: every category has a role.
    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            TokenCategory::Keyword
            | TokenCategory::KeywordPseudo
            | TokenCategory::KeywordReserved
            | TokenCategory::OperatorWord => Role::ControlFlow,
            TokenCategory::KeywordDeclaration => Role::Declaration,
            TokenCategory::KeywordNamespace
            | TokenCategory::CommentPreproc
            | TokenCategory::CommentPreprocFile => Role::Import,
            TokenCategory::KeywordConstant
            | TokenCategory::NameConstant
            | TokenCategory::StringSymbol => Role::Constant,
            TokenCategory::KeywordType
            | TokenCategory::NameClass
            | TokenCategory::NameException => Role::Type,
            TokenCategory::NameBuiltin
            | TokenCategory::NameFunction
            | TokenCategory::NameFunctionMagic => Role::Function,
            TokenCategory::NameVariable
            | TokenCategory::NameVariableClass
            | TokenCategory::NameVariableGlobal
            | TokenCategory::NameVariableInstance
            | TokenCategory::NameVariableMagic
            | TokenCategory::NameBuiltinPseudo => Role::Variable,
            TokenCategory::NameAttribute
            | TokenCategory::NameDecorator
            | TokenCategory::NameProperty => Role::Attribute,
            TokenCategory::NameNamespace => Role::Namespace,
            TokenCategory::NameTag
            | TokenCategory::NameLabel
            | TokenCategory::GenericHeading
            | TokenCategory::GenericSubheading
            | TokenCategory::GenericStrong => Role::Tag,
            TokenCategory::NameEntity | TokenCategory::StringEscape | TokenCategory::StringInterpol => {
                Role::Escape
            }
            TokenCategory::String
            | TokenCategory::StringAffix
            | TokenCategory::StringBacktick
            | TokenCategory::StringChar
            | TokenCategory::StringDelimiter
            | TokenCategory::StringDouble
            | TokenCategory::StringHeredoc
            | TokenCategory::StringOther
            | TokenCategory::StringSingle
            | TokenCategory::LiteralDate => Role::Str,
            TokenCategory::StringDoc | TokenCategory::CommentSpecial => Role::Docstring,
            TokenCategory::StringRegex => Role::Regex,
            TokenCategory::Number
            | TokenCategory::NumberBin
            | TokenCategory::NumberFloat
            | TokenCategory::NumberHex
            | TokenCategory::NumberInteger
            | TokenCategory::NumberIntegerLong
            | TokenCategory::NumberOct => Role::Number,
            TokenCategory::LiteralBoolean => Role::Boolean,
            TokenCategory::Operator => Role::Operator,
            TokenCategory::Punctuation | TokenCategory::PunctuationMarker => Role::Punctuation,
            TokenCategory::Comment
            | TokenCategory::CommentHashbang
            | TokenCategory::CommentMultiline
            | TokenCategory::CommentSingle => Role::Comment,
            TokenCategory::Error | TokenCategory::GenericError | TokenCategory::GenericTraceback => {
                Role::Error
            }
            TokenCategory::GenericDeleted => Role::Removed,
            TokenCategory::GenericInserted => Role::Added,
            TokenCategory::GenericEmph
            | TokenCategory::GenericOutput
            | TokenCategory::GenericPrompt => Role::Muted,
            TokenCategory::Text
            | TokenCategory::Whitespace
            | TokenCategory::Other
            | TokenCategory::Literal
            | TokenCategory::Generic
            | TokenCategory::Name
            | TokenCategory::NameOther => Role::Text,
        }
    }

    /// Semantic CSS class for this category, or `""` for unstyled ones.
    ///
    /// Derived through the role table so that categories can grow without
    /// touching stylesheets.
    #[must_use]
    pub const fn long_tag(self) -> &'static str {
        self.role().semantic_class()
    }

    /// Returns `true` for categories rendered without a styling wrapper
    /// (plain text and whitespace).
    #[must_use]
    pub const fn is_plain(self) -> bool {
        matches!(self, TokenCategory::Text | TokenCategory::Whitespace)
    }
}

/// A classified fragment without position information.
///
/// The fast-path unit produced by the raw scanners: formatters that do not
/// need line grouping consume these directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece<'a> {
    /// What kind of fragment this is.
    pub category: TokenCategory,
    /// The fragment text, borrowed from the source.
    pub text: &'a str,
}

impl<'a> Piece<'a> {
    /// Create a new piece.
    #[inline]
    #[must_use]
    pub const fn new(category: TokenCategory, text: &'a str) -> Self {
        Self { category, text }
    }
}

/// An immutable classified token with source position.
///
/// # Invariants
///
/// - `text` is a contiguous substring of the tokenized source; joining the
///   `text` of all tokens in emission order reproduces the source exactly.
/// - `line >= 1` and `column >= 1`; both refer to the first code point of
///   `text`. Columns count code points, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// What kind of token this is.
    pub category: TokenCategory,
    /// The token text, borrowed from the source.
    pub text: &'a str,
    /// 1-based line of the token's first code point.
    pub line: u32,
    /// 1-based column (in code points) of the token's first code point.
    pub column: u32,
}

impl<'a> Token<'a> {
    /// Create a new token.
    #[inline]
    #[must_use]
    pub const fn new(category: TokenCategory, text: &'a str, line: u32, column: u32) -> Self {
        Self {
            category,
            text,
            line,
            column,
        }
    }
}

/// An owned token, used where results must outlive the tokenized source
/// (batch workers hand these across the pool boundary).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedToken {
    /// What kind of token this is.
    pub category: TokenCategory,
    /// The token text.
    pub text: String,
    /// 1-based line of the token's first code point.
    pub line: u32,
    /// 1-based column (in code points) of the token's first code point.
    pub column: u32,
}

impl From<Token<'_>> for OwnedToken {
    fn from(tok: Token<'_>) -> Self {
        Self {
            category: tok.category,
            text: tok.text.to_owned(),
            line: tok.line,
            column: tok.column,
        }
    }
}

/// Size assertions: `TokenCategory` is 1 byte; tokens stay within a few
/// machine words so token streams remain cache-friendly.
const _: () = assert!(std::mem::size_of::<TokenCategory>() == 1);
const _: () = assert!(std::mem::size_of::<Piece<'static>>() <= 24);
const _: () = assert!(std::mem::size_of::<Token<'static>>() <= 32);

#[cfg(test)]
mod tests {
    use super::*;

    // === Discriminants ===

    #[test]
    fn repr_u8_semantic_ranges() {
        // Special: 0-15
        assert_eq!(TokenCategory::Text as u8, 0);
        assert_eq!(TokenCategory::Whitespace as u8, 1);
        assert_eq!(TokenCategory::Error as u8, 2);

        // Keywords: 16-31
        assert_eq!(TokenCategory::Keyword as u8, 16);
        assert_eq!(TokenCategory::KeywordType as u8, 22);

        // Names: 32-63
        assert_eq!(TokenCategory::Name as u8, 32);
        assert_eq!(TokenCategory::NameVariableMagic as u8, 52);

        // Literals & Strings: 64-95
        assert_eq!(TokenCategory::Literal as u8, 64);
        assert_eq!(TokenCategory::StringSymbol as u8, 81);

        // Numbers: 96-111
        assert_eq!(TokenCategory::Number as u8, 96);
        assert_eq!(TokenCategory::NumberOct as u8, 102);

        // Operators / Punctuation / Comments / Generic
        assert_eq!(TokenCategory::Operator as u8, 112);
        assert_eq!(TokenCategory::Punctuation as u8, 120);
        assert_eq!(TokenCategory::Comment as u8, 128);
        assert_eq!(TokenCategory::Generic as u8, 144);
        assert_eq!(TokenCategory::GenericTraceback as u8, 154);
    }

    #[test]
    fn all_lists_every_discriminant_once() {
        let mut seen = [false; 256];
        for &cat in TokenCategory::ALL {
            let d = cat as u8 as usize;
            assert!(!seen[d], "duplicate discriminant {d}");
            seen[d] = true;
        }
        assert_eq!(TokenCategory::ALL.len(), 78);
    }

    // === Tag tables ===

    #[test]
    fn short_tags_match_compatibility_convention() {
        assert_eq!(TokenCategory::Keyword.short_tag(), "k");
        assert_eq!(TokenCategory::KeywordDeclaration.short_tag(), "kd");
        assert_eq!(TokenCategory::NameFunction.short_tag(), "nf");
        assert_eq!(TokenCategory::String.short_tag(), "s");
        assert_eq!(TokenCategory::NumberInteger.short_tag(), "mi");
        assert_eq!(TokenCategory::CommentSingle.short_tag(), "c1");
        assert_eq!(TokenCategory::Whitespace.short_tag(), "w");
        assert_eq!(TokenCategory::Error.short_tag(), "err");
        assert_eq!(TokenCategory::Text.short_tag(), "");
    }

    #[test]
    fn boolean_shares_constant_compat_tag_but_not_role() {
        assert_eq!(
            TokenCategory::LiteralBoolean.short_tag(),
            TokenCategory::KeywordConstant.short_tag()
        );
        assert_eq!(TokenCategory::LiteralBoolean.role(), Role::Boolean);
        assert_eq!(TokenCategory::KeywordConstant.role(), Role::Constant);
    }

    #[test]
    fn long_tags_follow_roles() {
        assert_eq!(TokenCategory::Keyword.long_tag(), "syntax-control");
        assert_eq!(TokenCategory::NameFunction.long_tag(), "syntax-function");
        assert_eq!(TokenCategory::StringDouble.long_tag(), "syntax-string");
        assert_eq!(TokenCategory::NumberFloat.long_tag(), "syntax-number");
        assert_eq!(TokenCategory::Text.long_tag(), "");
    }

    #[test]
    fn role_table_is_total() {
        // The compiler enforces totality of the match; this exercises the
        // table and checks that only intentionally-plain categories map to
        // the unstyled role.
        for &cat in TokenCategory::ALL {
            let role = cat.role();
            if role == Role::Text {
                assert!(
                    matches!(
                        cat,
                        TokenCategory::Text
                            | TokenCategory::Whitespace
                            | TokenCategory::Other
                            | TokenCategory::Literal
                            | TokenCategory::Generic
                            | TokenCategory::Name
                            | TokenCategory::NameOther
                    ),
                    "{cat:?} unexpectedly unstyled"
                );
            }
        }
    }

    #[test]
    fn every_category_has_a_short_tag_except_text() {
        for &cat in TokenCategory::ALL {
            if cat == TokenCategory::Text {
                assert!(cat.short_tag().is_empty());
            } else {
                assert!(!cat.short_tag().is_empty(), "{cat:?} missing short tag");
            }
        }
    }

    #[test]
    fn plain_categories() {
        assert!(TokenCategory::Text.is_plain());
        assert!(TokenCategory::Whitespace.is_plain());
        assert!(!TokenCategory::Keyword.is_plain());
        assert!(!TokenCategory::Error.is_plain());
    }

    // === Value types ===

    #[test]
    fn token_construction() {
        let tok = Token::new(TokenCategory::Keyword, "def", 1, 1);
        assert_eq!(tok.category, TokenCategory::Keyword);
        assert_eq!(tok.text, "def");
        assert_eq!(tok.line, 1);
        assert_eq!(tok.column, 1);
    }

    #[test]
    fn token_is_copy() {
        let tok = Token::new(TokenCategory::Name, "x", 1, 1);
        let tok2 = tok;
        assert_eq!(tok, tok2);
    }

    #[test]
    fn owned_token_round_trips_fields() {
        let tok = Token::new(TokenCategory::String, "\"hi\"", 3, 7);
        let owned = OwnedToken::from(tok);
        assert_eq!(owned.category, TokenCategory::String);
        assert_eq!(owned.text, "\"hi\"");
        assert_eq!(owned.line, 3);
        assert_eq!(owned.column, 7);
    }
}
