//! Rosettes: linear-time, multi-language syntax highlighting.
//!
//! Given a source fragment and a language name, produce a stream of
//! classified tokens and render it as HTML, ANSI terminal output, or
//! raw text. Every lexer is a hand-written byte scanner with bounded
//! lookahead and no backtracking — no regular expressions run in the
//! hot path, so tokenization is O(n) on any input and immune to
//! catastrophic backtracking.
//!
//! # Usage
//!
//! ```
//! let html = rosettes::highlight("def foo(): pass", "python").unwrap();
//! assert!(html.contains("<span class=\"syntax-declaration\">def</span>"));
//!
//! let tokens = rosettes::tokenize("x = 1", "python").unwrap();
//! let joined: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(joined, "x = 1");
//! ```
//!
//! # Guarantees
//!
//! - *Round-trip*: concatenating token texts reproduces the input
//!   exactly, for every language.
//! - *Totality*: tokenization never fails on any `&str`; unclassifiable
//!   code points surface as single-character error tokens.
//! - *Thread safety*: lexers and formatters are immutable singletons;
//!   all per-call state is local. [`highlight_many`] fans a batch out
//!   across a worker pool and returns results in input order.
//!
//! # Architecture
//!
//! Lexing is layered: raw scanners emit `(category, text)` pieces with
//! zero position tracking (the formatter fast path), and a cooking
//! adapter threads line/column accounting on top when positions are
//! needed (the line-aware slow path). The engine picks the path from
//! the requested options; output is identical either way.

mod batch;
mod config;
mod cursor;
mod engine;
mod error;
mod formatters;
mod lexer;
mod lexers;
mod registry;
mod scan;
mod token;

pub use batch::{
    highlight_many, highlight_many_with, tokenize_many, tokenize_many_with, BatchOptions,
};
pub use config::{ClassStyle, FormatConfig, HighlightConfig, LexerConfig};
pub use cursor::Cursor;
pub use engine::{highlight, highlight_with, tokenize, tokenize_with, Options};
pub use error::Error;
pub use formatters::{
    escape_html, Formatter, HtmlFormatter, NullFormatter, TerminalFormatter,
};
pub use lexer::{Lexer, Pieces, TokenStream};
pub use lexers::PlaintextLexer;
pub use registry::{
    get_formatter, get_lexer, list_formatters, list_languages, supports_formatter,
    supports_language,
};
pub use token::{OwnedToken, Piece, Role, Token, TokenCategory};
