//! Per-language scanners.
//!
//! Every module implements one state machine over the shared scanning
//! framework. The six C-family languages share a single generic machine
//! parameterized by a static [`CFamilySpec`](c_family::CFamilySpec);
//! the rest are standalone machines.
//!
//! [`SPECS`] is the registry's construction table: one row per canonical
//! language name, plus aliases.

mod c_family;
mod css;
mod html;
mod json;
mod markdown;
mod plaintext;
mod python;
mod rust;
mod shell;
mod toml;
mod yaml;

use crate::lexer::Lexer;

pub use plaintext::PlaintextLexer;

/// How the registry constructs a lexer singleton.
pub struct LexerSpec {
    /// Canonical (lowercase) language name.
    pub name: &'static str,
    /// Alternative names resolving to this language.
    pub aliases: &'static [&'static str],
    /// Constructor, invoked once on first resolution.
    pub construct: fn() -> Box<dyn Lexer>,
}

/// Construction table for every supported language, sorted by canonical
/// name.
pub static SPECS: &[LexerSpec] = &[
    LexerSpec {
        name: "c",
        aliases: &[],
        construct: || Box::new(c_family::CFamilyLexer::c()),
    },
    LexerSpec {
        name: "cpp",
        aliases: &["c++", "cxx"],
        construct: || Box::new(c_family::CFamilyLexer::cpp()),
    },
    LexerSpec {
        name: "css",
        aliases: &[],
        construct: || Box::new(css::CssLexer),
    },
    LexerSpec {
        name: "go",
        aliases: &["golang"],
        construct: || Box::new(c_family::CFamilyLexer::go()),
    },
    LexerSpec {
        name: "html",
        aliases: &["htm", "xhtml"],
        construct: || Box::new(html::HtmlLexer),
    },
    LexerSpec {
        name: "java",
        aliases: &[],
        construct: || Box::new(c_family::CFamilyLexer::java()),
    },
    LexerSpec {
        name: "javascript",
        aliases: &["js", "ecmascript"],
        construct: || Box::new(c_family::CFamilyLexer::javascript()),
    },
    LexerSpec {
        name: "json",
        aliases: &[],
        construct: || Box::new(json::JsonLexer),
    },
    LexerSpec {
        name: "markdown",
        aliases: &["md"],
        construct: || Box::new(markdown::MarkdownLexer),
    },
    LexerSpec {
        name: "plaintext",
        aliases: &["text", "plain", "txt"],
        construct: || Box::new(plaintext::PlaintextLexer),
    },
    LexerSpec {
        name: "python",
        aliases: &["py", "python3"],
        construct: || Box::new(python::PythonLexer),
    },
    LexerSpec {
        name: "rust",
        aliases: &["rs"],
        construct: || Box::new(rust::RustLexer),
    },
    LexerSpec {
        name: "shell",
        aliases: &["bash", "sh", "zsh"],
        construct: || Box::new(shell::ShellLexer),
    },
    LexerSpec {
        name: "toml",
        aliases: &[],
        construct: || Box::new(toml::TomlLexer),
    },
    LexerSpec {
        name: "typescript",
        aliases: &["ts"],
        construct: || Box::new(c_family::CFamilyLexer::typescript()),
    },
    LexerSpec {
        name: "yaml",
        aliases: &["yml"],
        construct: || Box::new(yaml::YamlLexer),
    },
];
