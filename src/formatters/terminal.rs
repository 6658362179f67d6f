//! ANSI terminal formatter.
//!
//! One SGR escape per token category, derived from the role table and
//! precomputed at construction. Styled tokens render as
//! `{escape}{text}{reset}`; whitespace and plain text pass through
//! verbatim, so line breaks arrive untouched. Line numbers and line
//! highlighting are not rendered by this formatter.

use crate::config::{FormatConfig, HighlightConfig};
use crate::formatters::Formatter;
use crate::token::{Piece, Role, Token, TokenCategory};

const RESET: &str = "\x1b[0m";

/// SGR color for a role, or `None` for unstyled roles.
const fn ansi_for_role(role: Role) -> Option<&'static str> {
    match role {
        Role::ControlFlow => Some("\x1b[35m"),
        Role::Declaration => Some("\x1b[36m"),
        Role::Import => Some("\x1b[35m"),
        Role::Str => Some("\x1b[32m"),
        Role::Docstring => Some("\x1b[90m"),
        Role::Number => Some("\x1b[33m"),
        Role::Boolean => Some("\x1b[33m"),
        Role::Type => Some("\x1b[36m"),
        Role::Function => Some("\x1b[34m"),
        Role::Variable => Some("\x1b[37m"),
        Role::Constant => Some("\x1b[33m"),
        Role::Comment => Some("\x1b[90m"),
        Role::Error => Some("\x1b[31m"),
        Role::Warning => Some("\x1b[33m"),
        Role::Added => Some("\x1b[32m"),
        Role::Removed => Some("\x1b[31m"),
        Role::Muted => Some("\x1b[90m"),
        Role::Punctuation => Some("\x1b[37m"),
        Role::Operator => Some("\x1b[37m"),
        Role::Attribute => Some("\x1b[36m"),
        Role::Namespace => Some("\x1b[35m"),
        Role::Tag => Some("\x1b[34m"),
        Role::Regex => Some("\x1b[32m"),
        Role::Escape => Some("\x1b[33m"),
        Role::Text => None,
    }
}

/// The `terminal` formatter (aliases: `ansi`, `term`).
pub struct TerminalFormatter {
    /// Per-discriminant SGR escape, or `None` for verbatim output.
    colors: [Option<&'static str>; 256],
}

impl TerminalFormatter {
    /// Build the formatter, precomputing the category → escape table.
    #[must_use]
    pub fn new() -> Self {
        let mut colors: [Option<&'static str>; 256] = [None; 256];
        for &cat in TokenCategory::ALL {
            if !cat.is_plain() {
                colors[cat as u8 as usize] = ansi_for_role(cat.role());
            }
        }
        Self { colors }
    }

    fn emit(&self, category: TokenCategory, text: &str, out: &mut String) {
        match self.colors[category as u8 as usize] {
            Some(color) => {
                out.push_str(color);
                out.push_str(text);
                out.push_str(RESET);
            }
            None => out.push_str(text),
        }
    }
}

impl Default for TerminalFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TerminalFormatter {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ansi", "term"]
    }

    fn format_fast_to(
        &self,
        pieces: &mut dyn Iterator<Item = Piece<'_>>,
        _format: &FormatConfig,
        out: &mut String,
    ) {
        for piece in pieces {
            self.emit(piece.category, piece.text, out);
        }
    }

    fn format_to(
        &self,
        tokens: &mut dyn Iterator<Item = Token<'_>>,
        _format: &FormatConfig,
        _highlight: &HighlightConfig,
        out: &mut String,
    ) {
        for token in tokens {
            self.emit(token.category, token.text, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast(parts: &'static [(TokenCategory, &'static str)]) -> String {
        let mut pieces = parts.iter().map(|&(category, text)| Piece { category, text });
        TerminalFormatter::new().format_string_fast(&mut pieces, &FormatConfig::default())
    }

    #[test]
    fn styled_token_is_wrapped_with_reset() {
        let out = fast(&[(TokenCategory::Keyword, "if")]);
        assert_eq!(out, "\x1b[35mif\x1b[0m");
    }

    #[test]
    fn whitespace_and_text_pass_through() {
        let out = fast(&[
            (TokenCategory::Text, "plain"),
            (TokenCategory::Whitespace, "\n  "),
        ]);
        assert_eq!(out, "plain\n  ");
    }

    #[test]
    fn strings_are_green_errors_red() {
        let out = fast(&[
            (TokenCategory::StringDouble, "\"s\""),
            (TokenCategory::Error, "?"),
        ]);
        assert!(out.contains("\x1b[32m\"s\"\x1b[0m"));
        assert!(out.contains("\x1b[31m?\x1b[0m"));
    }

    #[test]
    fn slow_path_is_verbatim_over_tokens() {
        let toks = [
            Token::new(TokenCategory::NameVariable, "x", 1, 1),
            Token::new(TokenCategory::Whitespace, "\n", 1, 2),
        ];
        let out = TerminalFormatter::new().format_string(
            &mut toks.iter().copied(),
            &FormatConfig::default(),
            &HighlightConfig::default(),
        );
        assert_eq!(out, "\x1b[37mx\x1b[0m\n");
    }
}
