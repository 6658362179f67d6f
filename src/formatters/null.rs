//! Null formatter: the identity.
//!
//! Emits token text verbatim. Exists to expose lexer cost independent of
//! formatting and to verify the reconstruction invariant end to end:
//! `format(tokenize(x), null) == x` for every input and language.

use crate::config::{FormatConfig, HighlightConfig};
use crate::formatters::Formatter;
use crate::token::{Piece, Token};

/// The `null` formatter.
pub struct NullFormatter;

impl Formatter for NullFormatter {
    fn name(&self) -> &'static str {
        "null"
    }

    fn format_fast_to(
        &self,
        pieces: &mut dyn Iterator<Item = Piece<'_>>,
        _format: &FormatConfig,
        out: &mut String,
    ) {
        for piece in pieces {
            out.push_str(piece.text);
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
            out.push_str(token.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenCategory;

    #[test]
    fn identity_over_pieces() {
        let parts = [
            Piece::new(TokenCategory::Keyword, "fn"),
            Piece::new(TokenCategory::Whitespace, " "),
            Piece::new(TokenCategory::NameFunction, "main"),
        ];
        let out = NullFormatter
            .format_string_fast(&mut parts.iter().copied(), &FormatConfig::default());
        assert_eq!(out, "fn main");
    }

    #[test]
    fn identity_over_tokens() {
        let toks = [
            Token::new(TokenCategory::Error, "<&>", 1, 1),
            Token::new(TokenCategory::Whitespace, "\n", 1, 4),
        ];
        let out = NullFormatter.format_string(
            &mut toks.iter().copied(),
            &FormatConfig::default(),
            &HighlightConfig::default(),
        );
        assert_eq!(out, "<&>\n");
    }
}
