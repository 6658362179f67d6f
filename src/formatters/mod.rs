//! Output formatters.
//!
//! Every formatter exposes a fast path over `(category, text)` pieces
//! and a slow, line-aware path over full tokens. Output goes into a
//! caller-supplied `String` buffer; the `format_string*` wrappers
//! allocate one. The engine picks the path (§ dispatch rule: fast iff no
//! line-level features are requested and the formatter advertises one).

mod escape;
mod html;
mod null;
mod terminal;

pub use escape::{escape_html, escape_html_into};
pub use html::HtmlFormatter;
pub use null::NullFormatter;
pub use terminal::TerminalFormatter;

use crate::config::{FormatConfig, HighlightConfig};
use crate::token::{Piece, Token};

/// An output renderer for token streams.
///
/// Implementations are immutable after construction and shared across
/// threads by the registry.
pub trait Formatter: Send + Sync {
    /// Canonical formatter name (lowercase).
    fn name(&self) -> &'static str;

    /// Alternative names resolving to this formatter.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Whether the position-free fast path is implemented. The engine
    /// only dispatches to [`format_fast_to`](Self::format_fast_to) when
    /// this returns `true`.
    fn has_fast_path(&self) -> bool {
        true
    }

    /// Render pieces without position tracking.
    fn format_fast_to(
        &self,
        pieces: &mut dyn Iterator<Item = Piece<'_>>,
        format: &FormatConfig,
        out: &mut String,
    );

    /// Render positioned tokens with line-level features.
    fn format_to(
        &self,
        tokens: &mut dyn Iterator<Item = Token<'_>>,
        format: &FormatConfig,
        highlight: &HighlightConfig,
        out: &mut String,
    );

    /// [`format_fast_to`](Self::format_fast_to) into a fresh string.
    fn format_string_fast(
        &self,
        pieces: &mut dyn Iterator<Item = Piece<'_>>,
        format: &FormatConfig,
    ) -> String {
        let mut out = String::new();
        self.format_fast_to(pieces, format, &mut out);
        out
    }

    /// [`format_to`](Self::format_to) into a fresh string.
    fn format_string(
        &self,
        tokens: &mut dyn Iterator<Item = Token<'_>>,
        format: &FormatConfig,
        highlight: &HighlightConfig,
    ) -> String {
        let mut out = String::new();
        self.format_to(tokens, format, highlight, &mut out);
        out
    }
}

/// How the registry constructs a formatter singleton.
pub struct FormatterSpec {
    /// Canonical (lowercase) formatter name.
    pub name: &'static str,
    /// Alternative names resolving to this formatter.
    pub aliases: &'static [&'static str],
    /// Constructor, invoked once on first resolution.
    pub construct: fn() -> Box<dyn Formatter>,
}

/// Construction table for every formatter, sorted by canonical name.
pub static SPECS: &[FormatterSpec] = &[
    FormatterSpec {
        name: "html",
        aliases: &[],
        construct: || Box::new(HtmlFormatter::new()),
    },
    FormatterSpec {
        name: "null",
        aliases: &[],
        construct: || Box::new(NullFormatter),
    },
    FormatterSpec {
        name: "terminal",
        aliases: &["ansi", "term"],
        construct: || Box::new(TerminalFormatter::new()),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_table_is_sorted_by_name() {
        for pair in SPECS.windows(2) {
            assert!(pair[0].name < pair[1].name);
        }
    }

    #[test]
    fn constructed_formatters_report_their_spec_name() {
        for spec in SPECS {
            let formatter = (spec.construct)();
            assert_eq!(formatter.name(), spec.name);
            assert_eq!(formatter.aliases(), spec.aliases);
        }
    }
}
