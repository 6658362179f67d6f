//! Frozen configuration value types.
//!
//! All configuration is plain data constructed directly with named fields.
//! Values are cheap to clone and never mutated after construction, so they
//! can be shared freely across threads.

use rustc_hash::FxHashSet;

/// CSS class naming style for HTML output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClassStyle {
    /// Readable role-derived classes (`syntax-function`, `syntax-string`).
    /// Container class defaults to `"rosettes"`.
    #[default]
    Semantic,
    /// Short compatibility classes (`nf`, `s`, `mi`) matching the de facto
    /// convention used by existing themes. Container class defaults to
    /// `"highlight"`.
    Compat,
}

impl ClassStyle {
    /// Default container class for this style.
    #[must_use]
    pub const fn default_container_class(self) -> &'static str {
        match self {
            ClassStyle::Semantic => "rosettes",
            ClassStyle::Compat => "highlight",
        }
    }
}

/// Lexer tuning knobs.
///
/// Currently empty; reserved so the tokenize signatures stay stable when
/// per-language options arrive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerConfig {}

/// Output-container configuration shared by all formatters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatConfig {
    /// Class for the container element. `None` uses the style default.
    pub container_class: Option<String>,
    /// Canonical language name, emitted as a `data-language` attribute
    /// when present.
    pub data_language: Option<String>,
    /// Class naming style for per-token spans.
    pub class_style: ClassStyle,
}

/// Line-level highlighting configuration.
///
/// When both `highlighted_lines` is empty and `show_line_numbers` is
/// false, the engine takes the fast path and this struct is never
/// consulted per token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightConfig {
    /// 1-based lines to emphasize.
    pub highlighted_lines: FxHashSet<u32>,
    /// Prefix each line with its number.
    pub show_line_numbers: bool,
    /// Class added to emphasized lines.
    pub highlighted_line_class: String,
    /// Class for line-number spans.
    pub line_number_class: String,
    /// Class wrapping every rendered line.
    pub line_class: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            highlighted_lines: FxHashSet::default(),
            show_line_numbers: false,
            highlighted_line_class: "hll".to_owned(),
            line_number_class: "lineno".to_owned(),
            line_class: "line".to_owned(),
        }
    }
}

impl HighlightConfig {
    /// Returns `true` when no line-level feature is active, i.e. the
    /// position-free fast path produces identical output.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.highlighted_lines.is_empty() && !self.show_line_numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_style_container_defaults() {
        assert_eq!(ClassStyle::Semantic.default_container_class(), "rosettes");
        assert_eq!(ClassStyle::Compat.default_container_class(), "highlight");
        assert_eq!(ClassStyle::default(), ClassStyle::Semantic);
    }

    #[test]
    fn highlight_config_defaults_take_fast_path() {
        let cfg = HighlightConfig::default();
        assert!(cfg.is_plain());
        assert_eq!(cfg.highlighted_line_class, "hll");
        assert_eq!(cfg.line_number_class, "lineno");
        assert_eq!(cfg.line_class, "line");
    }

    #[test]
    fn any_line_feature_disables_fast_path() {
        let mut cfg = HighlightConfig::default();
        cfg.highlighted_lines.insert(3);
        assert!(!cfg.is_plain());

        let cfg = HighlightConfig {
            show_line_numbers: true,
            ..HighlightConfig::default()
        };
        assert!(!cfg.is_plain());
    }
}
