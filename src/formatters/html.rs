//! HTML formatter.
//!
//! Output shape: one container `<div>` carrying the configured class and
//! a `data-language` attribute, wrapping `<pre><code>…</code></pre>`.
//! Each styled token becomes `<span class="{tag}">{escaped}</span>`;
//! whitespace and plain text are escaped without a wrapping span to keep
//! the output small.
//!
//! Span-open templates for both class styles are precomputed at
//! construction, indexed by category discriminant, so the per-token hot
//! path is a table load and three `push_str` calls.

use std::fmt::Write as _;

use crate::config::{ClassStyle, FormatConfig, HighlightConfig};
use crate::formatters::escape::escape_html_into;
use crate::formatters::Formatter;
use crate::token::{Piece, Token, TokenCategory};

const SPAN_CLOSE: &str = "</span>";

/// One span-open template per category discriminant, or `None` for
/// categories rendered without a span.
type SpanTable = Vec<Option<String>>;

fn build_span_table(style: ClassStyle) -> SpanTable {
    let mut table: SpanTable = vec![None; 256];
    for &cat in TokenCategory::ALL {
        if cat.is_plain() {
            continue;
        }
        let tag = match style {
            ClassStyle::Semantic => cat.long_tag(),
            ClassStyle::Compat => cat.short_tag(),
        };
        if !tag.is_empty() {
            table[cat as u8 as usize] = Some(format!("<span class=\"{tag}\">"));
        }
    }
    table
}

/// The `html` formatter.
pub struct HtmlFormatter {
    semantic_spans: SpanTable,
    compat_spans: SpanTable,
}

impl HtmlFormatter {
    /// Build the formatter, precomputing both span-template tables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            semantic_spans: build_span_table(ClassStyle::Semantic),
            compat_spans: build_span_table(ClassStyle::Compat),
        }
    }

    fn spans(&self, style: ClassStyle) -> &SpanTable {
        match style {
            ClassStyle::Semantic => &self.semantic_spans,
            ClassStyle::Compat => &self.compat_spans,
        }
    }

    fn open_container(format: &FormatConfig, out: &mut String) {
        let container = format
            .container_class
            .as_deref()
            .unwrap_or_else(|| format.class_style.default_container_class());
        out.push_str("<div class=\"");
        escape_html_into(container, out);
        out.push('"');
        if let Some(lang) = &format.data_language {
            out.push_str(" data-language=\"");
            escape_html_into(lang, out);
            out.push('"');
        }
        out.push_str("><pre><code>");
    }

    fn close_container(out: &mut String) {
        out.push_str("</code></pre></div>");
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn format_fast_to(
        &self,
        pieces: &mut dyn Iterator<Item = Piece<'_>>,
        format: &FormatConfig,
        out: &mut String,
    ) {
        let spans = self.spans(format.class_style);
        Self::open_container(format, out);
        for piece in pieces {
            match &spans[piece.category as u8 as usize] {
                Some(open) => {
                    out.push_str(open);
                    escape_html_into(piece.text, out);
                    out.push_str(SPAN_CLOSE);
                }
                None => escape_html_into(piece.text, out),
            }
        }
        Self::close_container(out);
    }

    fn format_to(
        &self,
        tokens: &mut dyn Iterator<Item = Token<'_>>,
        format: &FormatConfig,
        highlight: &HighlightConfig,
        out: &mut String,
    ) {
        // Without line-level features the line machinery is pure
        // overhead; render exactly like the fast path.
        if highlight.is_plain() {
            let mut pieces = tokens.map(|t| Piece::new(t.category, t.text));
            self.format_fast_to(&mut pieces, format, out);
            return;
        }

        let spans = self.spans(format.class_style);
        Self::open_container(format, out);

        let mut line: u32 = 1;
        let mut line_open = false;
        for token in tokens {
            // Render the token text line piece by line piece: embedded
            // newlines close the current line span and open the next.
            // The token's recorded position is untouched; this split is
            // rendering-only.
            let mut rest = token.text;
            loop {
                let (segment, newline_len) = match rest.find('\n') {
                    Some(idx) if rest.as_bytes()[idx.saturating_sub(1)] == b'\r' && idx > 0 => {
                        (&rest[..idx - 1], 2)
                    }
                    Some(idx) => (&rest[..idx], 1),
                    None => (rest, 0),
                };

                if !segment.is_empty() || newline_len > 0 {
                    if !line_open {
                        open_line(highlight, line, out);
                        line_open = true;
                    }
                }
                if !segment.is_empty() {
                    match &spans[token.category as u8 as usize] {
                        Some(open) => {
                            out.push_str(open);
                            escape_html_into(segment, out);
                            out.push_str(SPAN_CLOSE);
                        }
                        None => escape_html_into(segment, out),
                    }
                }

                if newline_len == 0 {
                    break;
                }
                // Close the line and carry the break verbatim.
                out.push_str(SPAN_CLOSE);
                line_open = false;
                let break_start = segment.len();
                out.push_str(&rest[break_start..break_start + newline_len]);
                rest = &rest[break_start + newline_len..];
                line += 1;
                if rest.is_empty() {
                    break;
                }
            }
        }
        if line_open {
            out.push_str(SPAN_CLOSE);
        }

        Self::close_container(out);
    }
}

fn open_line(highlight: &HighlightConfig, line: u32, out: &mut String) {
    out.push_str("<span class=\"");
    out.push_str(&highlight.line_class);
    if highlight.highlighted_lines.contains(&line) {
        out.push(' ');
        out.push_str(&highlight.highlighted_line_class);
    }
    out.push_str("\">");
    if highlight.show_line_numbers {
        let _ = write!(
            out,
            "<span class=\"{}\">{line}</span>",
            highlight.line_number_class
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn pieces(parts: &'static [(TokenCategory, &'static str)]) -> impl Iterator<Item = Piece<'static>> {
        parts.iter().map(|&(category, text)| Piece { category, text })
    }

    fn fast(parts: &'static [(TokenCategory, &'static str)], format: &FormatConfig) -> String {
        HtmlFormatter::new().format_string_fast(&mut pieces(parts), format)
    }

    #[test]
    fn container_shape_semantic_default() {
        let format = FormatConfig {
            data_language: Some("python".to_owned()),
            ..FormatConfig::default()
        };
        let out = fast(&[(TokenCategory::Keyword, "def")], &format);
        assert!(out.starts_with("<div class=\"rosettes\" data-language=\"python\"><pre><code>"));
        assert!(out.ends_with("</code></pre></div>"));
        assert!(out.contains("<span class=\"syntax-control\">def</span>"));
    }

    #[test]
    fn compat_style_uses_short_tags() {
        let format = FormatConfig {
            class_style: ClassStyle::Compat,
            ..FormatConfig::default()
        };
        let out = fast(&[(TokenCategory::NameFunction, "main")], &format);
        assert!(out.contains("<div class=\"highlight\">"));
        assert!(out.contains("<span class=\"nf\">main</span>"));
    }

    #[test]
    fn container_class_override() {
        let format = FormatConfig {
            container_class: Some("code-sample".to_owned()),
            ..FormatConfig::default()
        };
        let out = fast(&[], &format);
        assert!(out.starts_with("<div class=\"code-sample\">"));
    }

    #[test]
    fn whitespace_and_text_have_no_span() {
        let format = FormatConfig::default();
        let out = fast(
            &[
                (TokenCategory::Text, "plain"),
                (TokenCategory::Whitespace, " "),
                (TokenCategory::Keyword, "if"),
            ],
            &format,
        );
        assert!(out.contains("plain <span"));
    }

    #[test]
    fn token_text_is_escaped() {
        let format = FormatConfig::default();
        let out = fast(&[(TokenCategory::Operator, "<&>")], &format);
        assert!(out.contains("&lt;&amp;&gt;"));
        assert!(!out.contains("<&>"));
    }

    #[test]
    fn data_language_omitted_when_absent() {
        let out = fast(&[], &FormatConfig::default());
        assert!(!out.contains("data-language"));
    }

    fn tokens_of(parts: &'static [(TokenCategory, &'static str)]) -> Vec<Token<'static>> {
        // Positions don't matter to the renderer; lines are derived from
        // the text itself.
        parts
            .iter()
            .map(|&(category, text)| Token::new(category, text, 1, 1))
            .collect()
    }

    #[test]
    fn slow_path_wraps_lines() {
        let fmt = HtmlFormatter::new();
        let format = FormatConfig::default();
        let highlight = HighlightConfig {
            show_line_numbers: true,
            ..HighlightConfig::default()
        };
        let toks = tokens_of(&[
            (TokenCategory::Name, "a"),
            (TokenCategory::Whitespace, "\n"),
            (TokenCategory::Name, "b"),
        ]);
        let out = fmt.format_string(&mut toks.into_iter(), &format, &highlight);
        assert!(out.contains("<span class=\"line\"><span class=\"lineno\">1</span>"));
        assert!(out.contains("<span class=\"lineno\">2</span>"));
        // The newline itself sits between line spans.
        assert!(out.contains("</span>\n<span class=\"line\">"));
    }

    #[test]
    fn highlighted_line_gets_extra_class() {
        let fmt = HtmlFormatter::new();
        let format = FormatConfig::default();
        let mut lines = FxHashSet::default();
        lines.insert(2);
        let highlight = HighlightConfig {
            highlighted_lines: lines,
            ..HighlightConfig::default()
        };
        let toks = tokens_of(&[
            (TokenCategory::Name, "a"),
            (TokenCategory::Whitespace, "\n"),
            (TokenCategory::Name, "b"),
        ]);
        let out = fmt.format_string(&mut toks.into_iter(), &format, &highlight);
        assert!(out.contains("<span class=\"line hll\">b"));
    }

    #[test]
    fn multiline_token_splits_across_line_spans() {
        let fmt = HtmlFormatter::new();
        let format = FormatConfig::default();
        let highlight = HighlightConfig {
            show_line_numbers: true,
            ..HighlightConfig::default()
        };
        let toks = tokens_of(&[(TokenCategory::CommentMultiline, "/* a\nb */")]);
        let out = fmt.format_string(&mut toks.into_iter(), &format, &highlight);
        // Both halves styled, one per line.
        assert_eq!(out.matches("<span class=\"syntax-comment\">").count(), 2);
    }

    #[test]
    fn slow_path_without_features_matches_fast_path() {
        let fmt = HtmlFormatter::new();
        let format = FormatConfig::default();
        let highlight = HighlightConfig::default();
        let parts: &'static [(TokenCategory, &'static str)] = &[
            (TokenCategory::Keyword, "if"),
            (TokenCategory::Whitespace, " "),
            (TokenCategory::NumberInteger, "1"),
        ];
        let toks = tokens_of(parts);
        let slow = fmt.format_string(&mut toks.into_iter(), &format, &highlight);
        let fast = fmt.format_string_fast(&mut pieces(parts), &format);
        assert_eq!(slow, fast);
    }
}
