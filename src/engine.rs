//! High-level highlight / tokenize facade.
//!
//! Resolves names through the registries, slices the requested source
//! range, and dispatches between the formatter's fast and slow paths.
//! The fast path runs iff no line-level feature is requested *and* the
//! formatter advertises one; the choice is observable only through
//! performance, never output.

use crate::config::{ClassStyle, FormatConfig, HighlightConfig};
use crate::error::Error;
use crate::formatters::Formatter as _;
use crate::lexer::Lexer as _;
use crate::registry;
use crate::token::Token;

/// Options for [`highlight_with`] and [`tokenize_with`].
///
/// Plain data with a [`Default`]: construct directly with named fields
/// and struct update syntax.
#[derive(Clone, Debug)]
pub struct Options {
    /// Formatter name or alias.
    pub formatter: String,
    /// HTML class naming style.
    pub class_style: ClassStyle,
    /// 1-based lines to emphasize (HTML slow path).
    pub highlighted_lines: Vec<u32>,
    /// Prefix lines with their numbers (HTML slow path).
    pub show_line_numbers: bool,
    /// Container class override; `None` uses the style default.
    pub container_class: Option<String>,
    /// Starting byte offset into the source (snapped down to a char
    /// boundary).
    pub start: usize,
    /// Ending byte offset; `None` means the end of the source.
    pub end: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            formatter: "html".to_owned(),
            class_style: ClassStyle::Semantic,
            highlighted_lines: Vec::new(),
            show_line_numbers: false,
            container_class: None,
            start: 0,
            end: None,
        }
    }
}

/// Highlight `source` as `language` into HTML with default options.
///
/// # Errors
///
/// Propagates the registry's lookup errors; tokenization and formatting
/// themselves never fail.
pub fn highlight(source: &str, language: &str) -> Result<String, Error> {
    highlight_with(source, language, &Options::default())
}

/// Highlight `source` as `language` with explicit [`Options`].
///
/// # Errors
///
/// [`Error::UnknownLanguage`] / [`Error::UnknownFormatter`] for
/// unresolvable names.
pub fn highlight_with(source: &str, language: &str, options: &Options) -> Result<String, Error> {
    let lexer = registry::get_lexer(language)?;
    let formatter = registry::get_formatter(&options.formatter)?;
    let slice = slice_source(source, options.start, options.end);

    let format = FormatConfig {
        container_class: options.container_class.clone(),
        data_language: Some(lexer.name().to_owned()),
        class_style: options.class_style,
    };
    let highlight = HighlightConfig {
        highlighted_lines: options.highlighted_lines.iter().copied().collect(),
        show_line_numbers: options.show_line_numbers,
        ..HighlightConfig::default()
    };

    if highlight.is_plain() && formatter.has_fast_path() {
        Ok(formatter.format_string_fast(&mut lexer.pieces(slice), &format))
    } else {
        Ok(formatter.format_string(&mut lexer.tokens(slice), &format, &highlight))
    }
}

/// Tokenize `source` as `language` with default options.
///
/// # Errors
///
/// [`Error::UnknownLanguage`] for an unresolvable name.
pub fn tokenize<'a>(source: &'a str, language: &str) -> Result<Vec<Token<'a>>, Error> {
    tokenize_with(source, language, &Options::default())
}

/// Tokenize a slice of `source`; only `start` / `end` of the options
/// apply. Positions are relative to the slice: its first code point is
/// line 1, column 1.
///
/// # Errors
///
/// [`Error::UnknownLanguage`] for an unresolvable name.
pub fn tokenize_with<'a>(
    source: &'a str,
    language: &str,
    options: &Options,
) -> Result<Vec<Token<'a>>, Error> {
    let lexer = registry::get_lexer(language)?;
    let slice = slice_source(source, options.start, options.end);
    Ok(lexer.tokens(slice).collect())
}

/// Slice `source` by byte offsets, snapping both ends down to char
/// boundaries and clamping to the source length. Never panics.
fn slice_source(source: &str, start: usize, end: Option<usize>) -> &str {
    let mut start = start.min(source.len());
    while !source.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = end.unwrap_or(source.len()).min(source.len()).max(start);
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let end = end.max(start);
    &source[start..end]
}
