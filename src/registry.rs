//! Lazy, alias-aware registries for lexers and formatters.
//!
//! Two instances of one structure: a static spec table (owned by the
//! `lexers` / `formatters` modules), a name map from normalized
//! name-or-alias to spec index built once on first use, and a
//! double-checked singleton cache. Constructed instances are leaked to
//! obtain `'static` borrows — each entry is built at most once per
//! process, under the write lock, and reused forever.
//!
//! Lookup is case-insensitive and trims surrounding whitespace.

use std::sync::OnceLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::Error;
use crate::formatters::{self, Formatter};
use crate::lexer::Lexer;
use crate::lexers;

/// Name-to-index map plus lazily constructed singletons.
struct Registry<T: ?Sized + 'static> {
    names: OnceLock<FxHashMap<&'static str, usize>>,
    instances: RwLock<Vec<Option<&'static T>>>,
}

impl<T: ?Sized + 'static> Registry<T> {
    const fn new() -> Self {
        Self {
            names: OnceLock::new(),
            instances: RwLock::new(Vec::new()),
        }
    }

    /// Look up a normalized name without constructing anything.
    fn index_of(&self, name: &str, build_names: fn() -> FxHashMap<&'static str, usize>) -> Option<usize> {
        let normalized = name.trim().to_ascii_lowercase();
        self.names.get_or_init(build_names).get(normalized.as_str()).copied()
    }

    /// Resolve a name to its singleton, constructing on first hit.
    fn resolve(
        &self,
        name: &str,
        build_names: fn() -> FxHashMap<&'static str, usize>,
        construct: fn(usize) -> Box<T>,
    ) -> Option<&'static T> {
        let idx = self.index_of(name, build_names)?;

        if let Some(Some(instance)) = self.instances.read().get(idx) {
            return Some(*instance);
        }

        let mut instances = self.instances.write();
        if instances.len() <= idx {
            instances.resize(idx + 1, None);
        }
        if let Some(instance) = instances[idx] {
            // Another thread won the race between our read and write.
            return Some(instance);
        }
        let instance: &'static T = Box::leak(construct(idx));
        instances[idx] = Some(instance);
        Some(instance)
    }
}

static LEXERS: Registry<dyn Lexer> = Registry::new();
static FORMATTERS: Registry<dyn Formatter> = Registry::new();

fn lexer_names() -> FxHashMap<&'static str, usize> {
    let mut map = FxHashMap::default();
    for (idx, spec) in lexers::SPECS.iter().enumerate() {
        map.insert(spec.name, idx);
        for &alias in spec.aliases {
            map.insert(alias, idx);
        }
    }
    map
}

fn formatter_names() -> FxHashMap<&'static str, usize> {
    let mut map = FxHashMap::default();
    for (idx, spec) in formatters::SPECS.iter().enumerate() {
        map.insert(spec.name, idx);
        for &alias in spec.aliases {
            map.insert(alias, idx);
        }
    }
    map
}

/// Resolve a language name or alias to its shared lexer.
///
/// # Errors
///
/// [`Error::UnknownLanguage`] when nothing is registered under `name`.
pub fn get_lexer(name: &str) -> Result<&'static dyn Lexer, Error> {
    LEXERS
        .resolve(name, lexer_names, |idx| {
            let spec = &lexers::SPECS[idx];
            tracing::debug!(language = spec.name, "lexer constructed");
            (spec.construct)()
        })
        .ok_or_else(|| Error::UnknownLanguage(name.to_owned()))
}

/// Resolve a formatter name or alias to its shared formatter.
///
/// # Errors
///
/// [`Error::UnknownFormatter`] when nothing is registered under `name`.
pub fn get_formatter(name: &str) -> Result<&'static dyn Formatter, Error> {
    FORMATTERS
        .resolve(name, formatter_names, |idx| {
            let spec = &formatters::SPECS[idx];
            tracing::debug!(formatter = spec.name, "formatter constructed");
            (spec.construct)()
        })
        .ok_or_else(|| Error::UnknownFormatter(name.to_owned()))
}

/// Whether `name` resolves to a language, without constructing it.
#[must_use]
pub fn supports_language(name: &str) -> bool {
    LEXERS.index_of(name, lexer_names).is_some()
}

/// Whether `name` resolves to a formatter, without constructing it.
#[must_use]
pub fn supports_formatter(name: &str) -> bool {
    FORMATTERS.index_of(name, formatter_names).is_some()
}

/// Canonical language names, sorted lexicographically.
#[must_use]
pub fn list_languages() -> Vec<&'static str> {
    lexers::SPECS.iter().map(|spec| spec.name).collect()
}

/// Canonical formatter names, sorted lexicographically.
#[must_use]
pub fn list_formatters() -> Vec<&'static str> {
    formatters::SPECS.iter().map(|spec| spec.name).collect()
}
