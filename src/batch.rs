//! Parallel batch highlighting.
//!
//! Jobs are independent `(source, language)` pairs; results come back in
//! input order regardless of worker completion order. Small batches run
//! sequentially on the caller — dispatch overhead dominates below the
//! threshold. Workers share only the read-only lexer/formatter
//! singletons; everything else is job-local.

use rayon::prelude::*;

use crate::config::ClassStyle;
use crate::engine::{highlight_with, tokenize, Options};
use crate::error::Error;
use crate::token::OwnedToken;

/// Batches smaller than this run sequentially on the calling thread.
const SEQUENTIAL_THRESHOLD: usize = 8;

/// Cap on the default worker count; more workers stop paying off well
/// before typical core counts.
const DEFAULT_WORKER_CAP: usize = 4;

/// Options for [`highlight_many`] and [`tokenize_many`].
#[derive(Clone, Debug)]
pub struct BatchOptions {
    /// Formatter name or alias.
    pub formatter: String,
    /// HTML class naming style.
    pub class_style: ClassStyle,
    /// Worker thread count; `None` means `min(4, available cores)`.
    pub max_workers: Option<usize>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            formatter: "html".to_owned(),
            class_style: ClassStyle::Semantic,
            max_workers: None,
        }
    }
}

fn worker_count(requested: Option<usize>) -> usize {
    requested.unwrap_or_else(|| {
        let cores = std::thread::available_parallelism().map_or(DEFAULT_WORKER_CAP, usize::from);
        cores.min(DEFAULT_WORKER_CAP)
    })
    .max(1)
}

/// Run `job` over every element, parallel above the threshold, results
/// in input order. The first error aborts the batch.
fn run_jobs<T, F>(jobs: &[(&str, &str)], workers: Option<usize>, job: F) -> Result<Vec<T>, Error>
where
    T: Send,
    F: Fn(&str, &str) -> Result<T, Error> + Send + Sync,
{
    if jobs.is_empty() {
        return Ok(Vec::new());
    }
    if jobs.len() < SEQUENTIAL_THRESHOLD {
        return jobs.iter().map(|&(source, language)| job(source, language)).collect();
    }

    let workers = worker_count(workers);
    tracing::debug!(jobs = jobs.len(), workers, "parallel batch dispatch");
    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(|| {
            jobs.par_iter()
                .map(|&(source, language)| job(source, language))
                .collect()
        }),
        // Pool construction can only fail under resource exhaustion;
        // the batch still completes sequentially.
        Err(_) => jobs.iter().map(|&(source, language)| job(source, language)).collect(),
    }
}

/// Highlight many `(source, language)` jobs with default options.
///
/// # Errors
///
/// The first lookup error aborts the batch.
pub fn highlight_many(jobs: &[(&str, &str)]) -> Result<Vec<String>, Error> {
    highlight_many_with(jobs, &BatchOptions::default())
}

/// Highlight many jobs with explicit [`BatchOptions`].
///
/// # Errors
///
/// The first lookup error aborts the batch.
pub fn highlight_many_with(
    jobs: &[(&str, &str)],
    options: &BatchOptions,
) -> Result<Vec<String>, Error> {
    let single = Options {
        formatter: options.formatter.clone(),
        class_style: options.class_style,
        ..Options::default()
    };
    run_jobs(jobs, options.max_workers, move |source, language| {
        highlight_with(source, language, &single)
    })
}

/// Tokenize many `(source, language)` jobs in parallel. Token text is
/// owned so results outlive the worker pool.
///
/// # Errors
///
/// The first lookup error aborts the batch.
pub fn tokenize_many(jobs: &[(&str, &str)]) -> Result<Vec<Vec<OwnedToken>>, Error> {
    tokenize_many_with(jobs, None)
}

/// [`tokenize_many`] with an explicit worker count.
///
/// # Errors
///
/// The first lookup error aborts the batch.
pub fn tokenize_many_with(
    jobs: &[(&str, &str)],
    max_workers: Option<usize>,
) -> Result<Vec<Vec<OwnedToken>>, Error> {
    run_jobs(jobs, max_workers, |source, language| {
        let tokens = tokenize(source, language)?;
        Ok(tokens.into_iter().map(OwnedToken::from).collect())
    })
}
