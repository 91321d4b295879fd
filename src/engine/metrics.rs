//! Engine run metrics.
//!
//! Collected by [`Driver::run`](super::Driver::run) and surfaced through the
//! verbose API. Timings are wall-clock and split between the two per-word
//! phases; the split is approximate for very short inputs.

use std::time::Duration;

use super::classifier::Classification;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Cumulative time spent classifying words.
    pub classify: Duration,
    /// Cumulative time spent applying marks.
    pub apply: Duration,
    /// Sentences retained after splitting.
    pub sentences: usize,
    /// Words processed across all sentences.
    pub words: usize,
}

/// What happened to one word, kept only when tracing is requested.
#[derive(Debug, Clone)]
pub struct WordTrace {
    /// Zero-based index of the sentence the word belongs to.
    pub sentence: usize,
    /// The word as it appeared in the input.
    pub word: String,
    pub stripped: String,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub classification: Classification,
    pub output: String,
}

/// Driver output bundled with metrics.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub output: String,
    /// Per-word traces (empty unless tracing was requested).
    pub traces: Vec<WordTrace>,
    pub metrics: RunMetrics,
}
