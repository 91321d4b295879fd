//! Sentence and text driver.
//!
//! Splits text into sentences on `.`, `!`, `؟` and `،`, splits each sentence
//! on whitespace, and feeds every word with its neighbours through the
//! classifier and then the applier:
//!
//! ```text
//! text ── split sentences ── split words ──┬─ strip marks (word + neighbours)
//!                                          ├─ Classifier::classify
//!                                          └─ apply
//! words joined with " ", sentences joined with ". "
//! ```
//!
//! Blank sentences are dropped. A token made only of marks has no letters to
//! classify and is copied through unchanged.

use std::time::Instant;

use super::applier::apply;
use super::classifier::Classifier;
use super::metrics::{RunMetrics, RunResult, WordTrace};
use crate::rules::marks::strip_marks;
use crate::rules::tables;
use crate::{ClassRule, Options, Result};

/// Separator placed between processed sentences.
pub const SENTENCE_JOINER: &str = ". ";

#[derive(Debug)]
pub struct Driver<'a> {
    classifier: Classifier<'a>,
    trace: bool,
}

impl<'a> Driver<'a> {
    pub fn new(rules: &'a [ClassRule], options: &'a Options) -> Self {
        Driver { classifier: Classifier::new(rules, options), trace: false }
    }

    /// Keep a [`WordTrace`] for every word.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.classifier.rule_names()
    }

    /// Diacritize `text`.
    pub fn run(&self, text: &str) -> Result<RunResult> {
        let started = Instant::now();
        tables::verify()?;

        let mut metrics = RunMetrics::default();
        let mut traces = Vec::new();
        let mut processed = Vec::new();

        for sentence in split_sentences(text) {
            let words: Vec<&str> = sentence.split_whitespace().collect();
            let stripped: Vec<String> = words.iter().map(|w| strip_marks(w)).collect();
            let mut out_words = Vec::with_capacity(words.len());

            for (i, word) in words.iter().enumerate() {
                let plain = stripped[i].as_str();
                if plain.is_empty() {
                    out_words.push((*word).to_string());
                    continue;
                }

                let previous = i.checked_sub(1).map(|p| stripped[p].as_str());
                let next = stripped.get(i + 1).map(String::as_str);

                let t = Instant::now();
                let classification = self.classifier.classify(plain, previous, next);
                metrics.classify += t.elapsed();

                let t = Instant::now();
                let output = apply(plain, &classification.context);
                metrics.apply += t.elapsed();

                if self.trace {
                    traces.push(WordTrace {
                        sentence: metrics.sentences,
                        word: (*word).to_string(),
                        stripped: plain.to_string(),
                        previous: previous.map(str::to_string),
                        next: next.map(str::to_string),
                        classification,
                        output: output.clone(),
                    });
                }
                out_words.push(output);
            }

            metrics.words += words.len();
            metrics.sentences += 1;
            processed.push(out_words.join(" "));
        }

        metrics.total = started.elapsed();
        Ok(RunResult { output: processed.join(SENTENCE_JOINER), traces, metrics })
    }
}

/// Non-blank, trimmed sentences of `text`.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    regex!(r"[.!؟،]").split(text).map(str::trim).filter(|s| !s.is_empty())
}
