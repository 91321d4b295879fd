//! Classification and marking engine.
//!
//! ## How the parts work together
//!
//! ```text
//! rules (ranked) ──┐
//!                  │  Classifier::new             (classifier.rs)
//!                  └──────────────┬────────────
//!                                 │
//! text ── Driver::run ────────────┼─ split sentences / words   (driver.rs)
//!                                 │
//!                                 v
//!                  WordTraits::scan                (trigger.rs)
//!                    - definite article, sun letter, prefixes, suffixes
//!                                 │
//!                                 v
//!                  Classifier::classify            (classifier.rs)
//!                    - first matching rule wins
//!                    - tanween / pronoun flags
//!                                 │
//!                                 v
//!                  apply                           (applier.rs)
//!                    - ordered marking steps over the rule tables
//!                                 │
//!                                 v
//!                           RunResult              (metrics.rs)
//! ```
//!
//! Rule tables (`crate::rules::tables`) are read by every stage and never
//! written after initialisation, so one engine can serve any number of calls
//! concurrently.
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: cheap lexical scan producing a [`WordTraits`] mask.
//! - `classifier.rs`: ranked rule evaluation producing a `WordContext`.
//! - `applier.rs`: the marking pipeline; total, never fails.
//! - `driver.rs`: sentence/word splitting and reassembly.
//! - `metrics.rs`: timings, counters and optional per-word traces.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=tashkeel=debug` to log each fired rule and each
//! recovered lookup miss; `trace` adds the per-word trait scan.

#[path = "engine/applier.rs"]
mod applier;
#[path = "engine/classifier.rs"]
mod classifier;
#[path = "engine/driver.rs"]
mod driver;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/trigger.rs"]
mod trigger;

pub use applier::apply;
pub use classifier::Classifier;
pub use driver::Driver;
pub use metrics::{RunResult, WordTrace};
pub use trigger::WordTraits;

use crate::rules::marks::strip_marks;
use crate::{Options, WordContext};
use once_cell::sync::Lazy;

static DEFAULT_RULES: Lazy<Vec<crate::ClassRule>> = Lazy::new(crate::rules::context::rules::get);

pub(crate) fn default_rules() -> &'static [crate::ClassRule] {
    &DEFAULT_RULES
}

/// Classify `word` from its neighbours with the default rules and options.
///
/// Marks are stripped from all three words first.
pub fn classify(word: &str, previous: Option<&str>, next: Option<&str>) -> WordContext {
    let options = Options::default();
    let classifier = Classifier::new(default_rules(), &options);
    let word = strip_marks(word);
    let previous = previous.map(strip_marks);
    let next = next.map(strip_marks);
    classifier.classify(&word, previous.as_deref(), next.as_deref()).context
}
