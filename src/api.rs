use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::engine::{self, Driver, RunResult, WordTrace};
use crate::sink::ReportSink;
use crate::Result;

/// Returned instead of any processing when the input has no text.
pub const EMPTY_INPUT_MESSAGE: &str = "الرجاء إدخال نص";

/// Prefix of the diagnostic returned when processing fails.
pub const ERROR_MARKER: &str = "حدث خطأ: ";

/// Processing context.
///
/// Holds the environment a run depends on but the rules do not: the instant
/// stamped on persisted reports.
#[derive(Debug, Clone)]
pub struct Context {
    /// Time recorded in report file names and footers.
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
            let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
            Self { reference_time: NaiveDateTime::new(date, time) }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

/// How the verb heuristic treats words without a present-tense prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerbSuffixPolicy {
    /// The past-ending table includes the empty suffix, so every word that
    /// reaches the verb rule is a verb.
    #[default]
    Legacy,
    /// Only the non-empty past endings (ت، نا، وا، تم، تن) mark a verb.
    Strict,
}

/// Options that affect classification.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub verb_suffixes: VerbSuffixPolicy,
}

/// A compact per-word summary used in verbose output.
#[derive(Debug, Clone)]
pub struct WordSummary {
    pub sentence: usize,
    pub word: String,
    pub previous: Option<String>,
    pub next: Option<String>,
    /// Name of the classification rule that fired.
    pub rule: String,
    pub category: String,
    pub case: String,
    pub traits: String,
    pub tanween: bool,
    pub pronoun: bool,
    pub output: String,
}

/// Additional details returned by [`process_text_verbose_with`].
#[derive(Debug, Clone, Default)]
pub struct RunDetails {
    pub total: Duration,
    pub classify: Duration,
    pub apply: Duration,
    pub sentences: usize,
    pub words: usize,
    /// Classification rules in evaluation order.
    pub rules: Vec<String>,
    pub trace: Vec<WordSummary>,
}

/// Result of [`process_text_verbose_with`].
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub text: String,
    /// The diacritized text, the placeholder, or a diagnostic.
    pub output: String,
    pub details: RunDetails,
}

/// Diacritize `text` with the default rules and options.
///
/// Always returns a string: the processed text, [`EMPTY_INPUT_MESSAGE`] for
/// empty input, or a diagnostic starting with [`ERROR_MARKER`].
///
/// # Example
/// ```
/// use tashkeel::process_text;
///
/// assert_eq!(process_text("محمد"), "مُحَمَّدٍ");
/// ```
pub fn process_text(text: &str) -> String {
    process_text_with(text, &Context::default(), &Options::default(), None)
}

/// Diacritize `text`, optionally persisting the result through `sink`.
///
/// A sink failure is reported like any other failure: through the diagnostic
/// string.
pub fn process_text_with(text: &str, context: &Context, options: &Options, sink: Option<&dyn ReportSink>) -> String {
    process_text_verbose_with(text, context, options, sink, false).output
}

/// Like [`process_text_with`], also returning timings and, when `trace` is
/// set, a per-word account of the classification.
pub fn process_text_verbose_with(
    text: &str,
    context: &Context,
    options: &Options,
    sink: Option<&dyn ReportSink>,
    trace: bool,
) -> RunOutput {
    if text.trim().is_empty() {
        return RunOutput {
            text: text.to_string(),
            output: EMPTY_INPUT_MESSAGE.to_string(),
            details: RunDetails::default(),
        };
    }

    let driver = Driver::new(engine::default_rules(), options).with_trace(trace);
    let rules = driver.rule_names().into_iter().map(str::to_string).collect();

    match run(&driver, text, context, sink) {
        Ok(run) => RunOutput { text: text.to_string(), output: run.output.clone(), details: details(run, rules) },
        Err(err) => {
            log::warn!("processing failed: {err}");
            RunOutput {
                text: text.to_string(),
                output: format!("{ERROR_MARKER}{err}"),
                details: RunDetails { rules, ..RunDetails::default() },
            }
        }
    }
}

fn run(driver: &Driver<'_>, text: &str, context: &Context, sink: Option<&dyn ReportSink>) -> Result<RunResult> {
    let run = driver.run(text)?;
    if let Some(sink) = sink {
        sink.persist(&run.output, context.reference_time)?;
    }
    Ok(run)
}

fn details(run: RunResult, rules: Vec<String>) -> RunDetails {
    RunDetails {
        total: run.metrics.total,
        classify: run.metrics.classify,
        apply: run.metrics.apply,
        sentences: run.metrics.sentences,
        words: run.metrics.words,
        rules,
        trace: run.traces.iter().map(trace_to_summary).collect(),
    }
}

fn trace_to_summary(t: &WordTrace) -> WordSummary {
    let ctx = &t.classification.context;
    WordSummary {
        sentence: t.sentence,
        word: t.word.clone(),
        previous: t.previous.clone(),
        next: t.next.clone(),
        rule: t.classification.rule.to_string(),
        category: ctx.category.label().to_string(),
        case: ctx.case.label().to_string(),
        traits: format!("{:?}", t.classification.traits),
        tanween: ctx.has_tanween,
        pronoun: ctx.has_pronoun,
        output: t.output.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use proptest::prelude::*;

    use super::*;
    use crate::rules::marks::{SHADDA, SUKUN};
    use crate::{Category, Error, WordContext, apply, strip_marks};

    struct MemorySink(RefCell<Vec<(String, NaiveDateTime)>>);

    impl ReportSink for MemorySink {
        fn persist(&self, text: &str, at: NaiveDateTime) -> Result<()> {
            self.0.borrow_mut().push((text.to_string(), at));
            Ok(())
        }
    }

    struct FailingSink;

    impl ReportSink for FailingSink {
        fn persist(&self, _text: &str, _at: NaiveDateTime) -> Result<()> {
            Err(Error::Sink { path: "/nowhere".into(), source: std::io::Error::other("disk full") })
        }
    }

    #[test]
    fn empty_input_returns_placeholder() {
        assert_eq!(process_text(""), EMPTY_INPUT_MESSAGE);
        assert_eq!(process_text("  \n "), EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn empty_input_skips_the_sink() {
        let sink = MemorySink(RefCell::new(Vec::new()));
        let out = process_text_with("", &Context::default(), &Options::default(), Some(&sink));
        assert_eq!(out, EMPTY_INPUT_MESSAGE);
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn abu_muhammad_goes_to_the_mosque() {
        let out = process_text("جاء أبو محمدٍ إلى المسجدِ");
        let words: Vec<&str> = out.split(' ').collect();
        assert_eq!(words.len(), 5);
        assert_eq!(words[0], "جاء\u{064E}");
        // Five-noun path with no governing case leaves the word as written.
        assert_eq!(words[1], "أبو");
        assert_eq!(words[2], "مُحَمَّدٍ");
        assert_eq!(words[3], "إِلَى");
        assert_eq!(words[4], "المسجد\u{0650}");
    }

    #[test]
    fn standalone_particles_keep_their_own_form() {
        assert_eq!(process_text("في"), "فِي");
        assert_eq!(process_text("كان"), "كَانَ");
    }

    #[test]
    fn sun_letter_after_preposition() {
        let out = process_text("في الشمس");
        assert_eq!(out, format!("فِي ال{SUKUN}ش{SHADDA}مس\u{0650}"));
    }

    #[test]
    fn sentences_are_normalised_to_period_space() {
        let out = process_text("في بيت، على كرسي! الله");
        assert_eq!(out, "فِي بيت\u{064D}. عَلَى كرسي. اللَّهِ");
    }

    #[test]
    fn sink_receives_output_and_reference_time() {
        let sink = MemorySink(RefCell::new(Vec::new()));
        let ctx = Context::default();
        let out = process_text_with("محمد", &ctx, &Options::default(), Some(&sink));
        let saved = sink.0.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, out);
        assert_eq!(saved[0].1, ctx.reference_time);
    }

    #[test]
    fn sink_failure_becomes_diagnostic() {
        let out = process_text_with("محمد", &Context::default(), &Options::default(), Some(&FailingSink));
        assert!(out.starts_with(ERROR_MARKER), "{out}");
        assert!(out.contains("disk full"));
    }

    #[test]
    fn verbose_run_reports_trace_and_rules() {
        let (ctx, opts) = (Context::default(), Options::default());
        let res = process_text_verbose_with("جاء أبو محمد", &ctx, &opts, None, true);
        assert_eq!(res.details.words, 3);
        assert_eq!(res.details.sentences, 1);
        assert_eq!(res.details.trace.len(), 3);
        assert_eq!(res.details.trace[1].rule, "five noun");
        assert_eq!(res.details.trace[1].category, "اسم_خمسة");
        assert_eq!(res.details.trace[1].previous.as_deref(), Some("جاء"));
        assert_eq!(res.details.trace[1].next.as_deref(), Some("محمد"));
        assert!(!res.details.rules.is_empty());
        assert!(res.details.classify + res.details.apply <= res.details.total);
    }

    #[test]
    fn verbose_run_without_trace_keeps_counts() {
        let res = process_text_verbose_with("في بيت", &Context::default(), &Options::default(), None, false);
        assert!(res.details.trace.is_empty());
        assert_eq!(res.details.words, 2);
    }

    fn arabic_word() -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::char::range('\u{0621}', '\u{064A}'), 1..8)
            .prop_map(|chars| chars.into_iter().collect())
    }

    fn any_context() -> impl Strategy<Value = WordContext> {
        let categories = prop_oneof![
            Just(Category::Unknown),
            Just(Category::Governed),
            Just(Category::CopulaSubject),
            Just(Category::Verb),
            Just(Category::FiveNoun),
        ];
        let cases = prop_oneof![
            Just(crate::Case::Genitive),
            Just(crate::Case::Nominative),
            Just(crate::Case::Accusative),
            Just(crate::Case::Indicative),
            Just(crate::Case::Jussive),
            Just(crate::Case::Past),
            Just(crate::Case::Default),
        ];
        (categories, cases, any::<bool>(), any::<bool>()).prop_map(|(category, case, has_tanween, has_pronoun)| {
            WordContext { category, case, has_tanween, has_pronoun, ..WordContext::default() }
        })
    }

    proptest! {
        #[test]
        fn stripping_is_idempotent(word in arabic_word()) {
            let once = strip_marks(&word);
            prop_assert_eq!(strip_marks(&once), once);
        }

        #[test]
        fn apply_round_trips_through_strip(word in arabic_word(), ctx in any_context()) {
            let first = apply(&word, &ctx);
            let again = apply(&strip_marks(&first), &ctx);
            prop_assert_eq!(again, first);
        }

        #[test]
        fn process_text_never_fails(text in "[\\u0621-\\u0652 .،!؟]{0,40}") {
            let out = process_text(&text);
            prop_assert!(!out.starts_with(ERROR_MARKER));
        }
    }
}
