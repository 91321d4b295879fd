extern crate self as tashkeel;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;
mod sink;

pub use api::{
    Context, EMPTY_INPUT_MESSAGE, ERROR_MARKER, Options, RunDetails, RunOutput, VerbSuffixPolicy, WordSummary,
    process_text, process_text_verbose_with, process_text_with,
};
pub use engine::{WordTraits, apply, classify};
pub use error::{Error, Result};
pub use rules::marks::{DiacriticMark, is_mark, strip_marks};
pub use sink::{FileSink, ReportSink};

// --- Word classification ----------------------------------------------------

/// Grammatical role assigned to a word from its immediate neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Unknown,
    /// Governed by a preceding preposition (مجرور).
    Governed,
    /// Subject of a copula-like particle such as كان or إن (اسم ناسخ).
    CopulaSubject,
    /// فعل
    Verb,
    /// One of the five irregular nouns (الأسماء الخمسة).
    FiveNoun,
}

impl Category {
    /// Traditional Arabic grammatical label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Unknown => "unknown",
            Category::Governed => "مجرور",
            Category::CopulaSubject => "اسم_ناسخ",
            Category::Verb => "فعل",
            Category::FiveNoun => "اسم_خمسة",
        }
    }
}

/// Case of a noun or mood of a present-tense verb.
///
/// `Default` means no governing word set a case; rule tables have no entry
/// for it, so lookups under `Default` are misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Case {
    /// جر
    Genitive,
    /// رفع
    Nominative,
    /// نصب
    Accusative,
    /// مرفوع
    Indicative,
    /// منصوب
    Subjunctive,
    /// مجزوم
    Jussive,
    /// ماضي, past tense (no mood).
    Past,
    #[default]
    Default,
}

impl Case {
    pub fn label(self) -> &'static str {
        match self {
            Case::Genitive => "جر",
            Case::Nominative => "رفع",
            Case::Accusative => "نصب",
            Case::Indicative => "مرفوع",
            Case::Subjunctive => "منصوب",
            Case::Jussive => "مجزوم",
            Case::Past => "ماضي",
            Case::Default => "default",
        }
    }
}

/// Number of a noun, selecting between the singular mark and the
/// sound-plural / dual suffixes. The classifier always reports `Singular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NounForm {
    #[default]
    Singular,
    /// جمع مذكر سالم
    SoundMasculinePlural,
    /// مثنى
    Dual,
}

/// Everything the applier needs to know about one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordContext {
    pub category: Category,
    pub case: Case,
    pub form: NounForm,
    pub has_tanween: bool,
    pub has_pronoun: bool,
}

// --- Classification rules ---------------------------------------------------

/// A word together with its (mark-free) neighbours, as seen by a rule.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood<'a> {
    pub word: &'a str,
    pub previous: Option<&'a str>,
    /// Carried for rules that look ahead; none of the default rules do.
    pub next: Option<&'a str>,
    pub traits: WordTraits,
}

/// One entry of the ranked classification list: when `when` holds, `produce`
/// yields the category and case. Higher `priority` is tried first.
pub struct ClassRule {
    pub name: &'static str,
    pub priority: u16,
    pub when: fn(&Neighborhood<'_>, &Options) -> bool,
    pub produce: fn(&Neighborhood<'_>) -> (Category, Case),
}

impl std::fmt::Debug for ClassRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassRule")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("when", &"<function>")
            .field("produce", &"<function>")
            .finish()
    }
}
