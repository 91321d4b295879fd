//! Read-only rule tables consulted by the classifier and the applier.
//!
//! All tables are built once on first use and never mutated. Lookups that can
//! legitimately miss (a case with no entry, a word with no five-noun base)
//! return [`Error::LookupMiss`] so the applier can decide how to recover.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::rules::marks::strip_marks;
use crate::{Case, Error, NounForm, Result};

/// Letters marking a present-tense verb (أحرف المضارعة).
pub const PRESENT_PREFIXES: &str = "أنيت";

/// Letters that assimilate the ل of the definite article.
pub const SUN_LETTERS: &str = "تثدذرزسشصضطظلن";

/// Definite article.
pub const DEFINITE_ARTICLE: &str = "ال";

/// Past-tense endings used by the verb heuristic. The leading empty suffix
/// matches every word and is only honoured under the legacy policy.
pub const PAST_ENDINGS: &[&str] = &["", "ت", "نا", "وا", "تم", "تن"];

/// Attached subject suffixes of the past tense, longest first.
pub const PERSON_SUFFIXES: &[&str] = &["تما", "تم", "تن", "نا", "ت"];

/// Five-noun bases, in lookup order.
pub const FIVE_NOUN_BASES: [&str; 5] = ["أب", "أخ", "حم", "فم", "ذو"];

pub fn is_sun_letter(ch: char) -> bool {
    SUN_LETTERS.contains(ch)
}

pub fn is_present_prefix(ch: char) -> bool {
    PRESENT_PREFIXES.contains(ch)
}

// --- Particles ---------------------------------------------------------------

/// Prepositions (حروف الجر) and their own fixed diacritization.
pub static PREPOSITIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("في", "فِي"),
        ("من", "مِنْ"),
        ("إلى", "إِلَى"),
        ("على", "عَلَى"),
        ("عن", "عَنْ"),
        ("ب", "بِ"),
        ("ل", "لِ"),
        ("ك", "كَ"),
        ("حتى", "حَتَّى"),
        ("منذ", "مُنْذُ"),
        ("مذ", "مُذْ"),
    ])
});

/// A copula-like particle (ناسخ) and the cases it imposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connector {
    /// Case of the governed subject (اسم).
    pub subject: Case,
    /// Case of the predicate (خبر).
    pub predicate: Case,
    /// The particle's own diacritized form, where one is recorded.
    pub fixed: Option<&'static str>,
}

/// كان and the sisters of إن.
pub static CONNECTORS: Lazy<HashMap<&'static str, Connector>> = Lazy::new(|| {
    let inna = |fixed| Connector { subject: Case::Accusative, predicate: Case::Nominative, fixed: Some(fixed) };
    HashMap::from([
        ("كان", Connector { subject: Case::Nominative, predicate: Case::Accusative, fixed: Some("كَانَ") }),
        ("إن", inna("إِنَّ")),
        ("أن", inna("أَنَّ")),
        ("لكن", inna("لَكِنَّ")),
        ("ليت", inna("لَيْتَ")),
        ("لعل", inna("لَعَلَّ")),
    ])
});

// --- Whole-word forms ----------------------------------------------------------

/// Words with a single fixed diacritization regardless of context.
pub static SPECIAL_WORDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("الله", "اللَّهِ"),
        ("القرآن", "الْقُرْآنِ"),
        ("النبي", "النَّبِيِّ"),
        ("الإسلام", "الْإِسْلَامِ"),
        ("محمد", "مُحَمَّدٍ"),
        ("رب", "رَبِّ"),
        ("الرحمن", "الرَّحْمَنِ"),
        ("الرحيم", "الرَّحِيمِ"),
    ])
});

/// Irregular declension of the five nouns, keyed by base.
pub static FIVE_NOUNS: Lazy<HashMap<&'static str, HashMap<Case, &'static str>>> = Lazy::new(|| {
    let forms =
        |raf, nasb, jarr| HashMap::from([(Case::Nominative, raf), (Case::Accusative, nasb), (Case::Genitive, jarr)]);
    HashMap::from([
        ("أب", forms("أَبُو", "أَبَا", "أَبِي")),
        ("أخ", forms("أَخُو", "أَخَا", "أَخِي")),
        ("حم", forms("حَمُو", "حَمَا", "حَمِي")),
        ("فم", forms("فُو", "فَا", "فِي")),
        ("ذو", forms("ذُو", "ذَا", "ذِي")),
    ])
});

/// Declined forms without marks (فو, ذا, ...) mapped back to their base; not
/// all of them start with the base letters.
static DECLINED_FIVE_NOUNS: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    FIVE_NOUNS
        .iter()
        .flat_map(|(base, forms)| forms.values().map(move |form| (strip_marks(form), *base)))
        .collect()
});

/// Base of the five noun `word` starts with or is a declined form of.
pub fn five_noun_base(word: &str) -> Option<&'static str> {
    FIVE_NOUN_BASES
        .iter()
        .copied()
        .find(|base| word.starts_with(base))
        .or_else(|| DECLINED_FIVE_NOUNS.get(word).copied())
}

/// Base of the five noun `word` is written as: a bare base, a declined form,
/// or either of those followed by an attached pronoun (أبوه، أخيه). A
/// preposition such as في is never read as a declined form of فم.
pub fn exact_five_noun(word: &str) -> Option<&'static str> {
    let lookup = |w: &str| {
        if PREPOSITIONS.contains_key(w) {
            return None;
        }
        FIVE_NOUN_BASES.iter().copied().find(|base| *base == w).or_else(|| DECLINED_FIVE_NOUNS.get(w).copied())
    };
    lookup(word).or_else(|| {
        let (key, _) = pronoun_suffix(word)?;
        lookup(&word[..word.len() - key.len()])
    })
}

pub fn five_noun_form(base: &str, case: Case) -> Result<&'static str> {
    FIVE_NOUNS
        .get(base)
        .and_then(|forms| forms.get(&case))
        .copied()
        .ok_or_else(|| Error::lookup("five_nouns", base, case))
}

// --- Endings -----------------------------------------------------------------

/// Nunation forms for one case.
#[derive(Debug, Clone, Copy)]
pub struct Tanween {
    pub default: &'static str,
    /// Replaces a final ة.
    pub ta_marbuta: &'static str,
    /// Replaces a final ا.
    pub alif: &'static str,
}

pub static TANWEEN: Lazy<HashMap<Case, Tanween>> = Lazy::new(|| {
    HashMap::from([
        (Case::Nominative, Tanween { default: "\u{064C}", ta_marbuta: "ة\u{064C}", alif: "اء\u{064C}" }),
        (Case::Accusative, Tanween { default: "\u{064B}", ta_marbuta: "ة\u{064B}", alif: "اء\u{064B}" }),
        (Case::Genitive, Tanween { default: "\u{064D}", ta_marbuta: "ة\u{064D}", alif: "اء\u{064D}" }),
    ])
});

pub fn tanween(case: Case) -> Result<&'static Tanween> {
    TANWEEN.get(&case).ok_or_else(|| Error::lookup("tanween", "", case))
}

/// Case endings (علامات الإعراب) for one case.
#[derive(Debug, Clone, Copy)]
pub struct CaseEnding {
    /// Short vowel appended to a singular noun.
    pub default: &'static str,
    /// Replaces the last two letters of a sound masculine plural.
    pub plural: &'static str,
    /// Replaces the last two letters of a dual.
    pub dual: &'static str,
}

impl CaseEnding {
    pub fn for_form(&self, form: NounForm) -> &'static str {
        match form {
            NounForm::Singular => self.default,
            NounForm::SoundMasculinePlural => self.plural,
            NounForm::Dual => self.dual,
        }
    }
}

pub static CASE_ENDINGS: Lazy<HashMap<Case, CaseEnding>> = Lazy::new(|| {
    HashMap::from([
        (Case::Nominative, CaseEnding { default: "\u{064F}", plural: "ونَ", dual: "انِ" }),
        (Case::Accusative, CaseEnding { default: "\u{064E}", plural: "ينَ", dual: "ينِ" }),
        (Case::Genitive, CaseEnding { default: "\u{0650}", plural: "ينَ", dual: "ينِ" }),
    ])
});

pub fn case_ending(case: Case) -> Result<&'static CaseEnding> {
    CASE_ENDINGS.get(&case).ok_or_else(|| Error::lookup("case_endings", "", case))
}

// --- Pronouns ------------------------------------------------------------------

/// Diacritized form of an attached pronoun, optionally varying by case.
#[derive(Debug, Clone, Copy)]
pub struct PronounForm {
    pub default: &'static str,
    pub by_case: &'static [(Case, &'static str)],
}

impl PronounForm {
    const fn plain(form: &'static str) -> Self {
        PronounForm { default: form, by_case: &[] }
    }

    pub fn for_case(&self, case: Case) -> &'static str {
        self.by_case.iter().find(|(c, _)| *c == case).map(|(_, form)| *form).unwrap_or(self.default)
    }
}

/// Attached pronouns (الضمائر المتصلة).
pub static PRONOUNS: Lazy<HashMap<&'static str, PronounForm>> = Lazy::new(|| {
    HashMap::from([
        ("ه", PronounForm { default: "هُ", by_case: &[(Case::Genitive, "هِ")] }),
        ("ها", PronounForm::plain("هَا")),
        ("هم", PronounForm::plain("هُمْ")),
        ("هن", PronounForm::plain("هُنَّ")),
        ("ك", PronounForm::plain("كَ")),
        ("كم", PronounForm::plain("كُمْ")),
        ("كن", PronounForm::plain("كُنَّ")),
        ("ي", PronounForm::plain("ي")),
    ])
});

/// Longest pronoun key that `word` ends with.
pub fn pronoun_suffix(word: &str) -> Option<(&'static str, &'static PronounForm)> {
    PRONOUNS
        .iter()
        .filter(|(key, _)| word.ends_with(**key))
        .max_by_key(|(key, _)| key.chars().count())
        .map(|(key, form)| (*key, form))
}

// --- Verbs ---------------------------------------------------------------------

/// Past tense: bare fatha, or sukun before an attached subject suffix.
pub const PAST_DEFAULT: &str = "\u{064E}";
pub const PAST_ATTACHED: &str = "\u{0652}";

pub static PRESENT_MOODS: Lazy<HashMap<Case, &'static str>> = Lazy::new(|| {
    HashMap::from([(Case::Indicative, "\u{064F}"), (Case::Subjunctive, "\u{064E}"), (Case::Jussive, "\u{0652}")])
});

pub fn mood_mark(case: Case) -> Result<&'static str> {
    PRESENT_MOODS.get(&case).copied().ok_or_else(|| Error::lookup("present_moods", "", case))
}

// --- Consistency ---------------------------------------------------------------

/// Cases the classifier can assign to a noun.
pub const NOUN_CASES: [Case; 3] = [Case::Nominative, Case::Accusative, Case::Genitive];

static CONSISTENCY: Lazy<std::result::Result<(), String>> = Lazy::new(check_consistency);

/// Every case the classifier hands out must have an entry in each table the
/// applier may consult for it.
pub fn verify() -> Result<()> {
    match &*CONSISTENCY {
        Ok(()) => Ok(()),
        Err(msg) => Err(Error::Internal(msg.clone())),
    }
}

fn check_consistency() -> std::result::Result<(), String> {
    let connector_cases = CONNECTORS.values().map(|c| c.subject);
    for case in NOUN_CASES.into_iter().chain(connector_cases) {
        if !TANWEEN.contains_key(&case) {
            return Err(format!("tanween table has no entry for case {}", case.label()));
        }
        if !CASE_ENDINGS.contains_key(&case) {
            return Err(format!("case-ending table has no entry for case {}", case.label()));
        }
        for (base, forms) in FIVE_NOUNS.iter() {
            if !forms.contains_key(&case) {
                return Err(format!("five-noun {base} has no form for case {}", case.label()));
            }
        }
    }
    if !PRESENT_MOODS.contains_key(&Case::Indicative) {
        return Err("present-mood table has no indicative mark".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_consistent() {
        assert!(verify().is_ok());
    }

    #[test]
    fn sun_letters_are_the_fourteen() {
        assert_eq!(SUN_LETTERS.chars().count(), 14);
        assert!(is_sun_letter('ش'));
        assert!(!is_sun_letter('ق'));
    }

    #[test]
    fn five_noun_lookup_misses_on_default_case() {
        assert_eq!(five_noun_form("أب", Case::Genitive).unwrap(), "أَبِي");
        let err = five_noun_form("أب", Case::Default).unwrap_err();
        assert!(matches!(err, Error::LookupMiss { table: "five_nouns", .. }));
    }

    #[test]
    fn declined_five_nouns_map_back_to_their_base() {
        assert_eq!(five_noun_base("أبوه"), Some("أب"));
        assert_eq!(five_noun_base("ذا"), Some("ذو"));
        assert_eq!(five_noun_base("فو"), Some("فم"));
        assert_eq!(five_noun_base("كتاب"), None);
    }

    #[test]
    fn exact_five_nouns_are_whole_words() {
        assert_eq!(exact_five_noun("أبو"), Some("أب"));
        assert_eq!(exact_five_noun("ذا"), Some("ذو"));
        assert_eq!(exact_five_noun("أخيه"), Some("أخ"));
        assert_eq!(exact_five_noun("أبوك"), Some("أب"));
        for word in ["أخذ", "حمل", "أبدع", "ذوق", "فمن", "في", "فيه"] {
            assert_eq!(exact_five_noun(word), None, "{word}");
        }
    }

    #[test]
    fn pronoun_suffix_prefers_the_longest_key() {
        assert_eq!(pronoun_suffix("كتابكم").map(|(k, _)| k), Some("كم"));
        assert_eq!(pronoun_suffix("كتابك").map(|(k, _)| k), Some("ك"));
        assert_eq!(pronoun_suffix("بيتها").map(|(k, _)| k), Some("ها"));
        assert!(pronoun_suffix("قلم").is_none());
    }

    #[test]
    fn pronoun_form_varies_with_case() {
        let (_, form) = pronoun_suffix("كتابه").unwrap();
        assert_eq!(form.for_case(Case::Genitive), "هِ");
        assert_eq!(form.for_case(Case::Nominative), "هُ");
    }

    #[test]
    fn connectors_record_subject_case() {
        assert_eq!(CONNECTORS["كان"].subject, Case::Nominative);
        assert_eq!(CONNECTORS["إن"].subject, Case::Accusative);
        assert_eq!(CONNECTORS["لعل"].predicate, Case::Nominative);
    }
}
