//! Trigger scanning (word pre-classification).
//!
//! Before any rule runs, each mark-free word is scanned once for the cheap
//! orthographic features that rules and the applier test repeatedly: the
//! definite article, sun-letter assimilation, the present-tense prefix, the
//! past-tense person suffixes and so on. The result is a [`WordTraits`] mask.
//!
//! The scan is purely lexical. It never consults neighbours; context belongs
//! to the classification rules.

use crate::rules::tables::{
    self, DEFINITE_ARTICLE, PERSON_SUFFIXES, exact_five_noun, five_noun_base, is_present_prefix, is_sun_letter,
    pronoun_suffix,
};

bitflags::bitflags! {
    /// Orthographic features of a single word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WordTraits: u16 {
        /// Starts with "ال".
        const DEFINITE         = 1 << 0;
        /// Definite, longer than two letters, third letter is a sun letter.
        const SUN_ASSIMILATION = 1 << 1;
        /// First letter is one of أ ن ي ت.
        const PRESENT_PREFIX   = 1 << 2;
        /// Ends with a past-tense subject suffix (ت، نا، تم، تن، تما).
        const PERSON_SUFFIX    = 1 << 3;
        /// Ends with ة.
        const TA_MARBUTA       = 1 << 4;
        /// Ends with ا.
        const FINAL_ALIF       = 1 << 5;
        /// Ends with an attached pronoun.
        const PRONOUN_SUFFIX   = 1 << 6;
        /// Starts with one of the five-noun bases.
        const FIVE_NOUN_BASE   = 1 << 7;
        /// Is a five noun as written: base or declined form, optionally with
        /// an attached pronoun.
        const FIVE_NOUN_FORM   = 1 << 8;
    }
}

impl WordTraits {
    /// Scan a mark-free `word`.
    pub fn scan(word: &str) -> Self {
        let mut traits = WordTraits::empty();

        if word.chars().next().is_some_and(is_present_prefix) {
            traits |= WordTraits::PRESENT_PREFIX;
        }

        if word.starts_with(DEFINITE_ARTICLE) {
            traits |= WordTraits::DEFINITE;
            if word.chars().nth(2).is_some_and(is_sun_letter) {
                traits |= WordTraits::SUN_ASSIMILATION;
            }
        }

        if PERSON_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            traits |= WordTraits::PERSON_SUFFIX;
        }

        match word.chars().last() {
            Some('ة') => traits |= WordTraits::TA_MARBUTA,
            Some('ا') => traits |= WordTraits::FINAL_ALIF,
            _ => {}
        }

        if pronoun_suffix(word).is_some() {
            traits |= WordTraits::PRONOUN_SUFFIX;
        }

        if five_noun_base(word).is_some() {
            traits |= WordTraits::FIVE_NOUN_BASE;
        }

        if exact_five_noun(word).is_some() {
            traits |= WordTraits::FIVE_NOUN_FORM;
        }

        log::trace!("[trigger_scan] word={word} traits={traits:?}");
        traits
    }

    /// Past-tense ending test used by the verb heuristic.
    ///
    /// Under the legacy policy the table's empty suffix matches every word.
    pub fn has_past_ending(word: &str, honour_empty: bool) -> bool {
        tables::PAST_ENDINGS.iter().filter(|s| honour_empty || !s.is_empty()).any(|s| word.ends_with(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definite_with_sun_letter() {
        let t = WordTraits::scan("الشمس");
        assert!(t.contains(WordTraits::DEFINITE | WordTraits::SUN_ASSIMILATION));
    }

    #[test]
    fn definite_with_moon_letter() {
        let t = WordTraits::scan("القمر");
        assert!(t.contains(WordTraits::DEFINITE));
        assert!(!t.contains(WordTraits::SUN_ASSIMILATION));
    }

    #[test]
    fn bare_article_has_no_assimilation() {
        let t = WordTraits::scan("ال");
        assert!(t.contains(WordTraits::DEFINITE));
        assert!(!t.contains(WordTraits::SUN_ASSIMILATION));
    }

    #[test]
    fn verb_shapes() {
        assert!(WordTraits::scan("يكتب").contains(WordTraits::PRESENT_PREFIX));
        assert!(WordTraits::scan("كتبنا").contains(WordTraits::PERSON_SUFFIX));
        assert!(!WordTraits::scan("كتب").contains(WordTraits::PERSON_SUFFIX));
    }

    #[test]
    fn endings_and_bases() {
        assert!(WordTraits::scan("مدرسة").contains(WordTraits::TA_MARBUTA));
        assert!(WordTraits::scan("دنيا").contains(WordTraits::FINAL_ALIF));
        assert!(WordTraits::scan("كتابه").contains(WordTraits::PRONOUN_SUFFIX));
        assert!(WordTraits::scan("أبو").contains(WordTraits::FIVE_NOUN_BASE | WordTraits::FIVE_NOUN_FORM));
        let prefix_only = WordTraits::scan("حمل");
        assert!(prefix_only.contains(WordTraits::FIVE_NOUN_BASE));
        assert!(!prefix_only.contains(WordTraits::FIVE_NOUN_FORM));
        assert_eq!(WordTraits::scan(""), WordTraits::empty());
    }

    #[test]
    fn past_ending_policy() {
        assert!(WordTraits::has_past_ending("جاء", true));
        assert!(!WordTraits::has_past_ending("جاء", false));
        assert!(WordTraits::has_past_ending("ذهبوا", false));
    }
}
