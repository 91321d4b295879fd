//! The diacritic alphabet and mark stripping.

/// A combining Arabic diacritic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiacriticMark {
    Fatha,
    Damma,
    Kasra,
    Sukun,
    Shadda,
    Fathatan,
    Dammatan,
    Kasratan,
}

impl DiacriticMark {
    pub const ALL: [DiacriticMark; 8] = [
        DiacriticMark::Fatha,
        DiacriticMark::Damma,
        DiacriticMark::Kasra,
        DiacriticMark::Sukun,
        DiacriticMark::Shadda,
        DiacriticMark::Fathatan,
        DiacriticMark::Dammatan,
        DiacriticMark::Kasratan,
    ];

    pub const fn as_char(self) -> char {
        match self {
            DiacriticMark::Fathatan => '\u{064B}',
            DiacriticMark::Dammatan => '\u{064C}',
            DiacriticMark::Kasratan => '\u{064D}',
            DiacriticMark::Fatha => '\u{064E}',
            DiacriticMark::Damma => '\u{064F}',
            DiacriticMark::Kasra => '\u{0650}',
            DiacriticMark::Shadda => '\u{0651}',
            DiacriticMark::Sukun => '\u{0652}',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_char() == ch)
    }

    /// Nunation marks (tanween).
    pub fn is_tanween(self) -> bool {
        matches!(self, DiacriticMark::Fathatan | DiacriticMark::Dammatan | DiacriticMark::Kasratan)
    }
}

pub(crate) const FATHA: char = DiacriticMark::Fatha.as_char();
pub(crate) const DAMMA: char = DiacriticMark::Damma.as_char();
pub(crate) const SUKUN: char = DiacriticMark::Sukun.as_char();
pub(crate) const SHADDA: char = DiacriticMark::Shadda.as_char();

/// True for any tashkeel code point: fathatan through sukun, plus the
/// superscript alif.
pub fn is_mark(ch: char) -> bool {
    matches!(ch, '\u{064B}'..='\u{0652}' | '\u{0670}')
}

/// Remove every diacritic from `word`, leaving base letters in order.
pub fn strip_marks(word: &str) -> String {
    word.chars().filter(|&c| !is_mark(c)).collect()
}

/// Drop marks trailing the last base letter.
pub(crate) fn trim_trailing_marks(word: &str) -> &str {
    word.trim_end_matches(is_mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_all_tashkeel() {
        assert_eq!(strip_marks("مُحَمَّدٍ"), "محمد");
        assert_eq!(strip_marks("الْقُرْآنِ"), "القرآن");
    }

    #[test]
    fn strip_keeps_plain_words_and_punctuation() {
        assert_eq!(strip_marks("كتاب"), "كتاب");
        assert_eq!(strip_marks("abc, ١٢"), "abc, ١٢");
    }

    #[test]
    fn every_mark_round_trips_through_its_char() {
        for mark in DiacriticMark::ALL {
            assert!(is_mark(mark.as_char()));
            assert_eq!(DiacriticMark::from_char(mark.as_char()), Some(mark));
        }
        assert_eq!(DiacriticMark::from_char('ب'), None);
    }

    #[test]
    fn trailing_marks_are_trimmed_only_at_the_end() {
        let word = format!("ك{FATHA}تابٌ");
        assert_eq!(trim_trailing_marks(&word), format!("ك{FATHA}تاب"));
    }
}
