//! Diacritic application.
//!
//! Given a word and its [`WordContext`], the applier rebuilds the word's
//! tashkeel from scratch. Steps run in a fixed order and several of them end
//! the pipeline early:
//!
//! ```text
//! strip marks
//!   ├─ special word?          -> fixed form (done)
//!   ├─ preposition/connector? -> fixed form (done)
//!   ├─ sun-letter assimilation (ال + sun letter)
//!   ├─ five noun?             -> irregular form (done)
//!   ├─ verb?                  -> verb rules (done)
//!   ├─ tanween | case ending
//!   └─ attached pronoun
//! ```
//!
//! Lookups that miss (a case with no table entry) are logged and recovered:
//! the word keeps whatever the earlier steps produced. The applier never
//! fails.

use crate::rules::marks::{DAMMA, FATHA, SHADDA, SUKUN, strip_marks, trim_trailing_marks};
use crate::rules::tables::{
    self, CONNECTORS, DEFINITE_ARTICLE, PAST_ATTACHED, PAST_DEFAULT, PERSON_SUFFIXES, PREPOSITIONS, SPECIAL_WORDS,
};
use crate::{Category, Result, WordContext, WordTraits};

/// Diacritize `word` according to `ctx`.
pub fn apply(word: &str, ctx: &WordContext) -> String {
    let word = strip_marks(word);
    if word.is_empty() {
        return word;
    }

    if let Some(fixed) = SPECIAL_WORDS.get(word.as_str()) {
        return (*fixed).to_string();
    }

    if let Some(fixed) = particle_form(&word) {
        return fixed.to_string();
    }

    let traits = WordTraits::scan(&word);
    let word = if traits.contains(WordTraits::SUN_ASSIMILATION) { assimilate_sun_letter(&word) } else { word };

    match ctx.category {
        Category::FiveNoun => return recover(five_noun(&word, ctx), word),
        Category::Verb => return apply_verb(&word, ctx),
        _ => {}
    }

    let word = if ctx.has_tanween {
        recover(apply_tanween(&word, ctx, traits), word)
    } else {
        recover(apply_case_mark(&word, ctx), word)
    };

    if ctx.has_pronoun { apply_pronoun(&word, ctx) } else { word }
}

/// Keep `fallback` when a table lookup misses.
fn recover(step: Result<String>, fallback: String) -> String {
    match step {
        Ok(word) => word,
        Err(err) => {
            log::debug!("[apply] {err}; keeping \"{fallback}\"");
            fallback
        }
    }
}

/// A preposition or connector carries its own recorded form.
fn particle_form(word: &str) -> Option<&'static str> {
    PREPOSITIONS.get(word).copied().or_else(|| CONNECTORS.get(word).and_then(|c| c.fixed))
}

/// "الشمس" -> "الْشّمس": sukun on the lam, shadda on the sun letter.
fn assimilate_sun_letter(word: &str) -> String {
    let rest = &word[DEFINITE_ARTICLE.len()..];
    let mut chars = rest.chars();
    let Some(sun) = chars.next() else {
        return word.to_string();
    };
    format!("{DEFINITE_ARTICLE}{SUKUN}{sun}{SHADDA}{}", chars.as_str())
}

fn five_noun(word: &str, ctx: &WordContext) -> Result<String> {
    let base = tables::five_noun_base(word).ok_or_else(|| crate::Error::lookup("five_nouns", word, ctx.case))?;
    tables::five_noun_form(base, ctx.case).map(str::to_string)
}

fn apply_tanween(word: &str, ctx: &WordContext, traits: WordTraits) -> Result<String> {
    let forms = tables::tanween(ctx.case)?;
    let out = if traits.contains(WordTraits::TA_MARBUTA) {
        format!("{}{}", drop_last(word), forms.ta_marbuta)
    } else if traits.contains(WordTraits::FINAL_ALIF) {
        format!("{}{}", drop_last(word), forms.alif)
    } else {
        format!("{word}{}", forms.default)
    };
    Ok(out)
}

fn apply_case_mark(word: &str, ctx: &WordContext) -> Result<String> {
    let ending = tables::case_ending(ctx.case)?;
    let out = match ctx.form {
        crate::NounForm::Singular => format!("{word}{}", ending.default),
        form => format!("{}{}", drop_last_n(word, 2), ending.for_form(form)),
    };
    Ok(out)
}

/// Replace the attached pronoun with its vowelled form. Marks added to the
/// last letter by the case step are dropped; the pronoun carries its own vowel.
fn apply_pronoun(word: &str, ctx: &WordContext) -> String {
    let base = trim_trailing_marks(word);
    match tables::pronoun_suffix(base) {
        Some((key, form)) => format!("{}{}", &base[..base.len() - key.len()], form.for_case(ctx.case)),
        None => word.to_string(),
    }
}

/// Verb rules: present tense takes a vowel on the prefix and a mood mark;
/// past tense takes a sukun before a subject suffix or a final fatha.
fn apply_verb(word: &str, ctx: &WordContext) -> String {
    let word = strip_marks(word);
    let traits = WordTraits::scan(&word);

    if traits.contains(WordTraits::PRESENT_PREFIX) {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return word;
        };
        let rest = chars.as_str();
        let mood = match tables::mood_mark(ctx.case) {
            Ok(mark) => mark,
            Err(err) => {
                log::debug!("[apply] {err}; keeping \"{word}\"");
                return word;
            }
        };
        let vowel = if first == 'ي' { DAMMA } else { FATHA };
        return format!("{first}{vowel}{rest}{mood}");
    }

    let suffix = PERSON_SUFFIXES.iter().find(|s| word.ends_with(**s) && word.len() > s.len());
    match suffix {
        Some(suffix) => {
            let stem = &word[..word.len() - suffix.len()];
            format!("{stem}{PAST_ATTACHED}{suffix}")
        }
        None => format!("{word}{PAST_DEFAULT}"),
    }
}

fn drop_last(word: &str) -> &str {
    drop_last_n(word, 1)
}

/// `word` without its last `n` characters.
fn drop_last_n(word: &str, n: usize) -> &str {
    match word.char_indices().rev().nth(n.saturating_sub(1)) {
        Some((idx, _)) if n > 0 => &word[..idx],
        _ if n == 0 => word,
        _ => "",
    }
}
