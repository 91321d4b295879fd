use crate::rules::tables::{CONNECTORS, PREPOSITIONS};
use crate::{Case, Neighborhood, Options, VerbSuffixPolicy, WordTraits};

/// Returns true when the previous word is a preposition.
pub fn after_preposition(n: &Neighborhood<'_>) -> bool {
    n.previous.is_some_and(|p| PREPOSITIONS.contains_key(p))
}

/// Returns true when the previous word is كان or a sister of إن.
pub fn after_connector(n: &Neighborhood<'_>) -> bool {
    n.previous.is_some_and(|p| CONNECTORS.contains_key(p))
}

/// Subject case imposed by the previous connector.
pub fn connector_subject_case(n: &Neighborhood<'_>) -> Case {
    n.previous.and_then(|p| CONNECTORS.get(p)).map(|c| c.subject).unwrap_or_default()
}

/// Returns true when the word is a five noun as written (أبو، ذا، أخيه).
pub fn is_five_noun_form(n: &Neighborhood<'_>) -> bool {
    n.traits.contains(WordTraits::FIVE_NOUN_FORM)
}

/// Returns true when the word starts with one of the five-noun bases.
pub fn is_five_noun(n: &Neighborhood<'_>) -> bool {
    n.traits.contains(WordTraits::FIVE_NOUN_BASE)
}

/// Verb heuristic: a present-tense prefix, otherwise a past-tense ending.
pub fn is_verb(n: &Neighborhood<'_>, options: &Options) -> bool {
    if n.traits.contains(WordTraits::PRESENT_PREFIX) {
        return true;
    }
    let honour_empty = options.verb_suffixes == VerbSuffixPolicy::Legacy;
    WordTraits::has_past_ending(n.word, honour_empty)
}

/// Indicative for a present-tense prefix, past otherwise.
pub fn detect_verb_case(n: &Neighborhood<'_>) -> Case {
    if n.traits.contains(WordTraits::PRESENT_PREFIX) { Case::Indicative } else { Case::Past }
}
