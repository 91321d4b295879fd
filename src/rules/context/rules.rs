use crate::rules::context::predicates::{
    after_connector, after_preposition, connector_subject_case, detect_verb_case, is_five_noun, is_five_noun_form,
    is_verb,
};
use crate::{Case, Category, ClassRule};

// Rules, highest priority first. The classifier re-sorts by priority, so the
// order here is for the reader only.

/// A word right after a preposition is governed and takes the genitive.
fn rule_after_preposition() -> ClassRule {
    rule! {
        name: "governed by preposition",
        priority: 400,
        when: |n, _opts| { after_preposition(n) },
        prod: |_n| { (Category::Governed, Case::Genitive) },
    }
}

/// A word right after كان or a sister of إن is that particle's subject.
fn rule_after_connector() -> ClassRule {
    rule! {
        name: "subject of connector",
        priority: 300,
        when: |n, _opts| { after_connector(n) },
        prod: |n| { (Category::CopulaSubject, connector_subject_case(n)) },
    }
}

/// One of the five nouns as written. Its case is not derived here.
fn rule_five_noun() -> ClassRule {
    rule! {
        name: "five noun",
        priority: 200,
        when: |n, _opts| { is_five_noun_form(n) },
        prod: |_n| { (Category::FiveNoun, Case::Default) },
    }
}

fn rule_verb() -> ClassRule {
    rule! {
        name: "verb",
        priority: 100,
        when: |n, opts| { is_verb(n, opts) },
        prod: |n| { (Category::Verb, detect_verb_case(n)) },
    }
}

/// A word merely starting with a five-noun base; only reached when the verb
/// heuristic declines it.
fn rule_five_noun_prefix() -> ClassRule {
    rule! {
        name: "five-noun prefix",
        priority: 50,
        when: |n, _opts| { is_five_noun(n) },
        prod: |_n| { (Category::FiveNoun, Case::Default) },
    }
}

fn rule_fallback() -> ClassRule {
    rule! {
        name: "unknown",
        when: |_n, _opts| { true },
        prod: |_n| { (Category::Unknown, Case::Default) },
    }
}

/// The default ranked rule set.
pub fn get() -> Vec<ClassRule> {
    vec![
        rule_after_preposition(),
        rule_after_connector(),
        rule_five_noun(),
        rule_verb(),
        rule_five_noun_prefix(),
        rule_fallback(),
    ]
}
