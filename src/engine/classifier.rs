//! Ranked word classification.
//!
//! The classifier holds a rule list sorted by descending priority and walks it
//! for each word; the first rule whose `when` holds decides the category and
//! case. Keeping precedence in data (`ClassRule::priority`) rather than in
//! nested conditionals lets each rule be tested alone and keeps the order
//! auditable:
//!
//! ```text
//! 400  governed by preposition   -> مجرور, جر
//! 300  subject of connector      -> اسم_ناسخ, connector's subject case
//! 200  five noun (exact form)    -> اسم_خمسة, default
//! 100  verb                      -> فعل, مرفوع | ماضي
//!  50  five-noun prefix          -> اسم_خمسة, default
//!   0  unknown                   -> unknown, default
//! ```
//!
//! `has_tanween` and `has_pronoun` are derived afterwards, independently of
//! which rule fired.

use crate::{Case, Category, ClassRule, Neighborhood, Options, WordContext, WordTraits};

/// Outcome of classifying one word: the context plus the evidence behind it.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub context: WordContext,
    pub traits: WordTraits,
    /// Name of the rule that fired.
    pub rule: &'static str,
}

#[derive(Debug)]
pub struct Classifier<'a> {
    rules: Vec<&'a ClassRule>,
    options: &'a Options,
}

impl<'a> Classifier<'a> {
    pub fn new(rules: &'a [ClassRule], options: &'a Options) -> Self {
        let mut rules: Vec<&ClassRule> = rules.iter().collect();
        // Stable sort: equal priorities keep declaration order.
        rules.sort_by_key(|r| std::cmp::Reverse(r.priority));
        Classifier { rules, options }
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    /// Classify a mark-free `word` given its mark-free neighbours.
    pub fn classify(&self, word: &str, previous: Option<&str>, next: Option<&str>) -> Classification {
        let traits = WordTraits::scan(word);
        let hood = Neighborhood { word, previous, next, traits };

        let (rule, (category, case)) = self
            .rules
            .iter()
            .find(|r| (r.when)(&hood, self.options))
            .map(|r| (r.name, (r.produce)(&hood)))
            .unwrap_or(("none", (Category::Unknown, Case::Default)));

        let context = WordContext {
            category,
            case,
            has_tanween: should_have_tanween(category, traits),
            has_pronoun: traits.contains(WordTraits::PRONOUN_SUFFIX),
            ..WordContext::default()
        };

        log::debug!(
            "[classify] word={word} prev={previous:?} rule=\"{rule}\" category={} case={} tanween={} pronoun={}",
            category.label(),
            case.label(),
            context.has_tanween,
            context.has_pronoun
        );

        Classification { context, traits, rule }
    }
}

/// Indefinite nouns governed by a preposition or a connector take nunation.
fn should_have_tanween(category: Category, traits: WordTraits) -> bool {
    matches!(category, Category::Governed | Category::CopulaSubject) && !traits.contains(WordTraits::DEFINITE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::context::rules;

    #[test]
    fn rules_are_evaluated_by_priority() {
        let set = rules::get();
        let options = Options::default();
        let classifier = Classifier::new(&set, &options);
        assert_eq!(
            classifier.rule_names(),
            vec!["governed by preposition", "subject of connector", "five noun", "verb", "five-noun prefix", "unknown"]
        );
    }

    #[test]
    fn empty_rule_set_falls_back_to_unknown() {
        let options = Options::default();
        let classifier = Classifier::new(&[], &options);
        let out = classifier.classify("كتاب", Some("في"), None);
        assert_eq!(out.rule, "none");
        assert_eq!(out.context.category, Category::Unknown);
        assert_eq!(out.context.case, Case::Default);
    }

    #[test]
    fn custom_rule_outranks_defaults() {
        let mut set = rules::get();
        set.push(rule! {
            name: "always accusative",
            priority: 1000,
            when: |_n, _opts| { true },
            prod: |_n| { (Category::CopulaSubject, Case::Accusative) },
        });
        let options = Options::default();
        let classifier = Classifier::new(&set, &options);
        let out = classifier.classify("كتاب", Some("في"), None);
        assert_eq!(out.rule, "always accusative");
        assert_eq!(out.context.case, Case::Accusative);
        assert!(out.context.has_tanween);
    }
}
