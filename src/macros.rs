#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a ranked classification rule.
///
/// ```ignore
/// rule! {
///     name: "after preposition",
///     priority: 400,
///     when: |n, _opts| { after_preposition(n) },
///     prod: |_n| { (Category::Governed, Case::Genitive) },
/// }
/// ```
#[macro_export]
macro_rules! rule {
    (
        name: $name:expr
        $(, priority: $priority:expr)?
        , when: |$n:ident, $opts:ident| $when:block
        , prod: |$pn:ident| $prod:block
        $(,)?
    ) => {{
        $crate::ClassRule {
            name: $name,
            priority: { 0 $(+ $priority)? },
            when: |$n, $opts| $when,
            produce: |$pn| $prod,
        }
    }};
}
