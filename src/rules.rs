//! Rule tables, the diacritic alphabet and the ranked classification rules.

pub(crate) mod marks;
pub(crate) mod tables;

pub(crate) mod context {
    pub(crate) mod predicates;
    pub(crate) mod rules;

    #[cfg(test)]
    mod tests;
}
