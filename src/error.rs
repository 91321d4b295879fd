use std::path::PathBuf;

use thiserror::Error;

use crate::Case;

#[derive(Debug, Error)]
pub enum Error {
    /// A rule table has no entry for the requested key/case. Recovered
    /// locally by the applier; never surfaced by `process_text`.
    #[error("no entry in {table} for '{key}' under case {case}")]
    LookupMiss { table: &'static str, key: String, case: &'static str },

    /// Persisting a report failed.
    #[error("failed to write report to {}: {source}", .path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub(crate) fn lookup(table: &'static str, key: &str, case: Case) -> Self {
        Error::LookupMiss { table, key: key.to_string(), case: case.label() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
