use thiserror::Error;

/// Errors reported by the fallible entry points of this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Iterating values must start from a finite bound.
    #[error("cannot start an iteration from an infinite bound")]
    UnboundedStart,

    #[error("{0:?} cannot be parsed to an interval")]
    Parse(String),

    /// One of the configured parsing patterns is not a valid regex.
    #[error("invalid bound pattern: {0}")]
    Pattern(#[from] regex::Error),
}
