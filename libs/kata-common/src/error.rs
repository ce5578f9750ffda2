use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaffoldError {
    /// Actual output differs from the authored expectation.
    /// Values are kept in their `Debug` rendering so any output type fits.
    #[error("{case}: Expected {expected}, got {actual}")]
    AssertionMismatch {
        case: String,
        expected: String,
        actual: String,
    },

    /// The entry could not produce an output at all (out-of-process entries only)
    #[error("{case}: entry failed: {reason}")]
    Entry { case: String, reason: String },
}

impl ScaffoldError {
    pub fn case(&self) -> &str {
        match self {
            ScaffoldError::AssertionMismatch { case, .. } | ScaffoldError::Entry { case, .. } => case,
        }
    }
}
