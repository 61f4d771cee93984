//! Parse errors for named configuration values.

use thiserror::Error;

/// A string failed to parse as one of a closed set of names.
///
/// Carries the configuration field it was parsed for, the list of valid
/// names, and the rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{field}` must be one of {expected} (got \"{given}\")")]
pub struct NameError {
    pub field: &'static str,
    pub expected: &'static str,
    pub given: String,
}

impl NameError {
    pub fn new(field: &'static str, expected: &'static str, given: &str) -> Self {
        Self {
            field,
            expected,
            given: given.to_owned(),
        }
    }
}
