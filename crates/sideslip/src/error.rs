//! Fatal construction and factory errors.
//!
//! Everything here aborts widget construction; there are no retryable
//! errors. At runtime the gesture and transition logic degrades by ignoring
//! out-of-contract input (disabled state, ignored selectors, sub-threshold
//! movement, multi-touch) instead of raising.

use sideslip_core::NameError;
use thiserror::Error;

/// Errors returned by [`crate::create`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A construction option is outside its domain.
    #[error("invalid arguments: `{field}` must be {expected}")]
    InvalidArgument {
        field: &'static str,
        expected: &'static str,
    },

    /// A named value (mode, side, timing function) failed to parse.
    ///
    /// With modes a closed enum, unknown names are only reachable through
    /// the `FromStr` impls; there is no abstract construction path left to
    /// misuse.
    #[error(transparent)]
    UnknownName(#[from] NameError),
}
