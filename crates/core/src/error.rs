//! Error types.

use crate::notation::Notation;

/// Errors returned by the guessing entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    /// No interpretation of the input satisfies every constraint.
    #[error("Couldn't parse date")]
    Unparseable,

    /// A resolved code has no directive in the requested notation.
    #[error("no {notation} equivalent for '{token}'")]
    Unrepresentable {
        notation: Notation,
        /// The code in default notation (e.g. `M`)
        token: &'static str,
    },
}
