//! Errors raised while assembling a grammar.

use thiserror::Error;

/// A grammar that cannot be built.
///
/// Matching never produces an error; a failed match is a
/// [`MatchResult::Failure`](crate::MatchResult::Failure).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// The body of a repetition can succeed without consuming input, so the
    /// greedy loop would never terminate.
    #[error("invalid grammar: repetition (at least {min}) over a nullable expression")]
    NullableRepetition { min: usize },
}
