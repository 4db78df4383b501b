//! The outcome of running a grammar node against an input.
//!
//! All text fields are borrowed slices of the input handed to the node, so
//! producing a result never copies text.

/// How a [`Terminal`](crate::Grammar::terminal) may locate its literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// The literal may be found after leading input, which is reported as
    /// skipped in a [`MatchResult::PartialSuccess`].
    #[default]
    Lenient,
    /// The literal must start at offset 0.
    Strict,
}

impl Mode {
    pub fn is_strict(self) -> bool {
        matches!(self, Mode::Strict)
    }
}

/// Result of a match attempt.
///
/// On `Success`, `matched + remaining` is the input. On `PartialSuccess`,
/// `skipped + matched + remaining` is the input. On `Failure`, `remaining`
/// is the untouched input.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult<'i, A> {
    Success {
        matched: &'i str,
        remaining: &'i str,
        ast: A,
    },
    PartialSuccess {
        skipped: &'i str,
        matched: &'i str,
        remaining: &'i str,
        ast: A,
    },
    Failure {
        remaining: &'i str,
    },
}

impl<'i, A> MatchResult<'i, A> {
    /// Build a successful result over `input`, where `skip` bytes were
    /// skipped and the following `len` bytes were matched.
    ///
    /// A zero `skip` yields `Success`, anything else `PartialSuccess`.
    pub(crate) fn split(input: &'i str, skip: usize, len: usize, ast: A) -> Self {
        let (skipped, rest) = input.split_at(skip);
        let (matched, remaining) = rest.split_at(len);
        if skipped.is_empty() {
            MatchResult::Success {
                matched,
                remaining,
                ast,
            }
        } else {
            MatchResult::PartialSuccess {
                skipped,
                matched,
                remaining,
                ast,
            }
        }
    }

    pub fn failure(input: &'i str) -> Self {
        MatchResult::Failure { remaining: input }
    }

    /// True for both `Success` and `PartialSuccess`.
    pub fn is_success(&self) -> bool {
        !matches!(self, MatchResult::Failure { .. })
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, MatchResult::PartialSuccess { .. })
    }

    pub fn matched(&self) -> &'i str {
        match self {
            MatchResult::Success { matched, .. } | MatchResult::PartialSuccess { matched, .. } => {
                matched
            }
            MatchResult::Failure { .. } => "",
        }
    }

    pub fn remaining(&self) -> &'i str {
        match self {
            MatchResult::Success { remaining, .. }
            | MatchResult::PartialSuccess { remaining, .. }
            | MatchResult::Failure { remaining } => remaining,
        }
    }

    /// Leading input passed over before the match began. Empty unless partial.
    pub fn skipped(&self) -> &'i str {
        match self {
            MatchResult::PartialSuccess { skipped, .. } => skipped,
            _ => "",
        }
    }

    /// Bytes of input used up by this result (skipped plus matched).
    pub fn consumed(&self) -> usize {
        self.skipped().len() + self.matched().len()
    }

    pub fn ast(&self) -> Option<&A> {
        match self {
            MatchResult::Success { ast, .. } | MatchResult::PartialSuccess { ast, .. } => Some(ast),
            MatchResult::Failure { .. } => None,
        }
    }

    pub fn into_ast(self) -> Option<A> {
        match self {
            MatchResult::Success { ast, .. } | MatchResult::PartialSuccess { ast, .. } => Some(ast),
            MatchResult::Failure { .. } => None,
        }
    }

    /// Decompose a successful result into `(skipped bytes, remaining, ast)`.
    pub(crate) fn into_parts(self) -> Option<(usize, &'i str, A)> {
        match self {
            MatchResult::Success { remaining, ast, .. } => Some((0, remaining, ast)),
            MatchResult::PartialSuccess {
                skipped,
                remaining,
                ast,
                ..
            } => Some((skipped.len(), remaining, ast)),
            MatchResult::Failure { .. } => None,
        }
    }

    /// Replace the AST of a successful result. Failures pass through.
    pub fn with_ast(self, ast: A) -> Self {
        match self {
            MatchResult::Success {
                matched, remaining, ..
            } => MatchResult::Success {
                matched,
                remaining,
                ast,
            },
            MatchResult::PartialSuccess {
                skipped,
                matched,
                remaining,
                ..
            } => MatchResult::PartialSuccess {
                skipped,
                matched,
                remaining,
                ast,
            },
            failure @ MatchResult::Failure { .. } => failure,
        }
    }
}
