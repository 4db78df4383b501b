//! Matching: runs a grammar tree against an input string.
//!
//! Every combinator either succeeds with a result over its own input or
//! fails with that input untouched. Children are run through
//! [`Grammar::parse_with`] so their listeners shape the AST handed upward.

use tracing::trace;

use crate::ast::AstValue;
use crate::match_result::{MatchResult, Mode};

use super::{Grammar, Kind};

impl<A: AstValue> Grammar<A> {
    /// Parse `input` in lenient mode and apply this node's listener.
    pub fn parse<'i>(&self, input: &'i str) -> MatchResult<'i, A> {
        self.parse_with(input, Mode::Lenient)
    }

    /// Parse `input` in the given mode and apply this node's listener.
    pub fn parse_with<'i>(&self, input: &'i str, mode: Mode) -> MatchResult<'i, A> {
        let result = self.match_input(input, mode);
        trace!(
            node = self.kind_name(),
            input_len = input.len(),
            consumed = result.consumed(),
            success = result.is_success(),
            "parse"
        );
        match &self.listener {
            Some(listener) if result.is_success() => {
                let ast = listener(&result);
                result.with_ast(ast)
            }
            _ => result,
        }
    }

    /// Match `input` without applying this node's own listener.
    ///
    /// The AST of a raw match is the structural default: terminal text, a
    /// pair for a sequence, a list for a repetition.
    pub fn match_input<'i>(&self, input: &'i str, mode: Mode) -> MatchResult<'i, A> {
        match &self.kind {
            Kind::Terminal(literal) => match_terminal(literal, input, mode),
            Kind::Empty => MatchResult::split(input, 0, 0, A::text("")),
            Kind::Sequence(first, second) => match_sequence(first, second, input, mode),
            Kind::Choice(first, second) => {
                let result = first.parse_with(input, mode);
                if result.is_success() {
                    result
                } else {
                    second.parse_with(input, mode)
                }
            }
            Kind::Optional(inner) => {
                let result = inner.parse_with(input, mode);
                if result.is_success() {
                    result
                } else {
                    MatchResult::split(input, 0, 0, A::nothing())
                }
            }
            Kind::Repetition { body, min } => match_repetition(body, *min, input),
            Kind::Lookahead { current, forward } => {
                match_guarded(current, forward, true, input, mode)
            }
            Kind::Not { current, forward } => match_guarded(current, forward, false, input, mode),
            Kind::NonTerminal(inner) => inner.match_input(input, mode),
        }
    }
}

fn match_terminal<'i, A: AstValue>(literal: &str, input: &'i str, mode: Mode) -> MatchResult<'i, A> {
    let offset = if mode.is_strict() {
        input.starts_with(literal).then_some(0)
    } else {
        input.find(literal)
    };
    match offset {
        Some(skip) => MatchResult::split(input, skip, literal.len(), A::text(literal)),
        None => MatchResult::failure(input),
    }
}

/// Only the leading edge of a sequence may skip input. Once `first` has
/// consumed something, `second` must start right where it stopped.
fn match_sequence<'i, A: AstValue>(
    first: &Grammar<A>,
    second: &Grammar<A>,
    input: &'i str,
    mode: Mode,
) -> MatchResult<'i, A> {
    let Some((skip, rest, left)) = first.parse_with(input, mode).into_parts() else {
        return MatchResult::failure(input);
    };
    let second_mode = if rest.len() == input.len() {
        mode
    } else {
        Mode::Strict
    };
    let Some((second_skip, remaining, right)) = second.parse_with(rest, second_mode).into_parts()
    else {
        return MatchResult::failure(input);
    };
    let skip = skip + second_skip;
    let len = input.len() - skip - remaining.len();
    MatchResult::split(input, skip, len, A::pair(left, right))
}

/// Greedy and always strict. `body` is never nullable, so each iteration
/// consumes at least one byte.
fn match_repetition<'i, A: AstValue>(body: &Grammar<A>, min: usize, input: &'i str) -> MatchResult<'i, A> {
    let mut rest = input;
    let mut items = Vec::new();
    while let Some((_, remaining, ast)) = body.parse_with(rest, Mode::Strict).into_parts() {
        debug_assert!(remaining.len() < rest.len(), "repetition body consumed nothing");
        rest = remaining;
        items.push(ast);
    }
    if items.len() < min {
        return MatchResult::failure(input);
    }
    MatchResult::split(input, 0, input.len() - rest.len(), A::list(items))
}

/// Shared by positive (`expect = true`) and negative lookahead. The forward
/// check is zero-width and anchored at the end of `current`'s match; its
/// result is discarded.
fn match_guarded<'i, A: AstValue>(
    current: &Grammar<A>,
    forward: &Grammar<A>,
    expect: bool,
    input: &'i str,
    mode: Mode,
) -> MatchResult<'i, A> {
    let result = current.parse_with(input, mode);
    if !result.is_success() {
        return MatchResult::failure(input);
    }
    if forward.parse_with(result.remaining(), Mode::Strict).is_success() == expect {
        result
    } else {
        MatchResult::failure(input)
    }
}
