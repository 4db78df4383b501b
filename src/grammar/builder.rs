//! Fluent construction of grammar trees.
//!
//! Every operator consumes `self` and returns a new node that owns both
//! operands. Operands may be given as plain strings; they are promoted to
//! terminals through [`IntoGrammar`].

use tracing::debug;

use crate::error::GrammarError;
use crate::match_result::MatchResult;

use super::{Grammar, Kind};

/// Anything usable as a grammar operand.
pub trait IntoGrammar<A> {
    fn into_grammar(self) -> Grammar<A>;
}

impl<A> IntoGrammar<A> for Grammar<A> {
    fn into_grammar(self) -> Grammar<A> {
        self
    }
}

impl<A> IntoGrammar<A> for &str {
    fn into_grammar(self) -> Grammar<A> {
        Grammar::terminal(self)
    }
}

impl<A> IntoGrammar<A> for String {
    fn into_grammar(self) -> Grammar<A> {
        Grammar::terminal(self)
    }
}

impl<A> IntoGrammar<A> for char {
    fn into_grammar(self) -> Grammar<A> {
        Grammar::terminal(self)
    }
}

impl<A> Grammar<A> {
    /// Ordered choice: try `self`, and only if it fails try `alternative`
    /// against the same input.
    pub fn or(self, alternative: impl IntoGrammar<A>) -> Self {
        let alternative = alternative.into_grammar();
        let nullable = self.nullable || alternative.nullable;
        Self::from_kind(Kind::Choice(Box::new(self), Box::new(alternative)), nullable)
    }

    /// Sequence: match `self`, then `next` against what is left.
    pub fn then(self, next: impl IntoGrammar<A>) -> Self {
        let next = next.into_grammar();
        let nullable = self.nullable && next.nullable;
        Self::from_kind(Kind::Sequence(Box::new(self), Box::new(next)), nullable)
    }

    /// Match `self` or nothing.
    pub fn optionally(self) -> Self {
        Self::from_kind(Kind::Optional(Box::new(self)), true)
    }

    /// Positive lookahead: match `self` only when `next` matches right after
    /// it. `next` consumes nothing.
    pub fn before(self, next: impl IntoGrammar<A>) -> Self {
        let nullable = self.nullable;
        Self::from_kind(
            Kind::Lookahead {
                current: Box::new(self),
                forward: Box::new(next.into_grammar()),
            },
            nullable,
        )
    }

    /// Negative lookahead: match `self` only when `next` does not match
    /// right after it.
    pub fn not_before(self, next: impl IntoGrammar<A>) -> Self {
        let nullable = self.nullable;
        Self::from_kind(
            Kind::Not {
                current: Box::new(self),
                forward: Box::new(next.into_grammar()),
            },
            nullable,
        )
    }

    /// Greedy repetition of `self`, succeeding after at least `min` matches.
    ///
    /// Fails when `self` is nullable: such a loop would never end.
    pub fn times(self, min: usize) -> Result<Self, GrammarError> {
        if self.nullable {
            debug!(min, body = ?self, "rejecting repetition over nullable body");
            return Err(GrammarError::NullableRepetition { min });
        }
        Ok(Self::from_kind(
            Kind::Repetition {
                body: Box::new(self),
                min,
            },
            min == 0,
        ))
    }

    /// Wrap `self` in a named production with its own listener. The wrapped
    /// node matches exactly as before, but its listener is bypassed.
    pub fn listen<F>(self, listener: F) -> Self
    where
        F: Fn(&MatchResult<'_, A>) -> A + Send + Sync + 'static,
    {
        let nullable = self.nullable;
        Self::from_kind(Kind::NonTerminal(Box::new(self)), nullable).with_listener(listener)
    }

    /// Replace the listener of this node.
    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(&MatchResult<'_, A>) -> A + Send + Sync + 'static,
    {
        self.listener = Some(std::sync::Arc::new(listener));
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::{Ast, AstValue, Grammar, GrammarError};

    fn t(literal: &str) -> Grammar<Ast> {
        Grammar::terminal(literal)
    }

    #[test]
    fn strings_are_promoted() {
        let g = t("a").then("b").or(String::from("c")).then('d');
        assert_eq!(format!("{g:?}"), r#"((("a" "b") / "c") "d")"#);
    }

    #[test]
    fn nullability_rules() {
        let a = || t("a");
        let e = Grammar::<Ast>::empty;

        assert!(!a().is_nullable());
        assert!(t("").is_nullable());
        assert!(e().is_nullable());

        assert!(!a().then(a()).is_nullable());
        assert!(!a().then(e()).is_nullable());
        assert!(e().then(e()).is_nullable());

        assert!(!a().or(a()).is_nullable());
        assert!(a().or(e()).is_nullable());
        assert!(e().or(a()).is_nullable());

        assert!(a().optionally().is_nullable());

        assert!(a().times(0).unwrap().is_nullable());
        assert!(!a().times(3).unwrap().is_nullable());

        assert!(!a().before(e()).is_nullable());
        assert!(e().before(a()).is_nullable());
        assert!(!a().not_before(e()).is_nullable());
        assert!(e().not_before(a()).is_nullable());

        assert!(!a().listen(|r| Ast::text(r.matched())).is_nullable());
        assert!(e().listen(|_| Ast::Nothing).is_nullable());
    }

    #[test]
    fn repetition_rejects_nullable_body() {
        assert_eq!(
            Grammar::<Ast>::empty().times(0).unwrap_err(),
            GrammarError::NullableRepetition { min: 0 }
        );
        assert!(t("a").optionally().times(2).is_err());
        assert!(t("a").times(0).unwrap().times(1).is_err());
        assert!(t("a").or("").times(1).is_err());
        assert!(t("a").times(1).unwrap().times(1).is_ok());
    }

    #[test]
    fn listener_presence() {
        assert!(!t("a").has_listener());
        assert!(t("a").with_listener(|_| Ast::Nothing).has_listener());
        let g = t("a").listen(|_| Ast::Nothing);
        assert_eq!(g.kind_name(), "non-terminal");
        assert!(g.has_listener());
    }

    #[test]
    fn literal_accessor() {
        assert_eq!(t("ab").literal(), Some("ab"));
        assert_eq!(Grammar::<Ast>::empty().literal(), Some(""));
        assert_eq!(t("a").then("b").literal(), None);
    }
}
