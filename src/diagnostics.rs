//! "Expected ..." diagnostics derived from FIRST sets.
//!
//! The engine itself never reports errors for a failed match. This module
//! turns a node's FIRST set into the minimal message a caller can show.

use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

use crate::ast::AstValue;
use crate::grammar::Grammar;

/// The literals a grammar was prepared to accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expected<'g> {
    literals: BTreeSet<&'g str>,
}

impl<'g> Expected<'g> {
    pub fn literals(&self) -> impl Iterator<Item = &'g str> + '_ {
        self.literals.iter().copied()
    }

    pub fn contains(&self, literal: &str) -> bool {
        self.literals.contains(literal)
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }
}

impl fmt::Display for Expected<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = self.literals().map(|l| format!("{l:?}")).join(", ");
        match self.literals.len() {
            0 => write!(f, "expected nothing"),
            1 => write!(f, "expected {quoted}"),
            _ => write!(f, "expected one of {quoted}"),
        }
    }
}

impl<A> Grammar<A> {
    /// The literals this grammar could start with.
    pub fn expected(&self) -> Expected<'_> {
        Expected {
            literals: self.first(),
        }
    }
}

/// Parse `input` and, only if the parse fails, report what was expected.
pub fn diagnose<'g, A: AstValue>(grammar: &'g Grammar<A>, input: &str) -> Option<Expected<'g>> {
    if grammar.parse(input).is_success() {
        None
    } else {
        Some(grammar.expected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ast;

    fn t(literal: &str) -> Grammar<Ast> {
        Grammar::terminal(literal)
    }

    #[test]
    fn expected_single_literal() {
        let g = t("let");
        assert_eq!(g.expected().to_string(), r#"expected "let""#);
    }

    #[test]
    fn expected_one_of() {
        let g = t("b").or("a").then("c");
        let e = g.expected();
        assert_eq!(e.len(), 2);
        assert!(e.contains("a"));
        assert!(!e.contains("c"));
        assert_eq!(e.to_string(), r#"expected one of "a", "b""#);
    }

    #[test]
    fn expected_nothing_for_empty() {
        let g = Grammar::<Ast>::empty();
        assert!(g.expected().is_empty());
        assert_eq!(g.expected().to_string(), "expected nothing");
    }

    #[test]
    fn diagnose_only_on_failure() {
        let g = t("x").or("y");
        assert_eq!(diagnose(&g, "..y"), None);
        let e = diagnose(&g, "abc").expect("parse should fail");
        assert_eq!(e.literals().collect::<Vec<_>>(), vec!["x", "y"]);
        assert!(diagnose(&g, "y").is_none());
        assert_eq!(diagnose(&g.clone().optionally(), "abc"), None);
    }
}
