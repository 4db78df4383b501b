//! FIRST-set analysis.

use std::collections::BTreeSet;

use super::{Grammar, Kind};

impl<A> Grammar<A> {
    /// The literals a successful match of this node could begin with.
    ///
    /// The empty literal is never included; use [`Grammar::is_nullable`] to
    /// learn whether the node can match nothing at all.
    pub fn first(&self) -> BTreeSet<&str> {
        let mut set = BTreeSet::new();
        self.collect_first(&mut set);
        set
    }

    fn collect_first<'g>(&'g self, set: &mut BTreeSet<&'g str>) {
        match &self.kind {
            Kind::Terminal(literal) if !literal.is_empty() => {
                set.insert(literal.as_str());
            }
            Kind::Terminal(_) | Kind::Empty => {}
            Kind::Sequence(first, second)
            | Kind::Lookahead {
                current: first,
                forward: second,
            } => {
                first.collect_first(set);
                if first.nullable {
                    second.collect_first(set);
                }
            }
            Kind::Choice(first, second) => {
                first.collect_first(set);
                second.collect_first(set);
            }
            Kind::Optional(inner)
            | Kind::Repetition { body: inner, .. }
            | Kind::Not { current: inner, .. }
            | Kind::NonTerminal(inner) => inner.collect_first(set),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Ast, Grammar};

    fn t(literal: &str) -> Grammar<Ast> {
        Grammar::terminal(literal)
    }

    fn first(g: &Grammar<Ast>) -> Vec<&str> {
        g.first().into_iter().collect()
    }

    #[test]
    fn terminal_first_is_its_literal() {
        assert_eq!(first(&t("ab")), vec!["ab"]);
        assert!(first(&t("")).is_empty());
        assert!(first(&Grammar::<Ast>::empty()).is_empty());
    }

    #[test]
    fn choice_is_union() {
        assert_eq!(first(&t("b").or("a").or("c")), vec!["a", "b", "c"]);
    }

    #[test]
    fn sequence_uses_left_unless_nullable() {
        assert_eq!(first(&t("a").then("b")), vec!["a"]);
        assert_eq!(first(&t("a").optionally().then("b")), vec!["a", "b"]);
        assert_eq!(first(&Grammar::<Ast>::empty().then("b")), vec!["b"]);
    }

    #[test]
    fn decorators_pass_through() {
        let g = t("x").or("y").listen(|r| Ast::Text(r.matched().to_uppercase()));
        assert_eq!(first(&g), vec!["x", "y"]);
        let g = t("x").times(1).unwrap();
        assert_eq!(first(&g), vec!["x"]);
        assert_eq!(first(&t("x").not_before("y")), vec!["x"]);
    }

    #[test]
    fn lookahead_includes_forward_when_current_nullable() {
        assert_eq!(first(&t("a").before("b")), vec!["a"]);
        assert_eq!(first(&t("a").optionally().before("b")), vec!["a", "b"]);
    }
}
