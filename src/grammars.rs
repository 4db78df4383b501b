//! Ready-made grammars built with the construction API.
//!
//! Character classes are wrapped in repetitions wherever a token must start
//! at the current position: repetitions always match strictly, so they
//! anchor a token even when the surrounding parse is lenient.

use crate::ast::Ast;
use crate::error::GrammarError;
use crate::grammar::Grammar;

/// Ordered choice over single characters.
fn one_of(chars: impl IntoIterator<Item = char>) -> Grammar {
    chars
        .into_iter()
        .map(Grammar::terminal)
        .reduce(Grammar::or)
        .unwrap_or_else(Grammar::empty)
}

/// One ASCII digit.
pub fn digit() -> Grammar {
    one_of('0'..='9')
}

/// One ASCII letter or underscore.
pub fn letter() -> Grammar {
    one_of(('a'..='z').chain('A'..='Z').chain(['_']))
}

fn alphanumeric() -> Grammar {
    letter().or(digit())
}

fn matched_text(r: &crate::MatchResult<'_, Ast>) -> Ast {
    Ast::Text(r.matched().to_string())
}

/// A run of digits, as a single text node.
pub fn digits() -> Result<Grammar, GrammarError> {
    Ok(digit().times(1)?.listen(matched_text))
}

/// A letter followed by letters and digits, as a single text node.
pub fn identifier() -> Result<Grammar, GrammarError> {
    Ok(letter()
        .times(1)?
        .then(alphanumeric().times(0)?)
        .listen(matched_text))
}

/// `word` when not immediately followed by an identifier character.
pub fn keyword(word: &str) -> Grammar {
    Grammar::terminal(word).not_before(alphanumeric())
}

/// `[1,22,333]` as a list of number texts.
pub fn number_list() -> Result<Grammar, GrammarError> {
    let tail = Grammar::terminal(",").then(digits()?).times(0)?;
    Ok(Grammar::terminal("[")
        .then(digits()?)
        .then(tail)
        .then("]")
        .listen(|r| match r.ast() {
            Some(ast) => Ast::List(list_items(ast)),
            None => Ast::Nothing,
        }))
}

/// Unpick `(("[" first) [("," n)...]) "]"` into its numbers.
fn list_items(ast: &Ast) -> Vec<Ast> {
    let Ast::Pair { left, .. } = ast else {
        return vec![];
    };
    let Ast::Pair { left: head, right: tail } = left.as_ref() else {
        return vec![];
    };
    let mut items = Vec::new();
    if let Ast::Pair { right: first, .. } = head.as_ref() {
        items.push(first.as_ref().clone());
    }
    if let Ast::List(rest) = tail.as_ref() {
        items.extend(rest.iter().filter_map(|item| match item {
            Ast::Pair { right, .. } => Some(right.as_ref().clone()),
            _ => None,
        }));
    }
    items
}

/// `hello <name>` or `hi <name>`, producing the name.
pub fn greeting() -> Result<Grammar, GrammarError> {
    Ok(keyword("hello")
        .or(keyword("hi"))
        .then(" ")
        .then(identifier()?)
        .listen(|r| match r.ast() {
            Some(Ast::Pair { right, .. }) => right.as_ref().clone(),
            _ => Ast::Nothing,
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstValue, Mode};

    #[test]
    fn digits_are_anchored() {
        let g = digits().unwrap();
        let r = g.parse("123abc");
        assert_eq!(r.matched(), "123");
        assert_eq!(r.into_ast(), Some(Ast::text("123")));
        assert!(!g.parse("a1").is_success());
    }

    #[test]
    fn identifier_starts_with_letter() {
        let g = identifier().unwrap();
        let r = g.parse("abc_12 rest");
        assert_eq!(r.into_ast(), Some(Ast::text("abc_12")));
        assert!(!g.parse("1abc").is_success());
    }

    #[test]
    fn keyword_rejects_longer_identifier() {
        let g = keyword("let");
        for mode in [Mode::Lenient, Mode::Strict] {
            assert!(g.parse_with("let x = 1", mode).is_success());
            assert!(!g.parse_with("letter", mode).is_success());
        }
    }

    #[test]
    fn number_list_collects_numbers() {
        let g = number_list().unwrap();
        let r = g.parse("[1,22,333]!");
        assert_eq!(r.matched(), "[1,22,333]");
        assert_eq!(r.remaining(), "!");
        assert_eq!(
            r.into_ast(),
            Some(Ast::List(vec![
                Ast::text("1"),
                Ast::text("22"),
                Ast::text("333")
            ]))
        );
    }

    #[test]
    fn number_list_single_item() {
        let r = number_list().unwrap().parse("[7]");
        assert_eq!(r.into_ast(), Some(Ast::List(vec![Ast::text("7")])));
    }

    #[test]
    fn number_list_rejects_empty_brackets() {
        assert!(!number_list().unwrap().parse("[]").is_success());
    }

    #[test]
    fn greeting_extracts_name() {
        let g = greeting().unwrap();
        assert_eq!(g.parse("hello world").into_ast(), Some(Ast::text("world")));
        assert_eq!(g.parse("hi there").into_ast(), Some(Ast::text("there")));
        assert!(!g.parse_with("hey you", Mode::Strict).is_success());
    }

    #[test]
    fn greeting_expected_set() {
        let g = greeting().unwrap();
        let expected: Vec<_> = g.expected().literals().collect();
        assert_eq!(expected, vec!["hello", "hi"]);
    }
}
