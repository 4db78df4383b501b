//! AST values produced by grammar listeners.

use itertools::Itertools;

/// Constructors the default listeners use to build an AST.
///
/// Implement this for your own tree type to get structural defaults for
/// free, then override individual nodes with
/// [`with_listener`](crate::Grammar::with_listener).
pub trait AstValue: Sized {
    /// Terminal text.
    fn text(text: &str) -> Self;
    /// The two halves of a sequence.
    fn pair(left: Self, right: Self) -> Self;
    /// One value per repetition iteration, in order.
    fn list(items: Vec<Self>) -> Self;
    /// An optional node that did not match.
    fn nothing() -> Self;
}

/// A dynamically shaped AST for grammars without a dedicated tree type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Ast {
    Text(String),
    Pair { left: Box<Ast>, right: Box<Ast> },
    List(Vec<Ast>),
    #[default]
    Nothing,
}

impl Ast {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Ast::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Concatenate the text leaves in left-to-right order.
    pub fn flatten_text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Ast::Text(s) => out.push_str(s),
            Ast::Pair { left, right } => {
                left.push_text(out);
                right.push_text(out);
            }
            Ast::List(items) => items.iter().for_each(|item| item.push_text(out)),
            Ast::Nothing => {}
        }
    }
}

impl AstValue for Ast {
    fn text(text: &str) -> Self {
        Ast::Text(text.to_string())
    }

    fn pair(left: Self, right: Self) -> Self {
        Ast::Pair {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn list(items: Vec<Self>) -> Self {
        Ast::List(items)
    }

    fn nothing() -> Self {
        Ast::Nothing
    }
}

impl AstValue for String {
    fn text(text: &str) -> Self {
        text.to_string()
    }

    fn pair(mut left: Self, right: Self) -> Self {
        left.push_str(&right);
        left
    }

    fn list(items: Vec<Self>) -> Self {
        items.concat()
    }

    fn nothing() -> Self {
        String::new()
    }
}

impl std::fmt::Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ast::Text(s) => write!(f, "{s:?}"),
            Ast::Pair { left, right } => write!(f, "({left} {right})"),
            Ast::List(items) => write!(f, "[{}]", items.iter().join(", ")),
            Ast::Nothing => write!(f, "nothing"),
        }
    }
}
