//! Grammar nodes: the closed set of PEG combinators.
//!
//! A [`Grammar`] is an immutable tree. Each node owns its children and
//! records its nullability when it is built, so a whole tree can be checked
//! before any input is seen.
//!
//! | Node          | Built by                     | Nullable when               |
//! |---------------|------------------------------|-----------------------------|
//! | Terminal      | [`Grammar::terminal`]        | literal is `""`             |
//! | Empty         | [`Grammar::empty`]           | always                      |
//! | Sequence      | [`Grammar::then`]            | both operands               |
//! | Choice        | [`Grammar::or`]              | either operand              |
//! | Optional      | [`Grammar::optionally`]      | always                      |
//! | Repetition    | [`Grammar::times`]           | minimum count is 0          |
//! | Lookahead     | [`Grammar::before`]          | the consuming operand       |
//! | Not           | [`Grammar::not_before`]      | the consuming operand       |
//! | NonTerminal   | [`Grammar::listen`]          | the wrapped node            |

mod builder;
mod first;
mod matcher;


use std::fmt;
use std::sync::Arc;

use crate::match_result::MatchResult;

pub use builder::IntoGrammar;

/// A semantic action: projects a successful match into an AST value.
pub type Listener<A> = Arc<dyn Fn(&MatchResult<'_, A>) -> A + Send + Sync>;

/// A node in a parsing-expression grammar.
///
/// `A` is the AST type listeners produce; it defaults to the dynamic
/// [`Ast`](crate::Ast).
pub struct Grammar<A = crate::Ast> {
    kind: Kind<A>,
    nullable: bool,
    listener: Option<Listener<A>>,
}

pub(crate) enum Kind<A> {
    Terminal(String),
    Empty,
    Sequence(Box<Grammar<A>>, Box<Grammar<A>>),
    Choice(Box<Grammar<A>>, Box<Grammar<A>>),
    Optional(Box<Grammar<A>>),
    Repetition {
        body: Box<Grammar<A>>,
        min: usize,
    },
    Lookahead {
        current: Box<Grammar<A>>,
        forward: Box<Grammar<A>>,
    },
    Not {
        current: Box<Grammar<A>>,
        forward: Box<Grammar<A>>,
    },
    NonTerminal(Box<Grammar<A>>),
}

impl<A> Grammar<A> {
    /// Match `literal` exactly.
    pub fn terminal(literal: impl Into<String>) -> Self {
        let literal = literal.into();
        let nullable = literal.is_empty();
        Self::from_kind(Kind::Terminal(literal), nullable)
    }

    /// Match the empty string: always succeeds, consuming nothing.
    pub fn empty() -> Self {
        Self::from_kind(Kind::Empty, true)
    }

    fn from_kind(kind: Kind<A>, nullable: bool) -> Self {
        Self {
            kind,
            nullable,
            listener: None,
        }
    }

    /// Whether this node can succeed without consuming input.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// The literal of a terminal node.
    pub fn literal(&self) -> Option<&str> {
        match &self.kind {
            Kind::Terminal(literal) => Some(literal),
            Kind::Empty => Some(""),
            _ => None,
        }
    }

    /// Whether a listener other than the default is attached to this node.
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Short name of the combinator at this node.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            Kind::Terminal(_) => "terminal",
            Kind::Empty => "empty",
            Kind::Sequence(..) => "sequence",
            Kind::Choice(..) => "choice",
            Kind::Optional(_) => "optional",
            Kind::Repetition { .. } => "repetition",
            Kind::Lookahead { .. } => "lookahead",
            Kind::Not { .. } => "not",
            Kind::NonTerminal(_) => "non-terminal",
        }
    }
}

impl<A> Clone for Kind<A> {
    fn clone(&self) -> Self {
        match self {
            Kind::Terminal(literal) => Kind::Terminal(literal.clone()),
            Kind::Empty => Kind::Empty,
            Kind::Sequence(a, b) => Kind::Sequence(a.clone(), b.clone()),
            Kind::Choice(a, b) => Kind::Choice(a.clone(), b.clone()),
            Kind::Optional(inner) => Kind::Optional(inner.clone()),
            Kind::Repetition { body, min } => Kind::Repetition {
                body: body.clone(),
                min: *min,
            },
            Kind::Lookahead { current, forward } => Kind::Lookahead {
                current: current.clone(),
                forward: forward.clone(),
            },
            Kind::Not { current, forward } => Kind::Not {
                current: current.clone(),
                forward: forward.clone(),
            },
            Kind::NonTerminal(inner) => Kind::NonTerminal(inner.clone()),
        }
    }
}

impl<A> Clone for Grammar<A> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            nullable: self.nullable,
            listener: self.listener.clone(),
        }
    }
}

impl<A> fmt::Debug for Grammar<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Terminal(literal) => write!(f, "{literal:?}")?,
            Kind::Empty => write!(f, "ε")?,
            Kind::Sequence(a, b) => write!(f, "({a:?} {b:?})")?,
            Kind::Choice(a, b) => write!(f, "({a:?} / {b:?})")?,
            Kind::Optional(inner) => write!(f, "{inner:?}?")?,
            Kind::Repetition { body, min } => write!(f, "{body:?}{{{min},}}")?,
            Kind::Lookahead { current, forward } => write!(f, "{current:?} &{forward:?}")?,
            Kind::Not { current, forward } => write!(f, "{current:?} !{forward:?}")?,
            Kind::NonTerminal(inner) => write!(f, "<{inner:?}>")?,
        }
        if self.listener.is_some() {
            write!(f, "@")?;
        }
        Ok(())
    }
}
