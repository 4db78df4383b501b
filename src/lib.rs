//! A backtracking parsing-expression-grammar (PEG) engine.
//!
//! Grammars are built by composing small matchers: literal terminals,
//! sequence, ordered choice, optional, repetition and lookahead. Running a
//! grammar yields a [`MatchResult`] splitting the input into matched and
//! remaining text, together with an AST produced by per-node listeners.
//!
//! # Example
//!
//! ```rust
//! use vernac::{Ast, AstValue, Grammar, Mode};
//!
//! let number: Grammar = Grammar::terminal("1").or("2").or("3").times(1)?;
//! let sum = number
//!     .then("+")
//!     .then(Grammar::terminal("1").or("2").or("3").times(1)?)
//!     .listen(|r| Ast::Text(format!("sum of {}", r.matched())));
//!
//! let result = sum.parse("12+3;");
//! assert_eq!(result.matched(), "12+3");
//! assert_eq!(result.remaining(), ";");
//! assert_eq!(result.into_ast(), Some(Ast::text("sum of 12+3")));
//!
//! // Lenient parsing may skip leading input; strict parsing may not.
//! let hello: Grammar = Grammar::terminal("hello");
//! assert!(hello.parse("> hello").is_partial());
//! assert!(!hello.parse_with("> hello", Mode::Strict).is_success());
//! # Ok::<(), vernac::GrammarError>(())
//! ```

mod ast;
pub mod diagnostics;
mod error;
mod grammar;
pub mod grammars;
mod match_result;

pub use ast::{Ast, AstValue};
pub use diagnostics::{Expected, diagnose};
pub use error::GrammarError;
pub use grammar::{Grammar, IntoGrammar, Listener};
pub use match_result::{MatchResult, Mode};
