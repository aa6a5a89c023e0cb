#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! fgraph, a crate compiling single-variable mathematical expressions for
//! function graphs.
//!
//! This crate turns a mathematical expression of the variable `x`, embedded
//! in a string, into a postfix sequence that can be evaluated cheaply for
//! many values of `x`. The easiest way to use this crate is with the
//! [`compile`](fn.compile.html) and [`evaluate`](fn.evaluate.html)
//! functions:
//!
//! ```
//! let expr = fgraph::compile("sin(x) + 2*x").unwrap();
//! assert_eq!(fgraph::evaluate(&expr, 0.0), 0.0);
//! assert_eq!(fgraph::evaluate(&expr, 1.0), 1_f64.sin() + 2.0);
//! ```
//!
//! A compiled [`Expr`](struct.Expr.html) is never modified by evaluation, so
//! the same expression can be sampled across a whole domain. The
//! [`Sampler`](struct.Sampler.html) does so at a fixed step, and tells which
//! points can be drawn inside the plotting window:
//!
//! ```
//! use fgraph::{Expr, Limits, Sampler};
//!
//! let expr = Expr::compile("sqrt(x)").unwrap();
//! let limits: Limits = "-1:4:-1:3".parse().unwrap();
//! let limits = limits.with_step(1.0).unwrap();
//!
//! let drawn: Vec<f64> = Sampler::new(&expr, limits)
//!     .filter(|sample| sample.is_pen_down())
//!     .map(|sample| sample.y)
//!     .collect();
//! assert_eq!(drawn, vec![0.0, 1.0, 2.0_f64.sqrt(), 3.0_f64.sqrt(), 2.0]);
//! ```
//!
//! # Language definition
//!
//! An expression can contain the following elements:
//!
//! - the variable `x`, which must appear at least once;
//! - float literal values: `12.456`, `.5`, `4.5E-3`, ...;
//! - the constants `e` and `pi`;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction,
//!   `*` for multiplication, `/` for division and `^` for exponentiation,
//!   and the prefix `-` for negation;
//! - function call: `sin(x)`, `atan(2 * x)`. The following function are
//!   accessible: `sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `sinh`, `cosh`,
//!   `tanh`, `sqrt`, `abs`, `ln` (natural logarithm), `log` (base 10
//!   logarithm) and `exp`.
//!
//! Any other symbol is forbidden in the input, and whitespace is not
//! significant.
//!
//! The binary operators obey the usual relations of associativity and
//! precedence. Negation applies to the operand right after it, so it binds
//! tighter than every binary operator: `-x^2` is `(-x)^2`, write `-(x^2)` for
//! the opposite of the square. Evaluation uses `f64`: dividing by zero gives an
//! infinity and functions outside of their domain give `NaN`.
//!
//! # Technical details
//!
//! Compilation is a small pipeline: the expression is first normalized into
//! space-separated words (constants and `exp` calls are rewritten, unary
//! minus is marked), then validated, then converted to postfix notation with
//! the Shunting-Yard algorithm. Evaluation runs the postfix sequence on a
//! value stack.

#[macro_use]
extern crate lazy_static;

mod container;
mod error;
mod expr;
mod limits;
mod normalize;
mod parser;
mod postfix;
mod sample;
mod token;
mod util;
mod validate;

pub use container::{BoundedQueue, BoundedStack};
pub use error::Error;
pub use expr::{compile, evaluate, Expr};
pub use limits::{Limits, DEFAULT_STEP};
pub use normalize::normalize;
pub use parser::parse;
pub use postfix::Postfix;
pub use sample::{Evaluate, Pen, Sample, Sampler};
pub use token::{Function, Op, Token};
pub use util::FUNCTIONS;
pub use validate::{is_valid, require_variable, validate};
