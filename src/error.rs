use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the fgraph crate
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression never mentions the variable `x`
    MissingVariable,
    /// A character outside of the expression alphabet
    InvalidCharacter(char),
    /// An alphabetic run that is not a known function name
    UnknownFunction(String),
    /// Mismatched or unclosed parenthesis
    UnbalancedParentheses,
    /// A numeric literal that does not parse as `f64`
    InvalidNumber(String),
    /// The postfix sequence does not leave exactly one value on the stack
    MalformedExpression,
    /// A bounded container is full
    CapacityExceeded(usize),
    /// Unusable plotting window or sampling step
    InvalidLimits(String),
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::MissingVariable => write!(fmt, "MissingVariable: the expression must contain x"),
            Self::InvalidCharacter(c) => write!(fmt, "InvalidCharacter: '{}'", c),
            Self::UnknownFunction(ref name) => write!(fmt, "UnknownFunction: {}", name),
            Self::UnbalancedParentheses => write!(fmt, "UnbalancedParentheses"),
            Self::InvalidNumber(ref literal) => write!(fmt, "InvalidNumber: {}", literal),
            Self::MalformedExpression => {
                write!(fmt, "MalformedExpression: operands and operators do not match")
            }
            Self::CapacityExceeded(capacity) => {
                write!(fmt, "CapacityExceeded: container holds at most {} items", capacity)
            }
            Self::InvalidLimits(ref message) => write!(fmt, "InvalidLimits: {}", message),
        }
    }
}

impl error::Error for Error {}
