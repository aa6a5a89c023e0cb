use std::fmt::{self, Display, Formatter};

/// Possible tokens in a compiled expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// The variable `x`
    Variable,
    /// A binary operator
    Op(Op),
    /// Prefix negation, the `~` marker of the normalized text
    Negate,
    /// Application of a single-argument function
    Function(Function),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(value) => write!(fmt, "{}", value),
            Self::Variable => write!(fmt, "x"),
            Self::Op(op) => write!(fmt, "{}", op),
            Self::Negate => write!(fmt, "~"),
            Self::Function(func) => write!(fmt, "{}", func),
            Self::LParen => write!(fmt, "("),
            Self::RParen => write!(fmt, ")"),
        }
    }
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`, right associative
    Exp,
}

impl Op {
    /// Get the operator for a single-character token
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Exp),
            _ => None,
        }
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Exp => 3,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => true,
            Self::Exp => false,
        }
    }

    /// Apply the operator to `left` and `right`
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Plus => left + right,
            Self::Minus => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Exp => libm::pow(left, right),
        }
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let symbol = match *self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        };
        write!(fmt, "{}", symbol)
    }
}

/// The single-argument functions of the expression language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine
    Sin,
    /// Cosine
    Cos,
    /// Tangent
    Tan,
    /// Arcsine
    Asin,
    /// Arccosine
    Acos,
    /// Arctangent
    Atan,
    /// Hyperbolic sine
    Sinh,
    /// Hyperbolic cosine
    Cosh,
    /// Hyperbolic tangent
    Tanh,
    /// Base 10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    /// Square root
    Sqrt,
    /// Absolute value
    Abs,
}

impl Function {
    /// Every function, in the order the validator tries to match them
    pub const ALL: [Self; 13] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Log,
        Self::Ln,
        Self::Sqrt,
        Self::Abs,
    ];

    /// The name of the function in expressions
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    /// The mathematical definition behind this function
    pub fn definition(self) -> fn(f64) -> f64 {
        match self {
            Self::Sin => f64::sin,
            Self::Cos => f64::cos,
            Self::Tan => f64::tan,
            Self::Asin => f64::asin,
            Self::Acos => f64::acos,
            Self::Atan => f64::atan,
            Self::Sinh => f64::sinh,
            Self::Cosh => f64::cosh,
            Self::Tanh => f64::tanh,
            Self::Log => f64::log10,
            Self::Ln => f64::ln,
            Self::Sqrt => f64::sqrt,
            Self::Abs => f64::abs,
        }
    }

    /// Compute the function at `arg`
    pub fn apply(self, arg: f64) -> f64 {
        (self.definition())(arg)
    }
}

impl Display for Function {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}
