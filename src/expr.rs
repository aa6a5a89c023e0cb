use crate::normalize::normalize;
use crate::parser::parse;
use crate::postfix::Postfix;
use crate::validate::{require_variable, validate};
use crate::Error;
use std::fmt::{self, Display, Formatter};

/// Compile the expression in `input`.
///
/// Returns `Ok(expr)` if the expression is valid, or `Err(cause)` if
/// normalizing, validating or parsing it failed.
///
/// # Example
///
/// ```
/// # use fgraph::{compile, evaluate, Error};
/// let expr = compile("2 * x + 1").unwrap();
/// assert_eq!(evaluate(&expr, 3.0), 7.0);
///
/// assert_eq!(compile("x + & 2"), Err(Error::InvalidCharacter('&')));
/// assert_eq!(compile("pi"), Err(Error::MissingVariable));
/// ```
pub fn compile(input: &str) -> Result<Expr, Error> {
    Expr::compile(input)
}

/// Evaluate a compiled expression for the value `x` of its variable.
///
/// The result is `NaN` when the evaluation fails; see
/// [`Postfix::evaluate`](struct.Postfix.html#method.evaluate).
#[must_use]
pub fn evaluate(expr: &Expr, x: f64) -> f64 {
    expr.eval(x)
}

/// A compiled single-variable mathematical expression.
///
/// # Examples
/// ```
/// # use fgraph::Expr;
/// let expr = Expr::compile("sin(x) + 2*x").unwrap();
/// assert_eq!(expr.eval(0.0), 0.0);
///
/// // negation applies to the operand right after it
/// let expr = Expr::compile("-x^2").unwrap();
/// assert_eq!(expr.eval(3.0), 9.0);
/// assert_eq!(Expr::compile("-(x^2)").unwrap().eval(3.0), -9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    postfix: Postfix,
}

impl Expr {
    /// Compile the given mathematical `expression` into an `Expr`.
    ///
    /// # Examples
    /// ```
    /// # use fgraph::Expr;
    /// // A valid expression
    /// assert!(Expr::compile("3 + 5 * x").is_ok());
    /// // an invalid expression
    /// assert!(Expr::compile("3eff + 5 * x").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// `MissingVariable` if the expression does not use `x`, then any error
    /// of [`validate`](fn.validate.html) and [`parse`](fn.parse.html).
    pub fn compile(expression: &str) -> Result<Self, Error> {
        let normalized = normalize(expression);
        log::debug!("normalized {:?} into {:?}", expression, normalized);

        require_variable(&normalized)?;
        validate(&normalized)?;
        let postfix = parse(&normalized)?;
        log::debug!("compiled {:?} into `{}`", expression, postfix);

        Ok(Self { postfix })
    }

    /// Evaluate the expression for the value `x` of its variable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fgraph::Expr;
    /// let expr = Expr::compile("sqrt(x)").unwrap();
    /// assert_eq!(expr.eval(9.0), 3.0);
    /// assert!(expr.eval(-1.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.postfix.evaluate(x)
    }

    /// The postfix sequence this expression was compiled to
    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }
}

impl Display for Expr {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.postfix)
    }
}
