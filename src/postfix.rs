use crate::container::{BoundedQueue, BoundedStack};
use crate::error::Error;
use crate::token::Token;
use std::fmt::{self, Display, Formatter};

/// A compiled expression, as a sequence of tokens in reverse polish notation.
///
/// The sequence never changes once built: every evaluation consumes a
/// private copy of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Postfix {
    tokens: BoundedQueue<Token>,
}

impl Postfix {
    /// Wrap the output queue of the parser, checking that evaluating it
    /// leaves exactly one value on the stack
    pub(crate) fn new(tokens: BoundedQueue<Token>) -> Result<Self, Error> {
        let mut depth = 0_usize;
        for token in tokens.iter() {
            depth = match *token {
                Token::Number(_) | Token::Variable => depth + 1,
                Token::Negate | Token::Function(_) if depth >= 1 => depth,
                Token::Op(_) if depth >= 2 => depth - 1,
                _ => return Err(Error::MalformedExpression),
            };
        }
        if depth != 1 {
            return Err(Error::MalformedExpression);
        }
        Ok(Self { tokens })
    }

    /// Evaluate the expression for the value `x` of the variable.
    ///
    /// Returns `NaN` if the sequence is malformed. Arithmetic follows the
    /// usual floating point rules, so a division by zero gives an infinity
    /// and `sqrt(-1)` gives `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fgraph::parse;
    /// let postfix = parse("x ^ 2").unwrap();
    /// assert_eq!(postfix.evaluate(3.0), 9.0);
    /// assert_eq!(postfix.evaluate(-4.0), 16.0);
    /// ```
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.run(x).unwrap_or(f64::NAN)
    }

    fn run(&self, x: f64) -> Option<f64> {
        let mut tokens = self.tokens.copy();
        let mut stack: BoundedStack<f64> = BoundedStack::new(tokens.len());

        while let Some(token) = tokens.dequeue() {
            let value = match token {
                Token::Number(value) => value,
                Token::Variable => x,
                Token::Negate => -stack.pop()?,
                Token::Function(func) => func.apply(stack.pop()?),
                Token::Op(op) => {
                    // the right operand is on top
                    let right = stack.pop()?;
                    let left = stack.pop()?;
                    op.apply(left, right)
                }
                Token::LParen | Token::RParen => return None,
            };
            stack.push(value).ok()?;
        }

        let result = stack.pop()?;
        if stack.is_empty() {
            Some(result)
        } else {
            None
        }
    }

    /// Number of tokens in the sequence
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sequence has no token
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens, in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter()
    }
}

impl Display for Postfix {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(fmt, " ")?;
            }
            write!(fmt, "{}", token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Postfix;
    use crate::container::BoundedQueue;
    use crate::error::Error;
    use crate::token::{Function, Op, Token};
    use approx::assert_abs_diff_eq;

    fn sequence(tokens: &[Token]) -> BoundedQueue<Token> {
        let mut queue = BoundedQueue::new(tokens.len());
        for &token in tokens {
            queue.enqueue(token).unwrap();
        }
        queue
    }

    #[test]
    fn operand_order() {
        let minus = Postfix::new(sequence(&[
            Token::Variable,
            Token::Number(1.0),
            Token::Op(Op::Minus),
        ]))
        .unwrap();
        assert_eq!(minus.evaluate(3.0), 2.0);

        let div = Postfix::new(sequence(&[
            Token::Number(1.0),
            Token::Variable,
            Token::Op(Op::Div),
        ]))
        .unwrap();
        assert_eq!(div.evaluate(4.0), 0.25);
        assert!(div.evaluate(0.0).is_infinite());

        let pow = Postfix::new(sequence(&[
            Token::Number(2.0),
            Token::Variable,
            Token::Op(Op::Exp),
        ]))
        .unwrap();
        assert_eq!(pow.evaluate(3.0), 8.0);
    }

    #[test]
    fn functions_and_negation() {
        let postfix = Postfix::new(sequence(&[
            Token::Variable,
            Token::Function(Function::Sin),
            Token::Negate,
        ]))
        .unwrap();
        assert_abs_diff_eq!(
            postfix.evaluate(std::f64::consts::FRAC_PI_2),
            -1.0,
            epsilon = 1e-12
        );

        let postfix = Postfix::new(sequence(&[
            Token::Number(100.0),
            Token::Function(Function::Log),
        ]))
        .unwrap();
        assert_abs_diff_eq!(postfix.evaluate(0.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn evaluation_does_not_consume() {
        let postfix = Postfix::new(sequence(&[
            Token::Variable,
            Token::Variable,
            Token::Op(Op::Mul),
        ]))
        .unwrap();
        let before = postfix.clone();
        assert_eq!(postfix.evaluate(2.0), 4.0);
        assert_eq!(postfix.evaluate(-3.0), 9.0);
        assert_eq!(postfix.evaluate(2.0), 4.0);
        assert_eq!(postfix, before);
        assert_eq!(postfix.len(), 3);
    }

    #[test]
    fn degenerate_arithmetic_is_not_an_error() {
        let postfix = Postfix::new(sequence(&[
            Token::Variable,
            Token::Function(Function::Sqrt),
        ]))
        .unwrap();
        assert!(postfix.evaluate(-1.0).is_nan());
        assert_eq!(postfix.evaluate(16.0), 4.0);
    }

    #[test]
    fn malformed_sequences_are_rejected() {
        let underflow = [Token::Variable, Token::Op(Op::Plus)];
        let leftover = [Token::Variable, Token::Number(1.0)];
        let bare_call = [Token::Function(Function::Abs)];
        let paren = [Token::Variable, Token::LParen];
        for tokens in [&underflow[..], &leftover[..], &bare_call[..], &paren[..], &[][..]].iter() {
            assert_eq!(
                Postfix::new(sequence(tokens)),
                Err(Error::MalformedExpression)
            );
        }
    }

    #[test]
    fn malformed_evaluation_is_nan() {
        // bypass the construction check
        let postfix = Postfix {
            tokens: sequence(&[Token::Variable, Token::Op(Op::Plus)]),
        };
        assert!(postfix.evaluate(1.0).is_nan());

        let postfix = Postfix {
            tokens: sequence(&[Token::Variable, Token::Number(2.0)]),
        };
        assert!(postfix.evaluate(1.0).is_nan());
    }

    #[test]
    fn display() {
        let postfix = Postfix::new(sequence(&[
            Token::Number(0.5),
            Token::Variable,
            Token::Function(Function::Cos),
            Token::Op(Op::Mul),
        ]))
        .unwrap();
        assert_eq!(postfix.to_string(), "0.5 x cos *");
    }
}
