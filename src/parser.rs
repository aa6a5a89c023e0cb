use crate::container::{BoundedQueue, BoundedStack};
use crate::error::Error;
use crate::postfix::Postfix;
use crate::token::{Op, Token};
use crate::util::FUNCTIONS;

/// Convert a normalized infix expression to postfix notation, using the
/// Shunting-Yard algorithm.
///
/// Tokens are separated by whitespace, which is what
/// [`normalize`](fn.normalize.html) produces.
///
/// # Examples
///
/// ```
/// # use fgraph::parse;
/// let postfix = parse("2 * x + 1").unwrap();
/// assert_eq!(postfix.to_string(), "2 x * 1 +");
/// assert_eq!(postfix.evaluate(3.0), 7.0);
/// ```
///
/// # Errors
///
/// `InvalidNumber` and `UnknownFunction` for words that are not tokens of the
/// language, `UnbalancedParentheses` for mismatched groups, and
/// `MalformedExpression` when operators and operands do not add up to a
/// single value.
pub fn parse(normalized: &str) -> Result<Postfix, Error> {
    let words: Vec<&str> = normalized.split_whitespace().collect();
    // every word gives at most one token, on either side
    let mut output = BoundedQueue::new(words.len());
    let mut operators = BoundedStack::new(words.len());

    for word in words {
        let token = read_token(word)?;
        match token {
            Token::Number(_) | Token::Variable => output.enqueue(token)?,
            Token::Negate | Token::Function(_) | Token::LParen => operators.push(token)?,
            Token::Op(o1) => {
                while let Some(&top) = operators.peek() {
                    if !pops_before(top, o1) {
                        break;
                    }
                    operators.pop();
                    output.enqueue(top)?;
                }
                operators.push(token)?;
            }
            Token::RParen => {
                loop {
                    match operators.pop() {
                        Some(Token::LParen) => break,
                        Some(top) => output.enqueue(top)?,
                        None => return Err(Error::UnbalancedParentheses),
                    }
                }
                // the group was the argument of a function call
                if let Some(&Token::Function(_)) = operators.peek() {
                    if let Some(func) = operators.pop() {
                        output.enqueue(func)?;
                    }
                }
            }
        }
        log::trace!("after {:?}: {} in output, {} held", word, output.len(), operators.len());
    }

    while let Some(token) = operators.pop() {
        match token {
            Token::LParen | Token::RParen => return Err(Error::UnbalancedParentheses),
            other => output.enqueue(other)?,
        }
    }

    Postfix::new(output)
}

/// Check if `top`, on the operators stack, must go to the output before
/// the binary operator `incoming` is pushed. Negation applies to the operand
/// right after it, so it goes first whatever the operator.
fn pops_before(top: Token, incoming: Op) -> bool {
    match top {
        Token::Op(held) => {
            held.precedence() > incoming.precedence()
                || held.precedence() == incoming.precedence() && incoming.is_left_associative()
        }
        Token::Negate => true,
        _ => false,
    }
}

/// Read a single whitespace-delimited word of a normalized expression
fn read_token(word: &str) -> Result<Token, Error> {
    if is_number(word) {
        return word
            .parse()
            .map(Token::Number)
            .map_err(|_| Error::InvalidNumber(word.into()));
    }

    let token = match word {
        "x" => Token::Variable,
        "~" => Token::Negate,
        "(" => Token::LParen,
        ")" => Token::RParen,
        _ => {
            let mut chars = word.chars();
            let op = match (chars.next(), chars.next()) {
                (Some(c), None) => Op::from_char(c),
                _ => None,
            };
            match op {
                Some(op) => Token::Op(op),
                None => match FUNCTIONS.get(word) {
                    Some(&func) => Token::Function(func),
                    None => return Err(Error::UnknownFunction(word.into())),
                },
            }
        }
    };
    Ok(token)
}

/// A word is a numeric literal if it starts with a digit, is a negative
/// number, or carries an exponent marker
fn is_number(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), _) if c.is_ascii_digit() => true,
        (Some('-'), Some(c)) if c.is_ascii_digit() => true,
        _ => word.contains('E'),
    }
}
