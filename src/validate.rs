use crate::error::Error;
use crate::token::Function;

/// Characters accepted on their own in a normalized expression
const ALLOWED_CHARS: &str = "0123456789+-*/^~().xE";

/// Check if the normalized expression `normalized` only uses the expression
/// alphabet and known function names, with balanced parenthesis.
///
/// # Examples
///
/// ```
/// # use fgraph::is_valid;
/// assert_eq!(is_valid("sin ( x ) + 2 * x"), true);
/// assert_eq!(is_valid("x + & 2"), false);
/// assert_eq!(is_valid("( x + 1"), false);
/// ```
#[must_use]
pub fn is_valid(normalized: &str) -> bool {
    validate(normalized).is_ok()
}

/// Same as [`is_valid`](fn.is_valid.html), reporting the first problem found.
///
/// # Errors
///
/// `InvalidCharacter` for a symbol outside the alphabet, `UnknownFunction`
/// for a word that is not a function name followed by `(`, whitespace or the
/// end of input, and `UnbalancedParentheses` when a `)` has no matching `(`
/// or a `(` is never closed.
pub fn validate(normalized: &str) -> Result<(), Error> {
    let chars: Vec<char> = normalized.chars().collect();
    let mut depth = 0_i64;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if ALLOWED_CHARS.contains(c) {
            if c == '(' {
                depth += 1;
            } else if c == ')' {
                depth -= 1;
                if depth < 0 {
                    return Err(Error::UnbalancedParentheses);
                }
            }
            i += 1;
        } else if c.is_alphabetic() {
            match function_at(&chars, i) {
                Some(func) => i += func.name().len(),
                None => {
                    let word = chars[i..]
                        .iter()
                        .take_while(|c| c.is_alphabetic())
                        .collect();
                    return Err(Error::UnknownFunction(word));
                }
            }
        } else {
            return Err(Error::InvalidCharacter(c));
        }
    }

    if depth != 0 {
        return Err(Error::UnbalancedParentheses);
    }
    Ok(())
}

/// Check that the normalized expression mentions the variable `x`.
///
/// # Errors
///
/// `MissingVariable` if there is no `x` at all.
pub fn require_variable(normalized: &str) -> Result<(), Error> {
    if normalized.contains('x') {
        Ok(())
    } else {
        Err(Error::MissingVariable)
    }
}

/// Get the function whose name starts at `i` and is followed by `(`,
/// whitespace or the end of input
fn function_at(chars: &[char], i: usize) -> Option<Function> {
    Function::ALL.iter().copied().find(|func| {
        let name = func.name();
        let end = i + name.len();
        let matches = chars.len() >= end && chars[i..end].iter().copied().eq(name.chars());
        matches && chars.get(end).map_or(true, |&c| c == '(' || c.is_whitespace())
    })
}

#[cfg(test)]
mod tests {
    use super::{is_valid, require_variable, validate};
    use crate::error::Error;
    use test_case::test_case;

    #[test_case("2 * x + 1" ; "arithmetic")]
    #[test_case("sin ( x ) + cos ( x )" ; "functions")]
    #[test_case("sinh ( x ) * asin ( x )" ; "names sharing a prefix")]
    #[test_case("sqrt(x)" ; "function directly followed by a parenthesis")]
    #[test_case("abs x" ; "function followed by a space")]
    #[test_case("x ^ 1.5E-3" ; "exponent marker")]
    #[test_case("~ ( x ) - ~ 2" ; "unary minus marker")]
    #[test_case("ln" ; "function at the end of input")]
    fn accepted(normalized: &str) {
        assert_eq!(validate(normalized), Ok(()));
        assert!(is_valid(normalized));
    }

    #[test_case("x + & 2" => Error::InvalidCharacter('&') ; "ampersand")]
    #[test_case("x , 2" => Error::InvalidCharacter(',') ; "comma")]
    #[test_case("x = 2" => Error::InvalidCharacter('=') ; "equal sign")]
    #[test_case("foo ( x )" => Error::UnknownFunction("foo".into()) ; "unknown function")]
    #[test_case("sinx" => Error::UnknownFunction("sinx".into()) ; "name glued to the variable")]
    #[test_case("exp ( x )" => Error::UnknownFunction("exp".into()) ; "exp is rewritten before validation")]
    #[test_case("y + x" => Error::UnknownFunction("y".into()) ; "other variables")]
    #[test_case("( x + 1" => Error::UnbalancedParentheses ; "unclosed group")]
    #[test_case(") x + 1 (" => Error::UnbalancedParentheses ; "close before open")]
    #[test_case("( x ) )" => Error::UnbalancedParentheses ; "extra close")]
    fn rejected(normalized: &str) -> Error {
        assert!(!is_valid(normalized));
        validate(normalized).unwrap_err()
    }

    #[test]
    fn variable() {
        assert_eq!(require_variable("2 * x"), Ok(()));
        assert_eq!(require_variable("3.14159265358979"), Err(Error::MissingVariable));
        assert_eq!(require_variable(""), Err(Error::MissingVariable));
    }
}
