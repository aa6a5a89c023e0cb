//! Rewriting of raw expressions into the space-delimited form read by the
//! validator and the parser.
//!
//! After normalization every operator, parenthesis, function name and
//! numeric literal is a whitespace-separated word, unary minus is the `~`
//! marker, and the constants `e` and `pi` as well as `exp(...)` calls have
//! been replaced by numeric literals.

use crate::util::{E_LITERAL, PI_LITERAL};

/// Normalize the raw expression `input`.
///
/// Constants are replaced where they stand, without any separator: a digit
/// right before `e` or `pi` ends up glued to the literal. `2e` becomes
/// `22.71828182845905` and not a product, and a lowercase `1e-5` is not an
/// exponent. Write `2*e` and `1E-5`.
///
/// # Examples
///
/// ```
/// # use fgraph::normalize;
/// assert_eq!(normalize("sin(x)+2*x"), "sin ( x ) + 2 * x");
/// assert_eq!(normalize("-x^.5"), "~ x ^ 0.5");
/// assert_eq!(normalize("2*pi"), "2 * 3.14159265358979");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(4 * input.len());
    // current parenthesis depth, and the depths at which `exp(` groups opened
    let mut depth = 0_usize;
    let mut exp_groups = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        if let Some(open) = exp_call(&chars, i) {
            push_word(&mut output, "(");
            push_word(&mut output, &E_LITERAL);
            push_word(&mut output, "^");
            push_word(&mut output, "(");
            depth += 1;
            exp_groups.push(depth);
            i = open + 1;
            continue;
        }

        match c {
            c if c.is_whitespace() => push_space(&mut output),
            '-' if is_unary_minus(&chars, i) => push_word(&mut output, "~"),
            '+' | '-' if is_exponent_sign(&chars, i) => output.push(c),
            'e' if is_standalone(&chars, i, 1) => output.push_str(&E_LITERAL),
            'p' if chars.get(i + 1) == Some(&'i') && is_standalone(&chars, i, 2) => {
                output.push_str(&PI_LITERAL);
                i += 1;
            }
            '+' | '-' | '*' | '/' | '^' | '~' => push_word(&mut output, &c.to_string()),
            '(' => {
                depth += 1;
                push_word(&mut output, "(");
            }
            ')' => {
                push_word(&mut output, ")");
                if exp_groups.last() == Some(&depth) {
                    exp_groups.pop();
                    push_word(&mut output, ")");
                }
                depth = depth.saturating_sub(1);
            }
            '.' if i == 0 || !chars[i - 1].is_ascii_digit() => output.push_str("0."),
            other => output.push(other),
        }
        i += 1;
    }

    let trimmed = output.trim_end().len();
    output.truncate(trimmed);
    output
}

/// If an `exp(` call starts at `i`, get the position of its `(`
fn exp_call(chars: &[char], i: usize) -> Option<usize> {
    if i > 0 && chars[i - 1].is_alphabetic() {
        return None;
    }
    if chars.get(i..i + 3)? != &['e', 'x', 'p'][..] {
        return None;
    }
    let open = next_significant(chars, i + 3)?;
    if chars[open] == '(' {
        Some(open)
    } else {
        None
    }
}

/// A `-` is unary when nothing that could be a left operand precedes it, and
/// something that starts an operand follows it.
fn is_unary_minus(chars: &[char], i: usize) -> bool {
    let after_operand = match previous_significant(chars, i) {
        None => false,
        Some(j) => !matches!(chars[j], '+' | '-' | '*' | '/' | '^' | '~' | '('),
    };
    if after_operand {
        return false;
    }
    match next_significant(chars, i + 1) {
        Some(j) => {
            let next = chars[j];
            next == '(' || next == '.' || next.is_alphabetic() || next.is_ascii_digit()
        }
        None => false,
    }
}

/// Check if the sign at `i` belongs to the exponent of a literal like `1E-5`
fn is_exponent_sign(chars: &[char], i: usize) -> bool {
    i >= 2
        && chars[i - 1] == 'E'
        && (chars[i - 2].is_ascii_digit() || chars[i - 2] == '.')
        && chars.get(i + 1).map_or(false, char::is_ascii_digit)
}

/// Check that the identifier of `len` letters starting at `i` is not part of
/// a longer identifier
fn is_standalone(chars: &[char], i: usize, len: usize) -> bool {
    let before = i == 0 || !chars[i - 1].is_alphabetic();
    let after = chars.get(i + len).map_or(true, |c| !c.is_alphabetic());
    before && after
}

fn previous_significant(chars: &[char], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| !chars[j].is_whitespace())
}

fn next_significant(chars: &[char], i: usize) -> Option<usize> {
    (i..chars.len()).find(|&j| !chars[j].is_whitespace())
}

/// Append a single separating space, unless there is one already
fn push_space(output: &mut String) {
    if !output.is_empty() && !output.ends_with(' ') {
        output.push(' ');
    }
}

/// Append `word` with a space on both sides
fn push_word(output: &mut String, word: &str) {
    push_space(output);
    output.push_str(word);
    output.push(' ');
}
