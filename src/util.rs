use crate::token::Function;
use hashbrown::HashMap;

/// Significant digits used when a named constant is written out as a literal
pub const CONSTANT_DIGITS: usize = 15;

lazy_static! {
    /// Function names of the expression language, mapped to their identifier
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::<&'static str, Function>::new();
        for &func in Function::ALL.iter() {
            map.insert(func.name(), func);
        }
        map.shrink_to_fit();
        map
    };

    /// Euler's number as it appears in normalized expressions
    pub static ref E_LITERAL: String = constant_literal(std::f64::consts::E);

    /// Pi as it appears in normalized expressions
    pub static ref PI_LITERAL: String = constant_literal(std::f64::consts::PI);
}

/// Render `value` with `CONSTANT_DIGITS` significant digits, for values in
/// `[1, 10)`.
fn constant_literal(value: f64) -> String {
    format!("{:.*}", CONSTANT_DIGITS - 1, value)
}
