//! Runtime values.
//!
//! MiniLang's runtime universe is a small tagged union. `Int` and
//! `Float` are kept distinct (rather than collapsing to one `f64`) so
//! that `print` can render integers without a decimal point and so `/`
//! can produce a float from two integer operands.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Nil,
}

impl Value {
    /// MiniLang truthiness: `nil` and `false` are falsy, everything
    /// else — including `0`, `0.0`, and `""` — is truthy. This is
    /// structural-presence truthiness, not numeric/string zero-ness.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) | Value::Float(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Nil => "null",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// `==`/`!=` semantics: equal iff same kind and equal value, except
    /// numbers of different representation compare numerically.
    pub fn values_equal(a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Int(x), Value::Int(y)) => x == y,
            (Value::Float(x), Value::Float(y)) => x == y,
            (Value::Int(_), Value::Float(_)) | (Value::Float(_), Value::Int(_)) => {
                a.as_f64() == b.as_f64()
            }
            (Value::Str(x), Value::Str(y)) => x == y,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Nil, Value::Nil) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            // Rust's default f64 Display drops the decimal point for
            // whole-number floats (`2.0` -> "2"), which would make a
            // Float indistinguishable from an Int in `print` output.
            Value::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
            // `null` matches the lexer's keyword spelling for nil.
            Value::Nil => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_zero_and_empty_string_are_truthy() {
        assert!(Value::Int(0).is_truthy());
        assert!(Value::Float(0.0).is_truthy());
        assert!(Value::Str(String::new()).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Nil.is_truthy());
        assert!(Value::Bool(true).is_truthy());
    }

    #[test]
    fn display_integers_have_no_decimal_point() {
        assert_eq!(Value::Int(8).to_string(), "8");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
    }

    #[test]
    fn display_whole_number_float_keeps_its_decimal_point() {
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::Int(2).to_string(), "2");
    }

    #[test]
    fn display_nil_is_null() {
        assert_eq!(Value::Nil.to_string(), "null");
    }

    #[test]
    fn equality_crosses_int_and_float() {
        assert!(Value::values_equal(&Value::Int(3), &Value::Float(3.0)));
        assert!(!Value::values_equal(&Value::Int(3), &Value::Float(3.1)));
        assert!(!Value::values_equal(&Value::Int(1), &Value::Bool(true)));
    }
}
