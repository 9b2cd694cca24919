//! Template input values
//!
//! Templates receive loosely structured parameters: scalars, nested
//! sequences, arrays and the odd foreign object. `Value` closes that set into
//! a sum type so the validators dispatch on a tag instead of probing for
//! behaviour at runtime.

use ndarray::{Array, ArrayD, Dimension};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A template input
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex(Complex64),
    Str(String),
    /// Ordered, possibly nested sequence
    List(Vec<Value>),
    /// Array-like value that knows its own shape
    Array(ArrayD<f64>),
    /// Anything else (callables, type objects, maps), tagged with a type name
    Object(String),
}

/// The kind of a [`Value`], used for exact type checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    None,
    Bool,
    Int,
    Float,
    Complex,
    Str,
    List,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Complex => "complex",
            Self::Str => "str",
            Self::List => "list",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Create an opaque object value
    pub fn object<S: Into<String>>(type_name: S) -> Self {
        Self::Object(type_name.into())
    }

    /// Kind tag of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::None => ValueKind::None,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Complex(_) => ValueKind::Complex,
            Self::Str(_) => ValueKind::Str,
            Self::List(_) => ValueKind::List,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Whether this is a numeric scalar (booleans count, as they do for arithmetic)
    pub fn is_numeric_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Complex(_)
        )
    }

    /// Collapse integer-like floats to `Int`, so `2.0` and `2` compare equal
    pub fn normalized(self) -> Self {
        match self {
            Self::Float(x) => float_to_exact_integer(x).map_or(Self::Float(x), Self::Int),
            other => other,
        }
    }
}

/// Convert an integer-like value to an exact integer
///
/// Integers pass through; finite floats with no fractional part are
/// converted. Every other value, including booleans, yields `None`.
pub fn try_to_exact_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::Float(x) => float_to_exact_integer(*x),
        _ => None,
    }
}

pub(crate) fn float_to_exact_integer(x: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or beyond it overflows i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if x.is_finite() && x.fract() == 0.0 && x >= -LIMIT && x < LIMIT {
        Some(x as i64)
    } else {
        None
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(b) => f.write_str(if *b { "True" } else { "False" }),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{:?}", x),
            Self::Complex(c) => write!(f, "({}{:+}j)", c.re, c.im),
            Self::Str(s) => write!(f, "'{}'", s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            },
            Self::Array(a) => write!(f, "array(shape={:?})", a.shape()),
            Self::Object(name) => write!(f, "<{}>", name),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

/// Values past `i64::MAX` become floats, which are never integer-like there
impl From<usize> for Value {
    fn from(i: usize) -> Self {
        i64::try_from(i).map_or(Self::Float(i as f64), Self::Int)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<Complex64> for Value {
    fn from(c: Complex64) -> Self {
        Self::Complex(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<D: Dimension> From<Array<f64, D>> for Value {
    fn from(array: Array<f64, D>) -> Self {
        Self::Array(array.into_dyn())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::None,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            },
            serde_json::Value::Object(_) => Self::Object("dict".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_exact_integer_conversion() {
        assert_eq!(try_to_exact_integer(&Value::Int(-3)), Some(-3));
        assert_eq!(try_to_exact_integer(&Value::Float(4.0)), Some(4));
        assert_eq!(try_to_exact_integer(&Value::Float(-0.0)), Some(0));
        assert_eq!(try_to_exact_integer(&Value::Float(1.2)), None);
        assert_eq!(try_to_exact_integer(&Value::Float(3.0001)), None);
        assert_eq!(try_to_exact_integer(&Value::Float(f64::NAN)), None);
        assert_eq!(try_to_exact_integer(&Value::Float(f64::INFINITY)), None);
        assert_eq!(try_to_exact_integer(&Value::Float(1e300)), None);
        assert_eq!(try_to_exact_integer(&Value::Bool(true)), None);
        assert_eq!(try_to_exact_integer(&Value::from("a")), None);
    }

    #[test]
    fn test_large_usize_is_not_wrapped() {
        assert_eq!(Value::from(7_usize), Value::Int(7));
        let huge = Value::from(usize::MAX);
        assert_eq!(huge.kind(), ValueKind::Float);
        assert_eq!(try_to_exact_integer(&huge), None);
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Value::Float(2.0).normalized(), Value::Int(2));
        assert_eq!(Value::Float(2.5).normalized(), Value::Float(2.5));
        assert_eq!(Value::from("a").normalized(), Value::from("a"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Value::None.kind(), ValueKind::None);
        assert_eq!(Value::from(1).kind(), ValueKind::Int);
        assert_eq!(Value::from(vec!["a"]).kind(), ValueKind::List);
        assert_eq!(Value::from(array![1.0, 2.0]).kind(), ValueKind::Array);
        assert_eq!(Value::object("function").kind(), ValueKind::Object);
        assert!(Value::from(Complex64::new(1.0, 0.0)).is_numeric_scalar());
        assert!(!Value::from("a").is_numeric_scalar());
    }

    #[test]
    fn test_from_json() {
        let json: serde_json::Value =
            serde_json::from_str(r#"[1, 2.5, null, "a", true, {"k": 1}]"#).unwrap();
        let value = Value::from(json);
        assert_eq!(
            value,
            Value::List(vec![
                Value::Int(1),
                Value::Float(2.5),
                Value::None,
                Value::from("a"),
                Value::Bool(true),
                Value::object("dict"),
            ])
        );
    }

    #[test]
    fn test_display() {
        let value = Value::from(vec![Value::Int(1), Value::Float(2.0), Value::None]);
        assert_eq!(value.to_string(), "[1, 2.0, None]");
        assert_eq!(Value::from("a").to_string(), "'a'");
        assert_eq!(Value::from(Complex64::new(1.0, -2.0)).to_string(), "(1-2j)");
    }
}
