//! Scalar constant values.
//!
//! `Value` is the closed set of scalars a constant node can hold. Folding
//! preserves the representation of its operands: integer-integer stays
//! integer, anything involving a float promotes to float.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A scalar constant: a native integer or a native float.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    /// True when the value compares equal to zero, in either representation.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    /// True when the value compares equal to one, in either representation.
    #[inline]
    pub fn is_one(self) -> bool {
        match self {
            Self::Int(v) => v == 1,
            Self::Float(v) => v == 1.0,
        }
    }

    /// Widen to f64. Exact for floats, lossy for very large integers.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Addition. `None` when integer arithmetic overflows.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a.checked_add(b).map(Self::Int),
            (a, b) => Some(Self::Float(a.as_f64() + b.as_f64())),
        }
    }

    /// Subtraction. `None` when integer arithmetic overflows.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a.checked_sub(b).map(Self::Int),
            (a, b) => Some(Self::Float(a.as_f64() - b.as_f64())),
        }
    }

    /// Multiplication. `None` when integer arithmetic overflows.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a.checked_mul(b).map(Self::Int),
            (a, b) => Some(Self::Float(a.as_f64() * b.as_f64())),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            // Debug formatting keeps the decimal point on round floats.
            Self::Float(v) => write!(f, "{:?}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_one_in_both_representations() {
        assert!(Value::Int(0).is_zero());
        assert!(Value::Float(0.0).is_zero());
        assert!(Value::Float(-0.0).is_zero());
        assert!(!Value::Int(1).is_zero());

        assert!(Value::Int(1).is_one());
        assert!(Value::Float(1.0).is_one());
        assert!(!Value::Float(1.5).is_one());
    }

    #[test]
    fn integer_arithmetic_stays_integer() {
        assert_eq!(Value::Int(2).checked_add(Value::Int(3)), Some(Value::Int(5)));
        assert_eq!(Value::Int(2).checked_sub(Value::Int(3)), Some(Value::Int(-1)));
        assert_eq!(Value::Int(2).checked_mul(Value::Int(3)), Some(Value::Int(6)));
    }

    #[test]
    fn float_operand_promotes_result() {
        assert_eq!(
            Value::Int(2).checked_add(Value::Float(3.0)),
            Some(Value::Float(5.0))
        );
        assert_eq!(
            Value::Float(2.5).checked_mul(Value::Int(2)),
            Some(Value::Float(5.0))
        );
    }

    #[test]
    fn integer_overflow_declines() {
        assert_eq!(Value::Int(i64::MAX).checked_add(Value::Int(1)), None);
        assert_eq!(Value::Int(i64::MIN).checked_sub(Value::Int(1)), None);
        assert_eq!(Value::Int(i64::MAX).checked_mul(Value::Int(2)), None);
    }

    #[test]
    fn representation_is_part_of_equality() {
        assert_ne!(Value::Int(2), Value::Float(2.0));
    }

    #[test]
    fn display_keeps_float_point() {
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::Float(3.0).to_string(), "3.0");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
    }
}
