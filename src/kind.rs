//! Binary operator enumeration.
//!
//! The operator set is closed: rule predicates match on it exhaustively,
//! so adding an operator is a compile-time affair.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// The binary operators the rewrite engine understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
}

impl BinOp {
    /// Infix symbol of the operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
        }
    }

    /// Fold two constant operands.
    ///
    /// `None` when the arithmetic declines (integer overflow); the caller
    /// keeps the original node in that case.
    pub fn fold(self, lhs: Value, rhs: Value) -> Option<Value> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
            Self::Mul => lhs.checked_mul(rhs),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
