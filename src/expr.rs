//! Expression AST.
//!
//! This module defines the recursive expression tree the rewrite engine
//! operates on. Trees are immutable values: the engine never mutates a node
//! in place, it builds replacements and lets the old subtree drop.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::BinOp;
use crate::value::Value;

/// A recursive arithmetic expression tree.
///
/// Each interior node exclusively owns its two children; the structure is a
/// strict tree — no sharing, no cycles. Structural equality is value-based
/// and derived, which is what no-op detection in the engine's tests relies
/// on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Variable reference, identified by name only.
    Var(String),
    /// Numeric constant.
    Const(Value),
    /// Binary operation over two owned children.
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Build a variable reference.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Build an integer constant.
    pub fn int(v: i64) -> Self {
        Self::Const(Value::Int(v))
    }

    /// Build a float constant.
    pub fn float(v: f64) -> Self {
        Self::Const(Value::Float(v))
    }

    /// Build a binary operation node.
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Self::Binary(op, Box::new(left), Box::new(right))
    }

    /// True for `Var` and `Const` nodes.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Binary(..))
    }

    /// The constant held by this node, if it is one.
    #[inline]
    pub fn as_const(&self) -> Option<Value> {
        match self {
            Self::Const(v) => Some(*v),
            _ => None,
        }
    }

    /// Count total nodes in the expression (iterative).
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut stack: Vec<&Expr> = vec![self];
        let mut count = 0;

        while let Some(node) = stack.pop() {
            count += 1;
            match node {
                Self::Var(_) | Self::Const(_) => {}
                Self::Binary(_, left, right) => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        count
    }

    /// Compute the depth of this expression tree (iterative).
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut stack: Vec<(&Expr, usize)> = vec![(self, 1)];
        let mut max_depth = 0;

        while let Some((node, d)) = stack.pop() {
            match node {
                Self::Var(_) | Self::Const(_) => {
                    max_depth = max_depth.max(d);
                }
                Self::Binary(_, left, right) => {
                    stack.push((left, d + 1));
                    stack.push((right, d + 1));
                }
            }
        }
        max_depth
    }
}

/// Infix rendering for diagnostics. Nested operations are parenthesized:
/// `(x + 0) * 1`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn operand(f: &mut fmt::Formatter<'_>, e: &Expr) -> fmt::Result {
            if e.is_leaf() {
                write!(f, "{}", e)
            } else {
                write!(f, "({})", e)
            }
        }

        match self {
            Self::Var(name) => f.write_str(name),
            Self::Const(v) => write!(f, "{}", v),
            Self::Binary(op, left, right) => {
                operand(f, left)?;
                write!(f, " {} ", op.symbol())?;
                operand(f, right)
            }
        }
    }
}
