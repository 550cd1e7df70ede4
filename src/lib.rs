//! # expr-rewrite
//!
//! A term-rewriting engine that simplifies arithmetic expression trees by
//! repeatedly applying algebraic identities and constant folding until no
//! rule matches.
//!
//! - **Expr**: the immutable expression tree (`Var`, `Const`, `Binary`).
//! - **Rules**: unit structs behind the [`RewriteRule`] trait; `ALL_RULES`
//!   is the single source of truth, in priority order.
//! - **Engine**: post-order bottom-up traversal; substitution results are
//!   re-normalized in full, so cascades collapse in one call.
//!
//! ```
//! use expr_rewrite::{simplify, BinOp, Expr};
//!
//! // (x + 0) * 1  →  x
//! let e = Expr::binary(
//!     BinOp::Mul,
//!     Expr::binary(BinOp::Add, Expr::var("x"), Expr::int(0)),
//!     Expr::int(1),
//! );
//! assert_eq!(simplify(&e), Expr::var("x"));
//! ```

pub mod config;
pub mod engine;
pub mod expr;
pub mod kind;
pub mod rules;
pub mod value;

pub use config::RewriterConfig;
pub use engine::{simplify, RewriteObserver, Rewriter};
pub use expr::Expr;
pub use kind::BinOp;
pub use rules::{rule_by_name, RewriteRule, RuleGroup, RuleSet, ALL_RULES, RULE_COUNT};
pub use value::Value;
