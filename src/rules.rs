//! Concrete rewrite rules and the ordered rule set.
//!
//! Each rule is a Zero-Sized Type implementing [`RewriteRule`]. The
//! `ALL_RULES` array is the single source of truth for the stock rules, in
//! priority order: identity eliminations first, constant folding last. At
//! any node the first matching rule wins and later rules are never
//! consulted.

use crate::expr::Expr;
use crate::kind::BinOp;

/// Which group a rule belongs to, for configuration filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleGroup {
    /// Identity eliminations: `x + 0`, `x - 0`, `x * 1`.
    Identity,
    /// Constant folding over two constant operands.
    Folding,
}

/// One algebraic simplification: a match predicate plus a transform.
///
/// Both methods are only ever invoked on binary nodes — the engine
/// destructures the node and passes its parts. `matches` is a pure
/// predicate with no side effects. `apply` must only be called after
/// `matches` returned true; calling it otherwise is a contract violation
/// and is checked with `debug_assert!`.
pub trait RewriteRule: Send + Sync {
    /// Registered name, used for lookup and trace output.
    fn name(&self) -> &'static str;

    /// The group this rule belongs to.
    fn group(&self) -> RuleGroup;

    /// Pure predicate over a binary node.
    fn matches(&self, op: BinOp, left: &Expr, right: &Expr) -> bool;

    /// Transform a matching node.
    ///
    /// Returns an existing child (cloned) or a freshly built node; the
    /// input is never mutated.
    fn apply(&self, op: BinOp, left: &Expr, right: &Expr) -> Expr;
}

#[inline]
fn is_zero_const(e: &Expr) -> bool {
    matches!(e, Expr::Const(v) if v.is_zero())
}

#[inline]
fn is_one_const(e: &Expr) -> bool {
    matches!(e, Expr::Const(v) if v.is_one())
}

/// `x + 0 → x` and `0 + x → x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddZero;

impl RewriteRule for AddZero {
    fn name(&self) -> &'static str {
        "add-zero"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Identity
    }

    fn matches(&self, op: BinOp, left: &Expr, right: &Expr) -> bool {
        op == BinOp::Add && (is_zero_const(right) || is_zero_const(left))
    }

    fn apply(&self, op: BinOp, left: &Expr, right: &Expr) -> Expr {
        debug_assert!(self.matches(op, left, right), "add-zero applied without a match");
        if is_zero_const(right) {
            left.clone()
        } else {
            right.clone()
        }
    }
}

/// `x - 0 → x`.
///
/// Subtraction is not commutative: `0 - x` is left alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubZero;

impl RewriteRule for SubZero {
    fn name(&self) -> &'static str {
        "sub-zero"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Identity
    }

    fn matches(&self, op: BinOp, _left: &Expr, right: &Expr) -> bool {
        op == BinOp::Sub && is_zero_const(right)
    }

    fn apply(&self, op: BinOp, left: &Expr, right: &Expr) -> Expr {
        debug_assert!(self.matches(op, left, right), "sub-zero applied without a match");
        left.clone()
    }
}

/// `x * 1 → x` and `1 * x → x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MulOne;

impl RewriteRule for MulOne {
    fn name(&self) -> &'static str {
        "mul-one"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Identity
    }

    fn matches(&self, op: BinOp, left: &Expr, right: &Expr) -> bool {
        op == BinOp::Mul && (is_one_const(right) || is_one_const(left))
    }

    fn apply(&self, op: BinOp, left: &Expr, right: &Expr) -> Expr {
        debug_assert!(self.matches(op, left, right), "mul-one applied without a match");
        if is_one_const(right) {
            left.clone()
        } else {
            right.clone()
        }
    }
}

/// Fold an operation over two constant operands into one constant.
///
/// Best-effort: when the arithmetic declines (integer overflow) the node is
/// rebuilt unchanged — a no-op, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldConstants;

impl RewriteRule for FoldConstants {
    fn name(&self) -> &'static str {
        "fold-constants"
    }

    fn group(&self) -> RuleGroup {
        RuleGroup::Folding
    }

    fn matches(&self, _op: BinOp, left: &Expr, right: &Expr) -> bool {
        left.as_const().is_some() && right.as_const().is_some()
    }

    fn apply(&self, op: BinOp, left: &Expr, right: &Expr) -> Expr {
        debug_assert!(
            self.matches(op, left, right),
            "fold-constants applied without a match"
        );
        match (left.as_const(), right.as_const()) {
            (Some(a), Some(b)) => match op.fold(a, b) {
                Some(v) => Expr::Const(v),
                None => Expr::binary(op, left.clone(), right.clone()),
            },
            _ => Expr::binary(op, left.clone(), right.clone()),
        }
    }
}

/// Number of stock rules.
pub const RULE_COUNT: usize = 4;

/// All stock rules in priority order.
///
/// This is the single source of truth; [`RuleSet::standard`] and the
/// configuration layer both build from it.
pub const ALL_RULES: [&'static dyn RewriteRule; RULE_COUNT] =
    [&AddZero, &SubZero, &MulOne, &FoldConstants];

/// Look a stock rule up by its registered name.
pub fn rule_by_name(name: &str) -> Option<&'static dyn RewriteRule> {
    ALL_RULES.iter().find(|rule| rule.name() == name).copied()
}

/// An ordered collection of rules, queried front to back.
///
/// Stateless and `Send + Sync`: one set can back any number of concurrent
/// rewrites of distinct trees.
#[derive(Clone)]
pub struct RuleSet {
    rules: Vec<&'static dyn RewriteRule>,
}

impl RuleSet {
    /// Build a set from an explicit rule list. Order is priority order.
    pub fn new(rules: Vec<&'static dyn RewriteRule>) -> Self {
        Self { rules }
    }

    /// The full stock rule chain, in `ALL_RULES` order.
    pub fn standard() -> Self {
        Self::new(ALL_RULES.to_vec())
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate the rules in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &'static dyn RewriteRule> + '_ {
        self.rules.iter().copied()
    }

    /// The first rule whose predicate matches the given binary node.
    pub fn first_match(
        &self,
        op: BinOp,
        left: &Expr,
        right: &Expr,
    ) -> Option<&'static dyn RewriteRule> {
        self.rules
            .iter()
            .find(|rule| rule.matches(op, left, right))
            .copied()
    }

    /// True when any rule in the set matches any node of `expr`.
    ///
    /// A tree in normal form returns false; the engine's tests use this as
    /// the fixpoint postcondition. Note this is a predicate-level check: a
    /// fold that matches but declines (integer overflow) still counts as a
    /// match.
    pub fn matches_anywhere(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Var(_) | Expr::Const(_) => false,
            Expr::Binary(op, left, right) => {
                self.first_match(*op, left, right).is_some()
                    || self.matches_anywhere(left)
                    || self.matches_anywhere(right)
            }
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_zero_matches_right_operand() {
        let left = Expr::var("x");
        let right = Expr::int(0);
        assert!(AddZero.matches(BinOp::Add, &left, &right));
        assert_eq!(AddZero.apply(BinOp::Add, &left, &right), Expr::var("x"));
    }

    #[test]
    fn add_zero_matches_left_operand() {
        let left = Expr::int(0);
        let right = Expr::var("x");
        assert!(AddZero.matches(BinOp::Add, &left, &right));
        assert_eq!(AddZero.apply(BinOp::Add, &left, &right), Expr::var("x"));
    }

    #[test]
    fn add_zero_accepts_float_zero() {
        let left = Expr::var("x");
        let right = Expr::float(0.0);
        assert!(AddZero.matches(BinOp::Add, &left, &right));
    }

    #[test]
    fn add_zero_ignores_other_operators() {
        let left = Expr::var("x");
        let right = Expr::int(0);
        assert!(!AddZero.matches(BinOp::Mul, &left, &right));
    }

    #[test]
    fn sub_zero_is_asymmetric() {
        let x = Expr::var("x");
        let zero = Expr::int(0);
        assert!(SubZero.matches(BinOp::Sub, &x, &zero));
        assert_eq!(SubZero.apply(BinOp::Sub, &x, &zero), Expr::var("x"));
        // 0 - x stays put.
        assert!(!SubZero.matches(BinOp::Sub, &zero, &x));
    }

    #[test]
    fn mul_one_matches_both_sides() {
        let x = Expr::var("x");
        let one = Expr::int(1);
        assert!(MulOne.matches(BinOp::Mul, &x, &one));
        assert_eq!(MulOne.apply(BinOp::Mul, &x, &one), Expr::var("x"));
        assert!(MulOne.matches(BinOp::Mul, &one, &x));
        assert_eq!(MulOne.apply(BinOp::Mul, &one, &x), Expr::var("x"));
    }

    #[test]
    fn fold_constants_adds_integers() {
        let left = Expr::int(1);
        let right = Expr::int(2);
        assert!(FoldConstants.matches(BinOp::Add, &left, &right));
        assert_eq!(FoldConstants.apply(BinOp::Add, &left, &right), Expr::int(3));
    }

    #[test]
    fn fold_constants_promotes_to_float() {
        let left = Expr::int(2);
        let right = Expr::float(0.5);
        assert_eq!(
            FoldConstants.apply(BinOp::Mul, &left, &right),
            Expr::float(1.0)
        );
    }

    #[test]
    fn fold_constants_declines_on_overflow() {
        let left = Expr::int(i64::MAX);
        let right = Expr::int(1);
        // Still matches — the decline happens inside apply.
        assert!(FoldConstants.matches(BinOp::Add, &left, &right));
        let result = FoldConstants.apply(BinOp::Add, &left, &right);
        assert_eq!(result, Expr::binary(BinOp::Add, left, right));
    }

    #[test]
    fn rule_names_resolve() {
        for rule in ALL_RULES {
            let found = rule_by_name(rule.name()).expect("stock rule must resolve");
            assert_eq!(found.name(), rule.name());
        }
        assert!(rule_by_name("no-such-rule").is_none());
    }

    #[test]
    fn priority_order_eliminations_before_folding() {
        // 0 + 0 is matched by both add-zero and fold-constants; the
        // earlier-listed elimination wins.
        let set = RuleSet::standard();
        let zero = Expr::int(0);
        let rule = set
            .first_match(BinOp::Add, &zero, &zero)
            .expect("a rule must match");
        assert_eq!(rule.name(), "add-zero");
    }

    #[test]
    fn matches_anywhere_spots_nested_redexes() {
        let set = RuleSet::standard();
        // y * (x + 0): the redex is one level down.
        let e = Expr::binary(
            BinOp::Mul,
            Expr::var("y"),
            Expr::binary(BinOp::Add, Expr::var("x"), Expr::int(0)),
        );
        assert!(set.matches_anywhere(&e));
        assert!(!set.matches_anywhere(&Expr::var("x")));
        assert!(!set.matches_anywhere(&Expr::binary(
            BinOp::Add,
            Expr::var("x"),
            Expr::var("y")
        )));
    }

    #[test]
    fn empty_set_never_matches() {
        let set = RuleSet::new(Vec::new());
        assert!(set.is_empty());
        let e = Expr::binary(BinOp::Add, Expr::var("x"), Expr::int(0));
        assert!(!set.matches_anywhere(&e));
    }
}
