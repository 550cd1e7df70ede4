//! The traversal engine.
//!
//! Walks an expression tree bottom-up (post-order), rewriting children
//! before parents. At each node the rule set is queried in priority order;
//! on the first match the node is replaced and the replacement is run
//! through the full rewrite again, so cascades like
//! `(x + 0) * 1 → x * 1 → x` collapse in one top-level call.
//!
//! Every applied rule strictly reduces node count, so the walk terminates
//! in a number of steps bounded by the size of the input tree.

use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::expr::Expr;
use crate::rules::RuleSet;

static STANDARD_REWRITER: Lazy<Rewriter> = Lazy::new(Rewriter::default);

/// Simplify an expression with the standard rule set.
///
/// Pure function from input tree to output tree; the input is not touched.
pub fn simplify(expr: &Expr) -> Expr {
    STANDARD_REWRITER.rewrite(expr)
}

/// Observer invoked at rule-match decision points.
///
/// The engine reports every applied rule together with the node it
/// replaced and the replacement. The default method body is a no-op, so
/// implementations override only what they care about. Diagnostics belong
/// here (or in the engine's `trace!` output) — never inside rule
/// predicates, which stay pure.
pub trait RewriteObserver {
    /// Called after `rule` rewrote `before` into `after`.
    fn rule_applied(&mut self, rule: &'static str, before: &Expr, after: &Expr) {
        let _ = (rule, before, after);
    }
}

/// Observer that does nothing; backs [`Rewriter::rewrite`].
struct NullObserver;

impl RewriteObserver for NullObserver {}

/// The rewrite engine: a rule set plus the traversal that drives it.
///
/// Holds no per-invocation state. One instance can serve any number of
/// sequential or concurrent rewrites of distinct trees.
pub struct Rewriter {
    rules: RuleSet,
}

impl Rewriter {
    /// Build an engine over an explicit rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The rule set this engine queries.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Rewrite `expr` to its normal form.
    #[must_use]
    pub fn rewrite(&self, expr: &Expr) -> Expr {
        self.rewrite_with(expr, &mut NullObserver)
    }

    /// Rewrite `expr` to its normal form, reporting each applied rule to
    /// `observer`.
    #[must_use]
    pub fn rewrite_with(&self, expr: &Expr, observer: &mut dyn RewriteObserver) -> Expr {
        let result = self.visit(expr, observer);
        debug!(
            "rewrote {} node(s) down to {}",
            expr.node_count(),
            result.node_count()
        );
        result
    }

    fn visit(&self, expr: &Expr, observer: &mut dyn RewriteObserver) -> Expr {
        match expr {
            // Leaves are already in normal form.
            Expr::Var(_) | Expr::Const(_) => expr.clone(),
            Expr::Binary(op, left, right) => {
                // Post-order: children first, so rules see normalized operands.
                let left = self.visit(left, observer);
                let right = self.visit(right, observer);

                match self.rules.first_match(*op, &left, &right) {
                    Some(rule) => {
                        let after = rule.apply(*op, &left, &right);
                        let before = Expr::binary(*op, left, right);
                        if after == before {
                            // A best-effort rule declined (integer overflow
                            // in a fold). Treat as no match, or the engine
                            // would re-enter this node forever.
                            trace!("{}: declined on {}", rule.name(), before);
                            return before;
                        }
                        trace!("{}: {} => {}", rule.name(), before, after);
                        observer.rule_applied(rule.name(), &before, &after);
                        // The substitution can expose a fresh redex at this
                        // position; re-normalize it in full.
                        self.visit(&after, observer)
                    }
                    None => Expr::binary(*op, left, right),
                }
            }
        }
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new(RuleSet::standard())
    }
}
