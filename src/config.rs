// src/config.rs

//! Engine configuration.
//!
//! A small structure, deserializable from a configuration file (TOML,
//! JSON, ...), that selects which rule groups the rewriter runs with.
//! Default values enable everything; missing fields fall back to their
//! defaults.

use serde::{Deserialize, Serialize};

use crate::engine::Rewriter;
use crate::rules::{RuleGroup, RuleSet, ALL_RULES};

/// Selects which rule groups an engine instance runs with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RewriterConfig {
    /// Apply the identity eliminations (`x + 0`, `x - 0`, `x * 1`).
    pub identity_elimination: bool,
    /// Fold operations over two constant operands.
    pub constant_folding: bool,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        RewriterConfig {
            identity_elimination: true,
            constant_folding: true,
        }
    }
}

impl RewriterConfig {
    /// Build the ordered rule set this configuration selects.
    ///
    /// Filtering preserves `ALL_RULES` order, so eliminations still run
    /// before folding.
    pub fn build_rules(&self) -> RuleSet {
        let rules = ALL_RULES
            .iter()
            .copied()
            .filter(|rule| match rule.group() {
                RuleGroup::Identity => self.identity_elimination,
                RuleGroup::Folding => self.constant_folding,
            })
            .collect();
        RuleSet::new(rules)
    }

    /// Build an engine over the configured rule set.
    pub fn build_engine(&self) -> Rewriter {
        Rewriter::new(self.build_rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Expr;
    use crate::kind::BinOp;

    #[test]
    fn default_config_selects_every_stock_rule() {
        let rules = RewriterConfig::default().build_rules();
        assert_eq!(rules.len(), ALL_RULES.len());
    }

    #[test]
    fn empty_json_object_deserializes_to_defaults() {
        let config: RewriterConfig = serde_json::from_str("{}").expect("decode");
        assert_eq!(config, RewriterConfig::default());
    }

    #[test]
    fn disabled_folding_keeps_identities() {
        let config = RewriterConfig {
            constant_folding: false,
            ..RewriterConfig::default()
        };
        let engine = config.build_engine();

        // 1 + 2 stays put without folding...
        let folded = Expr::binary(BinOp::Add, Expr::int(1), Expr::int(2));
        assert_eq!(engine.rewrite(&folded), folded);

        // ...while x + 0 still simplifies.
        let identity = Expr::binary(BinOp::Add, Expr::var("x"), Expr::int(0));
        assert_eq!(engine.rewrite(&identity), Expr::var("x"));
    }

    #[test]
    fn disabled_identities_keep_folding() {
        let config = RewriterConfig {
            identity_elimination: false,
            ..RewriterConfig::default()
        };
        let engine = config.build_engine();

        let e = Expr::binary(BinOp::Add, Expr::int(1), Expr::int(2));
        assert_eq!(engine.rewrite(&e), Expr::int(3));

        // x * 1 is now in normal form for this engine.
        let e = Expr::binary(BinOp::Mul, Expr::var("x"), Expr::int(1));
        assert_eq!(engine.rewrite(&e), e);
    }
}
