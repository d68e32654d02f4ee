//! # Explainer
//!
//! Justifies a classification in plain language. It selects through the
//! same rule set as the classifier, so the two cannot disagree on a branch.

use super::rules::{Branch, RuleSet};

/// Explainer over a rule set
#[derive(Debug, Clone, Default)]
pub struct Explainer {
    rules: RuleSet,
}

impl Explainer {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Fixed sentence for the rule that fires on `input`
    pub fn explain(&self, input: &str) -> &'static str {
        self.rules.select(input).explanation
    }

    /// Branch that `explain` reports on
    pub fn branch(&self, input: &str) -> Branch {
        self.rules.select(input).branch
    }
}
