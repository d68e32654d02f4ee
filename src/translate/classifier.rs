//! # Classifier
//!
//! Maps free text to one of the fixed statement templates.

use serde::Serialize;

use super::rules::{Branch, RuleSet};

/// Outcome of classifying one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub branch: Branch,
    pub generated_statement: String,
}

/// Keyword classifier over a rule set
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: RuleSet,
}

impl Classifier {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Classify input. Never fails: unmatched input gets the fallback statement.
    pub fn classify(&self, input: &str) -> ClassificationResult {
        let rule = self.rules.select(input);
        ClassificationResult {
            branch: rule.branch,
            generated_statement: rule.statement.to_string(),
        }
    }
}
