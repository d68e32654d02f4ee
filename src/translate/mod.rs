//! # Translation
//!
//! Keyword-driven "natural language" to SQL. There is no parsing: the input
//! is lower-cased and checked against a short ordered list of substrings.

pub mod classifier;
pub mod explainer;
pub mod rules;

pub use classifier::{ClassificationResult, Classifier};
pub use explainer::Explainer;
pub use rules::{Branch, Rule, RuleSet};
