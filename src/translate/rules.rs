//! # Translation Rules
//!
//! Ordered keyword rules shared by the classifier and the explainer.
//! Rules are tried in order against the lower-cased input; the first match
//! wins, and the fallback applies when nothing matches.

use serde::Serialize;

/// Which rule fired for an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// Aggregate over `sales.amount`
    TotalSales,
    /// All rows of `customers`
    Customers,
    /// All rows of `sales`
    Fallback,
}

/// A single keyword rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub branch: Branch,
    /// Lower-case substring that selects this rule; `None` matches everything
    pub keyword: Option<&'static str>,
    /// Statement produced when the rule fires
    pub statement: &'static str,
    /// Sentence returned by the explainer when the rule fires
    pub explanation: &'static str,
}

impl Rule {
    /// Check the rule against input that is already lower-cased
    pub fn matches(&self, lowered: &str) -> bool {
        match self.keyword {
            Some(keyword) => lowered.contains(keyword),
            None => true,
        }
    }
}

pub const TOTAL_SALES: Rule = Rule {
    branch: Branch::TotalSales,
    keyword: Some("total sales"),
    statement: "SELECT SUM(amount) as total_sales FROM sales;",
    explanation: "Converted to: SELECT SUM(amount) as total_sales FROM sales; because 'total sales' implies aggregation on the 'amount' column of the 'sales' table.",
};

pub const CUSTOMERS: Rule = Rule {
    branch: Branch::Customers,
    keyword: Some("customer"),
    statement: "SELECT * FROM customers;",
    explanation: "Converted to: SELECT * FROM customers; to fetch all customer records.",
};

pub const FALLBACK: Rule = Rule {
    branch: Branch::Fallback,
    keyword: None,
    statement: "SELECT * FROM sales;",
    explanation: "Default conversion: SELECT * FROM sales; as a fallback.",
};

/// Ordered rules plus an explicit default
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    fallback: Rule,
}

impl RuleSet {
    /// Build a rule set from ordered rules and a fallback
    pub fn new(rules: Vec<Rule>, fallback: Rule) -> Self {
        Self { rules, fallback }
    }

    /// The built-in rules: total sales, then customers, then the sales fallback
    pub fn standard() -> Self {
        Self::new(vec![TOTAL_SALES, CUSTOMERS], FALLBACK)
    }

    /// Select the first matching rule for raw input
    pub fn select(&self, input: &str) -> &Rule {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .unwrap_or(&self.fallback)
    }

    /// Ordered rules, excluding the fallback
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &Rule {
        &self.fallback
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
