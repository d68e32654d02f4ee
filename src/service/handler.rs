//! # Query Handler
//!
//! The request flow behind every endpoint and CLI command:
//! classify, optionally explain or validate, then hit the store.
//!
//! Store work runs on the blocking pool so the async caller only suspends
//! while waiting for it.

use std::sync::Arc;

use tracing::{debug, error};

use crate::store::{Store, StoreResult};
use crate::translate::{ClassificationResult, Classifier, Explainer, RuleSet};
use crate::validate::Validator;

use super::errors::{ServiceError, ServiceResult};
use super::response::{ExplainResponse, QueryResponse, ValidateResponse};

/// Shared, read-only request handler state
#[derive(Debug, Clone)]
pub struct QueryService {
    store: Arc<dyn Store>,
    classifier: Classifier,
    explainer: Explainer,
}

impl QueryService {
    /// Create a service over `store` with the built-in rules
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_rules(store, RuleSet::standard())
    }

    /// Create a service with a custom rule set
    pub fn with_rules(store: Arc<dyn Store>, rules: RuleSet) -> Self {
        Self {
            store,
            classifier: Classifier::new(rules.clone()),
            explainer: Explainer::new(rules),
        }
    }

    pub fn classify(&self, input: &str) -> ClassificationResult {
        let result = self.classifier.classify(input);
        debug!(branch = ?result.branch, statement = %result.generated_statement, "Classified input");
        result
    }

    /// Classify and execute, returning the statement with its rows
    pub async fn query(&self, input: &str) -> ServiceResult<QueryResponse> {
        let classified = self.classify(input);
        let sql = classified.generated_statement.clone();

        let data = self
            .blocking(move |store| store.fetch_all(&sql))
            .await?;

        Ok(QueryResponse {
            pseudo_sql: classified.generated_statement,
            data,
        })
    }

    /// Explain which rule the input triggers
    pub fn explain(&self, input: &str) -> ServiceResult<ExplainResponse> {
        Ok(ExplainResponse {
            explanation: self.explainer.explain(input).to_string(),
        })
    }

    /// Classify and check the referenced table against the catalog
    pub async fn validate(&self, input: &str) -> ServiceResult<ValidateResponse> {
        let classified = self.classify(input);
        let sql = classified.generated_statement;

        let result = self
            .blocking(move |store| Validator::new(store).validate(&sql))
            .await?;

        Ok(result.into())
    }

    /// Run a store call on the blocking pool
    async fn blocking<T, F>(&self, f: F) -> ServiceResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn Store) -> StoreResult<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let outcome = tokio::task::spawn_blocking(move || f(store.as_ref()))
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        outcome.map_err(|e| {
            error!(error = %e, "Store access failed");
            ServiceError::from(e)
        })
    }
}
