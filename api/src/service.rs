//! Search orchestration: validate, parse, translate, execute, format.

use std::sync::Arc;

use crate::database::CarCatalog;
use crate::error::SearchError;
use crate::format::format_cars;
use crate::parser::QueryParser;
use crate::search::build_predicates;

/// Hard cap on returned rows
pub const MAX_RESULTS: i64 = 10;

#[derive(Clone)]
pub struct SearchService {
    parser: QueryParser,
    catalog: Arc<dyn CarCatalog>,
}

impl SearchService {
    pub fn new(parser: QueryParser, catalog: Arc<dyn CarCatalog>) -> Self {
        Self { parser, catalog }
    }

    /// Answers a free-text car query. Never fails: faults become fixed messages
    /// and the detail goes to the log.
    pub async fn search(&self, user_query: &str) -> String {
        match self.run(user_query).await {
            Ok(text) => text,
            Err(e) => {
                match &e {
                    SearchError::InvalidInput(_) => tracing::warn!("Rejected query: {}", e),
                    _ => tracing::error!("{}", e),
                }
                e.user_message().to_string()
            }
        }
    }

    async fn run(&self, user_query: &str) -> Result<String, SearchError> {
        if user_query.is_empty() {
            return Err(SearchError::InvalidInput("empty query".to_string()));
        }

        let request = self.parser.parse(user_query).await?;
        let predicates = build_predicates(&request);
        tracing::info!(
            "Searching cars with {} predicate(s) for query {:?}",
            predicates.len(),
            user_query
        );

        let cars = self
            .catalog
            .find_cars(&predicates, MAX_RESULTS)
            .await
            .map_err(SearchError::from_storage)?;

        Ok(format_cars(&cars))
    }
}
