//! Natural-language query parsing: model call, JSON extraction, filter construction.

mod extract;
mod llm;

pub use extract::extract_json;
pub use llm::{ChatCompletion, OpenAiClient};

use std::sync::Arc;

use crate::error::SearchError;
use crate::search::FilterRequest;

/// Output budget for the filter JSON. Lowering it risks truncated replies.
pub const MAX_OUTPUT_TOKENS: u32 = 200;
pub const TEMPERATURE: f32 = 0.0;

pub const CAR_REQUEST_PROMPT: &str = r#"
Given a user request, extract the relevant car search filters and return them
in JSON format.

The JSON should include the following keys:

```json
{
    "brand": "string",
    "model": "string",
    "min_year": "integer",
    "max_year": "integer",
    "fuel_type": "string",
    "color": "string",
    "min_price": "float",
    "max_price": "float",
    "transmission": "string",
    "min_doors": "integer",
    "max_doors": "integer",
    "min_mileage": "integer",
    "max_mileage": "integer"
}
```

Return only the JSON object without any additional text or explanation.

If a filter is not mentioned in the request, set its value to null.
"#;

/// Turns free text into a `FilterRequest` through a chat-completion backend
#[derive(Clone)]
pub struct QueryParser {
    llm: Arc<dyn ChatCompletion>,
}

impl QueryParser {
    pub fn new(llm: Arc<dyn ChatCompletion>) -> Self {
        Self { llm }
    }

    pub async fn parse(&self, user_query: &str) -> Result<FilterRequest, SearchError> {
        if user_query.is_empty() {
            return Err(SearchError::InvalidInput(
                "User query must be a non-empty string".to_string(),
            ));
        }

        let response_text = self
            .llm
            .complete(CAR_REQUEST_PROMPT, user_query, TEMPERATURE, MAX_OUTPUT_TOKENS)
            .await
            .map_err(|e| {
                tracing::error!("Error parsing car request via {}: {:#}", self.llm.name(), e);
                SearchError::ParseFailure(format!("{:#}", e))
            })?;

        tracing::debug!("Model reply: {}", response_text);

        // An empty map is indistinguishable from "no filters mentioned"
        let fields = extract_json(&response_text);
        FilterRequest::from_json_map(fields).map_err(|e| {
            tracing::error!("Error parsing car request: {}", e);
            SearchError::ParseFailure(e.to_string())
        })
    }
}
