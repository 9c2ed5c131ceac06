use serde_json::Value;

use crate::error::SearchError;

/// Validated arguments of a single `search_recipes` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub offset: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, offset: u32) -> Result<Self, SearchError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(SearchError::InvalidArgument(
                "'query' must not be empty".to_string(),
            ));
        }
        Ok(SearchRequest { query, offset })
    }

    /// Validate the raw argument object passed by the agent runtime.
    ///
    /// `query` must be a non-blank string. `offset` defaults to 0 and must
    /// otherwise be a non-negative integer.
    pub fn from_args(args: &Value) -> Result<Self, SearchError> {
        let args = args.as_object().ok_or_else(|| {
            SearchError::InvalidArgument("arguments must be a JSON object".to_string())
        })?;

        let query = match args.get("query") {
            Some(Value::String(query)) => query.clone(),
            Some(_) => {
                return Err(SearchError::InvalidArgument(
                    "'query' must be a string".to_string(),
                ))
            }
            None => {
                return Err(SearchError::InvalidArgument(
                    "Missing 'query' parameter".to_string(),
                ))
            }
        };

        let offset = match args.get("offset") {
            None | Some(Value::Null) => 0,
            // Whole-number floats such as 10.0 are valid JSON Schema integers
            Some(value) => value
                .as_u64()
                .or_else(|| {
                    value
                        .as_f64()
                        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64)
                        .map(|f| f as u64)
                })
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| {
                    SearchError::InvalidArgument(format!(
                        "'offset' must be a non-negative integer, got {}",
                        value
                    ))
                })?,
        };

        SearchRequest::new(query, offset)
    }
}
