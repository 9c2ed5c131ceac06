//! The `search_recipes` function as seen by the agent runtime.
//!
//! Holds the declaration advertised to the model, the inbound call
//! envelope, and the projection of a [`ToolOutcome`] into the two-element
//! result the runtime expects.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::FetchError;
use crate::fetchers::RecipeFetcher;
use crate::formatter::format_recipes;
use crate::request::SearchRequest;

pub const FUNCTION_NAME: &str = "search_recipes";

const FUNCTION_DESCRIPTION: &str =
    "Search for recipes by query text, with optional pagination offset.";

/// Function declaration advertised to the model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

pub fn declaration() -> FunctionDeclaration {
    FunctionDeclaration {
        name: FUNCTION_NAME.to_string(),
        description: FUNCTION_DESCRIPTION.to_string(),
        parameters: parameters_schema(),
    }
}

pub fn parameters_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "Query text to search for recipes."
            },
            "offset": {
                "type": "integer",
                "description": "Number of results to offset for pagination."
            }
        },
        "required": ["query"]
    })
}

/// Result of one invocation: either the answer text or a structured failure
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    Answer(String),
    Failed(FetchError),
}

impl ToolOutcome {
    /// Project into the runtime's `(result, metadata)` pair.
    ///
    /// The metadata map is reserved by the calling convention and is always empty.
    pub fn into_parts(self) -> (Value, Map<String, Value>) {
        let result = match self {
            ToolOutcome::Answer(text) => Value::String(text),
            ToolOutcome::Failed(err) => json!({
                "kind": err.kind,
                "status_code": err.status_code,
                "message": err.message,
            }),
        };
        (result, Map::new())
    }
}

/// Run one `search_recipes` call: validate, fetch, classify, format.
///
/// Every failure comes back as [`ToolOutcome::Failed`]; invalid arguments
/// are rejected before the fetcher is touched.
pub fn search_recipes<F>(fetcher: &F, args: &Value) -> ToolOutcome
where
    F: RecipeFetcher + ?Sized,
{
    let request = match SearchRequest::from_args(args) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected search_recipes arguments: {}", e);
            return ToolOutcome::Failed(e.into());
        }
    };

    match fetcher.fetch(&request) {
        Ok(recipes) => {
            info!(
                "Found {} recipes for {:?} (offset {})",
                recipes.len(),
                request.query,
                request.offset
            );
            ToolOutcome::Answer(format_recipes(&recipes))
        }
        Err(e) => {
            warn!("Recipe search for {:?} failed: {}", request.query, e);
            ToolOutcome::Failed(e.into())
        }
    }
}

/// A function call as dispatched by the agent runtime
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub metadata_token: Option<String>,
}

/// Reply to a [`FunctionCall`], carrying its metadata back untouched
#[derive(Debug, Clone, Serialize)]
pub struct FunctionResponse {
    pub name: String,
    pub result: Value,
    pub metadata: Map<String, Value>,
    pub session_id: Option<String>,
    pub app_name: Option<String>,
    pub metadata_token: Option<String>,
}

/// Route a runtime call to `search_recipes`.
///
/// Calls for any other function name fail as an invalid argument.
pub fn dispatch<F>(fetcher: &F, call: FunctionCall) -> FunctionResponse
where
    F: RecipeFetcher + ?Sized,
{
    debug!("Dispatching function call '{}'", call.name);

    let outcome = if call.name == FUNCTION_NAME {
        search_recipes(fetcher, &call.args)
    } else {
        warn!("Unknown function '{}'", call.name);
        ToolOutcome::Failed(FetchError::invalid_argument(format!(
            "Unknown function: {}",
            call.name
        )))
    };

    let (result, metadata) = outcome.into_parts();
    FunctionResponse {
        name: call.name,
        result,
        metadata,
        session_id: call.session_id,
        app_name: call.app_name,
        metadata_token: call.metadata_token,
    }
}
