pub mod config;
pub mod error;
pub mod fetchers;
pub mod formatter;
pub mod model;
pub mod request;
pub mod tool;

pub use config::{load_config, BasicAuth, SearchConfig};
pub use error::{FetchError, FetchErrorKind, SearchError};
pub use fetchers::{ApiNinjasFetcher, RecipeFetcher};
pub use formatter::format_recipes;
pub use model::RecipeRecord;
pub use request::SearchRequest;
pub use tool::{
    declaration, dispatch, FunctionCall, FunctionDeclaration, FunctionResponse, ToolOutcome,
    FUNCTION_NAME,
};

use serde_json::{Map, Value};

/// Recipe search bound to one configuration.
///
/// Built once at startup; safe to share between concurrent calls.
pub struct RecipeSearch {
    fetcher: ApiNinjasFetcher,
}

impl RecipeSearch {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(RecipeSearch {
            fetcher: ApiNinjasFetcher::new(config)?,
        })
    }

    /// Load configuration from `config.toml` / `RECIPES__*` and build the search
    pub fn from_env() -> Result<Self, SearchError> {
        let config = load_config()?;
        Self::new(&config)
    }

    /// Answer a `search_recipes` call with the runtime's `(result, metadata)` pair
    pub fn search_recipes(&self, args: &Value) -> (Value, Map<String, Value>) {
        tool::search_recipes(&self.fetcher, args).into_parts()
    }

    pub fn outcome(&self, args: &Value) -> ToolOutcome {
        tool::search_recipes(&self.fetcher, args)
    }

    pub fn dispatch(&self, call: FunctionCall) -> FunctionResponse {
        tool::dispatch(&self.fetcher, call)
    }
}

/// One-shot search using the given configuration
pub fn search_recipes(config: &SearchConfig, args: &Value) -> (Value, Map<String, Value>) {
    match RecipeSearch::new(config) {
        Ok(search) => search.search_recipes(args),
        Err(e) => ToolOutcome::Failed(e.into()).into_parts(),
    }
}
