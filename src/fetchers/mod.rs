mod api_ninjas;

pub use api_ninjas::ApiNinjasFetcher;

use crate::error::SearchError;
use crate::model::RecipeRecord;
use crate::request::SearchRequest;

/// Source of recipe records for a validated search.
///
/// Implementations perform exactly one lookup per call and never retry.
pub trait RecipeFetcher: Send + Sync {
    fn fetch(&self, request: &SearchRequest) -> Result<Vec<RecipeRecord>, SearchError>;
}
