use serde::{Deserialize, Serialize};

/// A recipe as returned by the search service. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub servings: Option<String>,
}

impl RecipeRecord {
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        RecipeRecord {
            title: Some(title.into()),
            ingredients: Some(ingredients.into()),
            instructions: Some(instructions.into()),
            servings: None,
        }
    }
}
