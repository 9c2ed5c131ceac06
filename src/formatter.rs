use crate::model::RecipeRecord;

pub const INTRO_LINE: &str = "Here are some recipes I found for you:";

const NO_TITLE: &str = "No title";
const NO_INGREDIENTS: &str = "No ingredients";
const NO_INSTRUCTIONS: &str = "No instructions";

/// Render a recipe list as the text the agent reads back to the user.
///
/// Each recipe becomes a three-line block. Blocks keep the order they
/// were returned in and are separated from the intro and each other by a
/// blank line. An empty list yields the intro line alone.
pub fn format_recipes(recipes: &[RecipeRecord]) -> String {
    if recipes.is_empty() {
        return INTRO_LINE.to_string();
    }

    let blocks: Vec<String> = recipes.iter().map(format_recipe).collect();
    format!("{}\n\n{}", INTRO_LINE, blocks.join("\n"))
}

fn format_recipe(recipe: &RecipeRecord) -> String {
    format!(
        "Title: {}\nIngredients: {}\nInstructions: {}\n",
        recipe.title.as_deref().unwrap_or(NO_TITLE),
        recipe.ingredients.as_deref().unwrap_or(NO_INGREDIENTS),
        recipe.instructions.as_deref().unwrap_or(NO_INSTRUCTIONS),
    )
}
