use uuid::Uuid;

use super::error::RecipeError;

/// Parses a recipe ID from a path segment.
///
/// A malformed ID is an input error and is reported as such. It is never
/// mapped onto a placeholder ID that would then miss in the store.
pub fn parse_recipe_id(raw: &str) -> Result<Uuid, RecipeError> {
    let id = Uuid::parse_str(raw.trim()).map_err(|_| RecipeError::InvalidId(raw.to_string()))?;
    if id.is_nil() {
        return Err(RecipeError::InvalidId(raw.to_string()));
    }
    Ok(id)
}
