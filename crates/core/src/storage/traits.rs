use async_trait::async_trait;
use uuid::Uuid;

use crate::recipe::{Recipe, RecipeChanges};

use super::{Result, TagMatch};

/// Repository for recipe operations.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Gets every recipe, in store iteration order.
    async fn list_recipes(&self) -> Result<Vec<Recipe>>;

    /// Gets every recipe whose tags contain `tag`.
    async fn search_recipes(&self, tag: &str, mode: TagMatch) -> Result<Vec<Recipe>>;

    /// Inserts a new recipe. The caller has already assigned `id` and `published_at`.
    async fn create_recipe(&self, recipe: &Recipe) -> Result<()>;

    /// Overwrites name, tags, ingredients and instructions of an existing recipe.
    ///
    /// Returns `RepositoryError::NotFound` if no recipe has this ID.
    async fn update_recipe(&self, id: Uuid, changes: &RecipeChanges) -> Result<()>;

    /// Deletes a recipe by its ID.
    ///
    /// Returns `RepositoryError::NotFound` if no recipe has this ID.
    async fn delete_recipe(&self, id: Uuid) -> Result<()>;
}
