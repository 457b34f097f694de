//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use recipebox_core::recipe::{Recipe, RecipeChanges};
use recipebox_core::storage::{RecipeRepository, RepositoryError, Result, TagMatch};

/// In-memory storage backend.
///
/// Uses a `Vec` wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    recipes: Arc<RwLock<Vec<Recipe>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: Uuid) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Recipe",
        id: id.to_string(),
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRepository {
    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(recipes.clone())
    }

    async fn search_recipes(&self, tag: &str, mode: TagMatch) -> Result<Vec<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(recipes
            .iter()
            .filter(|r| r.has_tag(tag, mode.ignores_case()))
            .cloned()
            .collect())
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        if recipes.iter().any(|r| r.id == recipe.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Recipe",
                id: recipe.id.to_string(),
            });
        }
        recipes.push(recipe.clone());
        Ok(())
    }

    async fn update_recipe(&self, id: Uuid, changes: &RecipeChanges) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        recipe.apply(changes.clone());
        Ok(())
    }

    async fn delete_recipe(&self, id: Uuid) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        let position = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        recipes.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> Recipe {
        Recipe::new("Tea")
            .with_tags(["drink", "hot"])
            .with_ingredients(["water", "leaves"])
            .with_instructions(["boil", "steep"])
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let repo = InMemoryRepository::new();
        let recipe = tea();

        repo.create_recipe(&recipe).await.unwrap();

        let recipes = repo.list_recipes().await.unwrap();
        assert_eq!(recipes, vec![recipe]);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.list_recipes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryRepository::new();
        for name in ["A", "B", "C"] {
            repo.create_recipe(&Recipe::new(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_recipes()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_create_duplicate_id() {
        let repo = InMemoryRepository::new();
        let recipe = tea();

        repo.create_recipe(&recipe).await.unwrap();
        let result = repo.create_recipe(&recipe).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_timestamp() {
        let repo = InMemoryRepository::new();
        let recipe = tea();
        repo.create_recipe(&recipe).await.unwrap();

        let changes = RecipeChanges::new("Green Tea").with_tags(["drink"]);
        repo.update_recipe(recipe.id, &changes).await.unwrap();

        let updated = repo.list_recipes().await.unwrap().remove(0);
        assert_eq!(updated.id, recipe.id);
        assert_eq!(updated.published_at, recipe.published_at);
        assert_eq!(updated.name, "Green Tea");
        assert_eq!(updated.tags, vec!["drink"]);
        assert!(updated.ingredients.is_empty());
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo
            .update_recipe(Uuid::new_v4(), &RecipeChanges::new("X"))
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();
        let recipe = tea();
        repo.create_recipe(&recipe).await.unwrap();

        repo.delete_recipe(recipe.id).await.unwrap();

        assert!(repo.list_recipes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.delete_recipe(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_search_exact() {
        let repo = InMemoryRepository::new();
        repo.create_recipe(&tea()).await.unwrap();
        repo.create_recipe(&Recipe::new("Toast").with_tags(["breakfast"]))
            .await
            .unwrap();

        let hot = repo.search_recipes("hot", TagMatch::Exact).await.unwrap();
        assert_eq!(hot.len(), 1);
        assert_eq!(hot[0].name, "Tea");

        let upper = repo.search_recipes("HOT", TagMatch::Exact).await.unwrap();
        assert!(upper.is_empty());
    }

    #[tokio::test]
    async fn test_search_ignore_case() {
        let repo = InMemoryRepository::new();
        repo.create_recipe(&tea()).await.unwrap();

        let result = repo
            .search_recipes("HOT", TagMatch::IgnoreCase)
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_search_no_match() {
        let repo = InMemoryRepository::new();
        repo.create_recipe(&tea()).await.unwrap();

        let result = repo.search_recipes("cold", TagMatch::Exact).await.unwrap();
        assert!(result.is_empty());
    }
}
