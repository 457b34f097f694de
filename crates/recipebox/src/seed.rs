//! Startup seeding from a JSON file.
//!
//! The file holds a JSON array of recipe bodies, the same shape `POST /recipes`
//! accepts. Each one is decoded and inserted with a fresh ID and timestamp.

use std::path::Path;

use anyhow::Context;

use recipebox_core::recipe::{Recipe, RecipeChanges};
use recipebox_core::storage::RecipeRepository;

/// Reads and decodes a seed file.
pub async fn load_seed_file(path: &Path) -> anyhow::Result<Vec<RecipeChanges>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read seed file {}", path.display()))?;

    parse_seed(&contents).with_context(|| format!("invalid seed file {}", path.display()))
}

/// Parses seed contents, rejecting the whole file if any entry has the wrong shape.
pub fn parse_seed(contents: &str) -> anyhow::Result<Vec<RecipeChanges>> {
    Ok(serde_json::from_str(contents)?)
}

/// Inserts every seed through `repository`, returning how many were inserted.
pub async fn seed_recipes(
    repository: &dyn RecipeRepository,
    seeds: Vec<RecipeChanges>,
) -> anyhow::Result<usize> {
    let mut inserted = 0;

    for changes in seeds {
        let recipe = Recipe::from_changes(changes);
        repository
            .create_recipe(&recipe)
            .await
            .with_context(|| format!("failed to seed recipe {:?}", recipe.name))?;
        tracing::debug!(recipe_id = %recipe.id, name = %recipe.name, "Seeded recipe");
        inserted += 1;
    }

    Ok(inserted)
}
