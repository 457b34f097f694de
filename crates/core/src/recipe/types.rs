use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::requests::RecipeChanges;

/// A recipe as stored in the collection and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Assigned by the server on insert, never changes afterwards.
    pub id: Uuid,
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Set by the server on insert, never client-supplied.
    pub published_at: DateTime<Utc>,
}

impl Recipe {
    /// Creates a new recipe with a fresh ID and the current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tags: Vec::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            published_at: Utc::now(),
        }
    }

    /// Builds a recipe from client-supplied changes, assigning the
    /// server-owned fields.
    pub fn from_changes(changes: RecipeChanges) -> Self {
        let mut recipe = Self::new(String::new());
        recipe.apply(changes);
        recipe
    }

    /// Overwrites the client-editable fields, leaving `id` and
    /// `published_at` untouched.
    pub fn apply(&mut self, changes: RecipeChanges) {
        self.name = changes.name;
        self.tags = changes.tags;
        self.ingredients = changes.ingredients;
        self.instructions = changes.instructions;
    }

    /// Returns true if any tag equals `tag`, optionally ignoring case.
    pub fn has_tag(&self, tag: &str, ignore_case: bool) -> bool {
        self.tags.iter().any(|t| {
            if ignore_case {
                t.to_lowercase() == tag.to_lowercase()
            } else {
                t == tag
            }
        })
    }

    /// Sets the tags for this recipe.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the ingredients for this recipe.
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the instructions for this recipe.
    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets a specific ID for this recipe (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets a specific publication timestamp (useful for testing).
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = published_at;
        self
    }
}
