//! API request types for recipe operations.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_as_empty;

/// Client-editable recipe fields, used as the body of both create and update.
///
/// Server-owned fields (`id`, `publishedAt`) are not part of this type, so
/// any values a client sends for them are dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeChanges {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub instructions: Vec<String>,
}

impl RecipeChanges {
    /// Create a new request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the ingredients.
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the instructions.
    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }
}
