use thiserror::Error;

/// Errors that can occur when reading recipe input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Invalid recipe ID: {0}")]
    InvalidId(String),
}
