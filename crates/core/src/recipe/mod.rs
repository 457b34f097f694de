mod error;
mod operations;
mod requests;
mod types;

pub use error::RecipeError;
pub use operations::parse_recipe_id;
pub use requests::RecipeChanges;
pub use types::Recipe;
