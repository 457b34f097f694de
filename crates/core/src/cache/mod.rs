mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{recipes_key, RECIPES_KEY};
pub use serialization::{deserialize_recipes, serialize_recipes, SerializationError};
pub use traits::Cache;
