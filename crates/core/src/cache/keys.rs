/// Cache key holding the snapshot of every recipe in the collection.
pub const RECIPES_KEY: &str = "recipes";

/// Returns the cache key for the full recipe listing.
///
/// All listing reads and write invalidations go through this function, so a
/// move to per-query keys only has to change it and its callers.
pub fn recipes_key() -> &'static str {
    RECIPES_KEY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipes_key() {
        assert_eq!(recipes_key(), "recipes");
    }
}
