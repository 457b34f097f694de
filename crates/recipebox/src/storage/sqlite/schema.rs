//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
///
/// `tags`, `ingredients` and `instructions` hold JSON arrays of strings.
/// Listing orders by `rowid`, which follows insertion order.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS recipes (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT '[]',
    ingredients TEXT NOT NULL DEFAULT '[]',
    instructions TEXT NOT NULL DEFAULT '[]',
    published_at TEXT NOT NULL
);
"#;

pub const INSERT_RECIPE: &str = r#"
INSERT INTO recipes (id, name, tags, ingredients, instructions, published_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_ALL_RECIPES: &str = r#"
SELECT id, name, tags, ingredients, instructions, published_at
FROM recipes
ORDER BY rowid
"#;

// A row with a corrupt tags column is treated as having no tags, so it
// cannot fail the whole query.
pub const SELECT_RECIPES_BY_TAG: &str = r#"
SELECT id, name, tags, ingredients, instructions, published_at
FROM recipes
WHERE EXISTS (
    SELECT 1
    FROM json_each(CASE WHEN json_valid(recipes.tags) THEN recipes.tags ELSE '[]' END)
    WHERE json_each.value = ?1
)
ORDER BY rowid
"#;

// SQLite's lower() only folds ASCII letters.
pub const SELECT_RECIPES_BY_TAG_IGNORE_CASE: &str = r#"
SELECT id, name, tags, ingredients, instructions, published_at
FROM recipes
WHERE EXISTS (
    SELECT 1
    FROM json_each(CASE WHEN json_valid(recipes.tags) THEN recipes.tags ELSE '[]' END)
    WHERE lower(json_each.value) = lower(?1)
)
ORDER BY rowid
"#;

pub const UPDATE_RECIPE: &str = r#"
UPDATE recipes
SET name = ?2, tags = ?3, ingredients = ?4, instructions = ?5
WHERE id = ?1
"#;

pub const DELETE_RECIPE: &str = r#"
DELETE FROM recipes
WHERE id = ?1
"#;
