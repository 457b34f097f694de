//! SQLite repository implementation.
//!
//! Implements `RecipeRepository` from `recipebox_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use recipebox_core::recipe::{Recipe, RecipeChanges};
use recipebox_core::storage::{RecipeRepository, RepositoryError, Result, TagMatch};

use super::conversions::{format_datetime, keep_decoded, row_to_decoded, string_list_to_json};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;
        tracing::info!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Runs a recipe SELECT, skipping rows that fail to decode.
    async fn select_recipes(&self, sql: &'static str, tag: Option<String>) -> Result<Vec<Recipe>> {
        let rows = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                let mapped = match &tag {
                    Some(tag) => stmt.query_map([tag], row_to_decoded),
                    None => stmt.query_map([], row_to_decoded),
                }
                .map_err(wrap_err)?;

                let mut rows = Vec::new();
                for row_result in mapped {
                    rows.push(row_result.map_err(wrap_err)?);
                }
                Ok(rows)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        Ok(keep_decoded(rows))
    }
}

#[async_trait]
impl RecipeRepository for SqliteRepository {
    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        self.select_recipes(schema::SELECT_ALL_RECIPES, None).await
    }

    async fn search_recipes(&self, tag: &str, mode: TagMatch) -> Result<Vec<Recipe>> {
        let sql = match mode {
            TagMatch::Exact => schema::SELECT_RECIPES_BY_TAG,
            TagMatch::IgnoreCase => schema::SELECT_RECIPES_BY_TAG_IGNORE_CASE,
        };
        self.select_recipes(sql, Some(tag.to_string())).await
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<()> {
        let id = recipe.id.to_string();
        let name = recipe.name.clone();
        let tags = string_list_to_json(&recipe.tags)?;
        let ingredients = string_list_to_json(&recipe.ingredients)?;
        let instructions = string_list_to_json(&recipe.instructions)?;
        let published_at = format_datetime(&recipe.published_at);
        let recipe_id = recipe.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_RECIPE,
                    rusqlite::params![id, name, tags, ingredients, instructions, published_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, recipe_id))
    }

    async fn update_recipe(&self, id: Uuid, changes: &RecipeChanges) -> Result<()> {
        let id_str = id.to_string();
        let name = changes.name.clone();
        let tags = string_list_to_json(&changes.tags)?;
        let ingredients = string_list_to_json(&changes.ingredients)?;
        let instructions = string_list_to_json(&changes.instructions)?;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_RECIPE,
                        rusqlite::params![id_str, name, tags, ingredients, instructions],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }

    async fn delete_recipe(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_RECIPE, [&id_str])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id.to_string()))
    }
}
