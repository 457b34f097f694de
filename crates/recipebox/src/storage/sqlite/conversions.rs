//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, Utc};
use recipebox_core::recipe::Recipe;
use recipebox_core::storage::RepositoryError;
use rusqlite::Row;
use uuid::Uuid;

/// A decoded row, or the raw ID of a row that failed to decode.
pub type DecodedRow = (String, rusqlite::Result<Recipe>);

/// Reads a row into its raw ID and its decoded recipe.
///
/// Expected columns: id, name, tags, ingredients, instructions, published_at
///
/// Only a missing or non-text `id` column fails the outer result. Every other
/// decoding failure lands in the inner result so the row can be skipped.
pub fn row_to_decoded(row: &Row) -> rusqlite::Result<DecodedRow> {
    let raw_id: String = row.get(0)?;
    Ok((raw_id, row_to_recipe(row)))
}

/// Convert a SQLite row to a Recipe.
///
/// Expected columns: id, name, tags, ingredients, instructions, published_at
pub fn row_to_recipe(row: &Row) -> rusqlite::Result<Recipe> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let tags: String = row.get(2)?;
    let ingredients: String = row.get(3)?;
    let instructions: String = row.get(4)?;
    let published_at: String = row.get(5)?;

    Ok(Recipe {
        id: parse_uuid(&id)?,
        name,
        tags: parse_string_list(&tags)?,
        ingredients: parse_string_list(&ingredients)?,
        instructions: parse_string_list(&instructions)?,
        published_at: parse_datetime(&published_at)?,
    })
}

/// Keeps the rows that decoded, logging the ones that did not.
pub fn keep_decoded(rows: Vec<DecodedRow>) -> Vec<Recipe> {
    rows.into_iter()
        .filter_map(|(raw_id, decoded)| match decoded {
            Ok(recipe) => Some(recipe),
            Err(err) => {
                tracing::warn!(recipe_id = %raw_id, error = %err, "Skipping undecodable recipe row");
                None
            }
        })
        .collect()
}

/// Serialize a string list to a JSON array for a TEXT column.
pub fn string_list_to_json(values: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(values).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Format a DateTime for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn parse_string_list(json: &str) -> rusqlite::Result<Vec<String>> {
    serde_json::from_str(json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_list_to_json() {
        let values = vec!["water".to_string(), "leaves".to_string()];
        assert_eq!(
            string_list_to_json(&values).unwrap(),
            r#"["water","leaves"]"#
        );
        assert_eq!(string_list_to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_parse_string_list() {
        assert_eq!(
            parse_string_list(r#"["a","b"]"#).unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(parse_string_list("not json").is_err());
        assert!(parse_string_list(r#"[1, 2]"#).is_err());
    }

    #[test]
    fn test_format_and_parse_datetime() {
        let dt = DateTime::parse_from_rfc3339("2024-06-15T10:30:00.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        let formatted = format_datetime(&dt);
        assert!(formatted.starts_with("2024-06-15"));
        assert_eq!(parse_datetime(&formatted).unwrap(), dt);
    }

    #[test]
    fn test_parse_uuid_valid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        assert_eq!(parse_uuid(uuid_str).unwrap().to_string(), uuid_str);
    }

    #[test]
    fn test_parse_uuid_invalid() {
        assert!(parse_uuid("not-a-uuid").is_err());
    }

    #[test]
    fn test_keep_decoded_skips_failures() {
        let good = Recipe::new("Tea");
        let rows = vec![
            ("bad-id".to_string(), Err(rusqlite::Error::InvalidQuery)),
            (good.id.to_string(), Ok(good.clone())),
        ];

        assert_eq!(keep_decoded(rows), vec![good]);
    }
}
