//! Serde helper functions for request deserialization.
//!
//! Clients that build payloads from nullable slices send `null` for empty
//! lists; these helpers fold that into an empty `Vec`.

use serde::{Deserialize, Deserializer};

/// Deserialize a list, treating `null` as an empty list.
pub fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let list: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(list.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_null_as_empty")]
        items: Vec<String>,
    }

    #[test]
    fn test_null_is_empty() {
        let json = r#"{"items": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_missing_is_empty() {
        let json = r#"{}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_values_are_kept_in_order() {
        let json = r#"{"items": ["b", "a"]}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.items, vec!["b", "a"]);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let json = r#"{"items": "a"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
