//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of `RecipeRepository`
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.
//! List fields are stored as JSON text columns.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
