//! In-memory storage backend.
//!
//! Stores recipes in a `Vec` wrapped in `Arc<RwLock<_>>`, so listing
//! returns them in insertion order. Nothing is persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use recipebox::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
