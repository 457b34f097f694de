//! Functional core for recipebox.
//!
//! Pure domain types, validation and the traits implemented by the storage
//! and cache backends in the `recipebox` crate. Nothing in here performs I/O.

pub mod cache;
pub mod recipe;
pub mod serde;
pub mod storage;
