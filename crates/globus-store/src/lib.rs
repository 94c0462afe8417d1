//! # globus-store
//!
//! Local persistence for the favorites list.
//!
//! The storage model is a plain string key-value store, the same shape as a
//! browser's `localStorage`: [`KeyValueStore`] abstracts it, [`FileStore`]
//! keeps one file per key in the platform data directory, and
//! [`MemoryStore`] keeps everything in process memory. [`FavoritesStore`]
//! mirrors the favorites list as a JSON array under a single key.

pub mod favorites;
pub mod kv;

mod error;

pub use error::StoreError;
pub use favorites::FavoritesStore;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
