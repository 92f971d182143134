//! Storage abstractions for service layer
//!
//! Contains the file-backed JSON map used by the `file://` record store.

pub mod json_map_store;
