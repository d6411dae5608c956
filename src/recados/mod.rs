//! Recado storage — a single JSON collection document on disk.
//!
//! The document is the sole unit of persistence: every mutation reloads
//! it, edits the in-memory sequence, and rewrites the whole file.

pub mod document;
pub mod file_ops;
pub mod store;

pub use document::{Recado, RecadoDocument};
pub use store::{RecadoStore, StoreError};
