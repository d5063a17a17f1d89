//! Vocast core library
//!
//! Shared configuration, error taxonomy, and domain models for the
//! voiceover backend. Everything here is transport-agnostic: the api
//! crate maps these types onto HTTP, the storage and db crates consume
//! them at their seams.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

pub use config::{Config, RetrievalStrategy};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
