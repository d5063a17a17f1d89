//! Vocast HTTP API
//!
//! Axum service exposing the voiceover backend: presigned upload credential
//! issuance, blob streaming, catalog listing and search, and ordered deletes.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
