//! Vocast metadata store
//!
//! Holds one record per voiceover. The `VoiceoverStore` trait is the
//! metadata-store client boundary: whole-record put, get-by-id,
//! delete-by-id, and a filtered full-table scan. Two implementations:
//! Postgres (production) and in-memory (tests, local development).
//! Both apply the same `VoiceoverFilter` predicate record-by-record so
//! filter semantics cannot drift between backends.

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryVoiceoverStore;
pub use postgres::PgVoiceoverStore;
pub use store::VoiceoverStore;
