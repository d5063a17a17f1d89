//! Vocast storage library
//!
//! Blob-store abstraction for the voiceover backend. The `BlobStorage`
//! trait covers exactly what the upload/retrieval/deletion workflows
//! need: presigned PUT/GET credential issuance, streamed download,
//! delete, and existence checks. Bytes themselves move directly between
//! the client and the backing store; this crate never proxies uploads.
//!
//! Keys are flat object names. They must not be empty and must not
//! contain path separators or `..` sequences; validation is centralized
//! in the `keys` module.

pub mod factory;
pub mod keys;
pub mod memory;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

pub use factory::create_blob_storage;
pub use memory::MemoryBlobStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3BlobStorage;
pub use traits::{BlobObject, BlobStorage, StorageError, StorageResult};
pub use vocast_core::StorageBackend;
