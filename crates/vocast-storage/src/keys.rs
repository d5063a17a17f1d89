//! Blob key validation.
//!
//! Keys are flat object names supplied by clients, both at
//! upload-request time and on retrieval paths. Rejecting separators and
//! parent-directory sequences here keeps every backend inside its
//! expected key space.

use crate::traits::{StorageError, StorageResult};

/// Validate a client-supplied blob key.
pub fn validate(key: &str) -> StorageResult<()> {
    if key.trim().is_empty() {
        return Err(StorageError::InvalidKey("Key must not be empty".to_string()));
    }
    if key.contains('/') || key.contains('\\') {
        return Err(StorageError::InvalidKey(
            "Key must not contain path separators".to_string(),
        ));
    }
    if key.contains("..") {
        return Err(StorageError::InvalidKey(
            "Key must not contain parent-directory sequences".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_file_names() {
        assert!(validate("1709250000-song1.mp3").is_ok());
        assert!(validate("My Voiceover.png").is_ok());
        assert!(validate("take.2.final.mp3").is_ok());
    }

    #[test]
    fn rejects_traversal_attempts() {
        assert!(validate("../secrets.txt").is_err());
        assert!(validate("..").is_err());
        assert!(validate("a/../b").is_err());
        assert!(validate("nested/key.mp3").is_err());
        assert!(validate("windows\\style.mp3").is_err());
    }

    #[test]
    fn rejects_blank_keys() {
        assert!(validate("").is_err());
        assert!(validate("   ").is_err());
    }
}
