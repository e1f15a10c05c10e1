//! Error types for the Shoalnotes core library.

use thiserror::Error;

/// All errors that can occur within the Shoalnotes core library.
///
/// The session and note managers never surface these to their callers:
/// unreadable persisted data degrades to empty state and failed writes are
/// logged and dropped. The type exists for the storage substrate's own
/// fallible surface — opening a backing file, serializing a snapshot.
#[derive(Debug, Error)]
pub enum ShoalnotesError {
    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be serialized to or deserialized from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`ShoalnotesError`].
pub type Result<T> = std::result::Result<T, ShoalnotesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_variant_wraps_serde_error() {
        let inner = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let e = ShoalnotesError::from(inner);
        assert!(e.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_io_variant_wraps_io_error() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e = ShoalnotesError::from(inner);
        assert!(e.to_string().contains("gone"));
    }
}
