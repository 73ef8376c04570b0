//! Error types for world generation

use thiserror::Error;

/// Content table errors.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Missing content for {table}: {reason}")]
    MissingContent { table: &'static str, reason: String },

    #[error("Failed to read content file {path}: {source}")]
    ContentIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse content file {path}: {source}")]
    ContentParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::MissingContent {
            table: "fauna",
            reason: "no default entry".to_string(),
        };
        assert_eq!(err.to_string(), "Missing content for fauna: no default entry");

        let err = CoreError::UnknownVariant {
            kind: "climate",
            value: "Swampy".to_string(),
        };
        assert!(err.to_string().contains("Swampy"));
    }
}
