//! Error types for layout-aware text extraction.
//!
//! Only failures of the document collaborator as a whole (and invalid
//! configuration) are fatal. Page-level failures are absorbed by the
//! extractor and reported through logging and metrics.

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document collaborator cannot open or enumerate the document
    #[error("Document unavailable: {0}")]
    DocumentUnavailable(String),

    /// A single page could not be read
    #[error("Page {page} unavailable: {reason}")]
    PageUnavailable {
        /// 1-based page number
        page: usize,
        /// Reason reported by the collaborator
        reason: String,
    },

    /// A heuristic threshold is out of range
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Span dump or configuration could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_unavailable_error() {
        let err = Error::DocumentUnavailable("handle closed".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Document unavailable"));
        assert!(msg.contains("handle closed"));
    }

    #[test]
    fn test_page_unavailable_error() {
        let err = Error::PageUnavailable {
            page: 7,
            reason: "truncated stream".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Page 7"));
        assert!(msg.contains("truncated stream"));
    }

    #[test]
    fn test_invalid_config_error() {
        let err = Error::InvalidConfig("table_row_ratio must be in (0, 1]".to_string());
        assert!(format!("{}", err).contains("table_row_ratio"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(format!("{}", err).contains("missing.json"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
