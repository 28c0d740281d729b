use crate::models::EntryId;

use thiserror::Error;

/// Failure while loading the catalog or one of its images.
///
/// The display text is what the storefront shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{status_text}")]
    Status { code: i32, status_text: String },

    #[error("{0}")]
    Network(String),

    #[error("Malformed catalog response: {0}")]
    Decode(String),

    #[error("Image could not be decoded: {0}")]
    Image(String),
}

impl CatalogError {
    /// Builds a status error whose text is the response reason phrase.
    pub fn status(code: i32, reason_phrase: &str) -> Self {
        let reason_phrase = reason_phrase.trim();
        let status_text = if reason_phrase.is_empty() {
            format!("HTTP {code}")
        } else {
            reason_phrase.to_string()
        };

        Self::Status { code, status_text }
    }
}

impl From<minreq::Error> for CatalogError {
    fn from(error: minreq::Error) -> Self {
        Self::Network(error.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("No catalog entry with id {0}")]
    UnknownEntry(EntryId),
}

#[cfg(test)]
mod tests {
    use super::CatalogError;

    #[test]
    fn status_text_is_reason_phrase() {
        let error = CatalogError::status(503, "Service Unavailable");
        assert_eq!(error.to_string(), "Service Unavailable");
    }

    #[test]
    fn empty_reason_phrase_falls_back_to_code() {
        let error = CatalogError::status(429, "  ");
        assert_eq!(error.to_string(), "HTTP 429");
        assert!(matches!(error, CatalogError::Status { code: 429, .. }));
    }
}
