/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 *
 * Container operations themselves never fail: missing keys, absent values and
 * out-of-range indices are reported through `Option`/`bool` results. Errors only
 * surface at the snapshot import/export boundary.
 */

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while moving container snapshots in or out of JSON
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum CollectionError {
    #[error("Failed to serialize {container} snapshot: {reason}")]
    #[diagnostic(
        code(collections::serialization_failed),
        help("Element types must serialize cleanly; map keys must render as JSON object keys.")
    )]
    Serialization {
        container: &'static str,
        reason: String,
    },

    #[error("Failed to deserialize {container} snapshot: {reason}")]
    #[diagnostic(
        code(collections::deserialization_failed),
        help("Lists and sets expect a JSON array, maps expect a JSON object.")
    )]
    Deserialization {
        container: &'static str,
        reason: String,
    },
}

impl CollectionError {
    pub(crate) fn serialization(container: &'static str, err: serde_json::Error) -> Self {
        Self::Serialization {
            container,
            reason: err.to_string(),
        }
    }

    pub(crate) fn deserialization(container: &'static str, err: serde_json::Error) -> Self {
        Self::Deserialization {
            container,
            reason: err.to_string(),
        }
    }

    /// Name of the container type the error originated from
    pub fn container(&self) -> &'static str {
        match self {
            Self::Serialization { container, .. } | Self::Deserialization { container, .. } => {
                container
            }
        }
    }
}

/// Result alias for fallible collection operations
pub type CollectionResult<T> = Result<T, CollectionError>;
