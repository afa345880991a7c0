//! Error types for wallet backend queries and snapshot loading.
//!
//! Classification itself never fails. These errors only surface from the
//! collaborators it calls into, where they are logged and absorbed.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned by wallet backend lookups.
///
/// The classifier treats every variant the same way: as "no spender found".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The backend failed to answer the query.
    #[error("Wallet backend error: {message}")]
    Backend {
        /// Description of the backend failure.
        message: String,
    },

    /// Entity not found in the wallet.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// The type of entity that was not found (e.g., "ticket", "wallet").
        entity: &'static str,
        /// The identifier that was searched for.
        id: String,
    },

    /// The caller cancelled the lookup before it completed.
    #[error("Lookup cancelled")]
    Cancelled,
}

impl WalletError {
    /// Create a new backend error with the given message.
    ///
    /// # Arguments
    ///
    /// * `message` - Description of what failed
    ///
    /// # Returns
    ///
    /// A new `WalletError::Backend` variant.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Create a new not found error.
    ///
    /// # Arguments
    ///
    /// * `entity` - The type of entity that was not found
    /// * `id` - The identifier that was searched for
    ///
    /// # Returns
    ///
    /// A new `WalletError::NotFound` variant.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Error returned when loading a wallet snapshot from disk.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("Failed to read snapshot '{path}': {source}")]
    Io {
        /// Path that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not valid JSON for the expected shape.
    #[error("Invalid snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// Tests
// ============================================================================
