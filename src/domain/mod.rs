//! Domain types for the txlens wallet views.
//!
//! This module contains the core types consumed and produced by the
//! presentation logic: assets, transactions, filters and ticket states.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for backend lookups and snapshot loading
//! - [`asset`] - Supported assets and amount formatting
//! - [`transaction`] - Transaction records, directions, types and filters
//! - [`ticket`] - Ticket lifecycle status

// ============================================================================
// Module Declarations
// ============================================================================

pub mod asset;
pub mod error;
pub mod ticket;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use asset::AssetType;
pub use error::{SnapshotError, WalletError};
pub use ticket::TicketStatus;
pub use transaction::{Transaction, TxDirection, TxFilter, TxType, UNMINED_HEIGHT};
