//! Wallet transaction types.
//!
//! This module defines the read-only transaction record the wallet backend
//! hands to the presentation layer, together with the closed enums used to
//! describe its direction and type.
//!
//! # Module Organization
//!
//! - [`filter`] - Backend filter kinds used to query transaction categories

use serde::{Deserialize, Serialize};

pub mod filter;

pub use filter::TxFilter;

// ============================================================================
// Constants
// ============================================================================

/// Block height reported for transactions that are not yet mined.
pub const UNMINED_HEIGHT: i32 = -1;

// ============================================================================
// Transaction Direction
// ============================================================================

/// Direction of funds relative to the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxDirection {
    /// Funds left the wallet.
    Sent,
    /// Funds entered the wallet.
    Received,
    /// Funds moved between the wallet's own accounts.
    #[default]
    Transferred,
}

impl TxDirection {
    /// Map a backend direction code to a direction.
    ///
    /// Codes follow the backend convention (`0` sent, `1` received, `2`
    /// transferred). Unknown codes fall back to `Transferred`.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Sent,
            1 => Self::Received,
            _ => Self::Transferred,
        }
    }
}

// ============================================================================
// Transaction Type
// ============================================================================

/// Wallet transaction types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxType {
    /// Ordinary value transfer.
    #[default]
    Regular,
    /// Coin-mixing output.
    Mixed,
    /// Ticket purchase locking funds for staking.
    TicketPurchase,
    /// Vote spending a live ticket.
    Vote,
    /// Revocation spending a missed or expired ticket.
    Revocation,
}

impl TxType {
    /// Returns the human-readable name of the transaction type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Mixed => "Mixed",
            Self::TicketPurchase => "Ticket Purchase",
            Self::Vote => "Vote",
            Self::Revocation => "Revocation",
        }
    }

    /// Returns true for regular and mixed transactions, the ones that show a
    /// confirm/pending icon on overview rows.
    #[must_use]
    pub const fn is_mixed_or_regular(&self) -> bool {
        matches!(self, Self::Regular | Self::Mixed)
    }

    /// Returns true for the ticket spending types.
    #[must_use]
    pub const fn is_vote_or_revocation(&self) -> bool {
        matches!(self, Self::Vote | Self::Revocation)
    }
}

impl std::fmt::Display for TxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// A wallet transaction as reported by the backend.
///
/// Amounts are signed atom values; formatting to coins is the wallet's job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    /// Transaction hash (hex).
    pub hash: String,
    /// Direction of funds.
    pub direction: TxDirection,
    /// Transaction type.
    #[serde(rename = "type")]
    pub tx_type: TxType,
    /// Amount in atoms.
    pub amount: i64,
    /// Denomination of each mixed output, in atoms.
    pub mix_denomination: i64,
    /// Number of mixed outputs.
    pub mix_count: i32,
    /// Block height, or [`UNMINED_HEIGHT`] when unmined.
    pub block_height: i32,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Reward earned by a vote, in atoms.
    pub vote_reward: i64,
    /// Days the ticket took to be voted or revoked.
    pub days_to_vote_or_revoke: i32,
}

impl Transaction {
    /// Returns true once the transaction has been included in a block.
    #[must_use]
    pub const fn is_mined(&self) -> bool {
        self.block_height != UNMINED_HEIGHT
    }
}

// ============================================================================
// Tests
// ============================================================================
