//! Transaction filter kinds understood by the wallet backend.

use serde::{Deserialize, Serialize};

/// Category a backend can test a transaction against.
///
/// The staking sub-filters (`Unmined`, `Immature`, `Live`, `Expired`) are
/// mutually exclusive for a well-formed backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxFilter {
    /// Every transaction of a non-staking asset.
    All,
    /// Every non-staking transaction of a staking asset.
    AllTx,
    Sent,
    Received,
    Transferred,
    Mixed,
    /// Any ticket, vote, or revocation.
    Staking,
    Unmined,
    Immature,
    Live,
    Expired,
    Voted,
    Revoked,
}

impl TxFilter {
    /// Ticket sub-filters in the order the classifier evaluates them.
    pub const TICKET_STAGES: [TxFilter; 4] = [
        TxFilter::Unmined,
        TxFilter::Immature,
        TxFilter::Live,
        TxFilter::Expired,
    ];

    /// Returns the snake_case name used in snapshots and CLI output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::AllTx => "all_tx",
            Self::Sent => "sent",
            Self::Received => "received",
            Self::Transferred => "transferred",
            Self::Mixed => "mixed",
            Self::Staking => "staking",
            Self::Unmined => "unmined",
            Self::Immature => "immature",
            Self::Live => "live",
            Self::Expired => "expired",
            Self::Voted => "voted",
            Self::Revoked => "revoked",
        }
    }
}

impl std::fmt::Display for TxFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
