//! Ticket lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a staking ticket, as shown in transaction rows.
///
/// Non-ticket transactions carry `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Purchase not yet mined.
    Unmined,
    /// Mined but not yet eligible to vote.
    Immature,
    /// Eligible to vote.
    Live,
    /// Expired without voting.
    Expired,
    /// Spent by a vote or a revocation.
    VotedOrRevoked,
    /// Not a ticket.
    #[default]
    None,
}

impl TicketStatus {
    /// Returns the human-readable name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unmined => "Unmined",
            Self::Immature => "Immature",
            Self::Live => "Live",
            Self::Expired => "Expired",
            Self::VotedOrRevoked => "Voted/Revoked",
            Self::None => "None",
        }
    }

    /// Returns true for any real ticket stage.
    #[must_use]
    pub const fn is_ticket(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
