//! Staking overview counts.

use serde::Serialize;

use crate::domain::TicketStatus;
use crate::status::DisplayStatus;

/// Number of tickets in each lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StakingOverview {
    pub unmined: usize,
    pub immature: usize,
    pub live: usize,
    pub expired: usize,
    pub voted_or_revoked: usize,
}

impl StakingOverview {
    /// Counts ticket statuses; non-ticket statuses are ignored.
    ///
    /// Pass only ticket purchase statuses, otherwise a vote and the ticket it
    /// spent are both counted.
    #[must_use]
    pub fn tally<'a>(statuses: impl IntoIterator<Item = &'a DisplayStatus>) -> Self {
        statuses
            .into_iter()
            .fold(Self::default(), |mut overview, status| {
                match status.ticket_status {
                    TicketStatus::Unmined => overview.unmined += 1,
                    TicketStatus::Immature => overview.immature += 1,
                    TicketStatus::Live => overview.live += 1,
                    TicketStatus::Expired => overview.expired += 1,
                    TicketStatus::VotedOrRevoked => overview.voted_or_revoked += 1,
                    TicketStatus::None => {}
                }
                overview
            })
    }

    /// Total number of tickets counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.unmined + self.immature + self.live + self.expired + self.voted_or_revoked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TxDirection, TxFilter};

    #[test]
    fn test_tally_counts_ticket_statuses_only() {
        let statuses = [
            DisplayStatus::for_ticket_stage(TxFilter::Live).unwrap(),
            DisplayStatus::for_ticket_stage(TxFilter::Live).unwrap(),
            DisplayStatus::for_ticket_stage(TxFilter::Unmined).unwrap(),
            DisplayStatus::voted(),
            DisplayStatus::revocation(),
            DisplayStatus::mixed(),
            DisplayStatus::for_direction(TxDirection::Sent),
        ];

        let overview = StakingOverview::tally(&statuses);

        assert_eq!(
            overview,
            StakingOverview {
                unmined: 1,
                immature: 0,
                live: 2,
                expired: 0,
                voted_or_revoked: 2,
            }
        );
        assert_eq!(overview.total(), 5);
    }
}
