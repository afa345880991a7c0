//! Transaction list filter dropdowns.
//!
//! Each asset and tab of the transactions page offers a fixed, ordered set
//! of filters. Entries are returned as an ordered list so the dropdown keeps
//! its order.

use crate::domain::{AssetType, TxFilter};
use crate::locale::StrKey;

/// Tab of the transactions page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxPageTab {
    /// Regular activity (tab 0).
    Transactions,
    /// Staking activity (tab 1), DCR only.
    Staking,
}

impl TxPageTab {
    /// Maps a tab index to a tab.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Transactions),
            1 => Some(Self::Staking),
            _ => None,
        }
    }
}

/// Returns the dropdown entries for an asset's transactions page tab.
///
/// Unsupported combinations (e.g. the staking tab of a BTC wallet) yield no
/// entries.
#[must_use]
pub fn tx_page_dropdown_fields(asset: AssetType, tab: TxPageTab) -> Vec<(StrKey, TxFilter)> {
    match (asset, tab) {
        (AssetType::Btc | AssetType::Ltc, TxPageTab::Transactions) => vec![
            (StrKey::All, TxFilter::All),
            (StrKey::Sent, TxFilter::Sent),
            (StrKey::Received, TxFilter::Received),
        ],
        (AssetType::Dcr, TxPageTab::Transactions) => vec![
            (StrKey::All, TxFilter::AllTx),
            (StrKey::Sent, TxFilter::Sent),
            (StrKey::Received, TxFilter::Received),
            (StrKey::Transferred, TxFilter::Transferred),
            (StrKey::Mixed, TxFilter::Mixed),
        ],
        (AssetType::Dcr, TxPageTab::Staking) => vec![
            (StrKey::All, TxFilter::Staking),
            (StrKey::Vote, TxFilter::Voted),
            (StrKey::Revocation, TxFilter::Revoked),
        ],
        (AssetType::Btc | AssetType::Ltc, TxPageTab::Staking) => Vec::new(),
    }
}
