//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting transaction and wallet setup
//! across tests.
#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, Utc};

use crate::domain::{AssetType, Transaction, TxDirection, TxType};
use crate::locale::Locale;
use crate::row::{RowContext, RowLayout};
use crate::snapshot::WalletSnapshot;

/// Fixed "now" for deterministic relative times (Tue, 14 Nov 2023 22:13:20 UTC).
pub const NOW: i64 = 1_700_000_000;

/// Block height the factories mine transactions at.
pub const MINED_HEIGHT: i32 = 990;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TxMother;

impl TxMother {
    #[must_use]
    pub fn regular(hash: &str, direction: TxDirection, amount: i64) -> Transaction {
        Transaction {
            hash: hash.to_string(),
            direction,
            tx_type: TxType::Regular,
            amount,
            block_height: MINED_HEIGHT,
            timestamp: NOW - 600,
            ..Transaction::default()
        }
    }

    #[must_use]
    pub fn mixed(hash: &str, denomination: i64, count: i32) -> Transaction {
        Transaction {
            tx_type: TxType::Mixed,
            direction: TxDirection::Transferred,
            mix_denomination: denomination,
            mix_count: count,
            ..Self::regular(hash, TxDirection::Transferred, denomination * i64::from(count))
        }
    }

    #[must_use]
    pub fn ticket(hash: &str) -> Transaction {
        Transaction {
            tx_type: TxType::TicketPurchase,
            ..Self::regular(hash, TxDirection::Sent, 100_000_000)
        }
    }

    #[must_use]
    pub fn vote(hash: &str) -> Transaction {
        Transaction {
            tx_type: TxType::Vote,
            vote_reward: 50_000_000,
            days_to_vote_or_revoke: 30,
            ..Self::regular(hash, TxDirection::Received, 100_500_000)
        }
    }

    #[must_use]
    pub fn revocation(hash: &str) -> Transaction {
        Transaction {
            tx_type: TxType::Revocation,
            days_to_vote_or_revoke: 142,
            ..Self::regular(hash, TxDirection::Received, 100_000_000)
        }
    }
}

// ============================================================================
// Stub Wallet
// ============================================================================

/// Configurable in-memory wallet; see the `with_*` builders on
/// [`WalletSnapshot`].
pub type StubWallet = WalletSnapshot;

impl WalletSnapshot {
    #[must_use]
    pub fn dcr() -> Self {
        Self::new(AssetType::Dcr).with_heights(1000, 2)
    }

    #[must_use]
    pub fn btc() -> Self {
        Self::new(AssetType::Btc).with_heights(800_000, 6)
    }
}

// ============================================================================
// Row Contexts
// ============================================================================

/// Row context pinned to UTC and [`NOW`].
#[must_use]
pub fn fixed_context(locale: &Locale, layout: RowLayout) -> RowContext<'_, FixedOffset> {
    let utc = FixedOffset::east_opt(0).expect("zero offset is valid");
    let now: DateTime<Utc> = DateTime::from_timestamp(NOW, 0).expect("valid timestamp");
    RowContext::with_zone(locale, layout, utc, now)
}
