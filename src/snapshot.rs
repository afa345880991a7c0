//! Serializable wallet state.
//!
//! A [`WalletSnapshot`] captures what a backend would answer for one wallet
//! (best height, confirmations policy, transactions, ticket bookkeeping) so
//! rows can be produced without a running wallet. The CLI reads snapshots
//! from JSON files; tests build them with the `with_*` helpers.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REQUIRED_CONFIRMATIONS, DEFAULT_WALLET_NAME};
use crate::domain::{
    AssetType, SnapshotError, Transaction, TxDirection, TxFilter, TxType, WalletError,
};
use crate::wallet::{TicketSpenderLookup, WalletQuery};

// ============================================================================
// Staking Record
// ============================================================================

/// Backend bookkeeping for one staking transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StakingRecord {
    /// Lifecycle filter the ticket currently matches, if any.
    pub stage: Option<TxFilter>,
    /// Vote or revocation that spent the ticket.
    pub spender: Option<Transaction>,
}

// ============================================================================
// Wallet Snapshot
// ============================================================================

/// Point-in-time view of a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletSnapshot {
    pub name: String,
    pub asset: AssetType,
    pub watch_only: bool,
    pub best_block_height: i32,
    pub required_confirmations: i32,
    pub transactions: Vec<Transaction>,
    /// Staking records keyed by transaction hash. Presence means the
    /// transaction matches the staking filter.
    pub staking: HashMap<String, StakingRecord>,
    /// When set, every spender lookup fails with this message.
    pub spender_lookup_error: Option<String>,
}

impl Default for WalletSnapshot {
    fn default() -> Self {
        Self {
            name: DEFAULT_WALLET_NAME.to_string(),
            asset: AssetType::Dcr,
            watch_only: false,
            best_block_height: 0,
            required_confirmations: DEFAULT_REQUIRED_CONFIRMATIONS,
            transactions: Vec::new(),
            staking: HashMap::new(),
            spender_lookup_error: None,
        }
    }
}

impl WalletSnapshot {
    /// Creates an empty snapshot for the given asset.
    #[must_use]
    pub fn new(asset: AssetType) -> Self {
        Self {
            asset,
            ..Self::default()
        }
    }

    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Parse`] if the JSON does not match.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let snapshot = Self::from_json(&json)?;
        tracing::debug!(
            "Loaded snapshot '{}' with {} transactions",
            snapshot.name,
            snapshot.transactions.len()
        );
        Ok(snapshot)
    }

    // ------------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    #[must_use]
    pub fn with_heights(mut self, best_block_height: i32, required_confirmations: i32) -> Self {
        self.best_block_height = best_block_height;
        self.required_confirmations = required_confirmations;
        self
    }

    #[must_use]
    pub fn with_watch_only(mut self, watch_only: bool) -> Self {
        self.watch_only = watch_only;
        self
    }

    #[must_use]
    pub fn with_transaction(mut self, tx: Transaction) -> Self {
        self.transactions.push(tx);
        self
    }

    /// Marks a transaction as matching the staking filter.
    #[must_use]
    pub fn with_staking(mut self, hash: &str) -> Self {
        self.staking.entry(hash.to_string()).or_default();
        self
    }

    /// Marks a ticket as staking and in the given lifecycle stage.
    #[must_use]
    pub fn with_stage(mut self, hash: &str, stage: TxFilter) -> Self {
        self.staking.entry(hash.to_string()).or_default().stage = Some(stage);
        self
    }

    /// Records the vote or revocation that spent a ticket.
    #[must_use]
    pub fn with_spender(mut self, hash: &str, spender: Transaction) -> Self {
        self.staking.entry(hash.to_string()).or_default().spender = Some(spender);
        self
    }

    /// Makes every spender lookup fail.
    #[must_use]
    pub fn with_lookup_error(mut self, message: &str) -> Self {
        self.spender_lookup_error = Some(message.to_string());
        self
    }

    fn record(&self, hash: &str) -> Option<&StakingRecord> {
        self.staking.get(hash)
    }
}

impl WalletQuery for WalletSnapshot {
    fn best_block_height(&self) -> i32 {
        self.best_block_height
    }

    fn required_confirmations(&self) -> i32 {
        self.required_confirmations
    }

    fn tx_matches_filter(&self, tx: &Transaction, filter: TxFilter) -> bool {
        let is_staking = self.record(&tx.hash).is_some();
        match filter {
            TxFilter::All => true,
            TxFilter::AllTx => !is_staking,
            TxFilter::Sent => tx.direction == TxDirection::Sent && tx.tx_type == TxType::Regular,
            TxFilter::Received => {
                tx.direction == TxDirection::Received && tx.tx_type == TxType::Regular
            }
            TxFilter::Transferred => {
                tx.direction == TxDirection::Transferred && tx.tx_type == TxType::Regular
            }
            TxFilter::Mixed => tx.tx_type == TxType::Mixed,
            TxFilter::Staking => is_staking,
            TxFilter::Voted => is_staking && tx.tx_type == TxType::Vote,
            TxFilter::Revoked => is_staking && tx.tx_type == TxType::Revocation,
            TxFilter::Unmined | TxFilter::Immature | TxFilter::Live | TxFilter::Expired => self
                .record(&tx.hash)
                .is_some_and(|record| record.stage == Some(filter)),
        }
    }

    fn asset_type(&self) -> AssetType {
        self.asset
    }

    fn wallet_name(&self) -> &str {
        &self.name
    }

    fn is_watching_only(&self) -> bool {
        self.watch_only
    }
}

impl TicketSpenderLookup for WalletSnapshot {
    fn ticket_spender(&self, ticket_hash: &str) -> Result<Option<Transaction>, WalletError> {
        if let Some(message) = &self.spender_lookup_error {
            return Err(WalletError::backend(message.clone()));
        }
        Ok(self
            .record(ticket_hash)
            .and_then(|record| record.spender.clone()))
    }

    fn ticket_has_voted_or_revoked(&self, ticket_hash: &str) -> Result<bool, WalletError> {
        Ok(self.ticket_spender(ticket_hash)?.is_some())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TxMother;

    #[test]
    fn test_from_json_with_defaults() {
        let json = r#"{
            "name": "Savings",
            "asset": "dcr",
            "best_block_height": 1000,
            "transactions": [
                {"hash": "t1", "direction": "sent", "type": "ticket_purchase", "block_height": 990}
            ],
            "staking": {"t1": {"stage": "live"}}
        }"#;

        let snapshot = WalletSnapshot::from_json(json).unwrap();

        assert_eq!(snapshot.wallet_name(), "Savings");
        assert_eq!(snapshot.required_confirmations(), DEFAULT_REQUIRED_CONFIRMATIONS);
        let tx = &snapshot.transactions[0];
        assert!(snapshot.tx_matches_filter(tx, TxFilter::Staking));
        assert!(snapshot.tx_matches_filter(tx, TxFilter::Live));
        assert!(!snapshot.tx_matches_filter(tx, TxFilter::Immature));
        assert!(!snapshot.tx_matches_filter(tx, TxFilter::AllTx));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = WalletSnapshot::from_json("{\"asset\": \"doge\"}").unwrap_err();
        assert!(matches!(err, SnapshotError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = WalletSnapshot::load(Path::new("/nonexistent/txlens.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn test_direction_filters_only_match_regular() {
        let wallet = WalletSnapshot::new(AssetType::Btc);
        let sent = TxMother::regular("a", TxDirection::Sent, 5);
        let mixed = Transaction {
            direction: TxDirection::Sent,
            ..TxMother::mixed("b", 1, 1)
        };

        assert!(wallet.tx_matches_filter(&sent, TxFilter::Sent));
        assert!(!wallet.tx_matches_filter(&mixed, TxFilter::Sent));
        assert!(wallet.tx_matches_filter(&mixed, TxFilter::Mixed));
        assert!(wallet.tx_matches_filter(&mixed, TxFilter::All));
    }

    #[test]
    fn test_spender_lookup_and_error() {
        let ticket = TxMother::ticket("t1");
        let wallet = WalletSnapshot::default().with_spender(&ticket.hash, TxMother::vote("v1"));

        assert_eq!(
            wallet.ticket_spender("t1").unwrap().map(|tx| tx.hash),
            Some("v1".to_string())
        );
        assert_eq!(wallet.ticket_has_voted_or_revoked("t1"), Ok(true));
        assert_eq!(wallet.ticket_has_voted_or_revoked("other"), Ok(false));

        let failing = wallet.with_lookup_error("offline");
        assert_eq!(
            failing.ticket_spender("t1"),
            Err(WalletError::backend("offline"))
        );
    }
}
