//! Capabilities the presentation layer needs from a wallet backend.
//!
//! The backend owns synchronization, filtering and ticket bookkeeping. This
//! crate only asks questions through these traits and never caches answers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::{AssetType, Transaction, TxFilter, WalletError};

// ============================================================================
// Cancellation
// ============================================================================

/// Cloneable cancellation flag forwarded to backend lookups.
///
/// Clones share state: cancelling one handle cancels them all.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns true once cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Wallet Query
// ============================================================================

/// Read-only wallet queries used to classify and format transactions.
pub trait WalletQuery {
    /// Height of the best block known to the wallet.
    fn best_block_height(&self) -> i32;

    /// Confirmations needed before a transaction counts as confirmed.
    fn required_confirmations(&self) -> i32;

    /// Whether `tx` belongs to the category described by `filter`.
    fn tx_matches_filter(&self, tx: &Transaction, filter: TxFilter) -> bool;

    /// Asset the wallet holds.
    fn asset_type(&self) -> AssetType;

    /// Display name of the wallet.
    fn wallet_name(&self) -> &str;

    /// Whether the wallet holds only public keys.
    fn is_watching_only(&self) -> bool {
        false
    }

    /// Formats an atom amount in the wallet's asset.
    fn format_amount(&self, atoms: i64) -> String {
        self.asset_type().format_amount(atoms)
    }

    /// Converts an atom amount to whole coins.
    fn to_coin(&self, atoms: i64) -> f64 {
        self.asset_type().to_coin(atoms)
    }
}

// ============================================================================
// Ticket Spender Lookup
// ============================================================================

/// Ticket queries only staking wallets can answer.
///
/// The defaults describe a wallet without tickets, so BTC and LTC wallets can
/// implement this trait with an empty `impl` block.
pub trait TicketSpenderLookup {
    /// Returns the vote or revocation that spent the ticket, if any.
    fn ticket_spender(&self, _ticket_hash: &str) -> Result<Option<Transaction>, WalletError> {
        Ok(None)
    }

    /// Same as [`ticket_spender`](Self::ticket_spender) but honours a
    /// cancellation token. Backends with native cancellation should override
    /// this and forward the token.
    fn ticket_spender_cancellable(
        &self,
        ticket_hash: &str,
        cancel: &CancelToken,
    ) -> Result<Option<Transaction>, WalletError> {
        if cancel.is_cancelled() {
            return Err(WalletError::Cancelled);
        }
        self.ticket_spender(ticket_hash)
    }

    /// Whether the ticket has already been voted or revoked.
    fn ticket_has_voted_or_revoked(&self, _ticket_hash: &str) -> Result<bool, WalletError> {
        Ok(false)
    }
}

/// Everything the row pipeline needs from one wallet.
pub trait Wallet: WalletQuery + TicketSpenderLookup {}

impl<T: WalletQuery + TicketSpenderLookup + ?Sized> Wallet for T {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingLookup {
        calls: std::cell::Cell<u32>,
    }

    impl TicketSpenderLookup for CountingLookup {
        fn ticket_spender(&self, _ticket_hash: &str) -> Result<Option<Transaction>, WalletError> {
            self.calls.set(self.calls.get() + 1);
            Ok(None)
        }
    }

    #[test]
    fn test_cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_cancelled_lookup_skips_backend() {
        let lookup = CountingLookup {
            calls: std::cell::Cell::new(0),
        };
        let token = CancelToken::new();

        assert_eq!(lookup.ticket_spender_cancellable("h", &token), Ok(None));
        token.cancel();
        assert_eq!(
            lookup.ticket_spender_cancellable("h", &token),
            Err(WalletError::Cancelled)
        );
        assert_eq!(lookup.calls.get(), 1);
    }
}
