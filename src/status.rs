//! Transaction status classification.
//!
//! Derives the title, icon, color roles and ticket status a transaction row
//! displays, from the transaction's direction and type plus the wallet's
//! staking filters. Classification is pure and total: every transaction maps
//! to exactly one [`DisplayStatus`], and backend lookup failures degrade to
//! the direction-based default instead of erroring.
//!
//! # Priority
//!
//! 1. Base status from direction (sent / received / transferred).
//! 2. Staking transactions override by type: ticket purchases by lifecycle
//!    stage (unmined, immature, live, expired, then voted/revoked via the
//!    spender), votes as `Vote`, everything else as `Revocation`.
//! 3. Otherwise mixed transactions override the title and icon.

use serde::Serialize;

use crate::domain::{AssetType, TicketStatus, Transaction, TxDirection, TxFilter, TxType};
use crate::locale::StrKey;
use crate::theme::ColorRole;
use crate::wallet::{CancelToken, Wallet, WalletQuery};

// ============================================================================
// Icon Keys
// ============================================================================

/// Symbolic reference to an icon asset owned by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKey {
    Send,
    Receive,
    Transferred,
    MixedTx,
    TicketUnmined,
    TicketImmature,
    TicketLive,
    TicketExpired,
    TicketVoted,
    TicketRevoked,
    /// Transaction reached the required confirmations.
    Confirm,
    /// Transaction is still gathering confirmations.
    Pending,
    /// Coin logo for a wallet.
    Asset { asset: AssetType, watch_only: bool },
}

impl IconKey {
    /// Returns the asset logo key for a wallet.
    #[must_use]
    pub const fn for_asset(asset: AssetType, watch_only: bool) -> Self {
        Self::Asset { asset, watch_only }
    }

    /// Returns a short glyph for text-only renderers.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Send => "↑",
            Self::Receive => "↓",
            Self::Transferred => "⇄",
            Self::MixedTx => "⧉",
            Self::TicketUnmined => "○",
            Self::TicketImmature => "◔",
            Self::TicketLive => "●",
            Self::TicketExpired => "◌",
            Self::TicketVoted => "✓",
            Self::TicketRevoked => "✗",
            Self::Confirm => "✔",
            Self::Pending => "…",
            Self::Asset { .. } => "◆",
        }
    }
}

// ============================================================================
// Display Status
// ============================================================================

/// Display category of one transaction.
///
/// Color fields hold theme roles. `None` means the host's default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayStatus {
    pub title: StrKey,
    pub icon: IconKey,
    pub color: Option<ColorRole>,
    pub progress_bar_color: Option<ColorRole>,
    pub progress_track_color: Option<ColorRole>,
    pub background: Option<ColorRole>,
    pub ticket_status: TicketStatus,
}

impl DisplayStatus {
    const fn plain(title: StrKey, icon: IconKey) -> Self {
        Self {
            title,
            icon,
            color: None,
            progress_bar_color: None,
            progress_track_color: None,
            background: None,
            ticket_status: TicketStatus::None,
        }
    }

    /// Base status derived from the transaction direction alone.
    #[must_use]
    pub const fn for_direction(direction: TxDirection) -> Self {
        match direction {
            TxDirection::Sent => Self::plain(StrKey::Sent, IconKey::Send),
            TxDirection::Received => Self::plain(StrKey::Received, IconKey::Receive),
            TxDirection::Transferred => Self::plain(StrKey::Transferred, IconKey::Transferred),
        }
    }

    /// Status for a ticket that matched one of the lifecycle filters.
    ///
    /// Returns `None` for filters that are not ticket stages.
    #[must_use]
    pub const fn for_ticket_stage(stage: TxFilter) -> Option<Self> {
        let status = match stage {
            TxFilter::Unmined => Self {
                color: Some(ColorRole::LightBlue6),
                background: Some(ColorRole::LightBlue),
                ticket_status: TicketStatus::Unmined,
                ..Self::plain(StrKey::Unmined, IconKey::TicketUnmined)
            },
            TxFilter::Immature => Self {
                color: Some(ColorRole::Yellow),
                progress_bar_color: Some(ColorRole::OrangeYellow),
                progress_track_color: Some(ColorRole::Gray6),
                background: Some(ColorRole::Yellow),
                ticket_status: TicketStatus::Immature,
                ..Self::plain(StrKey::Immature, IconKey::TicketImmature)
            },
            TxFilter::Live => Self {
                color: Some(ColorRole::Success2),
                progress_bar_color: Some(ColorRole::Success2),
                progress_track_color: Some(ColorRole::Success2),
                background: Some(ColorRole::Success2),
                ticket_status: TicketStatus::Live,
                ..Self::plain(StrKey::Live, IconKey::TicketLive)
            },
            TxFilter::Expired => Self {
                color: Some(ColorRole::GrayText2),
                background: Some(ColorRole::Gray4),
                ticket_status: TicketStatus::Expired,
                ..Self::plain(StrKey::Expired, IconKey::TicketExpired)
            },
            _ => return None,
        };
        Some(status)
    }

    /// Ticket purchase whose spender was a vote.
    #[must_use]
    pub const fn voted() -> Self {
        Self::voted_titled(StrKey::Voted)
    }

    /// Ticket purchase whose spender was a revocation.
    #[must_use]
    pub const fn revoked() -> Self {
        Self::revoked_titled(StrKey::Revoked)
    }

    /// The vote transaction itself.
    #[must_use]
    pub const fn vote() -> Self {
        Self::voted_titled(StrKey::Vote)
    }

    /// The revocation transaction itself.
    #[must_use]
    pub const fn revocation() -> Self {
        Self::revoked_titled(StrKey::Revocation)
    }

    /// Coin-mixing output, regardless of direction.
    #[must_use]
    pub const fn mixed() -> Self {
        Self::plain(StrKey::Mixed, IconKey::MixedTx)
    }

    const fn voted_titled(title: StrKey) -> Self {
        Self {
            color: Some(ColorRole::Turquoise700),
            progress_bar_color: Some(ColorRole::Turquoise300),
            progress_track_color: Some(ColorRole::Turquoise100),
            background: Some(ColorRole::Success2),
            ticket_status: TicketStatus::VotedOrRevoked,
            ..Self::plain(title, IconKey::TicketVoted)
        }
    }

    const fn revoked_titled(title: StrKey) -> Self {
        Self {
            color: Some(ColorRole::Orange),
            progress_bar_color: Some(ColorRole::Danger),
            progress_track_color: Some(ColorRole::Orange3),
            background: Some(ColorRole::Orange2),
            ticket_status: TicketStatus::VotedOrRevoked,
            ..Self::plain(title, IconKey::TicketRevoked)
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Returns the first ticket lifecycle filter the transaction matches.
///
/// Stages are checked in order: unmined, immature, live, expired.
#[must_use]
pub fn ticket_stage<W: WalletQuery + ?Sized>(wallet: &W, tx: &Transaction) -> Option<TxFilter> {
    TxFilter::TICKET_STAGES
        .into_iter()
        .find(|stage| wallet.tx_matches_filter(tx, *stage))
}

/// Classifies a transaction into its display status.
///
/// See the module docs for the rule order. Never fails.
#[must_use]
pub fn classify<W: Wallet + ?Sized>(wallet: &W, tx: &Transaction) -> DisplayStatus {
    classify_with_cancel(wallet, tx, &CancelToken::new())
}

/// Same as [`classify`], forwarding `cancel` to the ticket spender lookup.
///
/// A cancelled lookup is treated like a failed one: no override applies.
#[must_use]
pub fn classify_with_cancel<W: Wallet + ?Sized>(
    wallet: &W,
    tx: &Transaction,
    cancel: &CancelToken,
) -> DisplayStatus {
    let base = DisplayStatus::for_direction(tx.direction);

    if wallet.tx_matches_filter(tx, TxFilter::Staking) {
        return match tx.tx_type {
            TxType::TicketPurchase => ticket_purchase_status(wallet, tx, cancel).unwrap_or(base),
            TxType::Vote => DisplayStatus::vote(),
            TxType::Regular | TxType::Mixed | TxType::Revocation => DisplayStatus::revocation(),
        };
    }

    match tx.tx_type {
        TxType::Mixed => DisplayStatus::mixed(),
        TxType::Regular | TxType::TicketPurchase | TxType::Vote | TxType::Revocation => base,
    }
}

fn ticket_purchase_status<W: Wallet + ?Sized>(
    wallet: &W,
    tx: &Transaction,
    cancel: &CancelToken,
) -> Option<DisplayStatus> {
    if let Some(stage) = ticket_stage(wallet, tx) {
        return DisplayStatus::for_ticket_stage(stage);
    }

    match wallet.ticket_spender_cancellable(&tx.hash, cancel) {
        Ok(Some(spender)) => Some(match spender.tx_type {
            TxType::Vote => DisplayStatus::voted(),
            _ => DisplayStatus::revoked(),
        }),
        Ok(None) => {
            tracing::debug!(
                "Ticket {} matches no lifecycle filter and has no spender",
                tx.hash
            );
            None
        }
        Err(e) => {
            tracing::warn!("Ticket spender lookup for {} failed: {e}", tx.hash);
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
