//! Transaction row formatting.
//!
//! Turns a classified transaction into the text a wallet list shows: the
//! headline (signed amount or status title), secondary details, and the
//! confirmation label. Rows come in two layouts: the compact overview list
//! and the full transactions page.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, TxDirection, TxFilter, TxType};
use crate::format::{format_confirmed_at, time_ago};
use crate::locale::{Locale, StrKey};
use crate::status::{DisplayStatus, IconKey, classify_with_cancel, ticket_stage};
use crate::theme::ColorRole;
use crate::wallet::{CancelToken, Wallet, WalletQuery};

// ============================================================================
// Confirmations
// ============================================================================

/// Number of confirmations a transaction has.
///
/// Mined transactions count `best_height - block_height + 1`, floored at
/// zero; unmined transactions have none.
#[must_use]
pub fn tx_confirmations<W: WalletQuery + ?Sized>(wallet: &W, tx: &Transaction) -> i32 {
    if tx.is_mined() {
        wallet
            .best_block_height()
            .saturating_sub(tx.block_height)
            .saturating_add(1)
            .max(0)
    } else {
        0
    }
}

/// Where a transaction stands relative to the wallet's confirmation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum ConfirmationState {
    /// No confirmations yet.
    Unconfirmed,
    /// At least one confirmation but fewer than required.
    Pending { confirmations: i32, required: i32 },
    /// Reached the required confirmations.
    Confirmed,
}

impl ConfirmationState {
    /// Classifies a confirmation count against the required count.
    #[must_use]
    pub const fn from_counts(confirmations: i32, required: i32) -> Self {
        if confirmations < 1 {
            Self::Unconfirmed
        } else if confirmations < required {
            Self::Pending {
                confirmations,
                required,
            }
        } else {
            Self::Confirmed
        }
    }

    /// Color role of the status label.
    #[must_use]
    pub const fn label_color(&self) -> ColorRole {
        match self {
            Self::Unconfirmed | Self::Pending { .. } => ColorRole::GrayText1,
            Self::Confirmed => ColorRole::GrayText2,
        }
    }
}

/// Confirm/pending icon for a confirmation count.
///
/// Decided on the counts alone: with zero required confirmations an
/// unconfirmed transaction still shows the confirm icon.
#[must_use]
pub const fn confirmation_icon(confirmations: i32, required: i32) -> IconKey {
    if confirmations < required {
        IconKey::Pending
    } else {
        IconKey::Confirm
    }
}

// ============================================================================
// Amounts
// ============================================================================

/// Formats the transaction amount, prefixing `-` for sent regular
/// transactions.
///
/// The check is on the formatted string: an amount that already contains a
/// `-` anywhere is left alone.
#[must_use]
pub fn signed_amount<W: WalletQuery + ?Sized>(wallet: &W, tx: &Transaction) -> String {
    let amount = wallet.format_amount(tx.amount);
    if tx.tx_type == TxType::Regular && tx.direction == TxDirection::Sent && !amount.contains('-')
    {
        format!("-{amount}")
    } else {
        amount
    }
}

/// Formats a vote reward in coins with two decimals, `+` prefixed when
/// positive.
#[must_use]
pub fn format_vote_reward<W: WalletQuery + ?Sized>(wallet: &W, reward_atoms: i64) -> String {
    let coins = wallet.to_coin(reward_atoms);
    if coins > 0.0 {
        format!("+{coins:.2}")
    } else {
        format!("{coins:.2}")
    }
}

// ============================================================================
// Row Context
// ============================================================================

/// Which list the row is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowLayout {
    /// Compact list on the overview page.
    #[default]
    Overview,
    /// Full-width list on the transactions page.
    TxPage,
}

/// Everything outside the wallet that row formatting depends on.
#[derive(Debug, Clone)]
pub struct RowContext<'a, Tz: TimeZone = Local> {
    pub locale: &'a Locale,
    pub layout: RowLayout,
    /// Reference time for relative durations.
    pub now: DateTime<Utc>,
    /// Zone confirmed dates are shown in.
    pub tz: Tz,
    pub cancel: CancelToken,
}

impl<'a> RowContext<'a, Local> {
    /// Context for the local time zone at the current instant.
    #[must_use]
    pub fn local(locale: &'a Locale, layout: RowLayout) -> Self {
        Self {
            locale,
            layout,
            now: Utc::now(),
            tz: Local,
            cancel: CancelToken::new(),
        }
    }
}

impl<'a, Tz: TimeZone> RowContext<'a, Tz> {
    /// Context with an explicit zone and reference time.
    #[must_use]
    pub fn with_zone(locale: &'a Locale, layout: RowLayout, tz: Tz, now: DateTime<Utc>) -> Self {
        Self {
            locale,
            layout,
            now,
            tz,
            cancel: CancelToken::new(),
        }
    }

    fn is_tx_page(&self) -> bool {
        matches!(self.layout, RowLayout::TxPage)
    }
}

// ============================================================================
// Transaction Row
// ============================================================================

/// Display-ready content of one transaction row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TxRow {
    pub hash: String,
    pub status: DisplayStatus,
    /// Signed amount for regular transactions, localized status title
    /// otherwise.
    pub headline: String,
    pub asset_icon: IconKey,
    /// Wallet name, shown on overview rows only.
    pub wallet_name: Option<String>,
    /// Unsigned amount under non-regular overview rows.
    pub secondary_amount: Option<String>,
    /// Formatted mix denomination for mixed overview rows.
    pub mix_denomination: Option<String>,
    /// `x{n}` when more than one output was mixed.
    pub mix_count: Option<String>,
    /// Dot marker for tickets already voted or revoked.
    pub voted_or_revoked: bool,
    /// Reward of the vote that spent this ticket.
    pub vote_reward: Option<String>,
    /// `"{n}d to Vote"` / `"{n}d to Revoke"` on the transactions page.
    pub days_hint: Option<String>,
    /// Stage prefix plus relative time for staking overview rows.
    pub staking_duration: Option<String>,
    pub confirmations: i32,
    pub confirmation: ConfirmationState,
    pub status_label: String,
    pub status_label_color: ColorRole,
    /// Confirm/pending icon, when the layout shows one.
    pub status_icon: Option<IconKey>,
}

/// Classifies and formats one transaction.
#[must_use]
pub fn format_row<W, Tz>(wallet: &W, tx: &Transaction, ctx: &RowContext<'_, Tz>) -> TxRow
where
    W: Wallet + ?Sized,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let status = classify_with_cancel(wallet, tx, &ctx.cancel);
    let locale = ctx.locale;
    let tx_page = ctx.is_tx_page();
    let overview = !tx_page;

    let headline = if tx.tx_type == TxType::Regular {
        signed_amount(wallet, tx)
    } else {
        locale.text(status.title).to_string()
    };

    let is_mixed = tx.tx_type == TxType::Mixed;
    let (mix_denomination, mix_count) = if overview && is_mixed {
        (
            Some(wallet.format_amount(tx.mix_denomination)),
            (tx.mix_count > 1).then(|| format!("x{}", tx.mix_count)),
        )
    } else {
        (None, None)
    };

    let secondary_amount = (overview && !is_mixed && tx.tx_type != TxType::Regular)
        .then(|| wallet.format_amount(tx.amount));

    let voted_or_revoked = overview
        && wallet.asset_type().supports_staking()
        && wallet
            .ticket_has_voted_or_revoked(&tx.hash)
            .inspect_err(|e| tracing::debug!("Voted/revoked check for {} failed: {e}", tx.hash))
            .unwrap_or(false);

    let vote_reward = if overview && wallet.asset_type().supports_staking() {
        wallet
            .ticket_spender_cancellable(&tx.hash, &ctx.cancel)
            .inspect_err(|e| tracing::debug!("Spender lookup for {} failed: {e}", tx.hash))
            .ok()
            .flatten()
            .map(|spender| format_vote_reward(wallet, spender.vote_reward))
    } else {
        None
    };

    let days_hint = (tx_page && tx.tx_type.is_vote_or_revocation()).then(|| {
        let action = match tx.tx_type {
            TxType::Vote => StrKey::Vote,
            _ => StrKey::Revoke,
        };
        locale.format(
            StrKey::DaysToAction,
            &[&tx.days_to_vote_or_revoke, &locale.text(action)],
        )
    });

    let staking_duration = (overview && wallet.tx_matches_filter(tx, TxFilter::Staking))
        .then(|| {
            let prefix = staking_prefix(wallet, tx);
            format!("{} {}", locale.text(prefix), time_ago(tx.timestamp, ctx.now))
        });

    let confirmations = tx_confirmations(wallet, tx);
    let required = wallet.required_confirmations();
    let confirmation = ConfirmationState::from_counts(confirmations, required);
    let status_label = match confirmation {
        ConfirmationState::Unconfirmed => locale.text(StrKey::Unconfirmed).to_string(),
        ConfirmationState::Pending {
            confirmations,
            required,
        } => locale.format(StrKey::TxStatusPending, &[&confirmations, &required]),
        ConfirmationState::Confirmed => format_confirmed_at(tx.timestamp, &ctx.tz, locale),
    };

    let status_icon = (tx_page || tx.tx_type.is_mixed_or_regular())
        .then(|| confirmation_icon(confirmations, required));

    TxRow {
        hash: tx.hash.clone(),
        status,
        headline,
        asset_icon: IconKey::for_asset(wallet.asset_type(), wallet.is_watching_only()),
        wallet_name: overview.then(|| wallet.wallet_name().to_string()),
        secondary_amount,
        mix_denomination,
        mix_count,
        voted_or_revoked,
        vote_reward,
        days_hint,
        staking_duration,
        confirmations,
        confirmation,
        status_label,
        status_label_color: confirmation.label_color(),
        status_icon,
    }
}

/// Formats every transaction of a wallet, in order.
#[must_use]
pub fn format_rows<'t, W, Tz>(
    wallet: &W,
    transactions: impl IntoIterator<Item = &'t Transaction>,
    ctx: &RowContext<'_, Tz>,
) -> Vec<TxRow>
where
    W: Wallet + ?Sized,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    transactions
        .into_iter()
        .map(|tx| format_row(wallet, tx, ctx))
        .collect()
}

fn staking_prefix<W: WalletQuery + ?Sized>(wallet: &W, tx: &Transaction) -> StrKey {
    match tx.tx_type {
        TxType::TicketPurchase => match ticket_stage(wallet, tx) {
            Some(TxFilter::Unmined) => StrKey::Unmined,
            Some(TxFilter::Immature) => StrKey::Immature,
            Some(TxFilter::Live) => StrKey::Live,
            Some(TxFilter::Expired) => StrKey::Expired,
            _ => StrKey::Voted,
        },
        TxType::Revocation => StrKey::Revoked,
        TxType::Regular | TxType::Mixed | TxType::Vote => StrKey::Voted,
    }
}

// ============================================================================
// Tests
// ============================================================================
