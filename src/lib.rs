//! txlens - transaction status classification and row formatting for
//! multi-asset wallet views.
//!
//! The crate sits between a wallet backend and a UI: it asks the backend
//! questions through the [`wallet`] traits, classifies each transaction into
//! a [`status::DisplayStatus`], and formats a [`row::TxRow`] with text
//! resolved through an explicit [`locale::Locale`] and colors resolved
//! through a [`theme::Palette`].

pub mod config;
pub mod constants;
pub mod domain;
pub mod filters;
pub mod format;
pub mod locale;
pub mod overview;
pub mod row;
pub mod snapshot;
pub mod status;
pub mod theme;
pub mod wallet;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use domain::{AssetType, TicketStatus, Transaction, TxDirection, TxFilter, TxType};
pub use row::{RowContext, RowLayout, TxRow, format_row, format_rows};
pub use status::{DisplayStatus, IconKey, classify, classify_with_cancel};
pub use wallet::{CancelToken, TicketSpenderLookup, Wallet, WalletQuery};
