//! Application constants for txlens.
//!
//! Centralizes the defaults shared by the snapshot loader, the row formatter
//! and the CLI.

// ============================================================================
// Wallet Defaults
// ============================================================================

/// Confirmations required when a snapshot does not say otherwise.
pub const DEFAULT_REQUIRED_CONFIRMATIONS: i32 = 2;

/// Wallet name used when a snapshot does not provide one.
pub const DEFAULT_WALLET_NAME: &str = "Default wallet";

// ============================================================================
// Formatting
// ============================================================================

/// Date layout for confirmed transactions, e.g. `Jan 2, 2006`.
pub const CONFIRMED_DATE_FORMAT: &str = "%b %-d, %Y";

/// Time layout for confirmed transactions, e.g. `03:04:05 PM`.
pub const CONFIRMED_TIME_FORMAT: &str = "%I:%M:%S %p";

/// Seconds in a day.
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Seconds in an hour.
pub const SECONDS_PER_HOUR: i64 = 60 * 60;

/// Seconds in a minute.
pub const SECONDS_PER_MINUTE: i64 = 60;

// ============================================================================
// Application
// ============================================================================

/// Application name used for the configuration directory.
pub const APP_NAME: &str = "txlens";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.json";
