//! Asset types supported by the wallet views.
//!
//! Each asset knows its ticker and how many atoms make up one coin, which is
//! enough to render amounts the way the wallet backends do.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Atoms per coin for every supported asset (satoshis, litoshis, DCR atoms).
pub const ATOMS_PER_COIN: f64 = 100_000_000.0;

// ============================================================================
// Asset Type
// ============================================================================

/// Cryptocurrency asset a wallet holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Bitcoin.
    Btc,
    /// Decred, the only asset with staking (tickets, votes, revocations).
    Dcr,
    /// Litecoin.
    Ltc,
}

impl AssetType {
    /// Returns the upper-case ticker symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Dcr => "DCR",
            Self::Ltc => "LTC",
        }
    }

    /// Returns true if wallets of this asset can hold staking transactions.
    #[must_use]
    pub const fn supports_staking(&self) -> bool {
        matches!(self, Self::Dcr)
    }

    /// Converts an atom amount to whole coins.
    #[must_use]
    pub fn to_coin(&self, atoms: i64) -> f64 {
        atoms as f64 / ATOMS_PER_COIN
    }

    /// Formats an atom amount the way the wallet backends print amounts.
    ///
    /// Uses the shortest decimal representation followed by the ticker,
    /// e.g. `150_000_000` → `"1.5 DCR"` and `-1_000` → `"-0.00001 BTC"`.
    ///
    /// # Arguments
    ///
    /// * `atoms` - Signed amount in atoms
    ///
    /// # Returns
    ///
    /// The formatted amount string.
    #[must_use]
    pub fn format_amount(&self, atoms: i64) -> String {
        format!("{} {}", self.to_coin(atoms), self.symbol())
    }

    /// Parse an asset type from a ticker, case-insensitive.
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "btc" => Some(Self::Btc),
            "dcr" => Some(Self::Dcr),
            "ltc" => Some(Self::Ltc),
            _ => None,
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AssetType::Dcr, 150_000_000, "1.5 DCR")]
    #[case(AssetType::Btc, 100_000_000, "1 BTC")]
    #[case(AssetType::Ltc, -250_000_000, "-2.5 LTC")]
    #[case(AssetType::Btc, 1_000, "0.00001 BTC")]
    #[case(AssetType::Dcr, 0, "0 DCR")]
    fn test_format_amount(#[case] asset: AssetType, #[case] atoms: i64, #[case] expected: &str) {
        assert_eq!(asset.format_amount(atoms), expected);
    }

    #[test]
    fn test_symbol_round_trip_and_staking_support() {
        for asset in [AssetType::Btc, AssetType::Dcr, AssetType::Ltc] {
            assert_eq!(AssetType::from_symbol(asset.symbol()), Some(asset));
        }
        assert_eq!(AssetType::from_symbol("doge"), None);
        assert!(AssetType::Dcr.supports_staking());
        assert!(!AssetType::Btc.supports_staking());
    }
}
