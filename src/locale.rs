//! Localized string table.
//!
//! Display text is addressed by [`StrKey`]. A [`Locale`] ships with English
//! text and accepts per-key overrides, typically loaded from the config file.
//! Templates use positional `{0}`, `{1}` placeholders.

use std::collections::HashMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

// ============================================================================
// String Keys
// ============================================================================

/// Key of a localizable string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrKey {
    All,
    Sent,
    Received,
    Transferred,
    Mixed,
    Unmined,
    Immature,
    Live,
    Expired,
    Voted,
    Revoked,
    Vote,
    Revoke,
    Revocation,
    Unknown,
    Unconfirmed,
    /// Template: `{0}` confirmations of `{1}` required.
    TxStatusPending,
    /// Template: `{0}` date, `{1}` time.
    ConfirmedAt,
    /// Template: `{0}` days, `{1}` action ("Vote"/"Revoke").
    DaysToAction,
    Yesterday,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl StrKey {
    /// Returns the built-in English text.
    #[must_use]
    pub const fn english(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Sent => "Sent",
            Self::Received => "Received",
            Self::Transferred => "Transferred",
            Self::Mixed => "Mixed",
            Self::Unmined => "Unmined",
            Self::Immature => "Immature",
            Self::Live => "Live",
            Self::Expired => "Expired",
            Self::Voted => "Voted",
            Self::Revoked => "Revoked",
            Self::Vote => "Vote",
            Self::Revoke => "Revoke",
            Self::Revocation => "Revocation",
            Self::Unknown => "Unknown",
            Self::Unconfirmed => "Unconfirmed",
            Self::TxStatusPending => "Pending ({0}/{1})",
            Self::ConfirmedAt => "{0} at {1}",
            Self::DaysToAction => "{0}d to {1}",
            Self::Yesterday => "Yesterday",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

// ============================================================================
// Locale
// ============================================================================

/// String table for the active language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locale {
    overrides: HashMap<StrKey, String>,
}

impl Locale {
    /// Creates the English locale.
    #[must_use]
    pub fn english() -> Self {
        Self::default()
    }

    /// Creates a locale whose entries replace the English text per key.
    #[must_use]
    pub fn with_overrides(overrides: HashMap<StrKey, String>) -> Self {
        Self { overrides }
    }

    /// Returns the text for a key.
    #[must_use]
    pub fn text(&self, key: StrKey) -> &str {
        self.overrides
            .get(&key)
            .map_or_else(|| key.english(), String::as_str)
    }

    /// Returns the text for a key with `{n}` placeholders replaced by `args[n]`.
    ///
    /// Placeholders without a matching argument are left as-is.
    #[must_use]
    pub fn format(&self, key: StrKey, args: &[&dyn Display]) -> String {
        let template = self.text(key);
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let arg = after.find('}').and_then(|close| {
                let index: usize = after[..close].parse().ok()?;
                args.get(index).map(|arg| (arg, close))
            });
            match arg {
                Some((arg, close)) => {
                    out.push_str(&arg.to_string());
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_text_and_templates() {
        let locale = Locale::english();
        assert_eq!(locale.text(StrKey::Unmined), "Unmined");
        assert_eq!(
            locale.format(StrKey::TxStatusPending, &[&5, &6]),
            "Pending (5/6)"
        );
        assert_eq!(locale.format(StrKey::DaysToAction, &[&12, &"Vote"]), "12d to Vote");
    }

    #[test]
    fn test_overrides_take_precedence() {
        let locale = Locale::with_overrides(HashMap::from([(
            StrKey::TxStatusPending,
            "En attente ({0}/{1})".to_string(),
        )]));
        assert_eq!(
            locale.format(StrKey::TxStatusPending, &[&1, &2]),
            "En attente (1/2)"
        );
        assert_eq!(locale.text(StrKey::Sent), "Sent");
    }

    #[test]
    fn test_missing_arguments_leave_placeholders() {
        let locale = Locale::english();
        assert_eq!(locale.format(StrKey::ConfirmedAt, &[&"Jan 2, 2006"]), "Jan 2, 2006 at {1}");
    }

    #[test]
    fn test_argument_text_is_not_expanded() {
        let locale = Locale::english();
        assert_eq!(
            locale.format(StrKey::ConfirmedAt, &[&"{1}", &"10:04:05 PM"]),
            "{1} at 10:04:05 PM"
        );
        assert_eq!(locale.format(StrKey::TxStatusPending, &[&"{x}", &2]), "Pending ({x}/2)");
    }
}
