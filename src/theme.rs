//! Semantic color roles and the palette that resolves them.
//!
//! Classification only ever selects a [`ColorRole`]. A [`Palette`] owned by
//! the caller turns roles into concrete terminal colors, so the same status
//! can be shown under different themes.

use std::collections::HashMap;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

// ============================================================================
// Color Constants
// ============================================================================

/// Default text color for row titles.
pub const TEXT_COLOR: Color = Color::Rgb(9, 20, 64);

// ============================================================================
// Color Role
// ============================================================================

/// Named color role in the wallet theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Text,
    LightBlue,
    LightBlue6,
    Yellow,
    OrangeYellow,
    Gray4,
    Gray6,
    GrayText1,
    GrayText2,
    Success2,
    Turquoise100,
    Turquoise300,
    Turquoise700,
    Orange,
    Orange2,
    Orange3,
    Danger,
}

impl ColorRole {
    /// Every role, in declaration order.
    pub const ALL: [ColorRole; 17] = [
        ColorRole::Text,
        ColorRole::LightBlue,
        ColorRole::LightBlue6,
        ColorRole::Yellow,
        ColorRole::OrangeYellow,
        ColorRole::Gray4,
        ColorRole::Gray6,
        ColorRole::GrayText1,
        ColorRole::GrayText2,
        ColorRole::Success2,
        ColorRole::Turquoise100,
        ColorRole::Turquoise300,
        ColorRole::Turquoise700,
        ColorRole::Orange,
        ColorRole::Orange2,
        ColorRole::Orange3,
        ColorRole::Danger,
    ];

    /// Returns the built-in light theme color for this role.
    #[must_use]
    pub const fn default_color(&self) -> Color {
        match self {
            Self::Text => TEXT_COLOR,
            Self::LightBlue => Color::Rgb(231, 241, 255),
            Self::LightBlue6 => Color::Rgb(41, 112, 255),
            Self::Yellow => Color::Rgb(255, 196, 0),
            Self::OrangeYellow => Color::Rgb(237, 109, 71),
            Self::Gray4 => Color::Rgb(243, 245, 246),
            Self::Gray6 => Color::Rgb(224, 224, 224),
            Self::GrayText1 => Color::Rgb(61, 88, 115),
            Self::GrayText2 => Color::Rgb(89, 109, 129),
            Self::Success2 => Color::Rgb(65, 190, 83),
            Self::Turquoise100 => Color::Rgb(183, 238, 234),
            Self::Turquoise300 => Color::Rgb(46, 214, 161),
            Self::Turquoise700 => Color::Rgb(0, 153, 134),
            Self::Orange => Color::Rgb(237, 109, 71),
            Self::Orange2 => Color::Rgb(255, 240, 236),
            Self::Orange3 => Color::Rgb(255, 199, 187),
            Self::Danger => Color::Rgb(237, 109, 71),
        }
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Resolves color roles to concrete colors.
///
/// Starts from the built-in defaults; individual roles can be overridden.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    overrides: HashMap<ColorRole, Color>,
}

impl Palette {
    /// Creates a palette with the built-in colors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a palette from textual overrides such as those in the config
    /// file. Values accept color names (`"red"`) or hex (`"#ff8800"`).
    ///
    /// Unparseable values are skipped with a warning, keeping the default.
    #[must_use]
    pub fn from_overrides(overrides: &HashMap<ColorRole, String>) -> Self {
        let mut palette = Self::new();
        for (role, value) in overrides {
            match Color::from_str(value) {
                Ok(color) => palette.set(*role, color),
                Err(_) => tracing::warn!("Ignoring invalid color '{value}' for {role:?}"),
            }
        }
        palette
    }

    /// Overrides the color for one role.
    pub fn set(&mut self, role: ColorRole, color: Color) {
        self.overrides.insert(role, color);
    }

    /// Resolves a role to a concrete color.
    #[must_use]
    pub fn resolve(&self, role: ColorRole) -> Color {
        self.overrides
            .get(&role)
            .copied()
            .unwrap_or_else(|| role.default_color())
    }

    /// Resolves an optional role, falling back to `fallback` when unset.
    #[must_use]
    pub fn resolve_or(&self, role: Option<ColorRole>, fallback: Color) -> Color {
        role.map_or(fallback, |role| self.resolve(role))
    }
}

// ============================================================================
// Tests
// ============================================================================
