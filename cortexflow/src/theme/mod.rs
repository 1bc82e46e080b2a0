//! Theme tokens for the dashboard.
//!
//! The original drafts duplicated visual constants (colors, font sizes) as
//! inline style objects in every component. Here the recognized tokens are
//! enumerated once in [`Theme`] and handed to widgets by reference.
//!
//! Two palettes exist, selected by [`ThemeMode`]. The accent color can be
//! overridden from configuration without forking the whole palette.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Theme parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    /// Color string is not of the form `#RRGGBB`.
    #[error("Invalid color '{0}' - expected format like '#6425FE'")]
    InvalidColor(String),

    /// Unknown theme mode name.
    #[error("Unknown theme mode '{0}' - must be 'light' or 'dark'")]
    UnknownMode(String),
}

/// An RGB color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from component values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ThemeError> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ThemeError::InvalidColor(s.to_string()))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidColor(s.to_string()));
        }
        let parse = |range| u8::from_str_radix(&hex[range], 16);
        match (parse(0..2), parse(2..4), parse(4..6)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            _ => Err(ThemeError::InvalidColor(s.to_string())),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Configuration name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ThemeError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete token set consumed by widgets.
///
/// Field names follow the roles the tokens play, not the components that use
/// them, so a token can be shared (the accent tints the add-device control,
/// the active nav item, and the manage affordance alike).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Panel background.
    pub base: Rgb,
    /// Title and greeting text.
    pub title: Rgb,
    /// Primary sidebar font color.
    pub sidebar_font: Rgb,
    /// Brand accent (active nav item, action affordances).
    pub accent: Rgb,
    /// Hover/selection tint behind the active nav item.
    pub selection_bg: Rgb,
    /// Destructive accent (the logout item).
    pub signout: Rgb,
    /// Metric card caption ("Current Value").
    pub metric_caption: Rgb,
    /// Metric card value text.
    pub metric_value: Rgb,
    /// Advice callout text.
    pub advice: Rgb,
    /// Accent tints for the four metric cards, in row order.
    pub metric_accents: [Rgb; 4],
}

impl Theme {
    /// The light palette.
    pub fn light() -> Self {
        Self {
            base: Rgb::new(0xFF, 0xFF, 0xFF),
            title: Rgb::new(0x2C, 0x2C, 0x2C),
            sidebar_font: Rgb::new(0x84, 0x82, 0x8A),
            accent: Rgb::new(0x64, 0x25, 0xFE),
            selection_bg: Rgb::new(0xEF, 0xE9, 0xFF),
            signout: Rgb::new(0xFA, 0x05, 0x05),
            metric_caption: Rgb::new(0x7B, 0x6A, 0x6A),
            metric_value: Rgb::new(0x83, 0x6E, 0x6E),
            advice: Rgb::new(0x83, 0x83, 0x83),
            metric_accents: METRIC_ACCENTS,
        }
    }

    /// The dark palette.
    ///
    /// Only the tokens the source palette inverts differ from light; the
    /// accent and metric tints are shared.
    pub fn dark() -> Self {
        Self {
            base: Rgb::new(0x2C, 0x2C, 0x2C),
            title: Rgb::new(0xF7, 0xF7, 0xF7),
            sidebar_font: Rgb::new(0xC9, 0xC9, 0xC9),
            ..Self::light()
        }
    }

    /// Build the palette for a mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Override the brand accent, keeping the rest of the palette.
    pub fn with_accent(mut self, accent: Rgb) -> Self {
        self.accent = accent;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Metric card tints in row order: Memory, CPU, Node Status, Deployment Status.
pub const METRIC_ACCENTS: [Rgb; 4] = [
    Rgb::new(0xA6, 0xF7, 0xE2),
    Rgb::new(0xD5, 0xC4, 0xFF),
    Rgb::new(0xFF, 0xE5, 0xA5),
    Rgb::new(0xC7, 0xFF, 0xA5),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_parses_uppercase_and_lowercase() {
        assert_eq!(Rgb::from_hex("#6425FE").unwrap(), Rgb::new(0x64, 0x25, 0xFE));
        assert_eq!(Rgb::from_hex("#6425fe").unwrap(), Rgb::new(0x64, 0x25, 0xFE));
        assert_eq!(Rgb::from_hex(" #ffffff ").unwrap(), Rgb::new(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn test_from_hex_rejects_malformed_input() {
        for input in ["6425FE", "#6425F", "#6425FEA", "#64 5FE", "#GGGGGG", ""] {
            assert!(Rgb::from_hex(input).is_err(), "accepted '{}'", input);
        }
    }

    #[test]
    fn test_display_round_trips() {
        let color = Rgb::new(0x64, 0x25, 0xFE);
        assert_eq!(color.to_string(), "#6425FE");
        assert_eq!(Rgb::from_hex(&color.to_string()).unwrap(), color);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("solarized".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_palettes_differ_where_source_differs() {
        let light = Theme::light();
        let dark = Theme::dark();
        assert_ne!(light.base, dark.base);
        assert_ne!(light.title, dark.title);
        assert_ne!(light.sidebar_font, dark.sidebar_font);
        // Shared tokens stay shared.
        assert_eq!(light.accent, dark.accent);
        assert_eq!(light.metric_accents, dark.metric_accents);
    }

    #[test]
    fn test_metric_accents_are_distinct() {
        for (i, a) in METRIC_ACCENTS.iter().enumerate() {
            for b in &METRIC_ACCENTS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_with_accent_overrides_only_accent() {
        let custom = Rgb::new(0x11, 0x22, 0x33);
        let theme = Theme::light().with_accent(custom);
        assert_eq!(theme.accent, custom);
        assert_eq!(theme.base, Theme::light().base);
    }
}
