//! Theme system: mode resolution, palette derivation, and the session-wide
//! theme provider.
//!
//! The resolved mode is the single authoritative light/dark choice for the
//! session. It is computed once at startup from the stored preference and the
//! OS color-scheme preference, and changes only through an explicit toggle.

use anyhow::Result;
use ratatui::style::Color;

use crate::config::{PreferenceStore, THEME_KEY};

/// Resolved display mode. Always exactly light or dark; there is no
/// "system" or "unset" value once resolution has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light palette
    Light,
    /// Dark palette
    Dark,
}

impl ThemeMode {
    /// The literal value persisted to the preference store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Resolves the display mode from the stored preference and the system
/// preference.
///
/// A stored `"light"` or `"dark"` always wins. Any other stored value,
/// including absence, counts as "no preference" and falls through to the
/// system branch. Pure and total: invalid input degrades, it never errors.
#[must_use]
pub fn resolve_mode(stored: Option<&str>, system_prefers_dark: bool) -> ThemeMode {
    match stored {
        Some("light") => ThemeMode::Light,
        Some("dark") => ThemeMode::Dark,
        _ => {
            if system_prefers_dark {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            }
        }
    }
}

/// Queries whether the operating environment prefers a dark color scheme.
///
/// Read once at provider initialization; the session does not react to OS
/// theme changes after that point. `Unspecified` and probe errors count as
/// no dark preference, so resolution falls back to light.
#[must_use]
pub fn system_prefers_dark() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
}

/// An accent color with its main/light/dark/contrast variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    /// Main shade
    pub main: Color,
    /// Lighter shade
    pub light: Color,
    /// Darker shade
    pub dark: Color,
    /// Text color readable on `main`
    pub contrast: Color,
}

/// Background surface colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surfaces {
    /// Default page background
    pub default: Color,
    /// Elevated surface (cards, popups)
    pub paper: Color,
}

/// Text color hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColors {
    /// Primary content text
    pub primary: Color,
    /// Secondary text for labels and supporting copy
    pub secondary: Color,
}

/// The full style configuration derived from a [`ThemeMode`].
///
/// Recomputed in memory on every mode change; never persisted. The RGB
/// values are the application's light and dark palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Mode this palette was derived from
    pub mode: ThemeMode,
    /// Primary accent (indigo family)
    pub primary: Accent,
    /// Secondary accent (pink family)
    pub secondary: Accent,
    /// Background surfaces
    pub background: Surfaces,
    /// Text hierarchy
    pub text: TextColors,
    /// Divider/border color
    pub divider: Color,
    /// Success state color for confirmations
    pub success: Color,
    /// Error state color for failures
    pub error: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
}

impl Palette {
    /// Derives the palette for a mode. Pure function: same mode, same palette.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Light palette: dark text on near-white surfaces.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            primary: Accent {
                main: Color::Rgb(99, 102, 241),
                light: Color::Rgb(129, 140, 248),
                dark: Color::Rgb(79, 70, 229),
                contrast: Color::Rgb(255, 255, 255),
            },
            secondary: Accent {
                main: Color::Rgb(236, 72, 153),
                light: Color::Rgb(244, 114, 182),
                dark: Color::Rgb(219, 39, 119),
                contrast: Color::Rgb(255, 255, 255),
            },
            background: Surfaces {
                default: Color::Rgb(250, 250, 250),
                paper: Color::Rgb(255, 255, 255),
            },
            text: TextColors {
                primary: Color::Rgb(31, 41, 55),
                secondary: Color::Rgb(107, 114, 128),
            },
            divider: Color::Rgb(229, 231, 235),
            success: Color::Rgb(0, 128, 0),
            error: Color::Rgb(220, 38, 38),
            highlight_bg: Color::Rgb(229, 231, 235),
        }
    }

    /// Dark palette: light text on slate surfaces.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            primary: Accent {
                main: Color::Rgb(129, 140, 248),
                light: Color::Rgb(165, 180, 252),
                dark: Color::Rgb(99, 102, 241),
                contrast: Color::Rgb(0, 0, 0),
            },
            secondary: Accent {
                main: Color::Rgb(244, 114, 182),
                light: Color::Rgb(249, 168, 212),
                dark: Color::Rgb(236, 72, 153),
                contrast: Color::Rgb(0, 0, 0),
            },
            background: Surfaces {
                default: Color::Rgb(15, 23, 42),
                paper: Color::Rgb(30, 41, 59),
            },
            text: TextColors {
                primary: Color::Rgb(248, 250, 252),
                secondary: Color::Rgb(203, 213, 225),
            },
            divider: Color::Rgb(51, 65, 85),
            success: Color::Rgb(74, 222, 128),
            error: Color::Rgb(248, 113, 113),
            highlight_bg: Color::Rgb(51, 65, 85),
        }
    }
}

/// Owns the resolved mode and its derived palette for the application
/// session.
///
/// All rendering reads the one provider held by the application state, so
/// every view observes the same mode. Toggling flips the mode, persists the
/// new value under the `theme` key (one store write per toggle), and
/// re-derives the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeProvider {
    mode: ThemeMode,
    palette: Palette,
}

impl ThemeProvider {
    /// Resolves the initial mode from the store and the system preference.
    ///
    /// Reads the system preference the caller probed exactly once; there is
    /// no live re-resolution if the OS preference changes later.
    #[must_use]
    pub fn initialize(store: &dyn PreferenceStore, system_prefers_dark: bool) -> Self {
        let stored = store.get(THEME_KEY);
        Self::with_mode(resolve_mode(stored.as_deref(), system_prefers_dark))
    }

    /// Creates a provider with an explicit mode (session override, tests).
    #[must_use]
    pub const fn with_mode(mode: ThemeMode) -> Self {
        Self {
            mode,
            palette: Palette::for_mode(mode),
        }
    }

    /// The resolved mode currently in effect.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The palette derived from the current mode.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Flips light↔dark, persisting the new value before it takes effect.
    ///
    /// A store failure leaves the provider unchanged.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> Result<ThemeMode> {
        let next = self.mode.toggled();
        store.set(THEME_KEY, next.as_str())?;
        self.mode = next;
        self.palette = Palette::for_mode(next);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_resolve_stored_wins_over_system() {
        assert_eq!(resolve_mode(Some("dark"), false), ThemeMode::Dark);
        assert_eq!(resolve_mode(Some("light"), true), ThemeMode::Light);
    }

    #[test]
    fn test_resolve_falls_back_to_system() {
        assert_eq!(resolve_mode(None, true), ThemeMode::Dark);
        assert_eq!(resolve_mode(None, false), ThemeMode::Light);
    }

    #[test]
    fn test_resolve_ignores_invalid_values() {
        assert_eq!(resolve_mode(Some("invalid-theme"), false), ThemeMode::Light);
        assert_eq!(resolve_mode(Some("invalid-theme"), true), ThemeMode::Dark);
        assert_eq!(resolve_mode(Some(""), false), ThemeMode::Light);
        assert_eq!(resolve_mode(Some("Dark"), false), ThemeMode::Light); // case-sensitive
    }

    #[test]
    fn test_resolve_is_pure() {
        for stored in [None, Some("light"), Some("dark"), Some("junk")] {
            for system in [false, true] {
                assert_eq!(resolve_mode(stored, system), resolve_mode(stored, system));
            }
        }
    }

    #[test]
    fn test_palette_matches_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Light).mode, ThemeMode::Light);
        assert_eq!(Palette::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
    }

    #[test]
    fn test_palette_light_surfaces() {
        let palette = Palette::light();
        assert_eq!(palette.background.default, Color::Rgb(250, 250, 250));
        assert_eq!(palette.background.paper, Color::Rgb(255, 255, 255));
        assert_eq!(palette.text.primary, Color::Rgb(31, 41, 55));
        assert_eq!(palette.primary.contrast, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_palette_dark_surfaces() {
        let palette = Palette::dark();
        assert_eq!(palette.background.default, Color::Rgb(15, 23, 42));
        assert_eq!(palette.background.paper, Color::Rgb(30, 41, 59));
        assert_eq!(palette.text.primary, Color::Rgb(248, 250, 252));
        assert_eq!(palette.divider, Color::Rgb(51, 65, 85));
    }

    #[test]
    fn test_provider_initialize_from_store() {
        let mut store: HashMap<String, String> = HashMap::new();
        store.set(THEME_KEY, "dark").unwrap();

        let provider = ThemeProvider::initialize(&store, false);
        assert_eq!(provider.mode(), ThemeMode::Dark);
        assert_eq!(provider.palette().mode, ThemeMode::Dark);
    }

    #[test]
    fn test_provider_toggle_round_trip() {
        let mut store: HashMap<String, String> = HashMap::new();
        let mut provider = ThemeProvider::with_mode(ThemeMode::Light);

        let mode = provider.toggle(&mut store).unwrap();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(
            PreferenceStore::get(&store, THEME_KEY).as_deref(),
            Some("dark")
        );

        let mode = provider.toggle(&mut store).unwrap();
        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(
            PreferenceStore::get(&store, THEME_KEY).as_deref(),
            Some("light")
        );
        assert_eq!(provider.palette().mode, ThemeMode::Light);
    }
}
