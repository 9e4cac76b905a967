// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Theme preference: the only value the page persists across loads.

use crate::config_port::ThemePort;

/// Durable storage key holding the theme name.
pub const THEME_KEY: &str = "theme";

/// Page colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark scheme (default when nothing is stored).
    #[default]
    Dark,
    /// Light scheme.
    Light,
}

impl Theme {
    /// Attribute/storage spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored value; anything other than `dark`/`light` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// The opposite scheme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Owns the current theme and writes changes through a [`ThemePort`].
#[derive(Debug)]
pub struct ThemePrefs<P> {
    port: P,
    current: Theme,
}

impl<P> ThemePrefs<P>
where
    P: ThemePort,
{
    /// Load the stored theme, defaulting to [`Theme::Dark`].
    pub fn load(port: P) -> Self {
        let current = port.load_theme().unwrap_or_default();
        Self { port, current }
    }

    /// Current theme.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, persist it and return the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.port.save_theme(self.current);
        self.current
    }
}
