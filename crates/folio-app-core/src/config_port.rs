// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config port for the persisted theme preference.

use tracing::warn;

use crate::config::{ConfigService, ConfigStore};
use crate::prefs::{Theme, THEME_KEY};

/// Config-facing port for loading/saving the theme preference.
pub trait ThemePort {
    /// Load the saved theme (returns None if missing or unreadable).
    fn load_theme(&self) -> Option<Theme>;
    /// Persist the theme (best-effort; impl may log errors internally).
    fn save_theme(&self, theme: Theme);
}

impl<S> ThemePort for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_theme(&self) -> Option<Theme> {
        match self.load_text(THEME_KEY) {
            Ok(Some(raw)) => {
                let parsed = Theme::parse(&raw);
                if parsed.is_none() {
                    warn!(value = %raw, "ignoring unknown stored theme");
                }
                parsed
            }
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "failed to read theme preference");
                None
            }
        }
    }

    fn save_theme(&self, theme: Theme) {
        if let Err(err) = self.save_text(THEME_KEY, theme.as_str()) {
            warn!(error = %err, theme = theme.as_str(), "failed to persist theme preference");
        }
    }
}
