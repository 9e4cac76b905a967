// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Theme attribute on `<body>`, persisted through the config store.

use folio_app_core::config::{ConfigService, ConfigStore, MemoryConfigStore};
use folio_app_core::prefs::{Theme, ThemePrefs};
use folio_config_web::LocalStorageStore;
use tracing::{info, warn};
use web_sys::Document;

const THEME_ATTR: &str = "data-theme";

type Store = Box<dyn ConfigStore>;

/// Durable store when the browser allows it, memory otherwise.
fn open_store() -> Store {
    match LocalStorageStore::new() {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!(error = %err, "localStorage unavailable; theme will not persist");
            Box::new(MemoryConfigStore::new())
        }
    }
}

/// Owns the theme preference and mirrors it onto the page.
pub(crate) struct ThemeController {
    document: Document,
    prefs: ThemePrefs<ConfigService<Store>>,
}

impl ThemeController {
    pub(crate) fn new(document: Document) -> Self {
        Self {
            document,
            prefs: ThemePrefs::load(ConfigService::new(open_store())),
        }
    }

    /// Write the current theme to `<body data-theme>`.
    pub(crate) fn apply(&self) {
        self.set_attribute(self.prefs.current());
    }

    /// Flip, persist and apply the theme.
    pub(crate) fn toggle(&mut self) -> Theme {
        let theme = self.prefs.toggle();
        self.set_attribute(theme);
        info!(theme = theme.as_str(), "theme toggled");
        theme
    }

    fn set_attribute(&self, theme: Theme) {
        if let Some(body) = self.document.body() {
            let _ = body.set_attribute(THEME_ATTR, theme.as_str());
        }
    }
}
