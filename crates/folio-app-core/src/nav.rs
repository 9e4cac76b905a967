// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mobile menu state and in-page scroll targets.

use serde::{Deserialize, Serialize};

/// Icon class shown while the menu is closed.
pub const ICON_CLOSED: &str = "fa-bars";
/// Icon class shown while the menu is open.
pub const ICON_OPEN: &str = "fa-times";

/// One entry in the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLink {
    /// Link target (`#section` or `mailto:`).
    pub href: &'static str,
    /// Visible label.
    pub label: &'static str,
}

/// Section links shown in the mobile menu; a `mailto:` contact link is
/// appended by [`menu_links`].
pub const SECTION_LINKS: [MenuLink; 4] = [
    MenuLink {
        href: "#home",
        label: "Home",
    },
    MenuLink {
        href: "#services",
        label: "Services",
    },
    MenuLink {
        href: "#projects",
        label: "Projects",
    },
    MenuLink {
        href: "#about",
        label: "About",
    },
];

/// `(href, label)` pairs for the mobile menu, ending with the contact link.
pub fn menu_links(contact_email: &str) -> Vec<(String, &'static str)> {
    SECTION_LINKS
        .iter()
        .map(|l| (l.href.to_owned(), l.label))
        .chain(std::iter::once((format!("mailto:{contact_email}"), "Contact")))
        .collect()
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Whether the menu is showing.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu (link click or backdrop click).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// `(remove, add)` icon classes for the current state.
    pub fn icon_swap(self) -> (&'static str, &'static str) {
        if self.open {
            (ICON_CLOSED, ICON_OPEN)
        } else {
            (ICON_OPEN, ICON_CLOSED)
        }
    }
}

/// Navigation tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavSettings {
    /// Height of the fixed navbar subtracted from scroll targets.
    pub navbar_offset_px: f64,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            navbar_offset_px: 80.0,
        }
    }
}

/// Window scroll position that puts a section just below the navbar.
pub fn scroll_target_top(section_offset_top: f64, settings: &NavSettings) -> f64 {
    (section_offset_top - settings.navbar_offset_px).max(0.0)
}

/// Whether an `href` is an in-page fragment that smooth scrolling handles.
/// A bare `#` is not a section selector.
pub fn is_fragment_link(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}
