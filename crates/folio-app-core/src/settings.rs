// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Page-wide settings with defaults for every field.

use serde::{Deserialize, Serialize};

use crate::carousel::CarouselSettings;
use crate::clipboard::CONTACT_EMAIL;
use crate::config::ConfigError;
use crate::nav::NavSettings;
use crate::notify::NotificationSettings;
use crate::reveal::RevealPolicy;

/// Everything tunable about the page behaviour.
///
/// Deserialization is partial: any field missing from the input keeps its
/// default, so `{}` is a valid document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteSettings {
    /// Carousel breakpoints, swipe threshold, resize debounce.
    pub carousel: CarouselSettings,
    /// Scroll-reveal threshold and margin.
    pub reveal: RevealPolicy,
    /// Notification lifetime.
    pub notifications: NotificationSettings,
    /// Navbar offset for smooth scrolling.
    pub nav: NavSettings,
    /// Address copied by `copyEmail` and used for the contact link.
    pub contact_email: String,
    /// How long the body keeps its `loading` class after `load`.
    pub loading_class_ms: u32,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            carousel: CarouselSettings::default(),
            reveal: RevealPolicy::default(),
            notifications: NotificationSettings::default(),
            nav: NavSettings::default(),
            contact_email: CONTACT_EMAIL.to_owned(),
            loading_class_ms: 1_000,
        }
    }
}

impl SiteSettings {
    /// Parse a (possibly partial) JSON settings document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
