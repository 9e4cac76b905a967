// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Transient on-screen notifications with a fixed time-to-live.

use serde::{Deserialize, Serialize};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
    /// Informational note.
    #[default]
    Info,
}

impl NotificationKind {
    /// Lenient parse: unknown or missing kinds fall back to `Info`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("success") => NotificationKind::Success,
            Some("error") => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }

    /// Background utility class for this kind.
    pub fn background_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "bg-green-500",
            NotificationKind::Error => "bg-red-500",
            NotificationKind::Info => "bg-blue-500",
        }
    }

    /// Full class list for the toast element.
    pub fn class_list(self) -> String {
        format!("{BASE_CLASSES} {}", self.background_class())
    }
}

const BASE_CLASSES: &str =
    "fixed top-4 right-4 p-4 rounded-lg text-white z-50 transition-all duration-300";

/// Identifier for a notification.
pub type NotificationId = u64;

/// Notification tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettings {
    /// How long each notification stays on screen.
    pub ttl_ms: u32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { ttl_ms: 3_000 }
    }
}

/// A live notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Stable identifier.
    pub id: NotificationId,
    /// Severity.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
}

/// Tracks live notifications. The host arms one timer of [`ttl_ms`] per
/// notification and calls [`dismiss`] when it fires.
///
/// [`ttl_ms`]: NotificationCenter::ttl_ms
/// [`dismiss`]: NotificationCenter::dismiss
#[derive(Debug)]
pub struct NotificationCenter {
    live: Vec<Notification>,
    ttl_ms: u32,
    next_id: NotificationId,
}

impl NotificationCenter {
    /// Create a center from settings.
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            live: Vec::new(),
            ttl_ms: settings.ttl_ms,
            next_id: 1,
        }
    }

    /// Time-to-live applied to new notifications.
    pub fn ttl_ms(&self) -> u32 {
        self.ttl_ms
    }

    /// Add a notification.
    pub fn push<M>(&mut self, message: M, kind: NotificationKind) -> &Notification
    where
        M: Into<String>,
    {
        let id = self.next_id;
        self.next_id += 1;
        let idx = self.live.len();
        self.live.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        &self.live[idx]
    }

    /// Remove one notification. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.live.len();
        self.live.retain(|n| n.id != id);
        self.live.len() != before
    }

    /// Live notifications, oldest first.
    pub fn live(&self) -> &[Notification] {
        &self.live
    }
}
