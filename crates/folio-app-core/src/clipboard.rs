// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Outcome mapping for the copy-email action.

use crate::notify::NotificationKind;

/// Address placed on the clipboard by `copyEmail`.
pub const CONTACT_EMAIL: &str = "abenezer@gmail.com";

/// Result of a clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The host accepted the text.
    Copied,
    /// The host rejected the request (permissions, insecure context, no API).
    Failed,
}

impl CopyOutcome {
    /// Message and kind to surface to the user.
    pub fn notification(self) -> (&'static str, NotificationKind) {
        match self {
            CopyOutcome::Copied => ("Email copied to clipboard!", NotificationKind::Success),
            CopyOutcome::Failed => ("Failed to copy email", NotificationKind::Error),
        }
    }
}

impl<T, E> From<Result<T, E>> for CopyOutcome {
    fn from(res: Result<T, E>) -> Self {
        if res.is_ok() {
            CopyOutcome::Copied
        } else {
            CopyOutcome::Failed
        }
    }
}
