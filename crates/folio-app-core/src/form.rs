// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Contact-form checks.

use std::sync::LazyLock;

use regex::Regex;

/// Class added to required fields left empty.
pub const INVALID_FIELD_CLASS: &str = "border-red-500";

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Loose shape check: something@something.something, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A required field is satisfied by any non-whitespace content.
pub fn required_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Per-field verdicts for a form, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormReport {
    fields: Vec<bool>,
}

impl FormReport {
    /// Check every required value.
    pub fn check<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            fields: values.into_iter().map(required_filled).collect(),
        }
    }

    /// Verdict for each field (`true` = filled).
    pub fn fields(&self) -> &[bool] {
        &self.fields
    }

    /// All required fields filled (vacuously true for forms without any).
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|ok| *ok)
    }
}
