// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared page services for Folio (carousel, reveal, prefs, notifications).
//! Keeps the DOM adapter thin and lets the behaviour be tested natively.

pub mod carousel;
pub mod clipboard;
pub mod config;
pub mod config_port;
pub mod debounce;
pub mod form;
pub mod nav;
pub mod notify;
pub mod prefs;
pub mod reveal;
pub mod settings;
