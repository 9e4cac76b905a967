// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Page-level touches: load-time cleanup and the tech slider's focus pause.

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element, Event};

use crate::dom;

const CARD_SELECTOR: &str = ".service-card, .project-card";
const LOADING_CLASS: &str = "loading";

/// Run once the window has loaded: clear stray card transforms and flash the
/// body's `loading` class for `loading_ms`.
pub(crate) fn on_load(document: &Document, loading_ms: u32) {
    for card in dom::query_all(document, CARD_SELECTOR) {
        dom::set_style(&card, "transform", "none");
    }
    let Some(body) = document.body() else {
        return;
    };
    let _ = body.class_list().add_1(LOADING_CLASS);
    Timeout::new(loading_ms, move || {
        let _ = body.class_list().remove_1(LOADING_CLASS);
    })
    .forget();
}

/// Keyboard users can pause the scrolling tech icons by focusing into them.
pub(crate) struct TechSlider {
    _listeners: [EventListener; 2],
}

impl TechSlider {
    /// `None` when either the slider or its track is missing.
    pub(crate) fn mount(document: &Document) -> Option<Self> {
        let slider = document.query_selector(".tech-slider").ok()??;
        let track = document.query_selector(".tech-slide-track").ok()??;
        let _ = slider.set_attribute("role", "region");
        let _ = slider.set_attribute("aria-label", "Technology icons slideshow");

        let paused = track.clone();
        let focus_in = EventListener::new(&slider, "focusin", move |_event: &Event| {
            set_play_state(&paused, "paused");
        });
        let focus_out = EventListener::new(&slider, "focusout", move |_event: &Event| {
            set_play_state(&track, "running");
        });
        Some(Self {
            _listeners: [focus_in, focus_out],
        })
    }
}

fn set_play_state(track: &Element, state: &str) {
    dom::set_style(track, "animation-play-state", state);
}
