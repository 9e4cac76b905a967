// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `IntersectionObserver` wiring: scroll reveal and lazy images.

use std::cell::RefCell;
use std::rc::Rc;

use folio_app_core::reveal::{RevealKey, RevealPolicy, RevealSet, RevealSurface};
use js_sys::Array;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;

/// Blocks that fade in when scrolled into view.
pub(crate) const ANIMATED_SELECTOR: &str = ".service-card, .project-card, .gradient-text";
const REVEAL_CLASS: &str = "fade-in-up";
const KEY_ATTR: &str = "data-reveal-key";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Applies the reveal class to the observed elements.
struct DomTargets {
    targets: Vec<Element>,
}

impl RevealSurface for DomTargets {
    fn reveal(&mut self, key: RevealKey) {
        let Some(el) = self.targets.get(key.0) else {
            return;
        };
        let _ = el.class_list().add_1(REVEAL_CLASS);
        dom::set_style(el, "transform", "none");
    }
}

fn observer_init(policy: &RevealPolicy) -> IntersectionObserverInit {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(policy.threshold));
    init.set_root_margin(&policy.root_margin());
    init
}

fn entries(list: &Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    list.iter()
        .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
}

/// Mounted scroll-reveal animator.
pub(crate) struct RevealView {
    observer: IntersectionObserver,
    set: Rc<RefCell<RevealSet>>,
    _callback: ObserverCallback,
}

impl RevealView {
    /// Observe every animatable block. `None` when the page has none or the
    /// browser lacks `IntersectionObserver`.
    pub(crate) fn mount(document: &Document, policy: RevealPolicy) -> Option<Self> {
        let targets = dom::query_all(document, ANIMATED_SELECTOR);
        if targets.is_empty() {
            debug!("no animatable blocks; reveal not activating");
            return None;
        }

        let mut set = RevealSet::new(policy);
        for el in &targets {
            let key = set.register();
            let _ = el.set_attribute(KEY_ATTR, &key.0.to_string());
            // Clear transforms left by earlier scripts so the animation owns it.
            dom::set_style(el, "transform", "none");
        }
        let set = Rc::new(RefCell::new(set));
        let mut surface = DomTargets {
            targets: targets.clone(),
        };

        let state = Rc::clone(&set);
        let callback: ObserverCallback =
            Closure::new(move |list: Array, _observer: IntersectionObserver| {
                for entry in entries(&list) {
                    let Some(key) = entry
                        .target()
                        .get_attribute(KEY_ATTR)
                        .and_then(|k| k.parse().ok())
                        .map(RevealKey)
                    else {
                        continue;
                    };
                    state.borrow_mut().observe_into(
                        &mut surface,
                        key,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    );
                }
            });

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &observer_init(&policy),
        ) {
            Ok(observer) => observer,
            Err(err) => {
                debug!(?err, "IntersectionObserver unavailable");
                return None;
            }
        };
        for el in &targets {
            observer.observe(el);
        }
        debug!(count = targets.len(), "reveal observing blocks");

        Some(Self {
            observer,
            set,
            _callback: callback,
        })
    }

    /// Number of blocks revealed so far.
    pub(crate) fn revealed_count(&self) -> usize {
        self.set.borrow().revealed_count()
    }
}

impl Drop for RevealView {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// `img[data-src]` elements that load their source on first sight.
pub(crate) struct LazyImages {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

const LAZY_SELECTOR: &str = "img[data-src]";

impl LazyImages {
    /// Observe lazy images; `None` when there are none.
    pub(crate) fn mount(document: &Document) -> Option<Self> {
        let images = dom::query_all(document, LAZY_SELECTOR);
        if images.is_empty() {
            return None;
        }
        let callback: ObserverCallback =
            Closure::new(move |list: Array, observer: IntersectionObserver| {
                for entry in entries(&list) {
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let img = entry.target();
                    if let Some(src) = img.get_attribute("data-src") {
                        let _ = img.set_attribute("src", &src);
                    }
                    let classes = img.class_list();
                    let _ = classes.remove_1("opacity-0");
                    let _ = classes.add_1("opacity-100");
                    observer.unobserve(&img);
                }
            });
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &IntersectionObserverInit::new(),
        )
        .ok()?;
        for img in &images {
            observer.observe(img);
        }
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for LazyImages {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
