// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mobile menu toggle and smooth in-page scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use folio_app_core::nav::{self as core_nav, MenuState, NavSettings};
use gloo::events::{EventListener, EventListenerOptions};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

const MENU_BUTTON_ID: &str = "mobile-menu-btn";
const MENU_CLASS: &str = "mobile-menu";
const MENU_CONTENT_CLASS: &str = "mobile-menu-content";
const MENU_LINK_CLASS: &str = "mobile-menu-link";
const FRAGMENT_LINK_SELECTOR: &str = "a[href^=\"#\"]";

/// Shared between the button listener and the lazily created overlay.
struct MenuInner {
    document: Document,
    button: Element,
    contact_email: String,
    state: MenuState,
    overlay: Option<Element>,
    overlay_listeners: Vec<EventListener>,
}

impl MenuInner {
    fn sync(&self) {
        if let Some(overlay) = &self.overlay {
            let _ = overlay
                .class_list()
                .toggle_with_force("active", self.state.is_open());
        }
        if let Ok(Some(icon)) = self.button.query_selector("i") {
            let (remove, add) = self.state.icon_swap();
            let classes = icon.class_list();
            let _ = classes.remove_1(remove);
            let _ = classes.add_1(add);
        }
    }

    fn build_overlay(&self) -> Option<Element> {
        let overlay = self.document.create_element("div").ok()?;
        overlay.set_class_name(MENU_CLASS);
        let content = self.document.create_element("div").ok()?;
        content.set_class_name(MENU_CONTENT_CLASS);
        for (href, label) in core_nav::menu_links(&self.contact_email) {
            let link = self.document.create_element("a").ok()?;
            let _ = link.set_attribute("href", &href);
            link.set_class_name(MENU_LINK_CLASS);
            link.set_text_content(Some(label));
            content.append_child(&link).ok()?;
        }
        overlay.append_child(&content).ok()?;
        self.document.body()?.append_child(&overlay).ok()?;
        Some(overlay)
    }
}

/// Mobile navigation overlay bound to `#mobile-menu-btn`.
pub(crate) struct MobileMenu {
    inner: Rc<RefCell<MenuInner>>,
    _listener: EventListener,
}

impl MobileMenu {
    /// `None` when the page has no menu button.
    pub(crate) fn mount(document: &Document, contact_email: &str) -> Option<Self> {
        let button = dom::by_id::<Element>(document, MENU_BUTTON_ID)?;
        let inner = Rc::new(RefCell::new(MenuInner {
            document: document.clone(),
            button: button.clone(),
            contact_email: contact_email.to_owned(),
            state: MenuState::default(),
            overlay: None,
            overlay_listeners: Vec::new(),
        }));

        let shared = Rc::clone(&inner);
        let listener = EventListener::new(&button, "click", move |_event: &Event| {
            toggle(&shared);
        });
        Some(Self {
            inner,
            _listener: listener,
        })
    }

    /// Whether the overlay is showing.
    pub(crate) fn is_open(&self) -> bool {
        self.inner.borrow().state.is_open()
    }
}

fn toggle(inner: &Rc<RefCell<MenuInner>>) {
    let needs_overlay = inner.borrow().overlay.is_none();
    if needs_overlay {
        let built = inner.borrow().build_overlay();
        if let Some(overlay) = built {
            let listeners = overlay_listeners(inner, &overlay);
            let mut guard = inner.borrow_mut();
            guard.overlay = Some(overlay);
            guard.overlay_listeners = listeners;
        }
    }
    let mut guard = inner.borrow_mut();
    let open = guard.state.toggle();
    guard.sync();
    debug!(open, "mobile menu toggled");
}

fn close(inner: &Rc<RefCell<MenuInner>>) {
    let mut guard = inner.borrow_mut();
    guard.state.close();
    guard.sync();
}

/// Close on any link click, or on a click on the backdrop itself.
fn overlay_listeners(inner: &Rc<RefCell<MenuInner>>, overlay: &Element) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for link in dom::query_all(overlay, "a") {
        let shared = Rc::clone(inner);
        listeners.push(EventListener::new(&link, "click", move |_event: &Event| {
            close(&shared);
        }));
    }
    let shared = Rc::clone(inner);
    let backdrop = overlay.clone();
    listeners.push(EventListener::new(overlay, "click", move |event: &Event| {
        let on_backdrop = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|t| t == backdrop);
        if on_backdrop {
            close(&shared);
        }
    }));
    listeners
}

/// Smooth scrolling for every `a[href^="#"]` present at mount.
pub(crate) struct SmoothScroll {
    _listeners: Vec<EventListener>,
}

impl SmoothScroll {
    pub(crate) fn mount(document: &Document, settings: NavSettings) -> Self {
        let mut listeners = Vec::new();
        for link in dom::query_all(document, FRAGMENT_LINK_SELECTOR) {
            let doc = document.clone();
            let anchor = link.clone();
            listeners.push(EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    event.prevent_default();
                    let Some(href) = anchor.get_attribute("href") else {
                        return;
                    };
                    scroll_to_fragment(&doc, &href, &settings);
                },
            ));
        }
        Self {
            _listeners: listeners,
        }
    }
}

fn scroll_to_fragment(document: &Document, href: &str, settings: &NavSettings) {
    if !core_nav::is_fragment_link(href) {
        return;
    }
    let Some(section) = document
        .query_selector(href)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!(href, "scroll target not found");
        return;
    };
    let Ok(window) = dom::window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(core_nav::scroll_target_top(
        f64::from(section.offset_top()),
        settings,
    ));
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
