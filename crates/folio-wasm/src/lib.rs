// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! wasm-bindgen page controller for the Folio portfolio site.
//!
//! On start the module waits for `DOMContentLoaded`, mounts every component
//! whose markup is present, and publishes the mounted [`PortfolioApp`] as
//! `window.PortfolioApp`. The app object owns all listeners and observers,
//! so the page keeps behaving for as long as that global is alive.
//!
//! # Usage (from JavaScript)
//!
//! ```js
//! import init from 'folio-wasm';
//!
//! await init();
//! // later, e.g. from an onclick attribute:
//! window.PortfolioApp.copyEmail();
//! window.PortfolioApp.showNotification('Saved', 'success');
//! ```
//!
//! Settings can be overridden by embedding a partial JSON document in the
//! page: `<script type="application/json" id="folio-settings">{…}</script>`.

use std::cell::RefCell;
use std::rc::Rc;

use folio_app_core::notify::NotificationKind;
use folio_app_core::settings::SiteSettings;
use gloo::events::EventListener;
use js_sys::Reflect;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

mod carousel;
mod clipboard;
mod dom;
mod form;
mod logging;
mod nav;
mod notify;
mod page;
mod reveal;
mod theme;

use carousel::CarouselView;
use nav::{MobileMenu, SmoothScroll};
use notify::Notifier;
use page::TechSlider;
use reveal::{LazyImages, RevealView};
use theme::ThemeController;

const SETTINGS_ID: &str = "folio-settings";
const GLOBAL_NAME: &str = "PortfolioApp";

/// Load settings from the page, falling back to defaults.
fn page_settings(document: &Document) -> SiteSettings {
    let Some(json) = document
        .get_element_by_id(SETTINGS_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteSettings::default();
    };
    SiteSettings::from_json(&json).unwrap_or_else(|err| {
        warn!(error = %err, "ignoring malformed #{SETTINGS_ID}");
        SiteSettings::default()
    })
}

/// Whether a booted app is already published as `window.PortfolioApp`.
fn is_published(window: &web_sys::Window) -> bool {
    Reflect::get(window, &GLOBAL_NAME.into()).is_ok_and(|app| !app.is_undefined() && !app.is_null())
}

/// Everything mounted on the page. Dropping it detaches every listener.
#[wasm_bindgen]
pub struct PortfolioApp {
    settings: SiteSettings,
    notifier: Notifier,
    theme: Rc<RefCell<ThemeController>>,
    carousel: Option<CarouselView>,
    reveal: Option<RevealView>,
    menu: Option<MobileMenu>,
    lazy_images: Rc<RefCell<Option<LazyImages>>>,
    _scroll: SmoothScroll,
    _tech_slider: Option<TechSlider>,
    _load_listener: Option<EventListener>,
}

impl PortfolioApp {
    /// Mount every component against `document`.
    fn mount_on(document: &Document, settings: SiteSettings) -> Result<Self, JsValue> {
        let notifier = Notifier::new(document.clone(), settings.notifications);
        let theme = Rc::new(RefCell::new(ThemeController::new(document.clone())));

        let menu = MobileMenu::mount(document, &settings.contact_email);
        let scroll = SmoothScroll::mount(document, settings.nav);
        let reveal = RevealView::mount(document, settings.reveal);
        let carousel = CarouselView::mount(document, &settings.carousel);
        let tech_slider = TechSlider::mount(document);

        let lazy_images = Rc::new(RefCell::new(None));
        let on_load = {
            let document = document.clone();
            let theme = Rc::clone(&theme);
            let lazy_images = Rc::clone(&lazy_images);
            let loading_ms = settings.loading_class_ms;
            move || {
                theme.borrow().apply();
                *lazy_images.borrow_mut() = LazyImages::mount(&document);
                page::on_load(&document, loading_ms);
            }
        };
        let load_listener = if document.ready_state() == "complete" {
            on_load();
            None
        } else {
            let window = dom::window()?;
            Some(EventListener::once(&window, "load", move |_event: &Event| {
                on_load();
            }))
        };

        info!(
            carousel = carousel.is_some(),
            reveal = reveal.is_some(),
            menu = menu.is_some(),
            "page mounted"
        );

        Ok(Self {
            settings,
            notifier,
            theme,
            carousel,
            reveal,
            menu,
            lazy_images,
            _scroll: scroll,
            _tech_slider: tech_slider,
            _load_listener: load_listener,
        })
    }
}

#[wasm_bindgen]
impl PortfolioApp {
    /// Mount on the current document. `settings_json` is an optional partial
    /// settings document; when absent, `#folio-settings` (or the defaults)
    /// is used.
    ///
    /// Fails while `window.PortfolioApp` is set: the module mounts itself on
    /// start, and a second mount would bind every listener twice.
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<PortfolioApp, JsValue> {
        if is_published(&dom::window()?) {
            return Err(JsValue::from_str(
                "PortfolioApp is already mounted; use window.PortfolioApp",
            ));
        }
        let document = dom::document()?;
        let settings = match settings_json {
            Some(json) => SiteSettings::from_json(&json)
                .map_err(|err| JsValue::from_str(&err.to_string()))?,
            None => page_settings(&document),
        };
        Self::mount_on(&document, settings)
    }

    /// Copy the contact address to the clipboard and report the outcome.
    #[wasm_bindgen(js_name = copyEmail)]
    pub fn copy_email(&self) {
        clipboard::copy_with_notice(self.settings.contact_email.clone(), self.notifier.clone());
    }

    /// Show a transient notification. `kind` is `success`, `error` or
    /// `info` (default, also used for unknown kinds).
    #[wasm_bindgen(js_name = showNotification)]
    pub fn show_notification(&self, message: &str, kind: Option<String>) {
        self.notifier
            .show(message, NotificationKind::parse(kind.as_deref()));
    }

    /// Flip between dark and light, persist, and return the new theme name.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) -> String {
        self.theme.borrow_mut().toggle().as_str().to_owned()
    }

    /// Mark empty required fields in `form`; `true` when all are filled.
    #[wasm_bindgen(js_name = validateForm)]
    #[allow(clippy::unused_self)]
    pub fn validate_form(&self, form: &Element) -> bool {
        form::validate_form(form)
    }

    /// Loose e-mail shape check.
    #[wasm_bindgen(js_name = isValidEmail)]
    #[allow(clippy::unused_self)]
    pub fn is_valid_email(&self, email: &str) -> bool {
        folio_app_core::form::is_valid_email(email)
    }

    /// Advance the carousel by one item, as the next button does.
    #[wasm_bindgen(js_name = carouselNext)]
    pub fn carousel_next(&self) {
        if let Some(carousel) = &self.carousel {
            carousel.go_next();
        }
    }

    /// Step the carousel back by one item, as the previous button does.
    #[wasm_bindgen(js_name = carouselPrevious)]
    pub fn carousel_previous(&self) {
        if let Some(carousel) = &self.carousel {
            carousel.go_previous();
        }
    }

    /// Index of the left-most visible carousel item (`undefined` without a
    /// carousel).
    #[wasm_bindgen(getter, js_name = carouselIndex)]
    pub fn carousel_index(&self) -> Option<usize> {
        self.carousel.as_ref().map(CarouselView::current_index)
    }

    /// Number of blocks revealed so far.
    #[wasm_bindgen(getter, js_name = revealedCount)]
    pub fn revealed_count(&self) -> usize {
        self.reveal.as_ref().map_or(0, RevealView::revealed_count)
    }

    /// Whether the mobile menu overlay is open.
    #[wasm_bindgen(getter, js_name = menuOpen)]
    pub fn menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(MobileMenu::is_open)
    }

    /// Number of notifications currently on screen.
    #[wasm_bindgen(getter, js_name = notificationCount)]
    pub fn notification_count(&self) -> usize {
        self.notifier.live_count()
    }

    /// Whether lazy images are still being watched.
    #[wasm_bindgen(getter, js_name = lazyImagesActive)]
    pub fn lazy_images_active(&self) -> bool {
        self.lazy_images.borrow().is_some()
    }
}

/// Mount with page settings and publish the app as `window.PortfolioApp`.
fn boot() {
    let result = dom::document()
        .and_then(|document| PortfolioApp::mount_on(&document, page_settings(&document)))
        .and_then(|app| {
            let window = dom::window()?;
            Reflect::set(&window, &GLOBAL_NAME.into(), &JsValue::from(app))?;
            Ok(())
        });
    if let Err(err) = result {
        warn!(?err, "page controller failed to mount");
    }
}

/// Module entry point: install logging, then mount once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console-panic")]
    console_error_panic_hook::set_once();
    logging::init();

    let Ok(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event: &Event| boot()).forget();
    } else {
        boot();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests;
