// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! DOM adapter for the projects carousel.

use std::cell::RefCell;
use std::rc::Rc;

use folio_app_core::carousel::{
    Carousel, CarouselController, CarouselFrame, CarouselSettings, CarouselSurface,
};
use folio_app_core::debounce::Debouncer;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, TouchEvent};

use crate::dom;

/// Markup ids and classes the carousel binds to.
pub(crate) const CAROUSEL_ID: &str = "projects-carousel";
pub(crate) const PREV_ID: &str = "prev-btn";
pub(crate) const NEXT_ID: &str = "next-btn";
pub(crate) const INDICATORS_ID: &str = "carousel-indicators";
pub(crate) const ITEM_SELECTOR: &str = ".carousel-item";
const INDICATOR_CLASS: &str = "carousel-indicator";
const PAGE_ATTR: &str = "data-page";

/// Paints a [`CarouselFrame`] onto the carousel markup.
pub(crate) struct DomSurface {
    document: Document,
    track: Element,
    prev: HtmlButtonElement,
    next: HtmlButtonElement,
    indicator_host: Option<Element>,
    indicators: Vec<Element>,
}

impl CarouselSurface for DomSurface {
    fn rebuild_indicators(&mut self, page_count: usize) {
        let Some(host) = &self.indicator_host else {
            return;
        };
        host.set_inner_html("");
        self.indicators.clear();
        for page in 0..page_count {
            let Ok(indicator) = self.document.create_element("div") else {
                continue;
            };
            indicator.set_class_name(INDICATOR_CLASS);
            if let Err(err) = indicator.set_attribute(PAGE_ATTR, &page.to_string()) {
                debug!(?err, page, "could not tag carousel indicator");
            }
            if host.append_child(&indicator).is_ok() {
                self.indicators.push(indicator);
            }
        }
    }

    fn paint(&mut self, frame: &CarouselFrame) {
        dom::set_style(&self.track, "transform", &frame.transform());
        self.prev.set_disabled(frame.prev_disabled);
        self.next.set_disabled(frame.next_disabled);
        for (page, indicator) in self.indicators.iter().enumerate() {
            let _ = indicator
                .class_list()
                .toggle_with_force("active", page == frame.active_page);
        }
    }
}

type SharedController = Rc<RefCell<CarouselController<DomSurface>>>;

/// Mounted carousel: controller plus the listeners that drive it.
pub(crate) struct CarouselView {
    controller: SharedController,
    _listeners: Vec<EventListener>,
    _pending_resize: Rc<RefCell<Option<Timeout>>>,
}

impl CarouselView {
    /// Bind to the carousel markup. Returns `None` (and stays inert) when the
    /// container or either button is missing.
    pub(crate) fn mount(document: &Document, settings: &CarouselSettings) -> Option<Self> {
        let (Some(track), Some(prev), Some(next)) = (
            dom::by_id::<Element>(document, CAROUSEL_ID),
            dom::by_id::<HtmlButtonElement>(document, PREV_ID),
            dom::by_id::<HtmlButtonElement>(document, NEXT_ID),
        ) else {
            debug!("carousel markup absent; not activating");
            return None;
        };
        let indicator_host = dom::by_id::<Element>(document, INDICATORS_ID);
        let item_count = dom::query_all(&track, ITEM_SELECTOR).len();

        let surface = DomSurface {
            document: document.clone(),
            track: track.clone(),
            prev: prev.clone(),
            next: next.clone(),
            indicator_host: indicator_host.clone(),
            indicators: Vec::new(),
        };
        let state = Carousel::new(item_count, dom::viewport_width(), settings);
        let controller = Rc::new(RefCell::new(CarouselController::mount(state, surface)));

        let mut listeners = Vec::new();

        let ctl = Rc::clone(&controller);
        listeners.push(EventListener::new(&prev, "click", move |_event: &Event| {
            ctl.borrow_mut().go_previous();
        }));

        let ctl = Rc::clone(&controller);
        listeners.push(EventListener::new(&next, "click", move |_event: &Event| {
            ctl.borrow_mut().go_next();
        }));

        let ctl = Rc::clone(&controller);
        listeners.push(EventListener::new(&track, "touchstart", move |event: &Event| {
            if let Some(x) = touch_x(event, TouchPoint::Active) {
                ctl.borrow_mut().touch_start(x);
            }
        }));

        let ctl = Rc::clone(&controller);
        listeners.push(EventListener::new(&track, "touchend", move |event: &Event| {
            if let Some(x) = touch_x(event, TouchPoint::Changed) {
                ctl.borrow_mut().touch_end(x);
            }
        }));

        // Indicators are rebuilt on resize, so clicks are delegated to the host.
        if let Some(host) = &indicator_host {
            let ctl = Rc::clone(&controller);
            listeners.push(EventListener::new(host, "click", move |event: &Event| {
                if let Some(page) = clicked_page(event) {
                    ctl.borrow_mut().jump_to_page(page);
                }
            }));
        }

        let pending_resize = Rc::new(RefCell::new(None));
        if let Ok(window) = dom::window() {
            let ctl = Rc::clone(&controller);
            let pending = Rc::clone(&pending_resize);
            let debouncer = Rc::new(RefCell::new(Debouncer::new(settings.resize_debounce_ms)));
            listeners.push(EventListener::new(&window, "resize", move |_event: &Event| {
                let ticket = debouncer.borrow_mut().touch();
                let wait = debouncer.borrow().wait_ms();
                let ctl = Rc::clone(&ctl);
                let debouncer = Rc::clone(&debouncer);
                // Replacing the pending timeout drops (cancels) the older one.
                *pending.borrow_mut() = Some(Timeout::new(wait, move || {
                    if debouncer.borrow_mut().settle(ticket) {
                        ctl.borrow_mut().handle_resize(dom::viewport_width());
                    }
                }));
            }));
        }

        Some(Self {
            controller,
            _listeners: listeners,
            _pending_resize: pending_resize,
        })
    }

    /// Current left-most item index.
    pub(crate) fn current_index(&self) -> usize {
        self.controller.borrow().state().current_index()
    }

    /// Step forward (same path as the next button).
    pub(crate) fn go_next(&self) {
        self.controller.borrow_mut().go_next();
    }

    /// Step back (same path as the previous button).
    pub(crate) fn go_previous(&self) {
        self.controller.borrow_mut().go_previous();
    }
}

enum TouchPoint {
    Active,
    Changed,
}

fn touch_x(event: &Event, which: TouchPoint) -> Option<f64> {
    let touch_event = event.dyn_ref::<TouchEvent>()?;
    let list = match which {
        TouchPoint::Active => touch_event.touches(),
        TouchPoint::Changed => touch_event.changed_touches(),
    };
    list.get(0).map(|t| f64::from(t.client_x()))
}

fn clicked_page(event: &Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let indicator = target
        .closest(&format!(".{INDICATOR_CLASS}"))
        .ok()
        .flatten()?;
    indicator.get_attribute(PAGE_ATTR)?.parse().ok()
}
