// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Toast elements for [`NotificationCenter`] entries.

use std::cell::RefCell;
use std::rc::Rc;

use folio_app_core::notify::{NotificationCenter, NotificationKind, NotificationSettings};
use gloo::timers::callback::Timeout;
use tracing::{debug, warn};
use web_sys::Document;

/// Shows notifications and removes each one when its time-to-live runs out.
#[derive(Clone)]
pub(crate) struct Notifier {
    document: Document,
    center: Rc<RefCell<NotificationCenter>>,
}

impl Notifier {
    pub(crate) fn new(document: Document, settings: NotificationSettings) -> Self {
        Self {
            document,
            center: Rc::new(RefCell::new(NotificationCenter::new(settings))),
        }
    }

    /// Append a toast to the body; it removes itself after the TTL.
    pub(crate) fn show(&self, message: &str, kind: NotificationKind) {
        let Some(body) = self.document.body() else {
            warn!("no <body>; dropping notification");
            return;
        };
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(err) => {
                warn!(?err, "could not create notification element");
                return;
            }
        };

        let (id, ttl) = {
            let mut center = self.center.borrow_mut();
            let ttl = center.ttl_ms();
            (center.push(message, kind).id, ttl)
        };
        el.set_class_name(&kind.class_list());
        el.set_text_content(Some(message));
        if body.append_child(&el).is_err() {
            self.center.borrow_mut().dismiss(id);
            return;
        }
        debug!(id, ?kind, "notification shown");

        let center = Rc::clone(&self.center);
        Timeout::new(ttl, move || {
            el.remove();
            center.borrow_mut().dismiss(id);
        })
        .forget();
    }

    /// Number of notifications currently on screen.
    pub(crate) fn live_count(&self) -> usize {
        self.center.borrow().live().len()
    }
}
