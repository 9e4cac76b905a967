// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Trailing-edge debounce bookkeeping.
//!
//! The host owns the timer: on every event it calls [`Debouncer::touch`] and
//! arms a timer for [`Debouncer::wait_ms`] carrying the returned ticket. When
//! a timer fires it asks [`Debouncer::settle`] whether its ticket is still the
//! latest. Each `touch` supersedes every earlier ticket, so a burst of events
//! runs the handler once, `wait_ms` after the last event.
//!
//! Hosts whose timers cancel on drop get the same result without the ticket
//! check; `settle` keeps the handler single-shot when a superseded timer
//! still fires.

/// Ticket identifying one scheduled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Trailing debounce state.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait_ms: u32,
    latest: u64,
    pending: bool,
}

impl Debouncer {
    /// New debouncer with the given quiet period.
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            latest: 0,
            pending: false,
        }
    }

    /// Quiet period the host timer should use.
    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Record an event; the returned ticket supersedes all earlier ones.
    pub fn touch(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        self.pending = true;
        Ticket(self.latest)
    }

    /// Called when the timer for `ticket` fires. Returns `true` exactly once,
    /// for the latest ticket.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.pending && ticket.0 == self.latest {
            self.pending = false;
            true
        } else {
            false
        }
    }
}
