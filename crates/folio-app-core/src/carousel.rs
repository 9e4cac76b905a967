// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Carousel pagination state and its controller.
//!
//! [`Carousel`] is the pure state machine: a fixed item count, the number of
//! items visible per viewport breakpoint, and the index of the left-most
//! visible item. [`CarouselController`] pairs that state with a
//! [`CarouselSurface`] and re-renders after every input, so the DOM adapter
//! only has to translate events into method calls.
//!
//! Invariant: `current_index` is always in `0..=max_index()`, where
//! `max_index() = item_count.saturating_sub(items_per_view)`.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Viewport width thresholds (CSS pixels, inclusive) for items-per-view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breakpoints {
    /// Widths at or below this show one item.
    pub single_max: f64,
    /// Widths at or below this (and above `single_max`) show two items.
    pub double_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            single_max: 768.0,
            double_max: 1024.0,
        }
    }
}

impl Breakpoints {
    /// Items visible at the given viewport width: 1, 2 or 3.
    pub fn items_per_view(&self, width: f64) -> usize {
        if width <= self.single_max {
            1
        } else if width <= self.double_max {
            2
        } else {
            3
        }
    }
}

/// Tunables for the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselSettings {
    /// Breakpoints used to derive items-per-view.
    pub breakpoints: Breakpoints,
    /// Horizontal travel (px) a touch must exceed to count as a swipe.
    pub swipe_threshold_px: f64,
    /// Quiet period before a resize burst is handled.
    pub resize_debounce_ms: u32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            swipe_threshold_px: 50.0,
            resize_debounce_ms: 250,
        }
    }
}

/// Direction of a recognised swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left: advance.
    Next,
    /// Finger moved left-to-right: go back.
    Previous,
}

/// Everything a surface needs to paint the current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselFrame {
    /// Horizontal translation of the item track, in percent.
    pub translate_percent: f64,
    /// Whether the "previous" control is disabled.
    pub prev_disabled: bool,
    /// Whether the "next" control is disabled.
    pub next_disabled: bool,
    /// Index of the single active indicator.
    pub active_page: usize,
    /// Number of indicators.
    pub page_count: usize,
}

impl CarouselFrame {
    /// CSS `transform` value for the track, e.g. `translateX(-50%)`.
    pub fn transform(&self) -> String {
        // Avoid rendering "-0%" at the first position.
        let pct = if self.translate_percent == 0.0 {
            0.0
        } else {
            self.translate_percent
        };
        format!("translateX({pct}%)")
    }
}

/// Pagination state for a fixed list of items.
#[derive(Debug, Clone)]
pub struct Carousel {
    item_count: usize,
    items_per_view: usize,
    current_index: usize,
    breakpoints: Breakpoints,
    swipe_threshold: f64,
}

impl Carousel {
    /// Create state for `item_count` items at the given viewport width.
    pub fn new(item_count: usize, viewport_width: f64, settings: &CarouselSettings) -> Self {
        Self {
            item_count,
            items_per_view: settings.breakpoints.items_per_view(viewport_width),
            current_index: 0,
            breakpoints: settings.breakpoints,
            swipe_threshold: settings.swipe_threshold_px,
        }
    }

    /// Number of items (fixed at mount).
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Items visible at once for the current viewport.
    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    /// Index of the left-most visible item.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Largest valid `current_index`.
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.items_per_view)
    }

    /// `ceil(item_count / items_per_view)`, never less than one.
    pub fn page_count(&self) -> usize {
        self.item_count.div_ceil(self.items_per_view).max(1)
    }

    /// Page containing the left-most visible item.
    pub fn active_page(&self) -> usize {
        self.current_index / self.items_per_view
    }

    /// Whether a previous step is possible.
    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Whether a next step is possible.
    pub fn can_go_next(&self) -> bool {
        self.current_index < self.max_index()
    }

    /// Step back one item. Returns `false` at the first position.
    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Step forward one item. Returns `false` at the last position.
    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Move to the first item of `page`, clamped to the last valid position.
    pub fn jump_to_page(&mut self, page: usize) {
        let target = page.saturating_mul(self.items_per_view);
        self.current_index = target.min(self.max_index());
    }

    /// Classify a touch from `start_x` to `end_x`; `None` for taps.
    pub fn classify_swipe(&self, start_x: f64, end_x: f64) -> Option<SwipeDirection> {
        let delta = start_x - end_x;
        if delta.abs() <= self.swipe_threshold {
            return None;
        }
        if delta > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }

    /// Apply a swipe with the same bounds rules as the buttons.
    /// Returns `true` if the position changed.
    pub fn handle_swipe(&mut self, start_x: f64, end_x: f64) -> bool {
        match self.classify_swipe(start_x, end_x) {
            Some(SwipeDirection::Next) => self.go_next(),
            Some(SwipeDirection::Previous) => self.go_previous(),
            None => false,
        }
    }

    /// Recompute items-per-view for a new viewport width and re-clamp the
    /// index. Returns `true` if items-per-view changed.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let next = self.breakpoints.items_per_view(viewport_width);
        let changed = next != self.items_per_view;
        self.items_per_view = next;
        self.current_index = self.current_index.min(self.max_index());
        changed
    }

    /// Snapshot for rendering.
    #[allow(clippy::cast_precision_loss)]
    pub fn frame(&self) -> CarouselFrame {
        let step = 100.0 / self.items_per_view as f64;
        CarouselFrame {
            translate_percent: -(self.current_index as f64 * step),
            prev_disabled: !self.can_go_previous(),
            next_disabled: !self.can_go_next(),
            active_page: self.active_page(),
            page_count: self.page_count(),
        }
    }
}

/// Render port for the carousel; implemented by the DOM adapter and by test
/// recorders.
pub trait CarouselSurface {
    /// Replace all indicators with `page_count` fresh ones.
    fn rebuild_indicators(&mut self, page_count: usize);
    /// Apply a frame: track transform, button states, active indicator.
    fn paint(&mut self, frame: &CarouselFrame);
}

/// Carousel state bound to a surface; every input ends in a render.
#[derive(Debug)]
pub struct CarouselController<S> {
    state: Carousel,
    surface: S,
    touch_start: Option<f64>,
}

impl<S> CarouselController<S>
where
    S: CarouselSurface,
{
    /// Build indicators and render the initial position.
    pub fn mount(state: Carousel, surface: S) -> Self {
        let mut ctl = Self {
            state,
            surface,
            touch_start: None,
        };
        ctl.surface.rebuild_indicators(ctl.state.page_count());
        ctl.render();
        debug!(
            items = ctl.state.item_count(),
            per_view = ctl.state.items_per_view(),
            "carousel mounted"
        );
        ctl
    }

    /// Current state.
    pub fn state(&self) -> &Carousel {
        &self.state
    }

    /// The surface (for inspection in tests and adapters).
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Previous-button handler.
    pub fn go_previous(&mut self) {
        if self.state.go_previous() {
            self.render();
        }
    }

    /// Next-button handler.
    pub fn go_next(&mut self) {
        if self.state.go_next() {
            self.render();
        }
    }

    /// Indicator-click handler.
    pub fn jump_to_page(&mut self, page: usize) {
        self.state.jump_to_page(page);
        self.render();
    }

    /// Swipe handler for a completed touch.
    pub fn handle_swipe(&mut self, start_x: f64, end_x: f64) {
        if self.state.handle_swipe(start_x, end_x) {
            self.render();
        }
    }

    /// Record where a touch began.
    pub fn touch_start(&mut self, x: f64) {
        self.touch_start = Some(x);
    }

    /// Finish a touch; ignored when no start was recorded.
    pub fn touch_end(&mut self, x: f64) {
        if let Some(start) = self.touch_start.take() {
            self.handle_swipe(start, x);
        }
    }

    /// Debounced resize handler: re-derive items-per-view, re-clamp, rebuild
    /// indicators, render.
    pub fn handle_resize(&mut self, viewport_width: f64) {
        let changed = self.state.resize(viewport_width);
        if changed {
            debug!(per_view = self.state.items_per_view(), "carousel breakpoint changed");
        }
        self.surface.rebuild_indicators(self.state.page_count());
        self.render();
    }

    /// Paint the current frame.
    pub fn render(&mut self) {
        let frame = self.state.frame();
        self.surface.paint(&frame);
    }
}
