// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One-shot reveal of content blocks as they scroll into view.
//!
//! Each registered block starts [`RevealState::Pending`] and moves to
//! [`RevealState::Revealed`] the first time at least `threshold` of it lies
//! inside the viewport shrunk by `bottom_margin_px`. The transition never
//! reverses; later observations of a revealed block are ignored.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Threshold and margin used to decide when a block counts as visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealPolicy {
    /// Minimum visible fraction (0.0..=1.0).
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport.
    pub bottom_margin_px: f64,
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50.0,
        }
    }
}

impl RevealPolicy {
    /// CSS `rootMargin` string for an `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }

    /// Viewport rectangle after applying the bottom margin.
    pub fn root_bounds(&self, viewport_width: f64, viewport_height: f64) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: viewport_width.max(0.0),
            height: (viewport_height - self.bottom_margin_px).max(0.0),
        }
    }

    /// Whether an observation crosses the reveal threshold.
    pub fn is_visible(&self, intersecting: bool, ratio: f64) -> bool {
        intersecting && ratio >= self.threshold
    }
}

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Area (zero for degenerate rectangles).
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap with `other`, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        })
    }

    /// Fraction of `self` that lies inside `root`.
    pub fn visible_fraction(&self, root: &Rect) -> f64 {
        let area = self.area();
        if area == 0.0 {
            return 0.0;
        }
        self.intersection(root).map_or(0.0, |hit| hit.area() / area)
    }
}

/// Presentation state of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Not yet seen.
    #[default]
    Pending,
    /// Revealed; terminal.
    Revealed,
}

/// Handle to a registered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealKey(pub usize);

/// Render port: applies the reveal presentation to a block.
pub trait RevealSurface {
    /// Add the reveal class and clear any inline transform on `key`.
    fn reveal(&mut self, key: RevealKey);
}

/// Tracks reveal state for a set of blocks.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    policy: RevealPolicy,
    states: Vec<RevealState>,
}

impl RevealSet {
    /// Empty set with the given policy.
    pub fn new(policy: RevealPolicy) -> Self {
        Self {
            policy,
            states: Vec::new(),
        }
    }

    /// Policy in effect.
    pub fn policy(&self) -> &RevealPolicy {
        &self.policy
    }

    /// Register a block in the pending state.
    pub fn register(&mut self) -> RevealKey {
        self.states.push(RevealState::Pending);
        RevealKey(self.states.len() - 1)
    }

    /// Number of registered blocks.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State of `key`; unknown keys read as pending.
    pub fn state(&self, key: RevealKey) -> RevealState {
        self.states.get(key.0).copied().unwrap_or_default()
    }

    /// Number of revealed blocks.
    pub fn revealed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }

    /// Feed an intersection observation. Returns `true` only on the
    /// pending → revealed transition.
    pub fn observe(&mut self, key: RevealKey, intersecting: bool, ratio: f64) -> bool {
        let Some(state) = self.states.get_mut(key.0) else {
            return false;
        };
        if *state == RevealState::Revealed || !self.policy.is_visible(intersecting, ratio) {
            return false;
        }
        *state = RevealState::Revealed;
        debug!(key = key.0, ratio, "block revealed");
        true
    }

    /// Feed a geometric observation (block and viewport in CSS pixels).
    pub fn observe_rect(
        &mut self,
        key: RevealKey,
        block: &Rect,
        viewport_width: f64,
        viewport_height: f64,
    ) -> bool {
        let root = self.policy.root_bounds(viewport_width, viewport_height);
        let ratio = block.visible_fraction(&root);
        self.observe(key, ratio > 0.0, ratio)
    }

    /// Observe and, on transition, apply the reveal to `surface`.
    pub fn observe_into<S>(
        &mut self,
        surface: &mut S,
        key: RevealKey,
        intersecting: bool,
        ratio: f64,
    ) -> bool
    where
        S: RevealSurface + ?Sized,
    {
        let fired = self.observe(key, intersecting, ratio);
        if fired {
            surface.reveal(key);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_matches_observer_syntax() {
        assert_eq!(RevealPolicy::default().root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn fraction_of_partially_visible_block() {
        let root = RevealPolicy::default().root_bounds(1000.0, 800.0);
        // Block 100px tall whose top 20px sit above the shrunk bottom (750).
        let block = Rect {
            x: 0.0,
            y: 730.0,
            width: 200.0,
            height: 100.0,
        };
        assert!((block.visible_fraction(&root) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn block_below_shrunk_viewport_is_invisible() {
        let root = RevealPolicy::default().root_bounds(1000.0, 800.0);
        let block = Rect {
            x: 0.0,
            y: 760.0,
            width: 200.0,
            height: 100.0,
        };
        assert_eq!(block.visible_fraction(&root), 0.0);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut set = RevealSet::new(RevealPolicy::default());
        assert!(!set.observe(RevealKey(3), true, 1.0));
    }
}
