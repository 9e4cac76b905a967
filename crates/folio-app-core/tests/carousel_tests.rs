// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use folio_app_core::carousel::{
    Carousel, CarouselController, CarouselFrame, CarouselSettings, CarouselSurface,
};
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

const DESKTOP: f64 = 1440.0;
const TABLET: f64 = 900.0;
const PHONE: f64 = 375.0;

/// Surface that records what the controller asked it to draw.
#[derive(Debug, Default)]
struct Recorder {
    indicators: usize,
    rebuilds: usize,
    frames: Vec<CarouselFrame>,
}

impl Recorder {
    fn last(&self) -> CarouselFrame {
        *self.frames.last().expect("at least one paint")
    }

    /// Indicator flags as the DOM would show them.
    fn active_flags(&self) -> Vec<bool> {
        let active = self.last().active_page;
        (0..self.indicators).map(|i| i == active).collect()
    }
}

impl CarouselSurface for Recorder {
    fn rebuild_indicators(&mut self, page_count: usize) {
        self.indicators = page_count;
        self.rebuilds += 1;
    }

    fn paint(&mut self, frame: &CarouselFrame) {
        self.frames.push(*frame);
    }
}

fn mount(items: usize, width: f64) -> CarouselController<Recorder> {
    let state = Carousel::new(items, width, &CarouselSettings::default());
    CarouselController::mount(state, Recorder::default())
}

#[test]
fn desktop_six_items_initial_render() {
    let ctl = mount(6, DESKTOP);
    let frame = ctl.surface().last();
    assert_eq!(ctl.state().current_index(), 0);
    assert_eq!(ctl.state().items_per_view(), 3);
    assert!(frame.prev_disabled);
    assert!(!frame.next_disabled);
    assert_eq!(ctl.surface().indicators, 2);
    assert_eq!(ctl.surface().active_flags(), vec![true, false]);
}

#[test]
fn desktop_six_items_reaching_last_position() {
    let mut ctl = mount(6, DESKTOP);
    ctl.go_next();
    assert_eq!(ctl.state().current_index(), 1);
    assert_eq!(ctl.surface().active_flags(), vec![true, false]);

    ctl.go_next();
    ctl.go_next();
    let frame = ctl.surface().last();
    assert_eq!(ctl.state().current_index(), 3);
    assert!(frame.next_disabled);
    assert!(!frame.prev_disabled);
    assert_eq!(ctl.surface().active_flags(), vec![false, true]);
    assert_eq!(frame.transform(), "translateX(-100%)");
}

#[test]
fn indicator_jump_lands_on_page_start() {
    let mut ctl = mount(6, DESKTOP);
    ctl.jump_to_page(1);
    assert_eq!(ctl.state().current_index(), 3);
    assert!(ctl.surface().last().next_disabled);
    ctl.jump_to_page(0);
    assert_eq!(ctl.state().current_index(), 0);
}

#[test]
fn previous_at_start_and_next_at_end_are_noops() {
    let mut ctl = mount(4, TABLET);
    let paints = ctl.surface().frames.len();
    ctl.go_previous();
    assert_eq!(ctl.state().current_index(), 0);
    assert_eq!(ctl.surface().frames.len(), paints);

    ctl.jump_to_page(1);
    assert_eq!(ctl.state().current_index(), 2);
    let paints = ctl.surface().frames.len();
    ctl.go_next();
    assert_eq!(ctl.state().current_index(), 2);
    assert_eq!(ctl.surface().frames.len(), paints);
}

#[test]
fn swipes_past_threshold_move_one_item() {
    let mut ctl = mount(6, PHONE);
    // Right-to-left by 60px.
    ctl.touch_start(200.0);
    ctl.touch_end(140.0);
    assert_eq!(ctl.state().current_index(), 1);

    // 30px is a tap.
    ctl.touch_start(200.0);
    ctl.touch_end(170.0);
    assert_eq!(ctl.state().current_index(), 1);

    // Left-to-right by 60px.
    ctl.handle_swipe(100.0, 160.0);
    assert_eq!(ctl.state().current_index(), 0);

    // Still bounded at the first item.
    ctl.handle_swipe(100.0, 160.0);
    assert_eq!(ctl.state().current_index(), 0);
}

#[test]
fn touch_end_without_start_is_ignored() {
    let mut ctl = mount(6, PHONE);
    ctl.touch_end(0.0);
    assert_eq!(ctl.state().current_index(), 0);
}

#[test]
fn resize_phone_to_desktop_reclamps() {
    let mut ctl = mount(6, PHONE);
    for _ in 0..5 {
        ctl.go_next();
    }
    assert_eq!(ctl.state().current_index(), 5);
    assert_eq!(ctl.surface().indicators, 6);

    ctl.handle_resize(DESKTOP);
    assert_eq!(ctl.state().items_per_view(), 3);
    assert_eq!(ctl.state().current_index(), 3);
    assert_eq!(ctl.surface().indicators, 2);
    assert_eq!(ctl.surface().active_flags(), vec![false, true]);
    assert!(ctl.surface().last().next_disabled);
}

#[test]
fn resize_always_rebuilds_indicators() {
    let mut ctl = mount(6, DESKTOP);
    let before = ctl.surface().rebuilds;
    ctl.handle_resize(DESKTOP);
    assert_eq!(ctl.surface().rebuilds, before + 1);
}

#[test]
fn fewer_items_than_view_disables_both_buttons() {
    for items in 0..=3 {
        let ctl = mount(items, DESKTOP);
        let frame = ctl.surface().last();
        assert!(frame.prev_disabled, "items={items}");
        assert!(frame.next_disabled, "items={items}");
        assert_eq!(ctl.surface().indicators, 1, "items={items}");
        assert_eq!(frame.active_page, 0);
    }
}

#[derive(Debug, Clone)]
enum Op {
    Previous,
    Next,
    Jump(usize),
    Swipe(f64, f64),
    Resize(f64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Previous),
        Just(Op::Next),
        (0usize..12).prop_map(Op::Jump),
        (0.0f64..400.0, 0.0f64..400.0).prop_map(|(a, b)| Op::Swipe(a, b)),
        prop_oneof![Just(PHONE), Just(768.0), Just(TABLET), Just(1024.0), Just(DESKTOP)]
            .prop_map(Op::Resize),
    ]
}

#[test]
fn index_stays_in_bounds_for_any_sequence() {
    const SEED_BYTES: [u8; 32] = [
        0x5f, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0,
    ];
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let mut runner = TestRunner::new_with_rng(PropConfig::default(), rng);

    let cases = (
        0usize..15,
        prop_oneof![Just(PHONE), Just(TABLET), Just(DESKTOP)],
        prop::collection::vec(op_strategy(), 0..40),
    );

    runner
        .run(&cases, |(items, width, ops)| {
            let mut ctl = mount(items, width);
            for op in ops {
                match op {
                    Op::Previous => ctl.go_previous(),
                    Op::Next => ctl.go_next(),
                    Op::Jump(page) => ctl.jump_to_page(page),
                    Op::Swipe(a, b) => ctl.handle_swipe(a, b),
                    Op::Resize(w) => ctl.handle_resize(w),
                }
                let state = ctl.state();
                let frame = ctl.surface().last();
                let max = items.saturating_sub(state.items_per_view());
                prop_assert!(state.current_index() <= max);
                prop_assert_eq!(frame.active_page, state.current_index() / state.items_per_view());
                prop_assert!(frame.active_page < ctl.surface().indicators);
                prop_assert_eq!(
                    ctl.surface().active_flags().iter().filter(|a| **a).count(),
                    1
                );
                prop_assert_eq!(frame.prev_disabled, state.current_index() == 0);
                prop_assert_eq!(frame.next_disabled, state.current_index() >= max);
            }
            Ok(())
        })
        .expect("carousel bounds property");
}
