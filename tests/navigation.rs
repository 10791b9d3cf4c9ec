mod common;

use common::{harness, render_config, slides};
use slidewheel::carousel::nav::NavReducer;
use slidewheel::carousel::{
    wrap_index, CarouselBuilder, CarouselEvent, Controls, ManualClock, NavIntent, NavState,
};
use slidewheel::mvi::Reducer;
use std::sync::Arc;

#[test]
fn next_from_each_index_wraps_through_four_slides() {
    let mut h = harness(4, render_config(0));
    let visited: Vec<usize> = (0..4).map(|_| h.carousel.next()).collect();
    assert_eq!(visited, vec![1, 2, 3, 0]);
}

#[test]
fn prev_from_first_goes_to_last() {
    let mut h = harness(4, render_config(0));
    assert_eq!(h.carousel.prev(), 3);
}

#[test]
fn next_then_prev_returns_to_start() {
    for n in 2..6usize {
        for start in 0..n {
            let mut h = harness(n, render_config(0));
            h.carousel.navigate_to(start as i64);
            h.carousel.next();
            assert_eq!(h.carousel.prev(), start, "n={n} start={start}");
        }
    }
}

#[test]
fn out_of_range_targets_wrap() {
    let mut h = harness(4, render_config(0));
    assert_eq!(h.carousel.navigate_to(-1), 3);
    assert_eq!(h.carousel.navigate_to(5), 1);
    assert_eq!(h.carousel.navigate_to(-9), 3);
}

#[test]
fn wrap_index_stays_in_range() {
    for len in 1..8usize {
        for target in -20i64..20 {
            let wrapped = wrap_index(target, len);
            assert!(wrapped < len);
            assert_eq!(wrapped as i64, target.rem_euclid(len as i64));
        }
    }
}

#[test]
fn first_and_last_events() {
    let mut h = harness(5, render_config(0));
    h.carousel.handle(CarouselEvent::Last);
    assert_eq!(h.carousel.index(), 4);
    h.carousel.handle(CarouselEvent::First);
    assert_eq!(h.carousel.index(), 0);
}

#[test]
fn single_slide_never_moves_or_rerenders() {
    let mut h = harness(1, render_config(1000));
    let renders = h.surface.render_count();
    h.carousel.next();
    h.carousel.prev();
    h.carousel.navigate_to(3);
    assert_eq!(h.carousel.index(), 0);
    assert_eq!(h.surface.render_count(), renders);
}

#[test]
fn empty_carousel_is_inert() {
    let mut h = harness(0, render_config(1000));
    assert!(h.carousel.is_empty());
    assert_eq!(h.carousel.next(), 0);
    h.advance_and_poll(5000);
    assert_eq!(h.surface.render_count(), 0);
    assert_eq!(h.indicators.builds(), 0);
    assert!(h.carousel.current().is_none());
}

#[test]
fn missing_controls_ignore_presses() {
    let mut carousel = CarouselBuilder::new(slides(3))
        .config(render_config(0))
        .controls(Controls::none())
        .clock(Arc::new(ManualClock::new()))
        .build();
    carousel.handle(CarouselEvent::NextPressed);
    carousel.handle(CarouselEvent::PrevPressed);
    assert_eq!(carousel.index(), 0);

    // Programmatic navigation still works
    assert_eq!(carousel.next(), 1);
}

#[test]
fn current_tracks_index() {
    let mut h = harness(3, render_config(0));
    h.carousel.next();
    assert_eq!(h.carousel.current().map(String::as_str), Some("slide 1"));
}

#[test]
fn reducer_can_be_driven_directly() {
    let state = NavReducer::reduce(NavState::new(3), NavIntent::Prev);
    assert_eq!(state.index(), 2);
    let state = NavReducer::reduce(state, NavIntent::Next);
    assert_eq!(state.index(), 0);
}
