mod common;

use common::{harness, render_config};
use slidewheel::carousel::gesture::classify;
use slidewheel::carousel::{CarouselEvent, Swipe};

fn swipe(h: &mut common::Harness, from: f64, to: f64) {
    h.carousel.handle(CarouselEvent::GestureStart { x: from });
    h.carousel.handle(CarouselEvent::GestureEnd { x: to });
}

#[test]
fn leftward_swipe_at_threshold_goes_next() {
    let mut h = harness(4, render_config(0));
    swipe(&mut h, 200.0, 160.0);
    assert_eq!(h.carousel.index(), 1);
}

#[test]
fn rightward_swipe_goes_prev() {
    let mut h = harness(4, render_config(0));
    swipe(&mut h, 200.0, 241.0);
    assert_eq!(h.carousel.index(), 3);
}

#[test]
fn short_drag_below_threshold_is_ignored() {
    let mut h = harness(4, render_config(0));
    swipe(&mut h, 200.0, 161.0);
    swipe(&mut h, 200.0, 239.0);
    assert_eq!(h.carousel.index(), 0);
    assert!(!h.carousel.is_gesture_active());
}

#[test]
fn end_without_start_does_nothing() {
    let mut h = harness(4, render_config(0));
    h.carousel.handle(CarouselEvent::GestureEnd { x: 0.0 });
    assert_eq!(h.carousel.index(), 0);
}

#[test]
fn cancel_discards_the_gesture() {
    let mut h = harness(4, render_config(0));
    h.carousel.handle(CarouselEvent::GestureStart { x: 200.0 });
    h.carousel.handle(CarouselEvent::GestureCancel);
    h.carousel.handle(CarouselEvent::GestureEnd { x: 0.0 });
    assert_eq!(h.carousel.index(), 0);
}

#[test]
fn swipe_restarts_autoplay() {
    let mut h = harness(4, render_config(1000));
    h.advance_and_poll(800);
    swipe(&mut h, 200.0, 100.0);
    assert_eq!(h.carousel.index(), 1);
    h.advance_and_poll(800);
    assert_eq!(h.carousel.index(), 1);
    h.advance_and_poll(200);
    assert_eq!(h.carousel.index(), 2);
}

#[test]
fn classification_boundaries() {
    assert_eq!(classify(-40.0, 40.0), Swipe::Next);
    assert_eq!(classify(-39.9, 40.0), Swipe::Tap);
    assert_eq!(classify(40.0, 40.0), Swipe::Prev);
    assert_eq!(classify(f64::NAN, 40.0), Swipe::Tap);
}
