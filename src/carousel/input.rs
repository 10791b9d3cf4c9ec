//! Input Adapter: discrete host events mapped onto navigation.

use crate::carousel::engine::Carousel;
use crate::carousel::gesture::Swipe;

/// Input forwarded by the host.
///
/// Coordinates are in the same units as the surface measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    PrevPressed,
    NextPressed,
    IndicatorPressed(usize),
    First,
    Last,
    ToggleAutoplay,
    PointerEnter,
    PointerLeave,
    GestureStart { x: f64 },
    GestureEnd { x: f64 },
    GestureCancel,
    /// The surface changed size. Re-measured on the next poll.
    Resized,
}

impl<T> Carousel<T> {
    /// Apply one input event. Ignored after [`Carousel::destroy`].
    pub fn handle(&mut self, event: CarouselEvent) {
        if self.is_destroyed() {
            tracing::debug!(?event, "carousel destroyed, ignoring event");
            return;
        }

        match event {
            CarouselEvent::PrevPressed => {
                if !self.controls().prev {
                    tracing::debug!("no previous control attached");
                    return;
                }
                self.prev();
                self.after_manual_navigation();
            }
            CarouselEvent::NextPressed => {
                if !self.controls().next {
                    tracing::debug!("no next control attached");
                    return;
                }
                self.next();
                self.after_manual_navigation();
            }
            CarouselEvent::IndicatorPressed(position) => {
                if self.indicators().get(position).is_none() {
                    tracing::debug!(position, "no indicator at position");
                    return;
                }
                self.navigate_to(i64::try_from(position).unwrap_or(i64::MAX));
                self.after_manual_navigation();
            }
            CarouselEvent::First => {
                self.first();
                self.after_manual_navigation();
            }
            CarouselEvent::Last => {
                self.last();
                self.after_manual_navigation();
            }
            CarouselEvent::ToggleAutoplay => self.toggle_autoplay(),
            CarouselEvent::PointerEnter => {
                if self.config().pause_on_hover {
                    self.set_hovered(true);
                }
            }
            CarouselEvent::PointerLeave => {
                if self.config().pause_on_hover {
                    self.set_hovered(false);
                }
            }
            CarouselEvent::GestureStart { x } => self.gestures_mut().begin(x),
            CarouselEvent::GestureEnd { x } => match self.gestures_mut().end(x) {
                Some(Swipe::Next) => {
                    self.next();
                    self.after_manual_navigation();
                }
                Some(Swipe::Prev) => {
                    self.prev();
                    self.after_manual_navigation();
                }
                Some(Swipe::Tap) => tracing::trace!("gesture below threshold"),
                None => tracing::debug!("gesture end without start"),
            },
            CarouselEvent::GestureCancel => self.gestures_mut().cancel(),
            CarouselEvent::Resized => self.request_relayout(),
        }
    }
}
