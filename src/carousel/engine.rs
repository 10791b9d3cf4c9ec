use std::sync::Arc;

use crate::carousel::autoplay::{AutoplayController, AutoplayState};
use crate::carousel::builder::Controls;
use crate::carousel::clock::Clock;
use crate::carousel::gesture::GestureTracker;
use crate::carousel::indicators::{Indicator, IndicatorDisplay, IndicatorSync};
use crate::carousel::nav::{NavIntent, NavReducer, NavState};
use crate::carousel::relayout::RelayoutCoalescer;
use crate::carousel::render::{Offset, OffsetModel, PositionRenderer, Surface};
use crate::carousel::slides::SlideSet;
use crate::config::RenderConfig;
use crate::mvi::dispatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Live,
    Destroyed,
}

/// One carousel widget instance.
///
/// The current index lives only in `nav`. Every change to it is followed,
/// before the call returns, by a render and an indicator paint, so callers
/// never see the offset or the active indicator disagree with the index.
pub struct Carousel<T> {
    slides: SlideSet<T>,
    config: RenderConfig,
    nav: NavState,
    renderer: PositionRenderer,
    indicators: IndicatorSync,
    autoplay: AutoplayController,
    gestures: GestureTracker,
    relayout: RelayoutCoalescer,
    controls: Controls,
    clock: Arc<dyn Clock>,
    /// Pointer over the surface with pause-on-hover enabled.
    hovered: bool,
    lifecycle: Lifecycle,
}

impl<T> Carousel<T> {
    pub(super) fn assemble(
        slides: SlideSet<T>,
        config: RenderConfig,
        surface: Option<Box<dyn Surface>>,
        indicators: Option<Box<dyn IndicatorDisplay>>,
        controls: Controls,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut carousel = Self {
            nav: NavState::new(slides.len()),
            renderer: PositionRenderer::new(config.offset_model, surface),
            indicators: IndicatorSync::new(indicators),
            autoplay: AutoplayController::new(config.autoplay_interval()),
            gestures: GestureTracker::new(config.swipe_threshold_px),
            relayout: RelayoutCoalescer::default(),
            slides,
            config,
            controls,
            clock,
            hovered: false,
            lifecycle: Lifecycle::Live,
        };

        if carousel.slides.is_empty() {
            tracing::debug!("carousel built without slides, nothing to show");
            return carousel;
        }

        carousel.indicators.build(carousel.slides.len());
        carousel.commit();
        carousel.start_autoplay();
        tracing::info!(
            slides = carousel.slides.len(),
            model = ?carousel.config.offset_model,
            autoplay = ?carousel.autoplay.interval(),
            "carousel ready"
        );
        carousel
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn index(&self) -> usize {
        self.nav.index()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &SlideSet<T> {
        &self.slides
    }

    pub fn current(&self) -> Option<&T> {
        self.slides.get(self.nav.index())
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn offset_model(&self) -> OffsetModel {
        self.renderer.model()
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Last offset committed to the surface.
    pub fn offset(&self) -> Option<Offset> {
        self.renderer.last_offset()
    }

    pub fn indicators(&self) -> &[Indicator] {
        self.indicators.indicators()
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// True while autoplay is held by [`Self::toggle_autoplay`].
    pub fn is_autoplay_held(&self) -> bool {
        self.autoplay.is_held()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gestures.is_active()
    }

    pub fn is_relayout_pending(&self) -> bool {
        self.relayout.is_pending()
    }

    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == Lifecycle::Destroyed
    }

    // ========================================================================
    // Navigation (Index Model)
    // ========================================================================

    /// Go to `target`, wrapping out-of-range values. Returns the new index.
    pub fn navigate_to(&mut self, target: i64) -> usize {
        self.navigate(NavIntent::GoTo(target))
    }

    pub fn next(&mut self) -> usize {
        self.navigate(NavIntent::Next)
    }

    pub fn prev(&mut self) -> usize {
        self.navigate(NavIntent::Prev)
    }

    pub fn first(&mut self) -> usize {
        self.navigate(NavIntent::First)
    }

    pub fn last(&mut self) -> usize {
        self.navigate(NavIntent::Last)
    }

    fn navigate(&mut self, intent: NavIntent) -> usize {
        if self.is_destroyed() || !self.nav.can_navigate() {
            return self.nav.index();
        }
        let from = self.nav.index();
        dispatch!(self, nav, NavReducer, intent);
        self.commit();
        tracing::trace!(from, to = self.nav.index(), ?intent, "navigated");
        self.nav.index()
    }

    /// Render then paint for the current index. Always paired.
    fn commit(&mut self) {
        let index = self.nav.index();
        self.renderer.render(index);
        self.indicators.paint(index);
    }

    // ========================================================================
    // Autoplay
    // ========================================================================

    /// Start the timer. No-op with fewer than two slides, when disabled,
    /// when already running, while held, or while hover-paused.
    pub fn start_autoplay(&mut self) {
        if self.autoplay_blocked() {
            return;
        }
        self.autoplay.start(self.clock.now());
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Stop then start, so the next firing is a full interval away.
    pub fn restart_autoplay(&mut self) {
        if self.autoplay_blocked() {
            self.autoplay.stop();
            return;
        }
        self.autoplay.restart(self.clock.now());
    }

    fn autoplay_blocked(&self) -> bool {
        self.is_destroyed() || !self.nav.can_navigate() || self.hovered
    }

    /// User pause/resume. A held timer ignores hover-leave restarts, and a
    /// release while the pointer is still over the surface stays paused
    /// until it leaves.
    pub fn toggle_autoplay(&mut self) {
        if self.is_destroyed() || !self.nav.can_navigate() {
            return;
        }
        if self.autoplay.is_held() {
            self.autoplay.release();
            self.start_autoplay();
            tracing::debug!(hovered = self.hovered, "autoplay released by user");
        } else {
            self.autoplay.hold();
            tracing::debug!("autoplay held by user");
        }
    }

    pub(super) fn after_manual_navigation(&mut self) {
        if self.autoplay.is_running() {
            self.restart_autoplay();
        }
    }

    /// Hover edge from the host. Only called when pause-on-hover is enabled.
    pub(super) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        if hovered {
            self.stop_autoplay();
        } else {
            self.start_autoplay();
        }
    }

    // ========================================================================
    // Frame loop
    // ========================================================================

    pub(super) fn gestures_mut(&mut self) -> &mut GestureTracker {
        &mut self.gestures
    }

    pub(super) fn request_relayout(&mut self) {
        self.relayout.request();
    }

    /// Re-measure and re-render the current index immediately.
    ///
    /// Does not navigate and does not touch autoplay.
    pub fn relayout_now(&mut self) {
        if self.is_destroyed() || self.slides.is_empty() {
            return;
        }
        self.relayout.clear();
        self.renderer.render(self.nav.index());
    }

    /// Once-per-frame work: flush a pending relayout and deliver the
    /// autoplay firings that have come due.
    ///
    /// Any number of owed firings advance the index in one step, so a poll
    /// renders at most once however long the host stalled.
    pub fn poll(&mut self) {
        if self.is_destroyed() {
            return;
        }

        let relayout = self.relayout.take();
        let owed = self.autoplay.take_due(self.clock.now());
        if owed > 0 {
            let current = i64::try_from(self.nav.index()).unwrap_or(0);
            self.navigate(NavIntent::GoTo(current.saturating_add(i64::from(owed))));
            tracing::trace!(owed, "autoplay advanced");
        } else if relayout && !self.slides.is_empty() {
            self.renderer.render(self.nav.index());
        }
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    /// Cancel the timer, drop any gesture or pending relayout, and detach
    /// collaborators. Every later event, poll, or navigation is ignored.
    pub fn destroy(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.autoplay.stop();
        self.gestures.cancel();
        self.relayout.clear();
        self.renderer.detach();
        self.indicators.detach();
        self.lifecycle = Lifecycle::Destroyed;
        tracing::info!(index = self.nav.index(), "carousel destroyed");
    }
}

impl<T> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<T> std::fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("len", &self.slides.len())
            .field("nav", &self.nav)
            .field("renderer", &self.renderer)
            .field("indicators", &self.indicators)
            .field("autoplay", &self.autoplay)
            .field("gestures", &self.gestures)
            .field("relayout", &self.relayout)
            .field("controls", &self.controls)
            .field("hovered", &self.hovered)
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::builder::CarouselBuilder;
    use crate::carousel::clock::ManualClock;

    fn carousel(len: usize, clock: &ManualClock, interval_ms: u64) -> Carousel<usize> {
        CarouselBuilder::new((0..len).collect::<Vec<_>>())
            .config(RenderConfig {
                autoplay_interval_ms: interval_ms,
                ..RenderConfig::default()
            })
            .clock(Arc::new(clock.clone()))
            .build()
    }

    #[test]
    fn starts_at_zero_with_autoplay_running() {
        let clock = ManualClock::new();
        let carousel = carousel(3, &clock, 1000);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_autoplay_running());
    }

    #[test]
    fn single_slide_never_starts_autoplay() {
        let clock = ManualClock::new();
        let carousel = carousel(1, &clock, 1000);
        assert!(!carousel.is_autoplay_running());
    }

    #[test]
    fn empty_carousel_is_inert() {
        let clock = ManualClock::new();
        let mut carousel = carousel(0, &clock, 1000);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.current(), None);
        carousel.poll();
        assert_eq!(carousel.offset(), None);
    }

    #[test]
    fn poll_advances_on_schedule() {
        let clock = ManualClock::new();
        let mut carousel = carousel(5, &clock, 1000);
        clock.advance_ms(999);
        carousel.poll();
        assert_eq!(carousel.index(), 0);
        clock.advance_ms(1);
        carousel.poll();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn navigation_after_destroy_is_ignored() {
        let clock = ManualClock::new();
        let mut carousel = carousel(4, &clock, 1000);
        carousel.destroy();
        assert_eq!(carousel.next(), 0);
        assert!(carousel.is_destroyed());
        assert!(!carousel.is_autoplay_running());
    }

    #[test]
    fn toggle_holds_and_releases() {
        let clock = ManualClock::new();
        let mut carousel = carousel(4, &clock, 1000);
        carousel.toggle_autoplay();
        assert!(carousel.is_autoplay_held());
        carousel.start_autoplay();
        assert!(!carousel.is_autoplay_running());
        carousel.toggle_autoplay();
        assert!(carousel.is_autoplay_running());
    }

    #[test]
    fn release_while_hovered_waits_for_leave() {
        let clock = ManualClock::new();
        let mut carousel = carousel(4, &clock, 1000);
        carousel.set_hovered(true);
        carousel.toggle_autoplay();
        carousel.toggle_autoplay();
        assert!(!carousel.is_autoplay_held());
        assert!(!carousel.is_autoplay_running());

        clock.advance_ms(1000);
        carousel.poll();
        assert_eq!(carousel.index(), 0);

        carousel.set_hovered(false);
        assert!(carousel.is_autoplay_running());
    }

    #[test]
    fn stalled_poll_advances_by_owed_firings() {
        let clock = ManualClock::new();
        let mut carousel = carousel(5, &clock, 1000);
        clock.advance_ms(3500);
        carousel.poll();
        assert_eq!(carousel.index(), 3);
        clock.advance_ms(500);
        carousel.poll();
        assert_eq!(carousel.index(), 4);
    }
}
