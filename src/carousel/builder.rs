use std::sync::Arc;

use crate::carousel::clock::{Clock, SystemClock};
use crate::carousel::engine::Carousel;
use crate::carousel::indicators::IndicatorDisplay;
use crate::carousel::render::Surface;
use crate::carousel::slides::SlideSet;
use crate::config::RenderConfig;

/// Which previous/next controls the host provides. Button events for a
/// control that was not supplied are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub prev: bool,
    pub next: bool,
}

impl Controls {
    pub fn both() -> Self {
        Self {
            prev: true,
            next: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// Collects collaborators for a [`Carousel`]. Only the slides are required.
pub struct CarouselBuilder<T> {
    slides: SlideSet<T>,
    config: RenderConfig,
    surface: Option<Box<dyn Surface>>,
    indicators: Option<Box<dyn IndicatorDisplay>>,
    controls: Controls,
    clock: Option<Arc<dyn Clock>>,
}

impl<T> CarouselBuilder<T> {
    pub fn new(slides: impl Into<SlideSet<T>>) -> Self {
        Self {
            slides: slides.into(),
            config: RenderConfig::default(),
            surface: None,
            indicators: None,
            controls: Controls::none(),
            clock: None,
        }
    }

    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn surface(mut self, surface: impl Surface + 'static) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }

    pub fn indicators(mut self, display: impl IndicatorDisplay + 'static) -> Self {
        self.indicators = Some(Box::new(display));
        self
    }

    pub fn controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the carousel, render slide 0, and start autoplay.
    pub fn build(self) -> Carousel<T> {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Carousel::assemble(
            self.slides,
            self.config,
            self.surface,
            self.indicators,
            self.controls,
            clock,
        )
    }
}
