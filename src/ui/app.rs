use crate::carousel::{
    Carousel, CarouselBuilder, CarouselEvent, Clock, Controls, Indicator, OffsetModel,
};
use crate::config::{Config, SlideConfig};
use crate::ui::layout::{controls_layout, layout_regions, ControlsLayout};
use crate::ui::surface::{IndicatorStrip, TerminalSurface};
use ratatui::layout::Rect;
use std::sync::Arc;

/// Terminal host for one carousel. Owns the engine and the shared handles
/// the renderer reads from.
pub struct App {
    carousel: Carousel<SlideConfig>,
    surface: TerminalSurface,
    strip: IndicatorStrip,
    title: String,
    area: Rect,
    hovering: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, clock: Arc<dyn Clock>) -> Self {
        let surface = TerminalSurface::new(config.display.gap_columns);
        let strip = IndicatorStrip::new();
        let carousel = CarouselBuilder::new(config.slides.clone())
            .config(config.render.clone())
            .surface(surface.clone())
            .indicators(strip.clone())
            .controls(Controls::both())
            .clock(clock)
            .build();

        Self {
            carousel,
            surface,
            strip,
            title: config.display.title.clone(),
            area: Rect::default(),
            hovering: false,
            should_quit: false,
        }
    }

    pub fn carousel(&self) -> &Carousel<SlideConfig> {
        &self.carousel
    }

    pub fn surface(&self) -> &TerminalSurface {
        &self.surface
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        self.strip.snapshot()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn body(&self) -> Rect {
        layout_regions(self.area).1
    }

    pub fn controls_layout(&self) -> ControlsLayout {
        controls_layout(layout_regions(self.area).2, self.strip.snapshot().len())
    }

    /// Columns between neighbouring slides on screen. Proportional offsets
    /// assume edge-to-edge slides.
    pub fn track_gap(&self) -> u16 {
        match self.carousel.offset_model() {
            OffsetModel::Proportional => 0,
            OffsetModel::Measured => self.surface.gap(),
        }
    }

    pub fn dispatch(&mut self, event: CarouselEvent) {
        self.carousel.handle(event);
    }

    /// Flushes pending relayout and fires due autoplay steps.
    pub fn on_frame(&mut self) {
        self.carousel.poll();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
        self.surface.set_width(self.body().width);
        self.dispatch(CarouselEvent::Resized);
    }

    /// Emits hover edges only when the pointer crosses the body boundary.
    pub fn set_hovering(&mut self, inside: bool) {
        if inside == self.hovering {
            return;
        }
        self.hovering = inside;
        let event = if inside {
            CarouselEvent::PointerEnter
        } else {
            CarouselEvent::PointerLeave
        };
        self.dispatch(event);
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn shutdown(&mut self) {
        self.carousel.destroy();
    }
}
