//! Shared test utilities: recording collaborators and a manual-clock harness.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use slidewheel::carousel::{
    Carousel, CarouselBuilder, Controls, Indicator, IndicatorDisplay, ManualClock, Measurement,
    Offset, OffsetModel, Surface,
};
use slidewheel::config::RenderConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Debug, Default)]
struct SurfaceLog {
    measurement: Measurement,
    offsets: Vec<Offset>,
}

/// Surface whose size tests control and whose applied offsets are recorded.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    log: Arc<Mutex<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new(viewport_width: f64, gap: f64) -> Self {
        let surface = Self::default();
        surface.resize(viewport_width, gap);
        surface
    }

    pub fn resize(&self, viewport_width: f64, gap: f64) {
        self.log.lock().measurement = Measurement::new(viewport_width, gap);
    }

    pub fn offsets(&self) -> Vec<Offset> {
        self.log.lock().offsets.clone()
    }

    pub fn render_count(&self) -> usize {
        self.log.lock().offsets.len()
    }

    pub fn last(&self) -> Option<Offset> {
        self.log.lock().offsets.last().copied()
    }
}

impl Surface for RecordingSurface {
    fn measure(&self) -> Measurement {
        self.log.lock().measurement
    }

    fn apply_offset(&mut self, offset: Offset) {
        self.log.lock().offsets.push(offset);
    }
}

#[derive(Debug, Default)]
struct IndicatorLog {
    builds: usize,
    paints: Vec<Vec<Indicator>>,
}

/// Indicator display that keeps every painted frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingIndicators {
    log: Arc<Mutex<IndicatorLog>>,
}

impl RecordingIndicators {
    pub fn builds(&self) -> usize {
        self.log.lock().builds
    }

    pub fn paint_count(&self) -> usize {
        self.log.lock().paints.len()
    }

    pub fn last_paint(&self) -> Vec<Indicator> {
        self.log.lock().paints.last().cloned().unwrap_or_default()
    }
}

impl IndicatorDisplay for RecordingIndicators {
    fn build(&mut self, _indicators: &[Indicator]) {
        self.log.lock().builds += 1;
    }

    fn paint(&mut self, indicators: &[Indicator]) {
        self.log.lock().paints.push(indicators.to_vec());
    }
}

pub struct Harness {
    pub carousel: Carousel<String>,
    pub clock: ManualClock,
    pub surface: RecordingSurface,
    pub indicators: RecordingIndicators,
}

impl Harness {
    pub fn advance_and_poll(&mut self, millis: u64) {
        self.clock.advance_ms(millis);
        self.carousel.poll();
    }
}

pub fn slides(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("slide {i}")).collect()
}

pub fn render_config(interval_ms: u64) -> RenderConfig {
    RenderConfig {
        autoplay_interval_ms: interval_ms,
        ..RenderConfig::default()
    }
}

/// Carousel of `count` slides on a 300px surface with a 10px gap.
pub fn harness(count: usize, config: RenderConfig) -> Harness {
    let clock = ManualClock::new();
    let surface = RecordingSurface::new(300.0, 10.0);
    let indicators = RecordingIndicators::default();
    let carousel = CarouselBuilder::new(slides(count))
        .config(config)
        .surface(surface.clone())
        .indicators(indicators.clone())
        .controls(Controls::both())
        .clock(Arc::new(clock.clone()))
        .build();

    Harness {
        carousel,
        clock,
        surface,
        indicators,
    }
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}
