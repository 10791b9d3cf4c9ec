//! Terminal-side collaborators for the carousel engine.
//!
//! Both are cheap handles over shared state: the engine owns one clone and
//! writes into it, the renderer reads from another.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::carousel::{Indicator, IndicatorDisplay, Measurement, Offset, Surface};

/// Nominal width of one terminal cell in surface units (pixels).
pub const CELL_WIDTH_PX: f64 = 8.0;

pub fn columns_to_px(columns: u16) -> f64 {
    f64::from(columns) * CELL_WIDTH_PX
}

pub fn px_to_columns(px: f64) -> i32 {
    if !px.is_finite() {
        return 0;
    }
    let columns = (px / CELL_WIDTH_PX).round();
    columns.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

#[derive(Debug, Default)]
struct SurfaceState {
    width: u16,
    gap: u16,
    offset: Option<Offset>,
}

/// The body area of the terminal, measured in columns.
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    inner: Arc<Mutex<SurfaceState>>,
}

impl TerminalSurface {
    pub fn new(gap_columns: u16) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SurfaceState {
                width: 0,
                gap: gap_columns,
                offset: None,
            })),
        }
    }

    pub fn set_width(&self, columns: u16) {
        self.inner.lock().width = columns;
    }

    pub fn width(&self) -> u16 {
        self.inner.lock().width
    }

    pub fn gap(&self) -> u16 {
        self.inner.lock().gap
    }

    pub fn offset(&self) -> Option<Offset> {
        self.inner.lock().offset
    }

    /// Committed offset translated into terminal columns.
    pub fn offset_columns(&self) -> i32 {
        let state = self.inner.lock();
        state
            .offset
            .map(|offset| px_to_columns(offset.resolve(columns_to_px(state.width))))
            .unwrap_or(0)
    }
}

impl Surface for TerminalSurface {
    fn measure(&self) -> Measurement {
        let state = self.inner.lock();
        Measurement::new(columns_to_px(state.width), columns_to_px(state.gap))
    }

    fn apply_offset(&mut self, offset: Offset) {
        self.inner.lock().offset = Some(offset);
    }
}

/// Indicator dots shown in the footer.
#[derive(Debug, Clone, Default)]
pub struct IndicatorStrip {
    inner: Arc<Mutex<Vec<Indicator>>>,
}

impl IndicatorStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Indicator> {
        self.inner.lock().clone()
    }
}

impl IndicatorDisplay for IndicatorStrip {
    fn build(&mut self, indicators: &[Indicator]) {
        *self.inner.lock() = indicators.to_vec();
    }

    fn paint(&mut self, indicators: &[Indicator]) {
        let mut strip = self.inner.lock();
        strip.clear();
        strip.extend_from_slice(indicators);
    }
}
