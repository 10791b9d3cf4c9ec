//! Indicator Synchronizer.

/// One position marker. `active` is true only for the current index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub position: usize,
    pub label: String,
    pub active: bool,
}

impl Indicator {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            label: format!("Slide {}", position + 1),
            active: false,
        }
    }
}

/// Display collaborator for the indicator strip.
pub trait IndicatorDisplay {
    /// Called once with the freshly built indicators.
    fn build(&mut self, indicators: &[Indicator]);

    /// Called after every index change with updated active flags.
    fn paint(&mut self, indicators: &[Indicator]);
}

/// Keeps the indicator list in step with the current index and mirrors it
/// into the display collaborator. Without a display there are no
/// indicators and both operations do nothing.
pub struct IndicatorSync {
    indicators: Vec<Indicator>,
    display: Option<Box<dyn IndicatorDisplay>>,
}

impl IndicatorSync {
    pub fn new(display: Option<Box<dyn IndicatorDisplay>>) -> Self {
        Self {
            indicators: Vec::new(),
            display,
        }
    }

    pub fn build(&mut self, slide_count: usize) -> &[Indicator] {
        let Some(display) = self.display.as_mut() else {
            tracing::debug!(slide_count, "no indicator display attached");
            return &self.indicators;
        };
        self.indicators = (0..slide_count).map(Indicator::new).collect();
        display.build(&self.indicators);
        &self.indicators
    }

    pub fn paint(&mut self, current: usize) {
        let Some(display) = self.display.as_mut() else {
            return;
        };
        for indicator in &mut self.indicators {
            indicator.active = indicator.position == current;
        }
        display.paint(&self.indicators);
    }

    pub fn get(&self, position: usize) -> Option<&Indicator> {
        self.indicators.get(position)
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn detach(&mut self) {
        self.display = None;
    }
}

impl std::fmt::Debug for IndicatorSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorSync")
            .field("indicators", &self.indicators)
            .field("has_display", &self.display.is_some())
            .finish()
    }
}
