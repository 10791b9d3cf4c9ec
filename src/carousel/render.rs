//! Position Renderer.
//!
//! Turns the current index into an [`Offset`] and commits it to the
//! [`Surface`] collaborator. Two offset models exist:
//!
//! - proportional: `-index * 100%` of one slide, no measurement needed
//! - measured: `-index * (viewport_width + gap)`, measured on every render

use serde::{Deserialize, Serialize};

/// How an index is translated into an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetModel {
    /// Slides sized relative to the surface, laid out edge to edge.
    Proportional,
    /// Slides as wide as the live viewport, separated by a live gap.
    #[default]
    Measured,
}

/// Track translation written to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Percentage of one slide's width.
    Percent(f64),
    /// Absolute surface units.
    Pixels(f64),
}

impl Offset {
    /// Resolve to surface units given the width of one slide.
    pub fn resolve(&self, slide_width: f64) -> f64 {
        match self {
            Self::Percent(percent) => percent / 100.0 * slide_width,
            Self::Pixels(pixels) => *pixels,
        }
    }
}

/// Live dimensions of the viewing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    pub viewport_width: f64,
    pub gap: f64,
}

impl Measurement {
    pub fn new(viewport_width: f64, gap: f64) -> Self {
        Self {
            viewport_width,
            gap,
        }
    }
}

/// Display collaborator that can be measured and translated.
pub trait Surface {
    /// Current viewport width and inter-slide gap. Called on every render.
    fn measure(&self) -> Measurement;

    fn apply_offset(&mut self, offset: Offset);
}

/// Offset for `index` under the measured model.
///
/// A zero, negative, or non-finite width (hidden surface) yields 0 rather
/// than NaN. A bad gap counts as no gap.
pub fn measured_offset(index: usize, measurement: Measurement) -> f64 {
    let width = measurement.viewport_width;
    if !width.is_finite() || width <= 0.0 {
        return 0.0;
    }
    let gap = if measurement.gap.is_finite() && measurement.gap > 0.0 {
        measurement.gap
    } else {
        0.0
    };
    -(index as f64) * (width + gap)
}

/// Offset for `index` under the proportional model.
pub fn proportional_offset(index: usize) -> f64 {
    -(index as f64) * 100.0
}

fn offset_for_model(model: OffsetModel, index: usize, measurement: Measurement) -> Offset {
    match model {
        OffsetModel::Proportional => Offset::Percent(proportional_offset(index)),
        OffsetModel::Measured => Offset::Pixels(measured_offset(index, measurement)),
    }
}

pub struct PositionRenderer {
    model: OffsetModel,
    surface: Option<Box<dyn Surface>>,
    last: Option<Offset>,
}

impl PositionRenderer {
    pub fn new(model: OffsetModel, surface: Option<Box<dyn Surface>>) -> Self {
        Self {
            model,
            surface,
            last: None,
        }
    }

    pub fn model(&self) -> OffsetModel {
        self.model
    }

    /// Last offset committed to the surface.
    pub fn last_offset(&self) -> Option<Offset> {
        self.last
    }

    /// Compute without committing. Pure given `measurement`.
    pub fn offset_for(&self, index: usize, measurement: Measurement) -> Offset {
        offset_for_model(self.model, index, measurement)
    }

    /// Measure the surface and commit the offset for `index`.
    pub fn render(&mut self, index: usize) -> Option<Offset> {
        let Some(surface) = self.surface.as_mut() else {
            tracing::debug!(index, "no surface attached, skipping render");
            return None;
        };

        let measurement = match self.model {
            OffsetModel::Proportional => Measurement::default(),
            OffsetModel::Measured => surface.measure(),
        };
        let offset = offset_for_model(self.model, index, measurement);
        surface.apply_offset(offset);
        self.last = Some(offset);
        tracing::trace!(index, ?offset, ?measurement, "offset committed");
        Some(offset)
    }

    pub fn detach(&mut self) {
        self.surface = None;
    }
}

impl std::fmt::Debug for PositionRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionRenderer")
            .field("model", &self.model)
            .field("has_surface", &self.surface.is_some())
            .field("last", &self.last)
            .finish()
    }
}
