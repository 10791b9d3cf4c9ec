use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::carousel::OffsetModel;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default = "default_slides")]
    pub slides: Vec<SlideConfig>,
}

/// Engine settings, fixed for the lifetime of one carousel.
///
/// Navigation always wraps; there is no option for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Autoplay interval in milliseconds. 0 disables autoplay (default: 5000).
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,
    /// Minimum drag distance that counts as a swipe (default: 40).
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,
    /// Pause autoplay while the pointer is over the surface (default: true).
    #[serde(default = "default_pause_on_hover")]
    pub pause_on_hover: bool,
    /// Offset model (default: measured).
    #[serde(default)]
    pub offset_model: OffsetModel,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Title shown in the header.
    #[serde(default = "default_title")]
    pub title: String,
    /// Columns between neighbouring slides on the track (default: 2).
    #[serde(default = "default_gap_columns")]
    pub gap_columns: u16,
    /// Frame interval in milliseconds (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// One slide as described in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideConfig {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl SlideConfig {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl RenderConfig {
    /// Autoplay interval, or `None` when disabled.
    pub fn autoplay_interval(&self) -> Option<Duration> {
        (self.autoplay_interval_ms > 0).then(|| Duration::from_millis(self.autoplay_interval_ms))
    }
}

impl DisplayConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

fn default_autoplay_interval_ms() -> u64 {
    5000
}

fn default_swipe_threshold_px() -> f64 {
    40.0
}

fn default_pause_on_hover() -> bool {
    true
}

fn default_title() -> String {
    "slidewheel".to_string()
}

fn default_gap_columns() -> u16 {
    2
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_slides() -> Vec<SlideConfig> {
    vec![
        SlideConfig::new(
            "Welcome",
            "Use the arrow keys, click the dots below, or drag with the mouse.",
        ),
        SlideConfig::new(
            "Autoplay",
            "Slides advance on a timer. Hovering over this area pauses it; space toggles it.",
        ),
        SlideConfig::new(
            "Configure",
            "Add [[slides]] entries to config.toml to show your own content.",
        ),
    ]
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            pause_on_hover: default_pause_on_hover(),
            offset_model: OffsetModel::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            gap_columns: default_gap_columns(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            display: DisplayConfig::default(),
            slides: default_slides(),
        }
    }
}
