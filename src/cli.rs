//! Command-line flags. Flags override values from the config file.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::carousel::OffsetModel;
use crate::config::{Config, SlideConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    Proportional,
    Measured,
}

impl From<ModelArg> for OffsetModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Proportional => OffsetModel::Proportional,
            ModelArg::Measured => OffsetModel::Measured,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Terminal carousel", long_about = None)]
pub struct Cli {
    /// Slides to show, one per argument (text before the first ':' is the title)
    pub slides: Vec<String>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Autoplay interval in milliseconds (0 disables autoplay)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Offset model used to position the track
    #[arg(short, long, value_enum)]
    pub model: Option<ModelArg>,

    /// Minimum drag distance, in pixels, that counts as a swipe
    #[arg(long)]
    pub swipe_threshold: Option<f64>,

    /// Columns between neighbouring slides
    #[arg(long)]
    pub gap: Option<u16>,

    /// Keep autoplay running while the mouse is over the slides
    #[arg(long)]
    pub no_hover_pause: bool,

    /// Write logs here instead of the default log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Overlay flags onto `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(interval) = self.interval {
            config.render.autoplay_interval_ms = interval;
        }
        if let Some(model) = self.model {
            config.render.offset_model = model.into();
        }
        if let Some(threshold) = self.swipe_threshold {
            config.render.swipe_threshold_px = threshold;
        }
        if let Some(gap) = self.gap {
            config.display.gap_columns = gap;
        }
        if self.no_hover_pause {
            config.render.pause_on_hover = false;
        }
        if !self.slides.is_empty() {
            config.slides = self.slides.iter().map(|s| parse_slide(s)).collect();
        }
    }
}

/// `"Title: body"` splits on the first colon; anything else is a title.
pub fn parse_slide(raw: &str) -> SlideConfig {
    match raw.split_once(':') {
        Some((title, body)) => SlideConfig::new(title.trim(), body.trim()),
        None => SlideConfig::new(raw.trim(), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_slide_splits_title_and_body() {
        assert_eq!(
            parse_slide("Intro: hello there"),
            SlideConfig::new("Intro", "hello there")
        );
        assert_eq!(parse_slide("Just a title"), SlideConfig::new("Just a title", ""));
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "slidewheel",
            "--interval",
            "0",
            "--model",
            "proportional",
            "--gap",
            "4",
            "--no-hover-pause",
            "One",
            "Two: second",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.render.autoplay_interval(), None);
        assert_eq!(config.render.offset_model, OffsetModel::Proportional);
        assert_eq!(config.display.gap_columns, 4);
        assert!(!config.render.pause_on_hover);
        assert_eq!(config.slides.len(), 2);
        assert_eq!(config.slides[1].body, "second");
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let cli = Cli::parse_from(["slidewheel"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }
}
