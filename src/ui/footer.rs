use crate::carousel::Indicator;
use crate::ui::layout::ControlsLayout;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, INDICATOR_IDLE};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

const PREV_SYMBOL: &str = "‹";
const NEXT_SYMBOL: &str = "›";
const DOT_ACTIVE: &str = "●";
const DOT_IDLE: &str = "○";

/// Bordered strip with the previous/next controls and one dot per slide.
pub struct Footer<'a> {
    indicators: &'a [Indicator],
    controls: &'a ControlsLayout,
}

impl<'a> Footer<'a> {
    pub fn new(indicators: &'a [Indicator], controls: &'a ControlsLayout) -> Self {
        Self {
            indicators,
            controls,
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .render(area, buf);

        let arrow_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        if let Some(prev) = self.controls.prev {
            buf.set_string(prev.x, prev.y, PREV_SYMBOL, arrow_style);
        }
        if let Some(next) = self.controls.next {
            buf.set_string(next.x, next.y, NEXT_SYMBOL, arrow_style);
        }

        for (dot, indicator) in self.controls.dots.iter().zip(self.indicators) {
            let (symbol, style) = if indicator.active {
                (DOT_ACTIVE, Style::default().fg(ACCENT))
            } else {
                (DOT_IDLE, Style::default().fg(INDICATOR_IDLE))
            };
            buf.set_string(dot.x, dot.y, symbol, style);
        }
    }
}
