use crate::carousel::AutoplayState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_PAUSED, STATUS_PLAYING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &str = "←/→: Slide │ Space: Autoplay │ Q: Quit";

/// Autoplay as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayBadge {
    Playing,
    Paused,
    Off,
}

impl AutoplayBadge {
    pub fn from_state(state: AutoplayState) -> Self {
        match state {
            AutoplayState::Running { .. } => Self::Playing,
            AutoplayState::Stopped => Self::Paused,
            AutoplayState::Disabled => Self::Off,
        }
    }

    fn span(self) -> Span<'static> {
        match self {
            Self::Playing => Span::styled("▶ autoplay", Style::default().fg(STATUS_PLAYING)),
            Self::Paused => Span::styled("⏸ paused", Style::default().fg(STATUS_PAUSED)),
            Self::Off => Span::styled(
                "autoplay off",
                Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM),
            ),
        }
    }
}

pub struct Header<'a> {
    title: &'a str,
    position: usize,
    total: usize,
    autoplay: AutoplayBadge,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, position: usize, total: usize, autoplay: AutoplayBadge) -> Self {
        Self {
            title,
            position,
            total,
            autoplay,
        }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let counter = if self.total == 0 {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.position + 1, self.total)
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.title, text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(counter, text_style),
            Span::styled("  │  ", separator_style),
            self.autoplay.span(),
            Span::styled("  │  ", separator_style),
            Span::styled(HINTS, text_style.add_modifier(Modifier::DIM)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
