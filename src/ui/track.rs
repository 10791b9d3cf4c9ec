use crate::config::SlideConfig;
use crate::ui::theme::{ACCENT, SLIDE_BORDER, SLIDE_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Horizontal strip of slides, each as wide as the viewport and separated by
/// `gap` columns, shifted left by the committed offset.
pub struct Track<'a> {
    slides: &'a [SlideConfig],
    offset: i32,
    gap: u16,
}

impl<'a> Track<'a> {
    pub fn new(slides: &'a [SlideConfig], offset: i32, gap: u16) -> Self {
        Self { slides, offset, gap }
    }
}

impl Widget for Track<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let width = i32::from(area.width);
        let pitch = width + i32::from(self.gap);
        let local = Rect::new(0, 0, area.width, area.height);

        for (position, slide) in self.slides.iter().enumerate() {
            let Ok(position) = i32::try_from(position) else {
                break;
            };
            let left = position.saturating_mul(pitch).saturating_add(self.offset);
            if left >= width || left.saturating_add(width) <= 0 {
                continue;
            }

            // Slides render full-size off-screen, then the visible columns are copied.
            let mut scratch = Buffer::empty(local);
            slide_card(slide).render(local, &mut scratch);

            for col in 0..area.width {
                let Ok(x) = u16::try_from(left + i32::from(col)) else {
                    continue;
                };
                if x >= area.width {
                    continue;
                }
                for row in 0..area.height {
                    if let (Some(src), Some(dst)) =
                        (scratch.cell((col, row)), buf.cell_mut((area.x + x, area.y + row)))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}

fn slide_card(slide: &SlideConfig) -> Paragraph<'_> {
    let title = Span::styled(
        format!(" {} ", slide.title),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    );
    let body: Vec<Line<'_>> = std::iter::once(Line::from(""))
        .chain(slide.body.lines().map(Line::from))
        .collect();

    Paragraph::new(body)
        .style(Style::default().fg(SLIDE_TEXT))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(SLIDE_BORDER))
                .title(title),
        )
}
