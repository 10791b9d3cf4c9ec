use ratatui::layout::{Position, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Hit boxes for the footer controls: previous and next arrows at the
/// edges, one cell per indicator dot centred between them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlsLayout {
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub dots: Vec<Rect>,
}

impl ControlsLayout {
    pub fn dot_at(&self, position: Position) -> Option<usize> {
        self.dots.iter().position(|dot| dot.contains(position))
    }
}

/// Narrowest footer that still fits both arrows and one dot.
const MIN_CONTROLS_WIDTH: u16 = 9;

pub fn controls_layout(footer: Rect, indicator_count: usize) -> ControlsLayout {
    if footer.height == 0 || footer.width < MIN_CONTROLS_WIDTH {
        return ControlsLayout::default();
    }

    // Inside the border when there is one.
    let row = if footer.height >= 3 { footer.y + 1 } else { footer.y };
    let prev = Rect::new(footer.x + 2, row, 1, 1);
    let next = Rect::new(footer.x + footer.width - 3, row, 1, 1);

    // Dots sit between the arrows with a blank column between neighbours.
    let lane = footer.width.saturating_sub(8);
    let fits = usize::from(lane.saturating_add(1) / 2);
    let shown = indicator_count.min(fits);
    let span = u16::try_from(shown.saturating_mul(2).saturating_sub(1)).unwrap_or(lane);
    let start = footer.x + (footer.width - span) / 2;
    let dots = (0..shown)
        .filter_map(|i| u16::try_from(i).ok())
        .map(|i| Rect::new(start + i * 2, row, 1, 1))
        .collect();

    ControlsLayout {
        prev: Some(prev),
        next: Some(next),
        dots,
    }
}
