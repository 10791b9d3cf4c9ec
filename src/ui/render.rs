use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::{AutoplayBadge, Header};
use crate::ui::layout::{controls_layout, layout_regions};
use crate::ui::track::Track;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let carousel = app.carousel();

    let header_widget = Header::new(
        app.title(),
        carousel.index(),
        carousel.len(),
        AutoplayBadge::from_state(carousel.autoplay_state()),
    );
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    frame.render_widget(
        Track::new(
            carousel.slides().as_slice(),
            app.surface().offset_columns(),
            app.track_gap(),
        ),
        body,
    );

    let indicators = app.indicators();
    let controls = controls_layout(footer, indicators.len());
    frame.render_widget(Footer::new(&indicators, &controls), footer);
}
