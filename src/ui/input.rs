use crate::carousel::CarouselEvent;
use crate::ui::app::App;
use crate::ui::surface::columns_to_px;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

/// What a key press means to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Quit,
    Carousel(CarouselEvent),
}

pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if is_ctrl_char(key, 'c') {
        return Some(KeyAction::Quit);
    }

    let event = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(KeyAction::Quit),
        KeyCode::Left | KeyCode::Char('h') => CarouselEvent::PrevPressed,
        KeyCode::Right | KeyCode::Char('l') => CarouselEvent::NextPressed,
        KeyCode::Home => CarouselEvent::First,
        KeyCode::End => CarouselEvent::Last,
        KeyCode::Char(' ') => CarouselEvent::ToggleAutoplay,
        KeyCode::Char(digit @ '1'..='9') => {
            let position = digit.to_digit(10)? as usize - 1;
            CarouselEvent::IndicatorPressed(position)
        }
        _ => return None,
    };
    Some(KeyAction::Carousel(event))
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key_action(key) {
        Some(KeyAction::Quit) => app.request_quit(),
        Some(KeyAction::Carousel(event)) => app.dispatch(event),
        None => {}
    }
}

/// Left press on a footer control navigates; a left press in the body
/// starts a swipe that the matching release completes. Motion drives hover.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let position = Position::new(mouse.column, mouse.row);
    let body = app.body();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let controls = app.controls_layout();
            if controls.prev.is_some_and(|prev| prev.contains(position)) {
                app.dispatch(CarouselEvent::PrevPressed);
            } else if controls.next.is_some_and(|next| next.contains(position)) {
                app.dispatch(CarouselEvent::NextPressed);
            } else if let Some(dot) = controls.dot_at(position) {
                app.dispatch(CarouselEvent::IndicatorPressed(dot));
            } else if body.contains(position) {
                app.dispatch(CarouselEvent::GestureStart {
                    x: columns_to_px(mouse.column),
                });
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.carousel().is_gesture_active() {
                app.dispatch(CarouselEvent::GestureEnd {
                    x: columns_to_px(mouse.column),
                });
            }
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.set_hovering(body.contains(position));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::ManualClock;
    use crate::config::Config;
    use std::sync::Arc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app() -> App {
        let mut app = App::new(&Config::default(), Arc::new(ManualClock::new()));
        app.on_resize(80, 24);
        app.on_frame();
        app
    }

    #[test]
    fn arrow_and_vim_keys_navigate() {
        assert_eq!(
            key_action(press(KeyCode::Right)),
            Some(KeyAction::Carousel(CarouselEvent::NextPressed))
        );
        assert_eq!(
            key_action(press(KeyCode::Char('h'))),
            Some(KeyAction::Carousel(CarouselEvent::PrevPressed))
        );
        assert_eq!(
            key_action(press(KeyCode::End)),
            Some(KeyAction::Carousel(CarouselEvent::Last))
        );
    }

    #[test]
    fn digits_jump_to_indicator() {
        assert_eq!(
            key_action(press(KeyCode::Char('3'))),
            Some(KeyAction::Carousel(CarouselEvent::IndicatorPressed(2)))
        );
        assert_eq!(key_action(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(key_action(press(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(
            key_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_action(key), None);
    }

    #[test]
    fn body_drag_left_advances() {
        let mut app = app();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 40, 10));
        assert!(app.carousel().is_gesture_active());
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 34, 10));
        assert_eq!(app.carousel().index(), 1);
    }

    #[test]
    fn short_drag_is_a_tap() {
        let mut app = app();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 40, 10));
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 44, 10));
        assert_eq!(app.carousel().index(), 0);
        assert!(!app.carousel().is_gesture_active());
    }

    #[test]
    fn footer_clicks_navigate() {
        let mut app = app();
        let controls = app.controls_layout();
        let dot = controls.dots[2];
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), dot.x, dot.y));
        assert_eq!(app.carousel().index(), 2);

        let next = controls.next.unwrap();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), next.x, next.y));
        assert_eq!(app.carousel().index(), 0);
        assert!(!app.carousel().is_gesture_active());
    }

    #[test]
    fn motion_tracks_hover() {
        let mut app = app();
        handle_mouse(&mut app, mouse(MouseEventKind::Moved, 10, 10));
        assert!(app.is_hovering());
        handle_mouse(&mut app, mouse(MouseEventKind::Moved, 10, 1));
        assert!(!app.is_hovering());
    }
}
