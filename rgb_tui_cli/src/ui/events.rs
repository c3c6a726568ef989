//! Translation of crossterm events into picker input

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rgb_tui_core::input::{InputEvent, KeyInput, PointerButton, PointerEvent, PointerPhase};

/// What the run loop should do with a terminal event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Input(InputEvent),
    Redraw,
    Quit,
    Ignore,
}

pub fn translate(event: &Event) -> AppEvent {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        Event::FocusLost => AppEvent::Input(InputEvent::FocusLost),
        Event::Resize(_, _) => AppEvent::Redraw,
        _ => AppEvent::Ignore,
    }
}

fn translate_key(key: &KeyEvent) -> AppEvent {
    // Releases would double every step on terminals that report them.
    if key.kind == KeyEventKind::Release {
        return AppEvent::Ignore;
    }

    let input = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return AppEvent::Quit;
        }
        KeyCode::Char('q') | KeyCode::Esc => return AppEvent::Quit,
        KeyCode::Left | KeyCode::Char('h') => KeyInput::Left,
        KeyCode::Right | KeyCode::Char('l') => KeyInput::Right,
        KeyCode::Up | KeyCode::Char('k') => KeyInput::Up,
        KeyCode::Down | KeyCode::Char('j') => KeyInput::Down,
        KeyCode::Tab => KeyInput::Tab,
        KeyCode::BackTab => KeyInput::BackTab,
        _ => return AppEvent::Ignore,
    };
    AppEvent::Input(InputEvent::Key(input))
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
    }
}

fn translate_mouse(mouse: &MouseEvent) -> AppEvent {
    let (button, phase) = match mouse.kind {
        MouseEventKind::Down(button) => (pointer_button(button), PointerPhase::Pressed),
        MouseEventKind::Up(button) => (pointer_button(button), PointerPhase::Released),
        MouseEventKind::Drag(button) => (pointer_button(button), PointerPhase::Moved),
        MouseEventKind::Moved => (PointerButton::None, PointerPhase::Moved),
        _ => return AppEvent::Ignore,
    };

    AppEvent::Input(InputEvent::Pointer(PointerEvent {
        x: i32::from(mouse.column),
        y: i32::from(mouse.row),
        button,
        phase,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate(&key(KeyCode::Char('q'))), AppEvent::Quit);
        assert_eq!(translate(&key(KeyCode::Esc)), AppEvent::Quit);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(&ctrl_c), AppEvent::Quit);
        assert_eq!(translate(&key(KeyCode::Char('c'))), AppEvent::Ignore);
    }

    #[test]
    fn test_arrow_and_vim_keys() {
        assert_eq!(
            translate(&key(KeyCode::Left)),
            AppEvent::Input(InputEvent::Key(KeyInput::Left))
        );
        assert_eq!(
            translate(&key(KeyCode::Char('j'))),
            AppEvent::Input(InputEvent::Key(KeyInput::Down))
        );
        assert_eq!(
            translate(&key(KeyCode::BackTab)),
            AppEvent::Input(InputEvent::Key(KeyInput::BackTab))
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(&release), AppEvent::Ignore);
    }

    #[test]
    fn test_mouse_phases() {
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            AppEvent::Input(InputEvent::Pointer(PointerEvent::press(4, 7)))
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Drag(MouseButton::Left), 5, 7)),
            AppEvent::Input(InputEvent::Pointer(PointerEvent::drag(5, 7)))
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Up(MouseButton::Left), 5, 8)),
            AppEvent::Input(InputEvent::Pointer(PointerEvent::release(5, 8)))
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::ScrollUp, 0, 0)),
            AppEvent::Ignore
        );
    }

    #[test]
    fn test_focus_and_resize() {
        assert_eq!(translate(&Event::FocusLost), AppEvent::Input(InputEvent::FocusLost));
        assert_eq!(translate(&Event::FocusGained), AppEvent::Ignore);
        assert_eq!(translate(&Event::Resize(80, 24)), AppEvent::Redraw);
    }
}
