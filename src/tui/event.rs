use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Up,
    Down,
    Select,
    Back,
    Quit,

    // TUI-local events (handled directly in TUI)
    Resize,
}

impl TuiEvent {
    /// The core action for this event, if it has one.
    pub fn action(self) -> Option<Action> {
        match self {
            TuiEvent::Up => Some(Action::Up),
            TuiEvent::Down => Some(Action::Down),
            TuiEvent::Select => Some(Action::Select),
            TuiEvent::Back => Some(Action::Back),
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::Resize => None,
        }
    }
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read()? {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(event)
}

/// Unmapped keys return `None` and are ignored by the loop.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release/repeat reports arrive on terminals with keyboard enhancement.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::Up),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::Down),
        (_, KeyCode::Enter) => Some(TuiEvent::Select),
        (_, KeyCode::Esc) => Some(TuiEvent::Back),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_and_vim_keys() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(TuiEvent::Up));
        assert_eq!(map_key(press(KeyCode::Char('k'))), Some(TuiEvent::Up));
        assert_eq!(map_key(press(KeyCode::Down)), Some(TuiEvent::Down));
        assert_eq!(map_key(press(KeyCode::Char('j'))), Some(TuiEvent::Down));
    }

    #[test]
    fn test_select_back_quit() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(TuiEvent::Select));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(TuiEvent::Back));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Quit)
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Char('c'))), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_resize_has_no_action() {
        assert_eq!(TuiEvent::Resize.action(), None);
        assert_eq!(TuiEvent::Select.action(), Some(Action::Select));
    }
}
