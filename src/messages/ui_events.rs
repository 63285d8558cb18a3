//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lifecycle requests forwarded to the app actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Deactivate the current panel and activate a fresh one
    Reload,
    /// Unmount when mounted, mount otherwise
    ToggleMount,
    Quit,
}

/// Input handled by the UI loop itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    App(UiEvent),
    ScrollUp,
    ScrollDown,
}

/// Map a key press to an action
pub fn key_to_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::App(UiEvent::Quit));
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::App(UiEvent::Quit)),
        KeyCode::Char('r') => Some(KeyAction::App(UiEvent::Reload)),
        KeyCode::Char('m') => Some(KeyAction::App(UiEvent::ToggleMount)),
        KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_lifecycle_keys() {
        assert_eq!(key_to_action(press(KeyCode::Char('r'))), Some(KeyAction::App(UiEvent::Reload)));
        assert_eq!(key_to_action(press(KeyCode::Char('m'))), Some(KeyAction::App(UiEvent::ToggleMount)));
        assert_eq!(key_to_action(press(KeyCode::Esc)), Some(KeyAction::App(UiEvent::Quit)));
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::App(UiEvent::Quit))
        );
    }

    #[test]
    fn test_scroll_and_unmapped_keys() {
        assert_eq!(key_to_action(press(KeyCode::Char('j'))), Some(KeyAction::ScrollDown));
        assert_eq!(key_to_action(press(KeyCode::Up)), Some(KeyAction::ScrollUp));
        assert_eq!(key_to_action(press(KeyCode::Char('x'))), None);
    }
}
