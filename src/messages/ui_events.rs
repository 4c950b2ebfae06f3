//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Customer table
    SelectPrev,
    SelectNext,

    // Add-customer dialog
    OpenDialog,
    CloseDialog,
    Submit,
    NextField,
    PrevField,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, dialog_open: bool, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if dialog_open {
        handle_dialog_keys(key)
    } else {
        handle_list_keys(key)
    }
}

/// Handle keys while the customer table has focus
fn handle_list_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('a') => Some(UiEvent::OpenDialog),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        _ => None,
    }
}

/// Handle keys while the add-customer dialog is open
fn handle_dialog_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::CloseDialog),
        KeyCode::Enter => Some(UiEvent::Submit),
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
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
    fn test_list_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('a')), false, false), Some(UiEvent::OpenDialog));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), false, false), Some(UiEvent::Quit));
        assert_eq!(key_to_ui_event(press(KeyCode::Down), false, false), Some(UiEvent::SelectNext));
    }

    #[test]
    fn test_dialog_captures_letters() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('q')), true, false),
            Some(UiEvent::CharInput('q'))
        );
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), true, false), Some(UiEvent::CloseDialog));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), true, false), Some(UiEvent::Submit));
    }

    #[test]
    fn test_help_swallows_any_key() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('a')), false, true), Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, true, false), Some(UiEvent::Quit));
    }

    #[test]
    fn test_modified_chars_not_inserted() {
        let alt = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        let ctrl = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(alt, true, false), None);
        assert_eq!(key_to_ui_event(ctrl, true, false), None);

        // Shift only changes the character
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_to_ui_event(shifted, true, false), Some(UiEvent::CharInput('A')));
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, false, false), None);
    }
}
