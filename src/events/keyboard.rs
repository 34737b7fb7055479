//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::EditRange => handle_edit_range_mode(key),
        InputMode::Help | InputMode::About => handle_popup_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') | KeyCode::Enter => Action::Toggle,
        KeyCode::Char('p') => Action::Preview,

        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up | KeyCode::Right => {
            Action::IncrementRange
        }
        KeyCode::Char('-') | KeyCode::Down | KeyCode::Left => Action::DecrementRange,
        KeyCode::Char('e') | KeyCode::Tab => Action::EditRange,

        KeyCode::Char('i') => Action::ToggleInstantMode,
        KeyCode::Char('t') => Action::ToggleAlwaysOnTop,

        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Char('a') => Action::OpenAbout,
        _ => Action::None,
    }
}

fn handle_edit_range_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Tab => Action::CommitRange,
        KeyCode::Esc => Action::CancelRangeEdit,
        KeyCode::Backspace => Action::RangeInputBackspace,
        KeyCode::Up => Action::IncrementRange,
        KeyCode::Down => Action::DecrementRange,
        // Anything typed goes in; the commit normalizes it
        KeyCode::Char(c) => Action::RangeInputChar(c),
        _ => Action::None,
    }
}

fn handle_popup_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('a') => {
            Action::ClosePopup
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tokio::sync::mpsc;

    fn app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(&Config::default(), tx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = app();
        assert_eq!(handle_key_event(&app, press(KeyCode::Char(' '))), Action::Toggle);
        assert_eq!(handle_key_event(&app, press(KeyCode::Enter)), Action::Toggle);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('+'))), Action::IncrementRange);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('-'))), Action::DecrementRange);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('i'))), Action::ToggleInstantMode);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('z'))), Action::None);
    }

    #[test]
    fn test_edit_mode_types_characters() {
        let mut app = app();
        app.input_mode = InputMode::EditRange;
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('7'))), Action::RangeInputChar('7'));
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('q'))), Action::RangeInputChar('q'));
        assert_eq!(handle_key_event(&app, press(KeyCode::Enter)), Action::CommitRange);
        assert_eq!(handle_key_event(&app, press(KeyCode::Esc)), Action::CancelRangeEdit);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [InputMode::Normal, InputMode::EditRange, InputMode::Help, InputMode::About] {
            app.input_mode = mode;
            assert_eq!(handle_key_event(&app, ctrl_c), Action::Quit);
        }
    }

    #[test]
    fn test_popup_closes() {
        let mut app = app();
        app.input_mode = InputMode::Help;
        assert_eq!(handle_key_event(&app, press(KeyCode::Esc)), Action::ClosePopup);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char(' '))), Action::None);
    }
}
