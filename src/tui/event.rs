use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    // Core actions (passed to core::update)
    ForceQuit,
    Submit,
    CyclePage,
    ToggleTheme,
    /// Quick-start prompt index (F1..F4).
    QuickStart(usize),

    // TUI-local events (handled directly in TUI)
    Escape,
    OpenUploadPrompt,
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    CursorLeft,
    CursorRight,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToBottom, // End key - also re-enables stick-to-bottom
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap_or(false) {
        match event::read().ok()? {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                translate_key(key_event)
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Map one key event to a `TuiEvent`.
///
/// Only press events translate: with the keyboard enhancement flags pushed,
/// Kitty-protocol terminals also report Release and Repeat events for the
/// same key, and Release must not insert a second character.
fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::ToggleTheme),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => Some(TuiEvent::OpenUploadPrompt),
        // Shift+Enter inserts a newline (requires the Kitty keyboard
        // protocol, pushed by the terminal mode guard)
        (KeyModifiers::SHIFT, KeyCode::Enter) => Some(TuiEvent::InputChar('\n')),
        // Ctrl+J also inserts a newline (ASCII LF; works everywhere)
        (KeyModifiers::CONTROL, KeyCode::Char('j')) => Some(TuiEvent::InputChar('\n')),
        (_, KeyCode::F(n @ 1..=4)) => Some(TuiEvent::QuickStart((n - 1) as usize)),
        (_, KeyCode::Tab) => Some(TuiEvent::CyclePage),
        // Regular key handling
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        (_, KeyCode::End) => Some(TuiEvent::ScrollToBottom),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(kind: KeyEventKind, code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        let mut event = KeyEvent::new(code, modifiers);
        event.kind = kind;
        event
    }

    #[test]
    fn press_translates_to_input_char() {
        let event = translate_key(key(
            KeyEventKind::Press,
            KeyCode::Char('a'),
            KeyModifiers::NONE,
        ));
        assert!(matches!(event, Some(TuiEvent::InputChar('a'))));
    }

    #[test]
    fn release_and_repeat_are_dropped() {
        // Kitty-protocol terminals report these alongside Press; translating
        // them would double-insert every typed character.
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            assert!(translate_key(key(kind, KeyCode::Char('a'), KeyModifiers::NONE)).is_none());
            assert!(translate_key(key(kind, KeyCode::Enter, KeyModifiers::NONE)).is_none());
        }
    }

    #[test]
    fn shift_enter_inserts_a_newline() {
        let event = translate_key(key(
            KeyEventKind::Press,
            KeyCode::Enter,
            KeyModifiers::SHIFT,
        ));
        assert!(matches!(event, Some(TuiEvent::InputChar('\n'))));
    }

    #[test]
    fn plain_enter_submits() {
        let event = translate_key(key(
            KeyEventKind::Press,
            KeyCode::Enter,
            KeyModifiers::NONE,
        ));
        assert!(matches!(event, Some(TuiEvent::Submit)));
    }
}
