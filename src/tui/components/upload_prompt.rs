//! # Upload Prompt Component
//!
//! Centered overlay for attaching a resume. Opened with Ctrl+U, dismissed
//! with Esc. The terminal stand-in for the browser file picker: the user
//! types a path, and validation happens in `core::upload` on confirm.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `UploadPromptState` lives in `TuiState`
//! - `UploadPrompt` is created each frame with borrowed state

use std::path::PathBuf;

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Persistent state for the upload prompt overlay.
#[derive(Default)]
pub struct UploadPromptState {
    pub path_input: String,
}

impl UploadPromptState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key event, returning an UploadEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<UploadEvent> {
        match event {
            TuiEvent::Escape => Some(UploadEvent::Dismiss),
            TuiEvent::Submit => {
                let path = self.path_input.trim();
                if path.is_empty() {
                    None
                } else {
                    Some(UploadEvent::Confirm(PathBuf::from(path)))
                }
            }
            TuiEvent::InputChar(c) if *c != '\n' => {
                self.path_input.push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                self.path_input.push_str(text.trim());
                None
            }
            TuiEvent::Backspace => {
                self.path_input.pop();
                None
            }
            _ => None,
        }
    }
}

/// Events emitted by the upload prompt.
pub enum UploadEvent {
    Confirm(PathBuf),
    Dismiss,
}

/// Transient render wrapper for the upload prompt overlay.
pub struct UploadPrompt<'a> {
    state: &'a UploadPromptState,
    theme: Theme,
}

impl<'a> UploadPrompt<'a> {
    pub fn new(state: &'a UploadPromptState, theme: Theme) -> Self {
        Self { state, theme }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 7, area);
        frame.render_widget(Clear, overlay);

        let theme = self.theme;
        let block = Block::bordered()
            .title("Upload Resume")
            .style(Style::default().bg(theme.panel))
            .border_style(Style::default().fg(theme.accent))
            .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));

        let shown = if self.state.path_input.is_empty() {
            Span::styled("path to .pdf, .doc or .docx", Style::default().fg(theme.dim))
        } else {
            Span::styled(self.state.path_input.as_str(), Style::default().fg(theme.text))
        };

        let lines = vec![
            Line::from(shown),
            Line::default(),
            Line::from(Span::styled(
                "Enter attach · Esc cancel · max 5 MB",
                Style::default().fg(theme.dim),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}

/// Fixed-height popup centered in `area`, 60% wide.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(horizontal);
    centered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_builds_a_path_and_enter_confirms() {
        let mut state = UploadPromptState::new();
        for c in "/tmp/cv.pdf".chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
        match state.handle_event(&TuiEvent::Submit) {
            Some(UploadEvent::Confirm(path)) => {
                assert_eq!(path, PathBuf::from("/tmp/cv.pdf"))
            }
            _ => panic!("expected Confirm"),
        }
    }

    #[test]
    fn empty_path_does_not_confirm() {
        let mut state = UploadPromptState::new();
        assert!(state.handle_event(&TuiEvent::Submit).is_none());
    }

    #[test]
    fn escape_dismisses() {
        let mut state = UploadPromptState::new();
        assert!(matches!(
            state.handle_event(&TuiEvent::Escape),
            Some(UploadEvent::Dismiss)
        ));
    }
}
