//! # InputBox Component
//!
//! The compose box at the bottom of the chat pane.
//!
//! ## Responsibilities
//!
//! - Capture text input (chars, paste, backspace, cursor movement)
//! - Handle submission (Enter); Shift+Enter inserts a newline instead
//! - Auto-grow: height tracks content up to a fixed line cap, and resets
//!   when the draft is cleared on submit
//! - Block submission while disabled (a send is in flight) or while the
//!   draft is empty/whitespace-only
//!
//! ## State Management
//!
//! The draft buffer and cursor are internal state. The `disabled` flag is
//! a prop synced from the application state each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Border (2) + padding-free content margin consumed horizontally
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders consumed vertically
const VERTICAL_OVERHEAD: u16 = 2;
/// Auto-grow cap: content lines shown before the view pins to the cursor end.
const MAX_VISIBLE_LINES: u16 = 4;

const PLACEHOLDER: &str = "Ask a question";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the draft (Enter pressed with non-blank content).
    Submit(String),
}

/// Text input component with auto-grow sizing.
///
/// # Props
///
/// - `disabled`: true while a send is in flight (synced each frame)
/// - `theme`: active palette (synced each frame)
/// - `attached`: name of the attached resume, shown in the title while the
///   attachment slot is occupied
///
/// # State
///
/// - `buffer`: current compose draft
/// - `cursor`: byte offset of the cursor within `buffer`
pub struct InputBox {
    pub buffer: String,
    pub disabled: bool,
    pub theme: Theme,
    pub attached: Option<String>,
    cursor: usize,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            disabled: false,
            theme: Theme::light(),
            attached: None,
            cursor: 0,
        }
    }

    /// Required height for the current draft, clamped to the auto-grow cap.
    /// Recomputed every frame, so height tracks the draft as it changes.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let width = content_width.saturating_sub(HORIZONTAL_OVERHEAD);
        let content_lines = wrap_line_count(&self.buffer, width);
        content_lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = prev_char_boundary(&self.buffer, self.cursor);
        self.buffer.replace_range(prev..self.cursor, "");
        self.cursor = prev;
    }

    fn clear(&mut self) {
        // Also resets auto-grow: height is derived from the buffer.
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Visible text for the current width: the last `MAX_VISIBLE_LINES`
    /// wrapped lines, so the cursor end stays in view while typing.
    fn visible_text(&self, content_width: u16) -> String {
        let width = content_width.saturating_sub(HORIZONTAL_OVERHEAD);
        if width == 0 {
            return String::new();
        }
        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        if lines.len() <= MAX_VISIBLE_LINES as usize {
            return self.buffer.clone();
        }
        let start = lines.len() - MAX_VISIBLE_LINES as usize;
        lines[start..].join("\n")
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        // The compose control is disabled for the whole send cycle.
        if self.disabled {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                self.insert(&c.to_string());
                None
            }
            TuiEvent::Paste(text) => {
                self.insert(text);
                None
            }
            TuiEvent::Backspace => {
                self.backspace();
                None
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::Submit => {
                let draft = self.buffer.trim();
                if draft.is_empty() {
                    return None;
                }
                let submitted = draft.to_string();
                self.clear();
                Some(InputEvent::Submit(submitted))
            }
            _ => None,
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let border_style = if self.disabled {
            Style::default().fg(theme.dim).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(theme.accent)
        };

        let title = if self.disabled {
            "Sending...".to_string()
        } else if let Some(ref name) = self.attached {
            format!("Message · {name} ✓")
        } else {
            "Message".to_string()
        };
        let block = Block::bordered()
            .title(title)
            .border_style(border_style)
            .title_style(border_style);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.dim))
        } else {
            Paragraph::new(self.visible_text(area.width))
                .style(Style::default().fg(theme.text))
                .wrap(Wrap { trim: false })
        };

        frame.render_widget(paragraph.block(block), area);
    }
}

/// Build textwrap options configured for the input box inner width.
fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Count wrapped lines for the given text, accounting for trailing newlines
/// that textwrap may not represent as empty lines.
fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);

    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }

    count
}

/// Find the byte offset of the previous character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(input: &mut InputBox, text: &str) {
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn submit_emits_trimmed_draft_and_clears() {
        let mut input = InputBox::new();
        typed(&mut input, "  hello there  ");

        let event = input.handle_event(&TuiEvent::Submit);

        assert_eq!(event, Some(InputEvent::Submit("hello there".into())));
        assert!(input.buffer.is_empty());
        // Auto-grow resets with the buffer.
        assert_eq!(input.calculate_height(40), 1 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn blank_draft_does_not_submit() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);

        typed(&mut input, "   \n ");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        // The draft survives a rejected submit.
        assert_eq!(input.buffer, "   \n ");
    }

    #[test]
    fn disabled_input_ignores_everything() {
        let mut input = InputBox::new();
        typed(&mut input, "draft");
        input.disabled = true;

        assert_eq!(input.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "draft");
    }

    #[test]
    fn newline_char_inserts_a_line_break() {
        let mut input = InputBox::new();
        typed(&mut input, "line one");
        input.handle_event(&TuiEvent::InputChar('\n'));
        typed(&mut input, "line two");

        assert_eq!(input.buffer, "line one\nline two");
        // Two content lines + borders.
        assert_eq!(input.calculate_height(40), 2 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn height_grows_with_content_up_to_the_cap() {
        let mut input = InputBox::new();
        assert_eq!(input.calculate_height(40), 1 + VERTICAL_OVERHEAD);

        for _ in 0..10 {
            input.handle_event(&TuiEvent::InputChar('\n'));
            input.handle_event(&TuiEvent::InputChar('x'));
        }
        assert_eq!(
            input.calculate_height(40),
            MAX_VISIBLE_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn backspace_handles_multibyte_chars() {
        let mut input = InputBox::new();
        typed(&mut input, "résumé");
        input.handle_event(&TuiEvent::Backspace);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "résu");
    }

    #[test]
    fn cursor_moves_and_inserts_mid_buffer() {
        let mut input = InputBox::new();
        typed(&mut input, "ac");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "abc");
    }

    #[test]
    fn paste_preserves_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("a\nb".into()));
        assert_eq!(input.buffer, "a\nb");
    }
}
