use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::transcript::ChatMessage;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// The timestamp line under the content.
const TIMESTAMP_LINES: u16 = 1;

/// A stateless component that renders one transcript entry as a bubble.
///
/// `MessageBubble` is a transient component: it's created fresh each frame
/// with the data it needs to render. User and bot messages get distinct
/// border colors and titles from the active [`Theme`].
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts rendered height
/// using `textwrap` with options that match Ratatui's `Paragraph` wrapping
/// behavior. This lets the parent `MessageList` lay out the scroll canvas
/// without rendering each message first.
#[derive(Clone, Copy)]
pub struct MessageBubble<'a> {
    pub message: &'a ChatMessage,
    pub theme: Theme,
}

impl<'a> MessageBubble<'a> {
    pub fn new(message: &'a ChatMessage, theme: Theme) -> Self {
        Self { message, theme }
    }

    /// Calculate the height required for this message given a width.
    ///
    /// The wrapping options must match the `Ratatui` default for `Paragraph`
    /// to ensure 1:1 mapping between calculated and actual height.
    pub fn calculate_height(message: &ChatMessage, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            return 1;
        }

        let content = message.content.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD + TIMESTAMP_LINES;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + TIMESTAMP_LINES + VERTICAL_OVERHEAD
    }
}

// Implement Widget for easy usage in ScrollView
impl<'a> Widget for MessageBubble<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let (title, border_color, alignment) = if self.message.is_user {
            ("You", self.theme.user, Alignment::Right)
        } else {
            ("Eida", self.theme.bot, Alignment::Left)
        };

        let style = Style::default().fg(self.theme.text);
        let border_style = Style::default().fg(border_color).add_modifier(Modifier::DIM);

        let block = Block::bordered()
            .title(title)
            .title_alignment(alignment)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(Style::default().fg(border_color))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        if inner_area.height == 0 {
            return;
        }

        // Content above, timestamp pinned to the last inner line.
        let content_area = Rect {
            height: inner_area.height.saturating_sub(TIMESTAMP_LINES),
            ..inner_area
        };
        let paragraph = Paragraph::new(self.message.content.trim())
            .style(style)
            .wrap(Wrap { trim: true });
        paragraph.render(content_area, buf);

        if inner_area.height > TIMESTAMP_LINES {
            let timestamp_area = Rect {
                y: inner_area.y + inner_area.height - TIMESTAMP_LINES,
                height: TIMESTAMP_LINES,
                ..inner_area
            };
            let stamp = self.message.timestamp.format("%H:%M").to_string();
            Paragraph::new(Line::from(stamp))
                .style(Style::default().fg(self.theme.dim))
                .alignment(Alignment::Right)
                .render(timestamp_area, buf);
        }
    }
}

/// `MessageBubble` is stateless, so the `&mut self` required by the trait
/// is a no-op; rendering is delegated to the [`Widget`] implementation.
impl<'a> Component for MessageBubble<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn make_message(content: &str, is_user: bool) -> ChatMessage {
        ChatMessage {
            id: "1".to_string(),
            content: content.to_string(),
            is_user,
            timestamp: Local::now(),
        }
    }

    #[test]
    fn calculate_height_single_line() {
        let message = make_message("Hello", false);
        // 1 content line + timestamp + borders
        assert_eq!(
            MessageBubble::calculate_height(&message, 80),
            1 + TIMESTAMP_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_empty_content() {
        let message = make_message("   ", true);
        assert_eq!(
            MessageBubble::calculate_height(&message, 80),
            VERTICAL_OVERHEAD + TIMESTAMP_LINES
        );
    }

    #[test]
    fn calculate_height_zero_width_returns_minimum() {
        let message = make_message("Hello world", true);
        assert_eq!(MessageBubble::calculate_height(&message, 0), 1);
    }

    #[test]
    fn calculate_height_wraps_long_content() {
        // 80 chars of content in a 44-wide bubble (40 usable) wraps to 2 lines
        let message = make_message(&"x".repeat(80), false);
        assert_eq!(
            MessageBubble::calculate_height(&message, 40 + HORIZONTAL_OVERHEAD),
            2 + TIMESTAMP_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_counts_explicit_newlines() {
        let message = make_message("line one\nline two\nline three", false);
        assert_eq!(
            MessageBubble::calculate_height(&message, 80),
            3 + TIMESTAMP_LINES + VERTICAL_OVERHEAD
        );
    }
}
