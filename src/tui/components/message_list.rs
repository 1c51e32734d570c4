//! # MessageList Component
//!
//! Scrollable transcript view for the chat pane.
//!
//! ## Responsibilities
//!
//! - Lay the transcript out on a scroll canvas, caching per-message heights
//! - Stick to the bottom while new messages arrive, until the user scrolls up
//! - Show the animated typing indicator while a reply is pending
//!
//! The component is recreated each frame with fresh props; persistent
//! scroll state lives in [`MessageListState`], which also implements
//! `EventHandler` for the scroll keys.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::transcript::Transcript;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageBubble;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Height reserved under the transcript for the typing indicator.
const INDICATOR_HEIGHT: u16 = 1;

/// Animation frames for the "Eida is typing" dots.
const DOT_FRAMES: [&str; 4] = ["●∙∙", "∙●∙", "∙∙●", "∙●∙"];

/// Layout and scroll state for the message list.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Cached per-message heights for the last known width
    heights: Vec<u16>,
    cached_count: usize,
    cached_width: u16,
    /// Last known viewport height (for scroll clamping between frames)
    viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true, // Start attached to bottom
            heights: Vec::new(),
            cached_count: 0,
            cached_width: 0,
            viewport_height: 0,
        }
    }

    fn content_height(&self) -> u16 {
        self.heights.iter().sum()
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        let max_y = self
            .content_height()
            .saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Re-engage auto-scroll if a scroll-down reached the bottom.
    fn repin_if_at_bottom(&mut self) {
        let max_y = self
            .content_height()
            .saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Recompute the height cache. Appends are cheap: existing entries are
    /// reused when the width is unchanged and the transcript only grew.
    fn update_layout(&mut self, transcript: &Transcript, content_width: u16) {
        if self.cached_width != content_width || transcript.len() < self.cached_count {
            self.heights.clear();
        }
        for message in transcript.messages.iter().skip(self.heights.len()) {
            self.heights
                .push(MessageBubble::calculate_height(message, content_width));
        }
        self.cached_count = transcript.len();
        self.cached_width = content_width;
    }
}

impl EventHandler for MessageListState {
    type Event = (); // scroll is handled internally, nothing bubbles up

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollToBottom => {
                self.stick_to_bottom = true;
                self.scroll_state.scroll_to_bottom();
            }
            _ => {}
        }
        None
    }
}

/// Scrollable transcript view. Created fresh each frame with references to
/// state and data.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub transcript: &'a Transcript,
    pub is_loading: bool,
    pub spinner_frame: usize,
    pub theme: Theme,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        transcript: &'a Transcript,
        is_loading: bool,
        spinner_frame: usize,
        theme: Theme,
    ) -> Self {
        Self {
            state,
            transcript,
            is_loading,
            spinner_frame,
            theme,
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar

        self.state.update_layout(self.transcript, content_width);
        let total_height = self.state.content_height();

        // Reserve a row for the typing indicator while a reply is pending,
        // so sticking to the bottom keeps it in view.
        let show_indicator = self.is_loading;
        let canvas_height = if show_indicator {
            total_height + INDICATOR_HEIGHT
        } else {
            total_height
        };

        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (message, &height) in self
            .transcript
            .messages
            .iter()
            .zip(self.state.heights.iter())
        {
            let bubble_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(MessageBubble::new(message, self.theme), bubble_rect);
            y_offset += height;
        }

        if show_indicator {
            let dots = DOT_FRAMES[self.spinner_frame % DOT_FRAMES.len()];
            let indicator = Paragraph::new(Line::from(Span::styled(
                format!(" {dots}"),
                Style::default().fg(self.theme.accent),
            )));
            let indicator_rect = Rect::new(0, y_offset, content_width, INDICATOR_HEIGHT);
            scroll_view.render_widget(indicator, indicator_rect);
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::Transcript;

    #[test]
    fn layout_cache_grows_with_transcript() {
        let mut state = MessageListState::new();
        let mut transcript = Transcript::new();
        state.update_layout(&transcript, 60);
        assert_eq!(state.heights.len(), 1);

        transcript.push_user("hello".into());
        transcript.push_bot("hi".into());
        state.update_layout(&transcript, 60);
        assert_eq!(state.heights.len(), 3);
    }

    #[test]
    fn layout_cache_invalidated_on_width_change() {
        let mut state = MessageListState::new();
        let mut transcript = Transcript::new();
        transcript.push_user("a message that will wrap differently".into());
        state.update_layout(&transcript, 60);
        let wide = state.heights.clone();

        state.update_layout(&transcript, 20);
        assert_eq!(state.heights.len(), wide.len());
        assert!(state.heights[1] >= wide[1]);
    }

    #[test]
    fn scroll_up_releases_stick_to_bottom() {
        let mut state = MessageListState::new();
        assert!(state.stick_to_bottom);
        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);
        state.handle_event(&TuiEvent::ScrollToBottom);
        assert!(state.stick_to_bottom);
    }
}
