//! Blocking alert overlay, the terminal equivalent of `alert()`.
//! Shown for rejected resume files; the event loop swallows all input
//! until the alert is dismissed with Enter or Esc.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};

use crate::tui::theme::Theme;

pub struct Alert<'a> {
    pub message: &'a str,
    pub theme: Theme,
}

impl<'a> Alert<'a> {
    pub fn new(message: &'a str, theme: Theme) -> Self {
        Self { message, theme }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 7, area);
        frame.render_widget(Clear, overlay);

        let theme = self.theme;
        let block = Block::bordered()
            .title("Alert")
            .style(Style::default().bg(theme.panel))
            .border_style(Style::default().fg(theme.warning))
            .title_style(Style::default().fg(theme.warning).add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));

        let lines = vec![
            Line::from(Span::styled(self.message, Style::default().fg(theme.text))),
            Line::default(),
            Line::from(Span::styled("Enter to dismiss", Style::default().fg(theme.dim))),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(horizontal);
    centered
}
