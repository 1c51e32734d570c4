//! # Sidebar Component
//!
//! Left-hand navigation rail: app title, pane switcher, quick-start
//! prompts, and the theme/status footer.
//!
//! The sidebar is stateless — it renders props and owns nothing. Quick
//! starts are bound to F1–F4 and submitted verbatim, exactly as if the
//! user had typed the prompt; the event loop handles the keys, so this
//! component only displays the bindings.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::state::Page;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Quick-start options: (button label, prompt submitted verbatim).
pub const QUICK_START_OPTIONS: [(&str, &str); 4] = [
    ("Resume Advice", "I need help with resume advice"),
    ("Job Search", "I need help with job search"),
    ("Course Planning", "I need help with course planning"),
    ("Interview Prep", "I need help with interview prep"),
];

const NAV_PAGES: [Page; 3] = [Page::Chat, Page::Contact, Page::About];

/// Stateless sidebar; all fields are props.
pub struct Sidebar<'a> {
    pub current_page: Page,
    pub dark_mode: bool,
    pub provider_name: &'a str,
    pub status_message: &'a str,
    pub theme: Theme,
}

impl<'a> Component for Sidebar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let block = Block::bordered()
            .border_style(Style::default().fg(theme.dim))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header_area, nav_area, quick_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(NAV_PAGES.len() as u16 + 2),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .areas(inner);

        // Header
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "EIDA",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "the UTD advisor",
                Style::default().fg(theme.dim),
            )),
        ]);
        frame.render_widget(header, header_area);

        // Navigation (Tab cycles)
        let mut nav_lines = vec![Line::from(Span::styled(
            "[Tab] pages",
            Style::default().fg(theme.dim),
        ))];
        for page in NAV_PAGES {
            let style = if page == self.current_page {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let marker = if page == self.current_page { "▸ " } else { "  " };
            nav_lines.push(Line::from(Span::styled(
                format!("{marker}{}", page.label()),
                style,
            )));
        }
        frame.render_widget(Paragraph::new(nav_lines), nav_area);

        // Quick starts
        let mut quick_lines = vec![Line::from(Span::styled(
            "Quick start",
            Style::default().fg(theme.dim),
        ))];
        for (i, (label, _)) in QUICK_START_OPTIONS.iter().enumerate() {
            quick_lines.push(Line::from(vec![
                Span::styled(format!("F{} ", i + 1), Style::default().fg(theme.accent)),
                Span::styled(*label, Style::default().fg(theme.text)),
            ]));
        }
        frame.render_widget(Paragraph::new(quick_lines), quick_area);

        // Footer: theme hint, provider/status, copyright
        let theme_hint = if self.dark_mode {
            "^T light mode"
        } else {
            "^T dark mode"
        };
        let status_line = if self.status_message.is_empty() {
            format!("[{}]", self.provider_name)
        } else {
            format!("[{}] {}", self.provider_name, self.status_message)
        };
        let footer = Paragraph::new(vec![
            Line::from(Span::styled(theme_hint, Style::default().fg(theme.dim))),
            Line::from(Span::styled("^U attach resume", Style::default().fg(theme.dim))),
            Line::from(Span::styled(status_line, Style::default().fg(theme.dim))),
            Line::from(Span::styled("© 2025 UTDallas", Style::default().fg(theme.dim))),
        ]);
        frame.render_widget(footer, footer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_start_prompts_match_button_labels() {
        // Prompts are the lowercased label behind "I need help with",
        // matching the original widget's quick-start wiring.
        for (label, prompt) in QUICK_START_OPTIONS {
            assert_eq!(prompt, format!("I need help with {}", label.to_lowercase()));
        }
    }
}
