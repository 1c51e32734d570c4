//! Static informational panes: contact details and the "about" page.
//! Pure rendering — no state, no side effects. Copy comes from the
//! original advising site.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct ContactPage {
    pub theme: Theme,
}

impl Component for ContactPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let heading = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
        let label = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
        let body = Style::default().fg(theme.text);

        let lines = vec![
            Line::from(Span::styled("Contact Us", heading)),
            Line::default(),
            Line::from(vec![
                Span::styled("Email: ", label),
                Span::styled("advisor@utdallas.edu", body),
            ]),
            Line::from(vec![
                Span::styled("Phone: ", label),
                Span::styled("(972) 883-2111", body),
            ]),
            Line::from(vec![
                Span::styled("Office Hours: ", label),
                Span::styled("Monday-Friday, 9:00 AM - 5:00 PM", body),
            ]),
            Line::from(vec![
                Span::styled("Location: ", label),
                Span::styled("Student Services Building, Room 1.200", body),
            ]),
            Line::default(),
            Line::from(Span::styled("Get Help", heading)),
            Line::default(),
            Line::from(Span::styled("• Schedule an appointment through MyUTD", body)),
            Line::from(Span::styled("• Visit our walk-in hours", body)),
            Line::from(Span::styled("• Email us for quick questions", body)),
            Line::from(Span::styled("• Call for urgent matters", body)),
        ];

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(page_block(theme));
        frame.render_widget(paragraph, area);
    }
}

pub struct AboutPage {
    pub theme: Theme,
}

impl Component for AboutPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let heading = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
        let body = Style::default().fg(theme.text);
        let badge = Style::default().fg(theme.accent);

        let lines = vec![
            Line::from(Span::styled("Built on AWS Bedrock", heading)),
            Line::default(),
            Line::from(Span::styled(
                "Eida is powered by advanced AI technology through AWS Bedrock, providing:",
                body,
            )),
            Line::default(),
            Line::from(Span::styled(
                "• Natural language processing for better understanding",
                body,
            )),
            Line::from(Span::styled(
                "• Contextual responses tailored to UTD students",
                body,
            )),
            Line::from(Span::styled("• Secure and reliable AI infrastructure", body)),
            Line::from(Span::styled("• Continuous learning and improvement", body)),
            Line::default(),
            Line::from(vec![
                Span::styled("[AWS Bedrock] ", badge),
                Span::styled("[Claude AI] ", badge),
                Span::styled("[Secure] ", badge),
                Span::styled("[Reliable]", badge),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(page_block(theme));
        frame.render_widget(paragraph, area);
    }
}

fn page_block(theme: Theme) -> Block<'static> {
    Block::bordered()
        .border_style(Style::default().fg(theme.dim))
        .padding(Padding::uniform(1))
}
