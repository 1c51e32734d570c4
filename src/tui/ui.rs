//! Top-level frame layout: sidebar on the left, the active pane on the
//! right, overlays on top. Pane selection is a pure render switch on
//! `app.current_page`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::core::state::{App, Page};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{AboutPage, Alert, ContactPage, MessageList, Sidebar, UploadPrompt};
use crate::tui::theme::Theme;

const SIDEBAR_WIDTH: u16 = 24;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let theme = Theme::for_mode(app.dark_mode);

    // Paint the whole frame with the palette background first.
    frame.render_widget(
        Block::new().style(Style::default().bg(theme.background)),
        frame.area(),
    );

    let [sidebar_area, main_area] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .areas(frame.area());

    let mut sidebar = Sidebar {
        current_page: app.current_page,
        dark_mode: app.dark_mode,
        provider_name: app.provider.name(),
        status_message: &app.status_message,
        theme,
    };
    sidebar.render(frame, sidebar_area);

    match app.current_page {
        Page::Chat => {
            let input_height = tui.input_box.calculate_height(main_area.width);
            let [transcript_area, input_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(input_height)])
                    .areas(main_area);

            let mut message_list = MessageList::new(
                &mut tui.message_list,
                &app.transcript,
                app.is_loading,
                spinner_frame,
                theme,
            );
            message_list.render(frame, transcript_area);

            tui.input_box.render(frame, input_area);
        }
        Page::Contact => ContactPage { theme }.render(frame, main_area),
        Page::About => AboutPage { theme }.render(frame, main_area),
    }

    // Overlays render last; the alert wins over the upload prompt.
    if let Some(ref prompt) = tui.upload_prompt {
        UploadPrompt::new(prompt, theme).render(frame, frame.area());
    }
    if let Some(ref message) = tui.alert {
        Alert::new(message, theme).render(frame, frame.area());
    }
}
