//! # Application State
//!
//! Core business state for Eida. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn ResponseProvider>  // reply strategy
//! ├── transcript: Transcript        // append-only chat history
//! ├── is_loading: bool              // waiting for a reply
//! ├── current_page: Page            // which pane is shown
//! ├── dark_mode: bool               // palette toggle
//! ├── upload: UploadState           // resume attach simulation
//! └── status_message: String        // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::advisor::ResponseProvider;
use crate::core::config::ResolvedConfig;
use crate::core::transcript::Transcript;
use crate::core::upload::ResumeFile;
use std::sync::Arc;

/// The three static panes reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Chat,
    Contact,
    About,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Chat => "Chat",
            Page::Contact => "Contact",
            Page::About => "About Eida",
        }
    }

    /// Next page in sidebar order, wrapping.
    pub fn next(&self) -> Page {
        match self {
            Page::Chat => Page::Contact,
            Page::Contact => Page::About,
            Page::About => Page::Chat,
        }
    }
}

/// Resume attach simulation state.
///
/// `is_uploading` is true between acceptance and the acknowledgment
/// message; `file` lingers a little longer so the composer can show the
/// attached-file indicator before the slot is cleared.
#[derive(Debug, Default)]
pub struct UploadState {
    pub file: Option<ResumeFile>,
    pub is_uploading: bool,
}

pub struct App {
    pub provider: Arc<dyn ResponseProvider>,
    pub transcript: Transcript,
    pub is_loading: bool,
    pub current_page: Page,
    pub dark_mode: bool,
    pub upload: UploadState,
    pub status_message: String,
}

impl App {
    pub fn new(provider: Arc<dyn ResponseProvider>) -> Self {
        Self {
            provider,
            transcript: Transcript::new(),
            is_loading: false,
            current_page: Page::Chat,
            dark_mode: false,
            upload: UploadState::default(),
            status_message: String::from("Welcome to Eida!"),
        }
    }

    pub fn from_config(provider: Arc<dyn ResponseProvider>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(provider);
        app.dark_mode = config.dark_mode;
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Eida!");
        assert!(!app.is_loading);
        assert!(!app.dark_mode);
        assert_eq!(app.current_page, Page::Chat);
        assert!(app.upload.file.is_none());
        assert_eq!(app.transcript.len(), 1); // greeting
    }

    #[test]
    fn page_cycle_wraps() {
        assert_eq!(Page::Chat.next(), Page::Contact);
        assert_eq!(Page::Contact.next(), Page::About);
        assert_eq!(Page::About.next(), Page::Chat);
    }
}
