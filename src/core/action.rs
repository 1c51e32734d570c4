//! # Actions
//!
//! Everything that can happen in Eida becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The advisor replies? That's `Action::ReplyReady(text)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No side effects here — I/O happens in the TUI event
//! loop, driven by the returned [`Effect`].
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Per message cycle the state machine is:
//!
//! ```text
//! Idle → Sending (is_loading=true) → {Success | Failure} → Idle
//! ```
//!
//! There is no retry, no cancellation, and no queueing: while a send is in
//! flight, further submits are ignored.

use log::{debug, warn};

use crate::core::state::{App, Page};
use crate::core::upload::ResumeFile;

/// Bot message appended when the remote advisor cannot be reached.
pub const CONNECTION_APOLOGY: &str =
    "There was a problem connecting to the server. Please try again later.";

/// Bot acknowledgment posted after a resume is attached.
pub const UPLOAD_ACK: &str = "I see you've uploaded a resume! I can help you improve it. \
     What specific section would you like me to review?";

#[derive(Debug, Clone)]
pub enum Action {
    /// User submitted text (typed or via a quick-start prompt).
    Submit(String),
    /// The advisor produced a reply.
    ReplyReady(String),
    /// The advisor failed; payload is the error description for the log.
    ReplyFailed(String),
    /// Jump to a specific pane.
    SwitchPage(Page),
    /// Cycle to the next pane (Tab).
    CyclePage,
    /// Flip dark/light palettes.
    ToggleTheme,
    /// A resume file passed validation.
    AttachResume(ResumeFile),
    /// Simulated review finished; post the acknowledgment.
    UploadAcknowledged,
    /// Clear the lingering attachment slot.
    UploadSlotCleared,
    Quit,
}

/// I/O the caller must perform after `update()` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Ask the configured provider for a reply to this text.
    RequestReply(String),
    /// Run the delayed resume-review simulation.
    SimulateReview,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            let text = text.trim();
            if text.is_empty() {
                debug!("Ignoring empty submit");
                return Effect::None;
            }
            if app.is_loading {
                debug!("Ignoring submit while a send is in flight");
                return Effect::None;
            }
            app.transcript.push_user(text.to_string());
            app.is_loading = true;
            app.status_message = String::from("Eida is thinking...");
            Effect::RequestReply(text.to_string())
        }
        Action::ReplyReady(content) => {
            app.transcript.push_bot(content);
            app.is_loading = false;
            app.status_message.clear();
            Effect::None
        }
        Action::ReplyFailed(error) => {
            warn!("Advisor request failed: {error}");
            app.transcript.push_bot(CONNECTION_APOLOGY.to_string());
            app.is_loading = false;
            app.status_message.clear();
            Effect::None
        }
        Action::SwitchPage(page) => {
            app.current_page = page;
            Effect::None
        }
        Action::CyclePage => {
            app.current_page = app.current_page.next();
            Effect::None
        }
        Action::ToggleTheme => {
            app.dark_mode = !app.dark_mode;
            Effect::None
        }
        Action::AttachResume(file) => {
            if app.upload.is_uploading {
                debug!("Ignoring attach while a review is already running");
                return Effect::None;
            }
            debug!("Resume attached: {} ({} bytes)", file.name, file.size);
            app.upload.file = Some(file);
            app.upload.is_uploading = true;
            Effect::SimulateReview
        }
        Action::UploadAcknowledged => {
            app.transcript.push_bot(UPLOAD_ACK.to_string());
            app.upload.is_uploading = false;
            Effect::None
        }
        Action::UploadSlotCleared => {
            app.upload.file = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::upload::{DocumentKind, validate};
    use crate::test_support::test_app;

    fn pdf() -> ResumeFile {
        validate("resume.pdf", 1024).unwrap()
    }

    #[test]
    fn submit_appends_user_message_and_starts_loading() {
        let mut app = test_app();
        let before = app.transcript.len();

        let effect = update(&mut app, Action::Submit("  hello  ".into()));

        assert_eq!(effect, Effect::RequestReply("hello".into()));
        assert_eq!(app.transcript.len(), before + 1);
        let last = app.transcript.messages.last().unwrap();
        assert!(last.is_user);
        assert_eq!(last.content, "hello"); // trimmed
        assert!(app.is_loading);
    }

    #[test]
    fn blank_submit_is_a_noop() {
        let mut app = test_app();
        let before = app.transcript.len();

        assert_eq!(update(&mut app, Action::Submit("".into())), Effect::None);
        assert_eq!(update(&mut app, Action::Submit("   \n\t ".into())), Effect::None);

        assert_eq!(app.transcript.len(), before);
        assert!(!app.is_loading);
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::Submit("first".into()));
        let during = app.transcript.len();

        let effect = update(&mut app, Action::Submit("second".into()));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.transcript.len(), during);
        assert!(app.is_loading);
    }

    #[test]
    fn full_cycle_appends_exactly_two_messages_on_success() {
        let mut app = test_app();
        let before = app.transcript.len();

        update(&mut app, Action::Submit("hi".into()));
        update(&mut app, Action::ReplyReady("hello back".into()));

        assert_eq!(app.transcript.len(), before + 2);
        assert!(!app.is_loading);
        let bot = app.transcript.messages.last().unwrap();
        assert!(!bot.is_user);
        assert_eq!(bot.content, "hello back");
    }

    #[test]
    fn full_cycle_appends_exactly_two_messages_on_failure() {
        let mut app = test_app();
        let before = app.transcript.len();

        update(&mut app, Action::Submit("hi".into()));
        update(&mut app, Action::ReplyFailed("connection refused".into()));

        assert_eq!(app.transcript.len(), before + 2);
        assert!(!app.is_loading);
        let bot = app.transcript.messages.last().unwrap();
        assert!(!bot.is_user);
        assert_eq!(bot.content, CONNECTION_APOLOGY);
    }

    #[test]
    fn attach_runs_the_simulated_review_cycle() {
        let mut app = test_app();
        let before = app.transcript.len();

        let effect = update(&mut app, Action::AttachResume(pdf()));
        assert_eq!(effect, Effect::SimulateReview);
        assert!(app.upload.is_uploading);
        assert_eq!(app.upload.file.as_ref().unwrap().kind, DocumentKind::Pdf);

        update(&mut app, Action::UploadAcknowledged);
        assert!(!app.upload.is_uploading);
        assert_eq!(app.transcript.len(), before + 1);
        assert_eq!(app.transcript.messages.last().unwrap().content, UPLOAD_ACK);

        update(&mut app, Action::UploadSlotCleared);
        assert!(app.upload.file.is_none());
    }

    #[test]
    fn attach_while_reviewing_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::AttachResume(pdf()));
        let effect = update(&mut app, Action::AttachResume(pdf()));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn page_and_theme_actions_have_no_transcript_side_effects() {
        let mut app = test_app();
        let before = app.transcript.len();

        update(&mut app, Action::SwitchPage(Page::Contact));
        assert_eq!(app.current_page, Page::Contact);
        update(&mut app, Action::CyclePage);
        assert_eq!(app.current_page, Page::About);
        update(&mut app, Action::ToggleTheme);
        assert!(app.dark_mode);

        assert_eq!(app.transcript.len(), before);
        assert!(!app.is_loading);
    }

    #[test]
    fn quit_produces_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
