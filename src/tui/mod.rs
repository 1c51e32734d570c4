//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (reply pending, review simulation running): draws every
//!   ~80ms so the typing indicator stays smooth.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Concurrency
//!
//! At most one reply request is in flight at a time — `is_loading` gates
//! submission, and the compose box is disabled for the duration. Each send
//! spawns one tokio task that resolves to a single `Action` (`ReplyReady`
//! or `ReplyFailed`) delivered over the std `mpsc` channel. The upload
//! simulation is a second kind of task: two timed actions in sequence.
//! There is no cancellation and no timeout on the remote call.

mod component;
mod components;
mod event;
pub mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::advisor::{OfflineAdvisor, RemoteAdvisor, ResponseProvider};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Page};
use crate::core::upload;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    InputBox, InputEvent, MessageListState, QUICK_START_OPTIONS, UploadPromptState,
};
use crate::tui::components::upload_prompt::UploadEvent;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub message_list: MessageListState,
    pub input_box: InputBox,
    // Upload prompt overlay (None = hidden)
    pub upload_prompt: Option<UploadPromptState>,
    // Blocking alert overlay (None = hidden)
    pub alert: Option<String>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            upload_prompt: None,
            alert: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Enable the Kitty keyboard protocol unconditionally (allows
        // Shift+Enter detection). Terminals that don't support it ignore
        // the push harmlessly.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Build a provider from the resolved config's provider name.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn ResponseProvider> {
    match config.provider.as_str() {
        "offline" => Arc::new(OfflineAdvisor::new()),
        // Default to the hosted endpoint
        _ => Arc::new(RemoteAdvisor::new(config.endpoint.clone())),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config);
    let mut app = App::from_config(provider, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync InputBox props with App state
        tui.input_box.disabled = app.is_loading;
        tui.input_box.theme = theme::Theme::for_mode(app.dark_mode);
        tui.input_box.attached = app.upload.file.as_ref().map(|f| f.name.clone());

        let animating = app.is_loading || app.upload.is_uploading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 6.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of overlays
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // A visible alert blocks everything until dismissed
            if tui.alert.is_some() {
                if matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
                    tui.alert = None;
                }
                continue;
            }

            // When the upload prompt is open, route all events to it
            if let Some(ref mut prompt) = tui.upload_prompt {
                match prompt.handle_event(&event) {
                    Some(UploadEvent::Confirm(path)) => {
                        tui.upload_prompt = None;
                        match upload::inspect(&path) {
                            Ok(file) => {
                                info!(
                                    "Accepted resume attachment: {} ({}, {} bytes)",
                                    file.name,
                                    file.kind.mime(),
                                    file.size
                                );
                                let effect = update(&mut app, Action::AttachResume(file));
                                dispatch_effect(effect, &app, &tx, &mut should_quit);
                            }
                            Err(e) => {
                                warn!("Rejected resume attachment {}: {e}", path.display());
                                tui.alert = Some(e.to_string());
                            }
                        }
                    }
                    Some(UploadEvent::Dismiss) => {
                        tui.upload_prompt = None;
                    }
                    None => {}
                }
                continue;
            }

            // Scroll events always go to the message list
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
                    | TuiEvent::ScrollToBottom
            ) {
                tui.message_list.handle_event(&event);
                continue;
            }

            match event {
                TuiEvent::CyclePage => {
                    update(&mut app, Action::CyclePage);
                }
                TuiEvent::ToggleTheme => {
                    update(&mut app, Action::ToggleTheme);
                }
                TuiEvent::OpenUploadPrompt => {
                    // The web widget disables the picker while a review runs
                    if app.current_page == Page::Chat && !app.upload.is_uploading {
                        tui.upload_prompt = Some(UploadPromptState::new());
                    }
                }
                TuiEvent::QuickStart(index) => {
                    if app.current_page == Page::Chat
                        && let Some((_, prompt)) = QUICK_START_OPTIONS.get(index)
                    {
                        let effect = update(&mut app, Action::Submit(prompt.to_string()));
                        dispatch_effect(effect, &app, &tx, &mut should_quit);
                    }
                }
                TuiEvent::Escape => {
                    // No overlay to dismiss: Escape is a no-op
                }
                // Everything else feeds the compose box on the chat pane
                _ if app.current_page == Page::Chat => {
                    if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&event) {
                        let effect = update(&mut app, Action::Submit(text));
                        dispatch_effect(effect, &app, &tx, &mut should_quit);
                    }
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (replies, upload simulation)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            dispatch_effect(effect, &app, &tx, &mut should_quit);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Perform the I/O an `update()` call asked for.
fn dispatch_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>, should_quit: &mut bool) {
    match effect {
        Effect::RequestReply(text) => spawn_reply(app.provider.clone(), text, tx.clone()),
        Effect::SimulateReview => spawn_review_simulation(tx.clone()),
        Effect::Quit => *should_quit = true,
        Effect::None => {}
    }
}

/// Ask the provider for a reply on a background task. Failure is delivered
/// as `ReplyFailed`, which the reducer turns into the apology message — the
/// cycle always ends back at Idle.
fn spawn_reply(provider: Arc<dyn ResponseProvider>, text: String, tx: mpsc::Sender<Action>) {
    info!("Spawning reply request via '{}' provider", provider.name());
    tokio::spawn(async move {
        let action = match provider.reply(&text).await {
            Ok(reply) => Action::ReplyReady(reply),
            Err(e) => {
                info!("Reply request failed: {e}");
                Action::ReplyFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver reply action: receiver dropped");
        }
    });
}

/// Run the simulated resume review: acknowledgment after a fixed delay,
/// then clear the attachment slot after a further delay.
fn spawn_review_simulation(tx: mpsc::Sender<Action>) {
    info!("Spawning resume review simulation");
    tokio::spawn(async move {
        tokio::time::sleep(upload::REVIEW_ACK_DELAY).await;
        if tx.send(Action::UploadAcknowledged).is_err() {
            warn!("Failed to deliver upload acknowledgment: receiver dropped");
            return;
        }
        tokio::time::sleep(upload::ATTACHMENT_CLEAR_DELAY).await;
        if tx.send(Action::UploadSlotCleared).is_err() {
            warn!("Failed to deliver upload slot clear: receiver dropped");
        }
    });
}
