//! # TUI Components
//!
//! All UI components for the terminal interface, following the component
//! split of the original widget (Sidebar, Message, InputBar, static pages).
//!
//! ## Component Architecture
//!
//! Two patterns appear here:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as struct fields:
//! - `Sidebar`: navigation, quick-start bindings, theme/status footer
//! - `MessageBubble`: one transcript entry
//! - `ContactPage` / `AboutPage`: static informational panes
//! - `Alert`: blocking validation alert overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events upward:
//! - `InputBox`: the compose draft with auto-grow sizing
//! - `MessageList`: scrollable transcript with layout caching
//! - `UploadPrompt`: resume path entry overlay
//!
//! Data always flows top-down as props and bottom-up as emitted events;
//! no component reaches into `App` directly.

mod alert;
mod input_box;
mod message;
mod message_list;
mod pages;
mod sidebar;
pub mod upload_prompt;

pub use alert::Alert;
pub use input_box::{InputBox, InputEvent};
pub use message::MessageBubble;
pub use message_list::{MessageList, MessageListState};
pub use pages::{AboutPage, ContactPage};
pub use sidebar::{QUICK_START_OPTIONS, Sidebar};
pub use upload_prompt::{UploadPrompt, UploadPromptState};
