//! Infoagent is a terminal chat client for the InfoAgent conversational
//! service.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the transcript store, message types, and configuration.
//! - [`ui`] renders the terminal interface and runs the interactive event
//!   loop; its [`ui::markdown`] module is the response-formatting pipeline
//!   that turns raw reply text into typed blocks and inline spans.
//! - [`api`] defines the `/chat` payloads and the request client.
//! - [`utils`] holds the clipboard, editor, voice, highlighting, and URL
//!   helpers the chat loop leans on.
//!
//! The runtime entrypoint lives in the binary crate (`src/main.rs`), which
//! loads configuration and dispatches into [`ui::chat_loop`].

pub mod api;
pub mod core;
pub mod ui;
pub mod utils;
