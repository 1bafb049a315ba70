//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `message_handler`: Handles commands and BIN text messages
//! - `inline_handler`: Answers inline queries with a report article
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `lookup_flow`: Validation, lookup and formatting shared by the handlers
//! - `ui_builder`: Creates keyboards and reply options

pub mod callback_handler;
pub mod inline_handler;
pub mod lookup_flow;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use inline_handler::inline_query_handler;
pub use message_handler::message_handler;

pub use lookup_flow::{render_reply, resolve_bin_query, ResolvedQuery};
