//! UI Builder module for creating keyboards and reply formatting options

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};

/// Callback data for the help button
pub const CALLBACK_HELP: &str = "help";
/// Callback data for the privacy button
pub const CALLBACK_PRIVACY: &str = "privacy";

/// Parse mode used for every reply
///
/// All texts are written for Telegram's legacy Markdown flavour (single `*`
/// for bold, backticks for code), which teloxide marks as deprecated.
#[allow(deprecated)]
pub fn reply_parse_mode() -> ParseMode {
    ParseMode::Markdown
}

/// Keyboard attached to the /start welcome message
pub fn create_main_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::switch_inline_query_current_chat(
            "🔍 Lookup a BIN",
            "",
        )],
        vec![
            InlineKeyboardButton::callback("❓ Help", CALLBACK_HELP),
            InlineKeyboardButton::callback("🔒 Privacy", CALLBACK_PRIVACY),
        ],
    ])
}

/// Keyboard attached to a successful lookup report
pub fn create_report_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::switch_inline_query_current_chat("🔄 Lookup Another", ""),
        InlineKeyboardButton::callback("❓ Help", CALLBACK_HELP),
    ]])
}
