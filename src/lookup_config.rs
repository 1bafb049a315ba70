//! # Lookup Configuration Module
//!
//! This module defines the immutable configuration built once at startup:
//! the remote lookup endpoint and its static headers, and the fixed texts the
//! bot replies with.

use std::time::Duration;

// Constants for the binlist lookup service
pub const DEFAULT_BIN_API_URL: &str = "https://lookup.binlist.net";
pub const DEFAULT_API_VERSION: &str = "3";
pub const DEFAULT_USER_AGENT: &str = "BinLookupBot/1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Characters of an error response body kept for logging
pub const ERROR_BODY_LOG_LIMIT: usize = 200;

/// Settings for the remote BIN lookup client
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL; the BIN is appended as the last path segment
    pub base_url: String,
    /// Value of the `Accept-Version` header
    pub api_version: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BIN_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Fixed reply texts, all in Telegram legacy Markdown
#[derive(Debug, Clone)]
pub struct Messages {
    pub welcome: String,
    pub invalid_bin: String,
    pub no_data: String,
    pub help: String,
    pub privacy: String,
    /// First footer line of every report
    pub report_note: String,
    /// Second footer line of every report
    pub report_help_hint: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            welcome: "🔍 Welcome to BIN Lookup Bot!\n\n\
                      Send me a BIN (first 6 digits of a card) to get information about it.\n\n\
                      Example: `464235` or `514945`"
                .to_string(),
            invalid_bin: "❌ Invalid BIN format. Please send 6 digits.\n\n\
                          Example: `464235`"
                .to_string(),
            no_data: "No information found for this BIN.".to_string(),
            help: "🤖 *BIN Lookup Bot Help*\n\n\
                   • Send any 6-digit BIN to get card information\n\
                   • Example: `464235`\n\
                   • BIN = Bank Identification Number (first 6 digits of a card)\n\n\
                   📊 *Information Provided:*\n\
                   • Card Brand\n• Card Type\n• Bank Name\n• Country\n• Card Level\n• Currency"
                .to_string(),
            privacy: "🔒 *Privacy Notice:*\n\n\
                      • I only process the first 6 digits (BIN)\n\
                      • I don't store any BIN data\n\
                      • I don't have access to full card numbers\n\
                      • BIN data is from public databases"
                .to_string(),
            report_note: "📝 *Note:* This shows card type only, not card validity.".to_string(),
            report_help_hint: "ℹ️ Use `/help` for more information.".to_string(),
        }
    }
}

/// Complete bot configuration
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub lookup: LookupConfig,
    pub messages: Messages,
}

impl BotConfig {
    /// Build the configuration from environment variables
    ///
    /// `TELEGRAM_BOT_TOKEN` is required. `BIN_API_URL` optionally overrides the
    /// lookup base URL and must be an http(s) URL.
    pub fn from_env() -> anyhow::Result<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow::anyhow!("TELEGRAM_BOT_TOKEN environment variable required"))
            .and_then(|token| {
                if token.trim().is_empty() {
                    anyhow::bail!("TELEGRAM_BOT_TOKEN cannot be empty");
                }
                Ok(token)
            })?;

        let mut lookup = LookupConfig::default();
        if let Some(url) = std::env::var("BIN_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
        {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("BIN_API_URL must start with http:// or https://");
            }
            lookup.base_url = url;
        }

        Ok(Self {
            bot_token,
            lookup,
            messages: Messages::default(),
        })
    }
}
