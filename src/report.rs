//! # Report Formatting Module
//!
//! Turns a lookup outcome into the Markdown text sent back to the user.
//! Lines appear in a fixed order and each one is included only when its
//! field is present, so the output never depends on the key order of the
//! source document. Formatting is pure: the same record and BIN always
//! produce byte-identical text.

use crate::bin_client::LookupOutcome;
use crate::bin_record::{non_empty, BinRecord};
use crate::bin_validation::Bin;
use crate::lookup_config::Messages;

/// Render the reply for a lookup outcome
///
/// `NotFound` and every `Failed` variant produce the same "no data" text so
/// internal failures never reach the user.
pub fn format_report(outcome: &LookupOutcome, bin: &Bin, messages: &Messages) -> String {
    match outcome {
        LookupOutcome::Found(record) => format_record(record, bin, messages),
        LookupOutcome::NotFound | LookupOutcome::Failed(_) => messages.no_data.clone(),
    }
}

/// Render a found record
pub fn format_record(record: &BinRecord, bin: &Bin, messages: &Messages) -> String {
    if record.is_empty() {
        return messages.no_data.clone();
    }

    let mut lines = vec![format!("🔢 *BIN:* `{bin}`"), String::new()];

    if let Some(scheme) = non_empty(&record.scheme) {
        lines.push(format!("🏦 *Brand:* {}", scheme.to_uppercase()));
    }

    if let Some(card_type) = non_empty(&record.card_type) {
        lines.push(format!("💳 *Type:* {}", capitalize(card_type)));
    }

    if let Some(bank) = &record.bank {
        if let Some(name) = non_empty(&bank.name) {
            lines.push(format!("🏛️ *Bank:* {name}"));
        }
        if let Some(url) = non_empty(&bank.url) {
            lines.push(format!("🌐 *Website:* {url}"));
        }
        if let Some(phone) = non_empty(&bank.phone) {
            lines.push(format!("📞 *Phone:* {phone}"));
        }
    }

    if let Some(country) = &record.country {
        let mut parts: Vec<String> = Vec::new();
        if let Some(name) = non_empty(&country.name) {
            parts.push(name.to_string());
        }
        if let Some(emoji) = non_empty(&country.emoji) {
            parts.push(emoji.to_string());
        }
        if let Some(currency) = non_empty(&country.currency) {
            parts.push(format!("({currency})"));
        }
        if !parts.is_empty() {
            lines.push(format!("🌍 *Country:* {}", parts.join(" ")));
        }
    }

    if let Some(level) = non_empty(&record.brand) {
        lines.push(format!("⭐ *Level:* {}", capitalize(level)));
    }

    // Presence gates the line, not truthiness
    if let Some(prepaid) = record.prepaid {
        lines.push(format!(
            "💳 *Prepaid:* {}",
            if prepaid { "Yes" } else { "No" }
        ));
    }

    lines.push(String::new());
    lines.push(messages.report_note.clone());
    lines.push(messages.report_help_hint.clone());

    lines.join("\n")
}

/// One-line description used for inline query results, e.g. "VISA - Debit"
pub fn inline_summary(record: &BinRecord) -> String {
    let scheme = non_empty(&record.scheme)
        .map(str::to_uppercase)
        .unwrap_or_default();
    let card_type = non_empty(&record.card_type)
        .map(capitalize)
        .unwrap_or_default();

    format!("{scheme} - {card_type}")
        .trim_matches(|c| c == ' ' || c == '-')
        .to_string()
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("debit"), "Debit");
        assert_eq!(capitalize("CREDIT"), "Credit");
        assert_eq!(capitalize("visa/dankort"), "Visa/dankort");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("é"), "É");
    }

    #[test]
    fn test_inline_summary() {
        let record = BinRecord {
            scheme: Some("visa".to_string()),
            card_type: Some("debit".to_string()),
            ..Default::default()
        };
        assert_eq!(inline_summary(&record), "VISA - Debit");

        let scheme_only = BinRecord {
            scheme: Some("mastercard".to_string()),
            ..Default::default()
        };
        assert_eq!(inline_summary(&scheme_only), "MASTERCARD");

        let type_only = BinRecord {
            card_type: Some("credit".to_string()),
            ..Default::default()
        };
        assert_eq!(inline_summary(&type_only), "Credit");

        assert_eq!(inline_summary(&BinRecord::default()), "");
    }
}
