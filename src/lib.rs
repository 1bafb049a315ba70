//! # BIN Lookup Telegram Bot
//!
//! A Telegram bot that takes a 6-digit Bank Identification Number, looks it
//! up against the public binlist database and replies with the card brand,
//! type, issuing bank, country and currency.

pub mod bin_client;
pub mod bin_record;
pub mod bin_validation;
pub mod bot;
pub mod lookup_config;
pub mod lookup_errors;
pub mod report;
