//! Core domain + application logic for the application intake bot.
//!
//! This crate is intentionally transport-agnostic: Telegram lives behind the
//! messaging port implemented in the adapter crate, so the questionnaire flow
//! can be driven by tests without a network.

pub mod application;
pub mod config;
pub mod conversation;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod messaging;
pub mod texts;

pub use errors::{Error, Result};
