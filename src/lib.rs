//! # Breaders WhatsApp Bot
//!
//! Conversational core of the Breaders customer-service bot: keyword intent
//! detection, a menu-driven conversation state machine with per-user state in
//! an external cache, and a layered fallback to an external AI assistant.

pub mod ai;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod intent;
pub mod menu;
pub mod models;
pub mod state;
pub mod support;
