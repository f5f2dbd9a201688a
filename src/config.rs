//! # Configuration Module
//!
//! All tunables live in one place: intent confidence thresholds, the state
//! TTL, and the AI assistant endpoint settings. Historically these thresholds
//! were scattered across handlers with drifting values; the orchestrator only
//! ever reads `ConfidenceThresholds::routing`.

use std::env;
use std::time::Duration;

use crate::constants::{INTENT_ALTA_CONFIANZA, INTENT_BAJA_CONFIANZA, INTENT_MEDIA_CONFIANZA};
use crate::state::STATE_TTL;

/// Intent confidence ladder plus the single routing threshold.
#[derive(Debug, Clone)]
pub struct ConfidenceThresholds {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
    /// Minimum confidence for the orchestrator to trust a detected intent.
    pub routing: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: INTENT_ALTA_CONFIANZA,
            medium: INTENT_MEDIA_CONFIANZA,
            low: INTENT_BAJA_CONFIANZA,
            routing: 0.5,
        }
    }
}

/// Settings for the external AI assistant service.
#[derive(Debug, Clone)]
pub struct AiAssistantConfig {
    /// Assistant identifier; `None` disables the AI fallback entirely.
    pub assistant_id: Option<String>,
    pub account_sid: String,
    pub auth_token: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for AiAssistantConfig {
    fn default() -> Self {
        Self {
            assistant_id: None,
            account_sid: String::new(),
            auth_token: String::new(),
            base_url: "https://assistants.twilio.com/v1".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl AiAssistantConfig {
    pub fn is_configured(&self) -> bool {
        self.assistant_id.is_some()
    }
}

/// Top-level bot configuration.
#[derive(Debug, Clone, Default)]
pub struct BotConfig {
    pub confidence: ConfidenceThresholds,
    pub ai: AiAssistantConfig,
}

impl BotConfig {
    /// Build the configuration from environment variables, keeping defaults
    /// for anything unset. Intended for the binary; tests construct configs
    /// directly.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.ai.assistant_id = env::var("TWILIO_ASSISTANT_ID").ok().filter(|v| !v.is_empty());
        if let Ok(sid) = env::var("TWILIO_ACCOUNT_SID") {
            config.ai.account_sid = sid;
        }
        if let Ok(token) = env::var("TWILIO_AUTH_TOKEN") {
            config.ai.auth_token = token;
        }
        if let Ok(url) = env::var("AI_ASSISTANT_BASE_URL") {
            config.ai.base_url = url;
        }
        if let Some(threshold) = env::var("INTENT_ROUTING_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
        {
            config.confidence.routing = threshold;
        }

        config
    }

    /// TTL applied to user state entries.
    pub fn state_ttl(&self) -> Duration {
        STATE_TTL
    }
}
