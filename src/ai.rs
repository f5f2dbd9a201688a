//! # AI Fallback Module
//!
//! Delegates messages the local handlers cannot answer to an external AI
//! assistant over HTTP. Every failure mode (missing configuration, network
//! error, timeout, non-2xx status, unexpected payload) reduces to `None`; the
//! orchestrator decides what happens next.

use log::{debug, info, warn};
use serde_json::{json, Value};

use crate::config::AiAssistantConfig;
use crate::constants::{MENSAJE_BIENVENIDA, PALABRAS_SALUDO};
use crate::intent::IntentDetection;

/// Messages shorter than this on first contact are treated as greetings.
const FIRST_CONTACT_SHORT_LEN: usize = 10;

/// Client for the external AI assistant service.
pub struct AiFallbackHandler {
    client: reqwest::Client,
    config: AiAssistantConfig,
}

impl AiFallbackHandler {
    pub fn new(config: AiAssistantConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Ask the assistant for a reply to `text`.
    ///
    /// Detected intent and confidence ride along as side-channel context.
    /// First-ever messages that look like a greeting are answered with the
    /// canned welcome without touching the network.
    pub async fn ask(
        &self,
        user_id: &str,
        text: &str,
        intent_ctx: Option<IntentDetection>,
        first_interaction: bool,
    ) -> Option<String> {
        if first_interaction && is_simple_greeting(text) {
            info!("first interaction from {user_id} is a greeting, sending welcome message");
            return Some(MENSAJE_BIENVENIDA.to_string());
        }

        let assistant_id = match &self.config.assistant_id {
            Some(id) => id,
            None => {
                warn!("AI assistant not configured, skipping fallback");
                return None;
            }
        };

        let clean_phone: String = user_id.chars().filter(|c| c.is_alphanumeric()).collect();
        let session_id = format!("session_{clean_phone}");

        let mut identity = format!("phone:{clean_phone}");
        if let Some(detection) = intent_ctx {
            let context = json!({
                "intent": detection.intent.label(),
                "confidence": detection.confidence,
            });
            identity = format!("{identity}|context:{context}");
        }

        let url = format!(
            "{}/Assistants/{}/Messages",
            self.config.base_url.trim_end_matches('/'),
            assistant_id
        );
        let payload = json!({
            "identity": identity,
            "session_id": session_id,
            "body": text,
        });

        debug!("sending message to AI assistant for session {session_id}");

        let response = match self
            .client
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .json(&payload)
            .timeout(self.config.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("error connecting to AI assistant: {e}");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("AI assistant returned status {status}");
            return None;
        }

        match response.json::<Value>().await {
            Ok(body) => {
                let message = extract_response_text(&body);
                info!("AI assistant response received ({} chars)", message.len());
                Some(message)
            }
            Err(e) => {
                warn!("AI assistant returned a malformed payload: {e}");
                None
            }
        }
    }
}

/// Whether a first-contact message is safe to answer with the canned welcome.
fn is_simple_greeting(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    normalized.chars().count() < FIRST_CONTACT_SHORT_LEN
        || PALABRAS_SALUDO.iter().any(|g| normalized.contains(g))
}

/// Pull the reply text out of the assistant payload.
///
/// The upstream service has shipped several response shapes; they are probed
/// in a fixed order and the raw payload is the last resort.
pub fn extract_response_text(body: &Value) -> String {
    if let Some(text) = body.get("response").and_then(Value::as_str) {
        return text.to_string();
    }
    if let Some(text) = body
        .get("response")
        .filter(|v| v.is_object())
        .and_then(|v| v.get("text"))
        .and_then(Value::as_str)
    {
        return text.to_string();
    }
    for field in ["body", "content", "message"] {
        if let Some(text) = body.get(field).and_then(Value::as_str) {
            return text.to_string();
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_direct_string_response() {
        let body = json!({"response": "Hola, ¿en qué puedo ayudarte?"});
        assert_eq!(extract_response_text(&body), "Hola, ¿en qué puedo ayudarte?");
    }

    #[test]
    fn test_extract_nested_text_field() {
        let body = json!({"response": {"text": "Claro, tenemos envíos"}});
        assert_eq!(extract_response_text(&body), "Claro, tenemos envíos");
    }

    #[test]
    fn test_extract_body_content_message_fields() {
        assert_eq!(extract_response_text(&json!({"body": "a"})), "a");
        assert_eq!(extract_response_text(&json!({"content": "b"})), "b");
        assert_eq!(extract_response_text(&json!({"message": "c"})), "c");
    }

    #[test]
    fn test_extract_falls_back_to_raw_payload() {
        let body = json!({"status": "queued"});
        assert_eq!(extract_response_text(&body), r#"{"status":"queued"}"#);
    }

    #[test]
    fn test_extraction_order_prefers_response_field() {
        let body = json!({"response": "primero", "message": "segundo"});
        assert_eq!(extract_response_text(&body), "primero");
    }

    #[test]
    fn test_simple_greeting_detection() {
        assert!(is_simple_greeting("Hola"));
        assert!(is_simple_greeting("buenas tardes, quería hacerles una consulta"));
        assert!(is_simple_greeting("ok")); // short counts as greeting
        assert!(!is_simple_greeting("necesito facturas tipo A de mis pedidos anteriores"));
    }

    #[tokio::test]
    async fn test_unconfigured_assistant_returns_none() {
        let handler = AiFallbackHandler::new(AiAssistantConfig::default());
        let reply = handler.ask("+549111", "una consulta cualquiera de facturación", None, false).await;
        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_first_interaction_greeting_skips_network() {
        // Unconfigured handler: a network attempt would return None, so a
        // welcome reply proves the shortcut fired
        let handler = AiFallbackHandler::new(AiAssistantConfig::default());
        let reply = handler.ask("+549111", "Hola", None, true).await;
        assert_eq!(reply.as_deref(), Some(MENSAJE_BIENVENIDA));
    }
}
