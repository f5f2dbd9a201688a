//! # Conversation Orchestrator Module
//!
//! Drives one full turn per inbound message. The precedence chain is fixed:
//! back command, numeric menu option, question-shaped text to the AI,
//! high-confidence intent, the state's default handler, unconditional AI
//! fallback, self-healing reset to the main menu, and a final canned
//! "didn't understand" reply. Question-shaped messages deliberately reach the
//! AI before strong intent matches; that ordering is observed behavior, not
//! an accident.
//!
//! A turn never raises: any unexpected failure is logged and converted into
//! the canned apology.

use anyhow::Result;
use lazy_static::lazy_static;
use log::{error, info, warn};
use regex::Regex;

use crate::ai::AiFallbackHandler;
use crate::catalog;
use crate::config::BotConfig;
use crate::constants::*;
use crate::intent::{Intent, IntentDetector};
use crate::menu;
use crate::state::{StateCache, UserStateStore};

// Accented interrogatives anywhere; unaccented ones and common yes/no
// question leads only at the start of the message.
const QUESTION_PATTERN: &str = r"(?i)(?:^|[\s¿(])(?:qué|cómo|cuándo|dónde|cuánto|cuánta|cuántos|cuántas|cuál|cuáles|quién|quiénes|por qué)\b|^(?:que|como|cuando|donde|cuanto|cual|quien|por que|hay|tienen|hacen|puedo|puede|pueden|se puede)\b";

lazy_static! {
    static ref QUESTION_REGEX: Regex =
        Regex::new(QUESTION_PATTERN).expect("question pattern should be valid");
}

/// Whether a message reads as a natural-language question.
pub fn looks_like_question(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.contains('?') || trimmed.contains('¿') || QUESTION_REGEX.is_match(trimmed)
}

/// Canned reply and optional transition for a trusted intent.
fn intent_reply(intent: Intent) -> Option<(String, Option<&'static str>)> {
    match intent {
        Intent::Saludo => Some((MENSAJE_BIENVENIDA.to_string(), Some(ESTADO_MENU_PRINCIPAL))),
        Intent::VerProductos => Some((
            MENSAJE_MENU_PRODUCTOS.to_string(),
            Some(ESTADO_MENU_PRODUCTOS),
        )),
        Intent::HacerPedido => Some((MENSAJE_HACER_PEDIDO.to_string(), None)),
        Intent::ConsultarEstado => Some((MENSAJE_CONSULTAR_ESTADO.to_string(), None)),
        Intent::OfertasEspeciales => Some((
            catalog::format_special_offers(catalog::SPECIAL_OFFERS),
            None,
        )),
        Intent::AtencionCliente => Some((
            MENSAJE_MENU_ATENCION.to_string(),
            Some(ESTADO_MENU_ATENCION),
        )),
        Intent::Desconocido => None,
    }
}

/// One conversation engine per process; all per-user state lives in the
/// cache collaborator behind [`UserStateStore`].
pub struct ConversationEngine<C: StateCache> {
    detector: IntentDetector,
    store: UserStateStore<C>,
    ai: AiFallbackHandler,
    config: BotConfig,
}

impl<C: StateCache> ConversationEngine<C> {
    pub fn new(config: BotConfig, cache: C) -> Self {
        Self {
            detector: IntentDetector::new(),
            store: UserStateStore::with_ttl(cache, config.state_ttl()),
            ai: AiFallbackHandler::new(config.ai.clone()),
            config,
        }
    }

    /// Process one inbound message and produce the outbound text.
    ///
    /// Never fails: collaborator errors degrade to the canned apology.
    pub async fn process_turn(&self, user_id: &str, text: &str) -> String {
        match self.run_turn(user_id, text).await {
            Ok(response) => response,
            Err(e) => {
                error!("unrecoverable error processing turn for {user_id}: {e:#}");
                MENSAJE_ERROR.to_string()
            }
        }
    }

    async fn run_turn(&self, user_id: &str, text: &str) -> Result<String> {
        let resolved = self.store.get_state(user_id).await?;
        let first_interaction = !resolved.known_user;

        // Unknown stored state names self-heal to the root
        let current = if menu::state_def(&resolved.state).is_some() {
            resolved.state
        } else {
            warn!(
                "user {user_id} had invalid state '{}', resetting to root",
                resolved.state
            );
            self.store.set_state(user_id, ESTADO_MENU_PRINCIPAL).await?;
            ESTADO_MENU_PRINCIPAL.to_string()
        };

        let trimmed = text.trim();

        // 1. Exact back command
        if menu::is_back_command(trimmed) {
            let reply = menu::handle_back(&current);
            info!("turn[{user_id}] path=back {current} -> {}", reply.next_state);
            self.store.set_state(user_id, reply.next_state).await?;
            return Ok(reply.response);
        }

        // 2. Numeric menu option; its result is always final
        if menu::is_numeric_input(trimmed) {
            let reply = menu::handle_numeric(user_id, &current, trimmed);
            info!("turn[{user_id}] path=option {current} -> {}", reply.next_state);
            self.store.set_state(user_id, reply.next_state).await?;
            return Ok(reply.response);
        }

        let detection = self.detector.detect(text);
        info!(
            "turn[{user_id}] intent={} confidence={:.2}",
            detection.intent, detection.confidence
        );

        // 3. Question-shaped messages go to the AI first when it is available
        if looks_like_question(trimmed) && self.ai.is_configured() {
            if let Some(response) = self
                .ai
                .ask(user_id, text, Some(detection), first_interaction)
                .await
            {
                info!("turn[{user_id}] path=ai-question");
                return Ok(response);
            }
        }

        // 4. Trusted intent with a canned handler
        if detection.intent != Intent::Desconocido
            && detection.confidence >= self.config.confidence.routing
        {
            if let Some((response, next_state)) = intent_reply(detection.intent) {
                info!("turn[{user_id}] path=intent {}", detection.intent);
                if let Some(next_state) = next_state {
                    self.store.set_state(user_id, next_state).await?;
                }
                return Ok(response);
            }
        }

        // 5. The current state's own free-text handler
        if let Some(reply) = menu::default_reply(user_id, &current, text) {
            info!("turn[{user_id}] path=state-default {current}");
            self.store.set_state(user_id, reply.next_state).await?;
            return Ok(reply.response);
        }

        // 6. AI fallback regardless of shape
        if let Some(response) = self
            .ai
            .ask(user_id, text, Some(detection), first_interaction)
            .await
        {
            info!("turn[{user_id}] path=ai-fallback");
            return Ok(response);
        }

        // 7. Self-healing: a user stuck outside the root gets pulled back
        if current != ESTADO_MENU_PRINCIPAL {
            info!("turn[{user_id}] path=reset-to-root from {current}");
            self.store.set_state(user_id, ESTADO_MENU_PRINCIPAL).await?;
            return Ok(MENSAJE_MENU_PRINCIPAL.to_string());
        }

        // 8. Last resort
        info!("turn[{user_id}] path=fallback-message");
        Ok(MENSAJE_NO_ENTIENDO.to_string())
    }

    /// Current menu state, initializing first-time users. Exposed for the
    /// dev runner's status line.
    pub async fn current_state(&self, user_id: &str) -> Result<String> {
        Ok(self.store.get_state(user_id).await?.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_heuristic_accepts_question_marks() {
        assert!(looks_like_question("¿Tienen opciones para celíacos?"));
        assert!(looks_like_question("hacen envios a zona sur?"));
    }

    #[test]
    fn test_question_heuristic_accepts_interrogatives() {
        assert!(looks_like_question("cuánto sale el kilo de milanesas"));
        assert!(looks_like_question("como hago para pedir"));
        assert!(looks_like_question("tienen local para retirar"));
    }

    #[test]
    fn test_question_heuristic_rejects_statements() {
        assert!(!looks_like_question("quiero pedir milanesas"));
        assert!(!looks_like_question("hola buenas tardes"));
        // Unaccented interrogatives only count at the start
        assert!(!looks_like_question("avisame cuando llegue el pedido"));
    }

    #[test]
    fn test_intent_reply_covers_all_known_intents() {
        for intent in [
            Intent::Saludo,
            Intent::VerProductos,
            Intent::HacerPedido,
            Intent::ConsultarEstado,
            Intent::OfertasEspeciales,
            Intent::AtencionCliente,
        ] {
            assert!(intent_reply(intent).is_some());
        }
        assert!(intent_reply(Intent::Desconocido).is_none());
    }

    #[test]
    fn test_special_offers_reply_uses_catalog() {
        let (response, _) = intent_reply(Intent::OfertasEspeciales).unwrap();
        assert!(response.contains("OFERTAS ESPECIALES"));
        assert!(response.contains("POLLO2X1"));
    }
}
