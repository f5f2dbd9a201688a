//! # Intent Detection Module
//!
//! Keyword-based intent classification for incoming WhatsApp messages.
//! Matching is word-boundary regex over the case-folded message; no fuzzy
//! matching and no I/O. Confidence combines match count and the share of the
//! message covered by matches.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    PALABRAS_ATENCION_CLIENTE, PALABRAS_ESTADO_PEDIDO, PALABRAS_HACER_PEDIDO,
    PALABRAS_OFERTAS_ESPECIALES, PALABRAS_SALUDO, PALABRAS_VER_PRODUCTOS,
};

/// Closed set of intents the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Saludo,
    VerProductos,
    HacerPedido,
    ConsultarEstado,
    OfertasEspeciales,
    AtencionCliente,
    Desconocido,
}

impl Intent {
    /// Stable wire label for the intent, used in AI context payloads.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Saludo => "saludo",
            Intent::VerProductos => "ver_productos",
            Intent::HacerPedido => "hacer_pedido",
            Intent::ConsultarEstado => "consultar_estado",
            Intent::OfertasEspeciales => "ofertas_especiales",
            Intent::AtencionCliente => "atencion_cliente",
            Intent::Desconocido => "desconocido",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of classifying one message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentDetection {
    pub intent: Intent,
    pub confidence: f64,
}

/// Confidence when nothing matched.
const SIN_COINCIDENCIA: f64 = 0.1;

/// Build one alternation pattern from a keyword group, word-boundary anchored.
fn keyword_pattern(keywords: &[&str]) -> Regex {
    let escaped: Vec<String> = keywords.iter().map(|kw| regex::escape(kw)).collect();
    let pattern = format!(r"(?i)\b(?:{})\b", escaped.join("|"));
    Regex::new(&pattern).expect("keyword pattern should be valid")
}

lazy_static! {
    /// Intent table in declaration order; first entry wins confidence ties.
    static ref INTENT_PATTERNS: Vec<(Intent, Regex)> = vec![
        (Intent::Saludo, keyword_pattern(PALABRAS_SALUDO)),
        (Intent::VerProductos, keyword_pattern(PALABRAS_VER_PRODUCTOS)),
        (Intent::HacerPedido, keyword_pattern(PALABRAS_HACER_PEDIDO)),
        (Intent::ConsultarEstado, keyword_pattern(PALABRAS_ESTADO_PEDIDO)),
        (Intent::OfertasEspeciales, keyword_pattern(PALABRAS_OFERTAS_ESPECIALES)),
        (Intent::AtencionCliente, keyword_pattern(PALABRAS_ATENCION_CLIENTE)),
    ];
}

/// Keyword-based intent detector.
///
/// Side-effect free; patterns are compiled once per process.
pub struct IntentDetector;

impl IntentDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify a raw user message.
    ///
    /// Returns the best-scoring intent and its confidence in `[0, 1]`.
    /// Messages with no keyword match come back as `Desconocido` with a
    /// fixed low confidence.
    pub fn detect(&self, text: &str) -> IntentDetection {
        let message = text.trim().to_lowercase();
        if message.is_empty() {
            return IntentDetection {
                intent: Intent::Desconocido,
                confidence: SIN_COINCIDENCIA,
            };
        }

        let mut best: Option<IntentDetection> = None;

        for (intent, pattern) in INTENT_PATTERNS.iter() {
            let matches: Vec<_> = pattern.find_iter(&message).collect();
            if matches.is_empty() {
                continue;
            }

            let total_match_length: usize = matches.iter().map(|m| m.end() - m.start()).sum();
            let match_count_factor = (matches.len() as f64 * 0.1).min(0.3);
            let length_factor = (total_match_length as f64 / message.len() as f64 * 0.6).min(0.6);
            let mut confidence = (0.3 + match_count_factor + length_factor).min(0.95);

            if *intent == Intent::Saludo {
                confidence = adjust_greeting_confidence(confidence, &message);
            }

            debug!(
                "intent '{}' scored {:.2} ({} matches, {} chars)",
                intent,
                confidence,
                matches.len(),
                total_match_length
            );

            // Strict comparison keeps the first-declared intent on ties
            if best.map_or(true, |b| confidence > b.confidence) {
                best = Some(IntentDetection {
                    intent: *intent,
                    confidence,
                });
            }
        }

        best.unwrap_or(IntentDetection {
            intent: Intent::Desconocido,
            confidence: SIN_COINCIDENCIA,
        })
    }
}

impl Default for IntentDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Greeting keywords buried in long sentences rarely carry the real intent;
/// very short messages almost always do.
fn adjust_greeting_confidence(confidence: f64, message: &str) -> f64 {
    let word_count = message.split_whitespace().count();
    if word_count > 5 {
        (confidence * 0.6).max(SIN_COINCIDENCIA)
    } else if word_count <= 2 {
        (confidence * 1.25).min(0.95)
    } else {
        confidence
    }
}
