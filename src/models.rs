//! # Gateway Record Types
//!
//! Plain data types for the records the messaging gateway owns: customers,
//! conversations and message exchanges. Persistence belongs to the gateway
//! collaborator; here they only carry a transcript through a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A WhatsApp customer, keyed by phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub phone_number: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// New customer with the default display name built from the last four
    /// digits of the phone number.
    pub fn new(phone_number: &str) -> Self {
        let digits: String = phone_number.chars().filter(|c| c.is_ascii_digit()).collect();
        let suffix = if digits.len() >= 4 {
            &digits[digits.len() - 4..]
        } else {
            digits.as_str()
        };
        Self {
            phone_number: phone_number.to_string(),
            name: format!("Customer {suffix}"),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageDirection {
    Inbound,
    Outbound,
}

/// One message exchanged within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub direction: MessageDirection,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A running conversation with its transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub customer: Customer,
    pub active: bool,
    pub started_at: DateTime<Utc>,
    pub last_interaction: DateTime<Utc>,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(customer: Customer) -> Self {
        let now = Utc::now();
        Self {
            customer,
            active: true,
            started_at: now,
            last_interaction: now,
            messages: Vec::new(),
        }
    }

    pub fn record_inbound(&mut self, content: &str) {
        self.record(MessageDirection::Inbound, content);
    }

    pub fn record_outbound(&mut self, content: &str) {
        self.record(MessageDirection::Outbound, content);
    }

    fn record(&mut self, direction: MessageDirection, content: &str) {
        let now = Utc::now();
        self.last_interaction = now;
        self.messages.push(Message {
            direction,
            content: content.to_string(),
            timestamp: now,
        });
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}
