use anyhow::Result;
use log::info;
use std::env;
use std::io::{self, BufRead, Write};

use breaders_bot::config::BotConfig;
use breaders_bot::conversation::ConversationEngine;
use breaders_bot::models::{Conversation, Customer};
use breaders_bot::state::InMemoryStateCache;

/// Interactive console driver: plays the role of the messaging gateway so
/// the conversation flow can be exercised without WhatsApp.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    info!("Starting Breaders bot console runner");

    let config = BotConfig::from_env();
    if config.ai.is_configured() {
        info!("AI assistant fallback is configured");
    } else {
        info!("AI assistant fallback is NOT configured; local handlers only");
    }

    let engine = ConversationEngine::new(config, InMemoryStateCache::new());

    let phone = env::var("WHATSAPP_TEST_NUMBER").unwrap_or_else(|_| "+5491112345678".to_string());
    let mut conversation = Conversation::new(Customer::new(&phone));

    println!("Breaders bot - consola de pruebas. Escribí 'salir' para terminar.\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("salir") || message.eq_ignore_ascii_case("exit") {
            break;
        }

        conversation.record_inbound(message);
        let response = engine.process_turn(&phone, message).await;
        conversation.record_outbound(&response);

        let state = engine.current_state(&phone).await?;
        println!("\n{response}\n");
        println!("[estado: {state}]\n");
    }

    conversation.active = false;
    println!(
        "Fin de la sesión: {} mensajes intercambiados con {}.",
        conversation.message_count(),
        conversation.customer.name
    );

    Ok(())
}
