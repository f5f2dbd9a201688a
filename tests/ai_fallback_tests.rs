#[cfg(test)]
mod tests {
    use breaders_bot::ai::AiFallbackHandler;
    use breaders_bot::config::AiAssistantConfig;
    use breaders_bot::constants::MENSAJE_BIENVENIDA;
    use breaders_bot::intent::{Intent, IntentDetection};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const USER: &str = "whatsapp:+5491112345678";

    fn config_for(server: &MockServer) -> AiAssistantConfig {
        AiAssistantConfig {
            assistant_id: Some("AST123".to_string()),
            account_sid: "AC000".to_string(),
            auth_token: "token".to_string(),
            base_url: server.uri(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_direct_string_response_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/Assistants/AST123/Messages"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"response": "Hola, soy el asistente"})),
            )
            .mount(&server)
            .await;

        let handler = AiFallbackHandler::new(config_for(&server));
        let reply = handler.ask(USER, "una consulta de facturación", None, false).await;

        assert_eq!(reply.as_deref(), Some("Hola, soy el asistente"));
    }

    #[tokio::test]
    async fn test_nested_text_response_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"response": {"text": "Respuesta anidada"}})),
            )
            .mount(&server)
            .await;

        let handler = AiFallbackHandler::new(config_for(&server));
        let reply = handler.ask(USER, "otra consulta", None, false).await;

        assert_eq!(reply.as_deref(), Some("Respuesta anidada"));
    }

    #[tokio::test]
    async fn test_server_error_resolves_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let handler = AiFallbackHandler::new(config_for(&server));
        let reply = handler.ask(USER, "una consulta", None, false).await;

        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_non_json_body_resolves_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway error</html>"))
            .mount(&server)
            .await;

        let handler = AiFallbackHandler::new(config_for(&server));
        let reply = handler.ask(USER, "una consulta", None, false).await;

        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_timeout_resolves_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"response": "tarde"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.timeout = Duration::from_millis(100);
        let handler = AiFallbackHandler::new(config);

        let reply = handler.ask(USER, "una consulta", None, false).await;
        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_session_and_context_ride_in_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/Assistants/AST123/Messages"))
            .and(body_string_contains("session_whatsapp5491112345678"))
            .and(body_string_contains("\\\"intent\\\":\\\"ofertas_especiales\\\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let handler = AiFallbackHandler::new(config_for(&server));
        let detection = IntentDetection {
            intent: Intent::OfertasEspeciales,
            confidence: 0.72,
        };
        let reply = handler
            .ask(USER, "hay descuentos nuevos esta semana", Some(detection), false)
            .await;

        assert_eq!(reply.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_first_interaction_greeting_never_calls_the_service() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "nope"})))
            .expect(0)
            .mount(&server)
            .await;

        let handler = AiFallbackHandler::new(config_for(&server));
        let reply = handler.ask(USER, "buenas tardes", None, true).await;

        assert_eq!(reply.as_deref(), Some(MENSAJE_BIENVENIDA));
    }

    #[tokio::test]
    async fn test_first_interaction_long_message_does_call_the_service() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"response": "respuesta real"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let handler = AiFallbackHandler::new(config_for(&server));
        let reply = handler
            .ask(USER, "necesito cotizar un pedido grande para un evento corporativo", None, true)
            .await;

        assert_eq!(reply.as_deref(), Some("respuesta real"));
    }
}
