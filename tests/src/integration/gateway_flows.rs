//! # Gateway Flow Tests
//!
//! Drives the real router over HTTP: the service is bound to an ephemeral
//! listener and exercised with `reqwest`, covering the four actions plus
//! every boundary-validation scenario.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use keymask_engine::{NameDictionary, SubstitutionCipher};
    use keymask_gateway::{build_router, GatewayConfig};
    use reqwest::StatusCode;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Serve the gateway on an ephemeral port; returns its base URL.
    async fn spawn_gateway(seed: u64) -> String {
        let engine = SubstitutionCipher::with_seed(seed, NameDictionary::with_default_names())
            .expect("engine construction should not fail");
        let router = build_router(Arc::new(engine), &GatewayConfig::default());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral bind");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("server run");
        });

        format!("http://{}", addr)
    }

    async fn post_process(
        base: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = reqwest::Client::new()
            .post(format!("{}/process", base))
            .json(&body)
            .send()
            .await
            .expect("request should complete");
        let status = response.status();
        let json = response.json().await.expect("JSON body");
        (status, json)
    }

    // =============================================================================
    // HAPPY PATH FLOWS
    // =============================================================================

    #[tokio::test]
    async fn test_encrypt_then_simple_decrypt_over_http() {
        let base = spawn_gateway(42).await;

        let (status, body) = post_process(
            &base,
            serde_json::json!({ "text": "Attack at dawn!", "action": "encrypt" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let encrypted = body["result"].as_str().unwrap().to_string();
        assert_ne!(encrypted, "Attack at dawn!");

        let (status, body) = post_process(
            &base,
            serde_json::json!({ "text": encrypted, "action": "simple_decrypt" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "Attack at dawn!");
    }

    #[tokio::test]
    async fn test_action_matching_is_case_insensitive() {
        let base = spawn_gateway(42).await;

        let (_, upper) = post_process(
            &base,
            serde_json::json!({ "text": "hello", "action": "ENCRYPT" }),
        )
        .await;
        let (_, lower) = post_process(
            &base,
            serde_json::json!({ "text": "hello", "action": "encrypt" }),
        )
        .await;
        assert_eq!(upper["result"], lower["result"]);
    }

    #[tokio::test]
    async fn test_full_decrypt_restores_dictionary_names() {
        let base = spawn_gateway(7).await;
        let engine = SubstitutionCipher::with_seed(7, NameDictionary::with_default_names())
            .expect("engine");

        let ciphertext = engine.encrypt("Aurora met borealis at noon.");
        let (status, body) = post_process(
            &base,
            serde_json::json!({ "text": ciphertext, "action": "full_decrypt" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "Alice met bob at noon.");
    }

    #[tokio::test]
    async fn test_full_decrypt_without_names_matches_simple_decrypt() {
        let base = spawn_gateway(7).await;
        let engine = SubstitutionCipher::with_seed(7, NameDictionary::with_default_names())
            .expect("engine");

        let ciphertext = engine.encrypt("plain words only");
        let (_, full) = post_process(
            &base,
            serde_json::json!({ "text": ciphertext.clone(), "action": "full_decrypt" }),
        )
        .await;
        let (_, simple) = post_process(
            &base,
            serde_json::json!({ "text": ciphertext, "action": "simple_decrypt" }),
        )
        .await;
        assert_eq!(full["result"], simple["result"]);
    }

    #[tokio::test]
    async fn test_reverse_sub_masks_names_only() {
        let base = spawn_gateway(42).await;

        let (status, body) = post_process(
            &base,
            serde_json::json!({ "text": "alice wrote to Trent", "action": "reverse_sub" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "aurora wrote to Tempest");
    }

    // =============================================================================
    // VALIDATION SCENARIOS
    // =============================================================================

    #[tokio::test]
    async fn test_missing_fields_are_client_errors() {
        let base = spawn_gateway(42).await;

        let (status, body) = post_process(&base, serde_json::json!({ "text": "hi" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("required"));

        let (status, _) = post_process(&base, serde_json::json!({ "action": "encrypt" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_text_after_trim_is_client_error() {
        let base = spawn_gateway(42).await;

        let (status, body) = post_process(
            &base,
            serde_json::json!({ "text": "   ", "action": "encrypt" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("empty"));
    }

    #[tokio::test]
    async fn test_unsupported_action_is_named_in_error() {
        let base = spawn_gateway(42).await;

        let (status, body) = post_process(
            &base,
            serde_json::json!({ "text": "hi", "action": "rot13" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("rot13"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_client_error() {
        let base = spawn_gateway(42).await;

        let response = reqwest::Client::new()
            .post(format!("{}/process", base))
            .body("definitely not json")
            .send()
            .await
            .expect("request should complete");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // =============================================================================
    // SERVICE ENDPOINTS
    // =============================================================================

    #[tokio::test]
    async fn test_health_endpoint() {
        let base = spawn_gateway(42).await;

        let body: serde_json::Value = reqwest::get(format!("{}/health", base))
            .await
            .expect("request")
            .json()
            .await
            .expect("JSON body");
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_service_info_lists_supported_actions() {
        let base = spawn_gateway(42).await;

        let body: serde_json::Value = reqwest::get(&base)
            .await
            .expect("request")
            .json()
            .await
            .expect("JSON body");
        let actions = body["supported_actions"].as_array().unwrap();
        assert_eq!(actions.len(), 4);
        assert!(actions.iter().any(|a| a == "encrypt"));
        assert!(actions.iter().any(|a| a == "reverse_sub"));
    }
}
