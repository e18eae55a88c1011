//! Request routing and handlers.
//!
//! The `/process` handler is the collaborator boundary from the engine's
//! point of view: it validates the request, maps the action string to a
//! closed [`Action`], and calls exactly one engine operation. Validation
//! failures are reported before the engine is ever invoked.

use crate::domain::actions::{supported_actions, Action};
use crate::domain::error::ApiError;
use crate::domain::types::{ProcessRequest, ProcessResponse, ServiceInfo};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use keymask_engine::{NameDirection, SubstitutionCipher};
use std::sync::Arc;
use tracing::{debug, error};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The process-wide cipher engine
    pub engine: Arc<SubstitutionCipher>,
}

/// Handle `POST /process`.
pub async fn handle_process(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ProcessResponse>, ApiError> {
    let request: ProcessRequest = serde_json::from_str(&body).map_err(|e| {
        error!(error = %e, "Malformed request body");
        ApiError::MalformedBody(e.to_string())
    })?;

    let (text, action) = validate_request(&request).map_err(|e| {
        error!(error = %e, "Rejected process request");
        e
    })?;

    debug!(
        action = action.as_str(),
        text_len = text.len(),
        "Received process request"
    );

    let result = apply_action(&state.engine, action, &text);

    debug!(
        action = action.as_str(),
        result_len = result.len(),
        "Processed request"
    );

    Ok(Json(ProcessResponse { result }))
}

/// Validate the request per the collaborator contract: both fields must be
/// present and non-empty after trimming, and the action must be known.
fn validate_request(request: &ProcessRequest) -> Result<(String, Action), ApiError> {
    let (Some(text), Some(action)) = (&request.text, &request.action) else {
        return Err(ApiError::MissingFields);
    };

    let text = text.trim();
    let action = action.trim();
    if text.is_empty() || action.is_empty() {
        return Err(ApiError::EmptyFields);
    }

    let action = Action::parse(action)?;
    Ok((text.to_string(), action))
}

/// Dispatch a validated action to the corresponding engine operation.
///
/// Every operation is total over string input, so this cannot fail once
/// the engine exists.
fn apply_action(engine: &SubstitutionCipher, action: Action, text: &str) -> String {
    match action {
        Action::Encrypt => engine.encrypt(text),
        Action::FullDecrypt => engine.full_decrypt(text),
        Action::SimpleDecrypt => engine.decrypt(text),
        Action::ReverseSub => engine.substitute_names(text, NameDirection::Reverse),
    }
}

/// Handle `GET /health`.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "keymask-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handle `GET /`: service description with the supported action list.
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "keymask",
        version: crate::VERSION,
        supported_actions: supported_actions(),
        name_dictionary_entries: state.engine.names().len(),
    })
}
