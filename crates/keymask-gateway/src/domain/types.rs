//! Request and response types for the gateway API.

use serde::{Deserialize, Serialize};

/// Body of a `POST /process` request.
///
/// Both fields are optional at the deserialization layer so that a missing
/// field and an empty field produce distinct client errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProcessRequest {
    /// Text to transform
    pub text: Option<String>,
    /// Action keyword selecting the engine operation
    pub action: Option<String>,
}

/// Successful `POST /process` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Transformed text
    pub result: String,
}

/// `GET /` service description.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    /// Service name
    pub service: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Supported action keywords
    pub supported_actions: Vec<&'static str>,
    /// Number of entries in the loaded name dictionary
    pub name_dictionary_entries: usize,
}
