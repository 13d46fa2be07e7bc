//! Ollama API request and response types.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model name
    pub model: String,
    /// The prompt to complete
    pub prompt: String,
    /// System prompt overriding the one in the Modelfile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Always false: the reply is returned as a single JSON object
    pub stream: bool,
    /// Sampling options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

/// Model parameters for a generate request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

impl GenerateOptions {
    /// Build options, returning `None` when nothing is set so the field is omitted.
    pub fn from_parts(temperature: Option<f32>, num_predict: Option<u32>) -> Option<Self> {
        if temperature.is_none() && num_predict.is_none() {
            None
        } else {
            Some(Self {
                temperature,
                num_predict,
            })
        }
    }
}

/// Response body of a non-streaming `POST /api/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub model: String,
    /// The generated text
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub done: bool,
    /// Number of tokens in the prompt
    #[serde(default)]
    pub prompt_eval_count: Option<u32>,
    /// Number of tokens in the reply
    #[serde(default)]
    pub eval_count: Option<u32>,
}

/// Error body returned by Ollama on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Response body of `GET /api/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

/// A locally available model.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelTag {
    pub name: String,
}
