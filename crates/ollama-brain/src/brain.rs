//! OllamaBrain implementation using the Ollama HTTP API.

use brain_core::{async_trait, Brain, BrainError};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{ApiError, GenerateOptions, GenerateRequest, GenerateResponse, TagsResponse};
use crate::config::OllamaBrainConfig;

/// A model client that forwards prompts to an Ollama server.
///
/// The brain is stateless apart from its HTTP client: every call is a single
/// `/api/generate` request with streaming disabled, and the reply text is
/// returned exactly as the server produced it.
pub struct OllamaBrain {
    client: Client,
    config: OllamaBrainConfig,
}

impl OllamaBrain {
    /// Create a new OllamaBrain with the given configuration.
    ///
    /// No request is made here; an unreachable server only surfaces on the
    /// first `invoke`.
    pub fn new(config: OllamaBrainConfig) -> Result<Self, BrainError> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BrainError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "OllamaBrain initialized with model: {}, url: {}, system_prompt: {}",
            config.model,
            config.api_url,
            config.system_prompt.is_some()
        );

        Ok(Self { client, config })
    }

    /// Create an OllamaBrain from environment variables.
    ///
    /// See [`OllamaBrainConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, BrainError> {
        let config = OllamaBrainConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OllamaBrainConfig {
        &self.config
    }

    /// Get the model name this brain sends every prompt to.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_request(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            system: self.config.system_prompt.clone(),
            stream: false,
            options: GenerateOptions::from_parts(self.config.temperature, self.config.max_tokens),
        }
    }

    /// Make a generate request to the Ollama API.
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, BrainError> {
        let url = format!("{}/api/generate", self.config.api_url);
        let request = self.build_request(prompt);

        debug!("Sending request to Ollama: {:?}", request);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(BrainError::ProcessingFailed(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error
                )));
            }

            return Err(BrainError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BrainError::ProcessingFailed(format!("Failed to parse response: {}", e)))?;

        Ok(generated)
    }
}

fn map_transport_error(err: reqwest::Error) -> BrainError {
    if err.is_timeout() {
        BrainError::Timeout
    } else {
        BrainError::Network(format!("Failed to send request: {}", err))
    }
}

#[async_trait]
impl Brain for OllamaBrain {
    async fn invoke(&self, prompt: &str) -> Result<String, BrainError> {
        let generated = self.generate(prompt).await?;

        if !generated.done {
            warn!("Ollama reported an unfinished generation for model {}", generated.model);
        }
        if let (Some(prompt_tokens), Some(reply_tokens)) =
            (generated.prompt_eval_count, generated.eval_count)
        {
            debug!(
                "Token usage - prompt: {}, completion: {}",
                prompt_tokens, reply_tokens
            );
        }

        Ok(generated.response)
    }

    fn name(&self) -> &str {
        "OllamaBrain"
    }

    async fn is_ready(&self) -> bool {
        let url = format!("{}/api/tags", self.config.api_url);

        let response = match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!("Ollama readiness check failed with status {}", response.status());
                return false;
            }
            Err(e) => {
                warn!("Ollama readiness check failed: {}", e);
                return false;
            }
        };

        match response.json::<TagsResponse>().await {
            Ok(tags) => {
                let tagged = format!("{}:", self.config.model);
                let available = tags
                    .models
                    .iter()
                    .any(|m| m.name == self.config.model || m.name.starts_with(&tagged));
                if !available {
                    warn!("Model {} is not pulled on the Ollama server", self.config.model);
                }
                available
            }
            Err(e) => {
                warn!("Could not parse Ollama model list: {}", e);
                false
            }
        }
    }
}
