//! Configuration for OllamaBrain.

use brain_core::BrainError;
use std::env;
use std::path::Path;
use std::time::Duration;

/// Default Ollama server URL.
pub const DEFAULT_API_URL: &str = "http://localhost:11434";

/// Default model name.
pub const DEFAULT_MODEL: &str = "mistral";

/// Configuration for OllamaBrain.
#[derive(Debug, Clone)]
pub struct OllamaBrainConfig {
    /// Ollama server URL, without a trailing slash.
    pub api_url: String,

    /// Model name. Fixed for the lifetime of the brain.
    pub model: String,

    /// Optional system prompt.
    pub system_prompt: Option<String>,

    /// Temperature for generation.
    pub temperature: Option<f32>,

    /// Maximum tokens to generate (`num_predict`).
    pub max_tokens: Option<u32>,

    /// HTTP timeout applied by the client. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for OllamaBrainConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
            temperature: None,
            max_tokens: None,
            timeout: None,
        }
    }
}

impl OllamaBrainConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `OLLAMA_API_URL` - Server URL (default: http://localhost:11434)
    /// - `OLLAMA_MODEL` - Model name (default: mistral)
    /// - `OLLAMA_SYSTEM_PROMPT` - System prompt (overrides prompt file)
    /// - `OLLAMA_PROMPT_FILE` - Path to system prompt file (default: none)
    /// - `OLLAMA_TEMPERATURE` - Temperature (default: model default)
    /// - `OLLAMA_MAX_TOKENS` - Max tokens to generate (default: model default)
    /// - `OLLAMA_TIMEOUT_SECS` - HTTP timeout in seconds (default: none)
    ///
    /// Unparseable numeric values are ignored. An empty model name is an error.
    pub fn from_env() -> Result<Self, BrainError> {
        let api_url = env::var("OLLAMA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        // System prompt: env var takes precedence, then an explicitly named file.
        // Without either, requests carry no `system` field.
        let system_prompt = match env::var("OLLAMA_SYSTEM_PROMPT") {
            Ok(prompt) => Some(prompt),
            Err(_) => env::var("OLLAMA_PROMPT_FILE").ok().and_then(load_prompt_file),
        };

        let temperature = env::var("OLLAMA_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());

        let max_tokens = env::var("OLLAMA_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        let timeout = env::var("OLLAMA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs);

        let config = Self {
            api_url,
            model,
            system_prompt,
            temperature,
            max_tokens,
            timeout,
        }
        .normalized();

        config.validate()?;
        Ok(config)
    }

    /// Create a new config builder.
    pub fn builder() -> OllamaBrainConfigBuilder {
        OllamaBrainConfigBuilder::default()
    }

    /// Check that the configuration can be used to build a client.
    pub fn validate(&self) -> Result<(), BrainError> {
        if self.model.trim().is_empty() {
            return Err(BrainError::Configuration("model name is empty".to_string()));
        }
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(BrainError::Configuration(format!(
                "api_url must start with http:// or https://, got {:?}",
                self.api_url
            )));
        }
        Ok(())
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_url.trim().trim_end_matches('/').to_string();
        self.api_url = trimmed;
        self
    }
}

/// Builder for OllamaBrainConfig.
#[derive(Debug, Default)]
pub struct OllamaBrainConfigBuilder {
    config: OllamaBrainConfig,
}

impl OllamaBrainConfigBuilder {
    /// Set the server URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the system prompt.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = Some(prompt.into());
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the HTTP timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Load system prompt from a file.
    ///
    /// If the file exists and is non-empty, sets the system prompt.
    pub fn load_prompt_file(mut self, path: impl AsRef<Path>) -> Self {
        if let Some(prompt) = load_prompt_file(path) {
            self.config.system_prompt = Some(prompt);
        }
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OllamaBrainConfig {
        self.config.normalized()
    }
}

/// Load a prompt file, returning None if not found or empty.
fn load_prompt_file(path: impl AsRef<Path>) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OllamaBrainConfig::default();

        assert_eq!(config.api_url, "http://localhost:11434");
        assert_eq!(config.model, "mistral");
        assert!(config.system_prompt.is_none());
        assert!(config.temperature.is_none());
        assert!(config.max_tokens.is_none());
        assert!(config.timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_all_options() {
        let config = OllamaBrainConfig::builder()
            .api_url("http://gpu-box:11434/")
            .model("llama3")
            .system_prompt("You are terse")
            .temperature(0.1)
            .max_tokens(256)
            .timeout(Duration::from_secs(30))
            .build();

        assert_eq!(config.api_url, "http://gpu-box:11434");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.system_prompt.as_deref(), Some("You are terse"));
        assert_eq!(config.temperature, Some(0.1));
        assert_eq!(config.max_tokens, Some(256));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let config = OllamaBrainConfig::builder().model("  ").build();
        match config.validate() {
            Err(BrainError::Configuration(msg)) => assert!(msg.contains("model")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let config = OllamaBrainConfig::builder().api_url("localhost:11434").build();
        assert!(matches!(config.validate(), Err(BrainError::Configuration(_))));
    }

    #[test]
    fn test_load_prompt_file_missing() {
        let config = OllamaBrainConfig::builder()
            .load_prompt_file("/definitely/not/here/SYSTEM_PROMPT.md")
            .build();
        assert!(config.system_prompt.is_none());
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_ollama_vars() {
            std::env::remove_var("OLLAMA_API_URL");
            std::env::remove_var("OLLAMA_MODEL");
            std::env::remove_var("OLLAMA_SYSTEM_PROMPT");
            std::env::remove_var("OLLAMA_TEMPERATURE");
            std::env::remove_var("OLLAMA_MAX_TOKENS");
            std::env::remove_var("OLLAMA_TIMEOUT_SECS");
            std::env::remove_var("OLLAMA_PROMPT_FILE");
        }

        // Scenario 1: nothing set, defaults used
        clear_all_ollama_vars();
        let config = OllamaBrainConfig::from_env().unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.system_prompt.is_none());
        assert!(config.temperature.is_none());
        assert!(config.timeout.is_none());

        // Scenario 2: all vars set
        clear_all_ollama_vars();
        std::env::set_var("OLLAMA_API_URL", "http://10.0.0.5:11434/");
        std::env::set_var("OLLAMA_MODEL", "phi3");
        std::env::set_var("OLLAMA_SYSTEM_PROMPT", "Test prompt");
        std::env::set_var("OLLAMA_TEMPERATURE", "0.3");
        std::env::set_var("OLLAMA_MAX_TOKENS", "128");
        std::env::set_var("OLLAMA_TIMEOUT_SECS", "45");

        let config = OllamaBrainConfig::from_env().unwrap();
        assert_eq!(config.api_url, "http://10.0.0.5:11434");
        assert_eq!(config.model, "phi3");
        assert_eq!(config.system_prompt, Some("Test prompt".to_string()));
        assert_eq!(config.temperature, Some(0.3));
        assert_eq!(config.max_tokens, Some(128));
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));

        // Scenario 3: garbage numbers are ignored
        clear_all_ollama_vars();
        std::env::set_var("OLLAMA_TEMPERATURE", "warm");
        std::env::set_var("OLLAMA_MAX_TOKENS", "-1");
        let config = OllamaBrainConfig::from_env().unwrap();
        assert!(config.temperature.is_none());
        assert!(config.max_tokens.is_none());

        // Scenario 4: empty model is a configuration error
        clear_all_ollama_vars();
        std::env::set_var("OLLAMA_MODEL", "");
        let result = OllamaBrainConfig::from_env();
        assert!(matches!(result, Err(BrainError::Configuration(_))));

        // Scenario 5: a prompt file is only read when named
        let prompt_path = std::env::temp_dir().join(format!(
            "ollama-brain-prompt-{}.md",
            std::process::id()
        ));
        std::fs::write(&prompt_path, "  From file  \n").unwrap();

        clear_all_ollama_vars();
        let config = OllamaBrainConfig::from_env().unwrap();
        assert!(config.system_prompt.is_none());

        std::env::set_var("OLLAMA_PROMPT_FILE", &prompt_path);
        let config = OllamaBrainConfig::from_env().unwrap();
        assert_eq!(config.system_prompt.as_deref(), Some("From file"));

        // Scenario 6: the env prompt wins over the file
        std::env::set_var("OLLAMA_SYSTEM_PROMPT", "From env");
        let config = OllamaBrainConfig::from_env().unwrap();
        assert_eq!(config.system_prompt.as_deref(), Some("From env"));

        // Cleanup
        let _ = std::fs::remove_file(&prompt_path);
        clear_all_ollama_vars();
    }
}
