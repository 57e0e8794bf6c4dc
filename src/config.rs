//! Application configuration.
//!
//! Values are layered with priority: config.toml > environment (.env) > default.
//! The provider API key is only ever read from the environment.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// ==================== Defaults ====================

/// Server address to bind to
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Server port
pub const DEFAULT_PORT: u16 = 8000;

/// OpenAI-compatible Groq endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model used for study plans
pub const DEFAULT_PLAN_MODEL: &str = "llama-3.3-70b-versatile";

/// Model used for quizzes
pub const DEFAULT_QUIZ_MODEL: &str = "llama-3.1-8b-instant";

pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 1024;
pub const DEFAULT_TOP_P: f32 = 1.0;

/// Per-attempt timeout for the chat-completion call
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Extra attempts after the first one fails with a retryable error
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Hard ceiling on retries regardless of configuration
pub const MAX_RETRIES_CAP: u32 = 5;

/// Environment variable holding the provider credential
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

// ==================== Errors ====================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY is missing. Set it in the environment or the .env file.")]
    MissingApiKey,

    #[error("Failed to load config file {path}: {message}")]
    InvalidFile { path: String, message: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

// ==================== File structure ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerSection>,
    pub llm: Option<LlmSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LlmSection {
    pub base_url: Option<String>,
    pub plan_model: Option<String>,
    pub quiz_model: Option<String>,
    pub temperature: Option<f32>,
    pub max_completion_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub request_timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub draft_pass: Option<bool>,
}

impl FileConfig {
    /// Read a config file. A missing file is not an error; an unreadable or
    /// malformed one is.
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::InvalidFile {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            }
        };

        toml::from_str(&contents)
            .map(Some)
            .map_err(|e| ConfigError::InvalidFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }
}

// ==================== Resolved settings ====================

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// Get the full server bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub plan_model: String,
    pub quiz_model: String,
    pub temperature: f32,
    pub max_completion_tokens: u32,
    pub top_p: f32,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    /// Generate a draft outline first, then ask the model to refine it
    pub draft_pass: bool,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
}

impl Settings {
    /// Load settings from `.env`, the process environment, and the config file
    /// named by `CONFIG_PATH` (default `config.toml`).
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let file = FileConfig::read(Path::new(&path))?;
        if file.is_some() {
            tracing::info!("Using config file: {}", path);
        }

        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Resolve settings from an optional parsed file and an environment lookup.
    pub fn from_sources<F>(file: Option<FileConfig>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();
        let server = file.server.unwrap_or_default();
        let llm = file.llm.unwrap_or_default();

        let api_key = env(API_KEY_ENV)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = match server.port {
            Some(port) => port,
            None => parse_env(&env, "PORT")?.unwrap_or(DEFAULT_PORT),
        };

        let max_retries = match llm.max_retries {
            Some(n) => n,
            None => parse_env(&env, "GROQ_MAX_RETRIES")?.unwrap_or(DEFAULT_MAX_RETRIES),
        }
        .min(MAX_RETRIES_CAP);

        let request_timeout_secs = match llm.request_timeout_secs {
            Some(n) => n,
            None => parse_env(&env, "GROQ_TIMEOUT_SECS")?.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        };
        if request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_secs",
                value: "0".to_string(),
            });
        }

        let draft_pass = match llm.draft_pass {
            Some(flag) => flag,
            None => parse_env(&env, "PLAN_DRAFT_PASS")?.unwrap_or(false),
        };

        Ok(Self {
            server: ServerSettings {
                host: server
                    .host
                    .or_else(|| env("HOST"))
                    .unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            llm: LlmSettings {
                api_key,
                base_url: llm
                    .base_url
                    .or_else(|| env("GROQ_BASE_URL"))
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                plan_model: llm
                    .plan_model
                    .or_else(|| env("GROQ_PLAN_MODEL"))
                    .unwrap_or_else(|| DEFAULT_PLAN_MODEL.to_string()),
                quiz_model: llm
                    .quiz_model
                    .or_else(|| env("GROQ_QUIZ_MODEL"))
                    .unwrap_or_else(|| DEFAULT_QUIZ_MODEL.to_string()),
                temperature: llm.temperature.unwrap_or(DEFAULT_TEMPERATURE),
                max_completion_tokens: llm
                    .max_completion_tokens
                    .unwrap_or(DEFAULT_MAX_COMPLETION_TOKENS),
                top_p: llm.top_p.unwrap_or(DEFAULT_TOP_P),
                request_timeout_secs,
                max_retries,
                draft_pass,
            },
        })
    }
}

fn parse_env<F, T>(env: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match env(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
