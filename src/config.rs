use std::{env, str::FromStr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

pub const DEFAULT_HF_MODEL: &str = "meta-llama/Meta-Llama-3-8B-Instruct";
pub const DEFAULT_HF_API_BASE: &str = "https://router.huggingface.co/v1";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Hugging Face API Key is missing. Set HUGGINGFACE_API_KEY in the environment or a .env file.")]
    MissingApiKey,

    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub hf_api_key: SecretString,
    pub hf_model: String,
    pub hf_api_base: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub text_char_limit: usize,
    pub fetch_timeout_secs: u64,
    pub inference_timeout_secs: u64,
    pub inference_max_retries: u32,
    pub max_upload_bytes: usize,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Fails when the inference credential is absent or blank, or when a
    /// numeric setting does not parse. Callers are expected to load `.env`
    /// beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        let hf_api_key = env::var("HUGGINGFACE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            hf_api_key: SecretString::from(hf_api_key),
            hf_model: env::var("HF_MODEL").unwrap_or_else(|_| DEFAULT_HF_MODEL.to_string()),
            hf_api_base: env::var("HF_API_BASE")
                .unwrap_or_else(|_| DEFAULT_HF_API_BASE.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parse_var("WEB_SERVER_PORT", 8080)?,
            text_char_limit: parse_var("TEXT_CHAR_LIMIT", 5000)?,
            fetch_timeout_secs: parse_var("FETCH_TIMEOUT_SECS", 10)?,
            inference_timeout_secs: parse_var("INFERENCE_TIMEOUT_SECS", 45)?,
            inference_max_retries: parse_var("INFERENCE_MAX_RETRIES", 2)?,
            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        })
    }

    /// Rejects settings that would make the service unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hf_api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        if self.text_char_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "TEXT_CHAR_LIMIT",
                value: "0".to_string(),
            });
        }

        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "FETCH_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        if self.inference_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "INFERENCE_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            hf_api_key: SecretString::from("hf_test_key".to_string()),
            hf_model: DEFAULT_HF_MODEL.to_string(),
            hf_api_base: "http://127.0.0.1:9/v1".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            text_char_limit: 5000,
            fetch_timeout_secs: 2,
            inference_timeout_secs: 2,
            inference_max_retries: 0,
            max_upload_bytes: 1024 * 1024,
            cors_allowed_origin: None,
        }
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(default),
    }
}
