//! Server configuration loaded from `localchat.toml`.
//!
//! All fields have sensible defaults, so a missing config file yields a
//! fully usable configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration for the localchat server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the inference engine's completion server.
    #[serde(default = "default_engine_url")]
    pub engine_url: String,

    /// Model identifier, reported for logging only; the engine owns the model.
    #[serde(default = "default_model")]
    pub model: String,

    /// Device label reported by `GET /health`.
    #[serde(default = "default_device")]
    pub device: String,

    /// Override for the fixed system preamble prepended to every prompt.
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// Upper bound in seconds on a single generation call.
    #[serde(default = "default_generation_timeout_secs")]
    pub generation_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_engine_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_model() -> String {
    "tinyllama-1.1b-chat".to_string()
}

fn default_device() -> String {
    "cpu".to_string()
}

fn default_generation_timeout_secs() -> u64 {
    120
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            engine_url: default_engine_url(),
            model: default_model(),
            device: default_device(),
            system_prompt: None,
            generation_timeout_secs: default_generation_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Load the configuration from a TOML file.
    ///
    /// A missing file is not an error -- defaults apply.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
