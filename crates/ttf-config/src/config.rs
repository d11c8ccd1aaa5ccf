use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level generator configuration (`ttf.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForgeConfig {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub oracle: OracleConfig,
}

/// Bounds for the per-division retry loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Generate-repair-validate cycles allowed per division before the run
    /// fails.
    #[serde(default = "default_retry_budget")]
    pub retry_budget: u32,
    /// Timeout for one oracle call. A timeout counts as a failed attempt;
    /// there is no cancellation of the in-flight call.
    #[serde(default = "default_oracle_timeout_secs")]
    pub oracle_timeout_secs: u64,
    /// Bounded passes of the distribution optimizer.
    #[serde(default = "default_optimizer_passes")]
    pub optimizer_passes: u32,
}

fn default_retry_budget() -> u32 {
    5
}

fn default_oracle_timeout_secs() -> u64 {
    120
}

fn default_optimizer_passes() -> u32 {
    3
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            retry_budget: default_retry_budget(),
            oracle_timeout_secs: default_oracle_timeout_secs(),
            optimizer_passes: default_optimizer_passes(),
        }
    }
}

/// Ordered roster of chat-completion backends. The first backend with a key
/// present in the environment is primary; the rest are failover targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    #[serde(default = "default_backends")]
    pub backends: Vec<OracleBackendConfig>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            backends: default_backends(),
        }
    }
}

/// One OpenAI-compatible chat-completion backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleBackendConfig {
    pub name: String,
    pub base_url: String,
    /// Environment variable holding the API key. Backends whose variable is
    /// unset are skipped at client construction.
    pub api_key_env: String,
    pub model: String,
}

fn default_backends() -> Vec<OracleBackendConfig> {
    vec![
        OracleBackendConfig {
            name: "groq".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
        },
        OracleBackendConfig {
            name: "huggingface".to_string(),
            base_url: "https://router.huggingface.co/v1".to_string(),
            api_key_env: "HF_API_KEY".to_string(),
            model: "Qwen/Qwen2.5-72B-Instruct".to_string(),
        },
    ]
}

impl ForgeConfig {
    /// Load configuration from a TOML file. A missing file yields defaults;
    /// a malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
