//! OpenAI-compatible chat-completion client.
//!
//! Backends are tried strictly in roster order (the first is primary, the
//! rest are fallbacks). A rate-limited or quota-exhausted backend enters a
//! cooldown and the next one is tried; only when every backend is cooling
//! down does a call fail, which the orchestrator records as an oracle
//! failure for that attempt.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{info, warn};
use ttf_config::OracleConfig;
use ttf_engine::spec::{GenerationSpec, ORACLE_SYSTEM_PROMPT};
use ttf_engine::SlotOracle;

const DEFAULT_COOLDOWN: Duration = Duration::from_secs(600);

/// One chat-completion backend with its resolved API key.
#[derive(Debug, Clone)]
pub struct ChatBackend {
    pub name: String,
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

/// reqwest-backed [`SlotOracle`] over an ordered backend roster.
#[derive(Debug)]
pub struct FailoverOracle {
    client: reqwest::Client,
    backends: Vec<ChatBackend>,
    cooldowns: Mutex<HashMap<String, Instant>>,
}

impl FailoverOracle {
    pub fn new(backends: Vec<ChatBackend>) -> Result<Self> {
        if backends.is_empty() {
            bail!("at least one oracle backend is required");
        }
        Ok(Self {
            client: reqwest::Client::new(),
            backends,
            cooldowns: Mutex::new(HashMap::new()),
        })
    }

    /// Build from config, resolving each backend's API key from its
    /// environment variable. Backends with no key present are skipped.
    pub fn from_config(config: &OracleConfig) -> Result<Self> {
        let backends: Vec<ChatBackend> = config
            .backends
            .iter()
            .filter_map(|backend| {
                match std::env::var(&backend.api_key_env) {
                    Ok(key) if !key.is_empty() => Some(ChatBackend {
                        name: backend.name.clone(),
                        base_url: backend.base_url.trim_end_matches('/').to_string(),
                        api_key: key,
                        model: backend.model.clone(),
                    }),
                    _ => {
                        warn!(
                            backend = %backend.name,
                            env = %backend.api_key_env,
                            "skipping oracle backend, API key not set"
                        );
                        None
                    }
                }
            })
            .collect();

        if backends.is_empty() {
            bail!("no oracle backend has an API key configured");
        }
        Self::new(backends)
    }

    async fn run_chat_completion(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        for backend in &self.backends {
            if self.in_cooldown(&backend.name) {
                continue;
            }

            info!(backend = %backend.name, model = %backend.model, "calling oracle backend");
            let url = format!("{}/chat/completions", backend.base_url);
            let response = self
                .client
                .post(&url)
                .bearer_auth(&backend.api_key)
                .json(&json!({
                    "model": backend.model,
                    "messages": [
                        {"role": "system", "content": system_prompt},
                        {"role": "user", "content": user_prompt}
                    ],
                    "temperature": 0.1
                }))
                .send()
                .await
                .with_context(|| format!("oracle request failed for backend {}", backend.name))?;

            let status = response.status();
            let headers = response.headers().clone();
            let body = response
                .text()
                .await
                .with_context(|| format!("failed to read response from {}", backend.name))?;

            if status.is_success() {
                return completion_content(&body);
            }

            if is_rate_or_quota_error(status, &body) {
                let cooldown = parse_retry_after(&headers).unwrap_or(DEFAULT_COOLDOWN);
                warn!(
                    backend = %backend.name,
                    status = %status,
                    cooldown_secs = cooldown.as_secs(),
                    "backend rate-limited, trying next"
                );
                self.mark_cooldown(&backend.name, cooldown);
                continue;
            }

            return Err(anyhow!(
                "oracle backend {} failed: status {status}, body {body}",
                backend.name
            ));
        }

        bail!("all oracle backends are rate-limited or unavailable");
    }

    fn in_cooldown(&self, name: &str) -> bool {
        self.cooldowns
            .lock()
            .map(|cooldowns| {
                cooldowns
                    .get(name)
                    .is_some_and(|until| *until > Instant::now())
            })
            .unwrap_or(false)
    }

    fn mark_cooldown(&self, name: &str, cooldown: Duration) {
        if let Ok(mut cooldowns) = self.cooldowns.lock() {
            cooldowns.insert(name.to_string(), Instant::now() + cooldown);
        }
    }
}

#[async_trait]
impl SlotOracle for FailoverOracle {
    async fn propose(&self, spec: &GenerationSpec) -> Result<String> {
        self.run_chat_completion(ORACLE_SYSTEM_PROMPT, spec.prompt())
            .await
    }
}

/// Pull `choices[0].message.content` out of a chat-completion body.
fn completion_content(body: &str) -> Result<String> {
    let value: Value =
        serde_json::from_str(body).context("oracle response body is not JSON")?;
    value["choices"][0]["message"]["content"]
        .as_str()
        .map(ToOwned::to_owned)
        .ok_or_else(|| anyhow!("oracle response has no message content"))
}

fn is_rate_or_quota_error(status: StatusCode, body: &str) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::PAYMENT_REQUIRED
        || body.contains("rate_limit")
        || body.contains("insufficient_quota")
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
