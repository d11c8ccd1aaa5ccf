//! Candidate oracle capability.

use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::spec::GenerationSpec;

/// Produces a candidate slot batch (as raw text) from a generation spec, or
/// fails. Output is untrusted; the engine parses and validates it.
#[async_trait]
pub trait SlotOracle: Send + Sync {
    async fn propose(&self, spec: &GenerationSpec) -> Result<String>;
}

/// Scripted stand-in oracle for deterministic engine tests: returns its
/// canned responses in order, then fails.
#[derive(Debug, Default)]
pub struct ScriptedOracle {
    responses: Mutex<Vec<Result<String, String>>>,
    /// Specs seen so far, for asserting on feedback accumulation.
    prompts: Mutex<Vec<String>>,
}

impl ScriptedOracle {
    pub fn new(responses: Vec<Result<String, String>>) -> Self {
        let mut reversed = responses;
        reversed.reverse();
        Self {
            responses: Mutex::new(reversed),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Oracle that always answers with the same body.
    pub fn always(body: &str) -> Self {
        Self::new(vec![Ok(body.to_string()); 16])
    }

    pub fn seen_prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SlotOracle for ScriptedOracle {
    async fn propose(&self, spec: &GenerationSpec) -> Result<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(spec.prompt().to_string());
        }
        let next = self
            .responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop());
        match next {
            Some(Ok(body)) => Ok(body),
            Some(Err(message)) => bail!(message),
            None => bail!("scripted oracle has no responses left"),
        }
    }
}
