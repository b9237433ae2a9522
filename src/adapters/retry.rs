use crate::core::{AnimalLookup, AnimalSource, Lookup, NamePrompt};
use crate::utils::error::{AnimalsError, Result};

pub const DEFAULT_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_ANIMAL: &str = "fox";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub default_animal: String,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            default_animal: DEFAULT_ANIMAL.to_string(),
        }
    }
}

/// 詢問一次名稱並查詢一次，不重試
pub struct PromptedSource<L: AnimalLookup, P: NamePrompt> {
    lookup: L,
    prompt: P,
}

impl<L: AnimalLookup, P: NamePrompt> PromptedSource<L, P> {
    pub fn new(lookup: L, prompt: P) -> Self {
        Self { lookup, prompt }
    }
}

#[async_trait::async_trait]
impl<L: AnimalLookup, P: NamePrompt> AnimalSource for PromptedSource<L, P> {
    async fn fetch(&self) -> Result<Lookup> {
        let name = self
            .prompt
            .read_name()?
            .ok_or_else(|| AnimalsError::InputError {
                message: "no animal name was entered".to_string(),
            })?;

        let animals = self.lookup.lookup(&name).await;
        Ok(Lookup::named(name, animals))
    }
}

/// Re-prompts up to `max_attempts` times, then queries the default animal once.
pub struct RetryingSource<L: AnimalLookup, P: NamePrompt> {
    lookup: L,
    prompt: P,
    policy: RetryPolicy,
}

impl<L: AnimalLookup, P: NamePrompt> RetryingSource<L, P> {
    pub fn new(lookup: L, prompt: P, policy: RetryPolicy) -> Self {
        Self {
            lookup,
            prompt,
            policy,
        }
    }
}

#[async_trait::async_trait]
impl<L: AnimalLookup, P: NamePrompt> AnimalSource for RetryingSource<L, P> {
    async fn fetch(&self) -> Result<Lookup> {
        for attempt in 1..=self.policy.max_attempts {
            let Some(name) = self.prompt.read_name()? else {
                tracing::info!("No more input after {} attempt(s)", attempt - 1);
                break;
            };

            // 空白名稱不送出請求，但仍算一次嘗試
            if name.is_empty() {
                tracing::warn!(
                    "⚠️ Empty animal name (attempt {}/{})",
                    attempt,
                    self.policy.max_attempts
                );
                continue;
            }

            let animals = self.lookup.lookup(&name).await;
            if !animals.is_empty() {
                return Ok(Lookup::named(name, animals));
            }

            tracing::warn!(
                "⚠️ No animal named '{}' (attempt {}/{})",
                name,
                attempt,
                self.policy.max_attempts
            );
        }

        let fallback = &self.policy.default_animal;
        tracing::info!("🔁 Falling back to default animal '{}'", fallback);
        let animals = self.lookup.lookup(fallback).await;
        Ok(Lookup::named(fallback.clone(), animals))
    }
}
