// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use thiserror::Error;

use crate::models::{PasswordPolicy, DIGITS, LOWERCASE, UPPERCASE};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("no character class is enabled, the character pool is empty")]
    EmptyPool,

    #[error("no candidate satisfied the policy within {attempts} attempts")]
    RetryLimitExceeded { attempts: usize },
}

pub type Result<T> = std::result::Result<T, GenerationError>;

#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    policy: PasswordPolicy,
}

impl PasswordGenerator {
    /// Generator over the default policy: all classes, length 12.
    pub fn new() -> Self {
        Self {
            policy: PasswordPolicy::default(),
        }
    }

    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Replaces the owned policy, discarding the previous one.
    pub fn set_policy(&mut self, policy: PasswordPolicy) {
        self.policy = policy;
    }

    pub fn with_lowercase(mut self) -> Self {
        self.policy.enable_lowercase();
        self
    }

    pub fn with_uppercase(mut self) -> Self {
        self.policy.enable_uppercase();
        self
    }

    pub fn with_numbers(mut self) -> Self {
        self.policy.enable_numbers();
        self
    }

    pub fn with_symbols(mut self) -> Self {
        self.policy.enable_symbols();
        self
    }

    pub fn with_custom_symbols(mut self, symbols: &str) -> Self {
        self.policy.enable_custom_symbols(symbols);
        self
    }

    pub fn with_exclude_similar(mut self) -> Self {
        self.policy.enable_exclude_similar();
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.policy.set_length(length);
        self
    }

    /// Generates one password satisfying the policy.
    ///
    /// Samples `length` characters uniformly (with replacement) from the
    /// policy's pool using the operating system CSPRNG, then validates class
    /// coverage. The first candidate containing at least one character from
    /// every enabled class and none from any disabled class is returned.
    /// Terminates after at most `retry_limit` rounds.
    pub fn generate(&self) -> Result<String> {
        let pool: Vec<char> = self.policy.character_pool().chars().collect();
        if pool.is_empty() {
            return Err(GenerationError::EmptyPool);
        }
        log::trace!("character pool holds {} characters", pool.len());

        let length = self.policy.length();
        let retry_limit = self.policy.retry_limit();
        let dist = Uniform::from(0..pool.len());
        let mut rng = OsRng;

        for attempt in 1..=retry_limit {
            let candidate: String = (0..length).map(|_| pool[dist.sample(&mut rng)]).collect();
            if satisfies_policy(&self.policy, &candidate) {
                return Ok(candidate);
            }
            log::debug!(
                "candidate missed an enabled class, attempt {}/{}",
                attempt,
                retry_limit
            );
        }

        log::debug!("retry budget of {} attempts exhausted", retry_limit);
        Err(GenerationError::RetryLimitExceeded {
            attempts: retry_limit,
        })
    }

    /// Runs `generate` `count` times. Results keep request order and fail
    /// independently; one exhausted budget does not abort the rest.
    pub fn generate_many(&self, count: usize) -> Vec<Result<String>> {
        (0..count).map(|_| self.generate()).collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A candidate passes when every enabled class contributes at least one
/// character and no disabled class contributes any. The absence check looks
/// deliberately redundant (the pool excludes disabled alphabets) but catches
/// custom symbol sets that overlap another class.
fn satisfies_policy(policy: &PasswordPolicy, candidate: &str) -> bool {
    let contains_any = |alphabet: &str| candidate.chars().any(|c| alphabet.contains(c));

    contains_any(LOWERCASE) == policy.has_lowercase()
        && contains_any(UPPERCASE) == policy.has_uppercase()
        && contains_any(DIGITS) == policy.has_numbers()
        && contains_any(policy.symbol_set()) == policy.has_symbols()
}
