// src/lib.rs
//! Configurable password generation.
//!
//! A [`PasswordGenerator`] owns a [`PasswordPolicy`] describing which
//! character classes must appear and how long the output is. Generation
//! samples from the pool of enabled alphabets with the OS CSPRNG and retries
//! until a candidate covers every enabled class, up to the policy's retry
//! budget.

mod analysis;
mod generators;
mod models;

pub use analysis::{score_password, StrengthLevel};
pub use generators::{GenerationError, PasswordGenerator};
pub use models::{PasswordPolicy, DEFAULT_SYMBOLS, DIGITS, LOWERCASE, UPPERCASE};
