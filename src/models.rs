// src/models.rs
use serde::{Deserialize, Serialize};

// Class alphabets. Validation checks membership against these, so they are
// public alongside the policy itself.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*";

// Visually confusable characters filtered out when exclude_similar is set.
const SIMILAR: &str = "il1Lo0O";

// Password generation policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    has_lowercase: bool,
    has_uppercase: bool,
    has_numbers: bool,
    has_symbols: bool,
    symbol_set: String,
    length: usize,
    retry_limit: usize,
    exclude_similar: bool,
}

impl PasswordPolicy {
    pub const DEFAULT_LENGTH: usize = 12;
    pub const DEFAULT_RETRY_LIMIT: usize = 100;

    // Advisory bounds for callers to consult; set_length does not enforce them.
    pub const MIN_LENGTH: usize = 4;
    pub const MAX_LENGTH: usize = 100;

    pub fn new(
        lowercase: bool,
        uppercase: bool,
        numbers: bool,
        symbols: bool,
        length: usize,
        retry_limit: usize,
    ) -> Self {
        Self {
            has_lowercase: lowercase,
            has_uppercase: uppercase,
            has_numbers: numbers,
            has_symbols: symbols,
            symbol_set: DEFAULT_SYMBOLS.to_string(),
            length,
            retry_limit,
            exclude_similar: false,
        }
    }

    /// Policy with every class enabled and the given length.
    pub fn with_length(length: usize) -> Self {
        Self::new(true, true, true, true, length, Self::DEFAULT_RETRY_LIMIT)
    }

    pub fn enable_lowercase(&mut self) -> &mut Self {
        self.has_lowercase = true;
        self
    }

    pub fn enable_uppercase(&mut self) -> &mut Self {
        self.has_uppercase = true;
        self
    }

    pub fn enable_numbers(&mut self) -> &mut Self {
        self.has_numbers = true;
        self
    }

    /// Enables symbols using the currently configured symbol set.
    pub fn enable_symbols(&mut self) -> &mut Self {
        self.has_symbols = true;
        self
    }

    /// Replaces the symbol set wholesale and enables symbols.
    ///
    /// An empty set leaves symbols enabled but impossible to satisfy, so
    /// generation will exhaust its retry budget.
    pub fn enable_custom_symbols(&mut self, symbols: &str) -> &mut Self {
        self.symbol_set = symbols.to_string();
        self.has_symbols = true;
        self
    }

    /// Drops visually confusable characters (il1Lo0O) from the pool.
    pub fn enable_exclude_similar(&mut self) -> &mut Self {
        self.exclude_similar = true;
        self
    }

    pub fn set_length(&mut self, length: usize) -> &mut Self {
        self.length = length;
        self
    }

    pub fn has_lowercase(&self) -> bool {
        self.has_lowercase
    }

    pub fn has_uppercase(&self) -> bool {
        self.has_uppercase
    }

    pub fn has_numbers(&self) -> bool {
        self.has_numbers
    }

    pub fn has_symbols(&self) -> bool {
        self.has_symbols
    }

    pub fn symbol_set(&self) -> &str {
        &self.symbol_set
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn retry_limit(&self) -> usize {
        self.retry_limit
    }

    pub fn excludes_similar(&self) -> bool {
        self.exclude_similar
    }

    /// The sampling universe: the union of all enabled class alphabets, in
    /// fixed class order. Derived fresh on every read, so enabling a class
    /// twice cannot duplicate its alphabet.
    pub fn character_pool(&self) -> String {
        let mut pool = String::new();
        if self.has_lowercase {
            pool.push_str(LOWERCASE);
        }
        if self.has_uppercase {
            pool.push_str(UPPERCASE);
        }
        if self.has_numbers {
            pool.push_str(DIGITS);
        }
        if self.has_symbols {
            pool.push_str(&self.symbol_set);
        }
        if self.exclude_similar {
            pool.retain(|c| !SIMILAR.contains(c));
        }
        pool
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(
            true,
            true,
            true,
            true,
            Self::DEFAULT_LENGTH,
            Self::DEFAULT_RETRY_LIMIT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_enables_all_classes() {
        let policy = PasswordPolicy::default();
        assert!(policy.has_lowercase());
        assert!(policy.has_uppercase());
        assert!(policy.has_numbers());
        assert!(policy.has_symbols());
        assert_eq!(policy.length(), PasswordPolicy::DEFAULT_LENGTH);
        assert_eq!(policy.retry_limit(), PasswordPolicy::DEFAULT_RETRY_LIMIT);
        assert_eq!(policy.symbol_set(), DEFAULT_SYMBOLS);
    }

    #[test]
    fn test_pool_is_union_of_enabled_classes() {
        let policy = PasswordPolicy::new(true, false, true, false, 8, 100);
        assert_eq!(policy.character_pool(), format!("{}{}", LOWERCASE, DIGITS));
    }

    #[test]
    fn test_pool_is_empty_without_classes() {
        let policy = PasswordPolicy::new(false, false, false, false, 10, 100);
        assert!(policy.character_pool().is_empty());
    }

    #[test]
    fn test_enabling_twice_does_not_grow_pool() {
        let mut policy = PasswordPolicy::new(false, false, false, false, 8, 100);
        policy.enable_lowercase().enable_lowercase();
        assert!(policy.has_lowercase());
        assert_eq!(policy.character_pool(), LOWERCASE);
    }

    #[test]
    fn test_pool_order_ignores_enable_order() {
        let mut a = PasswordPolicy::new(false, false, false, false, 8, 100);
        a.enable_numbers().enable_lowercase();
        let mut b = PasswordPolicy::new(false, false, false, false, 8, 100);
        b.enable_lowercase().enable_numbers();
        assert_eq!(a.character_pool(), b.character_pool());
    }

    #[test]
    fn test_custom_symbols_replace_default() {
        let mut policy = PasswordPolicy::new(false, false, false, false, 4, 100);
        policy.enable_custom_symbols("§±");
        assert!(policy.has_symbols());
        assert_eq!(policy.symbol_set(), "§±");
        assert_eq!(policy.character_pool(), "§±");
    }

    #[test]
    fn test_enable_symbols_after_custom_keeps_custom_set() {
        let mut policy = PasswordPolicy::new(false, false, false, false, 4, 100);
        policy.enable_custom_symbols("§±").enable_symbols();
        assert_eq!(policy.symbol_set(), "§±");
        assert_eq!(policy.character_pool(), "§±");
    }

    #[test]
    fn test_exclude_similar_filters_pool() {
        let mut policy = PasswordPolicy::with_length(12);
        policy.enable_exclude_similar();
        let pool = policy.character_pool();
        assert!(!pool.chars().any(|c| "il1Lo0O".contains(c)));
        assert!(pool.contains('a'));
        assert!(pool.contains('2'));
    }

    #[test]
    fn test_set_length_is_not_validated() {
        let mut policy = PasswordPolicy::default();
        policy.set_length(1);
        assert_eq!(policy.length(), 1);
        policy.set_length(1000);
        assert_eq!(policy.length(), 1000);
    }

    #[test]
    fn test_policy_serde_round_trip() {
        let mut policy = PasswordPolicy::new(true, false, true, false, 20, 50);
        policy.enable_custom_symbols("#~");
        let json = serde_json::to_string(&policy).unwrap();
        let back: PasswordPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(policy, back);
    }
}
