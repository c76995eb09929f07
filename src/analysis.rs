// src/analysis.rs
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => StrengthLevel::Weak,
            40..=59 => StrengthLevel::Fair,
            60..=79 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::Weak => write!(f, "weak"),
            StrengthLevel::Fair => write!(f, "fair"),
            StrengthLevel::Good => write!(f, "good"),
            StrengthLevel::Strong => write!(f, "strong"),
        }
    }
}

// Heuristic strength score, 0-100
pub fn score_password(password: &str) -> u8 {
    let char_count = password.chars().count();
    let mut score = char_count.min(40) as i32;

    // Character variety
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 10;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 10;
    }

    // Penalize heavy repetition
    let distinct: HashSet<char> = password.chars().collect();
    if distinct.len() < char_count / 2 {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_scores_zero() {
        assert_eq!(score_password(""), 0);
    }

    #[test]
    fn test_variety_raises_score() {
        assert!(score_password("Abcdef1!") > score_password("abcdefgh"));
    }

    #[test]
    fn test_repetition_lowers_score() {
        assert!(score_password("aaaaaaaa") < score_password("abcdefgh"));
    }

    #[test]
    fn test_score_is_bounded() {
        let long = "Aa1!".repeat(40);
        assert!(score_password(&long) <= 100);
    }

    #[test]
    fn test_levels_from_score() {
        assert_eq!(StrengthLevel::from_score(10), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(45), StrengthLevel::Fair);
        assert_eq!(StrengthLevel::from_score(70), StrengthLevel::Good);
        assert_eq!(StrengthLevel::from_score(95), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::Strong.to_string(), "strong");
    }
}
