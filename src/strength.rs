//  ____                 ____            __ _
// |  _ \ __ _ ___ ___  / ___|_ __ __ _ / _| |_
// | |_) / _` / __/ __|| |   | '__/ _` | |_| __|
// |  __/ (_| \__ \__ \| |___| | | (_| |  _| |_
// |_|   \__,_|___/___/ \____|_|  \__,_|_|  \__|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-16
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength heuristic
//
// A length-and-diversity heuristic, not an entropy calculation. It knows
// nothing about dictionary words, repeated patterns or leaked passwords;
// use `advisor::ZxcvbnAuditor` for that kind of feedback.

use std::fmt;

use serde::Serialize;

/// Longer than this earns the first length point.
pub const LENGTH_BONUS_THRESHOLD: usize = 8;
/// Longer than this earns the second length point.
pub const LONG_LENGTH_BONUS_THRESHOLD: usize = 14;
/// Shorter than this is capped at `SHORT_PASSWORD_CAP`.
pub const SHORT_PASSWORD_THRESHOLD: usize = 8;
pub const SHORT_PASSWORD_CAP: u8 = 1;
pub const MAX_SCORE: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Empty,
    Weak,
    Fair,
    Good,
    Strong,
}

impl Classification {
    fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Classification::Weak,
            2 => Classification::Fair,
            3 => Classification::Good,
            _ => Classification::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Classification::Empty => "Empty",
            Classification::Weak => "Weak",
            Classification::Fair => "Fair",
            Classification::Good => "Good",
            Classification::Strong => "Strong",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthResult {
    pub score: u8,
    pub label: &'static str,
    pub classification: Classification,
}

impl StrengthResult {
    fn new(score: u8, classification: Classification) -> Self {
        Self {
            score,
            label: classification.label(),
            classification,
        }
    }
}

/// Which character kinds appear in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Complexity {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl Complexity {
    pub fn of(password: &str) -> Self {
        Self {
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            // anything outside [A-Za-z0-9], including spaces and non-ASCII
            symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn count(&self) -> u8 {
        [self.uppercase, self.lowercase, self.digit, self.symbol]
            .into_iter()
            .filter(|present| *present)
            .count() as u8
    }
}

/// Score a password from 0 to 4.
pub fn score(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::new(0, Classification::Empty);
    }

    let length = password.chars().count();
    let mut points = 0u8;

    if length > LENGTH_BONUS_THRESHOLD {
        points += 1;
    }
    if length > LONG_LENGTH_BONUS_THRESHOLD {
        points += 1;
    }

    points += match Complexity::of(password).count() {
        3.. => 2,
        2 => 1,
        _ => 0,
    };

    let mut points = points.min(MAX_SCORE);

    // 短密码无论多复杂都不能算强
    if length < SHORT_PASSWORD_THRESHOLD {
        points = points.min(SHORT_PASSWORD_CAP);
    }

    StrengthResult::new(points, Classification::from_score(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_counts() {
        assert_eq!(Complexity::of("abc").count(), 1);
        assert_eq!(Complexity::of("aB").count(), 2);
        assert_eq!(Complexity::of("aB3").count(), 3);
        assert_eq!(Complexity::of("aB3 ").count(), 4);
        assert_eq!(Complexity::of("").count(), 0);
    }

    #[test]
    fn test_label_matches_classification() {
        for points in 0..=MAX_SCORE {
            let classification = Classification::from_score(points);
            assert_eq!(StrengthResult::new(points, classification).label, classification.label());
        }
    }
}
