use passcraft::passgen::{GenerationRequest, generate};
use passcraft::strength::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_score(password: &str, expected: u8, classification: Classification) {
        let result = score(password);
        assert_eq!(result.score, expected, "score of {:?}", password);
        assert_eq!(result.classification, classification, "classification of {:?}", password);
        assert_eq!(result.label, classification.label());
    }

    #[test]
    fn test_empty_password() {
        let result = score("");
        assert_eq!(result.score, 0);
        assert_eq!(result.classification, Classification::Empty);
        assert_eq!(result.label, "Empty");
        assert_ne!(result.classification, score("a").classification);
    }

    #[test]
    fn test_eight_characters_four_classes() {
        // 8 is not longer than the first threshold, so only complexity counts
        assert_score("Abc123!@", 2, Classification::Fair);
    }

    #[test]
    fn test_short_password_is_capped() {
        assert_score("aB3$", 1, Classification::Weak);
        assert_score("Ab1!xyz", 1, Classification::Weak);
        assert_score("a", 0, Classification::Weak);
    }

    #[test]
    fn test_length_points() {
        assert_score("password", 0, Classification::Weak);
        assert_score("passwords", 1, Classification::Weak);
        assert_score("abcdefghijklmn", 1, Classification::Weak);
        assert_score("abcdefghijklmno", 2, Classification::Fair);
    }

    #[test]
    fn test_complexity_points() {
        assert_score("Passwords", 2, Classification::Fair);
        assert_score("Password123", 3, Classification::Good);
        assert_score("Password123!", 3, Classification::Good);
        assert_score("correct horse battery", 3, Classification::Good);
    }

    #[test]
    fn test_score_is_clamped() {
        assert_score("CorrectHorse99!x", 4, Classification::Strong);
        assert_score("Abcdefghijklmn1", 4, Classification::Strong);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        assert!(Complexity::of("çay").symbol);
        // 7 characters counted as chars, not bytes
        assert_score("Çaycıöğ", 1, Classification::Weak);
    }

    #[test]
    fn test_thresholds_are_ordered() {
        assert!(LENGTH_BONUS_THRESHOLD < LONG_LENGTH_BONUS_THRESHOLD);
        assert!(SHORT_PASSWORD_CAP < MAX_SCORE);
    }

    #[test]
    fn test_generated_passwords_score_strong() {
        let request = GenerationRequest::default();
        for _ in 0..20 {
            let result = score(&generate(&request));
            assert_eq!(result.score, MAX_SCORE);
            assert_eq!(result.classification, Classification::Strong);
        }
    }
}
