use passcraft::Error;
use passcraft::advisor::*;
use passcraft::phrase::PhraseOptions;

struct BrokenService;

impl PasswordAuditor for BrokenService {
    fn audit(&self, _password: &str) -> passcraft::Result<String> {
        Err(Error::Unavailable("audit".to_string()))
    }
}

impl PassphraseSource for BrokenService {
    fn passphrases(&self, _count: usize) -> passcraft::Result<Vec<String>> {
        Err(Error::Unavailable("passphrase generation".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordlist_passphrases_are_distinct() {
        let source = WordlistPassphrases::default();
        let phrases = source.passphrases(5).unwrap();
        assert_eq!(phrases.len(), 5);
        let mut unique = phrases.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_wordlist_passphrases_zero_count() {
        let source = WordlistPassphrases::default();
        assert!(source.passphrases(0).unwrap().is_empty());
    }

    #[test]
    fn test_wordlist_passphrases_invalid_options() {
        let source = WordlistPassphrases::new(PhraseOptions {
            word_count: 0,
            ..Default::default()
        });
        assert!(source.passphrases(3).is_err());
    }

    #[test]
    fn test_failed_passphrase_source_is_recoverable() {
        let source: &dyn PassphraseSource = &BrokenService;
        let err = source.passphrases(5).unwrap_err();
        assert!(matches!(err, Error::Unavailable(_)));
        assert_eq!(err.to_string(), "passphrase generation unavailable");
    }

    #[test]
    fn test_audit_fallback() {
        assert_eq!(audit_or_fallback(&BrokenService, "hunter2"), AUDIT_FALLBACK);
    }

    #[test]
    fn test_zxcvbn_audit_does_not_echo_password() {
        let password = "Tr0ub4dor&3xyz";
        let comment = audit_or_fallback(&ZxcvbnAuditor, password);
        assert!(!comment.is_empty());
        assert_ne!(comment, AUDIT_FALLBACK);
        assert!(!comment.contains(password));
    }

    #[test]
    fn test_zxcvbn_audit_flags_common_password() {
        let comment = ZxcvbnAuditor.audit("password").unwrap();
        assert!(comment.starts_with("Guessable in moments"), "{}", comment);
    }

    #[test]
    fn test_zxcvbn_audit_empty_password() {
        let comment = ZxcvbnAuditor.audit("").unwrap();
        assert!(comment.contains("empty"));
    }
}
