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
// Passphrase suggestion and password audit services
//
// Both services may be backed by something slow or remote, so every call
// returns a `Result` and callers are expected to recover from failure.
// The implementations here run locally.

use rand::rngs::OsRng;
use tracing::warn;
use zxcvbn::{Score, zxcvbn};

use crate::error::{Error, Result};
use crate::phrase::{self, PhraseOptions};

/// Shown in place of commentary when an auditor fails.
pub const AUDIT_FALLBACK: &str = "Audit currently unavailable.";

// 每个候选最多尝试的次数，防止小词表下死循环
const ATTEMPTS_PER_SUGGESTION: usize = 8;

/// Suggests memorable passphrases.
pub trait PassphraseSource {
    /// Up to `count` distinct candidates, in presentation order.
    fn passphrases(&self, count: usize) -> Result<Vec<String>>;
}

/// Comments on a password without repeating it.
pub trait PasswordAuditor {
    fn audit(&self, password: &str) -> Result<String>;
}

/// Commentary from `auditor`, or `AUDIT_FALLBACK` when it fails.
pub fn audit_or_fallback(auditor: &dyn PasswordAuditor, password: &str) -> String {
    match auditor.audit(password) {
        Ok(comment) => comment,
        Err(e) => {
            warn!("password audit failed: {}", e);
            AUDIT_FALLBACK.to_string()
        }
    }
}

/// Passphrases drawn from the built-in word list.
#[derive(Debug, Clone, Default)]
pub struct WordlistPassphrases {
    pub options: PhraseOptions,
}

impl WordlistPassphrases {
    pub fn new(options: PhraseOptions) -> Self {
        Self { options }
    }
}

impl PassphraseSource for WordlistPassphrases {
    fn passphrases(&self, count: usize) -> Result<Vec<String>> {
        let mut rng = OsRng;
        let mut candidates: Vec<String> = Vec::with_capacity(count);

        for _ in 0..count.saturating_mul(ATTEMPTS_PER_SUGGESTION) {
            if candidates.len() == count {
                break;
            }
            let candidate = phrase::generate_phrase_with(&self.options, &mut rng)?;
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }

        if candidates.is_empty() && count > 0 {
            return Err(Error::Unavailable("passphrase generation".to_string()));
        }
        if candidates.len() < count {
            warn!(wanted = count, got = candidates.len(), "word list too small for distinct passphrases");
        }
        Ok(candidates)
    }
}

/// Audits with zxcvbn's pattern matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnAuditor;

impl PasswordAuditor for ZxcvbnAuditor {
    fn audit(&self, password: &str) -> Result<String> {
        if password.is_empty() {
            return Ok("Nothing to audit: the password is empty.".to_string());
        }

        let estimate = zxcvbn(password, &[]);
        let verdict = match estimate.score() {
            Score::Zero | Score::One => "Guessable in moments",
            Score::Two => "Would slow down a casual attacker",
            Score::Three => "Resists offline guessing reasonably well",
            Score::Four => "Very hard to guess",
            _ => "Unrated",
        };

        let mut comment = format!(
            "{} (about 10^{:.0} guesses).",
            verdict,
            estimate.guesses_log10()
        );

        if let Some(feedback) = estimate.feedback() {
            if let Some(warning) = feedback.warning() {
                comment.push(' ');
                comment.push_str(&warning.to_string());
            }
            let suggestions = feedback
                .suggestions()
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            if !suggestions.is_empty() {
                comment.push(' ');
                comment.push_str(&suggestions);
            }
        }

        Ok(comment)
    }
}
