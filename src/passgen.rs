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
// Password generator

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charset::CharacterClass;

/// Smallest length the CLI accepts.
pub const MIN_LENGTH: usize = 6;
/// Largest length the CLI accepts.
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LENGTH: usize = 16;

/// What to generate. Each `include_*` flag enables one character class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GenerationRequest {
    /// A request with only the given classes enabled.
    pub fn with_classes(length: usize, classes: &[CharacterClass]) -> Self {
        Self {
            length,
            include_uppercase: classes.contains(&CharacterClass::Uppercase),
            include_lowercase: classes.contains(&CharacterClass::Lowercase),
            include_numbers: classes.contains(&CharacterClass::Digit),
            include_symbols: classes.contains(&CharacterClass::Symbol),
        }
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Digit => self.include_numbers,
            CharacterClass::Symbol => self.include_symbols,
        }
    }

    /// Enabled classes in pool order (lowercase, uppercase, digit, symbol).
    pub fn classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }
}

/// Number of distinct characters the request draws from.
pub fn pool_size(request: &GenerationRequest) -> usize {
    request
        .classes()
        .iter()
        .map(|class| class.alphabet().len())
        .sum()
}

/// Number of characters `generate` emits for `request`.
///
/// At least one, and never fewer than the number of enabled classes.
/// Zero when no class is enabled.
pub fn effective_length(request: &GenerationRequest) -> usize {
    let classes = request.classes().len();
    if classes == 0 {
        return 0;
    }
    request.length.max(1).max(classes)
}

/// Upper bound on the entropy of a password drawn uniformly from the pool.
pub fn entropy_bits(request: &GenerationRequest) -> f64 {
    let size = pool_size(request);
    if size == 0 {
        return 0.0;
    }
    effective_length(request) as f64 * (size as f64).log2()
}

/// Generate a password from the operating system's CSPRNG.
pub fn generate(request: &GenerationRequest) -> String {
    generate_with(request, &mut OsRng)
}

/// Generate a password from `rng`.
///
/// Every enabled class contributes at least one character. With no class
/// enabled the result is empty. When more classes are enabled than
/// `length` allows, the guaranteed characters are still all emitted and
/// the password comes out longer than requested.
pub fn generate_with<R>(request: &GenerationRequest, rng: &mut R) -> String
where
    R: Rng + CryptoRng + ?Sized,
{
    let classes = request.classes();
    if classes.is_empty() {
        debug!("no character class enabled, returning empty password");
        return String::new();
    }

    // Build the combined character pool
    let pool: Vec<u8> = classes
        .iter()
        .flat_map(|class| class.alphabet().iter().copied())
        .collect();

    let length = effective_length(request);
    let mut password_chars = Vec::with_capacity(length);

    // Add one character from each required set
    for class in &classes {
        password_chars.push(pick(class.alphabet(), rng));
    }

    // Add remaining characters from combined pool
    let remaining = length.saturating_sub(password_chars.len());
    for _ in 0..remaining {
        password_chars.push(pick(&pool, rng));
    }

    // 打乱顺序，否则保证字符总是按类别顺序出现在开头
    password_chars.shuffle(rng);

    debug!(
        length = password_chars.len(),
        classes = classes.len(),
        pool = pool.len(),
        "generated password"
    );

    password_chars.into_iter().map(char::from).collect()
}

// gen_range rejects out-of-zone draws, so the index is unbiased.
fn pick<R>(alphabet: &[u8], rng: &mut R) -> u8
where
    R: Rng + ?Sized,
{
    alphabet[rng.gen_range(0..alphabet.len())]
}
