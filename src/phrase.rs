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
// Word list passphrases

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

// 引入编译生成的单词列表
include!(concat!(env!("OUT_DIR"), "/word_data.rs"));

// 单词大写方式枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Capitalization {
    NoCapitalization,
    CamelCase,
    RandomCase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseOptions {
    pub word_count: usize,
    pub include_numbers: bool,
    pub separator: char,
    pub capitalization: Capitalization,
}

impl Default for PhraseOptions {
    fn default() -> Self {
        Self {
            word_count: 4,
            include_numbers: true,
            separator: '-',
            capitalization: Capitalization::CamelCase,
        }
    }
}

/// Number of words compiled into the binary.
pub fn wordlist_size() -> usize {
    WORDS.len()
}

pub fn generate_phrase(options: &PhraseOptions) -> Result<String> {
    generate_phrase_with(options, &mut OsRng)
}

pub fn generate_phrase_with<R>(options: &PhraseOptions, rng: &mut R) -> Result<String>
where
    R: Rng + CryptoRng + ?Sized,
{
    generate_from(&WORDS, options, rng)
}

pub(crate) fn generate_from<R>(words: &[&str], options: &PhraseOptions, rng: &mut R) -> Result<String>
where
    R: Rng + CryptoRng + ?Sized,
{
    if options.word_count < 1 {
        return Err(Error::InvalidOptions("word count must be at least 1".to_string()));
    }

    // 随机选择单词
    let mut parts = Vec::with_capacity(options.word_count + 1);
    for _ in 0..options.word_count {
        let word = words
            .choose(rng)
            .ok_or_else(|| Error::InvalidOptions("word list is empty".to_string()))?;
        parts.push(process_word(word, options.capitalization, rng));
    }

    // 添加数字（如果需要）
    if options.include_numbers {
        let number: u8 = rng.gen_range(0..=99);
        parts.push(number.to_string());
    }

    debug!(words = options.word_count, pool = words.len(), "generated passphrase");

    Ok(parts.join(&options.separator.to_string()))
}

/// 处理单词大小写
fn process_word<R>(word: &str, capitalization: Capitalization, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    match capitalization {
        Capitalization::NoCapitalization => word.to_lowercase(),
        Capitalization::CamelCase => {
            let mut chars: Vec<char> = word.chars().collect();
            if let Some(first) = chars.get_mut(0) {
                *first = first.to_ascii_uppercase();
            }
            chars.into_iter().collect()
        }
        Capitalization::RandomCase => word
            .chars()
            .map(|c| {
                if rng.gen_bool(0.5) {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordlist_is_lowercase_ascii() {
        assert!(wordlist_size() > 0);
        assert!(WORDS.iter().all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn test_empty_word_list_is_rejected() {
        let result = generate_from(&[], &PhraseOptions::default(), &mut OsRng);
        assert!(matches!(result, Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_single_word_list() {
        let options = PhraseOptions {
            word_count: 3,
            include_numbers: false,
            ..Default::default()
        };
        let phrase = generate_from(&["moss"], &options, &mut OsRng).unwrap();
        assert_eq!(phrase, "Moss-Moss-Moss");
    }
}
