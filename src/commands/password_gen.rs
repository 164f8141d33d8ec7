use anyhow::{Context, Result};
use serde::Serialize;

use passcraft::CharacterClass;
use passcraft::advisor::{PassphraseSource, WordlistPassphrases};
use passcraft::configtool::ConfigFile;
use passcraft::passgen;
use passcraft::strength::{self, StrengthResult};

use crate::{GenArgs, PhraseArgs};

#[derive(Debug, Serialize)]
struct GeneratedPassword {
    password: String,
    entropy_bits: f64,
    strength: StrengthResult,
}

fn excluded_classes(args: &GenArgs) -> Vec<CharacterClass> {
    [
        (args.no_uppercase, CharacterClass::Uppercase),
        (args.no_lowercase, CharacterClass::Lowercase),
        (args.no_numbers, CharacterClass::Digit),
        (args.no_symbols, CharacterClass::Symbol),
    ]
    .into_iter()
    .filter_map(|(excluded, class)| excluded.then_some(class))
    .collect()
}

pub fn generate_random(args: GenArgs, config: &ConfigFile) -> Result<()> {
    let request = config
        .generation_request(args.length, &excluded_classes(&args))
        .context("Invalid generator options")?;

    let entropy_bits = passgen::entropy_bits(&request);
    let results: Vec<GeneratedPassword> = (0..args.count.max(1))
        .map(|_| {
            let password = passgen::generate(&request);
            let strength = strength::score(&password);
            GeneratedPassword { password, entropy_bits, strength }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        println!("{}", result.password);
        println!(
            "  strength: {} (score: {}/4), pool entropy: {:.1} bits",
            result.strength.label, result.strength.score, result.entropy_bits
        );
    }
    Ok(())
}

pub fn generate_memorable(args: PhraseArgs, config: &ConfigFile) -> Result<()> {
    let mut options = config.phrase.clone();
    if let Some(words) = args.words {
        options.word_count = words;
    }
    if let Some(separator) = args.separator {
        options.separator = separator;
    }
    if let Some(capitalization) = args.capitalization {
        options.capitalization = capitalization;
    }
    if args.no_numbers {
        options.include_numbers = false;
    }

    let count = args.count.unwrap_or(config.suggestions).max(1);
    let source = WordlistPassphrases::new(options);
    let phrases = source
        .passphrases(count)
        .context("Failed to generate memorable password")?;

    for phrase in phrases {
        let strength = strength::score(&phrase);
        println!("{}  [{} {}/4]", phrase, strength.label, strength.score);
    }
    Ok(())
}
