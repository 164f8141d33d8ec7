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
// Config Tools

use std::fs;
use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charset::CharacterClass;
use crate::error::{Error, Result};
use crate::passgen::{GenerationRequest, MAX_LENGTH, MIN_LENGTH};
use crate::phrase::PhraseOptions;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub generator: GenerationRequest,
    pub phrase: PhraseOptions,
    pub suggestions: usize,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            generator: GenerationRequest::default(),
            phrase: PhraseOptions::default(),
            suggestions: DEFAULT_SUGGESTIONS,
        }
    }
}

impl ConfigFile {
    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let file = fs::File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_length(self.generator.length)?;
        if self.phrase.word_count < 1 {
            return Err(Error::InvalidOptions("phrase word count must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The generator settings with command line overrides applied.
    ///
    /// `length` replaces the configured length; every class in `excluded`
    /// is turned off. Classes disabled in the config stay disabled.
    pub fn generation_request(
        &self,
        length: Option<usize>,
        excluded: &[CharacterClass],
    ) -> Result<GenerationRequest> {
        let length = length.unwrap_or(self.generator.length);
        check_length(length)?;

        let enabled: Vec<CharacterClass> = self
            .generator
            .classes()
            .into_iter()
            .filter(|class| !excluded.contains(class))
            .collect();
        if enabled.is_empty() {
            return Err(Error::InvalidOptions(
                "at least one character set must be included".to_string(),
            ));
        }

        Ok(GenerationRequest::with_classes(length, &enabled))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

fn check_length(length: usize) -> Result<()> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(Error::InvalidOptions(format!(
            "password length {} is outside {}..={}",
            length, MIN_LENGTH, MAX_LENGTH
        )));
    }
    Ok(())
}

pub fn get_config_dir() -> Result<PathBuf> {
    config_dir()
        .map(|dir| dir.join("passcraft"))
        .ok_or_else(|| Error::ConfigDir("Failed to get config directory".to_string()))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the user's config from the platform config directory.
pub fn load_config() -> Result<ConfigFile> {
    ConfigFile::load_from(&config_path()?)
}
