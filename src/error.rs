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
// Error types

use thiserror::Error;

/// Errors raised outside the generator and estimator.
///
/// `generate` and `score` are total; only configuration, passphrase
/// options and collaborator calls can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem error while reading or writing the config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed config file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No usable config directory on this platform
    #[error("Config directory error: {0}")]
    ConfigDir(String),

    /// Rejected generation options
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// A passphrase or audit collaborator failed; callers should recover
    #[error("{0} unavailable")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
