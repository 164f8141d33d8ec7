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
// Password generation and strength scoring.

pub mod advisor;
pub mod charset;
pub mod configtool;
pub mod error;
pub mod passgen;
pub mod phrase;
pub mod strength;

pub use charset::CharacterClass;
pub use error::{Error, Result};
pub use passgen::{GenerationRequest, generate, generate_with};
pub use strength::{Classification, StrengthResult, score};
