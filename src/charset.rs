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
// Character classes and their alphabets

use serde::{Deserialize, Serialize};

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
// 29 个符号，熵估算依赖这个集合保持不变
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+~`|}{[]:;?><,./-=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in the order alphabets are concatenated into the pool.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Which alphabet `c` belongs to, if any.
    pub fn of(c: char) -> Option<CharacterClass> {
        if !c.is_ascii() {
            return None;
        }
        let byte = c as u8;
        Self::ALL
            .into_iter()
            .find(|class| class.alphabet().contains(&byte))
    }

    pub fn contains(self, c: char) -> bool {
        Self::of(c) == Some(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }
}
