use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SyntaxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GameVersion {
    Threat,
    Reunion,
    TerranConflict,
    AlbionPrelude,
}

impl GameVersion {
    pub const ALL: [GameVersion; 4] = [
        Self::Threat,
        Self::Reunion,
        Self::TerranConflict,
        Self::AlbionPrelude,
    ];

    /// Token used on the versions line of the legacy definition file.
    pub fn legacy_token(self) -> &'static str {
        match self {
            Self::Threat => "X2",
            Self::Reunion => "X3",
            Self::TerranConflict => "TC",
            Self::AlbionPrelude => "AP",
        }
    }

    pub fn from_legacy_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|version| version.legacy_token() == token)
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.legacy_token())
    }
}

impl FromStr for GameVersion {
    type Err = SyntaxError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_legacy_token(&value.trim().to_ascii_uppercase()).ok_or_else(|| {
            SyntaxError::argument(format!(
                "Unknown game version \"{}\", expected one of X2, X3, TC, AP.",
                value
            ))
        })
    }
}
