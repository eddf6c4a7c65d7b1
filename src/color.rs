use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Color {
    // starts on the top rows, moves toward increasing rows
    #[default]
    Red,
    // starts on the bottom rows, moves toward decreasing rows
    White,
}

impl Color {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Red => Self::White,
            Self::White => Self::Red,
        }
    }

    /// The two diagonal directions a man of this color may step without
    /// capturing.
    #[must_use]
    pub fn forward(self) -> [(isize, isize); 2] {
        match self {
            Self::Red => [(1, -1), (1, 1)],
            Self::White => [(-1, -1), (-1, 1)],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::White => write!(f, "white"),
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(color: &str) -> anyhow::Result<Self> {
        match color {
            "red" => Ok(Self::Red),
            "white" => Ok(Self::White),
            _ => Err(anyhow::Error::msg("a color is expected")),
        }
    }
}
