use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::color::Color;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Status {
    #[default]
    Ongoing,
    RedWins,
    WhiteWins,
}

impl From<Color> for Status {
    fn from(winner: Color) -> Self {
        match winner {
            Color::Red => Self::RedWins,
            Color::White => Self::WhiteWins,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "ongoing"),
            Self::RedWins => write!(f, "red_wins"),
            Self::WhiteWins => write!(f, "white_wins"),
        }
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value {
            "ongoing" => Ok(Self::Ongoing),
            "red_wins" => Ok(Self::RedWins),
            "white_wins" => Ok(Self::WhiteWins),
            _ => Err(anyhow::Error::msg("invalid status")),
        }
    }
}
