use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Space {
    #[default]
    Empty,
    Man(Color),
    King(Color),
}

impl Space {
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Man(color) | Self::King(color) => Some(color),
        }
    }

    #[must_use]
    pub fn is_king(self) -> bool {
        matches!(self, Self::King(_))
    }
}

impl TryFrom<char> for Space {
    type Error = anyhow::Error;

    fn try_from(value: char) -> anyhow::Result<Self> {
        match value {
            '.' => Ok(Self::Empty),
            'r' => Ok(Self::Man(Color::Red)),
            'w' => Ok(Self::Man(Color::White)),
            'R' => Ok(Self::King(Color::Red)),
            'W' => Ok(Self::King(Color::White)),
            ch => Err(anyhow::Error::msg(format!(
                "error trying to convert '{ch}' to a Space"
            ))),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "."),
            Self::Man(Color::Red) => write!(f, "r"),
            Self::Man(Color::White) => write!(f, "w"),
            Self::King(Color::Red) => write!(f, "R"),
            Self::King(Color::White) => write!(f, "W"),
        }
    }
}
