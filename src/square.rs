use std::{fmt, str::FromStr};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const BOARD_LETTERS: &str = "abcdefgh";

/// The four diagonal directions as (row, column) deltas.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A board coordinate, row 0 at the top and column 0 on the left.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            BOARD_LETTERS.chars().collect::<Vec<_>>()[self.col],
            8 - self.row
        )
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;

    fn from_str(square: &str) -> anyhow::Result<Self> {
        let mut chars = square.chars();

        if let Some(mut ch) = chars.next() {
            ch = ch.to_ascii_lowercase();
            let col = BOARD_LETTERS
                .find(ch)
                .context("square: the first letter is not a legal char")?;

            let rank: usize = chars.as_str().parse()?;
            if rank > 0 && rank < 9 {
                return Ok(Self { row: 8 - rank, col });
            }
        }

        Err(anyhow::Error::msg("square: invalid coordinate"))
    }
}

impl Square {
    /// One diagonal step, or `None` when it would leave the board.
    #[must_use]
    pub fn step(&self, direction: (isize, isize)) -> Option<Self> {
        let row = self.row.checked_add_signed(direction.0)?;
        let col = self.col.checked_add_signed(direction.1)?;

        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Dark squares are the playable ones.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}
