use std::fmt;

use anyhow::Context;

use crate::{
    color::Color,
    play::{CapturePath, LegalMoves},
    space::Space,
    square::{DIRECTIONS, Square},
};

pub const STARTING_POSITION: [&str; 8] = [
    ".r.r.r.r",
    "r.r.r.r.",
    ".r.r.r.r",
    "........",
    "........",
    "w.w.w.w.",
    ".w.w.w.w",
    "w.w.w.w.",
];

#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    spaces: [[Space; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        STARTING_POSITION.try_into().unwrap()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for line in self.spaces {
            write!(f, r#"""#)?;
            for space in line {
                write!(f, "{space}")?;
            }
            writeln!(f, r#"""#)?;
        }

        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = "  abcdefgh";
        let bar = "─".repeat(8);

        writeln!(f, "\n{letters}\n ┌{bar}┐")?;
        for (i, line) in self.spaces.iter().enumerate() {
            write!(f, "{}│", 8 - i)?;
            for space in line {
                write!(f, "{space}")?;
            }
            writeln!(f, "│{}", 8 - i)?;
        }
        write!(f, " └{bar}┘\n{letters}")
    }
}

impl TryFrom<[&str; 8]> for Board {
    type Error = anyhow::Error;

    fn try_from(value: [&str; 8]) -> anyhow::Result<Self> {
        let mut spaces = [[Space::Empty; 8]; 8];

        for (row, line) in value.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let space: Space = ch.try_into()?;
                let square = Square { row, col };

                if space != Space::Empty && !square.is_dark() {
                    return Err(anyhow::Error::msg(
                        "pieces are only allowed on dark squares!",
                    ));
                }

                spaces[row][col] = space;
            }
        }

        Ok(Self { spaces })
    }
}

impl Board {
    /// # Errors
    ///
    /// If the square is out of bounds.
    pub fn get(&self, square: Square) -> anyhow::Result<Space> {
        let line = self
            .spaces
            .get(square.row)
            .context("get: index is out of row bounds")?;

        Ok(*line
            .get(square.col)
            .context("get: index is out of column bounds")?)
    }

    fn space(&self, square: Square) -> Space {
        self.spaces[square.row][square.col]
    }

    fn set(&mut self, square: Square, space: Space) {
        self.spaces[square.row][square.col] = space;
    }

    /// Every square on the board with the space standing on it.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Space)> + '_ {
        self.spaces.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, space)| (Square { row, col }, *space))
        })
    }

    /// The legal destinations of the piece on `square`, each mapped to
    /// the enemy squares it captures. When any capture exists for this
    /// piece, only its maximal capture chains are returned and simple
    /// moves are suppressed. Whether some other piece must capture is
    /// the turn controller's concern, not this function's.
    ///
    /// # Errors
    ///
    /// If the square is out of bounds.
    pub fn legal_moves(&self, square: Square) -> anyhow::Result<LegalMoves> {
        Ok(self.moves_for(square, self.get(square)?))
    }

    fn moves_for(&self, square: Square, space: Space) -> LegalMoves {
        let mut moves = LegalMoves::default();

        if space == Space::Empty {
            return moves;
        }

        let paths = self.capture_sequences(square, space);
        if paths.iter().any(|path| !path.captured.is_empty()) {
            for path in paths {
                moves.insert(path.end, path.captured);
            }
            return moves;
        }

        match space {
            Space::King(_) => {
                for direction in DIRECTIONS {
                    let mut cursor = square.step(direction);
                    while let Some(to) = cursor {
                        if self.space(to) != Space::Empty {
                            break;
                        }
                        moves.insert(to, Vec::new());
                        cursor = to.step(direction);
                    }
                }
            }
            Space::Man(color) => {
                for direction in color.forward() {
                    if let Some(to) = square.step(direction) {
                        if self.space(to) == Space::Empty {
                            moves.insert(to, Vec::new());
                        }
                    }
                }
            }
            Space::Empty => {}
        }

        moves
    }

    /// The maximal capture chains for a single piece, found by recursive
    /// search over cloned boards. Returns the trivial path when the
    /// piece has no capture. The piece keeps its rank for the whole
    /// search; promotion only happens when a move is played.
    #[must_use]
    pub fn capture_sequences(&self, square: Square, space: Space) -> Vec<CapturePath> {
        self.explore_captures(square, space, &[])
    }

    fn explore_captures(&self, square: Square, space: Space, captured: &[Square]) -> Vec<CapturePath> {
        let mut longest: Vec<CapturePath> = Vec::new();
        let mut max_captured = 0;

        if let Some(color) = space.color() {
            for direction in DIRECTIONS {
                let jumps = if space.is_king() {
                    self.king_jumps(square, color, direction)
                } else {
                    self.man_jump(square, color, direction).into_iter().collect()
                };

                for (over, to) in jumps {
                    let mut board = self.clone();
                    board.set(square, Space::Empty);
                    board.set(over, Space::Empty);
                    board.set(to, space);

                    let mut captured = captured.to_vec();
                    captured.push(over);

                    for path in board.explore_captures(to, space, &captured) {
                        if path.captured.len() > max_captured {
                            max_captured = path.captured.len();
                            longest.clear();
                        }
                        if path.captured.len() == max_captured {
                            longest.push(path);
                        }
                    }
                }
            }
        }

        if longest.is_empty() {
            longest.push(CapturePath {
                end: square,
                captured: captured.to_vec(),
            });
        }

        longest
    }

    fn man_jump(
        &self,
        square: Square,
        color: Color,
        direction: (isize, isize),
    ) -> Option<(Square, Square)> {
        let over = square.step(direction)?;
        let to = over.step(direction)?;

        if self.space(over).color() == Some(color.opposite()) && self.space(to) == Space::Empty {
            Some((over, to))
        } else {
            None
        }
    }

    // At most one piece may be captured per direction: the slide stops
    // at the first occupied square no matter what it holds.
    fn king_jumps(
        &self,
        square: Square,
        color: Color,
        direction: (isize, isize),
    ) -> Vec<(Square, Square)> {
        let mut jumps = Vec::new();
        let mut cursor = square.step(direction);

        while let Some(over) = cursor {
            match self.space(over) {
                Space::Empty => cursor = over.step(direction),
                space if space.color() == Some(color.opposite()) => {
                    // the king may land on any empty square past the piece
                    let mut landing = over.step(direction);
                    while let Some(to) = landing {
                        if self.space(to) != Space::Empty {
                            break;
                        }
                        jumps.push((over, to));
                        landing = to.step(direction);
                    }
                    break;
                }
                _ => break,
            }
        }

        jumps
    }

    /// Whether any piece of `color` has a capturing move anywhere on the
    /// board.
    #[must_use]
    pub fn capture_available(&self, color: Color) -> bool {
        self.squares().any(|(square, space)| {
            space.color() == Some(color) && self.moves_for(square, space).has_capture()
        })
    }

    /// Moves a piece, clears the captured squares and promotes a man
    /// that lands on the far rank, even in the middle of a multi-jump.
    ///
    /// # Errors
    ///
    /// If a square is out of bounds or there is no piece to move.
    pub fn play(&mut self, from: Square, to: Square, captured: &[Square]) -> anyhow::Result<()> {
        let space = self.get(from)?;
        if space == Space::Empty {
            return Err(anyhow::Error::msg("play: there is no piece to move"));
        }
        if self.get(to)? != Space::Empty {
            return Err(anyhow::Error::msg("play: the destination is occupied"));
        }

        self.set(from, Space::Empty);
        for square in captured {
            self.get(*square)?;
            self.set(*square, Space::Empty);
        }

        let space = match space {
            Space::Man(Color::Red) if to.row == 7 => Space::King(Color::Red),
            Space::Man(Color::White) if to.row == 0 => Space::King(Color::White),
            space => space,
        };
        self.set(to, space);

        Ok(())
    }

    /// The winner, if there is one. A player with no pieces left or no
    /// legal move across all of them loses.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        for color in [Color::Red, Color::White] {
            let mut pieces = self
                .squares()
                .filter(|(_, space)| space.color() == Some(color))
                .peekable();

            if pieces.peek().is_none() {
                return Some(color.opposite());
            }

            if pieces.all(|(square, space)| self.moves_for(square, space).is_empty()) {
                return Some(color.opposite());
            }
        }

        None
    }
}
