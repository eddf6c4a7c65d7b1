use std::{fmt, process::exit, str::FromStr};

use crate::{
    board::Board,
    color::Color,
    message::{COMMANDS, Message},
    play::LegalMoves,
    square::Square,
    status::Status,
};

/// The piece the current player has picked up and everywhere it may go.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Selection {
    pub square: Square,
    pub moves: LegalMoves,
}

/// Who gets the first turn of a new game.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Start {
    #[default]
    Red,
    White,
    Random,
}

impl Start {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Red => Color::Red,
            Self::White => Color::White,
            Self::Random => {
                if rand::random() {
                    Color::Red
                } else {
                    Color::White
                }
            }
        }
    }
}

impl FromStr for Start {
    type Err = anyhow::Error;

    fn from_str(start: &str) -> anyhow::Result<Self> {
        match start {
            "red" => Ok(Self::Red),
            "white" => Ok(Self::White),
            "random" => Ok(Self::Random),
            _ => Err(anyhow::Error::msg("expected 'red', 'white' or 'random'")),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Game {
    pub board: Board,
    pub turn: Color,
    pub status: Status,
    pub selection: Option<Selection>,
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f)?;
        if let Some(selection) = &self.selection {
            writeln!(f, "selected: {} -> {}", selection.square, selection.moves)?;
        }
        writeln!(f, "turn: {}", self.turn)?;
        write!(f, "status: {}", self.status)
    }
}

impl Game {
    #[must_use]
    pub fn new(start: Start) -> Self {
        let turn = start.color();
        log::info!("new game: {turn} starts");

        Self {
            turn,
            ..Self::default()
        }
    }

    /// The sole mutating entry point. Out of range coordinates, clicks
    /// after the game has ended and clicks that select nothing all
    /// leave the state unchanged.
    pub fn square_clicked(&mut self, row: usize, col: usize) {
        if self.status != Status::Ongoing {
            return;
        }

        if row > 7 || col > 7 {
            log::debug!("square_clicked: ({row}, {col}) is out of range");
            return;
        }
        let square = Square { row, col };

        let result = if let Some(selection) = self.selection.take() {
            if let Some(captured) = selection.moves.get(square).cloned() {
                self.play(selection.square, square, &captured)
            } else {
                // anything else is a fresh selection attempt
                self.select(square)
            }
        } else {
            self.select(square)
        };

        if let Err(error) = result {
            log::warn!("square_clicked: {error}");
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            Status::Ongoing => None,
            Status::RedWins => Some(Color::Red),
            Status::WhiteWins => Some(Color::White),
        }
    }

    fn select(&mut self, square: Square) -> anyhow::Result<()> {
        if self.board.get(square)?.color() != Some(self.turn) {
            return Ok(());
        }

        let mut moves = self.board.legal_moves(square)?;
        // A capture anywhere on the board makes capturing mandatory, so
        // a piece with only simple moves is not selectable. Which piece
        // captures, and for how long a chain, stays the player's choice.
        if self.board.capture_available(self.turn) {
            moves.retain_captures();
        }

        if moves.is_empty() {
            log::debug!("select: {square} has no playable moves");
        } else {
            self.selection = Some(Selection { square, moves });
        }

        Ok(())
    }

    fn play(&mut self, from: Square, to: Square, captured: &[Square]) -> anyhow::Result<()> {
        self.board.play(from, to, captured)?;
        log::debug!(
            "play: {} moved {from} to {to} capturing {} pieces",
            self.turn,
            captured.len()
        );

        if captured.is_empty() {
            self.turn = self.turn.opposite();
        } else {
            // a capture that opens up another keeps the turn and the piece
            let mut continuation = self.board.legal_moves(to)?;
            continuation.retain_captures();

            if continuation.is_empty() {
                self.turn = self.turn.opposite();
            } else {
                self.selection = Some(Selection {
                    square: to,
                    moves: continuation,
                });
            }
        }

        if let Some(winner) = self.board.winner() {
            log::info!("game over: {winner} wins");
            self.status = winner.into();
            self.selection = None;
        }

        Ok(())
    }

    /// # Errors
    ///
    /// If the line is not a valid command.
    pub fn read_line(&mut self, line: &str) -> anyhow::Result<Option<String>> {
        self.update(Message::try_from(line)?)
    }

    /// # Errors
    ///
    /// If the message cannot be applied.
    pub fn update(&mut self, message: Message) -> anyhow::Result<Option<String>> {
        match message {
            Message::Empty => Ok(None),
            Message::Click(square) => {
                self.square_clicked(square.row, square.col);
                Ok(None)
            }
            Message::FinalStatus => Ok(Some(self.status.to_string())),
            Message::ListCommands => Ok(Some(COMMANDS.join(" "))),
            Message::NewGame(start) => {
                *self = Self::new(start);
                Ok(Some(format!("{} starts", self.turn)))
            }
            Message::Quit => exit(0),
            Message::ShowBoard => Ok(Some(self.board.to_string())),
        }
    }
}
