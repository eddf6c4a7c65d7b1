pub mod board;
pub mod color;
pub mod game;
pub mod message;
pub mod play;
pub mod space;
pub mod square;
pub mod status;

#[cfg(test)]
mod tests {
    use board::{Board, STARTING_POSITION};
    use color::Color;
    use game::Game;
    use space::Space;
    use status::Status;

    use super::*;

    #[test]
    fn starting_position() {
        let game = Game::default();
        assert_eq!(game.board, Board::try_from(STARTING_POSITION).unwrap());
    }

    #[test]
    fn first_turn() {
        let game = Game::default();
        assert_eq!(game.turn, Color::Red);
        assert_eq!(game.status, Status::Ongoing);
    }

    #[test]
    fn light_squares_stay_empty() {
        let board = ["r.......", "........", "........", "........", "........", "........", "........", "........"];
        assert!(Board::try_from(board).is_err());
    }

    #[test]
    fn click_a_move() -> anyhow::Result<()> {
        let mut game = Game::default();

        // Junk input:
        assert!(game.read_line("click junk").is_err());
        assert!(game.read_line("move b6 c5").is_err());
        // Out of the coordinate range:
        assert!(game.read_line("click i5").is_err());
        assert!(game.read_line("click b9").is_err());
        assert!(game.read_line("click b0").is_err());

        // Select the red man on b6 and step it forward to c5:
        game.read_line("click b6")?;
        assert!(game.selection.is_some());
        game.read_line("click c5")?;

        assert!(game.selection.is_none());
        assert_eq!(game.turn, Color::White);
        assert_eq!(
            game.board.get(square::Square { row: 3, col: 2 })?,
            Space::Man(Color::Red)
        );

        Ok(())
    }

    #[test]
    fn new_game_resets() -> anyhow::Result<()> {
        let mut game = Game::default();
        game.read_line("click b6")?;
        game.read_line("click c5")?;

        game.read_line("new_game white")?;
        assert_eq!(game.turn, Color::White);
        assert_eq!(game.board, Board::try_from(STARTING_POSITION).unwrap());
        assert!(game.selection.is_none());

        Ok(())
    }
}
