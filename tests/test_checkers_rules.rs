use checkers_engine::{
    board::Board,
    color::Color,
    game::Game,
    space::Space,
    square::Square,
    status::Status,
};

fn square(row: usize, col: usize) -> Square {
    Square { row, col }
}

fn game(board: [&str; 8], turn: Color) -> anyhow::Result<Game> {
    Ok(Game {
        board: Board::try_from(board)?,
        turn,
        status: Status::default(),
        selection: None,
    })
}

#[test]
fn man_must_capture() -> anyhow::Result<()> {
    let board = Board::try_from([
        "........",
        "........",
        ".r......",
        "..w.....",
        "........",
        "........",
        "........",
        "........",
    ])?;

    let moves = board.legal_moves(square(2, 1))?;

    assert_eq!(moves.get(square(4, 3)), Some(&vec![square(3, 2)]));
    assert_eq!(moves.destinations().count(), 1);
    // the simple forward step is suppressed by the capture
    assert_eq!(moves.get(square(3, 0)), None);

    Ok(())
}

#[test]
fn king_captures_at_range() -> anyhow::Result<()> {
    let board = Board::try_from([
        "........",
        "........",
        "........",
        "........",
        "...R....",
        "........",
        ".....w..",
        "........",
    ])?;

    let moves = board.legal_moves(square(4, 3))?;

    assert_eq!(moves.get(square(7, 6)), Some(&vec![square(6, 5)]));
    assert_eq!(moves.destinations().count(), 1);
    // sliding short of the enemy is not on offer once a capture exists
    assert_eq!(moves.get(square(5, 4)), None);

    Ok(())
}

#[test]
fn longest_chain_wins() -> anyhow::Result<()> {
    let board = Board::try_from([
        "........",
        "..w.....",
        ".r......",
        "..w.....",
        "........",
        "....w...",
        "........",
        "........",
    ])?;

    let moves = board.legal_moves(square(2, 1))?;

    // the single backward jump over c7 loses to the two-jump chain
    assert_eq!(
        moves.get(square(6, 5)),
        Some(&vec![square(3, 2), square(5, 4)])
    );
    assert_eq!(moves.destinations().count(), 1);
    assert_eq!(moves.get(square(0, 3)), None);

    Ok(())
}

#[test]
fn destinations_are_empty_squares() -> anyhow::Result<()> {
    let board = Board::default();

    for (from, space) in board.squares() {
        if space == Space::Empty {
            continue;
        }
        for to in board.legal_moves(from)?.destinations() {
            assert_eq!(board.get(*to)?, Space::Empty);
        }
    }

    Ok(())
}

#[test]
fn capture_search_does_not_mutate() -> anyhow::Result<()> {
    let board = Board::try_from([
        "........",
        "..w.....",
        ".r......",
        "..w.....",
        "........",
        "....w...",
        "........",
        "........",
    ])?;
    let before = board.clone();

    let first = board.capture_sequences(square(2, 1), Space::Man(Color::Red));
    let second = board.capture_sequences(square(2, 1), Space::Man(Color::Red));

    assert_eq!(first, second);
    assert_eq!(board, before);

    Ok(())
}

#[test]
fn mandatory_capture_blocks_other_pieces() -> anyhow::Result<()> {
    let mut game = game(
        [
            "........",
            "........",
            ".r...r..",
            "..w.....",
            "........",
            "........",
            "........",
            "........",
        ],
        Color::Red,
    )?;

    // f6 only has simple moves while b6 must capture, so it is not selectable
    game.square_clicked(2, 5);
    assert!(game.selection.is_none());

    game.square_clicked(2, 1);
    let selection = game.selection.as_ref().unwrap();
    assert_eq!(selection.square, square(2, 1));
    assert!(selection.moves.has_capture());
    assert_eq!(selection.moves.destinations().count(), 1);

    Ok(())
}

#[test]
fn promotion_mid_chain_continues_as_king() -> anyhow::Result<()> {
    let mut game = game(
        [
            "........",
            "........",
            "........",
            "........",
            "........",
            "..r...w.",
            "...w....",
            "........",
        ],
        Color::Red,
    )?;

    game.square_clicked(5, 2);
    assert!(game.selection.is_some());

    // jump to the back rank, promoting on landing
    game.square_clicked(7, 4);
    assert_eq!(game.board.get(square(7, 4))?, Space::King(Color::Red));

    // the fresh king must keep capturing and the turn does not pass
    assert_eq!(game.turn, Color::Red);
    let selection = game.selection.as_ref().unwrap();
    assert_eq!(selection.square, square(7, 4));
    assert_eq!(
        selection.moves.get(square(4, 7)),
        Some(&vec![square(5, 6)])
    );

    // finishing the chain removes the last white piece and ends the game
    game.square_clicked(4, 7);
    assert_eq!(game.status, Status::RedWins);
    assert_eq!(game.winner(), Some(Color::Red));
    assert!(game.selection.is_none());

    // no clicks are accepted once the game is over
    game.square_clicked(4, 7);
    game.square_clicked(2, 1);
    assert!(game.selection.is_none());
    assert_eq!(game.status, Status::RedWins);

    Ok(())
}

#[test]
fn player_with_no_moves_loses() -> anyhow::Result<()> {
    let board = Board::try_from([
        "........",
        "........",
        "........",
        "..r.....",
        ".r......",
        "w.......",
        "........",
        "........",
    ])?;

    // white has a piece but nowhere to go
    assert_eq!(board.winner(), Some(Color::Red));

    Ok(())
}

#[test]
fn player_with_no_pieces_loses() -> anyhow::Result<()> {
    let board = Board::try_from([
        "........",
        "........",
        ".r......",
        "........",
        "........",
        "........",
        "........",
        "........",
    ])?;

    assert_eq!(board.winner(), Some(Color::Red));

    Ok(())
}

#[test]
fn ongoing_game_has_no_winner() {
    let board = Board::default();
    assert_eq!(board.winner(), None);
}

#[test]
fn out_of_range_clicks_are_ignored() {
    let mut game = Game::default();

    game.square_clicked(8, 0);
    game.square_clicked(0, 8);
    game.square_clicked(100, 100);

    assert_eq!(game.board, Board::default());
    assert_eq!(game.turn, Color::Red);
    assert!(game.selection.is_none());
}

#[test]
fn reselect_and_deselect() {
    let mut game = Game::default();

    game.square_clicked(2, 1);
    assert_eq!(game.selection.as_ref().unwrap().square, square(2, 1));

    // clicking another owned piece moves the selection
    game.square_clicked(2, 5);
    assert_eq!(game.selection.as_ref().unwrap().square, square(2, 5));

    // clicking a square that is neither a destination nor a piece deselects
    game.square_clicked(4, 1);
    assert!(game.selection.is_none());

    // clicking an enemy piece selects nothing
    game.square_clicked(5, 0);
    assert!(game.selection.is_none());
}

#[test]
fn turn_passes_after_a_simple_move() -> anyhow::Result<()> {
    let mut game = Game::default();

    game.square_clicked(2, 1);
    game.square_clicked(3, 2);

    assert_eq!(game.turn, Color::White);
    assert!(game.selection.is_none());
    assert_eq!(game.board.get(square(3, 2))?, Space::Man(Color::Red));
    assert_eq!(game.board.get(square(2, 1))?, Space::Empty);

    Ok(())
}
