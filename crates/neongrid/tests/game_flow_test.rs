//! End-to-end flows through the public game API.

use neongrid::{Board, Game, GameStatus, Player, Position, Square};

fn play(game: &mut Game, indices: &[usize]) {
    for index in indices {
        game.click_cell(*index);
    }
}

#[test]
fn test_top_row_victory() {
    // X: 0, 1, 2; O: 3, 4 - X wins the top row on the fifth move
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    match game.status() {
        GameStatus::Won(win) => {
            assert_eq!(win.winner, Player::X);
            assert_eq!(
                win.line,
                [Position::TopLeft, Position::TopCenter, Position::TopRight]
            );
        }
        other => panic!("Expected a win for X, got {:?}", other),
    }
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_full_board_stalemate() {
    // Fills the board as X O X / O X X / O X O: no aligned triple
    let mut game = Game::new();
    play(&mut game, &[0, 1, 2, 3, 5, 6, 4, 8, 7]);

    assert_eq!(game.status(), GameStatus::Drawn);
    assert_eq!(game.history().len(), 10);
    assert!(game.board().is_full());
}

#[test]
fn test_moves_after_decision_are_absorbed() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let len = game.history().len();

    play(&mut game, &[5, 6, 7, 8]);
    assert_eq!(game.history().len(), len);
}

#[test]
fn test_time_travel_branching() {
    // Five moves, jump back to move 2, branch: the log shrinks to 4 and
    // the abandoned moves are gone.
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    game.jump_to(2);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.to_move(), Player::X);

    game.click(Position::BottomRight);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.history().cursor(), 3);
    assert_eq!(
        game.board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    // Moves 4 and 5 of the old branch never happened on this timeline
    assert!(game.board().is_empty(Position::Center));
    assert!(game.board().is_empty(Position::TopRight));
}

#[test]
fn test_scrubbing_a_won_game_reopens_play_upstream() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert!(matches!(game.status(), GameStatus::Won(_)));

    // The finished board stays inspectable at the tail...
    game.jump_to(5);
    assert!(matches!(game.status(), GameStatus::Won(_)));

    // ...and earlier snapshots are playable again.
    game.jump_to(4);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_turn_parity_across_the_whole_log() {
    let mut game = Game::new();
    play(&mut game, &[4, 0, 8, 2]);

    for cursor in 0..game.history().len() {
        game.jump_to(cursor);
        let expected = if cursor % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.to_move(), expected, "cursor {}", cursor);
    }
}

#[test]
fn test_reset_after_anything() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    game.jump_to(3);
    game.reset();

    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.history().cursor(), 0);
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_board_snapshot_serializes() {
    let mut game = Game::new();
    game.click(Position::Center);

    let json = serde_json::to_string(game.board()).expect("board serializes");
    let back: Board = serde_json::from_str(&json).expect("board deserializes");
    assert_eq!(&back, game.board());
}
