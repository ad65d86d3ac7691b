//! Tests for move history and time travel.

use strictly_timetravel::invariants::{HistoryInvariants, InvariantSet};
use strictly_timetravel::{Board, Game, Player, Position, Square};

fn play(game: &mut Game, positions: &[Position]) {
    for pos in positions {
        assert!(game.click(*pos), "move at {} should be legal", pos);
    }
}

#[test]
fn test_history_truncation_after_jump() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ],
    );
    assert_eq!(game.history().len(), 5);

    game.jump_to(2).unwrap();
    let next = game.current_squares().with_mark(Position::BottomRight, Player::X);
    game.handle_play(next);

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.history()[3], next);
    assert_eq!(game.current_move(), 3);
    assert!(HistoryInvariants::check_all(&game).is_ok());
}

#[test]
fn test_turn_alternation() {
    let mut game = Game::new();
    let positions = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
    ];
    let expected = [Player::X, Player::O, Player::X, Player::O, Player::X];

    for (k, (pos, player)) in positions.iter().zip(expected).enumerate() {
        assert!(game.click(*pos));
        let move_number = k + 1;
        assert_eq!(game.current_squares().get(*pos), Square::Occupied(player));
        assert_eq!(game.x_is_next(), move_number % 2 == 0);
    }
}

#[test]
fn test_end_to_end_diagonal_win() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomRight,
        ],
    );

    let x = Square::Occupied(Player::X);
    let o = Square::Occupied(Player::O);
    let e = Square::Empty;
    assert_eq!(
        *game.current_squares(),
        Board::from_squares([x, o, o, e, x, e, e, e, x])
    );

    let view = game.render();
    assert_eq!(view.status().to_string(), "Winner: X");
    assert_eq!(
        *view.winning_line(),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );

    let before = game.clone();
    for pos in Position::ALL {
        assert!(!game.click(pos));
    }
    assert_eq!(game, before);

    game.jump_to(0).unwrap();
    assert_eq!(*game.current_squares(), Board::new());
    assert_eq!(game.render().status().to_string(), "Next player: X");
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_jump_back_then_branch() {
    let mut game = Game::new();
    play(&mut game, &[Position::Center, Position::TopLeft, Position::BottomLeft]);

    game.jump_to(1).unwrap();
    assert!(!game.x_is_next());
    assert_eq!(game.render().status().to_string(), "Next player: O");

    assert!(game.click(Position::BottomRight));
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_move(), 2);
    assert!(game.current_squares().is_empty(Position::TopLeft));
    assert_eq!(
        game.current_squares().get(Position::BottomRight),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_time_travel_out_of_won_state() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    assert!(game.render().status().to_string().starts_with("Winner"));

    game.jump_to(4).unwrap();
    assert!(game.click(Position::BottomLeft));
    assert_eq!(game.render().status().to_string(), "Next player: O");
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_move_labels_follow_history() {
    let mut game = Game::new();
    play(&mut game, &[Position::Center, Position::TopLeft]);

    let labels: Vec<String> = game
        .render()
        .moves()
        .iter()
        .map(|m| m.description().clone())
        .collect();
    assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
}

#[test]
fn test_full_board_without_winner_keeps_next_player_status() {
    let mut game = Game::new();
    // X O X / X O O / O X X
    play(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );
    assert_eq!(game.current_squares().occupied_count(), 9);
    assert_eq!(game.render().status().to_string(), "Next player: O");
    assert!(!game.click(Position::Center));
}
