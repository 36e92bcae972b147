//! Tests for turn order, win and tie detection, and restart.

use tictactoe_web::{Cell, Game, GameErrorKind, GameStatus, Marker, Position, TurnEvent, rules};

fn play_all(game: &mut Game, moves: &[usize]) -> Vec<TurnEvent> {
    moves.iter().map(|&m| game.play_turn(m).expect("Valid position")).collect()
}

fn cells(symbols: &str) -> Vec<Cell> {
    symbols
        .chars()
        .map(|c| match c {
            'X' => Cell::Marked(Marker::X),
            'O' => Cell::Marked(Marker::O),
            _ => Cell::Empty,
        })
        .collect()
}

#[test]
fn start_gives_fresh_game() {
    let game = Game::start("Ann", "Bob");
    assert_eq!(game.current_player().name(), "Ann");
    assert_eq!(*game.current_player().marker(), Marker::X);
    assert_eq!(*game.players()[1].marker(), Marker::O);
    assert!(!game.is_over());
    assert!(game.board().read().iter().all(|c| c.is_empty()));
}

#[test]
fn turns_alternate() {
    let mut game = Game::start("Ann", "Bob");
    let event = game.play_turn(4).unwrap();
    assert_eq!(event.to_string(), "Bob's turn");
    assert_eq!(game.current_player().name(), "Bob");

    game.play_turn(0).unwrap();
    assert_eq!(game.current_player().name(), "Ann");
    assert_eq!(game.board().cell(Position::TopLeft), Cell::Marked(Marker::O));
}

#[test]
fn top_row_win_for_x() {
    let mut game = Game::start("Ann", "Bob");
    let events = play_all(&mut game, &[0, 3, 1, 4, 2]);

    let last = events.last().unwrap();
    match last {
        TurnEvent::Won { winner } => assert_eq!(winner.name(), "Ann"),
        other => panic!("expected a win, got {:?}", other),
    }
    assert_eq!(last.to_string(), "Ann wins!");
    assert!(game.is_over());
    assert_eq!(game.status(), GameStatus::Won(Marker::X));
    assert_eq!(game.winner().map(|p| p.name().as_str()), Some("Ann"));
    assert_eq!(game.board().read().to_vec(), cells("XXXOO...."));
}

#[test]
fn full_board_without_line_is_tie() {
    let mut game = Game::start("Ann", "Bob");
    // X O X / X O O / O X X
    let events = play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(events.last(), Some(&TurnEvent::Tie));
    assert_eq!(events.last().unwrap().to_string(), "It's a tie!");
    assert!(game.is_over());
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), GameStatus::Tie);
}

#[test]
fn win_on_last_cell_beats_tie() {
    let mut game = Game::start("Ann", "Bob");
    // X O X / O X O / O X X  -- X completes the main diagonal on the ninth move
    let events = play_all(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert!(game.board().is_full());
    assert!(matches!(events.last(), Some(TurnEvent::Won { .. })));
    assert_eq!(game.status(), GameStatus::Won(Marker::X));
}

#[test]
fn occupied_cell_keeps_board_and_turn() {
    let mut game = Game::start("Ann", "Bob");
    game.play_turn(0).unwrap();
    let before = game.clone();

    let event = game.play_turn(0).unwrap();
    assert_eq!(event, TurnEvent::CellOccupied);
    assert_eq!(game, before);
    assert_eq!(game.current_player().name(), "Bob");
}

#[test]
fn moves_after_game_over_change_nothing() {
    let mut game = Game::start("Ann", "Bob");
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    let finished = game.clone();

    for position in 0..9 {
        assert_eq!(game.play_turn(position).unwrap(), TurnEvent::GameOver);
        assert_eq!(game, finished);
    }
    assert_eq!(
        TurnEvent::GameOver.to_string(),
        "Game is over. Restart to play again."
    );
}

#[test]
fn out_of_range_position_is_an_error() {
    let mut game = Game::start("Ann", "Bob");
    let before = game.clone();

    let err = game.play_turn(9).unwrap_err();
    assert_eq!(err.kind, GameErrorKind::PositionOutOfRange(9));
    assert_eq!(game, before);
    assert!(game.play_turn(usize::MAX).is_err());
}

#[test]
fn out_of_range_error_points_at_the_caller() {
    let mut game = Game::start("Ann", "Bob");
    let line = line!() + 1;
    let err = game.play_turn(42).unwrap_err();
    assert_eq!(err.file, file!());
    assert_eq!(err.line, line);
}

#[test]
fn restart_resets_from_any_state() {
    let mut game = Game::start("Ann", "Bob");

    game.play_turn(4).unwrap();
    let event = game.restart();
    assert_eq!(event.to_string(), "Game restarted. Ann's turn");
    assert_eq!(game, Game::start("Ann", "Bob"));

    play_all(&mut game, &[0, 3, 1, 4, 2]);
    game.restart();
    assert!(!game.is_over());
    assert_eq!(game.current_player().name(), "Ann");
    assert_eq!(game.board().occupied(), 0);
    assert_eq!(game.players()[1].name(), "Bob");
}

/// Walks every reachable game and checks the move invariants at each step.
#[test]
fn invariants_hold_over_every_game() {
    fn walk(game: &Game, visited: &mut usize) {
        *visited += 1;
        for position in 0..9 {
            let mut next = game.clone();
            let mover = game.current_player().clone();
            let event = next.play_turn(position).unwrap();

            if game.is_over() {
                assert_eq!(event, TurnEvent::GameOver);
                assert_eq!(&next, game);
                continue;
            }

            let before = game.board().read()[position];
            if !before.is_empty() {
                assert_eq!(event, TurnEvent::CellOccupied);
                assert_eq!(&next, game);
                continue;
            }

            // Cells never revert and exactly one cell was filled.
            for (old, new) in game.board().read().iter().zip(next.board().read()) {
                if !old.is_empty() {
                    assert_eq!(old, new);
                }
            }
            assert_eq!(next.board().occupied(), game.board().occupied() + 1);

            let won = rules::has_line(next.board(), *mover.marker());
            match &event {
                TurnEvent::Won { winner } => {
                    assert!(won);
                    assert_eq!(winner, &mover);
                    assert!(next.is_over());
                }
                TurnEvent::Tie => {
                    assert!(!won);
                    assert!(next.board().is_full());
                    assert!(rules::is_tie(next.board()));
                }
                TurnEvent::Continued { next: player } => {
                    assert!(!won);
                    assert!(!next.board().is_full());
                    assert_ne!(player, &mover);
                    assert_eq!(next.current_player(), player);
                    walk(&next, visited);
                }
                other => panic!("unexpected event {:?}", other),
            }
        }
    }

    let mut visited = 0;
    walk(&Game::start("Ann", "Bob"), &mut visited);
    // Non-terminal positions in the full game tree, counted with move order.
    assert_eq!(visited, 294_778);
}
