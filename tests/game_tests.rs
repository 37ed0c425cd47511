use narde::backgammon::{Board, CheckerId, Color, Game, GameEvent, MoveValidator, Position};
use narde::config::GameConfig;
use narde::{Error, IllegalMove};

fn seeded_game() -> Game {
    Game::new(&GameConfig { seed: Some(17), ..GameConfig::default() })
}

fn top(game: &Game, cell: usize) -> CheckerId {
    game.board().top_checker(cell).expect("cell has a checker")
}

#[test]
fn white_plays_two_and_five() {
    let mut game = seeded_game();
    assert_eq!(game.current_turn(), Color::White);
    assert!(game.can_roll());

    game.roll_with(2, 5).unwrap();
    assert_eq!(game.available_moves(), vec![2, 5]);
    assert!(!game.can_roll());

    let first = top(&game, 0);
    let pool = game.turn().move_pool();
    assert!(game.validator().is_legal(game.board(), first, 0, 2, pool));

    let played = game.drop_checker(first, 2).unwrap();
    assert_eq!(played.distance(), 2);
    assert_eq!(game.board().checker(first).unwrap().cell_index(), Some(2));
    assert_eq!(game.available_moves(), vec![5]);
    assert_eq!(game.current_turn(), Color::White);
    assert!(game.can_move());

    let second = top(&game, 0);
    game.drop_checker(second, 5).unwrap();
    assert!(game.available_moves().is_empty());
    assert_eq!(game.current_turn(), Color::Black);
    assert!(game.can_roll());
    assert!(!game.can_move());

    let events = game.drain_events();
    assert_eq!(
        events,
        vec![
            GameEvent::DiceRolled { color: Color::White, values: [2, 5] },
            GameEvent::BonusDice { active: false, value: None },
            GameEvent::CheckerMoved { checker: first, from: Position::Cell(0), to: 2 },
            GameEvent::CheckerMoved { checker: second, from: Position::Cell(0), to: 5 },
            GameEvent::TurnSwitched { color: Color::Black },
        ]
    );
    assert!(game.drain_events().is_empty());

    let history = game.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].color(), Color::White);
    assert_eq!(history[0].len(), 2);
    assert!(!history[0].forfeited());
}

#[test]
fn doubles_grant_four_moves() {
    let mut game = seeded_game();
    game.roll_with(4, 4).unwrap();
    assert_eq!(game.available_moves(), vec![4, 4, 4, 4]);
    assert!(game.drain_events().contains(&GameEvent::BonusDice { active: true, value: Some(4) }));

    let mut cell = 0;
    for played in 0..4 {
        let checker = top(&game, cell);
        game.drop_checker(checker, cell + 4).unwrap();
        cell += 4;
        assert_eq!(game.available_moves().len(), 3 - played);
    }
    assert_eq!(game.current_turn(), Color::Black);
    assert_eq!(game.board().count(16), 1);
}

#[test]
fn only_the_top_checker_moves() {
    let mut game = seeded_game();
    game.roll_with(5, 5).unwrap();
    let first = top(&game, 0);
    game.drop_checker(first, 5).unwrap();
    let second = top(&game, 0);
    game.drop_checker(second, 5).unwrap();

    assert!(game.board().is_top(second, 5));
    assert!(!game.board().is_top(first, 5));
    assert!(!game.can_drag(first));
    assert!(matches!(
        game.check_drag(first),
        Err(Error::IllegalMove(IllegalMove::NotOnTop))
    ));
    let pool = game.turn().move_pool();
    assert!(!game.validator().is_legal(game.board(), first, 5, 10, pool));
    assert!(game.validator().is_legal(game.board(), second, 5, 10, pool));
}

#[test]
fn drags_are_gated_by_turn_and_roll() {
    let mut game = seeded_game();
    let white = top(&game, 0);
    let black = top(&game, 23);

    assert!(matches!(game.check_drag(white), Err(Error::NotRolled)));
    game.roll_with(1, 3).unwrap();
    assert!(game.can_drag(white));
    assert!(matches!(game.check_drag(black), Err(Error::NotYourTurn { turn: Color::White, .. })));
    assert!(matches!(game.check_drag(CheckerId(250)), Err(Error::UnknownChecker(_))));
    assert!(matches!(game.roll(), Err(Error::RollNotAllowed)));
}

#[test]
fn rejected_drop_changes_nothing() {
    let mut game = seeded_game();
    game.roll_with(3, 6).unwrap();
    game.drain_events();
    let white = top(&game, 0);
    let before = game.board().to_fancy_string();

    let err = game.drop_checker(white, 4).unwrap_err();
    assert!(matches!(err, Error::IllegalMove(IllegalMove::DistanceUnavailable(4))));
    assert!(matches!(
        game.drop_checker(white, 30),
        Err(Error::IllegalMove(IllegalMove::OffBoard(30)))
    ));

    assert_eq!(game.board().to_fancy_string(), before);
    assert_eq!(game.available_moves(), vec![3, 6]);
    assert_eq!(game.board().checker(white).unwrap().cell_index(), Some(0));
    assert!(game.drain_events().is_empty());
}

#[test]
fn hit_checker_must_reenter_first() {
    let mut board = Board::empty();
    let white = board.place(Color::White, 2).unwrap();
    let partner = board.place(Color::White, 8).unwrap();
    let blot = board.place(Color::Black, 6).unwrap();
    let runner = board.place(Color::Black, 20).unwrap();
    let mut game = Game::with_board(board, Color::White, MoveValidator::default(), 3);

    game.roll_with(4, 1).unwrap();
    game.drop_checker(white, 6).unwrap();
    assert!(game.board().checker(blot).unwrap().is_on_bar());
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::CheckerHit { checker: blot, cell: 6 }));

    game.drop_checker(partner, 9).unwrap();
    assert_eq!(game.current_turn(), Color::Black);

    game.roll_with(1, 2).unwrap();
    assert!(matches!(
        game.check_drag(runner),
        Err(Error::IllegalMove(IllegalMove::MustEnterFromBar(Color::Black)))
    ));
    assert_eq!(game.check_drag(blot).unwrap(), Position::Bar);

    let entry = game.drop_checker(blot, 23).unwrap();
    assert!(entry.is_entry());
    assert_eq!(entry.distance(), 1);
    assert_eq!(game.board().bar_count(Color::Black), 0);

    game.drop_checker(runner, 18).unwrap();
    assert_eq!(game.current_turn(), Color::White);
    game.board().check_invariants().unwrap();
}

#[test]
fn blocked_roll_is_forfeited() {
    let mut board = Board::empty();
    board.place(Color::White, 20).unwrap();
    for cell in [21, 22] {
        board.place(Color::Black, cell).unwrap();
        board.place(Color::Black, cell).unwrap();
    }
    let mut game = Game::with_board(board, Color::White, MoveValidator::default(), 9);

    game.roll_with(1, 2).unwrap();
    assert_eq!(game.current_turn(), Color::Black);
    assert!(game.can_roll());
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::TurnForfeited { color: Color::White, unused: 2 }));
    assert_eq!(events.last(), Some(&GameEvent::TurnSwitched { color: Color::Black }));
    assert!(game.history()[0].forfeited());
    assert!(game.history()[0].is_empty());
}

#[test]
fn leftover_die_is_forfeited_after_a_move() {
    let mut board = Board::empty();
    let white = board.place(Color::White, 15).unwrap();
    for cell in [17, 18, 19] {
        board.place(Color::Black, cell).unwrap();
        board.place(Color::Black, cell).unwrap();
    }
    let mut game = Game::with_board(board, Color::White, MoveValidator::default(), 9);

    game.roll_with(1, 3).unwrap();
    assert_eq!(game.legal_moves().len(), 1);
    game.drop_checker(white, 16).unwrap();

    assert_eq!(game.current_turn(), Color::Black);
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::TurnForfeited { color: Color::White, unused: 1 }));
    assert_eq!(game.history()[0].len(), 1);
}

#[test]
fn loose_direction_allows_backward_moves() {
    let config = GameConfig {
        seed: Some(2),
        rules: narde::config::RuleConfig { enforce_direction: false },
        ..GameConfig::default()
    };
    let mut board = Board::empty();
    let white = board.place(Color::White, 10).unwrap();
    board.place(Color::Black, 23).unwrap();
    let mut game = Game::with_board(board, config.first_turn, MoveValidator::new(config.rules.enforce_direction), 2);

    game.roll_with(3, 2).unwrap();
    game.drop_checker(white, 7).unwrap();
    assert_eq!(game.board().checker(white).unwrap().cell_index(), Some(7));
}
