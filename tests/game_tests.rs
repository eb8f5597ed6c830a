use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    random_board, AiPlayer, Board, BoardError, Coord, FleetPlacer, Game, GameStatus, HumanPlayer,
    Orientation, Player, Ship, ShotResult, Side, BOARD_SIZE, NUM_SHIPS,
};

/// A full fleet laid out at known positions.
fn known_board() -> Board {
    let mut board = Board::new();
    let layout = [
        (0, 0, 3, Orientation::Horizontal),
        (0, 4, 2, Orientation::Vertical),
        (2, 0, 2, Orientation::Vertical),
        (2, 2, 1, Orientation::Vertical),
        (3, 4, 1, Orientation::Vertical),
        (5, 0, 1, Orientation::Vertical),
        (5, 2, 1, Orientation::Vertical),
    ];
    for (row, col, len, orientation) in layout {
        board
            .add_ship(Ship::new(Coord::new(row, col), len, orientation))
            .unwrap();
    }
    board.reset_shot_history();
    board
}

fn known_ship_cells() -> Vec<Coord> {
    known_board().ships().iter().flat_map(|s| s.cells()).collect()
}

#[test]
fn test_ai_vs_ai_game_ends_when_a_fleet_is_gone() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut game = Game::with_random_boards(
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        &FleetPlacer::default(),
        &mut rng,
    )
    .unwrap();

    let mut turns = 0;
    while let Some(_report) = game.play_turn(&mut rng).unwrap() {
        turns += 1;
        let human = game.board(Side::Human).sunk_count();
        let computer = game.board(Side::Computer).sunk_count();
        if game.status() == GameStatus::InProgress {
            assert!(human < NUM_SHIPS && computer < NUM_SHIPS);
        }
        assert!(turns <= 72, "game took too many turns");
    }

    match game.status() {
        GameStatus::Finished { winner } => {
            assert_eq!(game.board(winner.opponent()).sunk_count(), NUM_SHIPS);
            assert!(game.board(winner).sunk_count() < NUM_SHIPS);
        }
        other => panic!("unexpected status {:?}", other),
    }
    assert!(game.play_turn(&mut rng).unwrap().is_none());
}

#[test]
fn test_human_sinking_everything_wins_without_computer_moving() {
    let mut rng = SmallRng::seed_from_u64(5);
    let human_board = random_board(&mut rng);
    let mut game = Game::new(
        Box::new(HumanPlayer::scripted(known_ship_cells())),
        Box::new(AiPlayer::new()),
        human_board,
        known_board(),
    )
    .unwrap();

    let status = game.run(&mut rng).unwrap();
    assert_eq!(status, GameStatus::Finished { winner: Side::Human });
    assert_eq!(game.shots_fired(), 11);
    assert_eq!(game.board(Side::Human).shots().count_ones(), 0);
    assert_eq!(game.board(Side::Computer).sunk_count(), NUM_SHIPS);
}

#[test]
fn test_miss_passes_turn_and_hit_keeps_it() {
    let mut rng = SmallRng::seed_from_u64(9);
    let human_board = random_board(&mut rng);
    let targets = vec![Coord::new(0, 0), Coord::new(4, 4)];
    let mut game = Game::new(
        Box::new(HumanPlayer::scripted(targets)),
        Box::new(AiPlayer::new()),
        human_board,
        known_board(),
    )
    .unwrap();

    let first = game.play_turn(&mut rng).unwrap().unwrap();
    assert_eq!((first.side, first.result), (Side::Human, ShotResult::Hit));
    assert_eq!(game.to_move(), Side::Human);

    let second = game.play_turn(&mut rng).unwrap().unwrap();
    assert_eq!((second.side, second.result), (Side::Human, ShotResult::Miss));
    assert_eq!(game.to_move(), Side::Computer);

    let third = game.play_turn(&mut rng).unwrap().unwrap();
    assert_eq!(third.side, Side::Computer);
}

#[test]
fn test_rejected_targets_are_retried_within_one_move() {
    let mut rng = SmallRng::seed_from_u64(11);
    let human_board = random_board(&mut rng);
    let targets = vec![
        Coord::new(10, 10),
        Coord::new(0, 0),
        Coord::new(0, 0),
        Coord::new(6, 0),
        Coord::new(4, 4),
    ];
    let mut game = Game::new(
        Box::new(HumanPlayer::scripted(targets)),
        Box::new(AiPlayer::new()),
        human_board,
        known_board(),
    )
    .unwrap();

    let first = game.play_turn(&mut rng).unwrap().unwrap();
    assert_eq!(first.target, Coord::new(0, 0));
    let second = game.play_turn(&mut rng).unwrap().unwrap();
    assert_eq!(second.target, Coord::new(4, 4));
    assert_eq!(game.shots_fired(), 2);
}

#[test]
fn test_closed_input_abandons_game() {
    let mut rng = SmallRng::seed_from_u64(13);
    let human_board = random_board(&mut rng);
    let mut game = Game::new(
        Box::new(HumanPlayer::scripted(Vec::new())),
        Box::new(AiPlayer::new()),
        human_board,
        known_board(),
    )
    .unwrap();
    assert!(game.board(Side::Computer).is_hidden());
    assert!(!game.board(Side::Human).is_hidden());

    assert_eq!(
        game.run(&mut rng).unwrap(),
        GameStatus::Abandoned { by: Side::Human }
    );
    assert_eq!(game.shots_fired(), 0);
}

#[test]
fn test_board_without_full_fleet_is_refused() {
    let mut rng = SmallRng::seed_from_u64(17);
    let one_ship = || {
        let mut board = Board::new();
        board
            .add_ship(Ship::new(Coord::new(0, 0), 1, Orientation::Vertical))
            .unwrap();
        board
    };

    let err = Game::new(
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        random_board(&mut rng),
        one_ship(),
    )
    .err();
    assert_eq!(err, Some(BoardError::IncompleteFleet { ships: 1 }));

    let err = Game::new(
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        one_ship(),
        random_board(&mut rng),
    )
    .err();
    assert_eq!(err, Some(BoardError::IncompleteFleet { ships: 1 }));
}

#[test]
fn test_no_move_left_on_fully_targeted_board() {
    let mut rng = SmallRng::seed_from_u64(19);
    let mut board = known_board();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            // cells swept around sunk ships are already in the history
            let _ = board.shoot(Coord::new(row, col));
        }
    }
    assert_eq!(board.shots().count_ones(), BOARD_SIZE * BOARD_SIZE);

    let mut ai = AiPlayer::new();
    assert_eq!(ai.make_move(&mut board, &mut rng), Ok(None));
}
