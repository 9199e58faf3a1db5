use minesweeper_tty::placement::{place_mines, SafeZone};
use minesweeper_tty::{
    Action, Board, CellState, Content, Game, GameConfig, Outcome, Position, Step,
    MAX_MINE_PERCENTAGE,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn game_config() -> impl Strategy<Value = GameConfig> {
    (1usize..=12, 1usize..=12, 0u32..=MAX_MINE_PERCENTAGE)
        .prop_map(|(rows, cols, p)| GameConfig::new(rows, cols, p).unwrap())
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::MoveUp),
        Just(Action::MoveDown),
        Just(Action::MoveLeft),
        Just(Action::MoveRight),
        Just(Action::Open),
        Just(Action::Flag),
        Just(Action::Unknown),
    ]
}

fn movement() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::MoveUp),
        Just(Action::MoveDown),
        Just(Action::MoveLeft),
        Just(Action::MoveRight),
    ]
}

proptest! {
    #[test]
    fn test_placement_lays_exact_mine_count(config in game_config(), seed: u64, r: usize, c: usize) {
        let mut board = Board::new(config.rows, config.cols).unwrap();
        let cursor = Position::new(r % config.rows, c % config.cols);
        let mut rng = StdRng::seed_from_u64(seed);

        place_mines(&mut board, cursor, config.mines_count(), &mut rng);

        prop_assert_eq!(board.mines_count(), config.mines_count());
        prop_assert_eq!(board.mine_positions().count(), config.mines_count());
    }

    #[test]
    fn test_first_open_is_safe(config in game_config(), seed: u64, moves in prop::collection::vec(movement(), 0..20)) {
        let mut game = Game::new(config, seed).unwrap();
        for action in moves {
            game.perform(action);
        }
        let cursor = game.cursor();
        let zone = SafeZone::for_cursor(game.board(), cursor, config.mines_count());

        game.perform(Action::Open);

        let board = game.board();
        prop_assert_eq!(board.content(cursor), Content::Empty);
        prop_assert_eq!(board.state(cursor), CellState::Open);
        if matches!(zone, SafeZone::Neighborhood(_)) {
            prop_assert_eq!(board.count_neighbor_mines(cursor), 0);
        }
    }

    #[test]
    fn test_roomy_boards_give_a_blank_first_cell(rows in 5usize..=12, cols in 5usize..=12, p in 0u32..=30, seed: u64) {
        let mut game = Game::new(GameConfig::new(rows, cols, p).unwrap(), seed).unwrap();
        game.perform(Action::MoveDown);
        game.perform(Action::MoveRight);

        game.perform(Action::Open);

        prop_assert_eq!(game.board().count_neighbor_mines(Position::new(1, 1)), 0);
    }

    #[test]
    fn test_flag_twice_is_identity(config in game_config(), seed: u64, prefix in prop::collection::vec(action(), 0..30)) {
        let mut game = Game::new(config, seed).unwrap();
        for action in prefix {
            game.perform(action);
        }
        prop_assume!(game.outcome().is_none());
        let before = game.board().clone();

        game.perform(Action::Flag);
        game.perform(Action::Flag);
        prop_assert_eq!(game.board(), &before);

        game.perform(Action::Flag);
        game.perform(Action::Flag);
        game.perform(Action::Flag);
        game.perform(Action::Flag);
        prop_assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_flag_protects_from_open(config in game_config(), seed: u64, moves in prop::collection::vec(movement(), 0..20)) {
        let mut game = Game::new(config, seed).unwrap();
        game.perform(Action::Open);
        prop_assume!(game.outcome().is_none());
        for action in moves {
            game.perform(action);
        }
        prop_assume!(game.board().state(game.cursor()) == CellState::Closed);
        game.perform(Action::Flag);
        let before = game.board().clone();

        prop_assert_eq!(game.perform(Action::Open), Step::Continue);
        prop_assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_neighbor_counts_are_symmetric(rows in 1usize..=10, cols in 1usize..=10, mines in prop::collection::vec(any::<bool>(), 100)) {
        let mut board = Board::new(rows, cols).unwrap();
        for pos in board.positions().collect::<Vec<_>>() {
            if mines[pos.row * 10 + pos.col] {
                board.set_content(pos, Content::Mine);
            }
        }

        for a in board.positions() {
            for b in a.neighbors(rows, cols) {
                prop_assert!(b.neighbors(rows, cols).any(|n| n == a));
                prop_assert!(a.is_adjacent(b));
            }
        }
        let total: usize = board
            .positions()
            .map(|pos| board.count_neighbor_mines(pos) as usize)
            .sum();
        let expected: usize = board
            .mine_positions()
            .map(|pos| pos.neighbors(rows, cols).count())
            .sum();
        prop_assert_eq!(total, expected);
    }

    #[test]
    fn test_steps_match_win_and_loss_predicates(config in game_config(), seed: u64, actions in prop::collection::vec(action(), 0..200)) {
        let mut game = Game::new(config, seed).unwrap();
        for action in actions {
            let was_over = game.outcome().is_some();
            let step = game.perform(action);
            let board = game.board();

            match step {
                Step::Stop(Outcome::Lost) => prop_assert!(board.is_mine_open()),
                Step::Stop(Outcome::Won) => {
                    prop_assert!(!board.is_mine_open());
                    prop_assert_eq!(board.closed_count(), board.mines_count());
                }
                Step::Continue => {
                    prop_assert!(!was_over);
                    prop_assert!(!board.is_mine_open());
                    prop_assert!(board.closed_count() > board.mines_count());
                }
            }
            if was_over {
                break;
            }
        }
    }

    #[test]
    fn test_cursor_stays_on_board(rows in 1usize..=8, cols in 1usize..=8, moves in prop::collection::vec(movement(), 0..100)) {
        let mut game = Game::new(GameConfig::new(rows, cols, 0).unwrap(), 0).unwrap();
        for action in moves {
            game.perform(action);
            let cursor = game.cursor();
            prop_assert!(cursor.row < rows);
            prop_assert!(cursor.col < cols);
        }
    }
}
