//! End-to-end behaviour of the minimax engine

mod common;

use oxo::{
    Error, Minimax,
    adapters::ScriptedConsole,
    pipeline::{MinimaxPlayer, RandomPlayer, Series, SeriesConfig, TurnController},
    tictactoe::{Board, GameOutcome, Mark, Position},
};

use common::{random_board, side_to_move};

#[test]
fn test_minimax_self_play_always_draws() {
    let mut controller = TurnController::with_seed(99);
    let mut x = MinimaxPlayer::new(Mark::X);
    let mut o = MinimaxPlayer::new(Mark::O);

    for _ in 0..6 {
        let mut console = ScriptedConsole::silent();
        let summary = controller.play_round(&mut x, &mut o, &mut console).unwrap();
        assert_eq!(summary.outcome, GameOutcome::Draw);
        assert_eq!(summary.board.winner(), None);
    }
}

#[test]
fn test_move_choice_is_deterministic() {
    for seed in 0..40 {
        let mut board = random_board(seed, (seed % 7) as usize);
        if board.is_terminal() {
            continue;
        }
        let mark = side_to_move(&board);

        let first = Minimax::new(mark).best_move(&mut board).unwrap();
        let second = Minimax::new(mark).best_move(&mut board).unwrap();

        assert_eq!(first, second, "board {}", board.encode());
    }
}

#[test]
fn test_winning_move_is_always_taken() {
    let mut checked = 0;

    for seed in 0..300 {
        let board = random_board(seed, 4 + (seed % 4) as usize);
        if board.is_terminal() {
            continue;
        }
        let mark = side_to_move(&board);
        let can_win = board.empty_positions().into_iter().any(|p| {
            let mut probe = board;
            probe.place_move(p, mark).unwrap();
            probe.winner() == Some(mark)
        });
        if !can_win {
            continue;
        }

        let mut played = board;
        Minimax::new(mark).play(&mut played).unwrap();
        assert_eq!(played.winner(), Some(mark), "board {}", board.encode());
        checked += 1;
    }

    assert!(checked > 0);
}

#[test]
fn test_top_row_completion() {
    let mut board = Board::from_string("XX. ... ...").unwrap();
    let mut engine = Minimax::new(Mark::X);

    let mv = engine.play(&mut board).unwrap();

    assert_eq!(mv.position, Position::new(0, 2));
    assert_eq!(board.winner(), Some(Mark::X));
}

#[test]
fn test_full_board_has_no_moves() {
    let mut board = Board::from_string("XOX XOO OXX").unwrap();
    assert!(board.is_full());
    assert_eq!(board.winner(), None);

    let err = Minimax::new(Mark::O).best_move(&mut board).unwrap_err();
    assert!(matches!(err, Error::NoValidMoves));
}

#[test]
fn test_search_restores_board() {
    for seed in 0..20 {
        let mut board = random_board(seed, 3);
        if board.is_terminal() {
            continue;
        }
        let before = board;
        Minimax::new(side_to_move(&board))
            .score_moves(&mut board)
            .unwrap();
        assert_eq!(board, before);
    }
}

#[test]
fn test_minimax_never_loses_a_series() {
    let config = SeriesConfig {
        rounds: 25,
        seed: Some(2024),
    };
    let mut x = MinimaxPlayer::new(Mark::X);
    let mut o = RandomPlayer::new(Mark::O);

    let result = Series::new(config).run(&mut x, &mut o).unwrap();

    assert_eq!(result.o_wins, 0);
    assert_eq!(result.x_wins + result.draws, 25);
}
