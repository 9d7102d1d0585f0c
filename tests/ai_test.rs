//! Integration test: AI move selection
//!
//! Covers tier legality, minimax optimality scenarios, and optimal
//! self-play always ending in a draw.

use noughts::ai::{best_move, choose_move, medium_move, random_move};
use noughts::board::{outcome, Board, Mark, Outcome, CELL_COUNT};
use noughts::session::{Difficulty, GameMode, GameSession};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn board_from(marks: &[(usize, Mark)]) -> Board {
    let mut board: Board = [None; CELL_COUNT];
    for &(i, mark) in marks {
        board[i] = Some(mark);
    }
    board
}

// =============================================================================
// Random tier
// =============================================================================

#[test]
fn test_random_tier_returns_legal_moves_across_seeds() {
    let board = board_from(&[(0, Mark::X), (3, Mark::O), (4, Mark::X), (7, Mark::O)]);
    for seed in 0..50 {
        let mut rng = seeded_rng(seed);
        let index = random_move(&board, &mut rng).expect("board has empty cells");
        assert!(board[index].is_none(), "seed {} picked occupied cell", seed);
    }
}

#[test]
fn test_random_tier_returns_none_exactly_when_full() {
    let mut board: Board = [None; CELL_COUNT];
    let mut rng = seeded_rng(1);
    for i in 0..CELL_COUNT {
        assert!(random_move(&board, &mut rng).is_some());
        board[i] = Some(if i % 2 == 0 { Mark::X } else { Mark::O });
    }
    assert_eq!(random_move(&board, &mut rng), None);
}

// =============================================================================
// Optimal tier scenarios
// =============================================================================

#[test]
fn test_optimal_takes_immediate_win() {
    // X X _ / O O _ / _ _ _ with X to move: completing the top row at
    // index 2 outranks blocking
    let board = board_from(&[(0, Mark::X), (1, Mark::X), (3, Mark::O), (4, Mark::O)]);
    let mut rng = seeded_rng(1);
    assert_eq!(best_move(&board, Mark::X, &mut rng), Some(2));
}

#[test]
fn test_optimal_answers_center_opening_with_a_corner() {
    let board = board_from(&[(4, Mark::X)]);
    let mut rng = seeded_rng(1);
    let reply = best_move(&board, Mark::O, &mut rng).unwrap();
    assert!(
        [0, 2, 6, 8].contains(&reply),
        "edge reply {} loses by force",
        reply
    );
}

#[test]
fn test_optimal_never_picks_occupied_cells_during_playouts() {
    let mut rng = seeded_rng(9);
    for _ in 0..20 {
        let mut board: Board = [None; CELL_COUNT];
        let mut mover = Mark::X;
        while outcome(&board).is_none() {
            let index = best_move(&board, mover, &mut rng).unwrap();
            assert!(board[index].is_none());
            board[index] = Some(mover);
            mover = mover.opponent();
        }
    }
}

#[test]
fn test_optimal_self_play_always_draws() {
    // Optimal vs optimal from the empty board must end in a draw,
    // regardless of which mark moves first
    for first in [Mark::X, Mark::O] {
        let mut board: Board = [None; CELL_COUNT];
        let mut mover = first;
        let mut rng = seeded_rng(1);
        loop {
            match outcome(&board) {
                Some(result) => {
                    assert_eq!(result, Outcome::Draw, "first mover {:?}", first);
                    break;
                }
                None => {
                    let index = best_move(&board, mover, &mut rng).unwrap();
                    board[index] = Some(mover);
                    mover = mover.opponent();
                }
            }
        }
    }
}

#[test]
fn test_optimal_second_player_never_loses_to_random() {
    for seed in 0..30 {
        let mut rng = seeded_rng(seed);
        let mut board: Board = [None; CELL_COUNT];
        loop {
            // Random X moves first
            if let Some(index) = random_move(&board, &mut rng) {
                board[index] = Some(Mark::X);
            }
            if outcome(&board).is_some() {
                break;
            }
            let index = best_move(&board, Mark::O, &mut rng).unwrap();
            board[index] = Some(Mark::O);
            if outcome(&board).is_some() {
                break;
            }
        }
        match outcome(&board).unwrap() {
            Outcome::Win { mark, .. } => {
                assert_eq!(mark, Mark::O, "seed {}: random X beat optimal O", seed)
            }
            Outcome::Draw => {}
        }
    }
}

// =============================================================================
// Medium tier and dispatch
// =============================================================================

#[test]
fn test_medium_tier_always_returns_legal_moves() {
    let board = board_from(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
    for seed in 0..50 {
        let mut rng = seeded_rng(seed);
        let index = medium_move(&board, Mark::O, &mut rng).unwrap();
        assert!(board[index].is_none());
    }
}

#[test]
fn test_dispatch_returns_none_for_finished_session() {
    let mut session = GameSession::new();
    session.mode = GameMode::HumanVsAi;
    session.finished = true;
    for difficulty in Difficulty::ALL {
        session.difficulty = difficulty;
        let mut rng = seeded_rng(1);
        assert_eq!(choose_move(&session, &mut rng), None);
    }
}

#[test]
fn test_dispatch_uses_the_session_ai_mark() {
    // AI holds O here; with O O _ on the middle row the hard tier must
    // complete it rather than chase X's threats
    let mut session = GameSession::new();
    session.mode = GameMode::HumanVsAi;
    session.difficulty = Difficulty::Hard;
    session.set_player1_mark(Mark::X);
    session.board = board_from(&[
        (0, Mark::X),
        (1, Mark::X),
        (3, Mark::O),
        (4, Mark::O),
        (2, Mark::O),
    ]);
    let mut rng = seeded_rng(1);
    assert_eq!(choose_move(&session, &mut rng), Some(5));
}
