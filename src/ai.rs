//! AI move selection: random, minimax-optimal, and a 60/40 blend.

use crate::board::{empty_cells, is_full, Board, Mark, CELL_COUNT, LINES};
use crate::session::{Difficulty, GameSession};
use rand::Rng;

/// Pick uniformly among the empty cells. None if the board is full.
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty = empty_cells(board);
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.gen_range(0..empty.len())])
}

/// Score a board from the AI's perspective: +10 if the AI's mark has a
/// completed line, -10 if the opponent does, 0 otherwise.
fn evaluate(board: &Board, ai_mark: Mark) -> i32 {
    for line in LINES {
        if let Some(mark) = board[line[0]] {
            if board[line[1]] == Some(mark) && board[line[2]] == Some(mark) {
                return if mark == ai_mark { 10 } else { -10 };
            }
        }
    }
    0
}

/// Minimax with alpha-beta pruning. Each recursion step operates on its own
/// copy of the board, so the caller's board is never mutated.
fn minimax(board: &Board, maximizing: bool, mut alpha: i32, mut beta: i32, ai_mark: Mark) -> i32 {
    let score = evaluate(board, ai_mark);
    if score != 0 {
        return score;
    }
    if is_full(board) {
        return 0;
    }

    if maximizing {
        let mut best = -10_000;
        for i in 0..CELL_COUNT {
            if board[i].is_none() {
                let mut next = *board;
                next[i] = Some(ai_mark);
                best = best.max(minimax(&next, false, alpha, beta, ai_mark));
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
        }
        best
    } else {
        let mut best = 10_000;
        let opponent = ai_mark.opponent();
        for i in 0..CELL_COUNT {
            if board[i].is_none() {
                let mut next = *board;
                next[i] = Some(opponent);
                best = best.min(minimax(&next, true, alpha, beta, ai_mark));
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
        }
        best
    }
}

/// Provably optimal move for `ai_mark`: evaluate every empty cell with
/// minimax and keep the strictly best score, first-found winning ties in
/// ascending index order. Falls back to a random move if no candidate was
/// scored (only possible on a full board).
pub fn best_move<R: Rng>(board: &Board, ai_mark: Mark, rng: &mut R) -> Option<usize> {
    let mut best_score = -10_000;
    let mut best_index = None;
    for i in 0..CELL_COUNT {
        if board[i].is_none() {
            let mut next = *board;
            next[i] = Some(ai_mark);
            let score = minimax(&next, false, -10_000, 10_000, ai_mark);
            if score > best_score {
                best_score = score;
                best_index = Some(i);
            }
        }
    }
    match best_index {
        Some(i) => Some(i),
        None => random_move(board, rng),
    }
}

/// Medium tier: roughly 60% optimal-strength, 40% random-strength play.
pub fn medium_move<R: Rng>(board: &Board, ai_mark: Mark, rng: &mut R) -> Option<usize> {
    if rng.gen::<f64>() > 0.4 {
        best_move(board, ai_mark, rng)
    } else {
        random_move(board, rng)
    }
}

/// Select the AI's move for the session's difficulty tier.
/// None if the session is already finished (or the board is full).
pub fn choose_move<R: Rng>(session: &GameSession, rng: &mut R) -> Option<usize> {
    if session.finished {
        return None;
    }
    let ai_mark = session.ai_mark();
    match session.difficulty {
        Difficulty::Easy => random_move(&session.board, rng),
        Difficulty::Medium => medium_move(&session.board, ai_mark, rng),
        Difficulty::Hard => best_move(&session.board, ai_mark, rng),
    }
}
