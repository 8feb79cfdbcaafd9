//! Minimax with alpha-beta pruning and depth-limited cutoff
//!
//! The agent picks the move that minimizes the human's outcome under the
//! assumption the human plays optimally. Scores are from the human's point
//! of view: +1 human win, −1 agent win, 0 draw. Positions below the depth
//! limit are scored 0 (treated as a draw) instead of being explored, which
//! bounds the search on the larger boards.
//!
//! Each `choose_move` call is an independent search over a single clone of
//! the caller's board; trial moves are undone with [`Board::clear`] after
//! each branch returns, so no per-node board copies are made.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Mark, Pos, SearchAgent};
//!
//! let mut board = Board::new(3);
//! board.mark(Pos::new(0, 0), Mark::Cross);
//!
//! let agent = SearchAgent::new(Mark::Nought, None);
//! if let Some(pos) = agent.choose_move(&board, 3) {
//!     board.mark(pos, Mark::Nought);
//! }
//! ```

use crate::board::{Board, Mark, Pos};
use crate::rules::check_winner;

/// Score of a won position for the maximizing human
const CROSS_WIN: i32 = 1;
/// Score of a won position for the minimizing agent
const NOUGHT_WIN: i32 = -1;
/// Score of a draw or a depth-limit cutoff
const DRAW: i32 = 0;
/// Sentinel outside the score range, for alpha-beta bounds
const INF: i32 = CROSS_WIN + 1;

/// Adversarial search agent.
///
/// Stateless between calls: the two fields are fixed at construction and
/// every [`SearchAgent::choose_move`] is a fresh tree search rooted at the
/// board it is given.
#[derive(Debug, Clone, Copy)]
pub struct SearchAgent {
    /// The mark this agent plays
    mark: Mark,
    /// Cut off search at this depth, scoring the position as a draw.
    /// `None` searches the full game tree (only feasible on small boards).
    depth_limit: Option<u32>,
}

impl SearchAgent {
    pub fn new(mark: Mark, depth_limit: Option<u32>) -> Self {
        Self { mark, depth_limit }
    }

    /// Pick the best move for this agent, or `None` if the board is full.
    ///
    /// Empty squares are tried in row-major order and the first move with
    /// the strictly lowest score is kept, so ties resolve toward the lowest
    /// row, then the lowest column. The caller's board is never mutated.
    pub fn choose_move(&self, board: &Board, win_len: usize) -> Option<Pos> {
        let squares = board.empty_squares();
        if squares.is_empty() {
            return None;
        }

        let mut work = board.clone();
        let mut best_score = INF;
        let mut best_move = None;

        for pos in squares {
            work.mark(pos, self.mark);
            let score = self.minimax(&mut work, win_len, 1, true, -INF, INF);
            work.clear(pos);

            // Strict < keeps the first minimal move on ties
            if score < best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        best_move
    }

    /// Score a position with alpha-beta pruned minimax.
    ///
    /// Terminal checks run in a fixed order: human win, agent win, full
    /// board, then the depth cutoff. Pruning only skips subtrees that
    /// cannot change the result; the returned score is always identical to
    /// unpruned minimax.
    fn minimax(
        &self,
        board: &mut Board,
        win_len: usize,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        match check_winner(board, win_len) {
            Some(Mark::Cross) => return CROSS_WIN,
            Some(Mark::Nought) => return NOUGHT_WIN,
            _ => {}
        }
        if board.is_full() {
            return DRAW;
        }
        if let Some(limit) = self.depth_limit {
            if depth >= limit {
                return DRAW;
            }
        }

        if maximizing {
            let mut value = -INF;
            for pos in board.empty_squares() {
                board.mark(pos, Mark::Cross);
                value = value.max(self.minimax(board, win_len, depth + 1, false, alpha, beta));
                board.clear(pos);

                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = INF;
            for pos in board.empty_squares() {
                board.mark(pos, self.mark);
                value = value.min(self.minimax(board, win_len, depth + 1, true, alpha, beta));
                board.clear(pos);

                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        }
    }
}
