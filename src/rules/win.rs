//! Windowed win scan
//!
//! A player wins with `win_len` identical marks in a contiguous run:
//! horizontal, vertical, or either diagonal. The scan slides a fixed-length
//! window over every run and reports the first match. Scan order is fixed
//! (horizontal rows, then vertical columns, then ↘ before ↙ diagonals with
//! anchors in row-major order) so the first-found result is deterministic.

use crate::board::{Board, Mark, Pos};

/// Check if a window of `win_len` cells starting at (`row`, `col`) and
/// stepping by (`dr`, `dc`) holds identical non-empty marks.
#[inline]
fn window_winner(board: &Board, row: usize, col: usize, dr: usize, dc: usize, win_len: usize) -> Option<Mark> {
    let first = board.get(Pos::new(row, col));
    if first == Mark::Empty {
        return None;
    }
    for i in 1..win_len {
        if board.get(Pos::new(row + dr * i, col + dc * i)) != first {
            return None;
        }
    }
    Some(first)
}

/// Check if a ↙ window anchored at (`row`, `col`) holds identical non-empty
/// marks. The anchor is the top-left corner of the window's bounding square;
/// the run starts at its bottom-left cell and steps up-right.
#[inline]
fn anti_diagonal_winner(board: &Board, row: usize, col: usize, win_len: usize) -> Option<Mark> {
    let first = board.get(Pos::new(row + win_len - 1, col));
    if first == Mark::Empty {
        return None;
    }
    for i in 1..win_len {
        if board.get(Pos::new(row + win_len - 1 - i, col + i)) != first {
            return None;
        }
    }
    Some(first)
}

/// Scan the whole board for a winning run of length `win_len`.
///
/// Returns the mark of the first run found, `None` if there is none.
/// Requires `win_len <= board.size()` and `win_len > 0`.
pub fn check_winner(board: &Board, win_len: usize) -> Option<Mark> {
    let n = board.size();
    debug_assert!(win_len > 0 && win_len <= n);

    // Horizontal runs
    for row in 0..n {
        for col in 0..=(n - win_len) {
            if let Some(mark) = window_winner(board, row, col, 0, 1, win_len) {
                return Some(mark);
            }
        }
    }

    // Vertical runs
    for col in 0..n {
        for row in 0..=(n - win_len) {
            if let Some(mark) = window_winner(board, row, col, 1, 0, win_len) {
                return Some(mark);
            }
        }
    }

    // Diagonal runs, ↘ before ↙ for each anchor
    for row in 0..=(n - win_len) {
        for col in 0..=(n - win_len) {
            if let Some(mark) = window_winner(board, row, col, 1, 1, win_len) {
                return Some(mark);
            }
            if let Some(mark) = anti_diagonal_winner(board, row, col, win_len) {
                return Some(mark);
            }
        }
    }

    None
}

/// Find the first horizontal winning run for `winner`, as (start, end)
/// positions of the window.
///
/// Used by the board view to draw the win line. Only horizontal runs are
/// located; vertical and diagonal wins end the game but get no line.
pub fn find_horizontal_run(board: &Board, win_len: usize, winner: Mark) -> Option<(Pos, Pos)> {
    let n = board.size();
    for row in 0..n {
        for col in 0..=(n - win_len) {
            if window_winner(board, row, col, 0, 1, win_len) == Some(winner) {
                return Some((Pos::new(row, col), Pos::new(row, col + win_len - 1)));
            }
        }
    }
    None
}
