//! Multi-Level Tic-Tac-Toe
//!
//! A single-player Tic-Tac-Toe game against an adversarial search agent,
//! played across three escalating levels:
//! - Level 1: 3x3 board, 3-in-a-row, full-depth search
//! - Level 2: 4x4 board, 4-in-a-row, search cut off at depth 4
//! - Level 3: 5x5 board, 5-in-a-row, search cut off at depth 3
//!
//! # Architecture
//!
//! - [`board`]: n×n grid of marks with fill tracking
//! - [`rules`]: windowed win scan over arbitrary board size and win length
//! - [`search`]: minimax with alpha-beta pruning and depth cutoff
//! - [`session`]: level configurations and session statistics
//! - [`ui`]: egui/eframe presentation layer
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Board, Mark, Pos, SearchAgent};
//!
//! let mut board = Board::new(3);
//!
//! // Human opens in the corner
//! board.mark(Pos::new(0, 0), Mark::Cross);
//!
//! // Agent replies with a full-depth search
//! let agent = SearchAgent::new(Mark::Nought, None);
//! if let Some(pos) = agent.choose_move(&board, 3) {
//!     board.mark(pos, Mark::Nought);
//! }
//!
//! assert_eq!(tictactoe::rules::check_winner(&board, 3), None);
//! ```
//!
//! # Search
//!
//! The agent scores positions from the human's point of view (+1 human
//! win, -1 agent win, 0 draw or cutoff) and picks the move minimizing that
//! score. Alpha-beta pruning skips subtrees that cannot change the chosen
//! value, so pruned and unpruned searches always agree. On the larger
//! boards the depth limit scores unresolved positions as draws instead of
//! searching them out.

pub mod board;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos};
pub use search::SearchAgent;
pub use session::{LevelConfig, LevelOutcome, SessionStats, LEVELS};
