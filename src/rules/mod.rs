//! Win detection for variable board size and win length

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_horizontal_run};
