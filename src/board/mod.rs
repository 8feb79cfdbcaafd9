//! Board representation for variable-size Tic-Tac-Toe

pub mod grid;

#[cfg(test)]
mod tests;

// Re-exports
pub use grid::Board;

/// Cell occupancy values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    /// The human player (maximizer in search)
    Cross,
    /// The search agent (minimizer in search)
    Nought,
}

impl Mark {
    /// Get the opposing mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
            Mark::Empty => Mark::Empty,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
