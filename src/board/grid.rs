//! Grid storage with fill tracking

use super::{Mark, Pos};

/// Game board: an n×n grid of marks, row-major storage.
///
/// A board is created empty at the start of each level and mutated only
/// through [`Board::mark`]. The search never mutates a caller's board; it
/// works on its own clone and restores cells with [`Board::clear`] after
/// each branch.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
    /// Number of non-empty cells
    filled: usize,
}

impl Board {
    /// Create an empty board of the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
            filled: 0,
        }
    }

    /// Board dimension n (the grid is n×n)
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "position ({}, {}) out of range for {}x{} board",
            pos.row,
            pos.col,
            self.size,
            self.size
        );
        pos.row * self.size + pos.col
    }

    /// Get the mark at a position. Panics on out-of-range coordinates.
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[self.index(pos)]
    }

    /// Check if a position is unoccupied. Panics on out-of-range coordinates.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Place a mark on an empty cell.
    ///
    /// Returns `true` on success. If the cell is already occupied nothing
    /// changes and `false` is returned; callers are expected to pre-check
    /// with [`Board::is_empty`] or [`Board::empty_squares`].
    #[inline]
    pub fn mark(&mut self, pos: Pos, mark: Mark) -> bool {
        let idx = self.index(pos);
        if self.cells[idx] != Mark::Empty {
            return false;
        }
        self.cells[idx] = mark;
        self.filled += 1;
        true
    }

    /// Remove a mark, returning the cell to empty.
    ///
    /// Only the search uses this, to undo a trial move on its own clone.
    /// No-op on an already empty cell.
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let idx = self.index(pos);
        if self.cells[idx] != Mark::Empty {
            self.cells[idx] = Mark::Empty;
            self.filled -= 1;
        }
    }

    /// All empty positions in row-major order (row ascending, then column).
    ///
    /// The order is part of the contract: the search breaks score ties by
    /// taking the first minimal move in this order.
    pub fn empty_squares(&self) -> Vec<Pos> {
        let mut squares = Vec::with_capacity(self.size * self.size - self.filled);
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[row * self.size + col] == Mark::Empty {
                    squares.push(Pos::new(row, col));
                }
            }
        }
        squares
    }

    /// Number of occupied cells
    #[inline]
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// True iff every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled == self.size * self.size
    }
}
