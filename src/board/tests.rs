use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::Cross.opponent(), Mark::Nought);
    assert_eq!(Mark::Nought.opponent(), Mark::Cross);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_new_board_is_empty() {
    for size in [3, 4, 5] {
        let board = Board::new(size);
        assert_eq!(board.size(), size);
        assert_eq!(board.filled(), 0);
        assert!(!board.is_full());
        assert_eq!(board.empty_squares().len(), size * size);
    }
}

#[test]
fn test_empty_squares_row_major_order() {
    let board = Board::new(3);
    let squares = board.empty_squares();
    let mut sorted = squares.clone();
    sorted.sort();
    assert_eq!(squares, sorted);
    assert_eq!(squares[0], Pos::new(0, 0));
    assert_eq!(squares[1], Pos::new(0, 1));
    assert_eq!(squares[8], Pos::new(2, 2));
}

#[test]
fn test_mark_occupied_cell_fails() {
    let mut board = Board::new(3);
    let pos = Pos::new(1, 1);

    assert!(board.mark(pos, Mark::Cross));
    assert_eq!(board.filled(), 1);

    // Second mark on the same cell fails and leaves state untouched
    assert!(!board.mark(pos, Mark::Nought));
    assert_eq!(board.filled(), 1);
    assert_eq!(board.get(pos), Mark::Cross);
}

#[test]
fn test_mark_removes_from_empty_squares() {
    let mut board = Board::new(3);
    board.mark(Pos::new(0, 1), Mark::Cross);

    let squares = board.empty_squares();
    assert_eq!(squares.len(), 8);
    assert!(!squares.contains(&Pos::new(0, 1)));
}

#[test]
fn test_is_full() {
    let mut board = Board::new(3);
    for row in 0..3 {
        for col in 0..3 {
            assert!(!board.is_full());
            board.mark(Pos::new(row, col), Mark::Cross);
        }
    }
    assert!(board.is_full());
    assert!(board.empty_squares().is_empty());
}

#[test]
fn test_clear_restores_cell() {
    let mut board = Board::new(4);
    let pos = Pos::new(2, 3);

    board.mark(pos, Mark::Nought);
    assert_eq!(board.filled(), 1);

    board.clear(pos);
    assert_eq!(board.filled(), 0);
    assert!(board.is_empty(pos));

    // Clearing an empty cell is a no-op
    board.clear(pos);
    assert_eq!(board.filled(), 0);
}

#[test]
#[should_panic]
fn test_out_of_range_panics() {
    let board = Board::new(3);
    board.get(Pos::new(3, 0));
}

#[test]
#[should_panic]
fn test_zero_size_panics() {
    Board::new(0);
}
