//! Board behavior through the public facade.

use blockfall::core::Board;
use blockfall::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Cell::Piece(kind));
    }
}

#[test]
fn new_board_is_empty_and_free() {
    let board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_free(x, y));
            assert!(!board.is_occupied(x, y));
        }
    }
}

#[test]
fn out_of_bounds_is_neither_free_nor_occupied() {
    let board = Board::new();
    assert!(!board.is_free(-1, 0));
    assert!(!board.is_free(0, BOARD_HEIGHT as i8));
    assert!(!board.is_occupied(-1, 0));
    assert!(!board.is_occupied(BOARD_WIDTH as i8, 0));
}

#[test]
fn single_full_row_clears_and_rows_above_shift_down() {
    let mut board = Board::new();
    fill_row(&mut board, 17, PieceKind::I);
    board.set(2, 16, Cell::Piece(PieceKind::T));

    let (count, rows) = board.clear_full_rows();
    assert_eq!(count, 1);
    assert_eq!(rows.as_slice(), &[17]);

    // The survivor moved into the cleared space.
    assert_eq!(board.get(2, 17), Some(Cell::Piece(PieceKind::T)));
    assert!(board.is_free(2, 16));
}

#[test]
fn four_rows_clear_simultaneously() {
    let mut board = Board::new();
    for y in 14..18 {
        fill_row(&mut board, y, PieceKind::I);
    }
    let (count, rows) = board.clear_full_rows();
    assert_eq!(count, 4);
    assert_eq!(rows.as_slice(), &[14, 15, 16, 17]);
    assert!(board.cells().iter().all(|c| c.is_empty()));
}

#[test]
fn almost_full_row_does_not_clear() {
    let mut board = Board::new();
    for x in 0..(BOARD_WIDTH as i8 - 1) {
        board.set(x, 17, Cell::Piece(PieceKind::Z));
    }
    let (count, _) = board.clear_full_rows();
    assert_eq!(count, 0);
    assert!(board.is_occupied(0, 17));
}

#[test]
fn tag_grid_matches_cell_tags() {
    let mut board = Board::new();
    board.set(0, 0, Cell::Piece(PieceKind::S));
    board.set(9, 17, Cell::Piece(PieceKind::L));
    board.set(5, 5, Cell::ClearFlash);

    let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_tag_grid(&mut grid);

    assert_eq!(grid[0][0], 1);
    assert_eq!(grid[17][9], 7);
    assert_eq!(grid[5][5], 8);
    assert_eq!(grid[1][1], 0);
}
