#![cfg(feature = "std")]

use std::string::String;

use crate::{
    board::Board,
    common::CellState,
    config::{BOARD_HEIGHT, BOARD_WIDTH},
};

/// Glyph used for a cell in text output.
pub fn cell_glyph(state: CellState) -> char {
    match state {
        CellState::Normal => '.',
        CellState::Occupied => '#',
        CellState::PreviewValid => '+',
        CellState::PreviewInvalid => 'x',
    }
}

/// Render the board as text with 1-based row and column labels.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   ");
    for c in 0..BOARD_WIDTH {
        out.push_str(&format!(" {:>2}", c + 1));
    }
    out.push('\n');
    for (r, row) in board.cells().chunks(BOARD_WIDTH as usize).enumerate() {
        out.push_str(&format!("{:2} ", r + 1));
        for &cell in row {
            out.push_str("  ");
            out.push(cell_glyph(cell));
        }
        out.push('\n');
    }
    debug_assert_eq!(out.lines().count(), BOARD_HEIGHT as usize + 1);
    out
}

/// Print the board to stdout.
pub fn print_board(board: &Board) {
    std::print!("{}", render_board(board));
}
