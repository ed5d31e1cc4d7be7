//! Terminal-oriented board renderer.
//!
//! Creates a human-readable grid view from the board model for the stdio
//! session, tests, and diagnostics. Occupied cells render as `K`, attacked
//! (or unvalued) cells as `·`, and free cells as their cached potential count.

use crate::board::board_state::Board;
use crate::board::board_types::{square_index, CellState, BOARD_SIZE};

/// Render the board to a string, ranks 8..1 top-down with an A..H footer.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        out.push(char::from(b'8' - row));
        out.push_str("| ");

        for col in 0..BOARD_SIZE {
            let cell = match board.cell_state(square_index(row, col)) {
                CellState::Occupied => "  K".to_owned(),
                CellState::Attacked | CellState::Empty => "  ·".to_owned(),
                CellState::Value(value) => format!("{value:>3}"),
            };
            out.push_str(&cell);
        }

        out.push('\n');
    }

    out.push_str("  ");
    for col in 0..BOARD_SIZE {
        out.push_str("  ");
        out.push(char::from(b'A' + col));
    }
    out.push('\n');

    out
}
