//! Line clearing - removes complete rows and compacts the grid
//!
//! Rows are scanned once from top to bottom. A full row is overwritten by shifting
//! every row above it down by one and the scan moves on to the next index. Rows
//! above a cleared row have already been scanned and were not full, so one pass
//! removes every complete row present when the call started.

use crate::board::Board;
use crate::piece::Piece;

impl Board<'_> {
    /// Remove every full row, ignoring the active piece. Returns the number removed.
    pub fn clear_lines(&mut self, piece: &Piece) -> u32 {
        self.erase(piece);

        let mut cleared = 0;
        for y in 0..self.grid.lines() {
            if self.grid.is_row_full(y) {
                self.grid.shift_down_into(y);
                cleared += 1;
            }
        }

        self.draw(piece);

        if cleared > 0 {
            log::debug!("cleared {} line(s)", cleared);
        }
        cleared
    }
}
