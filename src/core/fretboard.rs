//! # Fretboard Diagram
//!
//! Lays a scale's positions onto a 6-string × 13-fret grid (frets 0..=12).
//! Rows run low-to-high: E, A, D, G, B, e.
//!
//! ```text
//! E|--●-------------------- ...
//! A|----------------------- ...
//! ```
//!
//! Each cell is a plain scan over the scale's positions. With at most
//! 78 cells there is nothing to index.

use crate::catalog::Scale;

pub const STRING_NAMES: [&str; STRINGS] = ["E", "A", "D", "G", "B", "e"];
pub const STRINGS: usize = 6;
pub const FRETS: usize = 13;

pub const MARKED_CELL: &str = "--●--";
pub const EMPTY_CELL: &str = "-----";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    cells: [[bool; FRETS]; STRINGS],
}

impl Fretboard {
    /// Positions outside frets 0..=12 or strings 0..6 simply never match a cell.
    pub fn from_scale(scale: &Scale) -> Self {
        let mut cells = [[false; FRETS]; STRINGS];
        for (string, row) in cells.iter_mut().enumerate() {
            for (fret, cell) in row.iter_mut().enumerate() {
                *cell = scale
                    .positions
                    .iter()
                    .any(|pos| pos.marks(string, fret));
            }
        }
        Self { cells }
    }

    /// One line per string, e.g. `E|--●-------...`.
    pub fn render_lines(&self) -> Vec<String> {
        STRING_NAMES
            .iter()
            .zip(self.cells.iter())
            .map(|(name, row)| {
                let mut line = format!("{name}|");
                for &marked in row {
                    line.push_str(if marked { MARKED_CELL } else { EMPTY_CELL });
                }
                line
            })
            .collect()
    }
}
