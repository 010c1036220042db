use core::fmt;

use itertools::Itertools;

use crate::grid::{CellState, Grid};

/// Characters used to draw each [CellState].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub wall: char,
    pub empty: char,
    pub start: char,
    pub end: char,
    pub visited: char,
    pub path: char,
}

impl Default for Glyphs {
    fn default() -> Glyphs {
        Glyphs {
            wall: '#',
            empty: ' ',
            start: '@',
            end: '$',
            visited: '.',
            path: '+',
        }
    }
}

impl Glyphs {
    pub fn glyph(&self, state: CellState) -> char {
        match state {
            CellState::Wall => self.wall,
            CellState::Empty => self.empty,
            CellState::Start => self.start,
            CellState::End => self.end,
            CellState::Visited => self.visited,
            CellState::Path => self.path,
        }
    }

    /// One line per row, without a trailing newline.
    pub fn render(&self, grid: &Grid) -> String {
        grid.rows()
            .map(|row| row.iter().map(|s| self.glyph(*s)).collect::<String>())
            .join("\n")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let glyphs = Glyphs::default();
        for row in self.rows() {
            let line = row.iter().map(|s| glyphs.glyph(*s)).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
