use core::fmt;

use itertools::iproduct;
use log::trace;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::{GridError, CARVE_STRIDE, MIN_SIZE, N_SMALLVEC_SIZE, STEP_STRIDE};

/// A (row, column) position on a [Grid]. Ordered row-major, which is also the tie-breaking order
/// used by the solvers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Coordinate {
        Coordinate { row, col }
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The cell halfway between two coordinates, i.e. the wall separating two carving candidates.
    pub fn midpoint(&self, other: &Coordinate) -> Coordinate {
        Coordinate::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Coordinate {
        Coordinate::new(row, col)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Wall,
    Empty,
    Start,
    End,
    /// Open cell that is not part of the solution.
    Visited,
    /// Open cell strictly between start and end on the solution.
    Path,
}

impl CellState {
    /// Whether a search may step onto a cell in this state.
    pub fn is_passable(self) -> bool {
        matches!(self, CellState::Empty | CellState::Start | CellState::End)
    }

    /// Anything that has been carved, annotated or not.
    pub fn is_open(self) -> bool {
        self != CellState::Wall
    }
}

/// Square grid of [CellState] with an odd side length. The outer border is never carved, and
/// carving candidates sit on the odd/odd lattice in `[1, size - 2]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid of walls. Fails if `size` is even or below [MIN_SIZE].
    pub fn new(size: usize) -> Result<Grid, GridError> {
        if size < MIN_SIZE || size % 2 == 0 {
            return Err(GridError::InvalidDimension { size });
        }
        Ok(Grid {
            size,
            cells: vec![CellState::Wall; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The anchor the generator opens first and marks [CellState::Start].
    pub fn start(&self) -> Coordinate {
        Coordinate::new(1, 1)
    }

    /// The anchor marked [CellState::End]. Coincides with [start](Self::start) when the size is 3.
    pub fn end(&self) -> Coordinate {
        Coordinate::new(self.size - 2, self.size - 2)
    }

    pub fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.size && coordinate.col < self.size
    }

    /// Whether the coordinate lies in the carvable interior `[1, size - 2]`.
    pub fn in_interior(&self, coordinate: Coordinate) -> bool {
        (1..self.size - 1).contains(&coordinate.row) && (1..self.size - 1).contains(&coordinate.col)
    }

    /// Row-major index of a coordinate, also used as the union-find key.
    pub fn index(&self, coordinate: Coordinate) -> usize {
        coordinate.row * self.size + coordinate.col
    }

    fn checked_index(&self, coordinate: Coordinate) -> Result<usize, GridError> {
        if self.in_bounds(coordinate) {
            Ok(self.index(coordinate))
        } else {
            Err(GridError::OutOfBounds {
                coordinate,
                size: self.size,
            })
        }
    }

    pub fn checked_get(&self, coordinate: Coordinate) -> Result<CellState, GridError> {
        self.checked_index(coordinate).map(|ix| self.cells[ix])
    }

    pub fn checked_set(&mut self, coordinate: Coordinate, state: CellState) -> Result<(), GridError> {
        let ix = self.checked_index(coordinate)?;
        self.cells[ix] = state;
        Ok(())
    }

    /// Panics if the coordinate is out of bounds, which only happens when a caller ignores the
    /// bounds that [neighbors](Self::neighbors) and [adjacent](Self::adjacent) already apply.
    pub fn get(&self, coordinate: Coordinate) -> CellState {
        match self.checked_get(coordinate) {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Panics on out of bounds access, see [get](Self::get).
    pub fn set(&mut self, coordinate: Coordinate, state: CellState) {
        if let Err(err) = self.checked_set(coordinate, state) {
            panic!("{err}");
        }
    }

    /// Coordinates one `stride` away in the four axis directions (up, down, left, right), skipping
    /// any that leave the interior. The order is fixed.
    pub fn neighbors_at(
        &self,
        coordinate: Coordinate,
        stride: usize,
    ) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        let Coordinate { row, col } = coordinate;
        [
            row.checked_sub(stride).map(|r| Coordinate::new(r, col)),
            Some(Coordinate::new(row + stride, col)),
            col.checked_sub(stride).map(|c| Coordinate::new(row, c)),
            Some(Coordinate::new(row, col + stride)),
        ]
        .into_iter()
        .flatten()
        .filter(|c| self.in_interior(*c))
        .collect()
    }

    /// Carving candidates: lattice cells [CARVE_STRIDE] away.
    pub fn neighbors(&self, coordinate: Coordinate) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        self.neighbors_at(coordinate, CARVE_STRIDE)
    }

    /// Cells a single step away, the moves available to a search.
    pub fn adjacent(&self, coordinate: Coordinate) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        self.neighbors_at(coordinate, STEP_STRIDE)
    }

    /// All coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        iproduct!(0..self.size, 0..self.size).map(Coordinate::from)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size)
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|s| **s == state).count()
    }

    /// All coordinates currently holding `state`, row-major.
    pub fn positions(&self, state: CellState) -> Vec<Coordinate> {
        self.coordinates().filter(|c| self.get(*c) == state).collect()
    }

    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Turns [CellState::Visited] and [CellState::Path] back into [CellState::Empty].
    pub fn clear_annotations(&mut self) {
        for cell in self.cells.iter_mut() {
            if matches!(cell, CellState::Visited | CellState::Path) {
                *cell = CellState::Empty;
            }
        }
    }

    /// Builds a [UnionFind] over all cells and joins every pair of adjacent open cells. Walls stay
    /// singleton components.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.size * self.size);
        for c in self.coordinates().filter(|c| self.get(*c).is_open()) {
            let ix = self.index(c);
            for n in [
                Coordinate::new(c.row + 1, c.col),
                Coordinate::new(c.row, c.col + 1),
            ] {
                if self.in_bounds(n) && self.get(n).is_open() {
                    components.union(ix, self.index(n));
                }
            }
        }
        components
    }

    /// Checks if both coordinates are open and on the same component.
    pub fn reachable(&self, from: Coordinate, to: Coordinate) -> bool {
        if !(self.in_bounds(from) && self.in_bounds(to)) {
            return false;
        }
        if !(self.get(from).is_open() && self.get(to).is_open()) {
            trace!("{} or {} is a wall", from, to);
            return false;
        }
        self.components().equiv(self.index(from), self.index(to))
    }
}
