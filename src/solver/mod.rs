use log::{info, warn};
use smallvec::SmallVec;

use crate::astar::{astar, SearchOutcome};
use crate::grid::{CellState, Coordinate, Grid};
use crate::{N_SMALLVEC_SIZE, STEP_COST};

pub mod astar;
pub mod dijkstra;

/// Which open cells end up as [CellState::Visited] once a search is done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marking {
    /// Every open cell off the solution.
    #[default]
    AllOpen,
    /// Only cells the search expanded, leaving the rest [CellState::Empty].
    Explored,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub marking: Marking,
}

/// Outcome of [GridSolver::solve]. Both variants hand the annotated grid back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    /// `path` runs from [Grid::start] to [Grid::end], both included.
    Found { grid: Grid, path: Vec<Coordinate> },
    /// The end cannot be reached. The grid carries [CellState::Visited] marks only.
    NoPathFound { grid: Grid },
}

impl Solution {
    pub fn grid(&self) -> &Grid {
        match self {
            Solution::Found { grid, .. } | Solution::NoPathFound { grid } => grid,
        }
    }

    pub fn into_grid(self) -> Grid {
        match self {
            Solution::Found { grid, .. } | Solution::NoPathFound { grid } => grid,
        }
    }

    pub fn path(&self) -> Option<&[Coordinate]> {
        match self {
            Solution::Found { path, .. } => Some(path),
            Solution::NoPathFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Solution::Found { .. })
    }

    /// Number of moves on the path, one less than its length.
    pub fn steps(&self) -> Option<usize> {
        self.path().map(|path| path.len() - 1)
    }
}

pub trait GridSolver {
    /// Estimated remaining cost from `node` to `goal`. Must not overestimate for the solution to be
    /// optimal.
    fn heuristic(&self, node: &Coordinate, goal: &Coordinate) -> u32;

    fn config(&self) -> &SolverConfig;

    /// Computes a shortest path between two cells of `grid` over passable cells, without touching
    /// the grid.
    fn shortest_path(
        &self,
        grid: &Grid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Option<Vec<Coordinate>> {
        search(self, grid, start, goal).path.map(|(path, _cost)| path)
    }

    /// Solves the maze from [Grid::start] to [Grid::end] and annotates the grid: cells strictly
    /// between the two are marked [CellState::Path], other open cells [CellState::Visited] according
    /// to [SolverConfig::marking]. Annotations from earlier solves are cleared first.
    fn solve(&self, mut grid: Grid) -> Solution {
        grid.clear_annotations();
        let (start, goal) = (grid.start(), grid.end());
        let marking = self.config().marking;

        if !grid.reachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            mark_visited(&mut grid, marking, &[]);
            return Solution::NoPathFound { grid };
        }
        info!("{} is reachable from {}, computing path", goal, start);

        let SearchOutcome { path, expanded } = search(self, &grid, start, goal);
        match path {
            Some((path, cost)) => {
                info!("Found path of {} steps", cost);
                if path.len() > 2 {
                    for c in &path[1..path.len() - 1] {
                        grid.set(*c, CellState::Path);
                    }
                }
                mark_visited(&mut grid, marking, &expanded);
                Solution::Found { grid, path }
            }
            None => {
                warn!("Reachable goal could not be pathed to, is reachable graph correct?");
                mark_visited(&mut grid, marking, &expanded);
                Solution::NoPathFound { grid }
            }
        }
    }
}

/// Best-first search over unit steps between passable cells.
pub(crate) fn search<S: GridSolver + ?Sized>(
    solver: &S,
    grid: &Grid,
    start: Coordinate,
    goal: Coordinate,
) -> SearchOutcome<Coordinate, u32> {
    astar(
        &start,
        |node| {
            grid.adjacent(*node)
                .into_iter()
                .filter(|n| grid.get(*n).is_passable())
                .map(|n| (n, STEP_COST))
                .collect::<SmallVec<[(Coordinate, u32); N_SMALLVEC_SIZE]>>()
        },
        |node| solver.heuristic(node, &goal),
        |node| *node == goal,
    )
}

fn mark_visited(grid: &mut Grid, marking: Marking, expanded: &[Coordinate]) {
    match marking {
        Marking::AllOpen => {
            for c in grid.positions(CellState::Empty) {
                grid.set(c, CellState::Visited);
            }
        }
        Marking::Explored => {
            for c in expanded {
                if grid.get(*c) == CellState::Empty {
                    grid.set(*c, CellState::Visited);
                }
            }
        }
    }
}
