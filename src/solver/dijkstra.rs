use crate::{grid::Coordinate, solver::GridSolver, SolverConfig};

/// Uninformed search. Finds paths of the same length as [AstarSolver](super::astar::AstarSolver)
/// while expanding at least as many cells.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub config: SolverConfig,
}

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Coordinate, _: &Coordinate) -> u32 {
        0
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }
}
