use crate::{grid::Coordinate, solver::GridSolver, SolverConfig, STEP_COST};

/// A* with the Manhattan distance, which is admissible and consistent for unit cost moves in four
/// directions: the first time the end is expanded its path is a shortest one.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub config: SolverConfig,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }

    pub fn with_config(config: SolverConfig) -> AstarSolver {
        AstarSolver { config }
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, node: &Coordinate, goal: &Coordinate) -> u32 {
        node.manhattan_distance(goal) as u32 * STEP_COST
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        grid::{CellState, Grid},
        Marking, Solution,
    };

    use super::*;

    /// Opens every listed cell as [CellState::Empty] and marks the anchors.
    fn carved(size: usize, open: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for c in open {
            grid.set((*c).into(), CellState::Empty);
        }
        let (start, end) = (grid.start(), grid.end());
        grid.set(start, CellState::Start);
        grid.set(end, CellState::End);
        grid
    }

    /// Dead ends branch off at (1, 2) and (2, 3):
    ///  _____
    /// |#####|
    /// |#@ ##|
    /// |# # #|
    /// |#  $#|
    /// |#####|
    ///  _____
    #[test]
    fn solve_simple_problem() {
        let grid = carved(5, &[(1, 2), (2, 1), (3, 1), (3, 2), (2, 3)]);
        let solution = AstarSolver::new().solve(grid);
        let path = solution.path().unwrap();
        assert_eq!(solution.steps(), Some(4));
        assert_eq!(path.first(), Some(&Coordinate::new(1, 1)));
        assert_eq!(path.last(), Some(&Coordinate::new(3, 3)));
        assert_eq!(solution.grid().count(CellState::Path), 3);
        assert_eq!(solution.grid().count(CellState::Visited), 2);
        assert_eq!(solution.grid().count(CellState::Empty), 0);
    }

    /// Ties between the two equally long routes go to the smaller coordinate, so the route over
    /// (1, 2) wins over the one through (2, 1).
    #[test]
    fn equal_routes_break_ties_deterministically() {
        let grid = carved(5, &[(1, 2), (1, 3), (2, 1), (3, 1), (3, 2), (2, 3)]);
        let solution = AstarSolver::new().solve(grid);
        assert_eq!(
            solution.path().unwrap(),
            &[
                Coordinate::new(1, 1),
                Coordinate::new(1, 2),
                Coordinate::new(1, 3),
                Coordinate::new(2, 3),
                Coordinate::new(3, 3)
            ]
        );
    }

    #[test]
    fn equal_start_goal() {
        let solution = AstarSolver::new().solve(carved(3, &[]));
        assert_eq!(solution.path().unwrap(), &[Coordinate::new(1, 1)]);
        assert_eq!(solution.steps(), Some(0));
        assert_eq!(solution.grid().count(CellState::Path), 0);
    }

    #[test]
    fn walled_in_start_has_no_path() {
        let grid = carved(5, &[(2, 3), (3, 2)]);
        let solution = AstarSolver::new().solve(grid);
        assert!(matches!(solution, Solution::NoPathFound { .. }));
        assert_eq!(solution.grid().count(CellState::Path), 0);
        assert_eq!(solution.grid().count(CellState::Visited), 2);
    }

    /// A winding corridor with no branches is marked as path everywhere.
    #[test]
    fn corridor_is_all_path() {
        //  _______
        // |#######|
        // |#@    #|
        // |##### #|
        // |#     #|
        // |# #####|
        // |#    $#|
        // |#######|
        //  _______
        let open = [
            (1, 2),
            (1, 3),
            (1, 4),
            (1, 5),
            (2, 5),
            (3, 5),
            (3, 4),
            (3, 3),
            (3, 2),
            (3, 1),
            (4, 1),
            (5, 1),
            (5, 2),
            (5, 3),
            (5, 4),
        ];
        let solution = AstarSolver::new().solve(carved(7, &open));
        assert_eq!(solution.steps(), Some(16));
        assert_eq!(solution.grid().count(CellState::Path), 15);
        assert_eq!(solution.grid().count(CellState::Visited), 0);
        assert_eq!(solution.grid().count(CellState::Empty), 0);
    }

    /// The branch at (4, 3) leads away from the end and is never expanded, so explored marking
    /// leaves it empty while the default marks it visited.
    #[test]
    fn explored_marking_leaves_unexpanded_cells_empty() {
        //  _______
        // |#######|
        // |#@#####|
        // |# #####|
        // |# # ###|
        // |# # ###|
        // |#    $#|
        // |#######|
        //  _______
        let open = [
            (2, 1),
            (3, 1),
            (4, 1),
            (5, 1),
            (5, 2),
            (5, 3),
            (5, 4),
            (4, 3),
            (3, 3),
        ];
        let explored = AstarSolver::with_config(SolverConfig {
            marking: Marking::Explored,
        })
        .solve(carved(7, &open));
        assert_eq!(explored.steps(), Some(8));
        assert_eq!(explored.grid().count(CellState::Path), 7);
        assert_eq!(explored.grid().count(CellState::Visited), 0);
        assert_eq!(explored.grid().count(CellState::Empty), 2);

        let all_open = AstarSolver::new().solve(carved(7, &open));
        assert_eq!(all_open.path(), explored.path());
        assert_eq!(all_open.grid().count(CellState::Visited), 2);
        assert_eq!(all_open.grid().count(CellState::Empty), 0);
    }

    #[test]
    fn heuristic_is_manhattan() {
        let solver = AstarSolver::new();
        assert_eq!(
            solver.heuristic(&Coordinate::new(1, 1), &Coordinate::new(4, 6)),
            8
        );
    }
}
