use maze_pathfinding::{AstarSolver, CellState, Coordinate, Grid, GridSolver, MazeGenerator};

// The two passages leaving the start are walled up again after carving, so the solver reports
// that no path exists instead of returning one. Every other open cell is still marked visited.

fn main() {
    let mut grid = MazeGenerator::from_seed(1).generate(Grid::new(11).unwrap());
    grid.set(Coordinate::new(1, 2), CellState::Wall);
    grid.set(Coordinate::new(2, 1), CellState::Wall);
    let solution = AstarSolver::new().solve(grid);
    println!("{}", solution.grid());
    println!("Found: {}", solution.is_found());
}
