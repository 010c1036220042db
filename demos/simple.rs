use maze_pathfinding::{AstarSolver, Grid, GridSolver, MazeGenerator, Solution, DEFAULT_SIZE};

// In this example a maze is carved on a 21x21 grid and solved from the top left to the bottom
// right, printing
// - # for walls
// - @ for the start
// - $ for the end
// - + for the path
// - . for every other open cell

fn main() {
    let grid = Grid::new(DEFAULT_SIZE).unwrap();
    let grid = MazeGenerator::from_seed(2024).generate(grid);
    println!("{}", grid);
    match AstarSolver::new().solve(grid) {
        Solution::Found { grid, path } => {
            println!("{}", grid);
            println!("Path of {} steps:", path.len() - 1);
            for p in path {
                println!("{}", p);
            }
        }
        Solution::NoPathFound { grid } => {
            println!("{}", grid);
            println!("No path found");
        }
    }
}
