use maze_pathfinding::{
    AstarSolver, CellState, DijkstraSolver, Glyphs, Grid, GridSolver, Marking, MazeGenerator,
    SolverConfig,
};

// Compares how much of the same maze A* and Dijkstra expand before reaching the end. Only expanded
// cells are marked, cells the search never touched stay blank.

fn main() {
    let grid = MazeGenerator::from_entropy().generate(Grid::new(31).unwrap());
    let config = SolverConfig {
        marking: Marking::Explored,
    };
    let glyphs = Glyphs {
        visited: '~',
        ..Glyphs::default()
    };
    let astar = AstarSolver::with_config(config).solve(grid.clone());
    let dijkstra = DijkstraSolver { config }.solve(grid);
    for (name, solution) in [("Astar", astar), ("Dijkstra", dijkstra)] {
        println!("{name}:");
        println!("{}", glyphs.render(solution.grid()));
        println!(
            "{} steps, {} cells explored off the path\n",
            solution.steps().unwrap_or_default(),
            solution.grid().count(CellState::Visited)
        );
    }
}
