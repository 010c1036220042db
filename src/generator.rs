use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::grid::{CellState, Coordinate, Grid};
use crate::N_SMALLVEC_SIZE;

/// Carves perfect mazes with a randomized frontier stack.
///
/// The cell on top of the stack keeps carving into a uniformly chosen walled neighbor until it has
/// none left, at which point it is popped. Every carve opens one new lattice cell through exactly
/// one wall, so the open cells always form a spanning tree.
#[derive(Clone, Debug)]
pub struct MazeGenerator<R: Rng = StdRng> {
    rng: R,
}

impl MazeGenerator<StdRng> {
    /// Reproducible generator: equal seeds carve equal mazes.
    pub fn from_seed(seed: u64) -> MazeGenerator<StdRng> {
        MazeGenerator::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> MazeGenerator<StdRng> {
        MazeGenerator::new(StdRng::from_entropy())
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub fn new(rng: R) -> MazeGenerator<R> {
        MazeGenerator { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Carves a maze into `grid`, marking [Grid::start] as [CellState::Start] and [Grid::end] as
    /// [CellState::End]. Any previous content is overwritten with walls first.
    pub fn generate(&mut self, mut grid: Grid) -> Grid {
        grid.fill(CellState::Wall);
        let carves = self.carve(&mut grid);

        let (start, end) = (grid.start(), grid.end());
        assert!(
            end.row % 2 == 1 && end.col % 2 == 1 && grid.in_interior(end),
            "end {} is not a carving candidate of a {}x{} grid",
            end,
            grid.size(),
            grid.size()
        );
        grid.set(start, CellState::Start);
        // With a single candidate the anchors coincide and the cell ends up as End.
        grid.set(end, CellState::End);

        debug!("Carved {} passages", carves);
        info!("Generated {}x{} maze", grid.size(), grid.size());
        grid
    }

    /// Runs the frontier loop from [Grid::start] and returns the number of carve operations.
    fn carve(&mut self, grid: &mut Grid) -> usize {
        let origin = grid.start();
        grid.set(origin, CellState::Empty);
        let mut frontier = vec![origin];
        let mut carves = 0;

        while let Some(&current) = frontier.last() {
            let candidates = grid
                .neighbors(current)
                .into_iter()
                .filter(|c| grid.get(*c) == CellState::Wall)
                .collect::<SmallVec<[Coordinate; N_SMALLVEC_SIZE]>>();
            if candidates.is_empty() {
                frontier.pop();
                continue;
            }
            let chosen = candidates[self.rng.gen_range(0..candidates.len())];
            grid.set(current.midpoint(&chosen), CellState::Empty);
            grid.set(chosen, CellState::Empty);
            frontier.push(chosen);
            carves += 1;
        }
        carves
    }
}
