use thiserror::Error;

use crate::grid::Coordinate;

/// Errors raised while building or addressing a [Grid](crate::grid::Grid).
///
/// Failing to find a path is not an error, see [Solution](crate::solver::Solution).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The side length is even or smaller than [MIN_SIZE](crate::MIN_SIZE).
    #[error("invalid grid size {size}: must be odd and at least {min}", min = crate::MIN_SIZE)]
    InvalidDimension { size: usize },
    #[error("{coordinate} is outside of the {size}x{size} grid")]
    OutOfBounds { coordinate: Coordinate, size: usize },
}
