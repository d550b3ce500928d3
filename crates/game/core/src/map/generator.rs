//! Random-walk carver.
//!
//! A single cursor wanders the interior of an all-wall grid and turns every
//! cell it visits into floor. The walk tends to leave one blob of floor
//! around its path, but nothing guarantees that every floor cell is reachable
//! from every other one; isolated pockets are an accepted property of the
//! layout.

use super::{Grid, MapDimensions};
use crate::env::RngSource;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("cannot generate a map with dimensions {0:?}")]
    EmptyDimensions(MapDimensions),
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Contract
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDimensions(_) => "MAP_EMPTY_DIMENSIONS",
        }
    }
}

/// Carves a layout with `carve_steps` random-walk steps.
///
/// Draw order: start x, start y, then one direction per step
/// (0 = up, 1 = down, 2 = left, 3 = right). A step that would leave the
/// interior band `[1, dim - 2]` on its axis is consumed without moving.
pub fn generate(
    dimensions: MapDimensions,
    carve_steps: u32,
    rng: &mut (impl RngSource + ?Sized),
) -> Result<Grid, MapError> {
    if dimensions.is_empty() {
        return Err(MapError::EmptyDimensions(dimensions));
    }

    let mut grid = Grid::filled_with_walls(dimensions);
    let width = dimensions.width as i32;
    let height = dimensions.height as i32;

    let mut cursor = Position::new(
        rng.below(dimensions.width) as i32,
        rng.below(dimensions.height) as i32,
    );
    grid.carve(cursor);

    for _ in 0..carve_steps {
        let (dx, dy) = match rng.below(4) {
            0 => (0, -1),
            1 => (0, 1),
            2 => (-1, 0),
            _ => (1, 0),
        };
        let next = Position::new(cursor.x + dx, cursor.y + dy);
        let accepted = if dx != 0 {
            within_interior(next.x, width)
        } else {
            within_interior(next.y, height)
        };
        if accepted {
            cursor = next;
        }
        grid.carve(cursor);
    }

    Ok(grid)
}

/// Only the moved axis is checked, so a cursor that starts on the outer ring
/// may slide along it until it steps inward on the other axis.
fn within_interior(coordinate: i32, dim: i32) -> bool {
    (1..=dim - 2).contains(&coordinate)
}
