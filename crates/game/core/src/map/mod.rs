//! Static dungeon layout.
//!
//! A [`Grid`] is carved once per session by [`generate`] and never changes
//! afterwards. Runtime occupancy (player, enemies, items) lives in
//! [`crate::state`], not here.
mod generator;

pub use generator::{MapError, generate};

use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Terrain classes of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Terrain {
    Floor,
    #[default]
    Wall,
}

impl Terrain {
    pub fn is_walkable(self) -> bool {
        matches!(self, Terrain::Floor)
    }
}

/// Rectangular floor/wall layout stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: MapDimensions,
    cells: Vec<Terrain>,
}

impl Grid {
    /// Creates a grid with every cell set to [`Terrain::Wall`].
    pub fn filled_with_walls(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Terrain::Wall; dimensions.area() as usize],
        }
    }

    /// Builds a grid from rows of text: `#` is a wall, anything else is floor.
    ///
    /// Rows shorter than the first row are padded with walls. Mostly useful
    /// for hand-made test layouts.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0) as u32;
        let mut grid = Self::filled_with_walls(MapDimensions::new(width, height));
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate().take(width as usize) {
                if ch != '#' {
                    grid.carve(Position::new(x as i32, y as i32));
                }
            }
        }
        grid
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    /// Terrain at `position`, or `None` outside the grid.
    pub fn terrain(&self, position: Position) -> Option<Terrain> {
        self.index(position).map(|idx| self.cells[idx])
    }

    /// True if `position` is inside the grid and is floor.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.terrain(position).is_some_and(Terrain::is_walkable)
    }

    pub(crate) fn carve(&mut self, position: Position) {
        if let Some(idx) = self.index(position) {
            self.cells[idx] = Terrain::Floor;
        }
    }

    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_walkable()).count()
    }

    /// All floor cells in row-major order.
    pub fn floor_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.dimensions.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_walkable())
            .map(move |(idx, _)| Position::new((idx % width) as i32, (idx / width) as i32))
    }
}
