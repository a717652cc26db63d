//! Grid module - the 16x16 tile world
//!
//! The grid is a flat, row-major array of tiles. Coordinates are (x, y) where
//! x ranges 0..15 (left to right) and y ranges 0..15 (top to bottom). Signed
//! coordinates are accepted everywhere so ray scans and physics lookups can ask
//! about cells outside the grid without pre-checking.

use crate::types::{Tile, GRID_HEIGHT, GRID_WIDTH, SKY_ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = GRID_WIDTH * GRID_HEIGHT;

/// The tile grid - 16 columns x 16 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of tiles, row-major order (y * WIDTH + x)
    cells: [Tile; GRID_SIZE],
}

impl Grid {
    /// Create a grid filled with air
    pub fn new() -> Self {
        Self::filled(Tile::Air)
    }

    pub fn filled(tile: Tile) -> Self {
        Self {
            cells: [tile; GRID_SIZE],
        }
    }

    /// Grass along the surface row with stone underneath. No hazards, no ore.
    pub fn flat() -> Self {
        let mut grid = Self::new();
        grid.cells[SKY_ROWS * GRID_WIDTH..(SKY_ROWS + 1) * GRID_WIDTH].fill(Tile::Grass);
        grid.cells[(SKY_ROWS + 1) * GRID_WIDTH..].fill(Tile::Stone);
        grid
    }

    /// Build a grid from explicit rows (row 0 first)
    pub fn from_rows(rows: [[Tile; GRID_WIDTH]; GRID_HEIGHT]) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let start = y * GRID_WIDTH;
            grid.cells[start..start + GRID_WIDTH].copy_from_slice(row);
        }
        grid
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i32 || y < 0 || y >= GRID_HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * GRID_WIDTH + (x as usize))
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_some()
    }

    /// Tile at (x, y), `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Tile at (x, y), with everything outside the grid reading as open air
    pub fn tile_or_air(&self, x: i32, y: i32) -> Tile {
        self.get(x, y).unwrap_or(Tile::Air)
    }

    /// Set the tile at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Row index of the first non-air cell in column `x`, scanning downward
    pub fn first_non_air_in_column(&self, x: usize) -> Option<usize> {
        if x >= GRID_WIDTH {
            return None;
        }
        (0..GRID_HEIGHT).find(|&y| self.cells[y * GRID_WIDTH + x] != Tile::Air)
    }

    /// All cells holding `tile`, in row-major order
    pub fn positions_of(&self, tile: Tile) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, &t)| {
            (t == tile).then(|| ((i % GRID_WIDTH) as i32, (i / GRID_WIDTH) as i32))
        })
    }

    pub fn row(&self, y: usize) -> &[Tile] {
        let start = y * GRID_WIDTH;
        &self.cells[start..start + GRID_WIDTH]
    }

    /// Copy out as nested rows (row 0 first)
    pub fn to_rows(&self) -> [[Tile; GRID_WIDTH]; GRID_HEIGHT] {
        let mut rows = [[Tile::Air; GRID_WIDTH]; GRID_HEIGHT];
        for (y, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
