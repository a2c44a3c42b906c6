//! Board engine for a single-player minesweeper game.
//!
//! A [`GameState`] is created from a validated [`Level`], every move returns a fresh state and
//! the caller keeps only the latest one.

use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod engine;
mod error;
mod generator;
mod reveal;
mod tile;
mod types;
mod view;

/// Board dimensions and the number of mines to place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    width: Coord,
    height: Coord,
    mines: CellCount,
}

impl Level {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let level = Self::new_unchecked(width, height, mines);
        level.validate()?;
        Ok(level)
    }

    /// Dimensions must be positive and at least one tile must stay safe.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LevelError::EmptyBoard {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if self.mines >= self.total_cells() {
            return Err(LevelError::TooManyMines {
                mines: self.mines,
                cells: self.total_cells(),
            }
            .into());
        }
        Ok(())
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

/// Tiles of one generated board in row-major order.
///
/// Kinds and adjacency are written once by the generator, only the exposed and flagged bits
/// change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    level: Level,
    tiles: Vec<Tile>,
}

impl Board {
    /// Builds a hidden board with mines at exactly `mine_indices`.
    ///
    /// The level's mine count is taken from the distinct indices given, so a layout that
    /// covers every tile is rejected like any other oversized level.
    pub fn from_mine_indices(
        width: Coord,
        height: Coord,
        mine_indices: &[TileIndex],
    ) -> Result<Self> {
        let total = mult(width, height);
        let mut mine_mask = vec![false; total];
        for &index in mine_indices {
            if !is_valid_index(index, width, height) {
                return Err(GameError::InvalidTileIndex { index, len: total });
            }
            mine_mask[index] = true;
        }
        let mines = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let level = Level::new(width, height, mines)?;
        Ok(Self::from_mine_mask(level, &mine_mask))
    }

    /// Expects `mine_mask` to have one entry per tile of an already validated `level`.
    pub(crate) fn from_mine_mask(level: Level, mine_mask: &[bool]) -> Self {
        let (width, height) = (level.width(), level.height());
        let tiles = (0..level.total_cells())
            .map(|index| {
                let neighbors = adjacent_indices(index, width, height);
                let kind = if mine_mask[index] {
                    TileKind::Mine
                } else {
                    let count = neighbors.iter().filter(|&&pos| mine_mask[pos]).count();
                    // at most eight neighbors
                    TileKind::Safe(count as u8)
                };
                Tile::new(kind, neighbors)
            })
            .collect();
        Self { level, tiles }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn len(&self) -> CellCount {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: TileIndex) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn validate_index(&self, index: TileIndex) -> Result<TileIndex> {
        if index < self.tiles.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidTileIndex {
                index,
                len: self.tiles.len(),
            })
        }
    }

    pub fn mine_count(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.kind().is_mine()).count()
    }

    pub fn mine_indices(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.kind().is_mine())
            .map(|(index, _)| index)
    }

    pub fn exposed_count(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.is_exposed()).count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.is_flagged()).count()
    }

    /// Every safe tile is exposed.
    pub fn all_safe_exposed(&self) -> bool {
        self.tiles
            .iter()
            .filter(|tile| !tile.kind().is_mine())
            .all(|tile| tile.is_exposed())
    }

    pub(crate) fn expose(&mut self, index: TileIndex) {
        self.tiles[index].expose();
    }

    pub(crate) fn toggle_flag(&mut self, index: TileIndex) -> bool {
        self.tiles[index].toggle_flag()
    }
}

impl Index<TileIndex> for Board {
    type Output = Tile;

    fn index(&self, index: TileIndex) -> &Self::Output {
        &self.tiles[index]
    }
}
