use thiserror::Error;

use crate::{CellCount, Coord, TileIndex};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid level: {0}")]
    InvalidConfig(#[from] LevelError),
    #[error("Tile index {index} is out of range for a board of {len} tiles")]
    InvalidTileIndex { index: TileIndex, len: CellCount },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    EmptyBoard { width: Coord, height: Coord },
    #[error("{mines} mines do not fit on {cells} tiles")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("layout has {actual} mines but the level asks for {expected}")]
    MineCountMismatch {
        expected: CellCount,
        actual: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
