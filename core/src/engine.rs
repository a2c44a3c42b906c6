use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Active -> Won
/// - Active -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Won,
    Lost,
}

impl Status {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Level, board and status of one game.
///
/// Moves never mutate a state in place: each one returns the next state and leaves the
/// previous value untouched, so a rejected or ignored move hands back an identical copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    status: Status,
}

impl GameState {
    /// Starts a game on a randomly generated board.
    pub fn new_game(level: Level) -> Result<Self> {
        Self::new_with(level, RandomBoardGenerator::from_entropy())
    }

    pub fn new_with(level: Level, generator: impl BoardGenerator) -> Result<Self> {
        Ok(Self::from_board(generator.generate(level)?))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            status: Status::Active,
        }
    }

    pub fn level(&self) -> Level {
        self.board.level()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn tile(&self, index: TileIndex) -> Option<&Tile> {
        self.board.tile(index)
    }

    pub fn flag_count(&self) -> CellCount {
        self.board.flag_count()
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> isize {
        self.level().mines() as isize - self.flag_count() as isize
    }

    pub fn exposed_count(&self) -> CellCount {
        self.board.exposed_count()
    }

    pub fn safe_count(&self) -> CellCount {
        self.level().safe_cells()
    }

    /// Toggles the flag on a hidden tile.
    ///
    /// Exposed tiles and finished games are left as they are.
    pub fn toggle_flag(&self, index: TileIndex) -> Result<Self> {
        let index = self.checked_index(index)?;
        let mut next = self.clone();

        if self.status.is_finished() {
            return Ok(next);
        }

        if next.board.toggle_flag(index) {
            log::debug!(
                "Tile {index} {}",
                if next.board[index].is_flagged() {
                    "flagged"
                } else {
                    "unflagged"
                }
            );
        }
        Ok(next)
    }

    /// Exposes a tile and everything its reveal implies.
    ///
    /// Flagged or already exposed tiles and finished games are left as they are. A mine ends
    /// the game, a blank tile opens its whole exposure closure, and the game is won as soon as
    /// no safe tile stays hidden.
    pub fn reveal(&self, index: TileIndex) -> Result<Self> {
        let index = self.checked_index(index)?;
        let mut next = self.clone();

        if self.status.is_finished() || !self.board[index].is_untouched() {
            return Ok(next);
        }

        match self.board[index].kind() {
            TileKind::Mine => {
                next.board.expose(index);
                next.status = Status::Lost;
                log::debug!("Mine hit at {index}, game lost");
                return Ok(next);
            }
            TileKind::Safe(0) => {
                for pos in exposure_closure(&self.board, index) {
                    next.board.expose(pos);
                }
            }
            TileKind::Safe(_) => next.board.expose(index),
        }

        if next.board.all_safe_exposed() {
            next.status = Status::Won;
            log::debug!("All safe tiles exposed, game won");
        }
        Ok(next)
    }

    /// Starts over on a newly sampled board, on `level` when given or the current one otherwise.
    pub fn reset(&self, level: Option<Level>) -> Result<Self> {
        self.reset_with(level, RandomBoardGenerator::from_entropy())
    }

    pub fn reset_with(&self, level: Option<Level>, generator: impl BoardGenerator) -> Result<Self> {
        let level = level.unwrap_or_else(|| self.level());
        log::debug!("Resetting to {}x{} with {} mines", level.width(), level.height(), level.mines());
        Self::new_with(level, generator)
    }

    fn checked_index(&self, index: TileIndex) -> Result<TileIndex> {
        self.board.validate_index(index).inspect_err(|err| {
            log::warn!("Rejected move: {err}");
        })
    }
}
