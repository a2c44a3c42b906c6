use super::*;

/// Places mines at a predetermined set of indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedBoardGenerator {
    mines: Vec<TileIndex>,
}

impl FixedBoardGenerator {
    pub fn new(mines: impl Into<Vec<TileIndex>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(self, level: Level) -> Result<Board> {
        level.validate()?;

        let total = level.total_cells();
        let mut mine_mask = vec![false; total];
        for index in self.mines {
            if index >= total {
                return Err(GameError::InvalidTileIndex { index, len: total });
            }
            mine_mask[index] = true;
        }

        let actual = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        if actual != level.mines() {
            return Err(LevelError::MineCountMismatch {
                expected: level.mines(),
                actual,
            }
            .into());
        }

        Ok(Board::from_mine_mask(level, &mine_mask))
    }
}
