use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform mine placement with no first-move guarantees, reproducible from its seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, level: Level) -> Result<Board> {
        level.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mine_mask = place_mines(&mut rng, level.total_cells(), level.mines());

        log::debug!(
            "Generated {}x{} board with {} mines from seed {}",
            level.width(),
            level.height(),
            level.mines(),
            self.seed
        );
        Ok(Board::from_mine_mask(level, &mine_mask))
    }
}

/// Draws uniform indices in `0..total`, discarding repeats, until `mines` distinct ones are set.
///
/// Requires `mines < total`, which level validation guarantees.
fn place_mines<R: Rng + ?Sized>(rng: &mut R, total: CellCount, mines: CellCount) -> Vec<bool> {
    let mut mine_mask = vec![false; total];
    let mut placed = 0;
    let mut draws = 0usize;
    while placed < mines {
        let index = rng.random_range(0..total);
        draws += 1;
        if !mine_mask[index] {
            mine_mask[index] = true;
            placed += 1;
        }
    }
    log::trace!("Placed {placed} mines in {draws} draws");
    mine_mask
}
