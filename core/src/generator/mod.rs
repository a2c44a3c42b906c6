use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Turns a level into a freshly generated, fully hidden board.
pub trait BoardGenerator {
    fn generate(self, level: Level) -> Result<Board>;
}
