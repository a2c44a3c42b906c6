use clap::{Args, ValueEnum};
use minefield_core::{CellCount, Coord, Level};

/// Named difficulty tiers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Preset {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    pub(crate) fn level(self) -> Level {
        use Preset::*;
        match self {
            Beginner => Level::new_unchecked(10, 10, 10),
            Intermediate => Level::new_unchecked(16, 16, 40),
            Expert => Level::new_unchecked(30, 16, 99),
        }
    }

    pub(crate) fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

/// Board selection, either a preset or a custom size.
#[derive(Args, Debug, Clone, PartialEq)]
pub(crate) struct LevelArgs {
    /// Difficulty preset
    #[arg(short, long, value_enum, default_value_t = Preset::Beginner)]
    pub level: Preset,

    /// Custom board width, overrides the preset
    #[arg(long, requires_all = ["height", "mines"])]
    pub width: Option<Coord>,

    /// Custom board height
    #[arg(long, requires_all = ["width", "mines"])]
    pub height: Option<Coord>,

    /// Custom mine count
    #[arg(long, requires_all = ["width", "height"])]
    pub mines: Option<CellCount>,
}

impl LevelArgs {
    pub(crate) fn to_level(&self) -> minefield_core::Result<Level> {
        match (self.width, self.height, self.mines) {
            (Some(width), Some(height), Some(mines)) => Level::new(width, height, mines),
            _ => Ok(self.level.level()),
        }
    }
}
