use anyhow::{Context, anyhow, bail};
use minefield_core::{Level, TileIndex};

use crate::level::Preset;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Reveal(Position),
    Flag(Position),
    NewGame(Option<Level>),
    Dump,
    Help,
    Quit,
}

/// Column and row as typed by the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    /// Row-major index on a board of `level`, `None` when off the board.
    pub(crate) fn to_index(self, level: Level) -> Option<TileIndex> {
        let (width, height) = (level.width() as usize, level.height() as usize);
        (self.col < width && self.row < height).then(|| self.row * width + self.col)
    }
}

pub(crate) const HELP: &str = "\
commands:
  r <col> <row>        reveal a tile
  f <col> <row>        toggle a flag
  n [preset|WxH:M]     new game, optionally on another level
  d                    dump the board as JSON
  h                    this help
  q                    quit";

impl Command {
    pub(crate) fn parse(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };
        let rest: Vec<&str> = words.collect();

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_position(&rest)?),
            "f" | "flag" => Self::Flag(parse_position(&rest)?),
            "n" | "new" => match rest.as_slice() {
                [] => Self::NewGame(None),
                [level] => Self::NewGame(Some(parse_level(level)?)),
                _ => bail!("expected at most one level"),
            },
            "d" | "dump" => Self::Dump,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}, try h"),
        };
        Ok(command)
    }
}

fn parse_position(args: &[&str]) -> anyhow::Result<Position> {
    let [col, row] = args else {
        bail!("expected <col> <row>");
    };
    Ok(Position {
        col: col.parse().with_context(|| format!("bad column {col:?}"))?,
        row: row.parse().with_context(|| format!("bad row {row:?}"))?,
    })
}

/// A preset name or a custom `WIDTHxHEIGHT:MINES` level.
fn parse_level(text: &str) -> anyhow::Result<Level> {
    if let Some(preset) = Preset::parse(text) {
        return Ok(preset.level());
    }

    let (size, mines) = text
        .split_once(':')
        .ok_or_else(|| anyhow!("expected a preset or WIDTHxHEIGHT:MINES, got {text:?}"))?;
    let (width, height) = size
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT, got {size:?}"))?;

    let level = Level::new(
        width.parse().context("bad width")?,
        height.parse().context("bad height")?,
        mines.parse().context("bad mine count")?,
    )?;
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!(
            Command::parse("r 3 4").unwrap(),
            Command::Reveal(Position { col: 3, row: 4 })
        );
        assert_eq!(
            Command::parse("  FLAG 0 9 ").unwrap(),
            Command::Flag(Position { col: 0, row: 9 })
        );
        assert!(Command::parse("r 3").is_err());
        assert!(Command::parse("r a 1").is_err());
        assert!(Command::parse("r -1 1").is_err());
    }

    #[test]
    fn parses_new_game_levels() {
        assert_eq!(Command::parse("n").unwrap(), Command::NewGame(None));
        assert_eq!(
            Command::parse("n expert").unwrap(),
            Command::NewGame(Some(Preset::Expert.level()))
        );
        assert_eq!(
            Command::parse("new 8x5:6").unwrap(),
            Command::NewGame(Some(Level::new_unchecked(8, 5, 6)))
        );
        assert!(Command::parse("n 2x2:4").is_err());
        assert!(Command::parse("n 0x5:0").is_err());
        assert!(Command::parse("n huge").is_err());
    }

    #[test]
    fn parses_misc() {
        assert_eq!(Command::parse("d").unwrap(), Command::Dump);
        assert_eq!(Command::parse("?").unwrap(), Command::Help);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert!(Command::parse("").is_err());
        assert!(Command::parse("jump").is_err());
    }

    #[test]
    fn position_to_index() {
        let level = Level::new_unchecked(5, 3, 1);

        assert_eq!(Position { col: 4, row: 2 }.to_index(level), Some(14));
        assert_eq!(Position { col: 5, row: 0 }.to_index(level), None);
        assert_eq!(Position { col: 0, row: 3 }.to_index(level), None);
    }
}
