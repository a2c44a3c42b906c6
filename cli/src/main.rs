use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use minefield_core::{BoardGenerator, GameState, Level, RandomBoardGenerator, Status};

use command::{Command, HELP, Position};
use level::LevelArgs;

mod command;
mod level;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    level: LevelArgs,

    /// Force a seed for the first board instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Holds the only reference to the current game and swaps it after every move.
struct Session {
    state: GameState,
}

enum Flow {
    Continue,
    Quit,
}

impl Session {
    fn new(level: Level, generator: impl BoardGenerator) -> anyhow::Result<Self> {
        let state = GameState::new_with(level, generator).context("Could not start a game")?;
        Ok(Self { state })
    }

    fn apply(&mut self, command: Command, out: &mut impl Write) -> anyhow::Result<Flow> {
        match command {
            Command::Reveal(pos) => {
                let index = self.index_of(pos)?;
                let previous = self.state.status();
                self.state = self.state.reveal(index)?;
                if previous != self.state.status() {
                    log::info!("Game finished: {:?}", self.state.status());
                }
            }
            Command::Flag(pos) => {
                let index = self.index_of(pos)?;
                self.state = self.state.toggle_flag(index)?;
            }
            Command::NewGame(level) => {
                self.state = self.state.reset(level)?;
                log::info!("New game on {:?}", self.state.level());
            }
            Command::Dump => {
                serde_json::to_writer_pretty(&mut *out, &self.state.view())?;
                writeln!(out)?;
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        self.draw(out)?;
        Ok(Flow::Continue)
    }

    fn index_of(&self, pos: Position) -> anyhow::Result<usize> {
        let level = self.state.level();
        pos.to_index(level).with_context(|| {
            format!(
                "({}, {}) is off the {}x{} board",
                pos.col,
                pos.row,
                level.width(),
                level.height()
            )
        })
    }

    fn draw(&self, out: &mut impl Write) -> anyhow::Result<()> {
        write!(out, "{}", render::render(&self.state.view())?)?;
        if self.state.status() != Status::Active {
            writeln!(out, "type n for a new game or q to quit")?;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let level = args.level.to_level()?;
    let generator = args
        .seed
        .map(RandomBoardGenerator::new)
        .unwrap_or_else(RandomBoardGenerator::from_entropy);
    log::debug!("seed: {}", generator.seed());

    let mut session = Session::new(level, generator)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{HELP}")?;
    session.draw(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let flow = Command::parse(&line).and_then(|command| session.apply(command, &mut out));
        match flow {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => writeln!(out, "error: {err:#}")?,
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use minefield_core::FixedBoardGenerator;

    fn session(width: u16, height: u16, mines: &[usize]) -> Session {
        let level = Level::new(width, height, mines.len()).unwrap();
        Session::new(level, FixedBoardGenerator::new(mines)).unwrap()
    }

    fn run(session: &mut Session, line: &str) -> anyhow::Result<String> {
        let mut out = Vec::new();
        session.apply(Command::parse(line)?, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn plays_to_a_win() {
        let mut session = session(2, 2, &[0]);

        run(&mut session, "r 1 0").unwrap();
        run(&mut session, "r 0 1").unwrap();
        let text = run(&mut session, "r 1 1").unwrap();

        assert_eq!(session.state.status(), Status::Won);
        assert!(text.contains("you won!"));
    }

    #[test]
    fn off_board_move_reports_error_and_keeps_state() {
        let mut session = session(2, 2, &[0]);
        let before = session.state.clone();

        let err = run(&mut session, "r 2 0").unwrap_err();

        assert!(err.to_string().contains("off the 2x2 board"));
        assert_eq!(session.state, before);
    }

    #[test]
    fn new_game_resets_flags() {
        let mut session = session(3, 3, &[4]);
        run(&mut session, "f 1 1").unwrap();
        assert_eq!(session.state.flag_count(), 1);

        run(&mut session, "n 4x4:3").unwrap();

        assert_eq!(session.state.flag_count(), 0);
        assert_eq!(session.state.level(), Level::new_unchecked(4, 4, 3));
        assert_eq!(session.state.board().mine_count(), 3);
    }

    #[test]
    fn dump_prints_json_view() {
        let mut session = session(2, 1, &[1]);

        let text = run(&mut session, "d").unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["status"], "Active");
        assert_eq!(json["tiles"]["dim"], serde_json::json!([1, 2]));
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut session = session(2, 1, &[1]);
        let mut out = Vec::new();

        let flow = session.apply(Command::Quit, &mut out).unwrap();

        assert!(matches!(flow, Flow::Quit));
    }
}
