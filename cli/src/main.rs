use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use sweepkit_core::{Difficulty, Game, GameOptions, PlacementPolicy};
use web_time::Instant;

use crate::command::{Command, HELP};
use crate::render::BoardView;

mod command;
mod render;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Placement {
    Rejection,
    Shuffle,
}

impl From<Placement> for PlacementPolicy {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Rejection => PlacementPolicy::RejectionSampling,
            Placement::Shuffle => PlacementPolicy::Shuffle,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset: easy, medium or hard
    #[arg(short, long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// How mines are spread around the first move
    #[arg(long, value_enum, default_value_t = Placement::Rejection)]
    placement: Placement,

    /// Print the last snapshot as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("{:?}", args);

    let options = GameOptions {
        seed: args.seed,
        placement: args.placement.into(),
    };
    let mut game = Game::with_options(args.difficulty, options);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{HELP}")?;
    draw(&mut stdout, &mut game)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read command")?;

        let redraw = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                writeln!(stdout, "{HELP}")?;
                true
            }
            Ok(command) => match apply(&mut game, command) {
                Ok(changed) => changed,
                Err(err) => {
                    writeln!(stdout, "{err}")?;
                    false
                }
            },
            Err(err) => {
                writeln!(stdout, "{err}")?;
                false
            }
        };

        if redraw {
            draw(&mut stdout, &mut game)?;
        } else {
            prompt(&mut stdout)?;
        }
    }

    if args.json {
        let snapshot = serde_json::to_string_pretty(&game.snapshot())
            .context("Could not serialize snapshot")?;
        writeln!(stdout, "{snapshot}")?;
    }
    Ok(())
}

/// Runs one game command. Returns whether the board changed.
fn apply(game: &mut Game, command: Command) -> sweepkit_core::Result<bool> {
    let changed = match command {
        Command::Reveal(coords) => {
            let outcome = game.reveal(coords)?;
            log::debug!("reveal {:?}: {:?}", coords, outcome);
            outcome.has_update()
        }
        Command::Flag(coords) => {
            let outcome = game.toggle_flag(coords)?;
            log::debug!("flag {:?}: {:?}", coords, outcome);
            outcome.has_update()
        }
        Command::NewGame(Some(difficulty)) => {
            game.new_game(difficulty);
            true
        }
        Command::NewGame(None) => {
            game.restart();
            true
        }
        Command::Help | Command::Quit => false,
    };
    Ok(changed)
}

/// Brings the clock up to date, then prints the board and a prompt.
fn draw(out: &mut impl Write, game: &mut Game) -> io::Result<()> {
    for tick in game.catch_up_timer(Instant::now()) {
        log::trace!("tick {}", tick.elapsed_secs);
    }
    write!(out, "{}", BoardView(&game.snapshot()))?;
    prompt(out)
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use sweepkit_core::{GameError, GameStatus};

    use super::*;

    fn seeded_game() -> Game {
        game_with_seed(11)
    }

    fn game_with_seed(seed: u64) -> Game {
        let options = GameOptions {
            seed: Some(seed),
            placement: PlacementPolicy::RejectionSampling,
        };
        Game::with_options(Difficulty::Easy, options)
    }

    #[test]
    fn ignored_commands_do_not_redraw() {
        let mut game = seeded_game();

        assert_eq!(apply(&mut game, Command::Flag((0, 0))), Ok(false));
        assert_eq!(apply(&mut game, Command::Reveal((4, 4))), Ok(true));
        assert_eq!(apply(&mut game, Command::Reveal((4, 4))), Ok(false));
        assert_eq!(apply(&mut game, Command::Help), Ok(false));
    }

    #[test]
    fn flag_toggles_redraw_both_ways() {
        let mut game = (0..20)
            .map(game_with_seed)
            .find_map(|mut game| {
                apply(&mut game, Command::Reveal((4, 4))).unwrap();
                (game.status() == GameStatus::InProgress).then_some(game)
            })
            .unwrap();

        let hidden = game
            .state()
            .board()
            .iter_coords()
            .find(|&coords| game.state().board()[coords].is_hidden())
            .unwrap();
        assert_eq!(apply(&mut game, Command::Flag(hidden)), Ok(true));
        assert_eq!(apply(&mut game, Command::Flag(hidden)), Ok(true));
    }

    #[test]
    fn new_games_always_redraw() {
        let mut game = seeded_game();
        apply(&mut game, Command::Reveal((4, 4))).unwrap();

        assert_eq!(apply(&mut game, Command::NewGame(None)), Ok(true));
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(
            apply(&mut game, Command::NewGame(Some(Difficulty::Hard))),
            Ok(true)
        );
        assert_eq!(game.state().board().size(), (16, 30));
    }

    #[test]
    fn out_of_bounds_commands_are_errors() {
        let mut game = seeded_game();
        assert_eq!(
            apply(&mut game, Command::Reveal((9, 0))),
            Err(GameError::InvalidCoords)
        );
    }
}
