use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - NotStarted -> Won, when the first flood fill clears the board
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// A new game goes back to NotStarted from any state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_not_started(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Everything one game owns. Replaced as a whole on a new game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    board: Board,
    status: GameStatus,
    difficulty: Option<Difficulty>,
    timer: Timer,
    triggered_mine: Option<Coord2>,
}

impl GameState {
    fn new(board: Board, difficulty: Option<Difficulty>) -> Self {
        Self {
            board,
            status: GameStatus::NotStarted,
            difficulty,
            timer: Timer::new(),
            triggered_mine: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status.is_finished()
    }

    /// Only meaningful once the game is over.
    pub fn won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }

    pub fn first_click_done(&self) -> bool {
        !self.status.is_not_started()
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.timer.elapsed_secs()
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// `None` for boards built from an explicit configuration.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }
}

/// Controller options for randomly generated games.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Forces a seed instead of a random one.
    pub seed: Option<u64>,
    pub placement: PlacementPolicy,
}

/// Runs games from the first move to a win or a loss.
///
/// Commands that make no sense in the current state, like revealing a flagged
/// cell or flagging after the game ended, are ignored and report a no-change
/// outcome instead of an error. A presentation layer can forward every click
/// without checking first. Errors are reserved for coordinates outside the
/// board and other caller mistakes.
#[derive(Clone, Debug)]
pub struct Game<G = RandomMineGenerator> {
    state: GameState,
    generator: G,
}

impl Game<RandomMineGenerator> {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_options(difficulty, GameOptions::default())
    }

    pub fn with_options(difficulty: Difficulty, options: GameOptions) -> Self {
        let generator = match options.seed {
            Some(seed) => RandomMineGenerator::new(seed, options.placement),
            None => RandomMineGenerator::from_entropy(options.placement),
        };
        log::debug!("seed: {}", generator.seed());
        Self::with_generator(difficulty, generator)
    }
}

impl<G: MineGenerator> Game<G> {
    pub fn with_generator(difficulty: Difficulty, generator: G) -> Self {
        // presets always satisfy the board invariants
        let board = Board::blank(difficulty.config());
        Self {
            state: GameState::new(board, Some(difficulty)),
            generator,
        }
    }

    /// A game on a board outside the presets.
    pub fn with_config(config: BoardConfig, generator: G) -> Result<Self> {
        let board = Board::with_config(config)?;
        Ok(Self {
            state: GameState::new(board, None),
            generator,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_state(&self.state)
    }

    /// Throws the current game away and starts a fresh one at `difficulty`.
    pub fn new_game(&mut self, difficulty: Difficulty) {
        log::debug!("New {} game", difficulty);
        self.state = GameState::new(Board::blank(difficulty.config()), Some(difficulty));
    }

    /// Starts over on a board of the same shape and mine count.
    pub fn restart(&mut self) {
        let config = self.state.board.config();
        let difficulty = self.state.difficulty;
        self.state = GameState::new(Board::blank(config), difficulty);
    }

    /// Reveals a cell. The first reveal of a game places the mines around it.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.state.board.validate_coords(coords)?;

        match self.state.status {
            GameStatus::Won | GameStatus::Lost => return Ok(RevealOutcome::NoChange),
            GameStatus::NotStarted => self.start(coords)?,
            GameStatus::InProgress => {}
        }

        let outcome = self.state.board.reveal(coords);
        Ok(self.check_status(coords, outcome))
    }

    /// Flags or unflags a hidden cell. Ignored before the first reveal and after
    /// the game ends.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.state.board.validate_coords(coords)?;

        if !matches!(self.state.status, GameStatus::InProgress) {
            return Ok(MarkOutcome::NoChange);
        }

        self.state.board.toggle_flag(coords)
    }

    /// Advances the clock by one second, for hosts with a one-second interval.
    pub fn tick(&mut self) -> Option<TimerTick> {
        if !matches!(self.state.status, GameStatus::InProgress) {
            return None;
        }
        self.state.timer.tick()
    }

    /// Advances the clock to `now`, for hosts without an interval.
    pub fn catch_up_timer(&mut self, now: Instant) -> Vec<TimerTick> {
        if !matches!(self.state.status, GameStatus::InProgress) {
            return Vec::new();
        }
        self.state.timer.catch_up(now)
    }

    fn start(&mut self, safe: Coord2) -> Result<()> {
        self.generator.place_mines(&mut self.state.board, safe)?;
        self.state.timer.start();
        self.state.status = GameStatus::InProgress;
        log::debug!("Game started at {:?}", safe);
        Ok(())
    }

    fn check_status(&mut self, coords: Coord2, outcome: RevealOutcome) -> RevealOutcome {
        match outcome {
            RevealOutcome::NoChange => RevealOutcome::NoChange,
            RevealOutcome::HitMine => {
                self.state.triggered_mine = Some(coords);
                self.end_game(false);
                RevealOutcome::HitMine
            }
            _ if self.state.board.all_safe_revealed() => {
                self.end_game(true);
                RevealOutcome::Won
            }
            other => other,
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.status.is_finished() {
            return;
        }

        self.state.status = if won {
            GameStatus::Won
        } else {
            self.state.board.reveal_all_mines();
            GameStatus::Lost
        };
        self.state.timer.stop();
        log::debug!(
            "Game {} after {} seconds",
            if won { "won" } else { "lost" },
            self.state.timer.elapsed_secs()
        );
    }
}
