use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only picture of a game for a presentation layer.
///
/// Hidden cells carry no mine information, so a snapshot can be handed to a
/// renderer (or serialized) without leaking the layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub rows: Coord,
    pub cols: Coord,
    pub cells: Array2<CellView>,
    pub status: GameStatus,
    pub difficulty: Option<Difficulty>,
    pub game_over: bool,
    pub won: bool,
    pub elapsed_secs: u32,
    pub mine_count: CellCount,
    pub flagged_count: CellCount,
    pub triggered_mine: Option<Coord2>,
}

impl Snapshot {
    pub fn from_state(state: &GameState) -> Self {
        let board = state.board();
        let (rows, cols) = board.size();

        Self {
            rows,
            cols,
            cells: board.cells().map(|cell| cell.view()),
            status: state.status(),
            difficulty: state.difficulty(),
            game_over: state.game_over(),
            won: state.won(),
            elapsed_secs: state.elapsed_secs(),
            mine_count: board.mine_count(),
            flagged_count: board.flagged_count(),
            triggered_mine: state.triggered_mine(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellView> {
        if coords.0 < self.rows && coords.1 < self.cols {
            Ok(self.cells[cell_index(coords)])
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// How many mines have not been flagged yet; negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.mine_count) - i32::from(self.flagged_count)
    }
}
