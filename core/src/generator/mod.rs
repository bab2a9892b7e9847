use serde::{Deserialize, Serialize};

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Places the mines of a blank board once the first move is known.
///
/// Implementations must keep `safe` and its neighbors free of mines.
pub trait MineGenerator {
    fn place_mines(&mut self, board: &mut Board, safe: Coord2) -> Result<()>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementPolicy {
    /// Draw random cells, skipping mines and the safe zone, until enough mines
    /// are placed.
    #[default]
    RejectionSampling,
    /// Shuffle the cells outside the safe zone and take the first ones.
    Shuffle,
}

/// Number of cells a generator may put a mine on when the first move is `safe`.
pub(crate) fn eligible_cell_count(board: &Board, safe: Coord2) -> CellCount {
    // the safe zone is the cell itself plus its in-bounds neighbors
    let safe_zone = board.iter_neighbors(safe).count() as CellCount + 1;
    board.total_cells() - safe_zone
}
