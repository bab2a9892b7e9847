use serde::{Deserialize, Serialize};

/// Stored cell state: the placed value plus the player's marks on it.
///
/// `value` is `MINE` for a mine and the adjacent mine count otherwise. It stays
/// zero until mines are placed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: i8,
    pub revealed: bool,
    pub flagged: bool,
}

impl Cell {
    pub const MINE: i8 = -1;

    pub const fn is_mine(self) -> bool {
        self.value == Self::MINE
    }

    pub const fn is_hidden(self) -> bool {
        !self.revealed && !self.flagged
    }

    /// What a player is allowed to see of this cell.
    pub const fn view(self) -> CellView {
        if self.revealed {
            match self.value {
                Self::MINE => CellView::Mine,
                0 => CellView::Empty,
                n => CellView::Number(n as u8),
            }
        } else if self.flagged {
            CellView::Flagged
        } else {
            CellView::Hidden
        }
    }
}

/// Player-visible state of a cell, as exposed through snapshots.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Empty,
    Number(u8),
    Mine,
}

impl CellView {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Empty | Self::Number(_) | Self::Mine)
    }
}
