use std::collections::VecDeque;

use crate::*;

impl Board {
    /// Reveals the cell at `coords`, flooding outward through zero cells.
    ///
    /// Out-of-bounds, revealed and flagged cells are left alone. Hitting a mine
    /// reveals every mine on the board. Meant to run after mines are placed; on
    /// a blank board every cell reads as zero.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Ok(coords) = self.validate_coords(coords) else {
            return RevealOutcome::NoChange;
        };

        let cell = self[coords];
        if cell.revealed || cell.flagged {
            return RevealOutcome::NoChange;
        }

        if cell.is_mine() {
            self.cell_mut(coords).revealed = true;
            self.reveal_all_mines();
            log::debug!("Hit mine at {:?}", coords);
            return RevealOutcome::HitMine;
        }

        let mut opened = 0usize;
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = self.cell_mut(visit_coords);
            // the same cell can be queued by several zero neighbors
            if cell.revealed || cell.flagged {
                continue;
            }
            cell.revealed = true;
            let value = cell.value;
            opened += 1;

            // zero cells have no mine neighbors, so the flood never opens a mine
            if value == 0 {
                to_visit.extend(
                    self.iter_neighbors(visit_coords)
                        .filter(|&pos| self[pos].is_hidden()),
                );
            }
        }

        log::trace!("Revealed {} cells starting from {:?}", opened, coords);
        RevealOutcome::Revealed
    }

    /// Shows every mine. Flags on mines are dropped as the mine is revealed;
    /// flags elsewhere are kept.
    pub fn reveal_all_mines(&mut self) {
        for cell in self.cells_mut().iter_mut().filter(|cell| cell.is_mine()) {
            cell.revealed = true;
            cell.flagged = false;
        }
    }

    /// Whether every cell without a mine has been revealed.
    pub fn all_safe_revealed(&self) -> bool {
        self.cells()
            .iter()
            .all(|cell| cell.is_mine() || cell.revealed)
    }

    /// Flips the flag on a hidden cell; revealed cells cannot be flagged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let cell = self.get_mut(coords)?;
        if cell.revealed {
            return Ok(MarkOutcome::NoChange);
        }
        cell.flagged = !cell.flagged;
        Ok(MarkOutcome::Changed)
    }
}
