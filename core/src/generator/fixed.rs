use super::*;

/// Places a predetermined layout, for scripted games and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn place_mines(&mut self, board: &mut Board, safe: Coord2) -> Result<()> {
        let safe = board.validate_coords(safe)?;
        let crowded = self.mines.iter().find(|&&coords| in_safe_zone(safe, coords));
        if let Some(&coords) = crowded {
            log::warn!(
                "Fixed layout has a mine at {:?}, next to first move {:?}",
                coords,
                safe
            );
            return Err(GameError::MineInSafeZone);
        }
        board.set_mines(&self.mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_given_layout() {
        let mut board = Board::new(6, 6, 2).unwrap();
        let mut generator = FixedMineGenerator::new([(0, 5), (5, 5)]);

        generator.place_mines(&mut board, (2, 1)).unwrap();

        assert!(board.contains_mine((0, 5)));
        assert!(board.contains_mine((5, 5)));
        assert_eq!(board[(4, 4)].value, 1);
    }

    #[test]
    fn refuses_mine_in_safe_zone() {
        let mut board = Board::new(6, 6, 2).unwrap();
        let mut generator = FixedMineGenerator::new([(0, 5), (3, 2)]);

        assert_eq!(
            generator.place_mines(&mut board, (2, 1)),
            Err(GameError::MineInSafeZone)
        );
        assert!(!board.mines_placed());
    }

    #[test]
    fn refuses_wrong_mine_count() {
        let mut board = Board::new(6, 6, 3).unwrap();
        let mut generator = FixedMineGenerator::new([(0, 5), (5, 5)]);

        assert_eq!(
            generator.place_mines(&mut board, (2, 1)),
            Err(GameError::MineCountMismatch {
                expected: 3,
                actual: 2
            })
        );
    }
}
