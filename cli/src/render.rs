use core::fmt;
use sweepkit_core::{CellView, GameStatus, Snapshot};

/// Text rendering of a snapshot: a status line, column headers, then one line
/// per row.
pub struct BoardView<'a>(pub &'a Snapshot);

impl BoardView<'_> {
    fn glyph(&self, row: u8, col: u8) -> char {
        let snapshot = self.0;
        if snapshot.triggered_mine == Some((row, col)) {
            return 'X';
        }
        match snapshot.cells[[usize::from(row), usize::from(col)]] {
            CellView::Hidden => '.',
            CellView::Flagged => 'F',
            CellView::Empty => ' ',
            CellView::Number(count) => char::from(b'0' + count),
            CellView::Mine => '*',
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;

        let status = match snapshot.status {
            GameStatus::NotStarted => "ready",
            GameStatus::InProgress => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        writeln!(
            f,
            "mines {}  left {}  time {}s  [{}]",
            snapshot.mine_count,
            snapshot.mines_left(),
            snapshot.elapsed_secs,
            status
        )?;

        write!(f, "   ")?;
        for col in 0..snapshot.cols {
            write!(f, "{}", col % 10)?;
        }
        writeln!(f)?;

        for row in 0..snapshot.rows {
            write!(f, "{row:>2} ")?;
            for col in 0..snapshot.cols {
                write!(f, "{}", self.glyph(row, col))?;
            }
            writeln!(f)?;
        }

        match snapshot.status {
            GameStatus::Won => writeln!(f, "You win!"),
            GameStatus::Lost => writeln!(f, "Game over!"),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweepkit_core::{BoardConfig, FixedMineGenerator, Game};

    fn game() -> Game<FixedMineGenerator> {
        let config = BoardConfig::new(4, 5, 2).unwrap();
        Game::with_config(config, FixedMineGenerator::new([(0, 4), (3, 4)])).unwrap()
    }

    #[test]
    fn renders_fresh_board_hidden() {
        let rendered = BoardView(&game().snapshot()).to_string();

        assert_eq!(
            rendered,
            "mines 2  left 2  time 0s  [ready]\n   01234\n 0 .....\n 1 .....\n 2 .....\n 3 .....\n"
        );
    }

    #[test]
    fn renders_numbers_mines_and_trigger() {
        let mut game = game();
        game.reveal((1, 0)).unwrap();
        game.reveal((3, 4)).unwrap();

        let rendered = BoardView(&game.snapshot()).to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "mines 2  left 2  time 0s  [lost]");
        assert_eq!(lines[1], "   01234");
        assert_eq!(lines[2], " 0    1*");
        assert_eq!(lines[3], " 1    1.");
        assert_eq!(lines[5], " 3    1X");
        assert_eq!(lines[6], "Game over!");
    }

    #[test]
    fn renders_flags_in_progress() {
        let mut game = game();
        game.reveal((1, 0)).unwrap();
        game.toggle_flag((1, 4)).unwrap();

        let rendered = BoardView(&game.snapshot()).to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "mines 2  left 1  time 0s  [playing]");
        assert_eq!(lines[3], " 1    1F");
        assert_eq!(lines.len(), 6);
    }
}
