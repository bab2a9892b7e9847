use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The grid of cells for one game, together with its mine count.
///
/// A fresh board has every cell zeroed: mines are placed later, once, through
/// [`Board::set_mines`], usually by a [`MineGenerator`] when the first move is
/// known.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    mines_placed: bool,
}

impl Board {
    pub fn new(rows: Coord, cols: Coord, mine_count: CellCount) -> Result<Self> {
        BoardConfig::new(rows, cols, mine_count).map(Self::blank)
    }

    pub fn with_config(config: BoardConfig) -> Result<Self> {
        Self::new(config.rows, config.cols, config.mines)
    }

    /// Builds a board with mines already at `mine_coords`, duplicates ignored.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (rows, cols) = size;
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let mut distinct = mine_coords.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        let mine_count = distinct
            .len()
            .try_into()
            .map_err(|_| GameError::TooManyMines)?;

        let mut board = Self::blank(BoardConfig::new_unchecked(rows, cols, mine_count));
        board.set_mines(&distinct)?;
        Ok(board)
    }

    pub(crate) fn blank(config: BoardConfig) -> Self {
        Self {
            cells: Array2::default(cell_index(config.size())),
            mine_count: config.mines,
            mines_placed: false,
        }
    }

    pub fn config(&self) -> BoardConfig {
        let (rows, cols) = self.size();
        BoardConfig::new_unchecked(rows, cols, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // dimensions come from a `Coord2`, so they always fit
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        cell_count(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Array2<Cell> {
        &mut self.cells
    }

    /// Unchecked counterpart of [`Board::get_mut`] for validated coordinates.
    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[cell_index(coords)]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn get_mut(&mut self, coords: Coord2) -> Result<&mut Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&mut self.cells[cell_index(coords)])
    }

    /// In-bounds neighbors of `coords`, at most eight.
    pub fn neighbors(&self, coords: Coord2) -> Result<impl Iterator<Item = Coord2> + use<>> {
        let coords = self.validate_coords(coords)?;
        Ok(self.iter_neighbors(coords))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors_within(coords, self.size())
    }

    /// Every coordinate of the board in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbors
        self.iter_neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count() as u8
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(|cell| cell.flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(|cell| cell.revealed)
    }

    fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        // bounded by `total_cells`, which is a `CellCount`
        self.cells.iter().filter(|&cell| predicate(cell)).count() as CellCount
    }

    /// Puts mines at `mine_coords` and fills in every other cell's adjacent
    /// count. Allowed once per board, and the distinct coordinates must match
    /// the board's mine count.
    pub fn set_mines(&mut self, mine_coords: &[Coord2]) -> Result<()> {
        if self.mines_placed {
            return Err(GameError::MinesAlreadyPlaced);
        }

        let mut mine_mask: Array2<bool> = Array2::default(self.cells.dim());
        for &coords in mine_coords {
            let coords = self.validate_coords(coords)?;
            mine_mask[cell_index(coords)] = true;
        }

        let actual = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        if actual != self.mine_count {
            return Err(GameError::MineCountMismatch {
                expected: self.mine_count,
                actual,
            });
        }

        for (cell, &is_mine) in self.cells.iter_mut().zip(mine_mask.iter()) {
            cell.value = if is_mine { Cell::MINE } else { 0 };
        }
        for coords in self.iter_coords() {
            if !self.contains_mine(coords) {
                let count = self.adjacent_mine_count(coords);
                self.cells[cell_index(coords)].value = count as i8;
            }
        }

        self.mines_placed = true;
        log::debug!("Placed {} mines on a {:?} board", actual, self.size());
        Ok(())
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[cell_index(coords)]
    }
}
