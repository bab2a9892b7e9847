/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// `ndarray` index of a cell.
pub fn cell_index((row, col): Coord2) -> [usize; 2] {
    [row.into(), col.into()]
}

/// Number of cells on a `rows` by `cols` grid. Never overflows: 255 * 255 fits.
pub const fn cell_count(rows: Coord, cols: Coord) -> CellCount {
    rows as CellCount * cols as CellCount
}

/// King-move distance between two cells.
pub fn chebyshev_distance(a: Coord2, b: Coord2) -> Coord {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}

/// Whether `coords` is `center` or one of its eight neighbors.
pub fn in_safe_zone(center: Coord2, coords: Coord2) -> bool {
    chebyshev_distance(center, coords) <= 1
}

/// Row-major offsets of the eight surrounding cells.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cells around `center` that fall inside a `size` grid, clamped at edges and
/// corners.
pub fn neighbors_within(
    center: Coord2,
    size: Coord2,
) -> impl Iterator<Item = Coord2> + Clone + use<> {
    let ((row, col), (rows, cols)) = (center, size);
    OFFSETS.into_iter().filter_map(move |(d_row, d_col)| {
        let row = row.checked_add_signed(d_row).filter(|&r| r < rows)?;
        let col = col.checked_add_signed(d_col).filter(|&c| c < cols)?;
        Some((row, col))
    })
}
