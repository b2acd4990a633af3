//! The N×N grid and its bounds-checked access.
//!
//! Cells are stored row-major in a flat `Vec`. The board never shrinks or
//! grows after construction; every accessor checks against `size`. Boards
//! serialize as rows of face values and are rebuilt through
//! [`Board::from_rows`], so a saved board cannot come back misshapen.

use serde::{Deserialize, Serialize};

use super::tile::{cell_value, Cell, Position, Tile};
use crate::core::{EngineError, EngineResult};

/// Square grid of cells.
///
/// ## Example
///
/// ```
/// use twenty48_engine::board::{Board, Tile};
///
/// let mut board = Board::new(4);
/// board.set(0, 3, Some(Tile::TWO));
///
/// assert_eq!(board.get(0, 3), Some(Tile::TWO));
/// assert_eq!(board.empty_cells().count(), 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with `size` rows and columns.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from face values, 0 meaning empty.
    ///
    /// Rows must all have the same length as the number of rows.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> EngineResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::InvalidBoard("board needs at least one row".into()));
        }
        let mut board = Self::new(size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(EngineError::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    values.len(),
                    size
                )));
            }
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    board.set(row, col, Some(Tile::from_value(value)?));
                }
            }
        }
        Ok(board)
    }

    /// Build a board from a fixed-size array of face values, 0 meaning empty.
    ///
    /// ```
    /// use twenty48_engine::board::Board;
    ///
    /// let board = Board::from_array([[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(board.empty_cells().count(), 2);
    /// ```
    pub fn from_array<const N: usize>(rows: [[u32; N]; N]) -> EngineResult<Self> {
        Self::from_rows(&rows)
    }

    /// Face values row by row, 0 meaning empty.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows()
            .map(|row| row.iter().copied().map(cell_value).collect())
            .collect()
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> EngineResult<usize> {
        if row >= self.size || col >= self.size {
            return Err(EngineError::OutOfBounds { row, col, size: self.size });
        }
        Ok(row * self.size + col)
    }

    /// Read a cell, or `OutOfBounds`.
    pub fn try_get(&self, row: usize, col: usize) -> EngineResult<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Write a cell, or `OutOfBounds`.
    pub fn try_set(&mut self, row: usize, col: usize, cell: Cell) -> EngineResult<()> {
        let i = self.index(row, col)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Read a cell.
    ///
    /// Panics on an out-of-bounds index in every build profile.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        match self.try_get(row, col) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }

    /// Write a cell.
    ///
    /// Panics on an out-of-bounds index in every build profile.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Err(err) = self.try_set(row, col, cell) {
            panic!("{err}");
        }
    }

    /// Read a cell by position.
    #[must_use]
    pub fn at(&self, pos: Position) -> Cell {
        self.get(pos.row, pos.col)
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Replace a whole row.
    pub(crate) fn set_row(&mut self, row: usize, cells: &[Cell]) {
        debug_assert_eq!(cells.len(), self.size);
        let start = row * self.size;
        self.cells[start..start + self.size].copy_from_slice(cells);
    }

    /// Lazily scan for empty cells in row-major order.
    ///
    /// Recomputed on each call; the board may have changed in between.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(i, _)| Position::new(i / size, i % size))
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Exact cell-by-cell comparison.
    #[must_use]
    pub fn equals(&self, other: &Board) -> bool {
        self == other
    }

    /// Largest tile on the board.
    #[must_use]
    pub fn max_tile(&self) -> Option<Tile> {
        self.cells.iter().flatten().copied().max()
    }

    /// Board mirrored across its main diagonal.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut out = Self::new(self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                out.cells[col * self.size + row] = self.cells[row * self.size + col];
            }
        }
        out
    }

    /// Board with every row reversed left to right.
    #[must_use]
    pub fn reversed_rows(&self) -> Self {
        let mut out = self.clone();
        for row in out.cells.chunks_mut(self.size) {
            row.reverse();
        }
        out
    }
}

impl TryFrom<Vec<Vec<u32>>> for Board {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<u32>>) -> EngineResult<Self> {
        Self::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<u32>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .max_tile()
            .map_or(1, |tile| tile.value().to_string().len());
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(tile) => format!("{:>width$}", tile.value()),
                    None => format!("{:>width$}", "."),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
