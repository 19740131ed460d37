//! The game board: a fixed square grid of cells.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineError, Player, PlayerMap, BOARD_SIZE, MAX_CHARGE};

use super::cell::{Cell, Position};

/// Orthogonal neighbours of a cell. At most four, so no heap allocation.
pub type Neighbors = SmallVec<[Position; 4]>;

/// Offsets visited when looking for neighbours: up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A `BOARD_SIZE` x `BOARD_SIZE` grid of cells.
///
/// Boards are small `Copy` values. The rules engine and the evaluator take
/// a board by value, work on their own copy, and hand back a new board, so
/// the session's board is never aliased during a simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from a full grid of cells.
    #[must_use]
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Read a cell, rejecting coordinates outside the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        let pos = Position::checked(row, col)?;
        Ok(self.get(pos))
    }

    /// Read the cell at an in-bounds position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board. Positions produced by
    /// [`Position::checked`], [`Board::positions`] and [`Board::neighbors`]
    /// are always in bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Return a copy of this board with one cell replaced.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board, like [`Board::get`]. Validate
    /// outside coordinates with [`Position::checked`] first.
    #[must_use]
    pub fn with_cell(mut self, pos: Position, cell: Cell) -> Self {
        self.set(pos, cell);
        self
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub(crate) fn get_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.row][pos.col]
    }

    /// All positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Iterate over (position, cell) pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Self::positions().map(move |pos| (pos, self.get(pos)))
    }

    /// In-bounds orthogonal neighbours of `pos`, in up/down/left/right order.
    #[must_use]
    pub fn neighbors(pos: Position) -> Neighbors {
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = pos.row.checked_add_signed(dr)?;
                let col = pos.col.checked_add_signed(dc)?;
                let next = Position::new(row, col);
                next.in_bounds().then_some(next)
            })
            .collect()
    }

    /// Positions of cells nobody owns, row-major.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Positions of cells owned by `player`, row-major.
    #[must_use]
    pub fn owned_positions(&self, player: Player) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| cell.is_owned_by(player))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of cells owned by `player`.
    #[must_use]
    pub fn count_owned(&self, player: Player) -> usize {
        self.iter().filter(|(_, cell)| cell.is_owned_by(player)).count()
    }

    /// Owned-cell counts for both players.
    #[must_use]
    pub fn territory(&self) -> PlayerMap<usize> {
        PlayerMap::new(|player| self.count_owned(player))
    }

    /// Sum of the charge on every cell.
    #[must_use]
    pub fn total_charge(&self) -> u32 {
        self.iter().map(|(_, cell)| u32::from(cell.charge())).sum()
    }

    /// Positions whose charge has reached the explosion threshold, row-major.
    #[must_use]
    pub fn critical_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| cell.is_critical())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Check that no cell is at or above the explosion threshold.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.iter().all(|(_, cell)| cell.charge() < MAX_CHARGE)
    }

    /// Check the owner/charge pairing on every cell.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.iter().all(|(_, cell)| cell.is_consistent())
    }
}

impl std::fmt::Display for Board {
    /// Renders one line per row: `..` for an empty cell, otherwise the
    /// owner's number followed by the charge (`13` is Player 1 with 3).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell.owner() {
                    Some(player) => format!("{}{}", player.index() + 1, cell.charge()),
                    None => "..".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
