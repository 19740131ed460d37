//! Grid coordinates and cell contents.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Player, BOARD_SIZE};

/// A grid coordinate. Row 0 is the top row, column 0 the left column.
///
/// `Position::new` does not check bounds; use [`Position::checked`] for
/// coordinates coming from outside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Create a position, rejecting coordinates outside the board.
    pub fn checked(row: usize, col: usize) -> Result<Self, EngineError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(EngineError::OutOfBounds { row, col })
        }
    }

    /// Check whether this position lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Check whether this position touches no edge of the board.
    #[must_use]
    pub const fn is_interior(self) -> bool {
        self.row > 0 && self.row < BOARD_SIZE - 1 && self.col > 0 && self.col < BOARD_SIZE - 1
    }

    /// Manhattan distance to the geometric centre of the board.
    ///
    /// The centre sits at `((N - 1) / 2, (N - 1) / 2)`, which is a half
    /// coordinate on even boards; both half offsets cancel, so the distance
    /// is always a whole number.
    #[must_use]
    pub fn distance_to_center(self) -> usize {
        let span = BOARD_SIZE - 1;
        ((2 * self.row).abs_diff(span) + (2 * self.col).abs_diff(span)) / 2
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One grid cell: an optional owner and its accumulated charge.
///
/// A cell is owned exactly when its charge is non-zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    owner: Option<Player>,
    charge: u8,
}

impl Cell {
    /// An unowned, uncharged cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            owner: None,
            charge: 0,
        }
    }

    /// A cell owned by `player` holding `charge`.
    ///
    /// A zero charge yields an empty cell.
    #[must_use]
    pub const fn owned(player: Player, charge: u8) -> Self {
        if charge == 0 {
            Self::empty()
        } else {
            Self {
                owner: Some(player),
                charge,
            }
        }
    }

    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        self.owner
    }

    #[must_use]
    pub const fn charge(self) -> u8 {
        self.charge
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.owner.is_none()
    }

    /// Check whether `player` owns this cell.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.owner == Some(player)
    }

    /// Check whether this cell has reached the explosion threshold.
    #[must_use]
    pub const fn is_critical(self) -> bool {
        self.charge >= crate::core::MAX_CHARGE
    }

    /// Check the owner/charge pairing invariant.
    #[must_use]
    pub const fn is_consistent(self) -> bool {
        self.owner.is_none() == (self.charge == 0)
    }

    /// Add one unit of charge, keeping the owner.
    pub(crate) fn add_charge(&mut self) {
        self.charge = self.charge.saturating_add(1);
    }

    /// Hand the cell to `owner` and add one unit of charge.
    pub(crate) fn absorb(&mut self, owner: Player) {
        self.owner = Some(owner);
        self.add_charge();
    }
}
