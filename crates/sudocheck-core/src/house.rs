//! Constraint groups: rows, columns, and 3x3 boxes.

use crate::position::Position;

/// A constraint group (row, column, or 3x3 box).
///
/// There are 27 houses; every cell belongs to exactly one row, one column,
/// and one box. A house never owns cells, it only names the nine
/// coordinates of its members within the single owned [`Grid`].
///
/// [`Grid`]: crate::Grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3x3 box identified by its index (0-8, left to right, top to
    /// bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All 27 houses: rows 0-8, then columns 0-8, then boxes 0-8.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the nine member positions of this house, in house-local
    /// cell order (left to right for rows, top to bottom for columns,
    /// row-major within a box).
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        for (i, slot) in (0u8..9).zip(&mut positions) {
            *slot = match self {
                Self::Row { y } => Position::new(i, y),
                Self::Column { x } => Position::new(x, i),
                Self::Box { index } => Position::from_box(index, i),
            };
        }
        positions
    }

    /// Returns the three houses containing a position: its row, its
    /// column, and its box.
    #[must_use]
    pub fn containing(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }
}
