//! Core data structures for the sudocheck solver.
//!
//! This crate provides the board model shared by the solver and the CLI:
//!
//! - [`Digit`]: type-safe representation of digits 1-9
//! - [`DigitSet`]: candidate digits for a single cell, backed by a bitset
//! - [`Position`]: an (x, y) board coordinate
//! - [`House`]: one of the 27 constraint groups (rows, columns, boxes)
//! - [`Cell`]: a placed value or a set of remaining candidates
//! - [`Grid`]: the 9x9 board, sole owner of all cells
//!
//! # Examples
//!
//! ```
//! use sudocheck_core::{Digit, Grid, Position};
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! assert_eq!(grid[Position::new(0, 0)].value(), Some(Digit::D5));
//! assert_eq!(grid[Position::new(2, 0)].candidate_count(), 9);
//! # Ok::<(), sudocheck_core::MalformedInputError>(())
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, MalformedInputError},
    house::House,
    position::Position,
};
