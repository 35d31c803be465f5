//! Solving engine for sudocheck.
//!
//! The engine has three layers:
//!
//! - [`propagate`]: deduction without guessing — candidate elimination per
//!   house (placed values and equal-set naked subsets) plus naked-single
//!   and hidden-single placement, applied to a fixpoint.
//! - [`search`]: a depth-first backtracking search that kicks in only when
//!   propagation stalls. Each trial value runs under a grid snapshot and is
//!   rolled back on failure; a process-wide guess counter records how many
//!   trials were needed.
//! - [`validate`]: the completion check that certifies a filled grid
//!   actually satisfies the one-of-each-digit rule in all 27 houses.
//!
//! # Examples
//!
//! ```
//! use sudocheck_core::Grid;
//! use sudocheck_solver::{Outcome, is_valid_solution, solve};
//!
//! let mut grid: Grid = "
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
//! let (outcome, guesses) = solve(&mut grid);
//! assert_eq!(outcome, Outcome::Solved);
//! assert!(is_valid_solution(&grid));
//! println!("solved with {guesses} guesses");
//! # Ok::<(), sudocheck_core::MalformedInputError>(())
//! ```

pub mod propagate;
pub mod search;
pub mod validate;

pub use self::{
    search::{Outcome, Solver, solve},
    validate::is_valid_solution,
};
