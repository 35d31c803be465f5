//! Completion check: certifies a filled grid as a valid solution.
//!
//! Propagation fills cells but never proves global consistency on its own,
//! so a filled grid must pass this check before it is reported as solved.

use sudocheck_core::{DigitSet, Grid, House};

/// Returns `true` if the grid is fully filled and every house contains
/// each digit exactly once.
///
/// The check is read-only and idempotent.
#[must_use]
pub fn is_valid_solution(grid: &Grid) -> bool {
    grid.is_complete() && House::ALL.iter().all(|house| house_is_valid(grid, *house))
}

fn house_is_valid(grid: &Grid, house: House) -> bool {
    let mut seen = DigitSet::new();
    for pos in house.positions() {
        let Some(digit) = grid[pos].value() else {
            return false;
        };
        if !seen.insert(digit) {
            return false;
        }
    }
    true
}
