//! Constraint propagation: everything deducible without guessing.
//!
//! All passes here report whether they changed the grid, so callers can
//! drive them to a fixpoint. Candidate sets only ever shrink; the search
//! layer's snapshot rollback is the single exception.

use sudocheck_core::{Digit, Grid, House, Position};
use tinyvec::ArrayVec;

/// Removes the digits already placed in `house` from the candidates of its
/// unplaced members.
///
/// This encodes the basic rule that a digit used once in a row, column, or
/// box cannot appear again in that group.
pub fn eliminate_placed(grid: &mut Grid, house: House) -> bool {
    let positions = house.positions();
    let placed = grid.placed_digits(&positions);
    if placed.is_empty() {
        return false;
    }
    let mut changed = false;
    for pos in positions {
        if grid[pos].is_filled() {
            continue;
        }
        for digit in placed {
            changed |= grid.remove_candidate(pos, digit);
        }
    }
    changed
}

/// Applies the naked-subset rule within `house`.
///
/// A maximal set of unplaced cells whose candidate sets are *identical*
/// and whose size equals the set's cardinality (two cells both holding
/// exactly {3, 7}, three cells all holding exactly {2, 5, 8}, ...) claims
/// those digits, which are then removed from every other unplaced cell in
/// the house.
///
/// Only exactly-equal candidate sets are matched, not the general
/// k-cells-whose-union-has-size-k rule, so some eliminations a stricter
/// solver would make are left to the search layer instead.
pub fn eliminate_naked_subsets(grid: &mut Grid, house: House) -> bool {
    let positions = house.positions();
    let mut changed = false;
    for (i, &pivot) in positions.iter().enumerate() {
        if grid[pivot].is_filled() {
            continue;
        }
        let candidates = grid[pivot].candidates();
        let size = candidates.len();
        if size < 2 {
            continue;
        }
        let mut members: ArrayVec<[usize; 9]> = ArrayVec::new();
        members.push(i);
        for (j, &other) in positions.iter().enumerate().skip(i + 1) {
            if !grid[other].is_filled() && grid[other].candidates() == candidates {
                members.push(j);
            }
        }
        if members.len() != size {
            continue;
        }
        for (j, &other) in positions.iter().enumerate() {
            if grid[other].is_filled() || members.contains(&j) {
                continue;
            }
            for digit in candidates {
                changed |= grid.remove_candidate(other, digit);
            }
        }
    }
    changed
}

/// Runs both elimination passes on one house, reporting whether either
/// changed anything.
pub fn update_house(grid: &mut Grid, house: House) -> bool {
    let placed = eliminate_placed(grid, house);
    let subsets = eliminate_naked_subsets(grid, house);
    placed | subsets
}

/// Runs [`update_house`] on all 27 houses.
pub fn update_all(grid: &mut Grid) -> bool {
    let mut changed = false;
    for house in House::ALL {
        changed |= update_house(grid, house);
    }
    changed
}

/// Places `digit` at `pos` and immediately re-runs the elimination passes
/// on the three houses containing the cell.
///
/// Propagation stays cell-local and incremental so newly placed values are
/// reflected before the next deduction pass reads them.
pub fn assign(grid: &mut Grid, pos: Position, digit: Digit) {
    grid.place(pos, digit);
    for house in House::containing(pos) {
        update_house(grid, house);
    }
}

fn place_naked_singles(grid: &mut Grid, house: House) -> bool {
    let mut changed = false;
    for pos in house.positions() {
        if let Some(digit) = grid[pos].candidates().as_single() {
            assign(grid, pos, digit);
            changed = true;
        }
    }
    changed
}

fn place_hidden_singles(grid: &mut Grid, house: House) -> bool {
    let positions = house.positions();
    let mut changed = false;
    for digit in Digit::ALL {
        let mut holder = None;
        let mut count = 0;
        for &pos in &positions {
            if grid[pos].candidates().contains(digit) {
                holder = Some(pos);
                count += 1;
                if count > 1 {
                    break;
                }
            }
        }
        if count == 1
            && let Some(pos) = holder
        {
            assign(grid, pos, digit);
            changed = true;
        }
    }
    changed
}

/// Alternates naked-single and hidden-single placement within one house
/// until neither makes progress.
///
/// A naked single is an unplaced cell with exactly one remaining
/// candidate; a hidden single is a digit only one cell in the house can
/// still hold. Every placement goes through [`assign`], so peer candidates
/// are already narrowed when the next scan runs.
pub fn place_singles(grid: &mut Grid, house: House) -> bool {
    let mut changed = false;
    loop {
        if place_naked_singles(grid, house) {
            changed = true;
            continue;
        }
        if place_hidden_singles(grid, house) {
            changed = true;
            continue;
        }
        break;
    }
    changed
}

/// Runs [`place_singles`] on all 27 houses, reporting whether any
/// assignment occurred.
pub fn place_all_singles(grid: &mut Grid) -> bool {
    let mut changed = false;
    for house in House::ALL {
        changed |= place_singles(grid, house);
    }
    changed
}
