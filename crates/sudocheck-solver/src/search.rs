//! Backtracking search for grids that propagation alone cannot finish.

use log::debug;
use sudocheck_core::{Grid, Position};

use crate::{propagate, validate};

/// The result of a solve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// The grid was completed and passed the completion check; it now
    /// holds the solution.
    Solved,
    /// Every search branch was exhausted without reaching a valid
    /// solution. The grid is restored to its pre-solve state.
    Unsolvable,
}

/// Solver context: drives propagation, guesses when stuck, and owns the
/// guess counter.
///
/// The counter is incremented once per trial value attempted during
/// search, across all recursion depths, and survives between calls on the
/// same context.
#[derive(Debug, Default)]
pub struct Solver {
    guesses: u64,
}

impl Solver {
    /// Creates a solver with a zeroed guess counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of trial values attempted so far.
    #[must_use]
    pub fn guesses(&self) -> u64 {
        self.guesses
    }

    /// Solves the grid in place.
    ///
    /// On [`Outcome::Solved`] the grid holds the (first) solution found.
    /// On [`Outcome::Unsolvable`] — no branch led to a grid passing the
    /// completion check — the grid is restored to exactly the state it had
    /// when this method was called; a half-solved grid is never left
    /// behind.
    pub fn solve(&mut self, grid: &mut Grid) -> Outcome {
        let initial = grid.clone();
        if self.solve_loop(grid) && validate::is_valid_solution(grid) {
            Outcome::Solved
        } else {
            *grid = initial;
            Outcome::Unsolvable
        }
    }

    /// Propagates to a fixpoint, guessing whenever neither elimination nor
    /// single placement makes progress. Returns `true` once the grid is
    /// fully filled.
    fn solve_loop(&mut self, grid: &mut Grid) -> bool {
        while !grid.is_complete() {
            let eliminated = propagate::update_all(grid);
            let placed = propagate::place_all_singles(grid);
            if !eliminated && !placed {
                return self.guess(grid);
            }
        }
        true
    }

    /// Tries each candidate of the most constrained cell under a snapshot.
    ///
    /// Succeeding trials return immediately with the grid as-is; failing
    /// trials are rolled back in full, including every elimination they
    /// triggered, before the next digit is attempted.
    fn guess(&mut self, grid: &mut Grid) -> bool {
        let Some(pos) = most_constrained_cell(grid) else {
            return false;
        };
        let candidates = grid[pos].candidates();
        if candidates.is_empty() {
            debug!("dead end: {pos:?} has no candidates left");
            return false;
        }
        let snapshot = grid.clone();
        for digit in candidates {
            self.guesses += 1;
            debug!("guess #{}: trying {digit} at {pos:?}", self.guesses);
            propagate::assign(grid, pos, digit);
            if self.solve_loop(grid) {
                return true;
            }
            debug!("rolling back {digit} at {pos:?}");
            *grid = snapshot.clone();
        }
        false
    }
}

/// Picks the unplaced cell with the fewest remaining candidates, ties
/// broken by row-major scan order.
///
/// A returned cell may have zero candidates; the caller treats that as a
/// contradictory branch.
fn most_constrained_cell(grid: &Grid) -> Option<Position> {
    let mut best: Option<(Position, usize)> = None;
    for pos in Position::ALL {
        let cell = &grid[pos];
        if cell.is_filled() {
            continue;
        }
        let count = cell.candidate_count();
        if best.is_none_or(|(_, min)| count < min) {
            best = Some((pos, count));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Solves the grid in place, returning the outcome and the number of
/// guesses required.
pub fn solve(grid: &mut Grid) -> (Outcome, u64) {
    let mut solver = Solver::new();
    let outcome = solver.solve(grid);
    (outcome, solver.guesses())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const EASY_SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    // Arto Inkala's 2012 puzzle; far beyond singles, so the search engine
    // has to carry it.
    const HARD: &str = "
        8__ ___ ___
        __3 6__ ___
        _7_ _9_ 2__
        _5_ __7 ___
        ___ _45 7__
        ___ 1__ _3_
        __1 ___ _68
        __8 5__ _1_
        _9_ ___ 4__
    ";

    #[test]
    fn test_propagation_alone_solves_easy_puzzle() {
        let mut grid: Grid = EASY.parse().unwrap();
        let (outcome, guesses) = solve(&mut grid);

        assert_eq!(outcome, Outcome::Solved);
        assert_eq!(guesses, 0, "easy puzzle must not need guessing");
        assert_eq!(grid, EASY_SOLUTION.parse().unwrap());
    }

    #[test]
    fn test_sparse_puzzle_requires_guessing() {
        // Only the first row given: propagation stalls immediately, but a
        // completion always exists.
        let mut grid: Grid = "
            123 456 789
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();

        let (outcome, guesses) = solve(&mut grid);
        assert_eq!(outcome, Outcome::Solved);
        assert!(guesses > 0, "sparse grid should need at least one guess");
        assert!(validate::is_valid_solution(&grid));
    }

    #[test]
    fn test_hard_puzzle_requires_guessing() {
        let mut grid: Grid = HARD.parse().unwrap();
        let (outcome, guesses) = solve(&mut grid);

        assert_eq!(outcome, Outcome::Solved);
        assert!(guesses > 0);
        assert!(validate::is_valid_solution(&grid));
    }

    #[test]
    fn test_contradictory_givens_are_unsolvable() {
        // The easy puzzle with an extra given planting two 1s in row 1.
        let mut grid: Grid = "
            53_ _7_ ___
            6__ 195 __1
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();

        let original = grid.clone();
        let (outcome, _) = solve(&mut grid);

        assert_eq!(outcome, Outcome::Unsolvable);
        // Rollback restored the exact pre-solve state, candidates and all.
        assert_eq!(grid, original);
    }

    #[test]
    fn test_already_solved_grid_returns_immediately() {
        let mut grid: Grid = EASY_SOLUTION.parse().unwrap();
        let original = grid.clone();
        let (outcome, guesses) = solve(&mut grid);

        assert_eq!(outcome, Outcome::Solved);
        assert_eq!(guesses, 0);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_solver_counter_accumulates_across_calls() {
        let mut solver = Solver::new();

        let mut first: Grid = HARD.parse().unwrap();
        assert_eq!(solver.solve(&mut first), Outcome::Solved);
        let after_first = solver.guesses();
        assert!(after_first > 0);

        let mut second: Grid = EASY.parse().unwrap();
        assert_eq!(solver.solve(&mut second), Outcome::Solved);
        assert_eq!(solver.guesses(), after_first);
    }

    #[test]
    fn test_outcome_is_variant_helpers() {
        assert!(Outcome::Solved.is_solved());
        assert!(Outcome::Unsolvable.is_unsolvable());
    }
}
