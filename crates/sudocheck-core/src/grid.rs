//! The 9x9 board and its input decoding.

use std::{fmt, ops::Index, str::FromStr};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet, position::Position};

/// Error decoding external input into a well-formed 9x9 grid.
///
/// Raised during grid construction only; a well-formed grid that merely has
/// no solution is not an error (see the solver's `Outcome`).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MalformedInputError {
    /// The input did not contain exactly 9 rows.
    #[display("expected 9 rows, found {rows}")]
    RowCount {
        /// Number of rows found.
        rows: usize,
    },
    /// A row did not contain exactly 9 cells.
    #[display("row {row} has {cells} cells, expected 9")]
    RowLength {
        /// Index of the offending row (0-8).
        row: usize,
        /// Number of cells found in that row.
        cells: usize,
    },
    /// A cell value was outside the range 1-9.
    #[display("invalid digit {value} at row {row}, column {col}")]
    DigitRange {
        /// Row of the offending cell (0-8).
        row: usize,
        /// Column of the offending cell (0-8).
        col: usize,
        /// The out-of-range value.
        value: u8,
    },
    /// A grid literal contained a character that is not a digit, an empty
    /// marker, or whitespace.
    #[display("unexpected character {character:?} in grid text")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// A grid literal did not contain exactly 81 cells.
    #[display("expected 81 cells, found {cells}")]
    CellCount {
        /// Number of cells found.
        cells: usize,
    },
    /// A token was neither a single digit 1-9 nor blank.
    #[display("invalid token {token:?} at row {row}, column {col}")]
    Token {
        /// Row of the offending token (0-8).
        row: usize,
        /// Column of the offending token (0-8).
        col: usize,
        /// The token text.
        token: String,
    },
}

/// The 9x9 board, sole owner of all 81 cells.
///
/// A grid is created once from external input, mutated during solving
/// through [`place`](Self::place) and
/// [`remove_candidate`](Self::remove_candidate), and read out at the end.
/// `Clone` produces a deep, independent snapshot that shares no state with
/// the original, which is what the solver's rollback relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
}

impl Grid {
    /// Builds a grid from 9 rows of 9 optional digit values.
    ///
    /// Known cells start with an empty candidate set; empty cells start
    /// with all nine digits as candidates. All later candidate narrowing is
    /// monotonic.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInputError`] unless the input is exactly 9 rows
    /// of exactly 9 cells, each `None` or `Some(1..=9)`.
    pub fn from_rows<R, C>(rows: R) -> Result<Self, MalformedInputError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = Option<u8>>,
    {
        let mut cells = [Cell::empty(); 81];
        let mut row_count = 0;
        for (y, row) in rows.into_iter().enumerate() {
            row_count += 1;
            let mut cell_count = 0;
            for (x, value) in row.into_iter().enumerate() {
                cell_count += 1;
                if y >= 9 || x >= 9 {
                    continue;
                }
                if let Some(value) = value {
                    if !(1..=9).contains(&value) {
                        return Err(MalformedInputError::DigitRange {
                            row: y,
                            col: x,
                            value,
                        });
                    }
                    cells[y * 9 + x] = Cell::given(Digit::from_value(value));
                }
            }
            if cell_count != 9 {
                return Err(MalformedInputError::RowLength {
                    row: y,
                    cells: cell_count,
                });
            }
        }
        if row_count != 9 {
            return Err(MalformedInputError::RowCount { rows: row_count });
        }
        Ok(Self { cells })
    }

    /// Returns the cell at a position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }

    /// Places a digit at a position, clearing the cell's candidates.
    ///
    /// This is the raw placement; it does not touch any other cell. The
    /// solver's `assign` wraps it with the incremental peer updates.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()].place(digit);
    }

    /// Removes a candidate digit at a position, returning `true` if the
    /// candidate was present.
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.cells[pos.index()].remove_candidate(digit)
    }

    /// Returns `true` if every cell has a placed value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_filled())
    }

    /// Returns the set of digits already placed in the cells at
    /// `positions`.
    #[must_use]
    pub fn placed_digits(&self, positions: &[Position]) -> DigitSet {
        positions
            .iter()
            .filter_map(|pos| self.cell(*pos).value())
            .collect()
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        self.cell(pos)
    }
}

impl FromStr for Grid {
    type Err = MalformedInputError;

    /// Parses a compact grid literal: digits 1-9 for known cells, `_`,
    /// `.`, or `0` for empty cells, all whitespace ignored.
    fn from_str(s: &str) -> Result<Self, MalformedInputError> {
        let mut values = Vec::with_capacity(81);
        for character in s.chars() {
            match character {
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = (u32::from(character) - u32::from('0')) as u8;
                    values.push(Some(value));
                }
                '_' | '.' | '0' => values.push(None),
                c if c.is_whitespace() => {}
                c => return Err(MalformedInputError::UnexpectedCharacter { character: c }),
            }
        }
        if values.len() != 81 {
            return Err(MalformedInputError::CellCount {
                cells: values.len(),
            });
        }
        Self::from_rows(values.chunks(9).map(|row| row.iter().copied()))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                if x > 0 && x % 3 == 0 {
                    f.write_str(" ")?;
                }
                match self.cell(Position::new(x, y)).value() {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str("_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
