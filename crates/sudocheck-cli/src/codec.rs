//! The comma-separated board format read and written by the CLI.
//!
//! A board is 9 lines of 9 comma-separated tokens; each token is a digit
//! 1-9 or blank (an unknown cell). Some writers terminate every cell with
//! a comma, so one trailing comma per line is accepted on input. Output
//! appends a blank line and a `Guesses: <N>` trailer.

use std::fmt::Write as _;

use sudocheck_core::{Grid, MalformedInputError, Position};

/// Decodes board text into a grid.
///
/// Blank lines are ignored; everything else must follow the format above.
///
/// # Errors
///
/// Returns [`MalformedInputError`] when the text does not decode into a
/// well-formed 9x9 board of digits and blanks.
pub fn decode_board(text: &str) -> Result<Grid, MalformedInputError> {
    // Reading stops after nine rows, so anything past them (e.g. a
    // previous run's `Guesses:` trailer) is ignored.
    let rows = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(9)
        .enumerate()
        .map(|(y, line)| {
            let mut tokens: Vec<&str> = line.split(',').collect();
            if tokens.len() == 10 && tokens.last().is_some_and(|last| last.trim().is_empty()) {
                tokens.pop();
            }
            tokens
                .into_iter()
                .enumerate()
                .map(|(x, token)| parse_token(y, x, token))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Grid::from_rows(rows)
}

fn parse_token(row: usize, col: usize, token: &str) -> Result<Option<u8>, MalformedInputError> {
    let token = token.trim();
    match token.as_bytes() {
        [] => Ok(None),
        [digit @ b'1'..=b'9'] => Ok(Some(digit - b'0')),
        _ => Err(MalformedInputError::Token {
            row,
            col,
            token: token.to_owned(),
        }),
    }
}

/// Encodes a grid in the comma format, followed by the guess-count
/// trailer.
#[must_use]
pub fn encode_board(grid: &Grid, guesses: u64) -> String {
    let mut out = String::new();
    for y in 0..9 {
        let row: Vec<String> = (0..9)
            .map(|x| match grid[Position::new(x, y)].value() {
                Some(digit) => digit.to_string(),
                None => String::new(),
            })
            .collect();
        out.push_str(&row.join(", "));
        out.push('\n');
    }
    let _ = write!(out, "\nGuesses: {guesses}\n");
    out
}

#[cfg(test)]
mod tests {
    use sudocheck_core::Digit;

    use super::*;

    const BOARD: &str = "\
5, 3, , , 7, , , , \n\
6, , , 1, 9, 5, , , \n\
, 9, 8, , , , , 6, \n\
8, , , , 6, , , , 3\n\
4, , , 8, , 3, , , 1\n\
7, , , , 2, , , , 6\n\
, 6, , , , , 2, 8, \n\
, , , 4, 1, 9, , , 5\n\
, , , , 8, , , 7, 9\n";

    #[test]
    fn test_decode_board() {
        let grid = decode_board(BOARD).unwrap();
        assert_eq!(grid[Position::new(0, 0)].value(), Some(Digit::D5));
        assert_eq!(grid[Position::new(2, 0)].value(), None);
        assert_eq!(grid[Position::new(8, 8)].value(), Some(Digit::D9));
    }

    #[test]
    fn test_decode_accepts_trailing_commas() {
        let line = "1, 2, 3, 4, 5, 6, 7, 8, 9, \n";
        let text = line.repeat(9);
        let grid = decode_board(&text).unwrap();
        assert_eq!(grid[Position::new(8, 0)].value(), Some(Digit::D9));
    }

    #[test]
    fn test_decode_rejects_short_row() {
        let mut text = String::from("1, 2, 3, 4, 5, 6, 7, 8\n");
        text.push_str(&"1, 2, 3, 4, 5, 6, 7, 8, 9\n".repeat(8));
        assert_eq!(
            decode_board(&text),
            Err(MalformedInputError::RowLength { row: 0, cells: 8 })
        );
    }

    #[test]
    fn test_decode_rejects_missing_rows() {
        let text = "1, 2, 3, 4, 5, 6, 7, 8, 9\n".repeat(8);
        assert_eq!(
            decode_board(&text),
            Err(MalformedInputError::RowCount { rows: 8 })
        );
    }

    #[test]
    fn test_decode_rejects_bad_token() {
        let mut text = String::from("1, 2, 3, 4, 5, 6, 7, 8, 12\n");
        text.push_str(&"1, 2, 3, 4, 5, 6, 7, 8, 9\n".repeat(8));
        assert_eq!(
            decode_board(&text),
            Err(MalformedInputError::Token {
                row: 0,
                col: 8,
                token: "12".to_owned()
            })
        );
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let grid = decode_board(BOARD).unwrap();
        let encoded = encode_board(&grid, 3);
        assert!(encoded.ends_with("\nGuesses: 3\n"));
        assert_eq!(decode_board(&encoded).unwrap(), grid);
    }
}
