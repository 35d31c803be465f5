//! sudocheck command line interface.
//!
//! Reads a puzzle from a file, solves it, and writes the solution plus the
//! number of guesses required to a file or stdout.

use std::{
    fs,
    io::{self, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::info;
use sudocheck_core::MalformedInputError;
use sudocheck_solver::solve;

mod codec;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file to solve.
    infile: PathBuf,
    /// Where to write the solution; stdout when omitted.
    outfile: Option<PathBuf>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Io(#[from] io::Error),
    #[display(
        "improper input formatting: {_0}\n\
         each cell is a digit 1-9 if filled, or a space if empty, followed by a comma"
    )]
    MalformedInput(#[from] MalformedInputError),
    #[display("could not compute a solution")]
    Unsolvable,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.infile)?;
    let mut grid = codec::decode_board(&text)?;

    let (outcome, guesses) = solve(&mut grid);
    if outcome.is_unsolvable() {
        return Err(CliError::Unsolvable);
    }
    info!("solved with {guesses} guesses");

    let output = codec::encode_board(&grid, guesses);
    match &args.outfile {
        Some(path) => fs::write(path, output)?,
        None => io::stdout().write_all(output.as_bytes())?,
    }
    Ok(())
}
