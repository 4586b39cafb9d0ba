//! Interactive board-size prompt
//!
//! The prompt is the only place a board size enters the program
//! interactively. It is written against [`BufRead`] and [`Write`] rather
//! than the process streams, so the exchange is testable without a
//! terminal.

use std::io::{BufRead, Write};

use crate::io::configuration::{BANNER, SIZE_PROMPT};
use crate::io::error::{Result, SolverError};

/// Interpret one input line as a board size
///
/// The line is trimmed and parsed as a signed integer. Anything that does
/// not parse — empty input, text, trailing garbage after the digits —
/// becomes 0 and therefore behaves exactly like a non-positive size:
/// every strategy answers it with an empty solution set.
pub fn parse_board_size(line: &str) -> i64 {
    line.trim().parse().unwrap_or(0)
}

/// Print the banner, prompt for a board size, and read one line
///
/// Blocks until a full line arrives. End of input yields an empty line,
/// which parses to 0 like any other malformed entry.
///
/// # Errors
///
/// Returns an error when the prompt cannot be written or the input
/// stream fails; malformed input is not an error.
pub fn read_board_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64> {
    writeln!(output, "{BANNER}").map_err(|source| SolverError::Write { source })?;
    write!(output, "{SIZE_PROMPT}").map_err(|source| SolverError::Write { source })?;
    output.flush().map_err(|source| SolverError::Write { source })?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|source| SolverError::Read { source })?;

    Ok(parse_board_size(&line))
}
