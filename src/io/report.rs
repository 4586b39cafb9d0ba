//! Per-strategy report formatting

use std::io::Write;

use crate::io::error::{Result, SolverError};
use crate::io::render::render;
use crate::search::{SolutionSet, Strategy};

/// Write one strategy's section of the run report
///
/// Always writes the solution count; when at least one solution exists,
/// the first one is rendered below it. A recorded solution carries one
/// placement per rank, so its length is the board size the renderer
/// needs.
///
/// # Errors
///
/// Returns an error when the output stream rejects a write.
pub fn write_strategy_report<W: Write>(
    output: &mut W,
    strategy: Strategy,
    solutions: &SolutionSet,
) -> Result<()> {
    let label = strategy.label();
    writeln!(output, "Total {label} solutions: {}", solutions.len())
        .map_err(|source| SolverError::Write { source })?;

    if let Some(first) = solutions.first() {
        writeln!(output, "First {label} solution:")
            .map_err(|source| SolverError::Write { source })?;
        output
            .write_all(render(first, first.len()).as_bytes())
            .map_err(|source| SolverError::Write { source })?;
    }

    Ok(())
}
