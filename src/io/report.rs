//! Text output for the grid banner and the final solution list

use std::io::Write;

use crate::algorithm::search::Solution;
use crate::io::error::Result;
use crate::spatial::grid::LetterGrid;

/// Print the starting grid framed by a banner, followed by the solving notice
///
/// # Errors
///
/// Returns [`crate::SolverError::Console`] if writing fails
pub fn write_grid_banner(out: &mut impl Write, grid: &LetterGrid) -> Result<()> {
    writeln!(out, "*****************")?;
    writeln!(out, "*  The Grid     *")?;
    writeln!(out, "-----------------")?;
    writeln!(out, "{grid}")?;
    writeln!(out, "*****************")?;
    writeln!(out, "Solving ....")?;
    writeln!(out)?;
    Ok(())
}

/// Print solutions one per line, or a notice when there are none
///
/// Solutions are printed in the order given; pass the output of
/// [`crate::algorithm::solver::distinct_sorted`] for the canonical listing.
///
/// # Errors
///
/// Returns [`crate::SolverError::Console`] if writing fails
pub fn write_solutions(out: &mut impl Write, solutions: &[Solution]) -> Result<()> {
    if solutions.is_empty() {
        writeln!(out, "No Solutions Found")?;
        return Ok(());
    }

    writeln!(out, "Found Solutions (in order) : ")?;
    for solution in solutions {
        writeln!(out, "{solution}")?;
    }
    Ok(())
}
