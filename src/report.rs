//! Text report of a finished exploration
//!
//! The output has two parts. The first is a character dump of the grid: one
//! slice per alpha bin, one line per beta bin, one character per gamma bin,
//! each slice followed by a rule of underscores. The second is the population
//! statistics. Labels and layout are fixed so reports can be diffed against
//! earlier runs.

use std::io::{self, Write};

use tetraview_core::{CellCounts, CellState, Exploration, StateGrid};

/// Glyph for each combined cell state 0..=3
///
/// - `.` unallowable, empty
/// - `x` unallowable, reached
/// - ` ` allowable, empty
/// - `o` allowable, reached
pub const GLYPHS: [char; 4] = ['.', 'x', ' ', 'o'];

/// Glyph for one cell
#[inline]
pub fn glyph(state: CellState) -> char {
    GLYPHS[(state.value() & 0b11) as usize]
}

/// Write the grid as N slices of N lines of N glyphs
pub fn write_slices<W: Write>(out: &mut W, grid: &StateGrid) -> io::Result<()> {
    let n = grid.resolution();
    let rule = "_".repeat(n);
    let mut line = String::with_capacity(n);

    write!(out, "\n\n\n")?;

    for i in 0..n {
        for j in 0..n {
            line.clear();
            line.extend(grid.row(i, j).iter().map(|&c| glyph(c)));
            writeln!(out, "{}", line)?;
        }
        write!(out, "\n{}\n\n", rule)?;
    }

    writeln!(out)
}

/// Write the population counts and the rejection count
pub fn write_statistics<W: Write>(out: &mut W, counts: &CellCounts, rejected: u64) -> io::Result<()> {
    writeln!(out, "Number of   occupied   allowable cells:    {}", counts.occupied_allowable)?;
    writeln!(out, "Number of unoccupied   allowable cells:    {}", counts.unoccupied_allowable)?;
    writeln!(out, "Number of   occupied unallowable cells:    {}", counts.occupied_unallowable)?;
    writeln!(out, "Number of unoccupied unallowable cells:    {}", counts.unoccupied_unallowable)?;
    writeln!(out, "Total number of cells in the array:        {}", counts.total)?;
    writeln!(out, "Number of rejected calls for a data point: {}", rejected)?;
    write!(
        out,
        "(Note: near the boundary, an \"unallowable\" cell might actually have an allowable portion.)\n\n"
    )
}

/// Write the full report for a finished exploration
pub fn write_report<W: Write>(out: &mut W, exploration: &Exploration) -> io::Result<()> {
    let summary = exploration.summary();
    write_slices(out, exploration.grid())?;
    write_statistics(out, &summary.counts, summary.rejected)
}
