//! Outcome grid for every pair of moves.

use super::MoveSet;
use crate::protocol::Outcome;
use std::fmt;

const CORNER: &str = "Moves";

/// Outcome of each row move against each column move, from the row's side.
///
/// Every cell comes from [`MoveSet::judge`], so the table always agrees with
/// how rounds are resolved.
#[derive(Clone, Debug)]
pub struct HelpTable<'a> {
    moves: &'a MoveSet,
    cells: Vec<Vec<Outcome>>,
}

impl<'a> HelpTable<'a> {
    /// Build the full `n x n` grid for a move set
    pub fn new(moves: &'a MoveSet) -> Self {
        let cells = moves
            .iter()
            .map(|(row, _)| moves.iter().map(|(col, _)| moves.judge(row, col)).collect())
            .collect();
        Self { moves, cells }
    }

    /// The move set the table was built from
    pub fn moves(&self) -> &'a MoveSet {
        self.moves
    }

    /// Outcome for the move in `row` played against the move in `col`
    pub fn cell(&self, row: usize, col: usize) -> Outcome {
        self.cells[row][col]
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = Vec::with_capacity(self.moves.len() + 1);
        widths.push(
            self.moves
                .iter()
                .map(|(_, name)| name.chars().count())
                .chain(std::iter::once(CORNER.len()))
                .max()
                .unwrap_or(CORNER.len()),
        );
        for (col, name) in self.moves.iter() {
            let widest_cell = self
                .cells
                .iter()
                .map(|row| row[col.get()].as_str().len())
                .max()
                .unwrap_or(0);
            widths.push(widest_cell.max(name.chars().count()));
        }
        widths
    }
}

fn write_row<'c>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = &'c str>,
) -> fmt::Result {
    write!(f, "|")?;
    for (cell, width) in cells.zip(widths) {
        write!(f, " {:<width$} |", cell, width = *width)?;
    }
    writeln!(f)
}

fn write_separator(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    write!(f, "+")?;
    for width in widths {
        write!(f, "{}+", "-".repeat(width + 2))?;
    }
    writeln!(f)
}

impl fmt::Display for HelpTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        write_separator(f, &widths)?;
        write_row(
            f,
            &widths,
            std::iter::once(CORNER).chain(self.moves.iter().map(|(_, name)| name)),
        )?;
        write_separator(f, &widths)?;

        for ((_, name), row) in self.moves.iter().zip(&self.cells) {
            write_row(
                f,
                &widths,
                std::iter::once(name).chain(row.iter().map(|o| o.as_str())),
            )?;
            write_separator(f, &widths)?;
        }
        Ok(())
    }
}
