//! Text rendering of completed boards

use ndarray::Array2;

use crate::board::Assignment;
use crate::io::configuration::{CELL_SEGMENT, QUEEN_GLYPH};

/// Render an assignment as a bordered text grid
///
/// Each rank is preceded by a separator line of `size` cell segments and
/// rendered as `|`-delimited cells with the queen glyph at the assigned
/// file and blanks elsewhere; a final separator line closes the grid.
/// Placements outside the grid are ignored rather than rendered.
pub fn render(assignment: &Assignment, size: usize) -> String {
    let mut occupancy = Array2::from_elem((size, size), false);
    for placement in assignment.placements() {
        if let Some(square) = occupancy.get_mut((placement.row, placement.col)) {
            *square = true;
        }
    }

    let separator = CELL_SEGMENT.repeat(size);
    let mut grid = String::new();
    for rank in occupancy.outer_iter() {
        grid.push_str(&separator);
        grid.push('\n');
        for &occupied in rank.iter() {
            grid.push_str("| ");
            grid.push(if occupied { QUEEN_GLYPH } else { ' ' });
            grid.push(' ');
        }
        grid.push_str("|\n");
    }
    grid.push_str(&separator);
    grid.push('\n');

    grid
}
