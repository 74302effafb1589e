//! ASCII grid maps.
//!
//! ```text
//! S.#
//! ..#
//! #.E
//! ```
//! `S` start, `E` end, `#` obstacle, `.` empty. Rendering marks path cells
//! with `*`.

use super::{build_grid, Cell, Grid};
use crate::bail_malformed;
use crate::error::Result;

/// A grid plus the endpoints marked on the map
#[derive(Debug, Clone)]
pub struct ParsedMap {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
}

/// Parse an ASCII map. Rows must have equal width; exactly one `S` and one `E`.
pub fn parse_map(text: &str) -> Result<ParsedMap> {
    let lines: Vec<&str> = text
        .lines()
        .map(|l| l.trim_end_matches('\r').trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        bail_malformed!("map", "no rows");
    }

    let cols = lines[0].chars().count();
    let mut obstacles = Vec::new();
    let mut start = None;
    let mut goal = None;

    for (row, line) in lines.iter().enumerate() {
        if line.chars().count() != cols {
            bail_malformed!(
                "map",
                format!("row {} has width {}, expected {}", row, line.chars().count(), cols)
            );
        }
        for (col, ch) in line.chars().enumerate() {
            let cell = Cell::new(row, col);
            match ch {
                '.' => {}
                '#' => obstacles.push(cell),
                'S' => {
                    if start.replace(cell).is_some() {
                        bail_malformed!("map", "more than one start 'S'");
                    }
                }
                'E' => {
                    if goal.replace(cell).is_some() {
                        bail_malformed!("map", "more than one end 'E'");
                    }
                }
                other => bail_malformed!(
                    "map",
                    format!("unexpected character '{}' at {}", other, cell)
                ),
            }
        }
    }

    let Some(start) = start else {
        bail_malformed!("map", "missing start 'S'");
    };
    let Some(goal) = goal else {
        bail_malformed!("map", "missing end 'E'");
    };

    let grid = build_grid((lines.len(), cols), obstacles)?;
    Ok(ParsedMap { grid, start, goal })
}

/// Render the grid with endpoints and the given path overlaid
pub fn render_map(grid: &Grid, start: Cell, goal: Cell, path: &[Cell]) -> String {
    let on_path: std::collections::HashSet<&Cell> = path.iter().collect();
    let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = Cell::new(row, col);
            let ch = if cell == start {
                'S'
            } else if cell == goal {
                'E'
            } else if grid.is_obstacle(&cell) {
                '#'
            } else if on_path.contains(&cell) {
                '*'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }

    out
}
