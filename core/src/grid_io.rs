//! Weight grid I/O

use crate::pbrt::*;
use crate::sampling::*;
use std::fs;
use std::result::Result;

/// Stores a row-major grid of sampling weights.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    /// The weights, `width * height` of them.
    pub weights: Vec<Float>,

    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,
}

impl Grid {
    /// Builds the sampling distribution for the grid.
    pub fn into_distribution(self) -> Result<Distribution2D, String> {
        Distribution2D::new(self.weights, self.width, self.height).map_err(|e| e.to_string())
    }
}

/// Read a weight grid from a text file.
///
/// * `path` - Input file path.
pub fn read_grid(path: &str) -> Result<Grid, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("read_grid(): Error reading grid file '{path}': {e}"))?;
    let grid = parse_grid(&text).map_err(|e| format!("{path}: {e}"))?;

    info!("Read weight grid {path} ({} x {})", grid.width, grid.height);

    Ok(grid)
}

/// Parse a weight grid. Each non-blank line is one row of whitespace
/// separated weights; everything after a `#` is ignored.
///
/// * `text` - The grid text.
pub fn parse_grid(text: &str) -> Result<Grid, String> {
    let mut weights = Vec::new();
    let mut width = 0;
    let mut height = 0;

    for (n, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|w| {
                w.parse::<Float>()
                    .map_err(|e| format!("line {}: Error parsing weight '{w}': {e}", n + 1))
            })
            .collect::<Result<Vec<Float>, String>>()?;

        if height == 0 {
            width = row.len();
        } else if row.len() != width {
            return Err(format!(
                "line {}: Expected {width} weights but found {}",
                n + 1,
                row.len()
            ));
        }

        weights.extend(row);
        height += 1;
    }

    if height == 0 {
        return Err(String::from("Grid contains no weights"));
    }

    Ok(Grid { weights, width, height })
}
