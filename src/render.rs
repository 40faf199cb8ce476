//! This module renders grids as bordered text boards.
//!
//! Every cell is drawn as ` value |` between `+---+` dividers; unset cells show
//! a placeholder character. Only the [`GridLike`] read interface is used, so any
//! implementor can be rendered.
//!
//! # Examples
//!
//! ```rust
//! use sparsegrid::{make_grid, render::*};
//!
//! let grid = make_grid!(2 x 2; (0, 0) => 'X', (1, 1) => 'O');
//!
//! let config = RenderConfig {
//!     placeholder: ' ', // Leave unset cells blank
//!     padding: 0,       // No spaces around values
//! };
//! assert_eq!(render(&grid, &config), "+-+-+\n|X| |\n+-+-+\n| |O|\n+-+-+");
//! ```

use std::fmt;

use tracing::*;

use crate::{Coordinate, Grid, GridLike, DEFAULT_PADDING, DEFAULT_PLACEHOLDER};

/// Configuration for rendering boards.
///
/// # Examples
///
/// ```
/// use sparsegrid::render::RenderConfig;
///
/// let config = RenderConfig::default();
/// assert_eq!(config.placeholder, '-');
/// assert_eq!(config.padding, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Character drawn for unset cells (default: `-`)
    pub placeholder: char,
    /// Spaces on each side of a value (default: 1)
    pub padding: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
            padding: DEFAULT_PADDING,
        }
    }
}

/// Renders `grid` as a bordered board.
///
/// The board has one divider line above the first row and one below every row.
/// A grid with no columns renders as bare `+` / `|` borders.
pub fn render<G>(grid: &G, config: &RenderConfig) -> String
where
    G: GridLike,
    G::Item: fmt::Display,
{
    let (rows, cols) = (grid.row_count(), grid.column_count());
    debug!("Rendering {}x{} board", rows, cols);

    let pad = " ".repeat(config.padding);
    let segment = "-".repeat(config.padding * 2 + 1);
    let divider = format!("+{}", format!("{segment}+").repeat(cols));

    let mut lines = Vec::with_capacity(rows * 2 + 1);
    lines.push(divider.clone());
    for row in 0..rows {
        let mut line = String::from("|");
        for col in 0..cols {
            let value = match grid.cell(Coordinate::new(row, col)) {
                Some(value) => value.to_string(),
                None => config.placeholder.to_string(),
            };
            line.push_str(&pad);
            line.push_str(&value);
            line.push_str(&pad);
            line.push('|');
        }
        lines.push(line);
        lines.push(divider.clone());
    }
    lines.join("\n")
}

impl<T: fmt::Display> Grid<T> {
    /// Renders the grid with a custom [`RenderConfig`].
    pub fn render_with(&self, config: &RenderConfig) -> String {
        render(self, config)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &RenderConfig::default()))
    }
}
