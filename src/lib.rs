//! This crate provides a sparse two-dimensional grid with fixed logical dimensions.
//! Only explicitly assigned cells consume storage, and rows and columns can be
//! read, written and iterated through lightweight views.
//!
//! # Example
//! ```
//! use sparsegrid::Grid;
//!
//! let mut grid = Grid::new(3, 3);
//! grid.set((0, 0), "X").unwrap();
//! grid.set((1, 1), "O").unwrap();
//!
//! assert_eq!(grid.row(1).get(1), Some(&"O"));
//! assert_eq!(grid.col(0).get(0), Some(&"X"));
//! assert_eq!(grid.col(0).get(1), None);
//! ```

/// The sparse grid container, its coordinates, configuration and axis views.
pub mod grid;
/// Lazy iteration over grid cells.
pub mod cells;
/// The read interface shared by anything that can be rendered as a board.
pub mod grid_like;
/// Textual rendering of grids as bordered boards.
///
/// # Example
/// ```
/// use sparsegrid::{Grid, render::RenderConfig};
///
/// let mut grid = Grid::new(1, 2);
/// grid.set((0, 1), 7).unwrap();
///
/// assert_eq!(grid.to_string(), "+---+---+\n| - | 7 |\n+---+---+");
///
/// let config = RenderConfig { placeholder: '.', ..RenderConfig::default() };
/// assert_eq!(grid.render_with(&config), "+---+---+\n| . | 7 |\n+---+---+");
/// ```
pub mod render;

pub use cells::Cells;
pub use grid::{
    axis::{Axis, ColumnAxis, RowAxis},
    config::{BoundsPolicy, GridConfig},
    coordinate::Coordinate,
    view::{ColumnView, ColumnViewMut, Positions, RowView, RowViewMut, View, ViewMut},
    Grid,
};
pub use grid_like::GridLike;

use smallvec::SmallVec;
use thiserror::Error;

// A full 9x9 board line fits on the stack
const DEFAULT_SMALLVEC_SIZE: usize = 16;
const DEFAULT_PLACEHOLDER: char = '-';
const DEFAULT_PADDING: usize = 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid keys must be a (row, col) pair of integers: {0}")]
    InvalidKey(String),

    #[error("No value stored at row={row}, col={col}")]
    KeyNotFound { row: usize, col: usize },

    #[error("Coordinate row={row}, col={col} is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// A type alias for SmallVec with an optimized stack-allocated buffer size.
pub type SmallVecLine<T> = SmallVec<[T; DEFAULT_SMALLVEC_SIZE]>;

/// Creates a [`Grid`] with the given dimensions and initial cells.
///
/// # Syntax
///
/// ```rust
/// use sparsegrid::make_grid;
///
/// let empty: sparsegrid::Grid<u8> = make_grid!(2 x 2);
/// let grid = make_grid!(3 x 3; (0, 0) => "X", (1, 1) => "O");
/// ```
///
/// Cells are written through [`Grid::set`] with the default permissive bounds
/// policy, so the macro never fails.
///
/// # Examples
///
/// ```rust
/// use sparsegrid::make_grid;
///
/// let grid = make_grid!(2 x 3; (0, 2) => 'a', (1, 0) => 'b');
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.len(), 2);
/// assert_eq!(grid.get((0, 2)), Some(&'a'));
/// ```
#[macro_export]
macro_rules! make_grid {
    ($rows:tt x $cols:tt) => {
        $crate::Grid::new($rows, $cols)
    };
    ($rows:tt x $cols:tt; $(($row:expr, $col:expr) => $value:expr),+ $(,)?) => {{
        let mut grid = $crate::Grid::new($rows, $cols);
        $(
            // Permissive grids accept every coordinate
            $crate::Grid::set(&mut grid, ($row, $col), $value).ok();
        )+
        grid
    }};
}
