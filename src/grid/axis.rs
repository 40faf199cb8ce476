use super::*;

/// A trait describing one axis of a grid, letting row and column views share one implementation.
///
/// A view holds a *fixed* index on one axis and walks the other one. The
/// implementing marker types map a `(fixed, index)` pair to a grid
/// [`Coordinate`] and report how long the walked axis is.
///
/// # Examples
///
/// ```
/// use sparsegrid::{Axis, ColumnAxis, Coordinate, RowAxis};
///
/// // Row 2, column 5
/// assert_eq!(RowAxis::coordinate(2, 5), Coordinate::new(2, 5));
/// // Column 2, row 5
/// assert_eq!(ColumnAxis::coordinate(2, 5), Coordinate::new(5, 2));
///
/// // A row of a 3x4 grid walks the 4 columns
/// assert_eq!(RowAxis::length(3, 4), 4);
/// assert_eq!(ColumnAxis::length(3, 4), 3);
/// ```
pub trait Axis {
    /// Short name used in log output.
    const NAME: &'static str;

    /// Maps the view's fixed index and a position along the view to a grid coordinate.
    fn coordinate(fixed: usize, index: usize) -> Coordinate;

    /// Number of positions along the view for a grid of `rows` x `cols`.
    fn length(rows: usize, cols: usize) -> usize;
}

/// Marker for views over a single row. Positions are column indices.
#[derive(Debug)]
pub enum RowAxis {}

/// Marker for views over a single column. Positions are row indices.
#[derive(Debug)]
pub enum ColumnAxis {}

impl Axis for RowAxis {
    const NAME: &'static str = "row";

    fn coordinate(fixed: usize, index: usize) -> Coordinate {
        Coordinate::new(fixed, index)
    }

    fn length(_rows: usize, cols: usize) -> usize {
        cols
    }
}

impl Axis for ColumnAxis {
    const NAME: &'static str = "column";

    fn coordinate(fixed: usize, index: usize) -> Coordinate {
        Coordinate::new(index, fixed)
    }

    fn length(rows: usize, _cols: usize) -> usize {
        rows
    }
}
