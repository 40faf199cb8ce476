use std::{iter::FusedIterator, marker::PhantomData, ops::Range};

use tracing::trace;

use super::{axis::Axis, *};
use crate::SmallVecLine;

/// A read-only view over one row of a [`Grid`].
pub type RowView<'a, T> = View<'a, T, RowAxis>;
/// A read-only view over one column of a [`Grid`].
pub type ColumnView<'a, T> = View<'a, T, ColumnAxis>;
/// A writable view over one row of a [`Grid`].
pub type RowViewMut<'a, T> = ViewMut<'a, T, RowAxis>;
/// A writable view over one column of a [`Grid`].
pub type ColumnViewMut<'a, T> = ViewMut<'a, T, ColumnAxis>;

/// A projection of a [`Grid`] onto one row or column.
///
/// The view stores nothing but a borrow of the grid and the fixed index; every
/// read is translated into a grid coordinate. Positions are not checked against
/// the grid bounds.
///
/// # Example
/// ```
/// use sparsegrid::Grid;
///
/// let mut grid = Grid::new(3, 4);
/// grid.set((1, 2), 'x').unwrap();
///
/// let row = grid.row(1);
/// assert_eq!(row.len(), 4);
/// assert_eq!(row.get(2), Some(&'x'));
/// assert_eq!(row.iter().collect::<Vec<_>>(), vec![None, None, Some(&'x'), None]);
/// assert_eq!(row.iter_range(1, Some(3)).collect::<Vec<_>>(), vec![None, Some(&'x')]);
/// ```
#[derive(Debug)]
pub struct View<'a, T, A> {
    grid: &'a Grid<T>,
    index: usize,
    axis: PhantomData<fn() -> A>,
}

impl<T, A> Clone for View<'_, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A> Copy for View<'_, T, A> {}

impl<'a, T, A: Axis> View<'a, T, A> {
    pub(crate) fn new(grid: &'a Grid<T>, index: usize) -> Self {
        trace!("Creating {} view at index {}", A::NAME, index);
        Self {
            grid,
            index,
            axis: PhantomData,
        }
    }

    /// The fixed row or column index of this view.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of positions along the view: `cols` for a row, `rows` for a column.
    pub fn len(&self) -> usize {
        A::length(self.grid.rows(), self.grid.cols())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at `position` along the view, or `None` if unset.
    pub fn get(&self, position: usize) -> Option<&'a T> {
        self.grid.get(A::coordinate(self.index, position))
    }

    /// Returns the grid coordinates covered by a range of positions.
    ///
    /// With `stop` set, the range is `start..stop`. Without it, the range is the
    /// whole axis `0..len()` and `start` is ignored.
    ///
    /// # Example
    /// ```
    /// use sparsegrid::{Coordinate, Grid};
    ///
    /// let grid: Grid<u8> = Grid::new(3, 3);
    /// let column = grid.col(2);
    ///
    /// let some: Vec<_> = column.indexed_coordinates(1, Some(3)).collect();
    /// assert_eq!(some, vec![Coordinate::new(1, 2), Coordinate::new(2, 2)]);
    ///
    /// // `start` only applies together with `stop`
    /// assert_eq!(column.indexed_coordinates(2, None).count(), 3);
    /// ```
    pub fn indexed_coordinates(&self, start: usize, stop: Option<usize>) -> Positions<A> {
        let range = match stop {
            Some(stop) => start..stop,
            None => 0..self.len(),
        };
        Positions::new(self.index, range)
    }

    /// Lazily yields the values over a range of positions, see [`View::indexed_coordinates`].
    pub fn iter_range(&self, start: usize, stop: Option<usize>) -> Cells<'a, T, Positions<A>> {
        Cells::new(self.grid, self.indexed_coordinates(start, stop))
    }

    /// Lazily yields every value along the view.
    pub fn iter(&self) -> Cells<'a, T, Positions<A>> {
        self.iter_range(0, None)
    }

    /// Collects the whole view into a line of optional values.
    pub fn to_line(&self) -> SmallVecLine<Option<&'a T>> {
        self.iter().collect()
    }
}

impl<'a, T, A: Axis> IntoIterator for View<'a, T, A> {
    type Item = Option<&'a T>;
    type IntoIter = Cells<'a, T, Positions<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Axis> IntoIterator for &View<'a, T, A> {
    type Item = Option<&'a T>;
    type IntoIter = Cells<'a, T, Positions<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A writable projection of a [`Grid`] onto one row or column.
///
/// Writes and deletes pass straight through to the grid with the same rules as
/// [`Grid::set`] and [`Grid::remove`].
#[derive(Debug)]
pub struct ViewMut<'a, T, A> {
    grid: &'a mut Grid<T>,
    index: usize,
    axis: PhantomData<fn() -> A>,
}

impl<'a, T, A: Axis> ViewMut<'a, T, A> {
    pub(crate) fn new(grid: &'a mut Grid<T>, index: usize) -> Self {
        trace!("Creating writable {} view at index {}", A::NAME, index);
        Self {
            grid,
            index,
            axis: PhantomData,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.as_view().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reborrows this view as a read-only one.
    pub fn as_view(&self) -> View<'_, T, A> {
        View::new(self.grid, self.index)
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.grid.get(A::coordinate(self.index, position))
    }

    /// Stores `value` at `position` along the view.
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] only for grids with a strict bounds policy.
    pub fn set(&mut self, position: usize, value: T) -> Result<Option<T>, GridError> {
        self.grid.set(A::coordinate(self.index, position), value)
    }

    /// Removes and returns the value at `position` along the view.
    ///
    /// # Errors
    /// Returns [`GridError::KeyNotFound`] if the cell is unset.
    pub fn remove(&mut self, position: usize) -> Result<T, GridError> {
        self.grid.remove(A::coordinate(self.index, position))
    }

    pub fn indexed_coordinates(&self, start: usize, stop: Option<usize>) -> Positions<A> {
        self.as_view().indexed_coordinates(start, stop)
    }

    pub fn iter_range(&self, start: usize, stop: Option<usize>) -> Cells<'_, T, Positions<A>> {
        self.as_view().iter_range(start, stop)
    }

    pub fn iter(&self) -> Cells<'_, T, Positions<A>> {
        self.as_view().iter()
    }
}

/// Iterator over the grid coordinates along one view, produced by
/// [`View::indexed_coordinates`].
#[derive(Debug)]
pub struct Positions<A> {
    fixed: usize,
    range: Range<usize>,
    axis: PhantomData<fn() -> A>,
}

impl<A> Clone for Positions<A> {
    fn clone(&self) -> Self {
        Self {
            fixed: self.fixed,
            range: self.range.clone(),
            axis: PhantomData,
        }
    }
}

impl<A: Axis> Positions<A> {
    fn new(fixed: usize, range: Range<usize>) -> Self {
        Self {
            fixed,
            range,
            axis: PhantomData,
        }
    }
}

impl<A: Axis> Iterator for Positions<A> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        self.range
            .next()
            .map(|position| A::coordinate(self.fixed, position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<A: Axis> DoubleEndedIterator for Positions<A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range
            .next_back()
            .map(|position| A::coordinate(self.fixed, position))
    }
}

impl<A: Axis> ExactSizeIterator for Positions<A> {}

impl<A: Axis> FusedIterator for Positions<A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::make_grid;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn numbered(rows: usize, cols: usize) -> Grid<usize> {
        let mut grid = Grid::new(rows, cols);
        for coordinate in grid.coordinates().collect::<Vec<_>>() {
            grid.set(coordinate, coordinate.row * 10 + coordinate.col)
                .unwrap();
        }
        grid
    }

    #[test]
    fn test_row_iteration_uses_column_count() {
        let grid = numbered(2, 4);
        let row: Vec<_> = grid.row(1).iter().map(Option::<&_>::copied).collect();
        assert_eq!(row, vec![Some(10), Some(11), Some(12), Some(13)]);
    }

    #[test]
    fn test_column_iteration_uses_row_count() {
        let grid = numbered(3, 2);
        let column: Vec<_> = grid.col(1).iter().map(Option::<&_>::copied).collect();
        assert_eq!(column, vec![Some(1), Some(11), Some(21)]);
    }

    #[test_case(1, Some(5), vec![1, 2, 3, 4] ; "partial range")]
    #[test_case(0, None, vec![0, 1, 2, 3, 4, 5, 6, 7, 8] ; "full range")]
    #[test_case(3, None, vec![0, 1, 2, 3, 4, 5, 6, 7, 8] ; "start ignored without stop")]
    #[test_case(4, Some(4), vec![] ; "empty range")]
    #[test_case(6, Some(2), vec![] ; "reversed range")]
    #[test_case(7, Some(11), vec![7, 8, 9, 10] ; "past the edge")]
    fn test_row_indexed_coordinates(start: usize, stop: Option<usize>, expected: Vec<usize>) {
        let grid: Grid<u8> = Grid::new(9, 9);
        let columns: Vec<_> = grid
            .row(4)
            .indexed_coordinates(start, stop)
            .map(|coordinate| {
                assert_eq!(coordinate.row, 4);
                coordinate.col
            })
            .collect();
        assert_eq!(columns, expected);
    }

    #[test]
    fn test_column_partial_iteration() {
        let grid = numbered(9, 9);
        let values: Vec<_> = grid.col(0).iter_range(1, Some(5)).map(Option::<&_>::copied).collect();
        assert_eq!(values, vec![Some(10), Some(20), Some(30), Some(40)]);
    }

    #[test]
    fn test_sparse_cells_read_as_none() {
        let grid = make_grid!(1 x 3; (0, 1) => "mid");
        assert_eq!(grid.row(0).to_line().as_slice(), &[None, Some(&"mid"), None]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let grid = numbered(3, 3);
        let view = grid.row(2);
        let mut first = view.iter();
        assert_eq!(first.next(), Some(Some(&20)));
        // An abandoned iterator does not affect a fresh one
        let second: Vec<_> = view.iter().collect();
        assert_eq!(second.len(), 3);
        assert_eq!(first.next(), Some(Some(&21)));
    }

    #[test]
    fn test_view_into_iterator() {
        let grid = numbered(2, 2);
        let mut seen = Vec::new();
        for value in grid.col(1) {
            seen.push(value.copied());
        }
        assert_eq!(seen, vec![Some(1), Some(11)]);
        let view = grid.row(0);
        assert_eq!((&view).into_iter().count(), 2);
    }

    #[test]
    fn test_positions_are_exact_size_and_reversible() {
        let grid: Grid<u8> = Grid::new(5, 5);
        let positions = grid.col(3).indexed_coordinates(1, Some(4));
        assert_eq!(positions.len(), 3);
        let reversed: Vec<_> = positions.rev().map(|c| c.row).collect();
        assert_eq!(reversed, vec![3, 2, 1]);
    }

    #[test]
    fn test_views_do_not_validate_index() {
        let grid = make_grid!(2 x 2; (5, 1) => 'z');
        assert_eq!(grid.row(5).get(1), Some(&'z'));
        assert_eq!(grid.row(9).get(9), None);
        assert_eq!(grid.row(5).index(), 5);
    }

    #[test]
    fn test_write_through_row_view() {
        let mut grid = Grid::new(3, 3);
        {
            let mut row = grid.row_mut(2);
            assert_eq!(row.set(0, 'a'), Ok(None));
            assert_eq!(row.set(0, 'b'), Ok(Some('a')));
            assert_eq!(row.get(0), Some(&'b'));
            assert_eq!(row.len(), 3);
        }
        assert_eq!(grid.get((2, 0)), Some(&'b'));
        assert_eq!(grid.col(0).get(2), Some(&'b'));
    }

    #[test]
    fn test_delete_through_column_view() {
        let mut grid = make_grid!(3 x 3; (1, 2) => 7);
        let mut column = grid.col_mut(2);
        assert_eq!(column.remove(1), Ok(7));
        assert_eq!(
            column.remove(1),
            Err(GridError::KeyNotFound { row: 1, col: 2 })
        );
        assert_eq!(column.iter().flatten().count(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_writable_view_respects_strict_bounds() {
        let mut grid = Grid::with_config(2, 2, GridConfig::strict());
        let mut row = grid.row_mut(0);
        assert_eq!(
            row.set(2, 1),
            Err(GridError::OutOfBounds {
                row: 0,
                col: 2,
                rows: 2,
                cols: 2
            })
        );
        assert_eq!(row.set(1, 1), Ok(None));
        assert_eq!(row.iter_range(0, Some(2)).collect::<Vec<_>>(), vec![None, Some(&1)]);
    }

    #[test]
    fn test_writable_view_indexed_coordinates() {
        let mut grid: Grid<u8> = Grid::new(4, 4);
        let column = grid.col_mut(1);
        let rows: Vec<_> = column.indexed_coordinates(2, None).map(|c| c.row).collect();
        assert_eq!(rows, vec![0, 1, 2, 3]);
        assert_eq!(column.as_view().index(), 1);
    }
}
