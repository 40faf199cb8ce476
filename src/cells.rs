use std::iter::FusedIterator;

use tracing::*;

use crate::grid::{coordinate::Coordinate, Grid};

/// Lazily looks up each coordinate of a sequence in a [`Grid`].
///
/// Yields `None` for unset cells. The iterator borrows the grid and owns its
/// coordinate source, so it may be dropped half-way through at no cost.
///
/// # Example
/// ```
/// use sparsegrid::{Cells, Coordinate, Grid};
///
/// let mut grid = Grid::new(2, 2);
/// grid.set((1, 1), "b").unwrap();
///
/// let diagonal = (0..2).map(|i| Coordinate::new(i, i));
/// let values: Vec<_> = Cells::new(&grid, diagonal).collect();
/// assert_eq!(values, vec![None, Some(&"b")]);
/// ```
#[derive(Debug)]
pub struct Cells<'a, T, I> {
    grid: &'a Grid<T>,
    coordinates: I,
}

impl<T, I: Clone> Clone for Cells<'_, T, I> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            coordinates: self.coordinates.clone(),
        }
    }
}

impl<'a, T, I> Cells<'a, T, I>
where
    I: Iterator<Item = Coordinate>,
{
    pub fn new(grid: &'a Grid<T>, coordinates: I) -> Self {
        Self { grid, coordinates }
    }

    /// Pairs every value with the coordinate it was read from.
    ///
    /// # Example
    /// ```
    /// use sparsegrid::{Coordinate, Grid};
    ///
    /// let mut grid = Grid::new(1, 2);
    /// grid.set((0, 1), 9).unwrap();
    ///
    /// let cells: Vec<_> = grid.row(0).iter().with_coordinates().collect();
    /// assert_eq!(cells, vec![
    ///     (Coordinate::new(0, 0), None),
    ///     (Coordinate::new(0, 1), Some(&9)),
    /// ]);
    /// ```
    pub fn with_coordinates(self) -> impl Iterator<Item = (Coordinate, Option<&'a T>)> {
        let grid = self.grid;
        self.coordinates
            .map(move |coordinate| (coordinate, grid.get(coordinate)))
    }
}

impl<'a, T, I> Iterator for Cells<'a, T, I>
where
    I: Iterator<Item = Coordinate>,
{
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let coordinate = self.coordinates.next()?;
        let value = self.grid.get(coordinate);
        trace!("Yielding cell {} (set: {})", coordinate, value.is_some());
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.coordinates.size_hint()
    }
}

impl<'a, T, I> DoubleEndedIterator for Cells<'a, T, I>
where
    I: DoubleEndedIterator<Item = Coordinate>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let coordinate = self.coordinates.next_back()?;
        Some(self.grid.get(coordinate))
    }
}

impl<T, I> ExactSizeIterator for Cells<'_, T, I> where I: ExactSizeIterator<Item = Coordinate> {}

impl<T, I> FusedIterator for Cells<'_, T, I> where I: FusedIterator<Item = Coordinate> {}
