use std::collections::BTreeMap;

use tracing::*;

use crate::{cells::Cells, GridError};

pub mod axis;
pub mod config;
pub mod coordinate;
pub mod view;

use axis::{ColumnAxis, RowAxis};
use config::{BoundsPolicy, GridConfig};
use coordinate::Coordinate;
use view::{View, ViewMut};

/// A sparse grid with fixed logical dimensions.
///
/// Only cells that were explicitly assigned take up storage. Reading any other
/// coordinate, including one outside the bounds, yields `None`.
///
/// # Example
/// ```
/// use sparsegrid::{Grid, GridError};
///
/// let mut grid = Grid::new(9, 9);
/// grid.set((4, 4), 5).unwrap();
///
/// assert_eq!(grid.get((4, 4)), Some(&5));
/// assert_eq!(grid.get((0, 0)), None);
/// assert_eq!(grid.remove((0, 0)), Err(GridError::KeyNotFound { row: 0, col: 0 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: BTreeMap<Coordinate, T>,
    config: GridConfig,
}

impl<T> Grid<T> {
    /// Creates an empty grid with `rows` x `cols` logical cells and the default configuration.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_config(rows, cols, GridConfig::default())
    }

    /// Creates an empty grid with a custom configuration.
    ///
    /// # Example
    /// ```
    /// use sparsegrid::{BoundsPolicy, Grid, GridConfig, GridError};
    ///
    /// let mut grid = Grid::with_config(2, 2, GridConfig::new(BoundsPolicy::Strict));
    /// assert!(matches!(grid.set((2, 0), 'x'), Err(GridError::OutOfBounds { .. })));
    /// ```
    pub fn with_config(rows: usize, cols: usize, config: GridConfig) -> Self {
        debug!("Creating {}x{} grid with config: {:?}", rows, cols, config);
        Self {
            rows,
            cols,
            cells: BTreeMap::new(),
            config,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of cells holding a value.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `coordinate` is inside the logical bounds.
    pub fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.rows && coordinate.col < self.cols
    }

    pub fn contains(&self, coordinate: impl Into<Coordinate>) -> bool {
        self.cells.contains_key(&coordinate.into())
    }

    /// Returns the value stored at `coordinate`, or `None` if the cell is unset.
    pub fn get(&self, coordinate: impl Into<Coordinate>) -> Option<&T> {
        let coordinate = coordinate.into();
        trace!("Reading cell {}", coordinate);
        self.cells.get(&coordinate)
    }

    /// Stores `value` at `coordinate`, returning the value previously stored there.
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] if the grid uses [`BoundsPolicy::Strict`]
    /// and the coordinate lies outside it. Permissive grids accept any coordinate.
    pub fn set(
        &mut self,
        coordinate: impl Into<Coordinate>,
        value: T,
    ) -> Result<Option<T>, GridError> {
        let coordinate = coordinate.into();
        if !self.in_bounds(coordinate) {
            if self.config.bounds == BoundsPolicy::Strict {
                error!(
                    "Rejecting write to {} outside {}x{} grid",
                    coordinate, self.rows, self.cols
                );
                return Err(GridError::OutOfBounds {
                    row: coordinate.row,
                    col: coordinate.col,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            debug!(
                "Storing {} outside {}x{} grid bounds",
                coordinate, self.rows, self.cols
            );
        }
        debug!("Writing cell {}", coordinate);
        Ok(self.cells.insert(coordinate, value))
    }

    /// Stores `value` under an unchecked key such as a slice or `"row,col"` text.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidKey`] if `key` is not a two-integer coordinate,
    /// otherwise behaves like [`Grid::set`].
    ///
    /// # Example
    /// ```
    /// use sparsegrid::{Grid, GridError};
    ///
    /// let mut grid = Grid::new(3, 3);
    /// assert_eq!(grid.try_set("1,2", 'a'), Ok(None));
    /// assert_eq!(grid.try_set(&[1usize, 2][..], 'b'), Ok(Some('a')));
    /// assert!(matches!(grid.try_set(&[1usize][..], 'c'), Err(GridError::InvalidKey(_))));
    /// ```
    pub fn try_set<K>(&mut self, key: K, value: T) -> Result<Option<T>, GridError>
    where
        K: TryInto<Coordinate, Error = GridError>,
    {
        let coordinate = key.try_into()?;
        self.set(coordinate, value)
    }

    /// Removes and returns the value stored at `coordinate`.
    ///
    /// # Errors
    /// Returns [`GridError::KeyNotFound`] if the cell is unset.
    pub fn remove(&mut self, coordinate: impl Into<Coordinate>) -> Result<T, GridError> {
        let coordinate = coordinate.into();
        debug!("Deleting cell {}", coordinate);
        self.cells
            .remove(&coordinate)
            .ok_or(GridError::KeyNotFound {
                row: coordinate.row,
                col: coordinate.col,
            })
    }

    /// Returns a read-only view over row `row`. The index is not validated.
    pub fn row(&self, row: usize) -> View<'_, T, RowAxis> {
        View::new(self, row)
    }

    /// Returns a read-only view over column `col`. The index is not validated.
    pub fn col(&self, col: usize) -> View<'_, T, ColumnAxis> {
        View::new(self, col)
    }

    /// Returns a writable view over row `row`.
    ///
    /// # Example
    /// ```
    /// use sparsegrid::Grid;
    ///
    /// let mut grid = Grid::new(2, 2);
    /// grid.row_mut(1).set(0, "a").unwrap();
    /// assert_eq!(grid.get((1, 0)), Some(&"a"));
    /// ```
    pub fn row_mut(&mut self, row: usize) -> ViewMut<'_, T, RowAxis> {
        ViewMut::new(self, row)
    }

    /// Returns a writable view over column `col`.
    pub fn col_mut(&mut self, col: usize) -> ViewMut<'_, T, ColumnAxis> {
        ViewMut::new(self, col)
    }

    /// Returns every coordinate of the grid in row-major order, set or not.
    ///
    /// # Example
    /// ```
    /// use sparsegrid::{Coordinate, Grid};
    ///
    /// let grid: Grid<()> = Grid::new(2, 2);
    /// let all: Vec<Coordinate> = grid.coordinates().collect();
    /// assert_eq!(all, vec![
    ///     Coordinate::new(0, 0),
    ///     Coordinate::new(0, 1),
    ///     Coordinate::new(1, 0),
    ///     Coordinate::new(1, 1),
    /// ]);
    /// ```
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + Clone {
        coordinate::row_major(self.rows, self.cols)
    }

    /// Returns the value of every cell in row-major order, `None` for unset cells.
    pub fn values(&self) -> Cells<'_, T, impl Iterator<Item = Coordinate>> {
        Cells::new(self, self.coordinates())
    }

    /// Iterates over the stored cells in row-major order.
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn entries(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        self.cells.iter().map(|(coordinate, value)| (*coordinate, value))
    }
}

/// Copy-constructs an independent snapshot of `other`.
impl<T: Clone> From<&Grid<T>> for Grid<T> {
    fn from(other: &Grid<T>) -> Self {
        debug!(
            "Copying {}x{} grid with {} cells",
            other.rows,
            other.cols,
            other.len()
        );
        other.clone()
    }
}

/// A stored cell as it appears in serialized output.
#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct SerializedCell<'a, T> {
    row: usize,
    col: usize,
    value: &'a T,
}

/// Serializes the dimensions, config and the stored cells in row-major order.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Grid<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let cells: Vec<_> = self
            .entries()
            .map(|(coordinate, value)| SerializedCell {
                row: coordinate.row,
                col: coordinate.col,
                value,
            })
            .collect();
        let mut state = serializer.serialize_struct("Grid", 4)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("cols", &self.cols)?;
        state.serialize_field("config", &self.config)?;
        state.serialize_field("cells", &cells)?;
        state.end()
    }
}
