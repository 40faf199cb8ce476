use crate::grid::{
    coordinate::{row_major, Coordinate},
    Grid,
};

/// A trait for types that expose bounded, cell-addressable contents.
pub trait GridLike {
    type Item;

    /// Returns the number of rows.
    fn row_count(&self) -> usize;

    /// Returns the number of columns.
    fn column_count(&self) -> usize;

    /// Returns the value at `coordinate`, or `None` if it is unset.
    fn cell(&self, coordinate: Coordinate) -> Option<&Self::Item>;

    /// Returns every coordinate within the bounds in row-major order.
    fn all_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        row_major(self.row_count(), self.column_count())
    }

    /// Returns the number of cells within the bounds holding a value.
    fn filled_count(&self) -> usize {
        self.all_coordinates()
            .filter(|&coordinate| self.cell(coordinate).is_some())
            .count()
    }
}

impl<T> GridLike for Grid<T> {
    type Item = T;

    fn row_count(&self) -> usize {
        self.rows()
    }

    fn column_count(&self) -> usize {
        self.cols()
    }

    fn cell(&self, coordinate: Coordinate) -> Option<&T> {
        self.get(coordinate)
    }
}
