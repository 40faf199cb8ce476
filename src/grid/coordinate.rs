use std::{fmt, str::FromStr};

use crate::GridError;

/// A `(row, col)` position in a grid.
///
/// Coordinates order row-major: by row first, then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.row, coordinate.col)
    }
}

/// Every coordinate of a `rows` x `cols` area in row-major order.
pub(crate) fn row_major(rows: usize, cols: usize) -> impl Iterator<Item = Coordinate> + Clone {
    (0..rows).flat_map(move |row| (0..cols).map(move |col| Coordinate::new(row, col)))
}

/// Builds a coordinate from exactly two components.
///
/// # Example
/// ```
/// use sparsegrid::{Coordinate, GridError};
///
/// let key: &[usize] = &[3, 4];
/// assert_eq!(Coordinate::try_from(key), Ok(Coordinate::new(3, 4)));
///
/// let key: &[usize] = &[3];
/// assert!(matches!(Coordinate::try_from(key), Err(GridError::InvalidKey(_))));
/// ```
impl TryFrom<&[usize]> for Coordinate {
    type Error = GridError;

    fn try_from(key: &[usize]) -> Result<Self, Self::Error> {
        match *key {
            [row, col] => Ok(Self::new(row, col)),
            _ => Err(GridError::InvalidKey(format!(
                "expected 2 components, got {}",
                key.len()
            ))),
        }
    }
}

/// Parses `"row,col"` text. Whitespace around either component is ignored.
impl FromStr for Coordinate {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [row, col] = parts[..] else {
            return Err(GridError::InvalidKey(format!(
                "expected \"row,col\", got {:?}",
                s
            )));
        };
        let parse = |part: &str| {
            part.parse::<usize>().map_err(|e| {
                GridError::InvalidKey(format!("{:?} is not a coordinate component: {}", part, e))
            })
        };
        Ok(Self::new(parse(row)?, parse(col)?))
    }
}

impl TryFrom<&str> for Coordinate {
    type Error = GridError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
