/// How a grid treats writes outside its logical dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BoundsPolicy {
    /// Store the value anyway. Reads and deletes never check bounds either.
    #[default]
    Permissive,
    /// Reject the write with [`GridError::OutOfBounds`](crate::GridError::OutOfBounds).
    Strict,
}

/// Configuration for a [`Grid`](crate::Grid).
///
/// # Example
/// ```
/// use sparsegrid::{BoundsPolicy, GridConfig};
///
/// let config = GridConfig::default();
/// assert_eq!(config.bounds, BoundsPolicy::Permissive);
///
/// let config = GridConfig::new(BoundsPolicy::Strict);
/// assert_eq!(config.bounds, BoundsPolicy::Strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridConfig {
    /// Write bounds checking (default: permissive)
    pub bounds: BoundsPolicy,
}

impl GridConfig {
    pub fn new(bounds: BoundsPolicy) -> Self {
        Self { bounds }
    }

    /// Shorthand for a config rejecting out-of-range writes.
    pub fn strict() -> Self {
        Self::new(BoundsPolicy::Strict)
    }
}
