use thiserror::Error;

/// Errors that occur when a coordinate tuple does not address an element.
///
/// Returned by the base containers in this crate and by any adapter that
/// forwards to them. Coordinates are never clamped into range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IndexError {
    /// The index has a different number of coordinates than the container
    /// has dimensions.
    #[error("index has {actual} coordinates but the container has {expected} dimensions")]
    Rank { expected: usize, actual: usize },

    /// A coordinate lies outside `[0, extent)` along its axis.
    #[error("coordinate {index} is out of range for axis {axis} with extent {extent}")]
    OutOfRange {
        axis: usize,
        index: usize,
        extent: usize,
    },
}

/// Errors that occur when a shape is inconsistent with its data or with
/// another container's shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShapeError {
    /// The number of data elements does not match the shape's size.
    #[error("shape {shape:?} holds {expected} elements but {actual} were provided")]
    Length {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// The product of the extents does not fit in a `usize`.
    #[error("shape {0:?} has too many elements to address")]
    TooLarge(Vec<usize>),

    /// Two containers being composed have different shapes.
    #[error("shapes {left:?} and {right:?} do not match")]
    Mismatch { left: Vec<usize>, right: Vec<usize> },
}
