/// Errors raised when constructing a shape from invalid data.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// A convex hull must have at least one vertex.
    #[error("convex hull needs at least one vertex")]
    EmptyHull,
    /// Convex hull vertex ids must fit in 16 bits.
    #[error("convex hull has {0} vertices, the maximum is 65536")]
    TooManyVertices(usize),
    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),
    /// The scale factor has a NaN or infinite component.
    #[error("non-finite scale factor")]
    NonFiniteScale,
    /// Radii must be non-negative.
    #[error("negative or non-finite radius")]
    NegativeRadius,
    /// Half-extents must be non-negative.
    #[error("negative or non-finite half-extent")]
    NegativeHalfExtent,
}
