use thiserror::Error;

/// Invalid-argument errors raised by the geometry, path and shape functions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("a regular polygon needs more than 2 sides, got {0}")]
    TooFewSides(u32),

    #[error("interior angle must be finite and strictly between 0 and 180 degrees, got {0}")]
    AngleOutOfRange(f64),

    #[error("interior angle {angle} implies about {sides:e} sides, more than a u32 can hold")]
    TooManySides { angle: f64, sides: f64 },

    #[error("coordinate lists differ in length: {x_len} x values, {y_len} y values")]
    MismatchedLengths { x_len: usize, y_len: usize },

    #[error("side length must be positive, got {0}")]
    NonPositiveSideLength(i32),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
