pub mod color;
pub mod point;

pub use color::PenColor;
pub use point::{Point, Segment};
