//! turtlesoup - Turtle geometry, path planning and shape drawing, with STL relief export

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod layers;
pub mod mesh;
pub mod shapes;
pub mod turtle;

pub use error::{GeometryError, Result};
