pub mod angles;
pub mod path;
pub mod scaling;
pub mod simplify;

pub use angles::{
    heading_to_point, normalize_heading, regular_polygon_interior_angle,
    sides_from_interior_angle,
};
pub use path::{headings_for_coords, headings_for_path};
pub use scaling::{Bounds, Scaler};
