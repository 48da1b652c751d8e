pub mod builder;
pub mod ribbon;
pub mod stl;
pub mod validation;

pub use builder::{MeshBuilder, Triangle};
pub use ribbon::extrude_ribbon;
pub use stl::{read_face_count, write_stl};
pub use validation::validate_and_fix;
