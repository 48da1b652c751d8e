pub mod base;
pub mod trace;

pub use base::generate_base_plate;
pub use trace::{ColorLayer, generate_trace_meshes};
