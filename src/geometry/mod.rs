pub mod bounding_box;
pub mod path_vector;

pub use bounding_box::BoundingBox;
pub use path_vector::{PathVector, Turn};
