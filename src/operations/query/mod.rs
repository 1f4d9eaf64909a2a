mod area;
mod bounding_box;
mod extract_holes;

pub use area::Area;
pub use bounding_box::{Aabb, BoundingBox};
pub use extract_holes::ExtractHoles;
