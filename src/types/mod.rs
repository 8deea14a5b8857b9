mod bounding_box;
mod point;
mod polygon;
mod region;

pub use bounding_box::*;
pub use point::*;
pub use polygon::*;
pub use region::*;
