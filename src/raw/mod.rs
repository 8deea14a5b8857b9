//! Low-level GeoJSON structures
//!
//! This module mirrors the GeoJSON objects with minimal transformation:
//! positions stay `[lon, lat, ...]` arrays, rings keep their repeated
//! closing position, and unknown geometry types are kept verbatim.
//! Use [`crate::RegionReader`] for decoded [`crate::Region`] values.

mod document;
mod geometry;

pub use self::document::{Document, Feature};
pub use self::geometry::{Geometry, Position, Ring};
