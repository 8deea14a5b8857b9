#![doc = include_str!("../README.md")]

pub use crate::contains::contains;
pub use crate::error::{Error, Result, Warning};
#[cfg(feature = "geojson")]
pub use crate::reader::RegionReader;
pub use crate::types::*;
#[cfg(feature = "geojson")]
pub use crate::writer::RegionWriter;

mod contains;
mod error;
#[cfg(feature = "geojson")]
pub mod raw;
#[cfg(feature = "geojson")]
mod reader;
mod types;
#[cfg(feature = "geojson")]
mod writer;
