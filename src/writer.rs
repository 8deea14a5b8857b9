//! High-level GeoJSON region writer with builder API

use crate::Region;
use crate::error::{Error, Result};
use crate::raw::{Document, Feature, Geometry};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// High-level GeoJSON writer with builder API
///
/// Writes a `FeatureCollection` with one `Polygon` feature per region.
/// Rings are closed and positions written as `[lon, lat]`, so the output
/// reads back into the same regions with [`crate::RegionReader`].
///
/// # Example
///
/// ```
/// use polygon_containment::{Point, Polygon, Region, RegionWriter};
///
/// let triangle = Polygon::new(vec![
///     Point::lat_lon(0.0, 0.0),
///     Point::lat_lon(0.0, 1.0),
///     Point::lat_lon(1.0, 0.0),
/// ]);
///
/// let mut buf = Vec::new();
/// RegionWriter::new()
///     .add_region(Region::new(triangle).with_name("Triangle"))
///     .write(&mut buf)?;
/// # Ok::<(), polygon_containment::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct RegionWriter {
    regions: Vec<Region>,
    pretty: bool,
}

impl RegionWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single region to the writer
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn add_region(&mut self, region: Region) -> &mut Self {
        self.regions.push(region);
        self
    }

    /// Add multiple regions from an iterator
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn add_regions<I: IntoIterator<Item = Region>>(&mut self, regions: I) -> &mut Self {
        self.regions.extend(regions);
        self
    }

    /// Enable indented output
    ///
    /// Default is compact output. Returns `&mut self` to allow method chaining.
    pub fn with_pretty(&mut self, pretty: bool) -> &mut Self {
        self.pretty = pretty;
        self
    }

    /// Write all regions as a `FeatureCollection`
    ///
    /// Fails with [`Error::NonFiniteCoordinate`] before writing anything if
    /// a vertex is `NaN` or infinite, since JSON has no representation for it.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let non_finite = self
            .regions
            .iter()
            .flat_map(|region| std::iter::once(&region.exterior).chain(&region.holes))
            .flat_map(|polygon| polygon.vertices())
            .find(|point| !point.is_finite());

        if let Some(&point) = non_finite {
            return Err(Error::NonFiniteCoordinate { point });
        }

        let features: Vec<_> = self.regions.iter().map(region_to_feature).collect();
        Document::write_collection(writer, &features, self.pretty)
    }

    /// Write all regions to a file, replacing it if it exists
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

fn region_to_feature(region: &Region) -> Feature {
    let rings = std::iter::once(&region.exterior)
        .chain(&region.holes)
        .map(|polygon| polygon.vertices());

    let mut properties = Map::new();
    if let Some(name) = &region.name {
        properties.insert("name".to_string(), Value::String(name.clone()));
    }

    Feature::new(Some(Geometry::polygon(rings)), Some(properties))
}
