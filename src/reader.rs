//! High-level GeoJSON region reader

use crate::error::{Error, Result, Warning};
use crate::raw::{Document, Feature, Ring};
use crate::{Point, Polygon, Region};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// High-level GeoJSON reader producing [`Region`] values
///
/// Accepts a `FeatureCollection`, a single `Feature` or a bare geometry.
/// Decoding is lenient: features that cannot be turned into regions are
/// skipped and reported as [`Warning`]s, only malformed JSON and invalid
/// positions are fatal.
///
/// - `Polygon` geometries become one region, `MultiPolygon` geometries one
///   region per member polygon. All of them share the feature's `name`
///   property.
/// - Positions are `[lon, lat]` and become `Point::lat_lon(lat, lon)`.
/// - The repeated closing position of each ring is dropped.
///
/// # Example
///
/// ```no_run
/// use polygon_containment::{Point, RegionIndex, RegionReader};
///
/// let mut warnings = Vec::new();
/// let regions = RegionReader::from_path("districts.geojson")?.read_regions(&mut warnings)?;
///
/// let index = RegionIndex::from(regions);
/// if let Some(region) = index.locate(Point::lat_lon(52.52, 13.40)) {
///     println!("{:?}", region.name);
/// }
/// # Ok::<(), polygon_containment::Error>(())
/// ```
#[derive(Debug)]
pub struct RegionReader<R: Read> {
    reader: BufReader<R>,
}

impl RegionReader<File> {
    /// Create a reader from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> RegionReader<R> {
    /// Create a reader from any `Read` source
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Parse the whole document into regions
    ///
    /// Warnings are pushed to the provided vector for features that were
    /// skipped or repaired.
    pub fn read_regions(&mut self, warnings: &mut Vec<Warning>) -> Result<Vec<Region>> {
        let document = Document::read(&mut self.reader)?;

        let mut regions = Vec::new();
        for (index, feature) in document.into_features().into_iter().enumerate() {
            convert_feature(index, feature, &mut regions, warnings)?;
        }

        log::debug!(
            "Read {} regions ({} warnings)",
            regions.len(),
            warnings.len()
        );
        Ok(regions)
    }
}

fn warn(warnings: &mut Vec<Warning>, warning: Warning) {
    log::debug!("Skipping invalid GeoJSON data: {warning:?}");
    warnings.push(warning);
}

/// Convert one feature, appending zero or more regions
fn convert_feature(
    index: usize,
    feature: Feature,
    regions: &mut Vec<Region>,
    warnings: &mut Vec<Warning>,
) -> Result<()> {
    let name = feature.name().map(str::to_owned);

    let Some(geometry) = feature.geometry else {
        warn(warnings, Warning::MissingGeometry { feature: index });
        return Ok(());
    };

    let geometry_type = geometry.geometry_type.clone();
    let Some(polygons) = geometry.into_polygons()? else {
        warn(
            warnings,
            Warning::UnsupportedGeometry {
                feature: index,
                geometry_type,
            },
        );
        return Ok(());
    };

    for rings in polygons {
        let mut rings = rings.into_iter();

        let Some(exterior) = rings.next() else {
            let warning = Warning::DegenerateRing {
                feature: index,
                vertices: 0,
            };
            warn(warnings, warning);
            continue;
        };

        let Some(exterior) = convert_ring(index, exterior, warnings)? else {
            continue;
        };

        let mut region = Region::new(exterior);
        region.name = name.clone();
        for hole in rings {
            if let Some(hole) = convert_ring(index, hole, warnings)? {
                region.holes.push(hole);
            }
        }

        log::trace!(
            "Feature {index}: region {:?} with {} vertices and {} holes",
            region.name,
            region.exterior.len(),
            region.holes.len()
        );
        regions.push(region);
    }

    Ok(())
}

/// Convert a GeoJSON ring into a polygon
///
/// Returns `Ok(None)` if fewer than 3 vertices remain after dropping the
/// closing position.
fn convert_ring(feature: usize, ring: Ring, warnings: &mut Vec<Warning>) -> Result<Option<Polygon>> {
    let mut points = ring
        .iter()
        .map(|position| match position[..] {
            [lon, lat, ..] => Ok(Point::lat_lon(lat, lon)),
            _ => Err(Error::InvalidPosition {
                feature,
                len: position.len(),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    if points.len() > 1 {
        if points.first() == points.last() {
            points.pop();
        } else {
            warn(warnings, Warning::UnclosedRing { feature });
        }
    }

    if points.len() < 3 {
        let warning = Warning::DegenerateRing {
            feature,
            vertices: points.len(),
        };
        warn(warnings, warning);
        return Ok(None);
    }

    Ok(Some(Polygon::new(points)))
}
