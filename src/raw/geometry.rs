use crate::Point;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// GeoJSON position: `[lon, lat]`, optionally followed by an altitude
pub type Position = Vec<f64>;

/// Linear ring, closed by repeating the first position at the end
pub type Ring = Vec<Position>;

const POLYGON: &str = "Polygon";
const MULTI_POLYGON: &str = "MultiPolygon";

/// GeoJSON geometry object
///
/// `coordinates` is kept as raw JSON so that geometry types this crate does
/// not handle can still be parsed and reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub coordinates: Value,
}

impl Geometry {
    /// Build a `Polygon` geometry from rings of points
    ///
    /// Every ring is closed by repeating its first vertex.
    pub fn polygon<'a, I>(rings: I) -> Self
    where
        I: IntoIterator<Item = &'a [Point]>,
    {
        let coordinates = rings.into_iter().map(ring_to_value).collect();

        Self {
            geometry_type: POLYGON.to_string(),
            coordinates: Value::Array(coordinates),
        }
    }

    /// Decode the coordinates of a `Polygon` or `MultiPolygon`
    ///
    /// Returns `Ok(None)` for any other geometry type. A `Polygon` is
    /// returned as a single-element list.
    pub fn into_polygons(self) -> serde_json::Result<Option<Vec<Vec<Ring>>>> {
        match self.geometry_type.as_str() {
            POLYGON => Ok(Some(vec![serde_json::from_value(self.coordinates)?])),
            MULTI_POLYGON => Ok(Some(serde_json::from_value(self.coordinates)?)),
            _ => Ok(None),
        }
    }
}

fn ring_to_value(ring: &[Point]) -> Value {
    ring.iter()
        .chain(ring.first())
        .map(|point| Value::Array(vec![Value::from(point.lon()), Value::from(point.lat())]))
        .collect()
}
