use crate::types::Point;
use std::io;

/// Unrecoverable errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[cfg(feature = "geojson")]
    #[error("Invalid GeoJSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Position in feature {feature} has {len} coordinates (expected at least 2)")]
    InvalidPosition { feature: usize, len: usize },

    #[error("Polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("Non-finite coordinate in {point:?}")]
    NonFiniteCoordinate { point: Point },
}

/// Non-fatal issues encountered during lenient GeoJSON parsing
///
/// `feature` is the zero-based index of the feature in the input
/// (always `0` for a bare `Feature` or geometry).
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Geometry type other than `Polygon`/`MultiPolygon`, skipped
    UnsupportedGeometry {
        feature: usize,
        geometry_type: String,
    },

    /// Feature with a `null` geometry, skipped
    MissingGeometry { feature: usize },

    /// Ring whose last position does not repeat the first, kept as-is
    UnclosedRing { feature: usize },

    /// Ring with fewer than 3 positions after dropping the closing one, skipped
    ///
    /// Repeated positions are counted individually.
    DegenerateRing { feature: usize, vertices: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
