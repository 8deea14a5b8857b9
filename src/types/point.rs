/// A point in the plane
///
/// The containment test treats `x` and `y` as plain Cartesian coordinates.
/// For map data `x` holds the latitude and `y` the longitude, see
/// [`Point::lat_lon`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point from latitude and longitude (stored as `x` and `y`)
    pub fn lat_lon(lat: f64, lon: f64) -> Self {
        Self { x: lat, y: lon }
    }

    pub fn lat(&self) -> f64 {
        self.x
    }

    pub fn lon(&self) -> f64 {
        self.y
    }

    /// Check that neither coordinate is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
