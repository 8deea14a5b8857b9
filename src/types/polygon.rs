use crate::error::{Error, Result};
use crate::types::{BoundingBox, Point};

/// A simple polygon given by its vertices
///
/// The ring is implicitly closed: the last vertex connects back to the first,
/// so the first vertex must not be repeated at the end. Containment follows
/// the even-odd rule, see [`contains()`](crate::contains()).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon without validating the vertices
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Create a polygon, rejecting fewer than 3 vertices and non-finite
    /// coordinates
    ///
    /// Self-intersection is not checked.
    pub fn try_new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::TooFewVertices {
                count: vertices.len(),
            });
        }

        if let Some(&point) = vertices.iter().find(|point| !point.is_finite()) {
            return Err(Error::NonFiniteCoordinate { point });
        }

        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over the edges as `(current, previous)` vertex pairs
    ///
    /// The first edge pairs the first vertex with the last one.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let previous = self.vertices.last().into_iter().chain(&self.vertices);
        self.vertices.iter().copied().zip(previous.copied())
    }

    /// Returns `None` for a polygon without vertices
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.vertices)
    }

    /// Check if `point` lies inside the polygon
    ///
    /// Same as [`contains()`](crate::contains()) on the vertices. There is no
    /// bounding box shortcut: next to a vertex the rounded edge intersection
    /// can land one ulp outside the box, and a shortcut would answer
    /// differently there.
    pub fn contains(&self, point: Point) -> bool {
        crate::contains(point, &self.vertices)
    }

    /// Same polygon with the opposite winding order
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Same polygon with the vertex list starting at index `start`
    ///
    /// `start` wraps around the vertex count.
    pub fn rotated(&self, start: usize) -> Self {
        let mut vertices = self.vertices.clone();
        if !vertices.is_empty() {
            let start = start % vertices.len();
            vertices.rotate_left(start);
        }
        Self { vertices }
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok, assert_some_eq};
    use insta::assert_compact_debug_snapshot;

    fn square() -> Polygon {
        [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn try_new_accepts_triangle() {
        let vertices = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        let polygon = assert_ok!(Polygon::try_new(vertices.clone()));
        assert_eq!(polygon.vertices(), &vertices[..]);
    }

    #[test]
    fn try_new_rejects_too_few_vertices() {
        let result = Polygon::try_new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_compact_debug_snapshot!(result.unwrap_err(), @"TooFewVertices { count: 2 }");
    }

    #[test]
    fn try_new_rejects_non_finite() {
        let result = Polygon::try_new(vec![
            Point::new(0.0, 0.0),
            Point::new(f64::INFINITY, 0.0),
            Point::new(0.0, 1.0),
        ]);
        assert_compact_debug_snapshot!(result.unwrap_err(), @"NonFiniteCoordinate { point: Point { x: inf, y: 0.0 } }");
    }

    #[test]
    fn try_new_rejects_nan() {
        let result = Polygon::try_new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, f64::NAN),
        ]);
        assert_err!(result);
    }

    #[test]
    fn error_message() {
        let error = Polygon::try_new(vec![]).unwrap_err();
        assert_eq!(error.to_string(), "Polygon needs at least 3 vertices, got 0");
    }

    #[test]
    fn edges_wrap_around() {
        let edges: Vec<_> = square().edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], (Point::new(0.0, 0.0), Point::new(0.0, 10.0)));
        assert_eq!(edges[1], (Point::new(10.0, 0.0), Point::new(0.0, 0.0)));
        assert_eq!(edges[3], (Point::new(0.0, 10.0), Point::new(10.0, 10.0)));
    }

    #[test]
    fn edges_of_empty_polygon() {
        assert_eq!(Polygon::default().edges().count(), 0);
    }

    #[test]
    fn bounding_box() {
        let bbox = square().bounding_box();
        assert_some_eq!(
            bbox,
            BoundingBox {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 10.0,
                max_y: 10.0,
            }
        );
    }

    #[test]
    fn contains_matches_free_function() {
        let square = square();
        for point in [
            Point::new(5.0, 5.0),
            Point::new(15.0, 5.0),
            Point::new(-5.0, 5.0),
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 0.0),
        ] {
            assert_eq!(
                square.contains(point),
                crate::contains(point, square.vertices()),
                "{point:?}"
            );
        }
    }

    #[test]
    fn empty_polygon_contains_nothing() {
        assert!(!Polygon::default().contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn reversed() {
        let reversed = square().reversed();
        assert_eq!(reversed.vertices()[0], Point::new(0.0, 10.0));
        assert_eq!(reversed.vertices()[3], Point::new(0.0, 0.0));
        assert!(reversed.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn rotated_wraps_start_index() {
        let square = square();
        assert_eq!(square.rotated(0), square);
        assert_eq!(square.rotated(4), square);
        assert_eq!(square.rotated(5).vertices()[0], Point::new(10.0, 0.0));
        assert_eq!(Polygon::default().rotated(3), Polygon::default());
    }
}
