use crate::types::Point;

/// Axis-aligned bounding box
///
/// Stores the minimum and maximum of each coordinate of the points it was
/// built from. For map data `x` is latitude and `y` is longitude.
///
/// # Limitations
///
/// **Anti-meridian handling**: Simple min/max logic is used, so a region
/// crossing the ±180° longitude line gets a box spanning nearly the whole
/// globe instead of the actual smaller region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a bounding box from a slice of points
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let mut bbox = Self::from(*first);
        for &point in rest {
            bbox.extend(point);
        }
        Some(bbox)
    }

    /// Extend bounding box to include a point
    ///
    /// Grows the bounding box if necessary to encompass the given point.
    /// If the point is already inside the bbox, no change is made.
    pub fn extend(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    /// Merge another bounding box into this one
    ///
    /// Grows the bounding box if necessary to encompass the other bounding box.
    /// If the other bbox is already contained, no change is made.
    pub fn merge(&mut self, other: BoundingBox) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Check if a point lies inside the box or on its edges
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

impl From<Point> for BoundingBox {
    fn from(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    fn unit_box() -> BoundingBox {
        BoundingBox {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 1.0,
            max_y: 1.0,
        }
    }

    #[test]
    fn test_from_point() {
        // Paris: 48.8566°N, 2.3522°E
        let bbox = BoundingBox::from(Point::lat_lon(48.8566, 2.3522));

        assert_eq!(bbox.min_x, 48.8566);
        assert_eq!(bbox.max_x, 48.8566);
        assert_eq!(bbox.min_y, 2.3522);
        assert_eq!(bbox.max_y, 2.3522);
    }

    #[test]
    fn test_from_points_empty() {
        assert_none!(BoundingBox::from_points(&[]));
    }

    #[test]
    fn test_from_points_single() {
        let bbox = BoundingBox::from_points(&[Point::new(0.5, 0.5)]);
        assert_some_eq!(bbox, BoundingBox::from(Point::new(0.5, 0.5)));
    }

    #[test]
    fn test_from_points_multiple() {
        let points = [
            Point::new(0.2, 0.8),
            Point::new(-0.3, 0.1),
            Point::new(0.9, 0.4),
        ];

        let bbox = BoundingBox::from_points(&points).unwrap();

        assert_eq!(bbox.min_x, -0.3);
        assert_eq!(bbox.max_x, 0.9);
        assert_eq!(bbox.min_y, 0.1);
        assert_eq!(bbox.max_y, 0.8);
    }

    #[test]
    fn test_extend_inside_is_noop() {
        let mut bbox = unit_box();
        bbox.extend(Point::new(0.5, 0.5));
        assert_eq!(bbox, unit_box());
    }

    #[test]
    fn test_extend_outside() {
        let mut bbox = unit_box();
        bbox.extend(Point::new(2.0, -1.0));

        assert_eq!(bbox.min_x, 0.0);
        assert_eq!(bbox.max_x, 2.0);
        assert_eq!(bbox.min_y, -1.0);
        assert_eq!(bbox.max_y, 1.0);
    }

    #[test]
    fn test_merge_non_overlapping() {
        let mut bbox1 = BoundingBox {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.5,
            max_y: 0.5,
        };

        let bbox2 = BoundingBox {
            min_x: 0.6,
            min_y: 0.6,
            max_x: 1.0,
            max_y: 1.0,
        };

        bbox1.merge(bbox2);

        assert_eq!(bbox1, unit_box());
    }

    #[test]
    fn test_merge_contained() {
        let mut bbox1 = unit_box();

        let bbox2 = BoundingBox {
            min_x: 0.2,
            min_y: 0.2,
            max_x: 0.8,
            max_y: 0.8,
        };

        bbox1.merge(bbox2);

        // Should not change since bbox2 is inside
        assert_eq!(bbox1, unit_box());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bbox = unit_box();

        assert!(bbox.contains(Point::new(0.5, 0.5)));
        assert!(bbox.contains(Point::new(0.0, 0.0)));
        assert!(bbox.contains(Point::new(1.0, 0.3)));
        assert!(!bbox.contains(Point::new(1.1, 0.3)));
        assert!(!bbox.contains(Point::new(0.5, -0.1)));
    }
}
