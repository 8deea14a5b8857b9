use crate::types::Point;

/// Check if `point` lies inside `polygon` using the even-odd rule
///
/// The polygon is an ordered list of vertices and is implicitly closed: the
/// last vertex connects back to the first. A horizontal ray is cast from
/// `point` towards +x and every edge it crosses flips the result.
///
/// An edge counts as crossed only if exactly one of its end points lies
/// strictly above `point.y`. Vertices level with the point are therefore
/// never counted twice, and horizontal edges never count at all.
///
/// # Limitations
///
/// - No tolerance is applied. Points exactly on the boundary get a fixed
///   but arbitrary answer: for an axis-aligned rectangle the edges at the
///   minimum `x` and minimum `y` report inside, the other two outside.
/// - Self-intersecting polygons and polygons with fewer than 3 distinct
///   vertices are not rejected. They return a deterministic but
///   meaningless result (an empty slice returns `false`).
pub fn contains(point: Point, polygon: &[Point]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };

    let mut inside = false;
    let mut previous = last;
    for &current in polygon {
        if crosses(point, current, previous) {
            inside = !inside;
        }
        previous = current;
    }
    inside
}

/// Check if the edge `(vi, vj)` crosses the ray cast rightward from `point`
#[inline]
fn crosses(point: Point, vi: Point, vj: Point) -> bool {
    // `yi != yj` is implied by the first condition, so the division is safe
    ((vi.y > point.y) != (vj.y > point.y))
        && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
}
