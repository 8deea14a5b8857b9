use crate::types::{BoundingBox, Point, Polygon};

/// A named area on the map, optionally with holes
///
/// A point belongs to the region if the exterior ring contains it and none
/// of the holes do.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Region {
    pub name: Option<String>,
    pub exterior: Polygon,
    pub holes: Vec<Polygon>,
}

impl Region {
    pub fn new(exterior: Polygon) -> Self {
        Self {
            name: None,
            exterior,
            holes: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_hole(mut self, hole: Polygon) -> Self {
        self.holes.push(hole);
        self
    }

    pub fn contains(&self, point: Point) -> bool {
        self.exterior.contains(point) && !self.holes.iter().any(|hole| hole.contains(point))
    }

    /// Bounding box of the exterior ring
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.exterior.bounding_box()
    }
}

/// Ordered collection of regions for locating points
///
/// Regions may overlap. [`RegionIndex::locate`] returns the first match in
/// insertion order, [`RegionIndex::locate_all`] every match.
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    regions: Vec<Region>,
}

impl RegionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, region: Region) {
        self.regions.push(region);
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Find the first region containing `point`
    pub fn locate(&self, point: Point) -> Option<&Region> {
        self.locate_all(point).next()
    }

    /// Iterate over all regions containing `point`, in insertion order
    pub fn locate_all(&self, point: Point) -> impl Iterator<Item = &Region> + '_ {
        self.regions
            .iter()
            .filter(move |region| region.contains(point))
    }
}

impl From<Vec<Region>> for RegionIndex {
    fn from(regions: Vec<Region>) -> Self {
        Self { regions }
    }
}

impl FromIterator<Region> for RegionIndex {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        Self {
            regions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RegionIndex {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
