//! Value snapshots returned by the derived geometry of a document.

/// Extent of a mesh along each axis (`max - min`), not its corner coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, z: f64) -> BoundingBox {
        BoundingBox { x, y, z }
    }
}

/// First moment of the signed tetrahedral decomposition, divided by 1000.
/// Equals the true centroid only when the enclosed volume is 1000 mm^3.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CenterOfMass {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CenterOfMass {
    pub fn new(x: f64, y: f64, z: f64) -> CenterOfMass {
        CenterOfMass { x, y, z }
    }
}
