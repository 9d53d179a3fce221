use crate::measures::BoundingBox;
use crate::nalgebra_types::Vector3;

/// Running min/max accumulator over points.
#[derive(Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vector3,
    pub max: Vector3,
}

impl Aabb {
    /// Degenerate box at the origin.
    /// Anything grown from here always contains the origin.
    pub fn origin() -> Aabb {
        Aabb {
            min: Vector3::zeros(),
            max: Vector3::zeros(),
        }
    }

    pub fn mut_add_point(&mut self, p: &Vector3) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    /// Return the size of the Box.
    pub fn diagonal(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn extent(&self) -> BoundingBox {
        let d = self.diagonal();
        BoundingBox::new(d.x, d.y, d.z)
    }
}
