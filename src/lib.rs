//! Reading, writing and measuring STL triangle meshes.
//!
//! [`StlDocument::read`] sniffs a seekable stream for the ASCII (`solid ...`)
//! or binary encoding and materializes every facet. The document then reports
//! surface area, enclosed volume, center of mass, bounding extent and weight,
//! each computed fresh from its facets. Coordinates are taken to be millimeters.

#[macro_use]
pub mod nalgebra_types;

pub mod aabb;
pub mod error;
pub mod measures;
pub mod stl;

#[cfg(test)]
mod test_meshes;

pub use error::{StlError, StlResult};
pub use measures::{BoundingBox, CenterOfMass};
pub use nalgebra_types::Vector3;
pub use stl::{Facet, StlDocument};
