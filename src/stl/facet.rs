use crate::error::StlResult;
use crate::nalgebra_types::*;
use crate::stl::ascii::TextLines;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{BufRead, Read, Write};

/// Size of one binary facet record: normal, 3 vertices, attribute byte count.
pub const FACET_RECORD_LEN: usize = 50;

/// One oriented triangle.
/// The normal is kept exactly as read; it is never recomputed from the vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Facet {
    pub normal: Vector3,
    pub vertices: [Vector3; 3],
}

impl Facet {
    pub fn new(normal: Vector3, vertices: [Vector3; 3]) -> Facet {
        Facet { normal, vertices }
    }

    /// Build a facet whose normal is derived from the winding of `v0, v1, v2`.
    /// Degenerate triangles get a zero normal.
    pub fn from_vertices(v0: Vector3, v1: Vector3, v2: Vector3) -> Facet {
        let cross = (v1 - v0).cross(&(v2 - v0));
        let length = cross.norm();
        let normal = if length > 0.0 {
            cross / length
        } else {
            Vector3::zeros()
        };
        Facet::new(normal, [v0, v1, v2])
    }

    /// Same triangle wound the other way.
    pub fn reversed(&self) -> Facet {
        let [v0, v1, v2] = self.vertices;
        Facet::new(-self.normal, [v0, v2, v1])
    }

    pub fn area(&self) -> f64 {
        let [v0, v1, v2] = &self.vertices;
        let ab = v1 - v0;
        let ac = v2 - v0;
        ab.cross(&ac).norm() / 2.0
    }

    /// Signed volume of the tetrahedron spanned by the facet and the origin.
    pub fn signed_volume(&self) -> f64 {
        let [v0, v1, v2] = &self.vertices;
        let v321 = v2.x * v1.y * v0.z;
        let v231 = v1.x * v2.y * v0.z;
        let v312 = v2.x * v0.y * v1.z;
        let v132 = v0.x * v2.y * v1.z;
        let v213 = v1.x * v0.y * v2.z;
        let v123 = v0.x * v1.y * v2.z;

        // Paired so that two coincident vertices cancel to exactly zero.
        ((v231 - v321) + (v312 - v132) + (v123 - v213)) / 6.0
    }

    /// Centroid of the origin tetrahedron weighted by its signed volume.
    pub fn centroid_moment(&self) -> Vector3 {
        let [v0, v1, v2] = &self.vertices;
        (v0 + v1 + v2) / 4.0 * self.signed_volume()
    }

    /// Read the next facet block.
    /// Returns `None` at `endsolid`, at the end of input, or when the next line
    /// does not open a facet. Once `facet normal` is seen the block must be complete.
    pub fn read_text<R: BufRead>(lines: &mut TextLines<R>) -> StlResult<Option<Facet>> {
        let header = match lines.next_tokens()? {
            Some(tokens) => tokens,
            None => return Ok(None),
        };
        if header.len() != 5 || header[0] != "facet" || header[1] != "normal" {
            return Ok(None);
        }
        let normal = lines.parse_vec3(&header[2..5])?;

        lines.expect_keyword("outer loop")?;
        let mut vertices = [Vector3::zeros(); 3];
        for vertex in &mut vertices {
            let tokens = lines.require_tokens("vertex x y z")?;
            if tokens.len() != 4 || tokens[0] != "vertex" {
                return Err(lines.malformed("vertex x y z", &tokens));
            }
            *vertex = lines.parse_vec3(&tokens[1..4])?;
        }
        lines.expect_keyword("end loop")?;
        lines.expect_keyword("end facet")?;

        Ok(Some(Facet::new(normal, vertices)))
    }

    pub fn write_text<W: Write>(&self, writer: &mut W) -> StlResult<()> {
        writeln!(writer, "  {}", self)?;
        writeln!(writer, "    outer loop")?;
        for v in &self.vertices {
            writeln!(writer, "      vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
        Ok(())
    }

    /// Read one 50-byte record. The attribute byte count is discarded.
    pub fn read_binary<R: Read>(reader: &mut R) -> StlResult<Facet> {
        let normal = read_vec3_f32(reader)?;
        let mut vertices = [Vector3::zeros(); 3];
        for vertex in &mut vertices {
            *vertex = read_vec3_f32(reader)?;
        }
        reader.read_u16::<LittleEndian>()?;
        Ok(Facet::new(normal, vertices))
    }

    pub fn write_binary<W: Write>(&self, writer: &mut W) -> StlResult<()> {
        write_vec3_f32(writer, &self.normal)?;
        for v in &self.vertices {
            write_vec3_f32(writer, v)?;
        }
        // Attribute byte count
        writer.write_u16::<LittleEndian>(0)?;
        Ok(())
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = &self.normal;
        write!(f, "facet normal {} {} {}", n.x, n.y, n.z)
    }
}
