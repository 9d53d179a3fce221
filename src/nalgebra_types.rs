use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Result, Write};

/// Point or direction in model space.
/// Coordinates are assumed to be millimeters.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Build a `Vector3` from three coordinates.
#[macro_export]
macro_rules! vec3 {
    ($x:expr, $y:expr, $z:expr) => {
        $crate::nalgebra_types::Vector3::new($x, $y, $z)
    };
}

// Binary STL stores single precision.
// Widening on read is exact, narrowing on write rounds to nearest.
pub fn read_vec3_f32<R: Read>(reader: &mut R) -> Result<Vector3> {
    let x = reader.read_f32::<LittleEndian>()?;
    let y = reader.read_f32::<LittleEndian>()?;
    let z = reader.read_f32::<LittleEndian>()?;
    Ok(Vector3::new(x as f64, y as f64, z as f64))
}

pub fn write_vec3_f32<W: Write>(writer: &mut W, v: &Vector3) -> Result<()> {
    for c in v {
        writer.write_f32::<LittleEndian>(*c as f32)?;
    }
    Ok(())
}
