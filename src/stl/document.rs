use crate::aabb::Aabb;
use crate::error::{StlError, StlResult};
use crate::measures::{BoundingBox, CenterOfMass};
use crate::nalgebra_types::Vector3;
use crate::stl::ascii::{parse_header, TextLines};
use crate::stl::facet::{Facet, FACET_RECORD_LEN};
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{BufRead, BufReader, BufWriter, Cursor, Read, Seek, SeekFrom, Write};
use tracing::debug;

/// Size of the free-text header at the start of a binary STL.
pub const HEADER_LEN: usize = 80;

/// Written at the start of every binary header, zero padded to `HEADER_LEN`.
pub const BINARY_BANNER: &str = "Binary STL generated by STLdotNET. QuantumConceptsCorp.com";

/// Density used for `weight`, in g/cm^3.
pub const DENSITY: f64 = 1.04;

/// Input coordinates are millimeters; volumes are reported in cm^3.
pub const MM3_PER_CM3: f64 = 1000.0;

const SOLID: &[u8; 5] = b"solid";

/// A single named solid and its facets, in file order.
/// The name is only carried by the ASCII encoding.
#[derive(Clone, Debug, Default)]
pub struct StlDocument {
    pub name: Option<String>,
    pub facets: Vec<Facet>,
}

impl StlDocument {
    pub fn new() -> StlDocument {
        StlDocument::default()
    }

    pub fn with_facets<I: IntoIterator<Item = Facet>>(name: &str, facets: I) -> StlDocument {
        StlDocument {
            name: Some(name.to_string()),
            facets: facets.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Facet> {
        self.facets.iter()
    }

    /// Append facets to the end of the document.
    /// Passing another document merges all of its facets.
    pub fn append_facets<I: IntoIterator<Item = Facet>>(&mut self, facets: I) {
        self.facets.extend(facets);
    }

    pub fn density(&self) -> f64 {
        DENSITY
    }

    pub fn weight(&self) -> f64 {
        self.density() * self.volume()
    }

    pub fn area(&self) -> f64 {
        self.facets.iter().map(Facet::area).sum()
    }

    /// Enclosed volume in cm^3.
    /// Only meaningful for a closed, consistently wound mesh.
    pub fn volume(&self) -> f64 {
        let volume: f64 = self.facets.iter().map(Facet::signed_volume).sum();
        volume.abs() / MM3_PER_CM3
    }

    pub fn center_of_mass(&self) -> CenterOfMass {
        let moment = self
            .facets
            .iter()
            .fold(Vector3::zeros(), |acc, facet| acc + facet.centroid_moment())
            / MM3_PER_CM3;
        CenterOfMass::new(moment.x, moment.y, moment.z)
    }

    /// Extent of all vertices.
    /// The accumulator starts at the origin, so every axis extent includes zero.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut aabb = Aabb::origin();
        for v in self.facets.iter().flat_map(|f| f.vertices.iter()) {
            aabb.mut_add_point(v);
        }
        aabb.extent()
    }

    /// Check the first five bytes for `solid`, ignoring case.
    /// The stream is left at position 0.
    pub fn is_text<R: Read + Seek>(stream: &mut R) -> StlResult<bool> {
        stream.seek(SeekFrom::Start(0))?;
        let mut prefix = Vec::with_capacity(SOLID.len());
        let maybe_read_error = stream
            .by_ref()
            .take(SOLID.len() as u64)
            .read_to_end(&mut prefix);
        // Seek back before evaluating the read.
        stream.seek(SeekFrom::Start(0))?;
        maybe_read_error?;
        Ok(prefix.eq_ignore_ascii_case(SOLID))
    }

    pub fn is_binary<R: Read + Seek>(stream: &mut R) -> StlResult<bool> {
        Ok(!Self::is_text(stream)?)
    }

    /// Read a document of either encoding.
    ///
    /// A stream that looks like text but yields no facets is retried as binary
    /// when `try_binary_if_text_failed` is set; the binary result wins only if it
    /// has facets.
    pub fn read<R: Read + Seek>(
        stream: &mut R,
        try_binary_if_text_failed: bool,
    ) -> StlResult<StlDocument> {
        if !Self::is_text(stream)? {
            debug!("reading binary STL");
            return Self::read_binary(stream);
        }

        debug!("reading ASCII STL");
        let text = Self::read_text(BufReader::new(&mut *stream))?;
        if !text.is_empty() || !try_binary_if_text_failed {
            return Ok(text);
        }

        debug!("ASCII STL has no facets, retrying as binary");
        stream.seek(SeekFrom::Start(0))?;
        let binary = Self::read_binary(stream)?;
        if binary.is_empty() {
            debug!("binary retry has no facets, keeping ASCII result");
            Ok(text)
        } else {
            Ok(binary)
        }
    }

    /// Read from an in-memory string.
    /// The empty string is not a document and yields `None`.
    pub fn read_str(stl: &str, try_binary_if_text_failed: bool) -> StlResult<Option<StlDocument>> {
        if stl.is_empty() {
            return Ok(None);
        }
        let mut stream = Cursor::new(stl.as_bytes());
        Self::read(&mut stream, try_binary_if_text_failed).map(Some)
    }

    /// Read an ASCII document: a `solid [name]` line, then facets until the
    /// facet reader reports the end.
    pub fn read_text<R: BufRead>(reader: R) -> StlResult<StlDocument> {
        let mut lines = TextLines::new(reader);
        let header = lines.next_line()?.unwrap_or_default();
        let name = parse_header(&header)?;

        let mut stl = StlDocument {
            name: Some(name),
            facets: Vec::new(),
        };
        while let Some(facet) = Facet::read_text(&mut lines)? {
            stl.facets.push(facet);
        }
        Ok(stl)
    }

    /// Read a binary document from the current position of `stream`.
    ///
    /// The header and facet count are skipped; records are read until the
    /// stream ends, so a facet count that disagrees with the data is ignored.
    pub fn read_binary<R: Read + Seek>(stream: &mut R) -> StlResult<StlDocument> {
        let start = stream.stream_position()?;
        let end = stream.seek(SeekFrom::End(0))?;
        let mut position = end.min(start + HEADER_LEN as u64 + 4);
        stream.seek(SeekFrom::Start(position))?;

        let mut reader = BufReader::new(&mut *stream);
        let mut stl = StlDocument::new();
        while position < end {
            let remaining = end - position;
            if remaining < FACET_RECORD_LEN as u64 {
                return Err(StlError::TruncatedFacet {
                    index: stl.len(),
                    remaining,
                });
            }
            stl.facets.push(Facet::read_binary(&mut reader)?);
            position += FACET_RECORD_LEN as u64;
        }
        Ok(stl)
    }

    /// Write the ASCII encoding.
    /// The footer is `end` followed by the header text, with no trailing newline.
    pub fn write_text<W: Write>(&self, writer: &mut W) -> StlResult<()> {
        let mut writer = BufWriter::new(writer);
        writeln!(writer, "{}", self)?;
        for facet in &self.facets {
            facet.write_text(&mut writer)?;
        }
        write!(writer, "end{}", self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_binary<W: Write>(&self, writer: &mut W) -> StlResult<()> {
        let mut writer = BufWriter::new(writer);

        // Write 80 byte header
        let mut header = [0u8; HEADER_LEN];
        let banner = BINARY_BANNER.as_bytes();
        let banner_len = banner.len().min(HEADER_LEN);
        header[..banner_len].copy_from_slice(&banner[..banner_len]);
        writer.write_all(&header)?;

        writer.write_u32::<LittleEndian>(self.facets.len() as u32)?;
        for facet in &self.facets {
            facet.write_binary(&mut writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read `input` with format detection and write it to `output` as ASCII.
    pub fn copy_as_text<R, W>(input: &mut R, output: &mut W) -> StlResult<StlDocument>
    where
        R: Read + Seek,
        W: Write,
    {
        let stl = Self::read(input, false)?;
        stl.write_text(output)?;
        Ok(stl)
    }

    /// Read `input` with format detection and write it to `output` as binary.
    pub fn copy_as_binary<R, W>(input: &mut R, output: &mut W) -> StlResult<StlDocument>
    where
        R: Read + Seek,
        W: Write,
    {
        let stl = Self::read(input, false)?;
        stl.write_binary(output)?;
        Ok(stl)
    }
}

/// Header line of the ASCII encoding.
impl std::fmt::Display for StlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "solid {}", self.name.as_deref().unwrap_or_default())
    }
}

/// Documents are equal when their facets are equal in order. Names are ignored.
impl PartialEq for StlDocument {
    fn eq(&self, other: &StlDocument) -> bool {
        self.facets == other.facets
    }
}

impl IntoIterator for StlDocument {
    type Item = Facet;
    type IntoIter = std::vec::IntoIter<Facet>;

    fn into_iter(self) -> Self::IntoIter {
        self.facets.into_iter()
    }
}

impl<'a> IntoIterator for &'a StlDocument {
    type Item = &'a Facet;
    type IntoIter = std::slice::Iter<'a, Facet>;

    fn into_iter(self) -> Self::IntoIter {
        self.facets.iter()
    }
}

impl Extend<Facet> for StlDocument {
    fn extend<I: IntoIterator<Item = Facet>>(&mut self, iter: I) {
        self.append_facets(iter);
    }
}

impl FromIterator<Facet> for StlDocument {
    fn from_iter<I: IntoIterator<Item = Facet>>(iter: I) -> StlDocument {
        StlDocument {
            name: None,
            facets: iter.into_iter().collect(),
        }
    }
}
