//! Path based entry points. The codec itself only sees streams.
use crate::stl::StlDocument;
use anyhow::*;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

impl StlDocument {
    /// Read the STL file at `path`, detecting its encoding.
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<StlDocument> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(anyhow!("No path given for STL file"));
        }

        let input_file = File::open(path)
            .with_context(|| format!("Failed to open stl file: {}", path.display()))?;
        let mut input_reader = BufReader::new(input_file);
        let stl = StlDocument::read(&mut input_reader, false)
            .with_context(|| format!("Failed to read stl file: {}", path.display()))?;
        debug!(path = %path.display(), facets = stl.len(), "opened STL file");
        Ok(stl)
    }

    pub fn save_as_text<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let mut output_writer = create(path.as_ref())?;
        self.write_text(&mut output_writer)
            .with_context(|| format!("Failed to write stl file: {}", path.as_ref().display()))?;
        debug!(path = %path.as_ref().display(), facets = self.len(), "saved ASCII STL file");
        Ok(())
    }

    pub fn save_as_binary<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let mut output_writer = create(path.as_ref())?;
        self.write_binary(&mut output_writer)
            .with_context(|| format!("Failed to write stl file: {}", path.as_ref().display()))?;
        debug!(path = %path.as_ref().display(), facets = self.len(), "saved binary STL file");
        Ok(())
    }
}

/// Create `path` for writing, along with any missing parent directories.
fn create(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if path.as_os_str().is_empty() {
        return Err(anyhow!("No path given for STL file"));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let output_file = File::create(path)
        .with_context(|| format!("Failed to create stl file: {}", path.display()))?;
    Ok(BufWriter::new(output_file))
}
