use crate::extract::types::Catalog;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes the two catalog documents as pretty-printed JSON files
pub struct CatalogWriter {
    output_dir: PathBuf,
    groups_file: String,
    sizes_file: String,
}

impl CatalogWriter {
    /// Create a writer rooted at `output_dir`, creating the directory
    /// if it does not exist
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir).context("Failed to create output directory")?;

        Ok(CatalogWriter {
            output_dir,
            groups_file: String::from("groups.json"),
            sizes_file: String::from("sizes.json"),
        })
    }

    /// Override the default document file names
    pub fn with_file_names(
        mut self,
        groups_file: impl Into<String>,
        sizes_file: impl Into<String>,
    ) -> Self {
        self.groups_file = groups_file.into();
        self.sizes_file = sizes_file.into();
        self
    }

    /// Write both documents; returns the (groups, sizes) paths written
    ///
    /// Both maps are serialized before either file is touched, so a
    /// serialization failure writes nothing.
    pub fn write_catalog(&self, catalog: &Catalog) -> Result<(PathBuf, PathBuf)> {
        let groups_doc = serde_json::to_string_pretty(&catalog.groups)
            .context("Failed to serialize group map")?;
        let sizes_doc = serde_json::to_string_pretty(&catalog.sizes)
            .context("Failed to serialize size map")?;

        let groups_path = self.output_dir.join(&self.groups_file);
        let sizes_path = self.output_dir.join(&self.sizes_file);

        fs::write(&groups_path, groups_doc)
            .with_context(|| format!("Failed to write {}", groups_path.display()))?;
        tracing::info!("Saved group map to {}", groups_path.display());

        fs::write(&sizes_path, sizes_doc)
            .with_context(|| format!("Failed to write {}", sizes_path.display()))?;
        tracing::info!("Saved size map to {}", sizes_path.display());

        Ok((groups_path, sizes_path))
    }
}

/// Writes one combined catalog document to any output stream
pub struct CombinedWriter<W: Write> {
    writer: W,
}

impl<W: Write> CombinedWriter<W> {
    pub fn new(writer: W) -> Self {
        CombinedWriter { writer }
    }

    pub fn write_catalog(&mut self, catalog: &Catalog) -> Result<()> {
        let doc = serde_json::to_string_pretty(catalog).context("Failed to serialize catalog")?;
        writeln!(self.writer, "{}", doc).context("Failed to write catalog")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush writer")
    }
}
