//! Batch output layout.

use std::path::{Path, PathBuf};

use meshdr_types::MeshdrResult;

/// An existing directory that receives `result_<index>.stl` files.
#[derive(Debug, Clone)]
pub struct OutputDirectory {
    root: PathBuf,
}

impl OutputDirectory {
    /// Resolves `path` to an absolute path and creates it (and any
    /// missing parents) if needed.
    pub fn create(path: impl AsRef<Path>) -> MeshdrResult<Self> {
        let root = std::path::absolute(path.as_ref())?;
        std::fs::create_dir_all(&root)?;
        tracing::debug!(path = %root.display(), "output directory ready");
        Ok(Self { root })
    }

    /// Absolute path of the directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name for sample `index`.
    pub fn file_name(index: usize) -> String {
        format!("result_{index}.stl")
    }

    /// Absolute path for sample `index`.
    pub fn sample_path(&self, index: usize) -> PathBuf {
        self.root.join(Self::file_name(index))
    }
}
