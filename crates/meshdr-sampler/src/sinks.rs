//! Sample sinks.

use meshdr_io::{stl, OutputDirectory};
use meshdr_mesh::PointCloudMesh;
use meshdr_types::MeshdrResult;

use crate::runner::SampleSink;

/// Writes each sample to `result_<index>.stl` in an output directory.
///
/// Facet normals are recomputed from the deformed geometry before writing.
pub struct StlDirectorySink {
    output: OutputDirectory,
    echo_paths: bool,
    written: usize,
}

impl StlDirectorySink {
    pub fn new(output: OutputDirectory) -> Self {
        Self {
            output,
            echo_paths: false,
            written: 0,
        }
    }

    /// Print every written path to stdout.
    pub fn echo_paths(mut self, enabled: bool) -> Self {
        self.echo_paths = enabled;
        self
    }

    /// Number of files written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn output(&self) -> &OutputDirectory {
        &self.output
    }
}

impl SampleSink for StlDirectorySink {
    fn accept(&mut self, index: usize, sample: &mut PointCloudMesh) -> MeshdrResult<()> {
        let path = self.output.sample_path(index);
        if self.echo_paths {
            println!("{}", path.display());
        }
        sample.recompute_normals();
        stl::save(&path, sample.mesh())?;
        self.written += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "stl_directory"
    }
}

/// Keeps every sample in memory, for tests and inspection.
#[derive(Default)]
pub struct VecSink {
    /// Collected `(index, sample)` pairs.
    pub samples: Vec<(usize, PointCloudMesh)>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices received, in arrival order.
    pub fn indices(&self) -> Vec<usize> {
        self.samples.iter().map(|(i, _)| *i).collect()
    }
}

impl SampleSink for VecSink {
    fn accept(&mut self, index: usize, sample: &mut PointCloudMesh) -> MeshdrResult<()> {
        self.samples.push((index, sample.clone()));
        Ok(())
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}
