//! Batch runner — drains a sample sequence into a sink and collects metrics.

use std::time::Instant;

use meshdr_mesh::PointCloudMesh;
use meshdr_types::MeshdrResult;

use crate::metrics::BatchMetrics;

/// Consumer of generated samples.
pub trait SampleSink {
    /// Takes sample `index`. The sink may modify it (e.g. recompute normals).
    fn accept(&mut self, index: usize, sample: &mut PointCloudMesh) -> MeshdrResult<()>;

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Runs a sample sequence to completion.
pub struct BatchRunner;

impl BatchRunner {
    /// Pulls every sample from `samples` and hands it to `sink`.
    ///
    /// The first error, from generation or from the sink, stops the run
    /// and is returned. Samples already accepted stay accepted.
    pub fn run<I>(
        base: &PointCloudMesh,
        samples: I,
        sink: &mut dyn SampleSink,
    ) -> MeshdrResult<BatchMetrics>
    where
        I: IntoIterator<Item = MeshdrResult<PointCloudMesh>>,
    {
        let mut samples = samples.into_iter();
        let mut sample_times = Vec::with_capacity(samples.size_hint().0);
        let mut max_displacement: f64 = 0.0;

        let total_start = Instant::now();
        let mut index = 0;
        loop {
            let start = Instant::now();
            let Some(sample) = samples.next() else {
                break;
            };
            let mut sample = sample?;
            max_displacement = max_displacement.max(base.max_displacement(&sample));
            sink.accept(index, &mut sample)?;
            sample_times.push(start.elapsed().as_secs_f64());
            index += 1;
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();

        tracing::debug!(sink = sink.name(), samples = index, "batch complete");
        Ok(BatchMetrics::from_times(
            base.triangle_count(),
            total_wall_time,
            &sample_times,
            max_displacement,
        ))
    }
}
