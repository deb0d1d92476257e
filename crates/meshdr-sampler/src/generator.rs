//! Lazy sample generation.
//!
//! Each call to [`Samples::next`] configures a fresh lattice around the
//! base mesh, draws a new displacement field, deforms the base point cloud
//! and rebuilds a mesh from it. Nothing is computed ahead of the consumer
//! and nothing carries over from one sample to the next.

use std::iter::FusedIterator;
use std::time::Instant;

use meshdr_ffd::LatticeDeformer;
use meshdr_io::GenerationConfig;
use meshdr_mesh::PointCloudMesh;
use meshdr_types::{constants, MeshdrError, MeshdrResult};
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parameters shared by every sample of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Control points per lattice axis.
    pub resolution: usize,
    /// Standard deviation of control-point displacements (lattice units).
    pub std_dev: f64,
    /// Padding around the base bounds on each side (model units).
    pub margin: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            resolution: constants::DEFAULT_RESOLUTION,
            std_dev: constants::DEFAULT_STD_DEV,
            margin: constants::DEFAULT_MARGIN,
        }
    }
}

impl From<&GenerationConfig> for SamplingParams {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            resolution: config.resolution,
            std_dev: config.std_dev,
            margin: config.margin,
        }
    }
}

impl SamplingParams {
    /// Rejects `resolution < 1` and negative or non-finite `std_dev`/`margin`.
    pub fn validate(&self) -> MeshdrResult<()> {
        if self.resolution < 1 {
            return Err(MeshdrError::InvalidConfig(
                "lattice resolution must be at least 1".into(),
            ));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(MeshdrError::InvalidConfig(format!(
                "standard deviation must be a non-negative number, got {}",
                self.std_dev
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(MeshdrError::InvalidConfig(format!(
                "margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        Ok(())
    }
}

/// Entry point for sample generation.
pub struct SampleGenerator;

impl SampleGenerator {
    /// Returns an iterator over `count` deformed copies of `base`.
    ///
    /// `params` are checked here, before anything is drawn from `rng`.
    pub fn generate<R: Rng>(
        base: &PointCloudMesh,
        count: usize,
        params: SamplingParams,
        rng: R,
    ) -> MeshdrResult<Samples<'_, R>> {
        params.validate()?;
        Ok(Samples {
            base,
            params,
            count,
            next_index: 0,
            failed: false,
            log_timing: true,
            rng,
        })
    }

    /// Like [`generate`](Self::generate), drawing from the thread-local RNG.
    pub fn generate_default(
        base: &PointCloudMesh,
        count: usize,
        params: SamplingParams,
    ) -> MeshdrResult<Samples<'_, ThreadRng>> {
        Self::generate(base, count, params, rand::rng())
    }
}

/// Lazy, finite sequence of deformed meshes.
///
/// Yields `Ok(sample)` up to `count` times. If producing a sample fails,
/// the error is yielded once and the sequence ends.
pub struct Samples<'a, R> {
    base: &'a PointCloudMesh,
    params: SamplingParams,
    count: usize,
    next_index: usize,
    failed: bool,
    log_timing: bool,
    rng: R,
}

impl<'a, R: Rng> Samples<'a, R> {
    /// Enables or disables the per-sample timing log line.
    pub fn with_timing_logs(mut self, enabled: bool) -> Self {
        self.log_timing = enabled;
        self
    }

    /// The mesh being deformed.
    pub fn base(&self) -> &'a PointCloudMesh {
        self.base
    }

    pub fn params(&self) -> SamplingParams {
        self.params
    }

    /// Samples not yet produced.
    pub fn remaining(&self) -> usize {
        if self.failed {
            0
        } else {
            self.count - self.next_index
        }
    }

    fn draw(&mut self) -> MeshdrResult<PointCloudMesh> {
        let deformer = LatticeDeformer::bounding(
            &self.base.bounds(),
            self.params.resolution,
            self.params.margin,
        )?;
        let points = deformer.apply(self.base.point_cloud(), self.params.std_dev, &mut self.rng)?;
        self.base.reconstruct(points)
    }
}

impl<R: Rng> Iterator for Samples<'_, R> {
    type Item = MeshdrResult<PointCloudMesh>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        let index = self.next_index;
        let start = Instant::now();
        let result = self.draw();
        self.next_index += 1;

        match &result {
            Ok(_) if self.log_timing => {
                tracing::info!(
                    "iteration {} (out of {}) completed in {} seconds",
                    index,
                    self.count,
                    start.elapsed().as_secs_f64()
                );
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(index, error = %e, "sample generation failed");
                self.failed = true;
            }
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl<R: Rng> FusedIterator for Samples<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use meshdr_mesh::generators::single_triangle;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Skips `generate`'s validation so the failure surfaces inside `next`.
    fn unchecked(
        base: &PointCloudMesh,
        count: usize,
        params: SamplingParams,
    ) -> Samples<'_, StdRng> {
        Samples {
            base,
            params,
            count,
            next_index: 0,
            failed: false,
            log_timing: false,
            rng: StdRng::seed_from_u64(3),
        }
    }

    #[test]
    fn error_is_yielded_once_then_fused() {
        let base = PointCloudMesh::from_mesh(single_triangle()).unwrap();
        let params = SamplingParams {
            std_dev: -1.0,
            ..SamplingParams::default()
        };
        let mut samples = unchecked(&base, 4, params);

        assert_eq!(samples.remaining(), 4);
        assert!(matches!(
            samples.next(),
            Some(Err(MeshdrError::InvalidConfig(_)))
        ));
        assert_eq!(samples.remaining(), 0);
        assert_eq!(samples.size_hint(), (0, Some(0)));
        assert!(samples.next().is_none());
        assert!(samples.next().is_none());
    }

    #[test]
    fn failure_mid_sequence_ends_it() {
        let base = PointCloudMesh::from_mesh(single_triangle()).unwrap();
        let mut samples = unchecked(&base, 3, SamplingParams::default());

        assert!(matches!(samples.next(), Some(Ok(_))));
        samples.params.resolution = 0;
        assert!(samples.next().is_some_and(|r| r.is_err()));
        assert!(samples.next().is_none());
        assert_eq!(samples.remaining(), 0);
    }
}
