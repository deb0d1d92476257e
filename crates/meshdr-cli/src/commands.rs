//! CLI command implementations.

use std::path::PathBuf;

use meshdr_ffd::LatticeDeformer;
use meshdr_io::validator::validate_config;
use meshdr_io::{stl, GenerationConfig, OutputDirectory};
use meshdr_mesh::PointCloudMesh;
use meshdr_render::{JsonFrameExporter, RenderFrame, Renderer, SummaryRenderer};
use meshdr_sampler::sinks::StlDirectorySink;
use meshdr_sampler::{BatchRunner, SampleGenerator, SamplingParams};
use meshdr_types::constants::DEMO_SAMPLE_COUNT;

/// Options that only affect how a run is reported.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// CSV file for batch metrics.
    pub metrics: Option<PathBuf>,
    /// JSON file for demo frames.
    pub export: Option<PathBuf>,
    /// Log one line per generated sample.
    pub timing_logs: bool,
}

/// Validate the config, load the base mesh, and dispatch to batch or demo mode.
pub fn run(config: &GenerationConfig, options: &RunOptions) -> Result<(), Box<dyn std::error::Error>> {
    validate_config(config)?;

    let base = PointCloudMesh::from_mesh(stl::load(config.mesh_path()?)?)?;
    tracing::info!(
        triangles = base.triangle_count(),
        min = %base.min_point(),
        max = %base.max_point(),
        "base mesh loaded"
    );

    if config.demo {
        demo(&base, config, options)
    } else {
        batch(&base, config, options)
    }
}

/// Generate `count` samples and write each to the output directory.
fn batch(
    base: &PointCloudMesh,
    config: &GenerationConfig,
    options: &RunOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = OutputDirectory::create(&config.outpath)?;
    println!("meshdr batch");
    println!("────────────");
    println!("Output:     {}", output.root().display());
    println!("Samples:    {}", config.count);
    println!("Lattice:    {}³ control points", config.resolution);
    println!("Std dev:    {}", config.std_dev);
    println!();

    let samples = SampleGenerator::generate_default(base, config.count, SamplingParams::from(config))?
        .with_timing_logs(options.timing_logs);
    let mut sink = StlDirectorySink::new(output).echo_paths(true);
    let metrics = BatchRunner::run(base, samples, &mut sink)?;

    println!();
    println!("Written:      {}", sink.written());
    println!("Wall time:    {:.3}s", metrics.total_wall_time);
    println!("Avg sample:   {:.3}ms", metrics.avg_sample_time * 1000.0);
    println!("Max displace: {:.4}", metrics.max_displacement);

    if let Some(path) = &options.metrics {
        std::fs::write(path, metrics.to_csv())?;
        println!("Metrics written to: {}", path.display());
    }

    Ok(())
}

/// Show the base mesh and the first few samples. Writes no STL files.
fn demo(
    base: &PointCloudMesh,
    config: &GenerationConfig,
    options: &RunOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = SamplingParams::from(config);

    let mut renderers: Vec<Box<dyn Renderer>> = vec![Box::new(SummaryRenderer::new())];
    if let Some(path) = &options.export {
        renderers.push(Box::new(JsonFrameExporter::new(path)));
    }
    for renderer in &mut renderers {
        renderer.init(base)?;
    }

    let lattice = LatticeDeformer::bounding(&base.bounds(), params.resolution, params.margin)?;
    let base_frame = RenderFrame::from_mesh("base stl", base)
        .with_control_points(lattice.control_points(None)?);
    for renderer in &mut renderers {
        renderer.submit_frame(&base_frame)?;
    }

    let shown = DEMO_SAMPLE_COUNT.min(config.count);
    let samples = SampleGenerator::generate_default(base, shown, params)?
        .with_timing_logs(options.timing_logs);
    for (i, sample) in samples.enumerate() {
        let frame = RenderFrame::from_mesh(format!("randomly deformed stl {i}"), &sample?);
        for renderer in &mut renderers {
            renderer.submit_frame(&frame)?;
        }
    }

    for renderer in &mut renderers {
        renderer.finalize()?;
        tracing::debug!(renderer = renderer.name(), frames = renderer.frame_count(), "renderer done");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshdr_mesh::generators::cuboid;

    fn write_base(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("base.stl");
        stl::save(&path, &cuboid(1.0, 2.0, 1.0)).unwrap();
        path
    }

    #[test]
    fn batch_writes_every_sample() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerationConfig {
            mesh: Some(write_base(dir.path())),
            outpath: dir.path().join("out").join("nested"),
            count: 3,
            ..Default::default()
        };
        let options = RunOptions {
            metrics: Some(dir.path().join("metrics.csv")),
            ..Default::default()
        };
        run(&config, &options).unwrap();

        for i in 0..3 {
            let sample = stl::load(config.outpath.join(format!("result_{i}.stl"))).unwrap();
            assert_eq!(sample.triangle_count(), 12);
        }
        assert!(!config.outpath.join("result_3.stl").exists());
        let csv = std::fs::read_to_string(dir.path().join("metrics.csv")).unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with("3,12,"));
    }

    #[test]
    fn demo_writes_no_stl() {
        let dir = tempfile::tempdir().unwrap();
        let export = dir.path().join("demo.json");
        let config = GenerationConfig {
            mesh: Some(write_base(dir.path())),
            outpath: dir.path().join("out"),
            demo: true,
            ..Default::default()
        };
        let options = RunOptions {
            export: Some(export.clone()),
            ..Default::default()
        };
        run(&config, &options).unwrap();

        assert!(!config.outpath.exists());
        let text = std::fs::read_to_string(export).unwrap();
        // base + 3 samples
        assert_eq!(text.matches("\"label\"").count(), 4);
    }

    #[test]
    fn missing_mesh_file_fails_before_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerationConfig {
            mesh: Some(dir.path().join("nope.stl")),
            outpath: dir.path().join("out"),
            ..Default::default()
        };
        assert!(run(&config, &RunOptions::default()).is_err());
        assert!(!config.outpath.exists());
    }

    #[test]
    fn zero_resolution_fails_before_loading() {
        let config = GenerationConfig {
            mesh: Some(PathBuf::from("/not/read.stl")),
            resolution: 0,
            ..Default::default()
        };
        let err = run(&config, &RunOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
