//! meshdr CLI — random free-form deformations of a triangle mesh.

use std::path::PathBuf;

use clap::Parser;
use meshdr_io::GenerationConfig;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "meshdr")]
#[command(version, about = "Generate random mesh deformations.")]
struct Cli {
    /// Base file to deform (STL).
    #[arg(long)]
    mesh: Option<PathBuf>,

    /// Path of generated meshes [default: ./results].
    #[arg(long)]
    outpath: Option<PathBuf>,

    /// Number of meshes generated [default: 1000].
    #[arg(long)]
    count: Option<usize>,

    /// Standard deviation of randomly placed control points [default: 0.1].
    #[arg(long = "std", allow_hyphen_values = true)]
    std_dev: Option<f64>,

    /// Control points per dimension; total control points is the cube of this [default: 3].
    #[arg(long, allow_hyphen_values = true)]
    control: Option<usize>,

    /// Padding around the mesh bounds on each side [default: 0.05].
    #[arg(long, allow_hyphen_values = true)]
    margin: Option<f64>,

    /// Demo mode: don't save STLs, just show the base and the first generated meshes.
    #[arg(long)]
    demo: bool,

    /// TOML file with any of the options above. Flags given on the command line win.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write batch timing metrics to this CSV file.
    #[arg(long)]
    metrics: Option<PathBuf>,

    /// Demo mode: also write the shown meshes to this JSON file.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Suppress per-sample timing output.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Layers command-line flags over the config file (if any) and defaults.
    fn resolve(self) -> Result<(GenerationConfig, RunOptions), Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_toml_file(path)?,
            None => GenerationConfig::default(),
        };

        if let Some(mesh) = self.mesh {
            config.mesh = Some(mesh);
        }
        if let Some(outpath) = self.outpath {
            config.outpath = outpath;
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(std_dev) = self.std_dev {
            config.std_dev = std_dev;
        }
        if let Some(control) = self.control {
            config.resolution = control;
        }
        if let Some(margin) = self.margin {
            config.margin = margin;
        }
        config.demo |= self.demo;

        let options = RunOptions {
            metrics: self.metrics,
            export: self.export,
            timing_logs: !self.quiet,
        };
        Ok((config, options))
    }
}

fn init_logging(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let result = cli
        .resolve()
        .and_then(|(config, options)| commands::run(&config, &options));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> (GenerationConfig, RunOptions) {
        let cli = Cli::try_parse_from(std::iter::once("meshdr").chain(args.iter().copied()))
            .unwrap();
        cli.resolve().unwrap()
    }

    #[test]
    fn defaults_apply() {
        let (config, options) = parse(&["--mesh", "part.stl"]);
        assert_eq!(config.mesh, Some(PathBuf::from("part.stl")));
        assert_eq!(config.count, 1000);
        assert_eq!(config.resolution, 3);
        assert_eq!(config.outpath, PathBuf::from("./results"));
        assert!(!config.demo);
        assert!(options.timing_logs);
    }

    #[test]
    fn flags_map_to_config() {
        let (config, options) = parse(&[
            "--mesh", "a.stl", "--outpath", "out", "--count", "7", "--std", "0.3",
            "--control", "4", "--margin", "0.2", "--demo", "-q",
        ]);
        assert_eq!(config.outpath, PathBuf::from("out"));
        assert_eq!(config.count, 7);
        assert_eq!(config.resolution, 4);
        assert!((config.std_dev - 0.3).abs() < 1e-12);
        assert!((config.margin - 0.2).abs() < 1e-12);
        assert!(config.demo);
        assert!(!options.timing_logs);
    }

    #[test]
    fn negative_std_reaches_validation() {
        let (config, _) = parse(&["--mesh", "a.stl", "--std", "-0.5"]);
        assert!(meshdr_io::validator::validate_config(&config).is_err());
    }

    #[test]
    fn negative_count_rejected_by_parser() {
        assert!(Cli::try_parse_from(["meshdr", "--mesh", "a.stl", "--count", "-3"]).is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meshdr.toml");
        std::fs::write(&path, "mesh = \"from_file.stl\"\ncount = 50\ncontrol = 5\n").unwrap();

        let (config, _) = parse(&["--config", path.to_str().unwrap(), "--count", "9"]);
        assert_eq!(config.mesh, Some(PathBuf::from("from_file.stl")));
        assert_eq!(config.count, 9);
        assert_eq!(config.resolution, 5);
    }
}
