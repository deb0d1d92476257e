//! Integration tests for meshdr-io.

use std::io::Cursor;
use std::path::PathBuf;

use meshdr_io::stl;
use meshdr_io::validator::validate_config;
use meshdr_io::{GenerationConfig, OutputDirectory};
use meshdr_mesh::generators::{cuboid, single_triangle};
use meshdr_types::MeshdrError;

// ─── STL Tests ────────────────────────────────────────────────

#[test]
fn stl_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("box.stl");
    let mesh = cuboid(1.0, 2.0, 3.0);

    stl::save(&path, &mesh).unwrap();
    let loaded = stl::load(&path).unwrap();
    assert_eq!(loaded, mesh);
}

#[test]
fn stl_stream_round_trip_keeps_corner_order() {
    let mesh = single_triangle();
    let mut buf = Vec::new();
    stl::write(&mut buf, &mesh).unwrap();
    // 80-byte header + count + one 50-byte record
    assert_eq!(buf.len(), 84 + 50);

    let loaded = stl::read(&mut Cursor::new(buf)).unwrap();
    assert_eq!(loaded.triangle(0), mesh.triangle(0));
    assert_eq!(loaded.normals[0], [0.0, 0.0, 1.0]);
}

#[test]
fn ascii_stl_is_read() {
    let text = "solid t
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid t
";
    let mesh = stl::read(&mut Cursor::new(text.as_bytes())).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
}

#[test]
fn missing_file_is_input_error() {
    let result = stl::load("/definitely/not/here.stl");
    assert!(matches!(result, Err(MeshdrError::InvalidInput(_))));
}

#[test]
fn malformed_file_error_names_path_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.stl");
    std::fs::write(&path, b"not an stl file").unwrap();

    let err = stl::load(&path).unwrap_err();
    assert!(matches!(err, MeshdrError::InvalidInput(_)));
    let message = err.to_string();
    assert!(message.contains("broken.stl"));
    assert!(message.contains("malformed STL"));
    assert_eq!(message.matches("Invalid input").count(), 1);
}

#[test]
fn empty_stl_is_input_error() {
    let mut buf = vec![0u8; 80];
    buf.extend_from_slice(&0u32.to_le_bytes());
    let result = stl::read(&mut Cursor::new(buf));
    assert!(matches!(result, Err(MeshdrError::InvalidInput(_))));
}

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn default_config() {
    let config = GenerationConfig::default();
    assert_eq!(config.count, 1000);
    assert_eq!(config.resolution, 3);
    assert!((config.std_dev - 0.1).abs() < 1e-12);
    assert_eq!(config.outpath, PathBuf::from("./results"));
    assert!(!config.demo);
    assert!(config.mesh.is_none());
}

#[test]
fn toml_uses_cli_names() {
    let config = GenerationConfig::from_toml_str(
        r#"
        mesh = "part.stl"
        count = 12
        std = 0.25
        control = 4
        "#,
    )
    .unwrap();
    assert_eq!(config.mesh, Some(PathBuf::from("part.stl")));
    assert_eq!(config.count, 12);
    assert_eq!(config.resolution, 4);
    assert!((config.std_dev - 0.25).abs() < 1e-12);
    // Unset keys keep defaults.
    assert!((config.margin - 0.05).abs() < 1e-12);
}

#[test]
fn toml_rejects_unknown_keys() {
    let result = GenerationConfig::from_toml_str("stdev = 0.2");
    assert!(matches!(result, Err(MeshdrError::Serialization(_))));
}

#[test]
fn toml_rejects_negative_count() {
    assert!(GenerationConfig::from_toml_str("count = -1").is_err());
}

#[test]
fn toml_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meshdr.toml");
    std::fs::write(&path, "demo = true\n").unwrap();
    let config = GenerationConfig::from_toml_file(&path).unwrap();
    assert!(config.demo);
}

// ─── Validator Tests ──────────────────────────────────────────

fn make_valid_config() -> GenerationConfig {
    GenerationConfig {
        mesh: Some(PathBuf::from("base.stl")),
        ..Default::default()
    }
}

#[test]
fn valid_config_passes() {
    assert!(validate_config(&make_valid_config()).is_ok());
}

#[test]
fn missing_mesh_rejected() {
    let config = GenerationConfig::default();
    assert!(matches!(
        validate_config(&config),
        Err(MeshdrError::InvalidConfig(_))
    ));
}

#[test]
fn zero_resolution_rejected() {
    let mut config = make_valid_config();
    config.resolution = 0;
    assert!(validate_config(&config).is_err());
}

#[test]
fn negative_std_rejected() {
    let mut config = make_valid_config();
    config.std_dev = -0.01;
    assert!(validate_config(&config).is_err());
    config.std_dev = f64::INFINITY;
    assert!(validate_config(&config).is_err());
}

#[test]
fn negative_margin_rejected() {
    let mut config = make_valid_config();
    config.margin = -1.0;
    assert!(validate_config(&config).is_err());
}

#[test]
fn zero_std_and_count_allowed() {
    let mut config = make_valid_config();
    config.std_dev = 0.0;
    config.count = 0;
    assert!(validate_config(&config).is_ok());
}

// ─── Output Tests ─────────────────────────────────────────────

#[test]
fn output_directory_created_recursively() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let out = OutputDirectory::create(&nested).unwrap();
    assert!(nested.is_dir());
    assert!(out.root().is_absolute());
}

#[test]
fn existing_output_directory_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    assert!(OutputDirectory::create(dir.path()).is_ok());
    assert!(OutputDirectory::create(dir.path()).is_ok());
}

#[test]
fn sample_paths_are_zero_based() {
    let dir = tempfile::tempdir().unwrap();
    let out = OutputDirectory::create(dir.path()).unwrap();
    assert_eq!(OutputDirectory::file_name(0), "result_0.stl");
    assert_eq!(out.sample_path(17).file_name().unwrap(), "result_17.stl");
}
