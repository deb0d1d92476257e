//! STL mesh I/O.
//!
//! Reads binary and ASCII STL, writes binary STL. Triangle order and
//! per-triangle corner order are preserved in both directions.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use meshdr_mesh::TriangleMesh;
use meshdr_types::{MeshdrError, MeshdrResult};
use stl_io::{Normal, Triangle, Vertex};

/// Loads a triangle mesh from an STL file.
///
/// A missing, unreadable, malformed, or empty file is an
/// `InvalidInput` error.
pub fn load(path: impl AsRef<Path>) -> MeshdrResult<TriangleMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        MeshdrError::InvalidInput(format!("cannot open {}: {e}", path.display()))
    })?;
    let mut reader = BufReader::new(file);
    let mesh = read(&mut reader).map_err(|e| match e {
        MeshdrError::InvalidInput(msg) => {
            MeshdrError::InvalidInput(format!("{}: {msg}", path.display()))
        }
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        triangles = mesh.triangle_count(),
        "loaded mesh"
    );
    Ok(mesh)
}

/// Reads a triangle mesh from an STL stream.
pub fn read<R: Read + Seek>(reader: &mut R) -> MeshdrResult<TriangleMesh> {
    let indexed = stl_io::read_stl(reader)
        .map_err(|e| MeshdrError::InvalidInput(format!("malformed STL: {e}")))?;

    let mut mesh = TriangleMesh::with_capacity(indexed.faces.len());
    for face in &indexed.faces {
        let corners = face.vertices.map(|v| indexed.vertices[v].0);
        mesh.push_triangle(corners, face.normal.0);
    }

    if mesh.is_empty() {
        return Err(MeshdrError::InvalidInput("STL contains no triangles".into()));
    }
    mesh.validate()?;
    Ok(mesh)
}

/// Saves a triangle mesh as binary STL, replacing any existing file.
pub fn save(path: impl AsRef<Path>, mesh: &TriangleMesh) -> MeshdrResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, mesh)?;
    writer.flush()?;
    Ok(())
}

/// Writes a triangle mesh as binary STL.
pub fn write<W: Write>(writer: &mut W, mesh: &TriangleMesh) -> MeshdrResult<()> {
    let triangles: Vec<Triangle> = (0..mesh.triangle_count())
        .map(|t| Triangle {
            normal: Normal::new(mesh.normals[t]),
            vertices: mesh.triangle(t).map(Vertex::new),
        })
        .collect();
    stl_io::write_stl(writer, triangles.iter())?;
    Ok(())
}
