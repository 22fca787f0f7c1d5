//! Composite STL export.
//!
//! Produces one binary STL from the full assembly by instancing each
//! module's geometry at its committed position. A pure read of final state,
//! triggered on demand; the engine is never mutated. Modules whose geometry
//! has not loaded are exported with the placeholder cube, mirroring what
//! the renderer shows.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::assembly::Assembly;
use crate::mesh::{CubeGeometry, MeshLibrary};

fn instance_triangles(
    geometry: &CubeGeometry,
    offset: [f32; 3],
    out: &mut Vec<stl_io::Triangle>,
) {
    for triangle in &geometry.triangles {
        let vertices = triangle.vertices.map(|v| {
            stl_io::Vertex::new([v.x + offset[0], v.y + offset[1], v.z + offset[2]])
        });
        out.push(stl_io::Triangle {
            normal: stl_io::Normal::new([
                triangle.normal.x,
                triangle.normal.y,
                triangle.normal.z,
            ]),
            vertices,
        });
    }
}

/// Flattens the assembly into a single triangle soup in world space.
pub fn compose_triangles(assembly: &Assembly, meshes: &MeshLibrary) -> Vec<stl_io::Triangle> {
    let placeholder = CubeGeometry::unit_cube();
    let mut triangles = Vec::new();

    for module in assembly.modules() {
        let geometry = meshes.geometry_for(module.kind).unwrap_or(&placeholder);
        let offset = [
            module.position.x as f32,
            module.position.y as f32,
            module.position.z as f32,
        ];
        instance_triangles(geometry, offset, &mut triangles);
    }

    triangles
}

/// Serializes the assembly as binary STL to a writer.
pub fn export_stl<W: Write>(
    assembly: &Assembly,
    meshes: &MeshLibrary,
    writer: &mut W,
) -> Result<()> {
    let triangles = compose_triangles(assembly, meshes);
    stl_io::write_stl(writer, triangles.iter()).context("Failed to write STL data")?;
    info!(
        "Exported {} modules as {} triangles",
        assembly.len(),
        triangles.len()
    );
    Ok(())
}

/// Serializes the assembly as binary STL to a file.
pub fn export_stl_file(
    assembly: &Assembly,
    meshes: &MeshLibrary,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create STL file {}", path.display()))?;
    export_stl(assembly, meshes, &mut file)?;
    info!("Wrote assembly export to {}", path.display());
    Ok(())
}
