//! # Mesh Library
//!
//! Named STL geometries backing module rendering and export.
//!
//! Geometries are loaded asynchronously by the host before interactive
//! editing matters; the engine only observes whether a name is present.
//! A missing geometry is a degraded-rendering state, never an error: the
//! renderer and exporter fall back to a placeholder unit cube.

use nalgebra::{Point3, Vector3};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

use cubeforge_core::{MeshError, ModuleKind};

/// Imported STL models are authored in millimeters for a 30 mm cube body;
/// this scale brings them to one grid unit.
pub const STL_IMPORT_SCALE: f32 = 1.0 / 30.0;

/// The geometry names every standard module kind resolves to.
pub const STANDARD_GEOMETRIES: [&str; 3] = ["default", "male", "female"];

/// A 3D triangle made up of three vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle3 {
    pub vertices: [Point3<f32>; 3],
    pub normal: Vector3<f32>,
}

impl Triangle3 {
    pub fn new(v1: Point3<f32>, v2: Point3<f32>, v3: Point3<f32>) -> Self {
        // Calculate normal using cross product
        let edge1 = v2 - v1;
        let edge2 = v3 - v1;
        let normal = edge1.cross(&edge2).normalize();

        Self {
            vertices: [v1, v2, v3],
            normal,
        }
    }
}

/// A triangle mesh for one module geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeGeometry {
    pub triangles: Vec<Triangle3>,
    pub bounds_min: Point3<f32>,
    pub bounds_max: Point3<f32>,
}

impl CubeGeometry {
    pub fn new(triangles: Vec<Triangle3>) -> Self {
        let mut geometry = Self {
            triangles,
            bounds_min: Point3::new(0.0, 0.0, 0.0),
            bounds_max: Point3::new(0.0, 0.0, 0.0),
        };
        geometry.calculate_bounds();
        geometry
    }

    /// Converts an indexed STL mesh to triangle form.
    pub fn from_stl_mesh(stl_mesh: &stl_io::IndexedMesh) -> Self {
        let mut triangles = Vec::new();

        for face in &stl_mesh.faces {
            let v1_idx = face.vertices[0];
            let v2_idx = face.vertices[1];
            let v3_idx = face.vertices[2];

            if v1_idx < stl_mesh.vertices.len()
                && v2_idx < stl_mesh.vertices.len()
                && v3_idx < stl_mesh.vertices.len()
            {
                let v1 = stl_mesh.vertices[v1_idx];
                let v2 = stl_mesh.vertices[v2_idx];
                let v3 = stl_mesh.vertices[v3_idx];

                triangles.push(Triangle3::new(
                    Point3::new(v1[0], v1[1], v1[2]),
                    Point3::new(v2[0], v2[1], v2[2]),
                    Point3::new(v3[0], v3[1], v3[2]),
                ));
            }
        }

        Self::new(triangles)
    }

    /// The placeholder body: a unit cube centered at the origin, used when
    /// a named geometry has not been loaded.
    pub fn unit_cube() -> Self {
        let p = |x: f32, y: f32, z: f32| Point3::new(x, y, z);
        let h = 0.5;
        // Six faces, two triangles each, outward winding.
        let quads: [[Point3<f32>; 4]; 6] = [
            [p(-h, -h, h), p(h, -h, h), p(h, h, h), p(-h, h, h)], // +Z
            [p(h, -h, -h), p(-h, -h, -h), p(-h, h, -h), p(h, h, -h)], // -Z
            [p(h, -h, h), p(h, -h, -h), p(h, h, -h), p(h, h, h)], // +X
            [p(-h, -h, -h), p(-h, -h, h), p(-h, h, h), p(-h, h, -h)], // -X
            [p(-h, h, h), p(h, h, h), p(h, h, -h), p(-h, h, -h)], // +Y
            [p(-h, -h, -h), p(h, -h, -h), p(h, -h, h), p(-h, -h, h)], // -Y
        ];

        let mut triangles = Vec::with_capacity(12);
        for [a, b, c, d] in quads {
            triangles.push(Triangle3::new(a, b, c));
            triangles.push(Triangle3::new(a, c, d));
        }
        Self::new(triangles)
    }

    fn calculate_bounds(&mut self) {
        if self.triangles.is_empty() {
            return;
        }

        let mut min = self.triangles[0].vertices[0];
        let mut max = min;
        for triangle in &self.triangles {
            for vertex in &triangle.vertices {
                min.x = min.x.min(vertex.x);
                min.y = min.y.min(vertex.y);
                min.z = min.z.min(vertex.z);
                max.x = max.x.max(vertex.x);
                max.y = max.y.max(vertex.y);
                max.z = max.z.max(vertex.z);
            }
        }

        self.bounds_min = min;
        self.bounds_max = max;
    }

    /// Uniformly scales all vertices about the origin.
    pub fn scale(&mut self, factor: f32) {
        for triangle in &mut self.triangles {
            for vertex in &mut triangle.vertices {
                vertex.x *= factor;
                vertex.y *= factor;
                vertex.z *= factor;
            }
        }
        self.calculate_bounds();
    }

    /// Translates the mesh so its bounding box is centered at the origin.
    pub fn center(&mut self) {
        let offset = Vector3::new(
            (self.bounds_min.x + self.bounds_max.x) / 2.0,
            (self.bounds_min.y + self.bounds_max.y) / 2.0,
            (self.bounds_min.z + self.bounds_max.z) / 2.0,
        );
        for triangle in &mut self.triangles {
            for vertex in &mut triangle.vertices {
                *vertex -= offset;
            }
        }
        self.calculate_bounds();
    }
}

/// Named geometry store supplying the renderer and exporter.
#[derive(Debug, Clone, Default)]
pub struct MeshLibrary {
    geometries: HashMap<String, CubeGeometry>,
}

impl MeshLibrary {
    /// Creates an empty library. Everything renders as the placeholder cube
    /// until geometries are loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a geometry under a name, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, geometry: CubeGeometry) {
        self.geometries.insert(name.into(), geometry);
    }

    /// Loads a named geometry from an STL file, centered and scaled to grid
    /// units like every imported module body.
    pub fn load_stl_file(
        &mut self,
        name: &str,
        path: impl AsRef<Path>,
    ) -> Result<(), MeshError> {
        let path = path.as_ref();
        debug!("Importing STL geometry '{}' from {}", name, path.display());

        let mut file = std::fs::File::open(path).map_err(|source| MeshError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let stl = stl_io::read_stl(&mut file).map_err(|e| MeshError::Parse {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        self.install(name, &stl);
        Ok(())
    }

    /// Loads a named geometry from in-memory binary STL data.
    pub fn load_stl_data(&mut self, name: &str, data: &[u8]) -> Result<(), MeshError> {
        debug!(
            "Importing STL geometry '{}' from binary data ({} bytes)",
            name,
            data.len()
        );

        let mut cursor = Cursor::new(data);
        let stl = stl_io::read_stl(&mut cursor).map_err(|e| MeshError::Parse {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        self.install(name, &stl);
        Ok(())
    }

    fn install(&mut self, name: &str, stl: &stl_io::IndexedMesh) {
        let mut geometry = CubeGeometry::from_stl_mesh(stl);
        debug!("Geometry '{}' has {} triangles", name, geometry.triangles.len());
        geometry.center();
        geometry.scale(STL_IMPORT_SCALE);
        self.geometries.insert(name.to_string(), geometry);
    }

    /// Looks up a geometry by name.
    pub fn get(&self, name: &str) -> Option<&CubeGeometry> {
        self.geometries.get(name)
    }

    /// Whether a geometry is loaded under the given name.
    pub fn has(&self, name: &str) -> bool {
        self.geometries.contains_key(name)
    }

    /// Resolves the loaded geometry for a module kind, if any.
    pub fn geometry_for(&self, kind: ModuleKind) -> Option<&CubeGeometry> {
        self.get(kind.geometry_name())
    }

    /// Whether every standard module kind has its geometry loaded.
    pub fn is_ready(&self) -> bool {
        STANDARD_GEOMETRIES.iter().all(|name| self.has(name))
    }
}
