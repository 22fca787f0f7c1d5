//! # Cubeforge Assembly
//!
//! The spatial assembly engine: cube modules placed on a 3D integer grid,
//! collision-checked, clustered into rigid groups by spatial adjacency,
//! rotated as groups about their centroid, with linear undo/redo over
//! whole-state snapshots.
//!
//! ## Core Components
//!
//! - **Assembly**: the ordered module collection and its occupancy test
//! - **Placement**: drop quantization and the randomized nearby-cell search
//! - **Grouping**: connected components under inclusive unit adjacency
//! - **Transform**: rigid yaw/pitch rotation about a group centroid
//! - **State**: the single authoritative owner committing every mutation
//!   and snapshotting it to history
//! - **Highlight**: free adjacent cells as a drop hint for the renderer
//! - **Mesh / Export**: named STL geometries and composite STL export
//!
//! ## Architecture
//!
//! ```text
//! Intent (drop, drag, rotate, undo, redo)
//!   └── AssemblyState
//!         ├── Placement / Transform  (compute candidate state)
//!         ├── Assembly::collides     (validate)
//!         ├── History                (commit snapshot)
//!         └── Grouping               (recompute components)
//!
//! RenderFrame (modules + highlights)  ← read-only view per frame
//! MeshLibrary → Export                ← composite STL on demand
//! ```
//!
//! Everything runs synchronously on the event thread; a commit and its
//! group recomputation are atomic with respect to the triggering intent.
//!
//! ## Usage
//!
//! ```rust
//! use cubeforge_assembly::AssemblyState;
//! use cubeforge_core::{ModuleKind, Vec3};
//!
//! let mut state = AssemblyState::new();
//! let id = state.add_module(Vec3::new(0.2, 0.0, -0.3), 0, ModuleKind::Default)?;
//! assert_eq!(state.assembly().get(id).unwrap().position, Vec3::new(0.0, 0.0, 0.0));
//! # Ok::<(), cubeforge_core::PlacementError>(())
//! ```

pub mod assembly;
pub mod export;
pub mod grouping;
pub mod highlight;
pub mod mesh;
pub mod placement;
pub mod render;
pub mod state;
pub mod transform;

pub use assembly::Assembly;
pub use export::{compose_triangles, export_stl, export_stl_file};
pub use grouping::{compute_groups, is_adjacent, Groups};
pub use highlight::highlight_cells;
pub use mesh::{CubeGeometry, MeshLibrary, Triangle3, STANDARD_GEOMETRIES, STL_IMPORT_SCALE};
pub use placement::plan_placement;
pub use render::{render_frame, GeometrySelector, RenderFrame, RenderModule};
pub use state::{AssemblyState, MoveOutcome};
pub use transform::{gesture_angles, incremental_rotation, rotate_rigid, ROTATE_SENSITIVITY};
