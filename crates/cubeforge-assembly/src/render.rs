//! Render boundary.
//!
//! The scene collaborator reads one [`RenderFrame`] per frame and has no
//! other access to engine state. The frame is plain data (serializable, no
//! engine references), so a host can hand it across a process or FFI
//! boundary unchanged.

use serde::Serialize;

use cubeforge_core::{palette_color, ModuleId, Vec3};

use crate::mesh::MeshLibrary;
use crate::state::AssemblyState;

/// Which geometry the renderer should instance for a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GeometrySelector {
    /// A loaded named geometry from the mesh library.
    Named(&'static str),
    /// Geometry not yet loaded; render the primitive placeholder cube.
    Placeholder,
}

/// One module as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderModule {
    pub id: ModuleId,
    /// Committed position, or the live drag candidate while this module is
    /// being dragged.
    pub position: Vec3,
    pub color: &'static str,
    pub geometry: GeometrySelector,
}

/// Everything the scene collaborator needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub modules: Vec<RenderModule>,
    pub highlights: Vec<Vec3>,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Builds the frame view of the current state.
pub fn render_frame(state: &AssemblyState, meshes: &MeshLibrary) -> RenderFrame {
    let modules = state
        .assembly()
        .modules()
        .iter()
        .map(|module| {
            let geometry = if meshes.geometry_for(module.kind).is_some() {
                GeometrySelector::Named(module.kind.geometry_name())
            } else {
                GeometrySelector::Placeholder
            };
            RenderModule {
                id: module.id,
                position: state.drag_candidate(module.id).unwrap_or(module.position),
                color: palette_color(module.color_index),
                geometry,
            }
        })
        .collect();

    RenderFrame {
        modules,
        highlights: state.highlights(),
        can_undo: state.can_undo(),
        can_redo: state.can_redo(),
    }
}
