//! # Cubeforge Core
//!
//! Core types, errors, and input events for the Cubeforge assembly engine.
//! Provides the fundamental data model shared between the engine and its
//! collaborators: module identity and placement data, the component catalog,
//! grid geometry helpers, and the intent vocabulary the UI speaks.

pub mod data;
pub mod error;
pub mod events;
pub mod geometry;

pub use data::{
    catalog_entry, palette_color, CatalogEntry, Category, GroupId, Module, ModuleId, ModuleKind,
    CATALOG, PALETTE,
};
pub use error::{AssemblyError, Error, MeshError, PlacementError, Result};
pub use events::{Intent, IntentOutcome, PointerDelta};
pub use geometry::{centroid, snap_to_base_grid, snap_xz, Vec3, BASE_PLANE_Y, GRID_SIZE};
