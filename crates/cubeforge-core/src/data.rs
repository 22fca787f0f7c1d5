//! Data models for modules, the color palette, and the component catalog
//!
//! This module provides:
//! - Module identity and placement data (the engine's unit of state)
//! - Geometry kinds for mesh selection (default / male / female connectors)
//! - The fixed render color palette
//! - The component catalog backing the palette UI (names and categories)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Vec3;

/// Fixed render palette. Modules carry an index into this table; the index
/// is derived from the catalog id at drop time and never changes afterwards.
pub const PALETTE: [&str; 10] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#008080",
];

/// Returns the palette color for a module's color index.
pub fn palette_color(color_index: usize) -> &'static str {
    PALETTE[color_index % PALETTE.len()]
}

/// Stable, globally unique module identity.
///
/// Ids are issued monotonically by the assembly store and are never reused,
/// so ordering by id is ordering by creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleId(pub u64);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module-{}", self.0)
    }
}

/// Handle to one connected component in the current grouping.
///
/// Group ids are positional within a single grouping computation and are not
/// stable across recomputations; resolve a module's current group by
/// membership lookup, never by caching one of these across a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub usize);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group-{}", self.0)
    }
}

/// Geometry kind of a module, selecting which named mesh renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModuleKind {
    /// Plain cube body
    #[default]
    Default,
    /// Male connector body
    Male,
    /// Female connector body
    Female,
}

impl ModuleKind {
    /// Name of the mesh geometry this kind renders with.
    pub fn geometry_name(&self) -> &'static str {
        match self {
            ModuleKind::Default => "default",
            ModuleKind::Male => "male",
            ModuleKind::Female => "female",
        }
    }
}

/// A single placed cube instance.
///
/// Position is real-valued: grid-aligned when placed or dragged, fractional
/// after a group rotation. Modules are never destroyed; only their position
/// mutates after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub position: Vec3,
    pub color_index: usize,
    pub kind: ModuleKind,
}

/// Functional category a catalog component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Power,
    Input,
    Output,
    Logic,
    Accessory,
    Connectors,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Power => write!(f, "Power"),
            Category::Input => write!(f, "Input"),
            Category::Output => write!(f, "Output"),
            Category::Logic => write!(f, "Logic"),
            Category::Accessory => write!(f, "Accessory"),
            Category::Connectors => write!(f, "Connectors"),
        }
    }
}

/// One component in the palette the user drags modules from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: &'static str,
    pub category: Category,
    pub kind: ModuleKind,
}

impl CatalogEntry {
    /// Palette color index a module created from this entry gets.
    pub fn color_index(&self) -> usize {
        self.id as usize % PALETTE.len()
    }
}

/// The component catalog. Everything renders as the default cube body except
/// the two connector entries, which carry their own geometry.
pub const CATALOG: [CatalogEntry; 19] = [
    CatalogEntry { id: 1, name: "Power", category: Category::Power, kind: ModuleKind::Default },
    CatalogEntry { id: 2, name: "Battery", category: Category::Power, kind: ModuleKind::Default },
    CatalogEntry { id: 3, name: "LED", category: Category::Output, kind: ModuleKind::Default },
    CatalogEntry { id: 4, name: "IR", category: Category::Input, kind: ModuleKind::Default },
    CatalogEntry { id: 5, name: "Switch", category: Category::Input, kind: ModuleKind::Default },
    CatalogEntry { id: 6, name: "LDR", category: Category::Input, kind: ModuleKind::Default },
    CatalogEntry { id: 7, name: "Speaker", category: Category::Output, kind: ModuleKind::Default },
    CatalogEntry { id: 8, name: "AND", category: Category::Logic, kind: ModuleKind::Default },
    CatalogEntry { id: 9, name: "OR", category: Category::Logic, kind: ModuleKind::Default },
    CatalogEntry { id: 10, name: "NOT", category: Category::Logic, kind: ModuleKind::Default },
    CatalogEntry { id: 11, name: "Input", category: Category::Input, kind: ModuleKind::Default },
    CatalogEntry { id: 12, name: "Wires", category: Category::Accessory, kind: ModuleKind::Default },
    CatalogEntry { id: 13, name: "Touch", category: Category::Input, kind: ModuleKind::Default },
    CatalogEntry { id: 14, name: "Potentiometer", category: Category::Input, kind: ModuleKind::Default },
    CatalogEntry { id: 15, name: "IC", category: Category::Accessory, kind: ModuleKind::Default },
    CatalogEntry { id: 16, name: "DC", category: Category::Power, kind: ModuleKind::Default },
    CatalogEntry { id: 17, name: "Servo", category: Category::Output, kind: ModuleKind::Default },
    CatalogEntry { id: 18, name: "Male", category: Category::Connectors, kind: ModuleKind::Male },
    CatalogEntry { id: 19, name: "Female", category: Category::Connectors, kind: ModuleKind::Female },
];

/// Looks up a catalog entry by id.
pub fn catalog_entry(id: u32) -> Option<CatalogEntry> {
    CATALOG.iter().find(|entry| entry.id == id).copied()
}
