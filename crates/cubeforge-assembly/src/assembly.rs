//! The module collection and its occupancy predicate.

use serde::{Deserialize, Serialize};

use cubeforge_core::{Module, ModuleId, Vec3, GRID_SIZE};

/// Ordered collection of placed modules, keyed by id.
///
/// Insertion order is preserved (it is the creation order, since ids are
/// issued monotonically). The collection is a plain linear store: at the
/// assembly sizes this engine targets, every lookup and the collision scan
/// are O(n) and cheap enough for per-event invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    modules: Vec<Module>,
}

impl Assembly {
    /// Creates an empty assembly.
    pub fn new() -> Self {
        Self { modules: Vec::new() }
    }

    /// Number of placed modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the assembly holds no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// All modules in creation order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Looks up a module by id.
    pub fn get(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Whether a module with the given id exists.
    pub fn contains(&self, id: ModuleId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a module. The caller guarantees id uniqueness and a
    /// collision-free position; the store does not re-validate.
    pub fn insert(&mut self, module: Module) {
        self.modules.push(module);
    }

    /// Overwrites a module's position. Returns false if the id is unknown.
    pub fn set_position(&mut self, id: ModuleId, position: Vec3) -> bool {
        match self.modules.iter_mut().find(|m| m.id == id) {
            Some(module) => {
                module.position = position;
                true
            }
            None => false,
        }
    }

    /// Occupancy test for a candidate position.
    ///
    /// Two positions collide iff their per-axis absolute difference is
    /// strictly below one grid unit on all three axes at once. This is an
    /// AABB proximity test, not cell equality, so it stays meaningful for
    /// the fractional positions a group rotation leaves behind.
    ///
    /// `exclude`, when present, skips that module — used to test a module's
    /// own candidate position against all others.
    pub fn collides(&self, exclude: Option<ModuleId>, candidate: Vec3) -> bool {
        self.modules.iter().any(|module| {
            if Some(module.id) == exclude {
                return false;
            }
            let diff = module.position.abs_diff(&candidate);
            diff.x < GRID_SIZE && diff.y < GRID_SIZE && diff.z < GRID_SIZE
        })
    }

    /// Whether any module sits exactly on the given cell.
    ///
    /// Exact-position test used by the highlight computation, which reasons
    /// about grid cells rather than proximity.
    pub fn occupied_at(&self, cell: Vec3) -> bool {
        self.modules.iter().any(|m| m.position == cell)
    }
}
