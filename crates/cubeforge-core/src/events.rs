//! Input intents consumed by the engine.
//!
//! The UI layer (pointer handlers, drag-and-drop plumbing, toolbar buttons)
//! is outside the engine; everything it can ask for arrives as one of these
//! intents, and every intent resolves synchronously to an [`IntentOutcome`].
//! The renderer never mutates state directly.

use serde::{Deserialize, Serialize};

use crate::data::{CatalogEntry, GroupId, ModuleId};
use crate::geometry::Vec3;

/// Accumulated 2D pointer displacement driving a rotation gesture, in
/// normalized device units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerDelta {
    pub x: f64,
    pub y: f64,
}

impl PointerDelta {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An abstracted input event the engine consumes to decide a state
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Intent {
    /// A palette component was dropped at a world position.
    Drop { world: Vec3, item: CatalogEntry },
    /// An in-progress drag moved over a new world position.
    DragMove { id: ModuleId, world: Vec3 },
    /// An in-progress drag released.
    DragRelease { id: ModuleId },
    /// A rotation gesture step on a group.
    RotateGesture { group: GroupId, delta: PointerDelta },
    /// Step the history cursor back.
    Undo,
    /// Step the history cursor forward.
    Redo,
}

/// What an intent did to the engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentOutcome {
    /// A new module was placed and committed.
    Placed(ModuleId),
    /// An existing mutation was committed (move release, rotation step,
    /// undo, redo).
    Committed,
    /// No free cell near the drop point. Reported to the user; state
    /// unchanged.
    RejectedPlacement,
    /// The release target collided; the module reverted to its committed
    /// position silently. No history entry.
    RejectedMove,
    /// The intent had no effect (undo at the start of history, redo at the
    /// end, drag update on a blocked cell, unknown module or group).
    NoOp,
}

impl IntentOutcome {
    /// Whether the intent produced a new history entry.
    pub fn committed(&self) -> bool {
        matches!(self, IntentOutcome::Placed(_) | IntentOutcome::Committed)
    }
}
