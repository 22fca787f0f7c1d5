//! Assembly state and history.
//!
//! `AssemblyState` is the single authoritative owner of the mutable model:
//! the module collection, the derived grouping, the undo/redo history, and
//! any in-progress drag. All mutations are committed here and nowhere else,
//! synchronously within the triggering input event, so the renderer never
//! observes a partially applied change.
//!
//! History is a linear sequence of whole-assembly snapshots plus a cursor.
//! Every commit truncates redoable entries past the cursor, then appends a
//! fresh snapshot. The initial empty assembly is never snapshotted, so undo
//! bottoms out at the first committed state.

use tracing::debug;

use cubeforge_core::{
    snap_xz, AssemblyError, CatalogEntry, GroupId, Intent, IntentOutcome, Module, ModuleId,
    ModuleKind, PlacementError, PointerDelta, Vec3,
};

use crate::assembly::Assembly;
use crate::grouping::{compute_groups, Groups};
use crate::highlight::highlight_cells;
use crate::placement::plan_placement;
use crate::transform::{gesture_angles, rotate_rigid};

/// Result of a move commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and a snapshot was pushed.
    Committed,
    /// The candidate collided; state and history are unchanged. This is a
    /// silent refusal, not a reported error.
    Rejected,
}

#[derive(Debug, Clone)]
struct DragSession {
    id: ModuleId,
    /// Last collision-free candidate position. Lives only here until
    /// release; the assembly keeps the committed position throughout.
    candidate: Vec3,
}

/// The authoritative assembly model with undo/redo history.
#[derive(Debug, Clone, Default)]
pub struct AssemblyState {
    assembly: Assembly,
    groups: Groups,
    history: Vec<Assembly>,
    cursor: usize,
    next_id: u64,
    drag: Option<DragSession>,
}

impl AssemblyState {
    /// Creates an empty state with empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current committed assembly.
    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }

    /// The current grouping, recomputed at the last commit.
    pub fn groups(&self) -> &Groups {
        &self.groups
    }

    /// The current highlight cells, derived on demand.
    pub fn highlights(&self) -> Vec<Vec3> {
        highlight_cells(&self.assembly)
    }

    /// Number of snapshots in history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether undo would change state.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty() && self.cursor > 0
    }

    /// Whether redo would change state.
    pub fn can_redo(&self) -> bool {
        !self.history.is_empty() && self.cursor + 1 < self.history.len()
    }

    /// The candidate position of an in-progress drag, if one is active.
    pub fn drag_candidate(&self, id: ModuleId) -> Option<Vec3> {
        self.drag
            .as_ref()
            .filter(|session| session.id == id)
            .map(|session| session.candidate)
    }

    /// Commits the current assembly as a new snapshot: truncate everything
    /// past the cursor, append, recompute groups.
    fn commit(&mut self) {
        if !self.history.is_empty() {
            self.history.truncate(self.cursor + 1);
        }
        self.history.push(self.assembly.clone());
        self.cursor = self.history.len() - 1;
        self.groups = compute_groups(&self.assembly);
        debug!(
            "Committed snapshot {} ({} modules, {} groups)",
            self.cursor,
            self.assembly.len(),
            self.groups.len()
        );
    }

    /// Places a new module near the drop position.
    ///
    /// Plans a free cell per the placement search; on success the module is
    /// created with the next monotonic id and the state is committed. On
    /// [`PlacementError::NoRoomNearby`] nothing changes; the caller reports
    /// the rejection to the user.
    pub fn add_module(
        &mut self,
        world: Vec3,
        color_index: usize,
        kind: ModuleKind,
    ) -> Result<ModuleId, PlacementError> {
        let position = plan_placement(world, &self.assembly)?;
        let id = ModuleId(self.next_id);
        self.next_id += 1;
        self.assembly.insert(Module {
            id,
            position,
            color_index,
            kind,
        });
        self.commit();
        Ok(id)
    }

    /// Places a module from a palette catalog entry.
    pub fn add_from_catalog(
        &mut self,
        world: Vec3,
        entry: CatalogEntry,
    ) -> Result<ModuleId, PlacementError> {
        self.add_module(world, entry.color_index(), entry.kind)
    }

    /// Commits a module move to a candidate position.
    ///
    /// Rejects as a silent no-op when the candidate collides with any other
    /// module: no state change, no history entry. A committed move pushes a
    /// snapshot even when the position is unchanged, matching release
    /// semantics (every completed drag commits).
    pub fn move_module(
        &mut self,
        id: ModuleId,
        candidate: Vec3,
    ) -> Result<MoveOutcome, AssemblyError> {
        if !self.assembly.contains(id) {
            return Err(AssemblyError::UnknownModule { id: id.0 });
        }
        if self.assembly.collides(Some(id), candidate) {
            debug!("Move of {} rejected, candidate collides", id);
            return Ok(MoveOutcome::Rejected);
        }
        self.assembly.set_position(id, candidate);
        self.commit();
        Ok(MoveOutcome::Committed)
    }

    /// Rotates a group rigidly about its centroid by the given incremental
    /// yaw and pitch, committing a snapshot for this step.
    ///
    /// Called once per gesture step; successive steps each commit, so a
    /// continuous drag produces a run of near-duplicate snapshots. The
    /// resulting positions are not re-snapped to the grid.
    pub fn rotate_group(
        &mut self,
        group: GroupId,
        yaw: f64,
        pitch: f64,
    ) -> Result<(), AssemblyError> {
        let members: Vec<ModuleId> = self
            .groups
            .members(group)
            .ok_or(AssemblyError::UnknownGroup { id: group.0 })?
            .to_vec();

        let positions: Vec<Vec3> = members
            .iter()
            .filter_map(|id| self.assembly.get(*id).map(|m| m.position))
            .collect();
        let rotated = rotate_rigid(&positions, yaw, pitch);

        for (id, position) in members.iter().zip(rotated) {
            self.assembly.set_position(*id, position);
        }
        self.commit();
        Ok(())
    }

    /// Rotates a group from a pointer gesture step, applying the fixed
    /// sensitivity scaling.
    pub fn rotate_group_gesture(
        &mut self,
        group: GroupId,
        delta: PointerDelta,
    ) -> Result<(), AssemblyError> {
        let (yaw, pitch) = gesture_angles(delta);
        self.rotate_group(group, yaw, pitch)
    }

    /// Steps the history cursor back one snapshot. No-op at the start.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.drag = None;
        self.cursor -= 1;
        self.assembly = self.history[self.cursor].clone();
        self.groups = compute_groups(&self.assembly);
        debug!("Undo to snapshot {}", self.cursor);
        true
    }

    /// Steps the history cursor forward one snapshot. No-op at the end.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.drag = None;
        self.cursor += 1;
        self.assembly = self.history[self.cursor].clone();
        self.groups = compute_groups(&self.assembly);
        debug!("Redo to snapshot {}", self.cursor);
        true
    }

    /// Starts a drag on a module. The session candidate begins at the
    /// committed position.
    pub fn begin_drag(&mut self, id: ModuleId) -> Result<(), AssemblyError> {
        let module = self
            .assembly
            .get(id)
            .ok_or(AssemblyError::UnknownModule { id: id.0 })?;
        self.drag = Some(DragSession {
            id,
            candidate: module.position,
        });
        Ok(())
    }

    /// Advances an in-progress drag toward a world position.
    ///
    /// The candidate snaps X and Z to the grid and keeps the session's
    /// current height. It only advances when the snapped cell is free of
    /// collisions with other modules; a blocked cell leaves the candidate
    /// where it was. The committed assembly is untouched either way.
    ///
    /// Starts a session implicitly if none is active for this module.
    pub fn drag_to(&mut self, id: ModuleId, world: Vec3) -> Result<bool, AssemblyError> {
        if self.drag.as_ref().map(|s| s.id) != Some(id) {
            self.begin_drag(id)?;
        }
        let current = match self.drag.as_ref() {
            Some(session) => session.candidate,
            None => return Ok(false),
        };
        let candidate = snap_xz(Vec3::new(world.x, current.y, world.z));
        if self.assembly.collides(Some(id), candidate) {
            return Ok(false);
        }
        if let Some(session) = self.drag.as_mut() {
            session.candidate = candidate;
        }
        Ok(true)
    }

    /// Releases an in-progress drag, committing the candidate through
    /// [`Self::move_module`]. Without an active session this is a no-op.
    pub fn release_drag(&mut self, id: ModuleId) -> Result<Option<MoveOutcome>, AssemblyError> {
        let Some(session) = self.drag.take() else {
            return Ok(None);
        };
        if session.id != id {
            self.drag = Some(session);
            return Ok(None);
        }
        let candidate = snap_xz(session.candidate);
        self.move_module(id, candidate).map(Some)
    }

    /// Aborts an in-progress drag (pointer left the surface). The assembly
    /// stays in the last committed state.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Dispatches an abstract input intent to the matching operation.
    ///
    /// Unknown module or group ids resolve to [`IntentOutcome::NoOp`]: with
    /// group ids unstable across recomputations, a stale intent from the UI
    /// is expected traffic, not an error.
    pub fn apply(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::Drop { world, item } => match self.add_from_catalog(world, item) {
                Ok(id) => IntentOutcome::Placed(id),
                Err(PlacementError::NoRoomNearby) => IntentOutcome::RejectedPlacement,
            },
            Intent::DragMove { id, world } => {
                // Per-frame candidate feedback only; never commits.
                let _ = self.drag_to(id, world);
                IntentOutcome::NoOp
            }
            Intent::DragRelease { id } => match self.release_drag(id) {
                Ok(Some(MoveOutcome::Committed)) => IntentOutcome::Committed,
                Ok(Some(MoveOutcome::Rejected)) => IntentOutcome::RejectedMove,
                Ok(None) | Err(_) => IntentOutcome::NoOp,
            },
            Intent::RotateGesture { group, delta } => {
                match self.rotate_group_gesture(group, delta) {
                    Ok(()) => IntentOutcome::Committed,
                    Err(_) => IntentOutcome::NoOp,
                }
            }
            Intent::Undo => {
                if self.undo() {
                    IntentOutcome::Committed
                } else {
                    IntentOutcome::NoOp
                }
            }
            Intent::Redo => {
                if self.redo() {
                    IntentOutcome::Committed
                } else {
                    IntentOutcome::NoOp
                }
            }
        }
    }
}
