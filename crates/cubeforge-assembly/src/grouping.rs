//! Connectivity grouping.
//!
//! Partitions the assembly into connected components under spatial
//! adjacency. Groups are derived data: recomputed from scratch after every
//! structural change (add, move release, rotation step, undo, redo), never
//! persisted. Group ids are positional within one computation and carry no
//! identity across recomputations.

use cubeforge_core::{GroupId, ModuleId, Vec3, GRID_SIZE};

use crate::assembly::Assembly;

/// Adjacency predicate: distinct positions within one grid unit on every
/// axis. Inclusive, so diagonal neighbors connect.
pub fn is_adjacent(a: &Vec3, b: &Vec3) -> bool {
    if a == b {
        return false;
    }
    let diff = a.abs_diff(b);
    diff.x <= GRID_SIZE && diff.y <= GRID_SIZE && diff.z <= GRID_SIZE
}

/// A computed partition of the assembly into connected components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    members: Vec<Vec<ModuleId>>,
}

impl Groups {
    /// Number of groups in the partition.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the partition is empty (empty assembly).
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member ids of one group, in traversal order.
    pub fn members(&self, group: GroupId) -> Option<&[ModuleId]> {
        self.members.get(group.0).map(Vec::as_slice)
    }

    /// Resolves the group a module currently belongs to.
    pub fn group_of(&self, id: ModuleId) -> Option<GroupId> {
        self.members
            .iter()
            .position(|group| group.contains(&id))
            .map(GroupId)
    }

    /// Iterates the partition as (group id, members) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &[ModuleId])> {
        self.members
            .iter()
            .enumerate()
            .map(|(i, g)| (GroupId(i), g.as_slice()))
    }
}

/// Computes the connected components of the assembly.
///
/// Flood fill with an explicit stack and an index-based visited array, so
/// traversal depth is independent of component size. Every module lands in
/// exactly one group; a module with no neighbors forms a singleton.
pub fn compute_groups(assembly: &Assembly) -> Groups {
    let modules = assembly.modules();
    let n = modules.len();
    let mut visited = vec![false; n];
    let mut members = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut stack = vec![start];
        let mut group = Vec::new();

        while let Some(current) = stack.pop() {
            group.push(modules[current].id);
            for next in 0..n {
                if !visited[next]
                    && is_adjacent(&modules[current].position, &modules[next].position)
                {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }

        members.push(group);
    }

    Groups { members }
}
