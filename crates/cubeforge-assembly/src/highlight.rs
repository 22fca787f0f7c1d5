//! Placement highlight cells.
//!
//! A derived rendering hint: the free base-plane cells laterally adjacent
//! (±X, ±Z) to occupied positions, where a hover drop would attach. Carries
//! no state of its own; recomputed from the assembly on demand.

use cubeforge_core::{Vec3, BASE_PLANE_Y, GRID_SIZE};

use crate::assembly::Assembly;

/// Computes the highlight cells for the current assembly.
///
/// Candidates are generated on the base plane regardless of a module's own
/// height, occupancy is an exact cell test, and duplicates shared between
/// neighboring modules are emitted once.
pub fn highlight_cells(assembly: &Assembly) -> Vec<Vec3> {
    let mut cells: Vec<Vec3> = Vec::new();

    for module in assembly.modules() {
        let p = module.position;
        let neighbors = [
            Vec3::new(p.x + GRID_SIZE, BASE_PLANE_Y, p.z),
            Vec3::new(p.x - GRID_SIZE, BASE_PLANE_Y, p.z),
            Vec3::new(p.x, BASE_PLANE_Y, p.z + GRID_SIZE),
            Vec3::new(p.x, BASE_PLANE_Y, p.z - GRID_SIZE),
        ];

        for cell in neighbors {
            if !assembly.occupied_at(cell) && !cells.contains(&cell) {
                cells.push(cell);
            }
        }
    }

    cells
}
