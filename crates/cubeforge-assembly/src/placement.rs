//! Drop placement planning.
//!
//! Maps a raw drop position to a concrete grid cell: quantize to the base
//! grid, and if that cell is taken, try the 26 unit offsets around it in
//! randomized order. Acceptance is first-fit over the shuffled candidates,
//! not a nearest-first search.

use rand::seq::SliceRandom;
use smallvec::SmallVec;
use tracing::{debug, warn};

use cubeforge_core::{snap_to_base_grid, PlacementError, Vec3, GRID_SIZE};

use crate::assembly::Assembly;

type OffsetList = SmallVec<[(i8, i8, i8); 26]>;

fn neighbor_offsets() -> OffsetList {
    let mut offsets = OffsetList::new();
    for x in -1..=1i8 {
        for y in -1..=1i8 {
            for z in -1..=1i8 {
                if x != 0 || y != 0 || z != 0 {
                    offsets.push((x, y, z));
                }
            }
        }
    }
    offsets
}

/// Plans a grid position for a drop at `world`.
///
/// Placement is ground-constrained: the candidate built from each offset
/// displaces X and Z only, the vertical component of the offset is ignored
/// and the module stays on the base plane. Vertical structure only arises
/// later, through group rotation.
///
/// Returns the first free candidate, or [`PlacementError::NoRoomNearby`]
/// when the quantized cell and all 26 offsets are blocked. The assembly is
/// never touched; committing the returned position is the caller's job.
pub fn plan_placement(world: Vec3, assembly: &Assembly) -> Result<Vec3, PlacementError> {
    let target = snap_to_base_grid(world);
    if !assembly.collides(None, target) {
        return Ok(target);
    }

    let mut offsets = neighbor_offsets();
    offsets.shuffle(&mut rand::rng());

    for (dx, _, dz) in offsets {
        let candidate = Vec3::new(
            target.x + f64::from(dx) * GRID_SIZE,
            target.y,
            target.z + f64::from(dz) * GRID_SIZE,
        );
        if !assembly.collides(None, candidate) {
            debug!(
                "Drop cell ({}, {}, {}) occupied, placing at ({}, {}, {})",
                target.x, target.y, target.z, candidate.x, candidate.y, candidate.z
            );
            return Ok(candidate);
        }
    }

    warn!(
        "No available position near drop cell ({}, {}, {})",
        target.x, target.y, target.z
    );
    Err(PlacementError::NoRoomNearby)
}
