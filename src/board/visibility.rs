//! Visibility resolution through the ring stack.
//!
//! A viewer looking straight down at a (disk, absolute sector) cell sees
//! the topmost layer that is opaque there. Each ring is checked in its own
//! rotated frame: the absolute sector is rotated back by the ring's angle
//! to find which ring-relative cell currently sits over the position.

use super::catalog;
use super::sector::{Disk, RingLevel, RotationState, Sector};

/// Returns the layer a top-down viewer actually sees at the given board
/// position. Rings are checked topmost first; the first one that covers
/// the disk and is not hollow at the position wins. Disks outside every
/// ring's jurisdiction (D and E) always resolve to the base.
pub fn visible_level(disk: Disk, absolute_sector: Sector, rotation: &RotationState) -> RingLevel {
    for ring in RingLevel::Base.rings_above() {
        if !ring.covers(disk) {
            continue;
        }
        let relative = absolute_sector.rotate(-rotation.angle(*ring));
        if !catalog::is_hollow(*ring, disk, relative) {
            return *ring;
        }
    }
    RingLevel::Base
}

/// Returns true if an object known to sit at `level` is currently hidden
/// by some ring stacked above it at the given board position.
///
/// Only rings strictly above the object's own layer are tested: an
/// object's own ring is the thing occupying the position, not something
/// hiding it.
pub fn is_occluded_above(
    level: RingLevel,
    disk: Disk,
    absolute_sector: Sector,
    rotation: &RotationState,
) -> bool {
    for ring in level.rings_above() {
        if !ring.covers(disk) {
            continue;
        }
        let relative = absolute_sector.rotate(-rotation.angle(*ring));
        if !catalog::is_hollow(*ring, disk, relative) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::sector::{ALL_SECTORS, ROTATING_RINGS};
    use Disk::{A, B, C, D, E};
    use Sector::{S1, S2, S3, S6, S7};

    #[test]
    fn outer_disks_always_resolve_to_base() {
        let spun = RotationState::new(90, 180, 270);
        for sector in ALL_SECTORS {
            assert_eq!(visible_level(D, sector, &spun), RingLevel::Base);
            assert_eq!(visible_level(E, sector, &spun), RingLevel::Base);
        }
    }

    #[test]
    fn topmost_opaque_ring_wins_at_rest() {
        let rest = RotationState::ZERO;
        // Ring 1 holds Auriga at A1.
        assert_eq!(visible_level(A, S1, &rest), RingLevel::Ring1);
        // A2: ring 1 hollow, ring 2 empty (opaque).
        assert_eq!(visible_level(A, S2, &rest), RingLevel::Ring2);
        // A3: rings 1-2 hollow, ring 3 holds Draco.
        assert_eq!(visible_level(A, S3, &rest), RingLevel::Ring3);
        // A7: hollow all the way down to the base.
        assert_eq!(visible_level(A, S7, &rest), RingLevel::Base);
        // B3: ring 1 has no say over disk B; ring 2 holds the Koronis Belt.
        assert_eq!(visible_level(B, S3, &rest), RingLevel::Ring2);
        // C2: only ring 3 covers disk C and it is hollow there.
        assert_eq!(visible_level(C, S2, &rest), RingLevel::Base);
    }

    #[test]
    fn hollow_cells_never_report_their_own_ring() {
        // Monotonicity: wherever a ring's relevant relative cell is hollow,
        // that ring is never the resolved level, whatever the other rings do.
        for r1 in 0..8 {
            for r3 in 0..8 {
                let rotation = RotationState::new(r1 * 45, 0, r3 * 45);
                for sector in ALL_SECTORS {
                    for ring in ROTATING_RINGS {
                        let relative = sector.rotate(-rotation.angle(ring));
                        if ring.covers(A) && catalog::is_hollow(ring, A, relative) {
                            assert_ne!(visible_level(A, sector, &rotation), ring);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn rotation_moves_the_window() {
        // Ring 1 rotated clockwise one step carries Auriga (relative A1)
        // over absolute A2; the hollow relative A8 now sits over A1.
        let rotation = RotationState::new(45, 0, 0);
        assert_eq!(visible_level(A, S2, &rotation), RingLevel::Ring1);
        // At absolute A1, ring 1 shows relative 8 (hollow), ring 2 shows
        // relative 1 (hollow), ring 3 shows relative 1 (hollow): base.
        assert_eq!(visible_level(A, S1, &rotation), RingLevel::Base);
    }

    #[test]
    fn occlusion_skips_the_objects_own_ring() {
        let rest = RotationState::ZERO;
        // Auriga occupies ring 1 at A1; nothing is above ring 1.
        assert!(!is_occluded_above(RingLevel::Ring1, A, S1, &rest));
        // The base floor under Auriga is hidden.
        assert!(is_occluded_above(RingLevel::Base, A, S1, &rest));
        // Ring 3 at A6 is empty (opaque) but rings 1-2 above are hollow,
        // so a ring-3 object at A6 would be exposed.
        assert!(!is_occluded_above(RingLevel::Ring3, A, S6, &rest));
        // The base under B2 is hidden by the Vesta Belt on ring 3.
        assert!(is_occluded_above(RingLevel::Base, B, S2, &rest));
    }

    #[test]
    fn uncovered_disks_are_never_occluded() {
        let spun = RotationState::new(135, 225, 315);
        for sector in ALL_SECTORS {
            assert!(!is_occluded_above(RingLevel::Base, D, sector, &spun));
            assert!(!is_occluded_above(RingLevel::Base, E, sector, &spun));
        }
    }
}
