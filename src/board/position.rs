//! Projection of fixed catalog positions into the current rotation.

use serde::{Deserialize, Serialize};

use super::catalog::{self, CelestialObject};
use super::sector::{Disk, RingLevel, RotationState, Sector};
use super::visibility::is_occluded_above;

/// Where an object currently sits on the fixed board, and whether a
/// top-down viewer can see it. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsolutePosition {
    pub disk: Disk,
    pub relative_sector: Sector,
    pub absolute_sector: Sector,
    pub visible: bool,
}

/// Projects an arbitrary (level, disk, relative sector) triple through the
/// rotation state. This is the entry point for transient tokens that have
/// no catalog entry; probes placed on a ring ride with it.
pub fn project(
    level: RingLevel,
    disk: Disk,
    relative_sector: Sector,
    rotation: &RotationState,
) -> AbsolutePosition {
    let absolute_sector = match level {
        RingLevel::Base => relative_sector,
        ring => relative_sector.rotate(rotation.angle(ring)),
    };
    let visible = !is_occluded_above(level, disk, absolute_sector, rotation);
    AbsolutePosition { disk, relative_sector, absolute_sector, visible }
}

/// Computes the current absolute position of a catalog object.
pub fn absolute_position(object: &CelestialObject, rotation: &RotationState) -> AbsolutePosition {
    project(object.level, object.disk, object.sector, rotation)
}

/// Computes the current absolute position of the object with the given
/// lookup slug, or `None` if no catalog table knows the id.
pub fn absolute_position_of(id: &str, rotation: &RotationState) -> Option<AbsolutePosition> {
    catalog::find_object(id).map(|object| absolute_position(object, rotation))
}
