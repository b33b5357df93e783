//! Board cell aggregation: the full 40-cell occupancy/visibility map.

use std::collections::HashMap;

use serde::Serialize;

use super::catalog::{self, ObjectKind};
use super::position::absolute_position;
use super::sector::{CellKey, Disk, RingLevel, RotationState, Sector, ALL_DISKS, ALL_SECTORS, DISK_COUNT, SECTOR_COUNT};
use super::visibility::is_occluded_above;

/// One (disk, sector) cell as currently resolved: which bodies sit on it
/// and whether its floor is exposed. A pure projection of the catalog and
/// the rotation state, recomputed whenever the rotation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardCell {
    pub disk: Disk,
    pub sector: Sector,
    pub has_asteroid: bool,
    pub has_comet: bool,
    pub has_planet: bool,
    /// Display name of the planet on this cell, if any.
    pub planet: Option<&'static str>,
    /// True if the static base board is exposed here (no opaque ring above).
    pub visible: bool,
}

impl BoardCell {
    fn bare(disk: Disk, sector: Sector, visible: bool) -> Self {
        BoardCell {
            disk,
            sector,
            has_asteroid: false,
            has_comet: false,
            has_planet: false,
            planet: None,
            visible,
        }
    }

    pub const fn key(&self) -> CellKey {
        CellKey::new(self.disk, self.sector)
    }
}

/// Computes the full board cell map for a rotation state.
///
/// Every catalog body is projected once; bodies that are currently visible
/// accumulate into their (disk, absolute sector) cell. Accumulation never
/// overwrites: if two still-visible bodies ever share a cell, both flags
/// are set.
pub fn board_cells(rotation: &RotationState) -> HashMap<CellKey, BoardCell> {
    let mut cells = HashMap::with_capacity(DISK_COUNT * SECTOR_COUNT);
    for disk in ALL_DISKS {
        for sector in ALL_SECTORS {
            let visible = !is_occluded_above(RingLevel::Base, disk, sector, rotation);
            cells.insert(CellKey::new(disk, sector), BoardCell::bare(disk, sector, visible));
        }
    }

    for object in catalog::all_objects() {
        if !object.kind.is_body() {
            continue;
        }
        let pos = absolute_position(object, rotation);
        if !pos.visible {
            continue;
        }
        let cell = cells
            .get_mut(&CellKey::new(pos.disk, pos.absolute_sector))
            .expect("cell map covers every (disk, sector) pair");
        match object.kind {
            ObjectKind::Planet => {
                cell.has_planet = true;
                cell.planet = Some(object.name);
            }
            ObjectKind::Comet => cell.has_comet = true,
            ObjectKind::AsteroidField => cell.has_asteroid = true,
            ObjectKind::Hollow | ObjectKind::Empty => unreachable!("bodies only"),
        }
    }

    cells
}
