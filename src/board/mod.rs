//! Board representation: disks, sectors, rings, the celestial catalog,
//! and the derived visibility/position/cell projections.

pub mod catalog;
pub mod cells;
pub mod position;
pub mod sector;
pub mod visibility;

pub use catalog::{
    all_objects, find_object, ring_cells, CelestialObject, ObjectKind, FIXED_OBJECTS,
    FIXED_OBJECT_COUNT, RING1_CELLS, RING2_CELLS, RING3_CELLS,
};
pub use cells::{board_cells, BoardCell};
pub use position::{absolute_position, absolute_position_of, project, AbsolutePosition};
pub use sector::{
    CellKey, Disk, KeyError, RingLevel, RotationState, Sector, ALL_DISKS, ALL_SECTORS,
    DISK_COUNT, ROTATING_RINGS, SECTOR_COUNT,
};
pub use visibility::{is_occluded_above, visible_level};
