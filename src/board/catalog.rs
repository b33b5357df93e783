//! The celestial catalog: every object printed on the board and the rings.
//!
//! Four disjoint immutable tables: fixed objects on the static base board
//! (level 0) and one full cell classification per rotating ring. A ring
//! table enumerates every (disk, sector) cell in that ring's jurisdiction
//! exactly once as hollow (see-through), empty (opaque, no object), or an
//! object. The fixed table lists only actual objects; base cells without an
//! entry are plain board. Entries never mutate; only the interpretation of
//! their relative sector changes with the rotation state.

use super::sector::{Disk, RingLevel, Sector};

/// What a catalog entry is: a celestial body, or one of the two object-less
/// ring cell classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Planet,
    Comet,
    AsteroidField,
    /// A transparent ring cell revealing whatever lies beneath.
    Hollow,
    /// An opaque ring cell with nothing printed on it.
    Empty,
}

impl ObjectKind {
    /// Returns true for kinds that actually occupy a cell (planet, comet,
    /// asteroid field), as opposed to the hollow/empty classifications.
    pub const fn is_body(self) -> bool {
        matches!(self, ObjectKind::Planet | ObjectKind::Comet | ObjectKind::AsteroidField)
    }
}

/// An immutable catalog entry: a body or cell classification bound to a
/// disk, a relative sector, and a layer of the visibility stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelestialObject {
    /// Lowercase lookup slug; empty for hollow/empty cells, which are not
    /// addressable by name.
    pub id: &'static str,
    /// Display name; empty for hollow/empty cells.
    pub name: &'static str,
    pub kind: ObjectKind,
    pub disk: Disk,
    /// Relative sector: fixed to the object's own layer, independent of
    /// the current rotation.
    pub sector: Sector,
    pub level: RingLevel,
}

/// Shorthand constructors for catalog entries (used only in table
/// construction).
const fn planet(
    id: &'static str,
    name: &'static str,
    disk: Disk,
    sector: Sector,
    level: RingLevel,
) -> CelestialObject {
    CelestialObject { id, name, kind: ObjectKind::Planet, disk, sector, level }
}
const fn comet(
    id: &'static str,
    name: &'static str,
    disk: Disk,
    sector: Sector,
    level: RingLevel,
) -> CelestialObject {
    CelestialObject { id, name, kind: ObjectKind::Comet, disk, sector, level }
}
const fn asteroids(
    id: &'static str,
    name: &'static str,
    disk: Disk,
    sector: Sector,
    level: RingLevel,
) -> CelestialObject {
    CelestialObject { id, name, kind: ObjectKind::AsteroidField, disk, sector, level }
}
const fn hollow(disk: Disk, sector: Sector, level: RingLevel) -> CelestialObject {
    CelestialObject { id: "", name: "", kind: ObjectKind::Hollow, disk, sector, level }
}
const fn empty(disk: Disk, sector: Sector, level: RingLevel) -> CelestialObject {
    CelestialObject { id: "", name: "", kind: ObjectKind::Empty, disk, sector, level }
}

/// Shorthand aliases for table readability.
use Disk::{A, B, C, D};
use RingLevel::{Base, Ring1, Ring2, Ring3};
use Sector::{S1, S2, S3, S4, S5, S6, S7, S8};

/// Number of objects printed on the static base board.
pub const FIXED_OBJECT_COUNT: usize = 11;

/// Ring cell counts follow each ring's jurisdiction: ring 1 covers disk A
/// (8 cells), ring 2 covers A-B (16), ring 3 covers A-C (24).
pub const RING1_CELL_COUNT: usize = 8;
pub const RING2_CELL_COUNT: usize = 16;
pub const RING3_CELL_COUNT: usize = 24;

/// Objects on the static base board (level 0). Disk E is the informational
/// rim band and holds no objects.
pub static FIXED_OBJECTS: [CelestialObject; FIXED_OBJECT_COUNT] = [
    planet("pavo", "Pavo", A, S7, Base),
    comet("wild", "Wild", B, S2, Base),
    asteroids("flora", "Flora Belt", C, S2, Base),
    comet("tempel", "Tempel", C, S4, Base),
    planet("phoenix", "Phoenix", C, S8, Base),
    planet("vela", "Vela", D, S1, Base),
    asteroids("eunomia", "Eunomia Belt", D, S3, Base),
    comet("halley", "Halley", D, S4, Base),
    planet("tucana", "Tucana", D, S5, Base),
    asteroids("pallas", "Pallas Belt", D, S7, Base),
    planet("hydra", "Hydra", D, S8, Base),
];

/// Ring 1: the topmost ring, disk A only.
pub static RING1_CELLS: [CelestialObject; RING1_CELL_COUNT] = [
    planet("auriga", "Auriga", A, S1, Ring1),
    hollow(A, S2, Ring1),
    hollow(A, S3, Ring1),
    empty(A, S4, Ring1),
    hollow(A, S5, Ring1),
    comet("encke", "Encke", A, S6, Ring1),
    hollow(A, S7, Ring1),
    hollow(A, S8, Ring1),
];

/// Ring 2: the middle ring, disks A-B.
pub static RING2_CELLS: [CelestialObject; RING2_CELL_COUNT] = [
    hollow(A, S1, Ring2),
    empty(A, S2, Ring2),
    hollow(A, S3, Ring2),
    hollow(A, S4, Ring2),
    planet("corvus", "Corvus", A, S5, Ring2),
    hollow(A, S6, Ring2),
    hollow(A, S7, Ring2),
    hollow(A, S8, Ring2),
    planet("cygnus", "Cygnus", B, S1, Ring2),
    hollow(B, S2, Ring2),
    asteroids("koronis", "Koronis Belt", B, S3, Ring2),
    hollow(B, S4, Ring2),
    empty(B, S5, Ring2),
    hollow(B, S6, Ring2),
    comet("borrelly", "Borrelly", B, S7, Ring2),
    hollow(B, S8, Ring2),
];

/// Ring 3: the lowest ring, disks A-C.
pub static RING3_CELLS: [CelestialObject; RING3_CELL_COUNT] = [
    hollow(A, S1, Ring3),
    hollow(A, S2, Ring3),
    planet("draco", "Draco", A, S3, Ring3),
    hollow(A, S4, Ring3),
    hollow(A, S5, Ring3),
    empty(A, S6, Ring3),
    hollow(A, S7, Ring3),
    hollow(A, S8, Ring3),
    hollow(B, S1, Ring3),
    asteroids("vesta", "Vesta Belt", B, S2, Ring3),
    hollow(B, S3, Ring3),
    empty(B, S4, Ring3),
    hollow(B, S5, Ring3),
    planet("lyra", "Lyra", B, S6, Ring3),
    hollow(B, S7, Ring3),
    hollow(B, S8, Ring3),
    empty(C, S1, Ring3),
    hollow(C, S2, Ring3),
    comet("oterma", "Oterma", C, S3, Ring3),
    hollow(C, S4, Ring3),
    planet("orion", "Orion", C, S5, Ring3),
    hollow(C, S6, Ring3),
    asteroids("hygiea", "Hygiea Belt", C, S7, Ring3),
    hollow(C, S8, Ring3),
];

/// Returns the catalog table for a layer.
pub fn ring_cells(level: RingLevel) -> &'static [CelestialObject] {
    match level {
        RingLevel::Base => &FIXED_OBJECTS,
        RingLevel::Ring1 => &RING1_CELLS,
        RingLevel::Ring2 => &RING2_CELLS,
        RingLevel::Ring3 => &RING3_CELLS,
    }
}

/// Iterates over all four tables, topmost ring first, base last.
pub fn all_objects() -> impl Iterator<Item = &'static CelestialObject> {
    RING1_CELLS.iter().chain(RING2_CELLS.iter()).chain(RING3_CELLS.iter()).chain(FIXED_OBJECTS.iter())
}

/// Looks up a catalog object by its lookup slug. Hollow and empty cells
/// are not addressable; an unknown id is `None`, never an error.
pub fn find_object(id: &str) -> Option<&'static CelestialObject> {
    if id.is_empty() {
        return None;
    }
    all_objects().find(|o| o.id == id)
}

/// Returns true if the given ring is see-through at the given ring-relative
/// cell. Callers are expected to pre-check jurisdiction via
/// `RingLevel::covers`; cells outside it are reported opaque.
pub fn is_hollow(level: RingLevel, disk: Disk, sector: Sector) -> bool {
    debug_assert!(level.covers(disk), "{:?} does not cover disk {:?}", level, disk);
    ring_cells(level)
        .iter()
        .find(|c| c.disk == disk && c.sector == sector)
        .map(|c| c.kind == ObjectKind::Hollow)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::sector::{ALL_SECTORS, ROTATING_RINGS};

    #[test]
    fn ring_tables_cover_their_jurisdiction_exactly_once() {
        for ring in ROTATING_RINGS {
            let cells = ring_cells(ring);
            for disk in crate::board::sector::ALL_DISKS {
                for sector in ALL_SECTORS {
                    let n = cells.iter().filter(|c| c.disk == disk && c.sector == sector).count();
                    if ring.covers(disk) {
                        assert_eq!(n, 1, "{:?} must declare {}{} exactly once", ring, disk.letter(), sector.number());
                    } else {
                        assert_eq!(n, 0, "{:?} has no jurisdiction over disk {:?}", ring, disk);
                    }
                }
            }
        }
    }

    #[test]
    fn ring_entries_carry_their_own_level() {
        for ring in ROTATING_RINGS {
            for cell in ring_cells(ring) {
                assert_eq!(cell.level, ring);
            }
        }
        for object in FIXED_OBJECTS.iter() {
            assert_eq!(object.level, crate::board::sector::RingLevel::Base);
        }
    }

    #[test]
    fn fixed_table_holds_only_bodies() {
        for object in FIXED_OBJECTS.iter() {
            assert!(object.kind.is_body(), "{:?} is not a body", object);
            assert!(object.disk.is_traversable(), "rim band must stay object-free");
        }
    }

    #[test]
    fn body_ids_are_unique_and_nonempty() {
        let bodies: Vec<_> = all_objects().filter(|o| o.kind.is_body()).collect();
        for body in &bodies {
            assert!(!body.id.is_empty());
            assert!(!body.name.is_empty());
            let matches = bodies.iter().filter(|b| b.id == body.id).count();
            assert_eq!(matches, 1, "duplicate id '{}'", body.id);
        }
    }

    #[test]
    fn hollow_and_empty_cells_are_anonymous() {
        for cell in all_objects().filter(|o| !o.kind.is_body()) {
            assert!(cell.id.is_empty());
            assert!(cell.name.is_empty());
        }
    }

    #[test]
    fn find_object_known_and_unknown() {
        let auriga = find_object("auriga").unwrap();
        assert_eq!(auriga.name, "Auriga");
        assert_eq!(auriga.level, RingLevel::Ring1);
        assert_eq!(find_object("nibiru"), None);
        assert_eq!(find_object(""), None);
    }

    #[test]
    fn is_hollow_matches_tables() {
        assert!(is_hollow(Ring1, A, S2));
        assert!(!is_hollow(Ring1, A, S1)); // planet is opaque
        assert!(!is_hollow(Ring1, A, S4)); // empty is opaque
        assert!(is_hollow(Ring3, C, S8));
        assert!(!is_hollow(Ring3, C, S1));
    }

    #[test]
    fn planet_census() {
        let planets = all_objects().filter(|o| o.kind == ObjectKind::Planet).count();
        let comets = all_objects().filter(|o| o.kind == ObjectKind::Comet).count();
        let belts = all_objects().filter(|o| o.kind == ObjectKind::AsteroidField).count();
        assert_eq!(planets, 11);
        assert_eq!(comets, 6);
        assert_eq!(belts, 6);
    }
}
