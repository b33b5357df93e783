//! Sectors, disks, ring levels, and rotation arithmetic.
//!
//! The board is five concentric disks (A innermost to E outermost), each
//! split into eight 45-degree sectors numbered 1-8 clockwise from the
//! 12-o'clock position. Sector *n* maps to rotation index *n - 1*. Three
//! nested rings rotate over the inner disks; ring 1 is the topmost and
//! covers only disk A, ring 2 covers A-B, ring 3 covers A-C.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The number of angular sectors on every disk.
pub const SECTOR_COUNT: usize = 8;

/// The number of concentric disks.
pub const DISK_COUNT: usize = 5;

/// One of the eight angular sectors.
///
/// The discriminant is the 0-based rotation index; the clock-face number
/// shown on the board is `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Sector {
    S1 = 0,
    S2 = 1,
    S3 = 2,
    S4 = 3,
    S5 = 4,
    S6 = 5,
    S7 = 6,
    S8 = 7,
}

/// All sectors in index order.
pub const ALL_SECTORS: [Sector; SECTOR_COUNT] = [
    Sector::S1,
    Sector::S2,
    Sector::S3,
    Sector::S4,
    Sector::S5,
    Sector::S6,
    Sector::S7,
    Sector::S8,
];

impl Sector {
    /// Returns the 0-based rotation index (0-7).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the 1-based clock number (1-8).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the sector for a rotation index, wrapping modulo 8.
    pub const fn from_index(index: u8) -> Sector {
        ALL_SECTORS[(index % SECTOR_COUNT as u8) as usize]
    }

    /// Looks up a sector by its 1-based clock number.
    pub const fn from_number(number: u8) -> Option<Sector> {
        if number >= 1 && number <= 8 {
            Some(ALL_SECTORS[(number - 1) as usize])
        } else {
            None
        }
    }

    /// The next sector clockwise (wrapping 8 -> 1).
    pub const fn clockwise(self) -> Sector {
        Sector::from_index(self.index() + 1)
    }

    /// The next sector counterclockwise (wrapping 1 -> 8).
    pub const fn counterclockwise(self) -> Sector {
        Sector::from_index(self.index() + 7)
    }

    /// Applies a ring rotation of `angle_degrees` to this relative sector,
    /// yielding the absolute sector it currently occupies.
    ///
    /// The angle is rounded to the nearest 45-degree step; this is a
    /// deliberate simplification so that mid-animation angles snap to the
    /// sector grid rather than truncating. Exact for multiples of 45.
    ///
    /// Positive angles are clockwise. Sector numbering itself runs
    /// clockwise, so rotating a ring clockwise by one step carries whatever
    /// sat at sector 1 to sector 2. Pass the negated angle to go the other
    /// way (absolute back to ring-relative).
    pub fn rotate(self, angle_degrees: i32) -> Sector {
        let steps = nearest_step(angle_degrees);
        let index = (self.index() as i32 + steps).rem_euclid(SECTOR_COUNT as i32);
        Sector::from_index(index as u8)
    }
}

/// Rounds an angle in degrees to the nearest whole number of 45-degree
/// steps. Integer ties cannot occur (45/2 is not an integer).
pub(crate) const fn nearest_step(angle_degrees: i32) -> i32 {
    if angle_degrees >= 0 {
        (angle_degrees + 22) / 45
    } else {
        -((-angle_degrees + 22) / 45)
    }
}

/// One of the five concentric disks, innermost (A) to outermost (E).
///
/// Disk E is the informational rim band (sector labels and scoring track);
/// it holds no objects and is not traversable by probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Disk {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
}

/// All disks, innermost first.
pub const ALL_DISKS: [Disk; DISK_COUNT] = [Disk::A, Disk::B, Disk::C, Disk::D, Disk::E];

impl Disk {
    /// Returns the single-letter band label.
    pub const fn letter(self) -> char {
        match self {
            Disk::A => 'A',
            Disk::B => 'B',
            Disk::C => 'C',
            Disk::D => 'D',
            Disk::E => 'E',
        }
    }

    /// Parses a disk from its band letter.
    pub fn from_letter(c: char) -> Option<Disk> {
        match c {
            'A' => Some(Disk::A),
            'B' => Some(Disk::B),
            'C' => Some(Disk::C),
            'D' => Some(Disk::D),
            'E' => Some(Disk::E),
            _ => None,
        }
    }

    /// The radially adjacent disk one step inward, if any.
    pub const fn inward(self) -> Option<Disk> {
        match self {
            Disk::A => None,
            Disk::B => Some(Disk::A),
            Disk::C => Some(Disk::B),
            Disk::D => Some(Disk::C),
            Disk::E => Some(Disk::D),
        }
    }

    /// The radially adjacent disk one step outward, if any.
    pub const fn outward(self) -> Option<Disk> {
        match self {
            Disk::A => Some(Disk::B),
            Disk::B => Some(Disk::C),
            Disk::C => Some(Disk::D),
            Disk::D => Some(Disk::E),
            Disk::E => None,
        }
    }

    /// Returns true if probes may occupy cells on this disk.
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Disk::E)
    }
}

/// A layer of the visibility stack: the static base board (level 0) or one
/// of the three rotating rings.
///
/// Rings nest so that each higher-numbered ring physically sits *below*
/// lower-numbered ones: ring 1 is topmost, the base is the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RingLevel {
    Base = 0,
    Ring1 = 1,
    Ring2 = 2,
    Ring3 = 3,
}

/// The rotating rings, topmost first. The base is not a ring.
pub const ROTATING_RINGS: [RingLevel; 3] = [RingLevel::Ring1, RingLevel::Ring2, RingLevel::Ring3];

impl RingLevel {
    /// Returns the numeric level (0 for the base).
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Returns true if this layer covers the given disk.
    ///
    /// Ring 1 covers disk A only, ring 2 covers A-B, ring 3 covers A-C.
    /// The base extends under everything.
    pub const fn covers(self, disk: Disk) -> bool {
        match self {
            RingLevel::Base => true,
            RingLevel::Ring1 => matches!(disk, Disk::A),
            RingLevel::Ring2 => matches!(disk, Disk::A | Disk::B),
            RingLevel::Ring3 => matches!(disk, Disk::A | Disk::B | Disk::C),
        }
    }

    /// The rings physically stacked above this layer, topmost first.
    pub const fn rings_above(self) -> &'static [RingLevel] {
        match self {
            RingLevel::Ring1 => &[],
            RingLevel::Ring2 => &[RingLevel::Ring1],
            RingLevel::Ring3 => &[RingLevel::Ring1, RingLevel::Ring2],
            RingLevel::Base => &[RingLevel::Ring1, RingLevel::Ring2, RingLevel::Ring3],
        }
    }
}

/// The current rotation of the three rings, in degrees clockwise.
///
/// Observed states are always multiples of 45; arbitrary values are
/// tolerated and rounded to the nearest step at the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationState {
    pub ring1: i32,
    pub ring2: i32,
    pub ring3: i32,
}

impl RotationState {
    /// All rings at rest.
    pub const ZERO: RotationState = RotationState { ring1: 0, ring2: 0, ring3: 0 };

    pub const fn new(ring1: i32, ring2: i32, ring3: i32) -> Self {
        RotationState { ring1, ring2, ring3 }
    }

    /// Returns the rotation angle for a layer. The base never rotates.
    pub const fn angle(&self, level: RingLevel) -> i32 {
        match level {
            RingLevel::Base => 0,
            RingLevel::Ring1 => self.ring1,
            RingLevel::Ring2 => self.ring2,
            RingLevel::Ring3 => self.ring3,
        }
    }

    /// Returns a copy with every angle snapped to the nearest 45-degree
    /// multiple, reduced to the canonical range 0..360.
    pub fn snapped(&self) -> RotationState {
        let snap = |a: i32| (nearest_step(a).rem_euclid(SECTOR_COUNT as i32)) * 45;
        RotationState {
            ring1: snap(self.ring1),
            ring2: snap(self.ring2),
            ring3: snap(self.ring3),
        }
    }

    /// Produces a uniformly random snapped rotation, used for the
    /// setup-time ring scramble.
    pub fn random(rng: &mut impl Rng) -> RotationState {
        RotationState {
            ring1: rng.gen_range(0..8) * 45,
            ring2: rng.gen_range(0..8) * 45,
            ring3: rng.gen_range(0..8) * 45,
        }
    }
}

/// Composite key identifying one board cell: a disk plus an absolute
/// sector. Serializes as its compact string form, e.g. "A3".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub disk: Disk,
    pub sector: Sector,
}

impl CellKey {
    pub const fn new(disk: Disk, sector: Sector) -> Self {
        CellKey { disk, sector }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.disk.letter(), self.sector.number())
    }
}

/// Errors that can occur when parsing a cell key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("cell key must be a disk letter followed by a sector digit, got '{0}'")]
    WrongShape(String),

    #[error("unknown disk letter: '{0}'")]
    UnknownDisk(char),

    #[error("sector number out of range 1-8: '{0}'")]
    InvalidSector(char),
}

impl FromStr for CellKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (disk_ch, sector_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(d), Some(n), None) => (d, n),
            _ => return Err(KeyError::WrongShape(s.to_string())),
        };
        let disk = Disk::from_letter(disk_ch).ok_or(KeyError::UnknownDisk(disk_ch))?;
        let number = sector_ch
            .to_digit(10)
            .ok_or(KeyError::InvalidSector(sector_ch))?;
        let sector = Sector::from_number(number as u8).ok_or(KeyError::InvalidSector(sector_ch))?;
        Ok(CellKey { disk, sector })
    }
}

impl Serialize for CellKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CellKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
