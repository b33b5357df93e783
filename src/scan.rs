//! Scanning sectors and majority resolution.
//!
//! A scan sector is a named region with an ordered row of marker slots.
//! The slot sequence doubles as the chronological record of placement: a
//! mark later in the sequence was placed more recently. Majority
//! resolution depends on that invariant for its tie-breaks, so the only
//! way to mark a sector is `place_mark`, which always fills the next open
//! slot.

use serde::{Deserialize, Serialize};

/// The number of marker-placing factions.
pub const FACTION_COUNT: usize = 4;

/// A party that places scan markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Faction {
    Blue = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
}

/// All factions in standard order.
pub const ALL_FACTIONS: [Faction; FACTION_COUNT] =
    [Faction::Blue, Faction::Red, Faction::Green, Faction::Yellow];

impl Faction {
    /// Returns the lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Faction::Blue => "blue",
            Faction::Red => "red",
            Faction::Green => "green",
            Faction::Yellow => "yellow",
        }
    }
}

/// One rank of a resolved majority: a faction and the marks it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorityStanding {
    pub faction: Faction,
    pub marks: u32,
}

/// Ranks the factions present in a slot sequence by mark count descending.
///
/// Ties at each rank are broken by recency: scanning the sequence from the
/// end, the tied faction whose mark appears first (the most recently
/// placed) takes the rank. The tie-break is recomputed per rank with
/// already-ranked factions excluded, so a runner-up tie is resolved among
/// the remaining parties only. A sequence with no marks ranks nobody.
pub fn resolve_majority(slots: &[Option<Faction>]) -> Vec<MajorityStanding> {
    let mut counts = [0u32; FACTION_COUNT];
    for slot in slots.iter().flatten() {
        counts[*slot as usize] += 1;
    }

    let mut remaining: Vec<Faction> =
        ALL_FACTIONS.into_iter().filter(|f| counts[*f as usize] > 0).collect();
    let mut standings = Vec::with_capacity(remaining.len());

    while let Some(top) = remaining.iter().map(|f| counts[*f as usize]).max() {
        let tied: Vec<Faction> =
            remaining.iter().copied().filter(|f| counts[*f as usize] == top).collect();
        // Every tied faction has at least one mark, so the scan always
        // finds one; the fallback is unreachable.
        let winner = slots
            .iter()
            .rev()
            .flatten()
            .find(|f| tied.contains(*f))
            .copied()
            .unwrap_or(tied[0]);
        standings.push(MajorityStanding { faction: winner, marks: top });
        remaining.retain(|f| *f != winner);
    }

    standings
}

/// A named scanning region owning its ordered marker slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSector {
    name: String,
    slots: Vec<Option<Faction>>,
}

impl ScanSector {
    /// Creates a sector with the given number of open slots.
    pub fn new(name: impl Into<String>, slot_count: usize) -> Self {
        ScanSector { name: name.into(), slots: vec![None; slot_count] }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The slot sequence in placement order.
    pub fn slots(&self) -> &[Option<Faction>] {
        &self.slots
    }

    /// Index of the next slot a mark would fill, if any remain.
    pub fn next_open_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    pub fn is_full(&self) -> bool {
        self.next_open_slot().is_none()
    }

    /// Places a mark into the next open slot, keeping sequence order equal
    /// to placement order. Returns the filled slot index, or `None` if the
    /// sector is full.
    pub fn place_mark(&mut self, faction: Faction) -> Option<usize> {
        let index = self.next_open_slot()?;
        self.slots[index] = Some(faction);
        Some(index)
    }

    /// Removes every mark, reopening all slots (post-resolution reset).
    pub fn clear_marks(&mut self) {
        self.slots.fill(None);
    }

    /// Resolves the majority standings for the current marks.
    pub fn resolve(&self) -> Vec<MajorityStanding> {
        resolve_majority(&self.slots)
    }
}
