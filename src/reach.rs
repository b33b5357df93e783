//! Probe reachability over the board graph.
//!
//! Nodes are the traversable (disk, sector) cells; edges connect the two
//! sector neighbors on the same disk (wrapping 8 -> 1) and the same-sector
//! cells one disk inward and outward. The informational rim band (disk E)
//! is display-only and excluded. Leaving a cell that currently holds an
//! asteroid field costs one extra movement unless waived, which makes the
//! edge weights non-uniform: the frontier is relaxed uniform-cost style
//! rather than settled by plain BFS visitation order.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use crate::board::{board_cells, BoardCell, CellKey, RotationState};

/// How a reachable cell was reached: total movements spent, the cell-key
/// path from the start to the destination inclusive, and any bonus accrued
/// along that path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachEntry {
    pub movements: u32,
    pub path: Vec<CellKey>,
    pub bonus: u32,
}

/// Optional per-cell bonus callback, invoked once for every cell a path
/// enters (the start cell excluded). Rule variants use it to tally a
/// secondary value gained en route.
pub type BonusFn<'a> = &'a dyn Fn(&BoardCell) -> u32;

/// Computes every cell reachable from `start` within the movement budget.
///
/// The budget is `movement` plus `resources` converted 1:1 into extra
/// movement. A zero budget yields an empty map; the start cell itself is
/// never part of the result. Cost ties keep the first-discovered path,
/// which for equal-weight edges is the shortest-hop BFS order. All working
/// state is local to the call; nothing is cached across queries.
///
/// # Panics
///
/// Panics if `start` lies on the non-traversable rim band (disk E) --
/// internal call sites only ever pass probe positions, which cannot.
pub fn reachable_cells(
    start: CellKey,
    movement: u32,
    resources: u32,
    rotation: &RotationState,
    ignore_asteroids: bool,
    bonus: Option<BonusFn<'_>>,
) -> HashMap<CellKey, ReachEntry> {
    assert!(
        start.disk.is_traversable(),
        "probe start {} is on the display-only rim band",
        start
    );

    let budget = movement + resources;
    let mut best: HashMap<CellKey, ReachEntry> = HashMap::new();
    if budget == 0 {
        return best;
    }

    let cells = board_cells(rotation);
    let mut frontier: VecDeque<CellKey> = VecDeque::new();

    best.insert(start, ReachEntry { movements: 0, path: vec![start], bonus: 0 });
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        let here = best[&current].clone();
        let exit_cost = if cells[&current].has_asteroid && !ignore_asteroids { 2 } else { 1 };
        let cost = here.movements + exit_cost;
        if cost > budget {
            continue;
        }

        for next in neighbors(current) {
            let cheaper = best.get(&next).map_or(true, |known| cost < known.movements);
            if !cheaper {
                continue;
            }
            let mut path = here.path.clone();
            path.push(next);
            let gained = bonus.map_or(0, |f| f(&cells[&next]));
            best.insert(next, ReachEntry { movements: cost, path, bonus: here.bonus + gained });
            frontier.push_back(next);
        }
    }

    best.remove(&start);
    best
}

/// The traversable cells adjacent to a cell: both sector neighbors on the
/// same disk plus the same sector one disk in and out, rim band excluded.
fn neighbors(key: CellKey) -> Vec<CellKey> {
    let mut out = Vec::with_capacity(4);
    out.push(CellKey::new(key.disk, key.sector.clockwise()));
    out.push(CellKey::new(key.disk, key.sector.counterclockwise()));
    if let Some(inner) = key.disk.inward() {
        out.push(CellKey::new(inner, key.sector));
    }
    if let Some(outer) = key.disk.outward() {
        if outer.is_traversable() {
            out.push(CellKey::new(outer, key.sector));
        }
    }
    out
}
