//! Orrery: the spatial and combinatorial core of a rotating-ring board game.
//!
//! A circular board of five concentric disks, eight sectors each, overlaid
//! by three independently rotating rings that hide or reveal the static
//! board beneath. This crate resolves what is actually visible under any
//! rotation, projects catalog objects to their current absolute positions,
//! aggregates the full board cell map, computes probe reachability under a
//! movement budget, and resolves scan-marker majorities. It is a pure
//! embedded library: every entry point is a deterministic function of the
//! catalog, the rotation state, and the query, with no I/O and no hidden
//! mutable state.

pub mod board;
pub mod reach;
pub mod scan;
pub mod survey;
