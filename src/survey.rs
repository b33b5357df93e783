//! Bulk queries over the full rotation space.
//!
//! Three rings with eight steps each give 512 distinct snapped rotation
//! states. Hint and AI layers ask questions across all of them ("which
//! rotations expose this planet?"), which is embarrassingly parallel.

use rayon::prelude::*;

use crate::board::{absolute_position, catalog, RotationState};

/// Enumerates every snapped rotation state, ring 1 varying slowest.
pub fn all_rotation_states() -> Vec<RotationState> {
    let mut states = Vec::with_capacity(8 * 8 * 8);
    for r1 in 0..8 {
        for r2 in 0..8 {
            for r3 in 0..8 {
                states.push(RotationState::new(r1 * 45, r2 * 45, r3 * 45));
            }
        }
    }
    states
}

/// Every rotation state under which the named object is visible, in
/// enumeration order. `None` if no catalog table knows the id.
pub fn rotations_revealing(id: &str) -> Option<Vec<RotationState>> {
    let object = catalog::find_object(id)?;
    Some(
        all_rotation_states()
            .into_par_iter()
            .filter(|rotation| absolute_position(object, rotation).visible)
            .collect(),
    )
}

/// Counts the visible bodies under each rotation state.
pub fn visible_body_counts() -> Vec<(RotationState, usize)> {
    all_rotation_states()
        .into_par_iter()
        .map(|rotation| {
            let visible = catalog::all_objects()
                .filter(|o| o.kind.is_body())
                .filter(|o| absolute_position(o, &rotation).visible)
                .count();
            (rotation, visible)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_space_has_512_states() {
        let states = all_rotation_states();
        assert_eq!(states.len(), 512);
        let mut unique = states.clone();
        unique.sort_by_key(|r| (r.ring1, r.ring2, r.ring3));
        unique.dedup();
        assert_eq!(unique.len(), 512);
    }

    #[test]
    fn ring_one_objects_are_always_visible() {
        // Nothing sits above ring 1, so Auriga is exposed in every state.
        let revealing = rotations_revealing("auriga").unwrap();
        assert_eq!(revealing.len(), 512);
    }

    #[test]
    fn buried_objects_need_a_window() {
        // Pavo on the base of disk A needs all three rings hollow above it;
        // it is visible in some states but far from all.
        let revealing = rotations_revealing("pavo").unwrap();
        assert!(!revealing.is_empty());
        assert!(revealing.len() < 512);
        assert!(revealing.contains(&RotationState::ZERO));
    }

    #[test]
    fn outer_band_objects_ignore_the_rings() {
        let revealing = rotations_revealing("vela").unwrap();
        assert_eq!(revealing.len(), 512);
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(rotations_revealing("nibiru").is_none());
    }

    #[test]
    fn body_counts_cover_every_state() {
        let counts = visible_body_counts();
        assert_eq!(counts.len(), 512);
        // Ring 1's two bodies and the six disk-D bodies are always visible.
        assert!(counts.iter().all(|(_, n)| *n >= 8));
        // At rest exactly one body is buried: the comet Wild under the
        // Vesta Belt.
        let total = catalog::all_objects().filter(|o| o.kind.is_body()).count();
        let (_, at_rest) = counts
            .iter()
            .find(|(r, _)| *r == RotationState::ZERO)
            .expect("rest state is enumerated");
        assert_eq!(*at_rest, total - 1);
    }
}
