//! Per-face occurrence tally shared by the multiplicity-based rules.

use crate::dice::{DiceRoll, MAX_FACE};

/// Number of dice showing each face, indexed by `face - 1`.
///
/// Built fresh for every scoring call by [`count_faces`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FaceCounts([u8; MAX_FACE as usize]);

pub fn count_faces(roll: &DiceRoll) -> FaceCounts {
    let mut counts = [0u8; MAX_FACE as usize];
    for face in roll.iter() {
        counts[(face - 1) as usize] += 1;
    }
    FaceCounts(counts)
}

impl FaceCounts {
    /// How many dice show `face`. Faces outside `1..=6` count as 0.
    pub fn count(&self, face: u8) -> u8 {
        match face {
            1..=MAX_FACE => self.0[(face - 1) as usize],
            _ => 0,
        }
    }

    pub fn as_array(&self) -> &[u8; MAX_FACE as usize] {
        &self.0
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|&c| u32::from(c)).sum()
    }

    /// Highest face shown at least `min` times.
    pub fn highest_with_at_least(&self, min: u8) -> Option<u8> {
        (1..=MAX_FACE).rev().find(|&f| self.count(f) >= min)
    }

    /// Highest face shown exactly `n` times.
    pub fn highest_with_exactly(&self, n: u8) -> Option<u8> {
        (1..=MAX_FACE).rev().find(|&f| self.count(f) == n)
    }

    /// Copy with the bucket for `face` emptied.
    pub fn without(&self, face: u8) -> FaceCounts {
        let mut out = *self;
        if (1..=MAX_FACE).contains(&face) {
            out.0[(face - 1) as usize] = 0;
        }
        out
    }
}
