use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::dice::{DiceRoll, MAX_FACE, MIN_FACE, NUM_DICE};

/// Seeded source of dice rolls. The same seed always yields the same sequence.
///
/// A convenience for callers that need dice to score; the scoring functions
/// never use it and accept rolls from any source.
#[derive(Debug)]
pub struct DiceRoller {
    rng: ChaCha20Rng,
    seed: u64,
    rolls: u64,
}

impl DiceRoller {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            rolls: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of rolls and rerolls produced so far.
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    pub fn roll(&mut self) -> DiceRoll {
        self.reroll_faces([0; NUM_DICE], [false; NUM_DICE])
    }

    /// Rolls again every die whose `keep` flag is false; kept dice stay in place.
    pub fn reroll(&mut self, roll: &DiceRoll, keep: [bool; NUM_DICE]) -> DiceRoll {
        self.reroll_faces(*roll.faces(), keep)
    }

    fn reroll_faces(&mut self, mut faces: [u8; NUM_DICE], keep: [bool; NUM_DICE]) -> DiceRoll {
        for (face, kept) in faces.iter_mut().zip(keep) {
            if !kept {
                *face = self.rng.random_range(MIN_FACE..=MAX_FACE);
            }
        }
        self.rolls += 1;
        let roll = DiceRoll::from_checked(faces);
        tracing::trace!(seed = self.seed, n = self.rolls, %roll, "rolled dice");
        roll
    }
}
