use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RollError;

/// Number of dice in every roll.
pub const NUM_DICE: usize = 5;
/// Lowest face on a die.
pub const MIN_FACE: u8 = 1;
/// Highest face on a die.
pub const MAX_FACE: u8 = 6;

/// Five six-sided dice, validated at construction.
///
/// Faces are kept in the order they were supplied. None of the scoring rules
/// depend on that order. There is no way to change a roll after it has been
/// built, so a `DiceRoll` can be copied and shared freely.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct DiceRoll {
    faces: [u8; NUM_DICE],
}

/// Validates `faces` and builds a [`DiceRoll`].
///
/// The length is checked first, then each face from left to right; the first
/// problem found is reported.
///
/// # Errors
///
/// - [`RollError::InvalidRollLength`] - `faces` does not hold exactly 5 values
/// - [`RollError::InvalidFaceValue`] - a value lies outside `1..=6`. Values too
///   large for an `i64` are reported as `i64::MAX`.
///
/// # Examples
///
/// ```
/// use yatzy_engine::dice::make_roll;
/// use yatzy_engine::errors::RollError;
///
/// let roll = make_roll(&[2, 3, 4, 5, 1]).unwrap();
/// assert_eq!(roll.faces(), &[2, 3, 4, 5, 1]);
///
/// assert_eq!(
///     make_roll(&[1, 2, 3, 4, 5, 5]),
///     Err(RollError::InvalidRollLength { len: 6 })
/// );
/// assert_eq!(
///     make_roll(&[1, 2, 7, 4, 5]),
///     Err(RollError::InvalidFaceValue { position: 2, value: 7 })
/// );
/// ```
pub fn make_roll<T>(faces: &[T]) -> Result<DiceRoll, RollError>
where
    T: Copy + TryInto<i64>,
{
    if faces.len() != NUM_DICE {
        tracing::debug!(len = faces.len(), "rejected roll: wrong number of dice");
        return Err(RollError::InvalidRollLength { len: faces.len() });
    }

    let mut out = [0u8; NUM_DICE];
    for (position, (slot, &face)) in out.iter_mut().zip(faces).enumerate() {
        let value: i64 = face.try_into().unwrap_or(i64::MAX);
        if !(i64::from(MIN_FACE)..=i64::from(MAX_FACE)).contains(&value) {
            tracing::debug!(position, value, "rejected roll: face out of range");
            return Err(RollError::InvalidFaceValue { position, value });
        }
        *slot = value as u8;
    }

    Ok(DiceRoll { faces: out })
}

impl DiceRoll {
    /// Same as [`make_roll`].
    pub fn new<T>(faces: &[T]) -> Result<Self, RollError>
    where
        T: Copy + TryInto<i64>,
    {
        make_roll(faces)
    }

    pub fn faces(&self) -> &[u8; NUM_DICE] {
        &self.faces
    }

    pub fn sum(&self) -> u32 {
        self.faces.iter().map(|&f| u32::from(f)).sum()
    }

    /// Faces sorted ascending.
    pub fn sorted(&self) -> [u8; NUM_DICE] {
        let mut f = self.faces;
        f.sort_unstable();
        f
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.faces.iter().copied()
    }

    // Only for faces that have already been range-checked.
    pub(crate) fn from_checked(faces: [u8; NUM_DICE]) -> Self {
        debug_assert!(faces.iter().all(|f| (MIN_FACE..=MAX_FACE).contains(f)));
        Self { faces }
    }
}

impl TryFrom<&[u8]> for DiceRoll {
    type Error = RollError;

    fn try_from(faces: &[u8]) -> Result<Self, Self::Error> {
        make_roll(faces)
    }
}

impl TryFrom<[u8; NUM_DICE]> for DiceRoll {
    type Error = RollError;

    fn try_from(faces: [u8; NUM_DICE]) -> Result<Self, Self::Error> {
        make_roll(&faces)
    }
}

impl TryFrom<Vec<u8>> for DiceRoll {
    type Error = RollError;

    fn try_from(faces: Vec<u8>) -> Result<Self, Self::Error> {
        make_roll(&faces)
    }
}

impl From<DiceRoll> for Vec<u8> {
    fn from(roll: DiceRoll) -> Self {
        roll.faces.to_vec()
    }
}

/// Parses five faces separated by commas and/or whitespace, e.g. `"1,2,3,4,5"`
/// or `"6 6 2 2 6"`.
impl FromStr for DiceRoll {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values: Vec<i64> = Vec::with_capacity(NUM_DICE);
        for token in s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let v = token.parse::<i64>().map_err(|_| {
                tracing::debug!(token, "rejected roll: not a number");
                RollError::InvalidToken {
                    token: token.to_string(),
                }
            })?;
            values.push(v);
        }
        make_roll(&values)
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.faces;
        write!(f, "[{a}, {b}, {c}, {d}, {e}]")
    }
}
