//! Scoring rules for every [`Category`].
//!
//! Every function here is pure and total over valid rolls: it only reads the
//! roll it is given and always returns a score, where 0 means the roll does not
//! fit the category.

use crate::category::{Category, NUM_CATS};
use crate::counts::count_faces;
use crate::dice::DiceRoll;

pub const YATZY_SCORE: u32 = 50;
pub const SMALL_STRAIGHT_SCORE: u32 = 15;
pub const LARGE_STRAIGHT_SCORE: u32 = 20;

/// Scores `roll` under `category`.
///
/// # Examples
///
/// ```
/// use yatzy_engine::category::Category;
/// use yatzy_engine::dice::make_roll;
/// use yatzy_engine::scoring::score_roll;
///
/// let roll = make_roll(&[5, 3, 6, 6, 5]).unwrap();
/// assert_eq!(score_roll(Category::Pair, &roll), 12);
/// assert_eq!(score_roll(Category::TwoPairs, &roll), 22);
/// assert_eq!(score_roll(Category::Chance, &roll), 25);
/// assert_eq!(score_roll(Category::Yatzy, &roll), 0);
/// ```
pub fn score_roll(category: Category, roll: &DiceRoll) -> u32 {
    let score = match category {
        Category::Ones => upper(1, roll),
        Category::Twos => upper(2, roll),
        Category::Threes => upper(3, roll),
        Category::Fours => upper(4, roll),
        Category::Fives => upper(5, roll),
        Category::Sixes => upper(6, roll),
        Category::Pair => one_pair(roll),
        Category::TwoPairs => two_pairs(roll),
        Category::ThreeOfAKind => three_of_a_kind(roll),
        Category::FourOfAKind => four_of_a_kind(roll),
        Category::SmallStraight => small_straight(roll),
        Category::LargeStraight => large_straight(roll),
        Category::FullHouse => full_house(roll),
        Category::Chance => chance(roll),
        Category::Yatzy => yatzy(roll),
    };
    tracing::trace!(%category, %roll, score, "scored roll");
    score
}

/// Scores every category at once, indexed like [`Category::ALL`].
pub fn score_all(roll: &DiceRoll) -> [u32; NUM_CATS] {
    let mut out = [0u32; NUM_CATS];
    for (slot, cat) in out.iter_mut().zip(Category::ALL) {
        *slot = score_roll(cat, roll);
    }
    out
}

/// Highest scoring category for `roll`; ties go to the earliest category in
/// [`Category::ALL`].
pub fn best_category(roll: &DiceRoll) -> (Category, u32) {
    let scores = score_all(roll);
    let mut best = (Category::ALL[0], scores[0]);
    for (cat, score) in Category::ALL.into_iter().zip(scores).skip(1) {
        if score > best.1 {
            best = (cat, score);
        }
    }
    best
}

/// Sum of the dice showing `face`. Faces outside `1..=6` score 0.
pub fn upper(face: u8, roll: &DiceRoll) -> u32 {
    roll.iter()
        .filter(|&f| f == face)
        .map(u32::from)
        .sum()
}

pub fn chance(roll: &DiceRoll) -> u32 {
    roll.sum()
}

pub fn yatzy(roll: &DiceRoll) -> u32 {
    match count_faces(roll).highest_with_at_least(5) {
        Some(_) => YATZY_SCORE,
        None => 0,
    }
}

/// Twice the highest face showing at least twice.
pub fn one_pair(roll: &DiceRoll) -> u32 {
    n_of_a_kind(roll, 2)
}

/// Highest pair plus the highest pair of a different face.
///
/// A triple counts as a pair, so `3,3,5,5,5` scores `2*5 + 2*3`.
pub fn two_pairs(roll: &DiceRoll) -> u32 {
    let counts = count_faces(roll);
    let Some(first) = counts.highest_with_at_least(2) else {
        return 0;
    };
    match counts.without(first).highest_with_at_least(2) {
        Some(second) => 2 * u32::from(first) + 2 * u32::from(second),
        None => 0,
    }
}

pub fn three_of_a_kind(roll: &DiceRoll) -> u32 {
    n_of_a_kind(roll, 3)
}

pub fn four_of_a_kind(roll: &DiceRoll) -> u32 {
    n_of_a_kind(roll, 4)
}

pub fn small_straight(roll: &DiceRoll) -> u32 {
    if roll.sorted() == [1, 2, 3, 4, 5] {
        SMALL_STRAIGHT_SCORE
    } else {
        0
    }
}

pub fn large_straight(roll: &DiceRoll) -> u32 {
    if roll.sorted() == [2, 3, 4, 5, 6] {
        LARGE_STRAIGHT_SCORE
    } else {
        0
    }
}

/// A face shown exactly three times plus a different face shown exactly twice.
/// Five of a kind and four of a kind do not count.
pub fn full_house(roll: &DiceRoll) -> u32 {
    let counts = count_faces(roll);
    if counts.highest_with_at_least(5).is_some() {
        return 0;
    }
    let Some(triple) = counts.highest_with_exactly(3) else {
        return 0;
    };
    match counts.without(triple).highest_with_exactly(2) {
        Some(pair) => 3 * u32::from(triple) + 2 * u32::from(pair),
        None => 0,
    }
}

// `n` times the highest face shown at least `n` times.
fn n_of_a_kind(roll: &DiceRoll, n: u8) -> u32 {
    count_faces(roll)
        .highest_with_at_least(n)
        .map_or(0, |face| u32::from(n) * u32::from(face))
}
