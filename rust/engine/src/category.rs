use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CategoryParseError;

pub const NUM_CATS: usize = 15;

/// One of the fifteen Yatzy scoring categories.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Sum of the dice showing 1
    Ones,
    /// Sum of the dice showing 2
    Twos,
    /// Sum of the dice showing 3
    Threes,
    /// Sum of the dice showing 4
    Fours,
    /// Sum of the dice showing 5
    Fives,
    /// Sum of the dice showing 6
    Sixes,
    /// Highest pair
    Pair,
    /// Two pairs of different faces
    TwoPairs,
    /// Three dice of the same face
    ThreeOfAKind,
    /// Four dice of the same face
    FourOfAKind,
    /// 1-2-3-4-5
    SmallStraight,
    /// 2-3-4-5-6
    LargeStraight,
    /// A triple plus a pair of another face
    FullHouse,
    /// Sum of all dice
    Chance,
    /// All five dice equal
    Yatzy,
}

impl Category {
    /// All categories in score-sheet order.
    pub const ALL: [Category; NUM_CATS] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Pair,
        Category::TwoPairs,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::FullHouse,
        Category::Chance,
        Category::Yatzy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::Pair => "pair",
            Category::TwoPairs => "two_pairs",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::FourOfAKind => "four_of_a_kind",
            Category::SmallStraight => "small_straight",
            Category::LargeStraight => "large_straight",
            Category::FullHouse => "full_house",
            Category::Chance => "chance",
            Category::Yatzy => "yatzy",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The face counted by an upper-section category, `None` for the rest.
    pub fn upper_face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    pub fn is_upper(self) -> bool {
        self.upper_face().is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the snake_case names from [`Category::name`] in any letter case,
/// plus the short forms `two_pair`, `three_of_kind` and `four_of_kind`.
/// Dashes and spaces are read as underscores.
impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        let cat = match key.as_str() {
            "two_pair" => Category::TwoPairs,
            "three_of_kind" => Category::ThreeOfAKind,
            "four_of_kind" => Category::FourOfAKind,
            other => Category::ALL
                .into_iter()
                .find(|c| c.name() == other)
                .ok_or_else(|| CategoryParseError(s.to_string()))?,
        };
        Ok(cat)
    }
}
