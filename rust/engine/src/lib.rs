//! # yatzy-engine: Yatzy Scoring Core
//!
//! Scores a roll of five six-sided dice under any of the fifteen Yatzy
//! categories. Rolls are validated once at construction; every scoring
//! function after that is pure, total and safe to call from any thread.
//!
//! ## Core Modules
//!
//! - [`dice`] - Validated five-dice roll ([`dice::DiceRoll`]) and its constructors
//! - [`category`] - The closed set of scoring categories
//! - [`counts`] - Per-face occurrence tally used by the multiplicity rules
//! - [`scoring`] - Per-category rules and the [`scoring::score_roll`] dispatch
//! - [`roller`] - Deterministic dice generation with a ChaCha20 RNG
//! - [`errors`] - Error types for roll validation and category parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use yatzy_engine::category::Category;
//! use yatzy_engine::dice::make_roll;
//! use yatzy_engine::scoring::score_roll;
//!
//! let roll = make_roll(&[3, 3, 5, 5, 5]).unwrap();
//! assert_eq!(score_roll(Category::TwoPairs, &roll), 16);
//! assert_eq!(score_roll(Category::FullHouse, &roll), 21);
//! assert_eq!(score_roll(Category::Fives, &roll), 15);
//! ```
//!
//! ## Validation
//!
//! A [`dice::DiceRoll`] can only exist if it holds exactly five faces in
//! `1..=6`:
//!
//! ```rust
//! use yatzy_engine::dice::DiceRoll;
//! use yatzy_engine::errors::RollError;
//!
//! assert!(matches!(
//!     "1 2 7 4 5".parse::<DiceRoll>(),
//!     Err(RollError::InvalidFaceValue { position: 2, value: 7 })
//! ));
//! ```
//!
//! ## Deterministic Rolls
//!
//! ```rust
//! use yatzy_engine::roller::DiceRoller;
//!
//! let mut a = DiceRoller::new_with_seed(42);
//! let mut b = DiceRoller::new_with_seed(42);
//! assert_eq!(a.roll(), b.roll());
//! ```

pub mod category;
pub mod counts;
pub mod dice;
pub mod errors;
pub mod roller;
pub mod scoring;

pub use category::Category;
pub use dice::{make_roll, DiceRoll};
pub use errors::{CategoryParseError, RollError};
pub use scoring::score_roll;
