//! videopoker: rules engine for single-hand draw poker
//!
//! Goals:
//! - Deterministic given a random source: every deal and draw takes an `Rng`
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for rejected operations
//!
//! ## Quick start: play one hand
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use videopoker::paytable::GameVariant;
//! use videopoker::round::Round;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let mut round = Round::new(GameVariant::JacksOrBetter);
//!
//! round.deal(&mut rng).unwrap();
//! assert_eq!(round.bankroll(), 990);
//!
//! round.toggle_hold(0).unwrap();
//! let settled = round.draw(&mut rng).unwrap();
//! assert_eq!(round.bankroll(), 990 + settled.reward as i64);
//! assert_eq!(settled.reward, round.paytable().payout(settled.category) * 10);
//! ```
//!
//! ## Classify a hand
//! ```
//! use videopoker::evaluator::{classify_hand, HandCategory};
//! use videopoker::hand::Hand;
//! use videopoker::paytable::GameVariant;
//!
//! let hand: Hand = "Ah 2h 3h 4h 5h".parse().unwrap();
//! assert_eq!(classify_hand(&hand, GameVariant::JacksOrBetter), HandCategory::StraightFlush);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin videopoker
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod hand;
pub mod paytable;
pub mod round;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
