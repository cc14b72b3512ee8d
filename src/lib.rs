//! Best five card poker hand evaluation.
//!
//! Give it a pool of five or more cards and it finds the strongest five
//! card hand: its category, the ranks that break ties inside that
//! category, and the five cards that make it. Many pools can be turned
//! into standings, best hand first.
//!
//! ```
//! use rs_poker_eval::core::{CardPool, HandCategory, best_of};
//!
//! let pool = CardPool::new_from_str("AhAdAsAcKs2d3h").unwrap();
//! let best = best_of(&pool).unwrap();
//!
//! assert_eq!(HandCategory::FourOfAKind, best.category());
//! assert_eq!(&[14, 13], best.tie_break_key());
//! assert_eq!("Four of a Kind, A's", best.description());
//! ```
//!
//! Everything here is pure synchronous computation with no shared
//! state, so pools can be evaluated from any thread.

/// Cards, pools, decks and single pool evaluation.
pub mod core;

/// Ranking many players against each other.
pub mod standings;
pub use self::standings::{StandingEntry, rank};
