//! This is the core module. It holds everything needed to go from card
//! identifiers to the best five card hand of a pool.

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Error type shared by the whole crate.
mod error;
pub use self::error::PokerError;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::{CardIter, combinations, n_choose_k};

/// Ordered pools of cards.
mod pool;
pub use self::pool::CardPool;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// 5 Card hand ranking code.
mod rank;
/// Export the categories, results and comparison.
pub use self::rank::{EvaluatedHand, HandCategory, classify, compare};

/// Best hand out of any number of cards.
mod best_hand;
pub use self::best_hand::{Rankable, best_of};
