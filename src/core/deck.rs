use std::ops::{Index, RangeFull};

use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use super::{Card, Suit, Value};

/// The standard 52 card deck that pools are dealt from.
///
/// Cards are dealt from the end, so a freshly created deck deals the
/// Ace of spades first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

/// Suit order used when building a new deck.
const CREATION_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Deck {
    /// Create the unshuffled 52 card deck, hearts first and every suit
    /// running from Two to Ace.
    ///
    /// ```
    /// use rs_poker_eval::core::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(52, deck.len());
    /// assert_eq!("2h", deck[0].to_string());
    /// ```
    pub fn new() -> Self {
        let cards = CREATION_SUITS
            .iter()
            .flat_map(|&suit| Value::values().into_iter().map(move |v| Card::new(v, suit)))
            .collect();
        Self { cards }
    }

    /// How many cards are left in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Randomly shuffle the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Deal a card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Given a card, is it still in the deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }
}

/// A shuffled deck using the thread local rng.
impl Default for Deck {
    fn default() -> Self {
        let mut deck = Self::new();
        deck.shuffle(&mut rng());
        deck
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Index<RangeFull> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_new_is_unique() {
        let d = Deck::new();
        let unique: HashSet<Card> = d[..].iter().copied().collect();
        assert_eq!(52, unique.len());
        assert!(d.contains(&Card::new(Value::Eight, Suit::Heart)));
    }

    #[test]
    fn test_creation_order() {
        let d = Deck::new();
        assert_eq!(Card::new(Value::Two, Suit::Heart), d[0]);
        assert_eq!(Card::new(Value::Ace, Suit::Heart), d[12]);
        assert_eq!(Card::new(Value::Two, Suit::Diamond), d[13]);
        assert_eq!(Card::new(Value::Ace, Suit::Spade), d[51]);
    }

    #[test]
    fn test_deal_until_empty() {
        let mut d = Deck::new();
        assert_eq!(Some(Card::new(Value::Ace, Suit::Spade)), d.deal());
        let mut dealt = 1;
        while d.deal().is_some() {
            dealt += 1;
        }
        assert_eq!(52, dealt);
        assert!(d.is_empty());
        assert_eq!(None, d.deal());
    }

    #[test]
    fn test_shuffle_rng() {
        let mut d_one = Deck::new();
        let mut d_two = Deck::new();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        d_one.shuffle(&mut rng_one);
        d_two.shuffle(&mut rng_two);

        assert_eq!(d_one, d_two);
        assert_ne!(Deck::new(), d_one);
    }

    #[test]
    fn test_default_is_full() {
        let d = Deck::default();
        let unique: HashSet<Card> = d.into_iter().collect();
        assert_eq!(52, unique.len());
    }
}
