use std::fmt;
use std::ops::Deref;

use super::{Card, PokerError};

/// An ordered pool of cards available to one player.
///
/// Unlike a deck a pool does not check for duplicates: keeping the cards
/// unique is up to whoever deals them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    /// Create a new empty pool
    ///
    /// ```
    /// use rs_poker_eval::core::CardPool;
    ///
    /// let pool = CardPool::new();
    /// assert!(pool.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse every identifier in order, failing on the first malformed one.
    ///
    /// ```
    /// use rs_poker_eval::core::CardPool;
    ///
    /// let pool = CardPool::from_identifiers(&["As", "Kd", "As"]).unwrap();
    /// assert_eq!(3, pool.len());
    /// assert!(CardPool::from_identifiers(&["As", "Kx"]).is_err());
    /// ```
    pub fn from_identifiers<S: AsRef<str>>(identifiers: &[S]) -> Result<Self, PokerError> {
        let cards = identifiers
            .iter()
            .map(|id| Card::parse(id.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cards })
    }

    /// Parse a string of concatenated identifiers such as `AsKdTh`.
    /// Whitespace and commas between cards are skipped.
    ///
    /// ```
    /// use rs_poker_eval::core::CardPool;
    ///
    /// let pool = CardPool::new_from_str("As Kd, Th2c").unwrap();
    /// assert_eq!("As Kd Th 2c", pool.to_string());
    /// ```
    pub fn new_from_str(pool_string: &str) -> Result<Self, PokerError> {
        let chars: Vec<char> = pool_string
            .chars()
            .filter(|c| !c.is_ascii_whitespace() && *c != ',')
            .collect();

        let cards = chars
            .chunks(2)
            .map(|pair| Card::parse(&pair.iter().collect::<String>()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cards })
    }

    /// Add a card to the end of the pool.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Take back the most recently added card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Deref for CardPool {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl AsRef<[Card]> for CardPool {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for CardPool {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for CardPool {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for CardPool {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for CardPool {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a CardPool {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for CardPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
