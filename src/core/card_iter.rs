use std::iter::FusedIterator;

use super::{Card, HAND_SIZE, PokerError};

/// Iterator over every `K` card subset of a slice of cards.
///
/// Subsets come out in lexicographic order of their indices into the
/// source slice, and the cards inside each subset keep their relative
/// order. Only the `K` current indices are kept around, so iterating
/// `C(n, K)` subsets never materializes them all at once.
///
/// ```
/// use rs_poker_eval::core::{Card, CardIter};
///
/// let cards: Vec<Card> = ["As", "Kd", "Qh"]
///     .iter()
///     .map(|id| id.parse().unwrap())
///     .collect();
///
/// let pairs: Vec<[Card; 2]> = CardIter::<2>::new(&cards).collect();
/// assert_eq!(3, pairs.len());
/// assert_eq!([cards[0], cards[1]], pairs[0]);
/// assert_eq!([cards[1], cards[2]], pairs[2]);
/// ```
#[derive(Debug, Clone)]
pub struct CardIter<'a, const K: usize> {
    // All the possible cards that can be picked
    possible_cards: &'a [Card],
    // Offsets of the next subset to hand out.
    idx: [usize; K],
    // How many subsets are left including the one at `idx`.
    remaining: usize,
}

impl<'a, const K: usize> CardIter<'a, K> {
    pub fn new(possible_cards: &'a [Card]) -> Self {
        Self {
            possible_cards,
            idx: std::array::from_fn(|i| i),
            remaining: n_choose_k(possible_cards.len(), K),
        }
    }

    /// Move `idx` to the next subset in lexicographic order.
    fn advance(&mut self) {
        let n = self.possible_cards.len();
        let mut level = K;
        while level > 0 {
            level -= 1;
            // Highest offset this level can hold while leaving room
            // for the levels after it.
            if self.idx[level] < n - K + level {
                self.idx[level] += 1;
                for next in level + 1..K {
                    self.idx[next] = self.idx[next - 1] + 1;
                }
                return;
            }
        }
    }
}

impl<const K: usize> Iterator for CardIter<'_, K> {
    type Item = [Card; K];

    fn next(&mut self) -> Option<[Card; K]> {
        if self.remaining == 0 {
            return None;
        }

        let cards = std::array::from_fn(|i| self.possible_cards[self.idx[i]]);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(cards)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const K: usize> ExactSizeIterator for CardIter<'_, K> {}

impl<const K: usize> FusedIterator for CardIter<'_, K> {}

/// Every five card subset of `pool`.
///
/// Each call starts a fresh iteration. Fails with
/// `PokerError::InsufficientCards` when the pool holds fewer than five
/// cards.
///
/// ```
/// use rs_poker_eval::core::{CardPool, combinations};
///
/// let pool = CardPool::new_from_str("AhAdAsAcKs2d3h").unwrap();
/// assert_eq!(21, combinations(&pool).unwrap().count());
///
/// let short = CardPool::new_from_str("AhAd").unwrap();
/// assert!(combinations(&short).is_err());
/// ```
pub fn combinations(pool: &[Card]) -> Result<CardIter<'_, HAND_SIZE>, PokerError> {
    if pool.len() < HAND_SIZE {
        return Err(PokerError::InsufficientCards {
            required: HAND_SIZE,
            found: pool.len(),
        });
    }
    Ok(CardIter::new(pool))
}

/// Binomial coefficient, saturating at `usize::MAX`.
pub fn n_choose_k(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // Exact at every step since result holds C(n, i) * (n - i) here.
        result = result * (n - i) as u128 / (i + 1) as u128;
        if result > usize::MAX as u128 {
            return usize::MAX;
        }
    }
    result as usize
}
