use tracing::event;

use super::{
    Card, EvaluatedHand, HAND_SIZE, HandCategory, PokerError, Value, classify, combinations,
};

/// Anything that holds a pool of cards can find its best five card hand.
pub trait Rankable {
    /// Best five card hand out of all the cards, see [`best_of`].
    fn best_hand(&self) -> Result<EvaluatedHand, PokerError>;
}

impl Rankable for [Card] {
    fn best_hand(&self) -> Result<EvaluatedHand, PokerError> {
        best_of(self)
    }
}

/// Find the best five card hand that can be made from `pool`.
///
/// Every five card subset is classified and the strongest one kept. When
/// several subsets are equally strong the first one found, in
/// lexicographic index order, is the one reported. The scan stops early
/// only on a royal flush since nothing can beat it.
///
/// ```
/// use rs_poker_eval::core::{CardPool, HandCategory, best_of};
///
/// let pool = CardPool::new_from_str("2h3h4h5h6hAhKdTc9s8h").unwrap();
/// let best = best_of(&pool).unwrap();
/// assert_eq!(HandCategory::StraightFlush, best.category());
/// assert_eq!(&[6], best.tie_break_key());
/// ```
pub fn best_of(pool: &[Card]) -> Result<EvaluatedHand, PokerError> {
    let mut hands = combinations(pool)?.map(|cards| classify(&cards));
    // combinations never yields an empty iterator for five or more cards
    let mut best = hands.next().ok_or(PokerError::InsufficientCards {
        required: HAND_SIZE,
        found: pool.len(),
    })?;
    let mut scanned = 1usize;

    for candidate in hands {
        if is_royal_flush(&best) {
            break;
        }
        scanned += 1;
        if candidate > best {
            best = candidate;
        }
    }

    event!(
        tracing::Level::TRACE,
        pool_size = pool.len(),
        scanned,
        category = ?best.category(),
        "Selected best hand"
    );
    Ok(best)
}

fn is_royal_flush(hand: &EvaluatedHand) -> bool {
    hand.category() == HandCategory::StraightFlush
        && hand.tie_break_key().first() == Some(&Value::Ace.ordinal())
}
