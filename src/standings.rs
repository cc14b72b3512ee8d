use std::cmp::Ordering;

use tracing::event;

use crate::core::{Card, EvaluatedHand, PokerError, best_of};

/// One player's result after ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandingEntry<Id> {
    /// Whatever the caller uses to identify the player.
    pub id: Id,
    /// Best hand of the player's pool, `None` when the pool was empty.
    pub hand: Option<EvaluatedHand>,
    /// 1 based place among players with a hand. Equal hands share a place
    /// and the next place is skipped, so two winners give 1, 1, 3.
    pub place: Option<usize>,
}

impl<Id> StandingEntry<Id> {
    /// Does this player finish in one of the medal places?
    pub fn is_podium(&self) -> bool {
        matches!(self.place, Some(1..=3))
    }
}

/// Sort hands best first, hand-less entries last.
fn by_strength(a: &Option<EvaluatedHand>, b: &Option<EvaluatedHand>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Rank players by the best hand in their pool, best first.
///
/// Players with an empty pool have no hand and come after everyone with
/// one. The sort is stable: players with equal hands, and players without
/// a hand, keep the order they were given in. A pool with one to four
/// cards is an error since no hand can be made from it.
///
/// ```
/// use rs_poker_eval::core::{CardPool, HandCategory};
/// use rs_poker_eval::rank;
///
/// let standings = rank(vec![
///     ("empty", CardPool::new()),
///     ("royal", CardPool::new_from_str("AsKsQsJsTs").unwrap()),
/// ])
/// .unwrap();
///
/// assert_eq!("royal", standings[0].id);
/// assert_eq!(Some(1), standings[0].place);
/// assert_eq!("empty", standings[1].id);
/// assert!(standings[1].hand.is_none());
/// ```
pub fn rank<Id, P, I>(entries: I) -> Result<Vec<StandingEntry<Id>>, PokerError>
where
    I: IntoIterator<Item = (Id, P)>,
    P: AsRef<[Card]>,
{
    let mut standings = entries
        .into_iter()
        .enumerate()
        .map(|(position, (id, pool))| -> Result<StandingEntry<Id>, PokerError> {
            let cards = pool.as_ref();
            let hand = if cards.is_empty() {
                None
            } else {
                Some(best_of(cards)?)
            };
            event!(
                tracing::Level::DEBUG,
                position,
                pool_size = cards.len(),
                category = ?hand.as_ref().map(EvaluatedHand::category),
                "Evaluated entry"
            );
            Ok(StandingEntry {
                id,
                hand,
                place: None,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Vec::sort_by is stable
    standings.sort_by(|a, b| by_strength(&a.hand, &b.hand));
    assign_places(&mut standings);

    event!(
        tracing::Level::DEBUG,
        entries = standings.len(),
        with_hand = standings.iter().filter(|s| s.hand.is_some()).count(),
        "Ranked standings"
    );
    Ok(standings)
}

/// Fill in competition style places on already sorted standings.
fn assign_places<Id>(standings: &mut [StandingEntry<Id>]) {
    let mut previous: Option<(usize, EvaluatedHand)> = None;
    for (i, entry) in standings.iter_mut().enumerate() {
        let Some(hand) = &entry.hand else {
            break;
        };
        let place = match &previous {
            Some((place, prev)) if prev == hand => *place,
            _ => i + 1,
        };
        entry.place = Some(place);
        previous = Some((place, hand.clone()));
    }
}
