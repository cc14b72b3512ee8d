use std::cmp::Ordering;
use std::fmt;

use super::{Card, HAND_SIZE, Value};

/// All the different possible hand categories, weakest first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    Pair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
}

impl HandCategory {
    /// Human readable name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified five card hand.
///
/// Hands are ordered by category first and then by the tie break key,
/// compared element by element with the higher rank winning. The cards
/// themselves take no part in equality or ordering, so two hands compare
/// equal exactly when they split the pot.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatedHand {
    category: HandCategory,
    tie_break_key: Vec<u8>,
    cards: [Card; HAND_SIZE],
}

impl EvaluatedHand {
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Rank ordinals used to break ties within a category, most
    /// significant first. A wheel straight has the key `[5]`.
    pub fn tie_break_key(&self) -> &[u8] {
        &self.tie_break_key
    }

    /// The five cards that made this hand, in the order they were given.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Short description of the hand, e.g. `Full House, K's over 3's`.
    ///
    /// ```
    /// use rs_poker_eval::core::{CardPool, best_of};
    ///
    /// let pool = CardPool::new_from_str("9h9dKcKs2h").unwrap();
    /// assert_eq!("Two Pair, K's & 9's", best_of(&pool).unwrap().description());
    /// ```
    pub fn description(&self) -> String {
        let key = |i: usize| {
            self.tie_break_key
                .get(i)
                .copied()
                .and_then(Value::from_ordinal)
                .map(Value::to_char)
                .unwrap_or('?')
        };
        match self.category {
            HandCategory::HighCard => format!("{} High", key(0)),
            HandCategory::Pair => format!("Pair, {}'s", key(0)),
            HandCategory::TwoPair => format!("Two Pair, {}'s & {}'s", key(0), key(1)),
            HandCategory::ThreeOfAKind => format!("Three of a Kind, {}'s", key(0)),
            HandCategory::Straight => format!("Straight, {} High", key(0)),
            HandCategory::Flush => format!("Flush, {} High", key(0)),
            HandCategory::FullHouse => format!("Full House, {}'s over {}'s", key(0), key(1)),
            HandCategory::FourOfAKind => format!("Four of a Kind, {}'s", key(0)),
            HandCategory::StraightFlush if key(0) == 'A' => "Royal Flush".to_string(),
            HandCategory::StraightFlush => format!("Straight Flush, {} High", key(0)),
        }
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

/// Total order over evaluated hands: category, then tie break key.
///
/// ```
/// use std::cmp::Ordering;
/// use rs_poker_eval::core::{CardPool, best_of, compare};
///
/// let low = best_of(&CardPool::new_from_str("2h2d3c3s4h").unwrap()).unwrap();
/// let high = best_of(&CardPool::new_from_str("9h9dKcKs2h").unwrap()).unwrap();
/// assert_eq!(Ordering::Less, compare(&low, &high));
/// ```
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.tie_break_key.cmp(&b.tie_break_key))
}

/// A run of equal values inside a hand.
#[derive(Debug, Clone, Copy)]
struct Group {
    count: u8,
    value: Value,
}

/// Group the values (sorted high to low) by value, larger groups first and
/// higher values first within the same group size.
fn group_values(values: &[Value; HAND_SIZE]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::with_capacity(HAND_SIZE);
    for &value in values {
        match groups.last_mut() {
            Some(group) if group.value == value => group.count += 1,
            _ => groups.push(Group { count: 1, value }),
        }
    }
    // Stable, so values stay descending inside each count.
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

/// The high card of the straight made by `values` (sorted high to low),
/// if there is one. The wheel counts as five high.
fn straight_high(values: &[Value; HAND_SIZE]) -> Option<Value> {
    let distinct = values.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }
    if values[0].ordinal() - values[4].ordinal() == 4 {
        return Some(values[0]);
    }
    let wheel = [Value::Ace, Value::Five, Value::Four, Value::Three, Value::Two];
    if *values == wheel {
        return Some(Value::Five);
    }
    None
}

fn ordinals(values: impl Iterator<Item = Value>) -> Vec<u8> {
    values.map(Value::ordinal).collect()
}

/// Classify exactly five cards.
///
/// The result only depends on the multiset of cards, so any ordering of
/// the same five cards gives the same category and tie break key.
///
/// ```
/// use rs_poker_eval::core::{Card, HandCategory, classify};
///
/// let cards = ["Ah", "Ad", "As", "Ac", "Ks"].map(|id| id.parse::<Card>().unwrap());
/// let hand = classify(&cards);
/// assert_eq!(HandCategory::FourOfAKind, hand.category());
/// assert_eq!(&[14, 13], hand.tie_break_key());
/// ```
pub fn classify(cards: &[Card; HAND_SIZE]) -> EvaluatedHand {
    let mut values = cards.map(|c| c.value);
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&values);
    let groups = group_values(&values);

    let count_of = |n: u8| groups.iter().filter(|g| g.count == n).count();
    // For every paired category the groups are already in key order.
    let grouped_key = || ordinals(groups.iter().map(|g| g.value));
    let all_values = || ordinals(values.iter().copied());

    let (category, tie_break_key) = match straight {
        Some(high) if is_flush => (HandCategory::StraightFlush, vec![high.ordinal()]),
        _ if count_of(4) == 1 => (HandCategory::FourOfAKind, grouped_key()),
        _ if count_of(3) == 1 && count_of(2) == 1 => (HandCategory::FullHouse, grouped_key()),
        _ if is_flush => (HandCategory::Flush, all_values()),
        Some(high) => (HandCategory::Straight, vec![high.ordinal()]),
        _ if count_of(3) == 1 => (HandCategory::ThreeOfAKind, grouped_key()),
        _ if count_of(2) == 2 => (HandCategory::TwoPair, grouped_key()),
        _ if count_of(2) == 1 => (HandCategory::Pair, grouped_key()),
        _ => (HandCategory::HighCard, all_values()),
    };

    EvaluatedHand {
        category,
        tie_break_key,
        cards: *cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn hand(ids: [&str; 5]) -> EvaluatedHand {
        classify(&ids.map(|id| Card::parse(id).unwrap()))
    }

    #[test]
    fn test_cmp() {
        assert!(HandCategory::HighCard < HandCategory::StraightFlush);
        assert!(HandCategory::HighCard < HandCategory::FourOfAKind);
        assert!(HandCategory::HighCard < HandCategory::ThreeOfAKind);
        assert!(HandCategory::Flush < HandCategory::FullHouse);
    }

    #[test]
    fn test_high_card_hand() {
        let h = hand(["Ad", "8h", "9c", "Tc", "5c"]);
        assert_eq!(HandCategory::HighCard, h.category());
        assert_eq!(&[14, 10, 9, 8, 5], h.tie_break_key());
    }

    #[test]
    fn test_flush() {
        let h = hand(["Ad", "8d", "9d", "Td", "5d"]);
        assert_eq!(HandCategory::Flush, h.category());
        assert_eq!(&[14, 10, 9, 8, 5], h.tie_break_key());
    }

    #[test]
    fn test_full_house() {
        let h = hand(["Ad", "Ac", "9d", "9c", "9s"]);
        assert_eq!(HandCategory::FullHouse, h.category());
        assert_eq!(&[9, 14], h.tie_break_key());
    }

    #[test]
    fn test_two_pair() {
        let h = hand(["Ad", "Ac", "9d", "9c", "Ts"]);
        assert_eq!(HandCategory::TwoPair, h.category());
        assert_eq!(&[14, 9, 10], h.tie_break_key());
    }

    #[test]
    fn test_one_pair() {
        let h = hand(["Ad", "Ac", "9d", "8c", "Ts"]);
        assert_eq!(HandCategory::Pair, h.category());
        assert_eq!(&[14, 10, 9, 8], h.tie_break_key());
    }

    #[test]
    fn test_four_of_a_kind() {
        let h = hand(["Ad", "Ac", "As", "Ah", "Ts"]);
        assert_eq!(HandCategory::FourOfAKind, h.category());
        assert_eq!(&[14, 10], h.tie_break_key());
    }

    #[test]
    fn test_three_of_a_kind() {
        let h = hand(["2c", "2s", "2h", "5s", "6d"]);
        assert_eq!(HandCategory::ThreeOfAKind, h.category());
        assert_eq!(&[2, 6, 5], h.tie_break_key());
    }

    #[test]
    fn test_straight() {
        let h = hand(["2c", "3s", "4h", "5s", "6d"]);
        assert_eq!(HandCategory::Straight, h.category());
        assert_eq!(&[6], h.tie_break_key());
    }

    #[test]
    fn test_wheel() {
        let wheel = hand(["5h", "4d", "3c", "2s", "Ah"]);
        assert_eq!(HandCategory::Straight, wheel.category());
        assert_eq!(&[5], wheel.tie_break_key());

        let six_high = hand(["6c", "5h", "4d", "3c", "2s"]);
        assert!(wheel < six_high);
    }

    #[test]
    fn test_broadway_no_wrap() {
        let h = hand(["Qh", "Kd", "Ac", "2s", "3h"]);
        assert_eq!(HandCategory::HighCard, h.category());
        assert_eq!(&[14, 13, 12, 3, 2], h.tie_break_key());
    }

    #[test]
    fn test_straight_flush() {
        let royal = hand(["As", "Ks", "Qs", "Js", "Ts"]);
        assert_eq!(HandCategory::StraightFlush, royal.category());
        assert_eq!(&[14], royal.tie_break_key());

        let steel_wheel = hand(["Ah", "2h", "3h", "4h", "5h"]);
        assert_eq!(HandCategory::StraightFlush, steel_wheel.category());
        assert_eq!(&[5], steel_wheel.tie_break_key());
        assert!(steel_wheel < royal);
    }

    #[test]
    fn test_permutation_invariant() {
        let ids = ["9h", "9d", "Kc", "Ks", "2h"];
        let expected = hand(ids);
        let cards = ids.map(|id| Card::parse(id).unwrap());
        // Every rotation and reversal of the input.
        for shift in 0..5 {
            let mut rotated = cards;
            rotated.rotate_left(shift);
            let h = classify(&rotated);
            assert_eq!(expected.category(), h.category());
            assert_eq!(expected.tie_break_key(), h.tie_break_key());
            rotated.reverse();
            assert_eq!(expected.tie_break_key(), classify(&rotated).tie_break_key());
        }
    }

    #[test]
    fn test_two_pair_compare() {
        let low = hand(["2h", "2d", "3c", "3s", "4h"]);
        let high = hand(["9h", "9d", "Kc", "Ks", "2h"]);
        assert_eq!(&[3, 2, 4], low.tie_break_key());
        assert_eq!(&[13, 9, 2], high.tie_break_key());
        assert_eq!(Ordering::Greater, compare(&high, &low));
        assert_eq!(Ordering::Less, compare(&low, &high));
    }

    #[test]
    fn test_kickers_decide() {
        let a = hand(["Ah", "Ad", "Kc", "9s", "4h"]);
        let b = hand(["As", "Ac", "Kd", "9h", "3h"]);
        assert_eq!(Ordering::Greater, compare(&a, &b));
    }

    #[test]
    fn test_split_pot_is_equal() {
        let a = hand(["Ah", "Kh", "Qh", "Jh", "9d"]);
        let b = hand(["Ad", "Kd", "Qd", "Jd", "9s"]);
        assert_eq!(Ordering::Equal, compare(&a, &b));
        assert_eq!(a, b);
        assert_ne!(a.cards(), b.cards());
    }

    #[test]
    fn test_category_order_across_hands() {
        // One hand per category, weakest first.
        let ladder = [
            hand(["Ah", "Kd", "Qc", "Js", "9h"]),
            hand(["2h", "2d", "3c", "4s", "5h"]),
            hand(["2h", "2d", "3c", "3s", "4h"]),
            hand(["2h", "2d", "2c", "3s", "4h"]),
            hand(["5h", "4d", "3c", "2s", "Ah"]),
            hand(["2h", "3h", "4h", "5h", "7h"]),
            hand(["2h", "2d", "2c", "3s", "3h"]),
            hand(["2h", "2d", "2c", "2s", "3h"]),
            hand(["Ah", "2h", "3h", "4h", "5h"]),
        ];
        for (i, a) in ladder.iter().enumerate() {
            for (j, b) in ladder.iter().enumerate() {
                assert_eq!(i.cmp(&j), compare(a, b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_duplicate_cards() {
        // Five copies of the same card never panic and rank as a flush.
        let h = hand(["As", "As", "As", "As", "As"]);
        assert_eq!(HandCategory::Flush, h.category());
        assert_eq!(&[14, 14, 14, 14, 14], h.tie_break_key());

        let h = hand(["As", "As", "Ah", "Ad", "Ac"]);
        assert_eq!(HandCategory::HighCard, h.category());

        let h = hand(["As", "As", "Ks", "Qs", "Js"]);
        assert_eq!(HandCategory::Flush, h.category());
    }

    #[test]
    fn test_cards_kept() {
        let cards = [
            Card::new(Value::Two, Suit::Club),
            Card::new(Value::Nine, Suit::Heart),
            Card::new(Value::Four, Suit::Spade),
            Card::new(Value::Jack, Suit::Diamond),
            Card::new(Value::Seven, Suit::Club),
        ];
        assert_eq!(&cards, classify(&cards).cards());
    }

    #[test]
    fn test_descriptions() {
        let cases = [
            (["Ad", "8h", "9c", "Tc", "5c"], "A High"),
            (["Ad", "Ac", "9d", "8c", "Ts"], "Pair, A's"),
            (["Kh", "Kd", "3c", "3s", "2h"], "Two Pair, K's & 3's"),
            (["7h", "7d", "7c", "3s", "2h"], "Three of a Kind, 7's"),
            (["6c", "5h", "4d", "3c", "2s"], "Straight, 6 High"),
            (["5h", "4d", "3c", "2s", "Ah"], "Straight, 5 High"),
            (["Ad", "8d", "9d", "Td", "5d"], "Flush, A High"),
            (["Kh", "Kd", "Kc", "3s", "3h"], "Full House, K's over 3's"),
            (["Ah", "Ad", "As", "Ac", "Ks"], "Four of a Kind, A's"),
            (["2h", "3h", "4h", "5h", "6h"], "Straight Flush, 6 High"),
            (["As", "Ks", "Qs", "Js", "Ts"], "Royal Flush"),
        ];
        for (ids, expected) in cases {
            assert_eq!(expected, hand(ids).to_string());
        }
        assert_eq!("Four of a Kind", HandCategory::FourOfAKind.to_string());
    }
}
