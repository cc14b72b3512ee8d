use std::fmt;
use std::str::FromStr;

use super::PokerError;

/// Card rank or value.
///
/// The discriminant is the rank ordinal used for comparisons and tie breaks,
/// so a Two is 2 and an Ace is 14. Aces are always high here; the wheel
/// straight is handled when ranking a hand.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    ///
    /// ```
    /// use rs_poker_eval::core::Value;
    ///
    /// assert_eq!(13, Value::values().len());
    /// assert_eq!(Value::Ace, Value::values()[12]);
    /// ```
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// The rank ordinal, 2 for a Two up to 14 for an Ace.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Convert a rank ordinal back into a `Value`.
    ///
    /// ```
    /// use rs_poker_eval::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_ordinal(10));
    /// assert_eq!(None, Value::from_ordinal(1));
    /// assert_eq!(None, Value::from_ordinal(15));
    /// ```
    pub fn from_ordinal(ordinal: u8) -> Option<Value> {
        VALUES.iter().copied().find(|v| v.ordinal() == ordinal)
    }

    /// Parse the rank letter of a card identifier. Letters are case
    /// sensitive.
    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The rank letter used in card identifiers.
    pub fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Clubs
    Club,
    /// Diamonds
    Diamond,
    /// Hearts
    Heart,
    /// Spades
    Spade,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse the lowercase suit letter of a card identifier.
    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'c' => Some(Suit::Club),
            'd' => Some(Suit::Diamond),
            'h' => Some(Suit::Heart),
            's' => Some(Suit::Spade),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A playing card: a `Value` and a `Suit`.
///
/// Two cards are equal when both their value and suit match. Cards are
/// written and parsed as two character identifiers such as `As`, `Th` or
/// `2c`.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parse a card identifier of the form `<rank><suit>`.
    ///
    /// ```
    /// use rs_poker_eval::core::{Card, Suit, Value};
    ///
    /// let card = Card::parse("Th").unwrap();
    /// assert_eq!(Card::new(Value::Ten, Suit::Heart), card);
    ///
    /// assert!(Card::parse("1h").is_err());
    /// assert!(Card::parse("AS").is_err());
    /// assert!(Card::parse("Ahh").is_err());
    /// ```
    pub fn parse(identifier: &str) -> Result<Self, PokerError> {
        let invalid = || PokerError::InvalidCardFormat(identifier.to_string());
        let mut chars = identifier.chars();
        let value = chars.next().and_then(Value::from_char).ok_or_else(invalid)?;
        let suit = chars.next().and_then(Suit::from_char).ok_or_else(invalid)?;

        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { value, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Card::parse(value)
    }
}

impl TryFrom<String> for Card {
    type Error = PokerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Card::parse(&value)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}
