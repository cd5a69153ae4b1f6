pub(crate) mod sorted_hand;

use crate::cards::{Card, Rank};
use crate::hand::Hand;
use crate::paytable::GameVariant;
use std::fmt;

pub use sorted_hand::SortedHand;

/// Video poker hand categories, strongest first.
///
/// Exactly one category applies to any five cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HandCategory {
    RoyalFlush = 0,
    StraightFlush = 1,
    FourOfAKind = 2,
    FullHouse = 3,
    Flush = 4,
    Straight = 5,
    ThreeOfAKind = 6,
    TwoPair = 7,
    Pair = 8,
    Nothing = 9,
}

impl HandCategory {
    /// All categories, strongest first.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::Pair,
        HandCategory::Nothing,
    ];

    /// Position in [`HandCategory::ALL`]; 0 is the strongest.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Pair => "Pair",
            HandCategory::Nothing => "Nothing",
        }
    }

    /// True when `self` beats `other`.
    pub const fn beats(self, other: HandCategory) -> bool {
        (self as u8) < (other as u8)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify five cards. `min_pair` is the lowest rank a pair needs to count
/// as [`HandCategory::Pair`]; lower pairs fall through to `Nothing`.
///
/// Shapes are tested strongest first and the first match wins.
///
/// ```
/// use videopoker::cards::Rank;
/// use videopoker::evaluator::{classify, HandCategory};
/// use videopoker::hand::Hand;
///
/// let hand: Hand = "Jc Jd 4h 7s 9c".parse().unwrap();
/// assert_eq!(classify(hand.cards(), Rank::Jack), HandCategory::Pair);
///
/// let low: Hand = "5c 5d 4h 7s 9c".parse().unwrap();
/// assert_eq!(classify(low.cards(), Rank::Jack), HandCategory::Nothing);
/// ```
pub fn classify(cards: &[Card; 5], min_pair: Rank) -> HandCategory {
    let s = SortedHand::new(cards);
    let flush = s.is_flush();
    let straight = s.is_straight();

    if straight && flush && s.lowest() == Rank::Ten {
        HandCategory::RoyalFlush
    } else if straight && flush {
        HandCategory::StraightFlush
    } else if s.is_four_of_a_kind() {
        HandCategory::FourOfAKind
    } else if s.is_full_house() {
        HandCategory::FullHouse
    } else if flush {
        HandCategory::Flush
    } else if straight {
        HandCategory::Straight
    } else if s.is_three_of_a_kind() {
        HandCategory::ThreeOfAKind
    } else if s.is_two_pair() {
        HandCategory::TwoPair
    } else if s.has_pair_at_least(min_pair) {
        HandCategory::Pair
    } else {
        HandCategory::Nothing
    }
}

/// Classify a hand using the pair threshold of `variant`.
pub fn classify_hand(hand: &Hand, variant: GameVariant) -> HandCategory {
    classify(hand.cards(), variant.min_pair_rank())
}
