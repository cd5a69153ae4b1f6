use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Cards in a video poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("expected exactly 5 cards, got {0}")]
    CardCount(usize),
    #[error("slot {0} is outside 0..5")]
    InvalidSlot(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Five distinct cards held in slots 0..5.
///
/// Slot order matters for holding and replacing; it has no effect on
/// classification.
///
/// ```
/// use videopoker::hand::Hand;
///
/// let hand: Hand = "As Ks Qs Js Ts".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != HAND_SIZE {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Self::try_new(cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn card(&self, slot: usize) -> Option<Card> {
        self.0.get(slot).copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }

    /// Put `card` into `slot`, returning the card it displaced.
    /// Callers draw from the same deck, so the hand stays duplicate-free.
    pub(crate) fn replace(&mut self, slot: usize, card: Card) -> Result<Card, HandError> {
        let cell = self.0.get_mut(slot).ok_or(HandError::InvalidSlot(slot))?;
        Ok(std::mem::replace(cell, card))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Which slots are protected from replacement on the draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoldMask([bool; HAND_SIZE]);

impl HoldMask {
    pub const NONE: HoldMask = HoldMask([false; HAND_SIZE]);
    pub const ALL: HoldMask = HoldMask([true; HAND_SIZE]);

    pub fn is_held(&self, slot: usize) -> bool {
        self.0.get(slot).copied().unwrap_or(false)
    }

    /// Flip a slot and return its new state.
    pub fn toggle(&mut self, slot: usize) -> Result<bool, HandError> {
        let cell = self.0.get_mut(slot).ok_or(HandError::InvalidSlot(slot))?;
        *cell = !*cell;
        Ok(*cell)
    }

    pub fn clear(&mut self) {
        self.0 = [false; HAND_SIZE];
    }

    pub fn held_count(&self) -> usize {
        self.0.iter().filter(|&&h| h).count()
    }

    /// Slots that will be replaced on the draw.
    pub fn discarded_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().enumerate().filter(|(_, &h)| !h).map(|(i, _)| i)
    }

    pub fn as_array(&self) -> [bool; HAND_SIZE] {
        self.0
    }
}

impl From<[bool; HAND_SIZE]> for HoldMask {
    fn from(flags: [bool; HAND_SIZE]) -> Self {
        Self(flags)
    }
}
