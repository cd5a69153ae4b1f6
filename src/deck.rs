use crate::cards::{Card, Rank, Suit};
use rand::Rng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    /// Every card is already dealt. Unreachable while rounds reset the deck
    /// before each deal; seeing it means that reset was skipped.
    #[error("deck exhausted: all 52 cards are dealt")]
    Exhausted,
}

/// A standard 52-card deck with a dealt flag per card.
///
/// Cards never leave the deck; dealing only flips the flag, and [`Deck::reset`]
/// clears every flag at once.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    dealt: [bool; DECK_SIZE],
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    /// ```
    /// use videopoker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.dealt_count(), 0);
    /// ```
    pub fn standard() -> Self {
        let cards = std::array::from_fn(|i| Card::new(Rank::ALL[i % 13], Suit::ALL[i / 13]));
        Self { cards, dealt: [false; DECK_SIZE] }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Mark every card undealt.
    pub fn reset(&mut self) {
        self.dealt = [false; DECK_SIZE];
    }

    pub fn dealt_count(&self) -> usize {
        self.dealt.iter().filter(|&&d| d).count()
    }

    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.dealt_count()
    }

    pub fn is_dealt(&self, card: Card) -> bool {
        self.dealt[card.deck_index()]
    }

    /// Deal one card chosen uniformly among the undealt ones.
    ///
    /// Samples a uniform slot and retries while it is already dealt; every
    /// retry is an independent uniform draw, so the accepted card is uniform
    /// over the undealt set.
    pub fn draw_random_undealt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        if self.remaining() == 0 {
            return Err(DeckError::Exhausted);
        }
        loop {
            let i = rng.random_range(0..DECK_SIZE);
            if !self.dealt[i] {
                self.dealt[i] = true;
                return Ok(self.cards[i]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.cards.iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let mut r1 = ChaCha8Rng::seed_from_u64(42);
        let mut r2 = ChaCha8Rng::seed_from_u64(42);
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        for _ in 0..5 {
            assert_eq!(d1.draw_random_undealt(&mut r1), d2.draw_random_undealt(&mut r2));
        }
    }

    #[test]
    fn draws_mark_cards_and_never_repeat() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut d = Deck::standard();
        let mut seen = HashSet::new();
        for n in 1..=DECK_SIZE {
            let c = d.draw_random_undealt(&mut rng).unwrap();
            assert!(seen.insert(c));
            assert!(d.is_dealt(c));
            assert_eq!(d.dealt_count(), n);
        }
        assert_eq!(d.draw_random_undealt(&mut rng), Err(DeckError::Exhausted));
    }

    #[test]
    fn reset_clears_all_flags() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut d = Deck::standard();
        for _ in 0..10 {
            d.draw_random_undealt(&mut rng).unwrap();
        }
        assert_eq!(d.remaining(), 42);
        d.reset();
        assert_eq!(d.dealt_count(), 0);
    }

    #[test]
    fn last_undealt_card_is_found() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut d = Deck::standard();
        d.dealt = [true; DECK_SIZE];
        d.dealt[17] = false;
        let c = d.draw_random_undealt(&mut rng).unwrap();
        assert_eq!(c.deck_index(), 17);
    }

    #[test]
    fn draws_are_uniform_over_undealt_cards() {
        const UNDEALT: usize = 12;
        const DRAWS: usize = 24_000;
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut d = Deck::standard();
        d.dealt = [true; DECK_SIZE];
        for i in DECK_SIZE - UNDEALT..DECK_SIZE {
            d.dealt[i] = false;
        }

        let mut counts = [0usize; DECK_SIZE];
        for _ in 0..DRAWS {
            let c = d.draw_random_undealt(&mut rng).unwrap();
            counts[c.deck_index()] += 1;
            d.dealt[c.deck_index()] = false;
        }

        let expected = DRAWS / UNDEALT;
        for (i, &n) in counts.iter().enumerate() {
            if i < DECK_SIZE - UNDEALT {
                assert_eq!(n, 0, "dealt card {i} was drawn");
            } else {
                assert!(n.abs_diff(expected) < 300, "card {i} drawn {n} times, expected ~{expected}");
            }
        }
    }
}
