use crate::cards::{Card, Rank};

/// A rank-ascending copy of five cards; every shape predicate reads positions
/// of this view.
///
/// The sort is stable, so cards of equal rank keep their slot order. Suits do
/// not take part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortedHand([Card; 5]);

impl SortedHand {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted = *cards;
        sorted.sort_by_key(|c| c.rank());
        Self(sorted)
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }

    fn rank(&self, i: usize) -> Rank {
        self.0[i].rank()
    }

    fn same(&self, a: usize, b: usize) -> bool {
        self.rank(a) == self.rank(b)
    }

    fn run(&self, from: usize, to: usize) -> bool {
        (from..to).all(|i| self.same(i, i + 1))
    }

    pub fn lowest(&self) -> Rank {
        self.rank(0)
    }

    pub fn is_flush(&self) -> bool {
        let suit = self.0[0].suit();
        self.0.iter().all(|c| c.suit() == suit)
    }

    /// Five consecutive ranks, or the wheel.
    pub fn is_straight(&self) -> bool {
        let consecutive = (0..4).all(|i| self.rank(i + 1).ordinal() == self.rank(i).ordinal() + 1);
        consecutive || self.is_wheel()
    }

    /// A-2-3-4-5: the Ace sorts last but plays low.
    pub fn is_wheel(&self) -> bool {
        self.rank(0) == Rank::Two
            && self.rank(1) == Rank::Three
            && self.rank(2) == Rank::Four
            && self.rank(3) == Rank::Five
            && self.rank(4) == Rank::Ace
    }

    pub fn is_four_of_a_kind(&self) -> bool {
        self.run(1, 3) && (self.same(0, 2) || self.same(4, 2))
    }

    pub fn is_full_house(&self) -> bool {
        (self.same(0, 1) && self.run(2, 4)) || (self.run(0, 2) && self.same(3, 4))
    }

    pub fn is_three_of_a_kind(&self) -> bool {
        self.run(0, 2) || self.run(1, 3) || self.run(2, 4)
    }

    pub fn is_two_pair(&self) -> bool {
        (self.same(0, 1) && self.same(2, 3))
            || (self.same(0, 1) && self.same(3, 4))
            || (self.same(1, 2) && self.same(3, 4))
    }

    /// Any adjacent pair whose rank is at least `min`.
    pub fn has_pair_at_least(&self, min: Rank) -> bool {
        (0..4).any(|i| self.same(i, i + 1) && self.rank(i) >= min)
    }
}
