use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use videopoker::cards::{Card, Rank};
use videopoker::evaluator::{classify, classify_hand, HandCategory};
use videopoker::hand::Hand;
use videopoker::paytable::GameVariant;

fn distinct_hand() -> impl Strategy<Value = [Card; 5]> {
    proptest::sample::subsequence((0..52usize).collect::<Vec<_>>(), 5).prop_map(|idx| {
        let cards: Vec<Card> = idx.into_iter().filter_map(Card::from_deck_index).collect();
        let mut out = [cards[0]; 5];
        out.copy_from_slice(&cards);
        out
    })
}

fn any_min_pair() -> impl Strategy<Value = Rank> {
    prop_oneof![Just(Rank::Ten), Just(Rank::Jack)]
}

/// Counting reference: classify from rank multiplicities instead of positions.
fn by_counts(cards: &[Card; 5], min_pair: Rank) -> HandCategory {
    let mut counts = [0u8; 14];
    for c in cards {
        counts[c.rank().ordinal() as usize] += 1;
    }
    let mut shape: Vec<u8> = counts.iter().copied().filter(|&n| n > 0).collect();
    shape.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let mut ords: Vec<u8> = cards.iter().map(|c| c.rank().ordinal()).collect();
    ords.sort_unstable();
    let distinct = shape.len() == 5;
    let wheel = ords == [1, 2, 3, 4, 13];
    let straight = distinct && (ords[4] - ords[0] == 4 || wheel);

    if straight && flush && ords[0] == Rank::Ten.ordinal() {
        HandCategory::RoyalFlush
    } else if straight && flush {
        HandCategory::StraightFlush
    } else if shape[0] == 4 {
        HandCategory::FourOfAKind
    } else if shape == [3, 2] {
        HandCategory::FullHouse
    } else if flush {
        HandCategory::Flush
    } else if straight {
        HandCategory::Straight
    } else if shape[0] == 3 {
        HandCategory::ThreeOfAKind
    } else if shape == [2, 2, 1] {
        HandCategory::TwoPair
    } else if (min_pair.ordinal()..=13).any(|o| counts[o as usize] == 2) {
        HandCategory::Pair
    } else {
        HandCategory::Nothing
    }
}

proptest! {
    #[test]
    fn agrees_with_counting_reference(cards in distinct_hand(), min_pair in any_min_pair()) {
        prop_assert_eq!(classify(&cards, min_pair), by_counts(&cards, min_pair));
    }

    #[test]
    fn slot_order_does_not_matter(cards in distinct_hand(), seed in any::<u64>()) {
        let mut shuffled = cards;
        shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(classify(&cards, Rank::Jack), classify(&shuffled, Rank::Jack));
    }

    #[test]
    fn hand_wrapper_uses_variant_threshold(cards in distinct_hand()) {
        let hand = Hand::try_new(cards).unwrap();
        prop_assert_eq!(classify_hand(&hand, GameVariant::JacksOrBetter), classify(&cards, Rank::Jack));
        prop_assert_eq!(classify_hand(&hand, GameVariant::TensOrBetter), classify(&cards, Rank::Ten));
    }

    #[test]
    fn lowering_the_threshold_only_promotes_to_pair(cards in distinct_hand()) {
        let jacks = classify(&cards, Rank::Jack);
        let tens = classify(&cards, Rank::Ten);
        if jacks != tens {
            prop_assert_eq!(jacks, HandCategory::Nothing);
            prop_assert_eq!(tens, HandCategory::Pair);
        }
    }

    #[test]
    fn nothing_has_no_made_shape(cards in distinct_hand()) {
        if classify(&cards, Rank::Jack) == HandCategory::Nothing {
            let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
            prop_assert!(!flush);
            let high_pair = cards.iter().enumerate().any(|(i, a)| {
                cards[i + 1..].iter().any(|b| a.rank() == b.rank() && a.rank() >= Rank::Jack)
            });
            prop_assert!(!high_pair);
        }
    }
}
