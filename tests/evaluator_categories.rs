use videopoker::cards::{Card, Rank, Suit};
use videopoker::evaluator::{classify, classify_hand, HandCategory};
use videopoker::hand::Hand;
use videopoker::paytable::GameVariant;

fn jacks(s: &str) -> HandCategory {
    let hand: Hand = s.parse().unwrap();
    classify_hand(&hand, GameVariant::JacksOrBetter)
}

#[test]
fn category_royal_flush() {
    let royal = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];
    assert_eq!(classify(&royal, Rank::Jack), HandCategory::RoyalFlush);
    assert_eq!(jacks("10h Ah Qh Kh Jh"), HandCategory::RoyalFlush);
}

#[test]
fn category_straight_flush() {
    assert_eq!(jacks("9d Kd Qd Jd 10d"), HandCategory::StraightFlush);
    assert_eq!(jacks("6c 2c 3c 4c 5c"), HandCategory::StraightFlush);
}

#[test]
fn wheel_straight_flush_is_not_royal() {
    assert_eq!(jacks("Ac 2c 3c 4c 5c"), HandCategory::StraightFlush);
}

#[test]
fn category_four_of_a_kind() {
    let xs = [
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Spades),
        Card::new(Rank::Ace, Suit::Clubs),
    ];
    assert_eq!(classify(&xs, Rank::Jack), HandCategory::FourOfAKind);
    // kicker below the quads
    assert_eq!(jacks("2c Kc Kd Kh Ks"), HandCategory::FourOfAKind);
}

#[test]
fn category_full_house() {
    assert_eq!(jacks("3c 3d 3h Js Jc"), HandCategory::FullHouse);
    assert_eq!(jacks("Ac Ad 4h 4s 4c"), HandCategory::FullHouse);
}

#[test]
fn category_flush() {
    assert_eq!(jacks("Kh 10h 8h 6h 3h"), HandCategory::Flush);
}

#[test]
fn category_straight() {
    assert_eq!(jacks("5c 6d 7h 8s 9c"), HandCategory::Straight);
    assert_eq!(jacks("10c Jd Qh Ks Ac"), HandCategory::Straight);
}

#[test]
fn wheel_is_a_straight() {
    assert_eq!(jacks("Ac 2d 3h 4s 5c"), HandCategory::Straight);
}

#[test]
fn broadway_does_not_wrap_around() {
    assert_eq!(jacks("Qc Kd Ah 2s 3c"), HandCategory::Nothing);
}

#[test]
fn category_three_of_a_kind() {
    assert_eq!(jacks("7c 7d 7h 2s Kc"), HandCategory::ThreeOfAKind);
    assert_eq!(jacks("2c 3d Ah As Ac"), HandCategory::ThreeOfAKind);
}

#[test]
fn category_two_pair() {
    assert_eq!(jacks("4c 4d 9h 9s Kc"), HandCategory::TwoPair);
    assert_eq!(jacks("2c 2d 3h 3s Ac"), HandCategory::TwoPair);
}

#[test]
fn pair_needs_qualifying_rank() {
    assert_eq!(jacks("Jc Jd 4h 7s 9c"), HandCategory::Pair);
    assert_eq!(jacks("Ac 2d 4h 7s As"), HandCategory::Pair);
    assert_eq!(jacks("10c 10d 4h 7s 9c"), HandCategory::Nothing);
    assert_eq!(jacks("2c 2d 4h 7s 9c"), HandCategory::Nothing);
}

#[test]
fn tens_or_better_lowers_the_threshold() {
    let tens: Hand = "10c 10d 4h 7s 9c".parse().unwrap();
    assert_eq!(classify_hand(&tens, GameVariant::TensOrBetter), HandCategory::Pair);
    let nines: Hand = "9c 9d 4h 7s 2c".parse().unwrap();
    assert_eq!(classify_hand(&nines, GameVariant::TensOrBetter), HandCategory::Nothing);
}

#[test]
fn category_nothing() {
    assert_eq!(jacks("Ac Kd 7h 5s 2c"), HandCategory::Nothing);
}

#[test]
fn categories_order_by_strength() {
    assert!(HandCategory::RoyalFlush.beats(HandCategory::StraightFlush));
    assert!(HandCategory::Pair.beats(HandCategory::Nothing));
    assert!(!HandCategory::Flush.beats(HandCategory::FullHouse));
    assert_eq!(HandCategory::ThreeOfAKind.to_string(), "Three of a Kind");
}
