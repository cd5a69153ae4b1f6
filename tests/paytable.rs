use videopoker::evaluator::HandCategory;
use videopoker::paytable::{GameVariant, Paytable};
use videopoker::round::Round;

fn table(v: GameVariant) -> Vec<u64> {
    Paytable::for_variant(v).rows().map(|(_, m)| m).collect()
}

#[test]
fn variant_tables_override_the_base() {
    assert_eq!(table(GameVariant::JacksOrBetter), [800, 50, 25, 9, 6, 4, 3, 2, 1, 0]);
    assert_eq!(table(GameVariant::JacksOrBetter95), [800, 50, 25, 9, 5, 4, 3, 2, 1, 0]);
    assert_eq!(table(GameVariant::JacksOrBetter86), [800, 50, 25, 8, 6, 4, 3, 2, 1, 0]);
    assert_eq!(table(GameVariant::JacksOrBetter85), [800, 50, 25, 8, 5, 4, 3, 2, 1, 0]);
    assert_eq!(table(GameVariant::JacksOrBetter75), [800, 50, 25, 7, 5, 4, 3, 2, 1, 0]);
    assert_eq!(table(GameVariant::JacksOrBetter65), [800, 50, 25, 6, 5, 4, 3, 2, 1, 0]);
    assert_eq!(table(GameVariant::TensOrBetter), [800, 50, 25, 6, 5, 4, 3, 2, 1, 0]);
    assert_eq!(table(GameVariant::AllAmerican), [800, 50, 25, 8, 8, 8, 3, 2, 1, 0]);
}

#[test]
fn nothing_never_pays() {
    for v in GameVariant::ALL {
        assert_eq!(Paytable::for_variant(v).payout(HandCategory::Nothing), 0, "{v}");
    }
}

#[test]
fn rows_are_strongest_first() {
    let rows: Vec<HandCategory> = Paytable::default().rows().map(|(c, _)| c).collect();
    assert_eq!(rows.first(), Some(&HandCategory::RoyalFlush));
    assert_eq!(rows.last(), Some(&HandCategory::Nothing));
    assert_eq!(rows.len(), 10);
}

#[test]
fn set_variant_is_idempotent() {
    let mut r = Round::default();
    r.set_variant(GameVariant::JacksOrBetter86);
    let once = *r.paytable();
    r.set_variant(GameVariant::JacksOrBetter86);
    assert_eq!(*r.paytable(), once);
    assert_eq!(r.variant(), GameVariant::JacksOrBetter86);
    assert_eq!(r.paytable()[HandCategory::FullHouse], 8);
}

#[test]
fn set_variant_keeps_bankroll_and_bet() {
    let mut r = Round::default();
    r.increase_bet().unwrap();
    r.set_variant(GameVariant::AllAmerican);
    assert_eq!(r.bankroll(), 1000);
    assert_eq!(r.current_bet(), 20);
}
