use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use videopoker::engine::VideoPokerEngine;
use videopoker::paytable::GameVariant;
use videopoker::round::{Phase, Round, RoundConfig, RoundError};

fn boxed(config: RoundConfig) -> Box<dyn VideoPokerEngine> {
    Box::new(Round::with_config(config))
}

#[test]
fn plays_hands_through_the_trait_object() {
    let mut engine = boxed(RoundConfig::default().with_variant(GameVariant::TensOrBetter));
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    for _ in 0..10 {
        assert_eq!(engine.phase(), Phase::AwaitingDeal);
        let before = engine.bankroll();
        engine.deal(&mut rng).unwrap();
        assert_eq!(engine.bankroll(), before - 10);
        engine.toggle_hold(1).unwrap();
        let settled = engine.draw(&mut rng).unwrap();
        assert_eq!(engine.bankroll(), before - 10 + settled.reward as i64);
        assert_eq!(engine.last_settlement(), Some(&settled));
    }
    assert_eq!(engine.hands_played(), 10);
    assert_eq!(engine.variant(), GameVariant::TensOrBetter);
}

#[test]
fn engine_reports_errors_instead_of_panicking() {
    let mut engine = boxed(RoundConfig::default().with_max_multiplier(2));
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(matches!(engine.draw(&mut rng), Err(RoundError::IllegalTransition { .. })));
    assert_eq!(engine.adjust_bet(1), Ok(20));
    assert!(matches!(engine.adjust_bet(1), Err(RoundError::BetOutOfRange { multiplier: 3, max: 2 })));
    engine.deal(&mut rng).unwrap();
    assert_eq!(engine.toggle_hold(9), Err(RoundError::InvalidSlot(9)));
}

#[test]
fn config_survives_reset() {
    let config = RoundConfig::default().with_starting_bankroll(250).with_min_bet(5);
    let mut engine = boxed(config);
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    engine.deal(&mut rng).unwrap();
    engine.draw(&mut rng).unwrap();
    engine.reset_game();
    assert_eq!(*engine.config(), config);
    assert_eq!(engine.bankroll(), 250);
    assert_eq!(engine.current_bet(), 5);
    assert!(engine.hand().is_none());
    assert!(!engine.is_game_over());
}
