// Engine API boundary. Front ends (the TUI, tests, anything driving a table)
// talk to this trait instead of `Round` directly. Randomness is passed in as
// `&mut dyn RngCore` so the trait stays object safe.

use crate::hand::{Hand, HoldMask};
use crate::paytable::{GameVariant, Paytable};
use crate::round::{BankrollStatus, Phase, Round, RoundConfig, RoundError, Settlement};
use rand::RngCore;

pub trait VideoPokerEngine: std::fmt::Debug {
    // Round lifecycle
    fn deal(&mut self, rng: &mut dyn RngCore) -> Result<Hand, RoundError>;
    fn toggle_hold(&mut self, slot: usize) -> Result<bool, RoundError>;
    fn draw(&mut self, rng: &mut dyn RngCore) -> Result<Settlement, RoundError>;
    fn adjust_bet(&mut self, delta: i32) -> Result<u64, RoundError>;
    fn check_bankroll(&mut self) -> BankrollStatus;
    fn set_variant(&mut self, variant: GameVariant);
    fn reset_game(&mut self);

    // Queries
    fn config(&self) -> &RoundConfig;
    fn phase(&self) -> Phase;
    fn hand(&self) -> Option<&Hand>;
    fn holds(&self) -> HoldMask;
    fn bankroll(&self) -> i64;
    fn low_water(&self) -> i64;
    fn high_water(&self) -> i64;
    fn hands_played(&self) -> u32;
    fn current_bet(&self) -> u64;
    fn variant(&self) -> GameVariant;
    fn paytable(&self) -> &Paytable;
    fn last_settlement(&self) -> Option<&Settlement>;
    fn is_game_over(&self) -> bool;
}

impl VideoPokerEngine for Round {
    fn deal(&mut self, rng: &mut dyn RngCore) -> Result<Hand, RoundError> {
        Round::deal(self, rng)
    }
    fn toggle_hold(&mut self, slot: usize) -> Result<bool, RoundError> {
        Round::toggle_hold(self, slot)
    }
    fn draw(&mut self, rng: &mut dyn RngCore) -> Result<Settlement, RoundError> {
        Round::draw(self, rng)
    }
    fn adjust_bet(&mut self, delta: i32) -> Result<u64, RoundError> {
        Round::adjust_bet(self, delta)
    }
    fn check_bankroll(&mut self) -> BankrollStatus {
        Round::check_bankroll(self)
    }
    fn set_variant(&mut self, variant: GameVariant) {
        Round::set_variant(self, variant)
    }
    fn reset_game(&mut self) {
        Round::reset_game(self)
    }

    fn config(&self) -> &RoundConfig {
        Round::config(self)
    }
    fn phase(&self) -> Phase {
        Round::phase(self)
    }
    fn hand(&self) -> Option<&Hand> {
        Round::hand(self)
    }
    fn holds(&self) -> HoldMask {
        Round::holds(self)
    }
    fn bankroll(&self) -> i64 {
        Round::bankroll(self)
    }
    fn low_water(&self) -> i64 {
        Round::low_water(self)
    }
    fn high_water(&self) -> i64 {
        Round::high_water(self)
    }
    fn hands_played(&self) -> u32 {
        Round::hands_played(self)
    }
    fn current_bet(&self) -> u64 {
        Round::current_bet(self)
    }
    fn variant(&self) -> GameVariant {
        Round::variant(self)
    }
    fn paytable(&self) -> &Paytable {
        Round::paytable(self)
    }
    fn last_settlement(&self) -> Option<&Settlement> {
        Round::last_settlement(self)
    }
    fn is_game_over(&self) -> bool {
        Round::is_game_over(self)
    }
}
