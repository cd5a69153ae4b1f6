//! One-seat video poker round: bet, deal, hold, draw, settle.
//!
//! [`Round`] owns the deck, the hand and the bankroll, so a single `&mut Round`
//! serializes every operation against a table. Randomness comes in through
//! the `rng` argument of [`Round::deal`] and [`Round::draw`].

use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use crate::evaluator::{classify_hand, HandCategory};
use crate::hand::{Hand, HandError, HoldMask, HAND_SIZE};
use crate::paytable::{GameVariant, Paytable};
use rand::Rng;
use std::fmt;
use tracing::{debug, error, info};

pub const STARTING_BANKROLL: i64 = 1000;
pub const MIN_BET: u64 = 10;
pub const MAX_BET_MULTIPLIER: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    AwaitingDeal,
    AwaitingDraw,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::AwaitingDeal => f.write_str("awaiting deal"),
            Phase::AwaitingDraw => f.write_str("awaiting draw"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("cannot {op} while {phase}")]
    IllegalTransition { op: &'static str, phase: Phase },
    #[error("slot {0} is outside 0..5")]
    InvalidSlot(usize),
    #[error("bet multiplier {multiplier} is outside 1..={max}")]
    BetOutOfRange { multiplier: i64, max: u32 },
    #[error("bet moves one step at a time, got {0}")]
    BetStep(i32),
    #[error("game over: reset to keep playing")]
    GameOver,
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// The dealt cards did not form a valid hand.
    #[error("dealt an invalid hand: {0}")]
    Hand(#[from] HandError),
}

/// Outcome of the post-settlement bankroll check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankrollStatus {
    Continue,
    /// The multiplier was lowered so the bankroll covers the bet again.
    BetReduced { bet: u64 },
    /// The bankroll cannot cover even the minimum bet. Only
    /// [`Round::reset_game`] leaves this state.
    GameOver { hands: u32, high_water: i64 },
}

impl BankrollStatus {
    /// Player-facing notice for this status, if any. `starting_bankroll`
    /// decides whether the high-water mark is worth mentioning.
    pub fn notice(&self, starting_bankroll: i64) -> Option<String> {
        match *self {
            BankrollStatus::Continue => None,
            BankrollStatus::BetReduced { bet } => {
                Some(format!("You are low on chips. Your bet has been reduced to {bet}."))
            }
            BankrollStatus::GameOver { hands, high_water } => {
                let mut msg =
                    format!("Game Over! You ran out of chips after playing {hands} hands.");
                if high_water > starting_bankroll {
                    msg.push_str(&format!("\nAt one point, you had {high_water} chips."));
                }
                Some(msg)
            }
        }
    }
}

/// Result of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Settlement {
    pub category: HandCategory,
    pub reward: u64,
    pub bet: u64,
    pub hand: Hand,
    pub status: BankrollStatus,
}

impl Settlement {
    /// One-line result, e.g. `"Full House - Win 90!"` or `"Nothing"`.
    pub fn message(&self) -> String {
        if self.reward > 0 {
            format!("{} - Win {}!", self.category, self.reward)
        } else {
            self.category.to_string()
        }
    }
}

/// Table settings a [`Round`] starts from and returns to on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundConfig {
    pub variant: GameVariant,
    pub starting_bankroll: i64,
    pub min_bet: u64,
    pub max_multiplier: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            variant: GameVariant::default(),
            starting_bankroll: STARTING_BANKROLL,
            min_bet: MIN_BET,
            max_multiplier: MAX_BET_MULTIPLIER,
        }
    }
}

impl RoundConfig {
    pub fn with_variant(mut self, variant: GameVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_starting_bankroll(mut self, bankroll: i64) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    pub fn with_min_bet(mut self, min_bet: u64) -> Self {
        self.min_bet = min_bet.max(1);
        self
    }

    pub fn with_max_multiplier(mut self, max: u32) -> Self {
        self.max_multiplier = max.max(1);
        self
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Round {
    config: RoundConfig,
    variant: GameVariant,
    paytable: Paytable,
    deck: Deck,
    hand: Option<Hand>,
    holds: HoldMask,
    phase: Phase,
    bankroll: i64,
    low_water: i64,
    high_water: i64,
    hands_played: u32,
    multiplier: u32,
    wager: u64,
    game_over: bool,
    last_settlement: Option<Settlement>,
}

impl Default for Round {
    fn default() -> Self {
        Self::with_config(RoundConfig::default())
    }
}

impl Round {
    /// Fresh round with the default bankroll and bet.
    ///
    /// ```
    /// use videopoker::paytable::GameVariant;
    /// use videopoker::round::{Phase, Round};
    ///
    /// let round = Round::new(GameVariant::JacksOrBetter);
    /// assert_eq!(round.bankroll(), 1000);
    /// assert_eq!(round.current_bet(), 10);
    /// assert_eq!(round.phase(), Phase::AwaitingDeal);
    /// ```
    pub fn new(variant: GameVariant) -> Self {
        Self::with_config(RoundConfig::default().with_variant(variant))
    }

    pub fn with_config(config: RoundConfig) -> Self {
        Self {
            config,
            variant: config.variant,
            paytable: Paytable::for_variant(config.variant),
            deck: Deck::standard(),
            hand: None,
            holds: HoldMask::NONE,
            phase: Phase::AwaitingDeal,
            bankroll: config.starting_bankroll,
            low_water: config.starting_bankroll,
            high_water: config.starting_bankroll,
            hands_played: 0,
            multiplier: 1,
            wager: 0,
            game_over: false,
            last_settlement: None,
        }
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    pub fn paytable(&self) -> &Paytable {
        &self.paytable
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current hand; `None` before the first deal and after a reset.
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    pub fn holds(&self) -> HoldMask {
        self.holds
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bankroll(&self) -> i64 {
        self.bankroll
    }

    pub fn low_water(&self) -> i64 {
        self.low_water
    }

    pub fn high_water(&self) -> i64 {
        self.high_water
    }

    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    pub fn min_bet(&self) -> u64 {
        self.config.min_bet
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn current_bet(&self) -> u64 {
        u64::from(self.multiplier) * self.config.min_bet
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_settlement(&self) -> Option<&Settlement> {
        self.last_settlement.as_ref()
    }

    fn require(&self, op: &'static str, phase: Phase) -> Result<(), RoundError> {
        if self.phase != phase {
            return Err(RoundError::IllegalTransition { op, phase: self.phase });
        }
        Ok(())
    }

    /// Move the bet multiplier one step; `delta` must be `1` or `-1`. Only
    /// between hands, and the multiplier stays within `1..=max_multiplier`.
    /// Returns the new bet.
    pub fn adjust_bet(&mut self, delta: i32) -> Result<u64, RoundError> {
        if self.game_over {
            return Err(RoundError::GameOver);
        }
        self.require("adjust the bet", Phase::AwaitingDeal)?;
        if !matches!(delta, 1 | -1) {
            return Err(RoundError::BetStep(delta));
        }
        let next = i64::from(self.multiplier) + i64::from(delta);
        if next < 1 || next > i64::from(self.config.max_multiplier) {
            return Err(RoundError::BetOutOfRange {
                multiplier: next,
                max: self.config.max_multiplier,
            });
        }
        self.multiplier = next as u32;
        debug!(multiplier = self.multiplier, bet = self.current_bet(), "bet adjusted");
        Ok(self.current_bet())
    }

    pub fn increase_bet(&mut self) -> Result<u64, RoundError> {
        self.adjust_bet(1)
    }

    pub fn decrease_bet(&mut self) -> Result<u64, RoundError> {
        self.adjust_bet(-1)
    }

    /// Take the bet and deal five fresh cards from a reset deck.
    ///
    /// The bankroll is not checked here and may dip below zero; the guard in
    /// [`Round::check_bankroll`] runs after each settlement instead.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Hand, RoundError> {
        if self.game_over {
            return Err(RoundError::GameOver);
        }
        self.require("deal", Phase::AwaitingDeal)?;

        self.deck.reset();
        let cards =
            (0..HAND_SIZE).map(|_| self.draw_card(rng)).collect::<Result<Vec<Card>, _>>()?;
        let hand = Hand::from_slice(&cards).map_err(|e| {
            error!(error = %e, "deck dealt an invalid hand");
            RoundError::from(e)
        })?;

        let bet = self.current_bet();
        self.bankroll -= bet as i64;
        self.wager = bet;
        self.hand = Some(hand);
        self.holds.clear();
        self.last_settlement = None;
        self.phase = Phase::AwaitingDraw;
        debug!(%hand, bet, bankroll = self.bankroll, "dealt");
        Ok(hand)
    }

    fn draw_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, RoundError> {
        self.deck.draw_random_undealt(rng).map_err(|e| {
            error!(dealt = self.deck.dealt_count(), "deck exhausted mid-round");
            RoundError::from(e)
        })
    }

    /// Flip whether `slot` survives the draw. Returns the new hold state.
    pub fn toggle_hold(&mut self, slot: usize) -> Result<bool, RoundError> {
        self.require("toggle a hold", Phase::AwaitingDraw)?;
        let held = self.holds.toggle(slot).map_err(|_| RoundError::InvalidSlot(slot))?;
        debug!(slot, held, "hold toggled");
        Ok(held)
    }

    /// Replace every unheld card, classify, pay, and run the bankroll guard.
    ///
    /// The payout is computed on the wager taken by [`Round::deal`]. The deck
    /// is not reset, so replacements never repeat a card already seen this
    /// hand.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Settlement, RoundError> {
        self.require("draw", Phase::AwaitingDraw)?;
        let Some(mut hand) = self.hand else {
            return Err(RoundError::IllegalTransition { op: "draw", phase: self.phase });
        };
        let holds = self.holds;
        for slot in holds.discarded_slots() {
            let card = self.draw_card(rng)?;
            hand.replace(slot, card).map_err(|_| RoundError::InvalidSlot(slot))?;
        }

        let category = classify_hand(&hand, self.variant);
        let bet = self.wager;
        let reward = self.paytable.payout(category) * bet;
        self.bankroll += reward as i64;
        self.hands_played += 1;
        self.low_water = self.low_water.min(self.bankroll);
        self.high_water = self.high_water.max(self.bankroll);
        self.hand = Some(hand);
        self.phase = Phase::AwaitingDeal;
        info!(
            %hand,
            category = category.name(),
            reward,
            bankroll = self.bankroll,
            hands = self.hands_played,
            "settled"
        );

        let status = self.check_bankroll();
        let settlement = Settlement { category, reward, bet, hand, status };
        self.last_settlement = Some(settlement);
        Ok(settlement)
    }

    /// Bankroll guard. When the bankroll no longer covers the current bet,
    /// lower the multiplier until it does; if even the minimum bet is out of
    /// reach the round latches into game over.
    ///
    /// Only acts between hands. While a hand is out the wager is already
    /// taken, so this returns `Continue` and changes nothing.
    pub fn check_bankroll(&mut self) -> BankrollStatus {
        if self.game_over {
            return self.game_over_status();
        }
        if self.phase != Phase::AwaitingDeal {
            return BankrollStatus::Continue;
        }
        if self.bankroll >= self.current_bet() as i64 {
            return BankrollStatus::Continue;
        }
        let before = self.multiplier;
        while self.multiplier > 1 && self.bankroll < self.current_bet() as i64 {
            self.multiplier -= 1;
        }
        if self.bankroll < self.current_bet() as i64 {
            self.game_over = true;
            info!(hands = self.hands_played, high_water = self.high_water, "game over");
            return self.game_over_status();
        }
        if self.multiplier != before {
            info!(bet = self.current_bet(), "bet reduced");
            return BankrollStatus::BetReduced { bet: self.current_bet() };
        }
        BankrollStatus::Continue
    }

    fn game_over_status(&self) -> BankrollStatus {
        BankrollStatus::GameOver { hands: self.hands_played, high_water: self.high_water }
    }

    /// Switch paytable. A hand already dealt is paid by whatever table is
    /// active when it is drawn.
    pub fn set_variant(&mut self, variant: GameVariant) {
        if variant != self.variant {
            info!(from = %self.variant, to = %variant, "variant changed");
        }
        self.variant = variant;
        self.paytable = Paytable::for_variant(variant);
    }

    /// Back to the starting bankroll, bet and phase. The variant is kept.
    pub fn reset_game(&mut self) {
        let start = self.config.starting_bankroll;
        self.bankroll = start;
        self.low_water = start;
        self.high_water = start;
        self.hands_played = 0;
        self.multiplier = 1;
        self.wager = 0;
        self.phase = Phase::AwaitingDeal;
        self.hand = None;
        self.holds.clear();
        self.deck.reset();
        self.game_over = false;
        self.last_settlement = None;
        info!(bankroll = start, "game reset");
    }
}
