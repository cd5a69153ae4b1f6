use crate::engine::VideoPokerEngine;
use crate::paytable::GameVariant;
use crate::round::{BankrollStatus, Phase, Round, RoundConfig, RoundError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    DealOrDraw,
    ToggleHold(usize),
    BetUp,
    BetDown,
    NextVariant,
    ResetGame,
    DismissNotice,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Core engine; the UI only reads it through the trait
    pub engine: Box<dyn VideoPokerEngine>,
    rng: ChaCha8Rng,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_variant: GameVariant,
    pub cfg_starting_bankroll: i64,
    pub cfg_min_bet: u64,
    help_open: bool,
    notice: Option<String>,
    reset_on_dismiss: bool,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_seed(rand::rng().random())
    }
}

impl AppState {
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// App with a reproducible card sequence.
    pub fn with_seed(seed: u64) -> Self {
        let config = RoundConfig::default();
        Self {
            scene: Scene::Menu,
            engine: Box::new(Round::with_config(config)),
            rng: ChaCha8Rng::seed_from_u64(seed),
            menu_index: 0,
            cfg_variant: config.variant,
            cfg_starting_bankroll: config.starting_bankroll,
            cfg_min_bet: config.min_bet,
            help_open: false,
            notice: None,
            reset_on_dismiss: false,
            action_error: None,
            action_error_at: None,
        }
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    /// Pending low-chips or game-over notice.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    fn report(&mut self, err: RoundError) {
        self.action_error = Some(err.to_string());
        self.action_error_at = Some(Instant::now());
    }

    fn on_table(&self) -> bool {
        self.scene == Scene::Table && self.notice.is_none() && !self.help_open
    }

    fn deal_or_draw(&mut self) -> bool {
        let result = match self.engine.phase() {
            Phase::AwaitingDeal => self.engine.deal(&mut self.rng).map(|_| None),
            _ => self.engine.draw(&mut self.rng).map(|s| Some(s.status)),
        };
        match result {
            Ok(status) => {
                self.clear_action_error();
                if let Some(status) = status {
                    let start = self.engine.config().starting_bankroll;
                    self.notice = status.notice(start);
                    self.reset_on_dismiss = matches!(status, BankrollStatus::GameOver { .. });
                }
                true
            }
            Err(err) => {
                self.report(err);
                false
            }
        }
    }

    fn apply<T>(&mut self, result: Result<T, RoundError>) -> bool {
        match result {
            Ok(_) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.report(err);
                false
            }
        }
    }

    fn dismiss_notice(&mut self) -> bool {
        if self.notice.take().is_none() {
            return false;
        }
        if std::mem::take(&mut self.reset_on_dismiss) {
            self.engine.reset_game();
        }
        true
    }

    /// Apply one input. Returns true when the action changed game state.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                if self.notice.is_none() {
                    self.toggle_menu();
                }
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table && self.notice.is_none() {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::DealOrDraw => self.on_table() && self.deal_or_draw(),
            InputAction::ToggleHold(slot) => {
                if !self.on_table() {
                    return false;
                }
                let result = self.engine.toggle_hold(slot);
                self.apply(result)
            }
            InputAction::BetUp | InputAction::BetDown => {
                if !self.on_table() {
                    return false;
                }
                let delta = if action == InputAction::BetUp { 1 } else { -1 };
                let result = self.engine.adjust_bet(delta);
                self.apply(result)
            }
            InputAction::NextVariant => {
                if !self.on_table() {
                    return false;
                }
                let next = self.engine.variant().next();
                self.engine.set_variant(next);
                self.cfg_variant = next;
                true
            }
            InputAction::ResetGame => {
                if !self.on_table() {
                    return false;
                }
                self.engine.reset_game();
                self.clear_action_error();
                true
            }
            InputAction::DismissNotice => self.dismiss_notice(),
        }
    }

    /// Periodic housekeeping: expire stale action errors.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_actions_ignored_in_menu() {
        let mut app = AppState::with_seed(1);
        assert!(!app.handle_input(InputAction::DealOrDraw));
        assert!(app.engine.hand().is_none());
    }

    #[test]
    fn illegal_hold_sets_error() {
        let mut app = AppState::with_seed(1);
        app.apply_menu();
        assert!(!app.handle_input(InputAction::ToggleHold(0)));
        assert!(app.action_error().is_some());
        assert!(app.handle_input(InputAction::DealOrDraw));
        assert!(app.action_error().is_none());
    }
}
