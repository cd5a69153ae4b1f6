use crate::round::{Round, RoundConfig};

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Variant,
    StartingBankroll,
    MinBet,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Variant, MenuItem::StartingBankroll, MenuItem::MinBet];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Variant => format!("Game: {}", app.cfg_variant),
            MenuItem::StartingBankroll => format!("Starting Chips: {}", app.cfg_starting_bankroll),
            MenuItem::MinBet => format!("Minimum Bet: {}", app.cfg_min_bet),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Variant => app.cfg_variant = app.cfg_variant.next(),
            MenuItem::StartingBankroll => {
                app.cfg_starting_bankroll = app.cfg_starting_bankroll.saturating_add(100);
            }
            MenuItem::MinBet => {
                app.cfg_min_bet = app.cfg_min_bet.saturating_add(5);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Variant => app.cfg_variant = app.cfg_variant.prev(),
            MenuItem::StartingBankroll => {
                app.cfg_starting_bankroll = app.cfg_starting_bankroll.saturating_sub(100).max(100);
            }
            MenuItem::MinBet => {
                app.cfg_min_bet = app.cfg_min_bet.saturating_sub(5).max(5);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            Scene::Menu => Scene::Table,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        let cfg = *self.engine.config();
        self.cfg_variant = self.engine.variant();
        self.cfg_starting_bankroll = cfg.starting_bankroll;
        self.cfg_min_bet = cfg.min_bet;
        self.scene = Scene::Menu;
    }

    /// Start a fresh table from the edited settings.
    pub fn apply_menu(&mut self) {
        let config = RoundConfig::default()
            .with_variant(self.cfg_variant)
            .with_starting_bankroll(self.cfg_starting_bankroll.max(1))
            .with_min_bet(self.cfg_min_bet);
        self.engine = Box::new(Round::with_config(config));
        self.scene = Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
