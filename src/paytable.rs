//! Game variants and the payout table each one selects.
//!
//! Every variant starts from the 9/6 Jacks or Better table and overrides a
//! few rows. The bonus variants are reserved names: they carry no overrides
//! and pay the base table.

use crate::cards::Rank;
use crate::evaluator::HandCategory;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum GameVariant {
    AllAmerican,
    TensOrBetter,
    BonusPoker,
    DoubleBonus,
    DoubleBonusBonus,
    #[default]
    JacksOrBetter,
    JacksOrBetter95,
    JacksOrBetter86,
    JacksOrBetter85,
    JacksOrBetter75,
    JacksOrBetter65,
}

impl GameVariant {
    pub const ALL: [GameVariant; 11] = [
        GameVariant::AllAmerican,
        GameVariant::TensOrBetter,
        GameVariant::BonusPoker,
        GameVariant::DoubleBonus,
        GameVariant::DoubleBonusBonus,
        GameVariant::JacksOrBetter,
        GameVariant::JacksOrBetter95,
        GameVariant::JacksOrBetter86,
        GameVariant::JacksOrBetter85,
        GameVariant::JacksOrBetter75,
        GameVariant::JacksOrBetter65,
    ];

    /// Variants offered for selection, in menu order.
    pub const SELECTABLE: [GameVariant; 8] = [
        GameVariant::JacksOrBetter,
        GameVariant::TensOrBetter,
        GameVariant::AllAmerican,
        GameVariant::JacksOrBetter95,
        GameVariant::JacksOrBetter86,
        GameVariant::JacksOrBetter85,
        GameVariant::JacksOrBetter75,
        GameVariant::JacksOrBetter65,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            GameVariant::AllAmerican => "All American",
            GameVariant::TensOrBetter => "Tens or Better",
            GameVariant::BonusPoker => "Bonus Poker",
            GameVariant::DoubleBonus => "Double Bonus",
            GameVariant::DoubleBonusBonus => "Double Bonus Bonus",
            GameVariant::JacksOrBetter => "Jacks or Better",
            GameVariant::JacksOrBetter95 => "9/5 Jacks or Better",
            GameVariant::JacksOrBetter86 => "8/6 Jacks or Better",
            GameVariant::JacksOrBetter85 => "8/5 Jacks or Better",
            GameVariant::JacksOrBetter75 => "7/5 Jacks or Better",
            GameVariant::JacksOrBetter65 => "6/5 Jacks or Better",
        }
    }

    /// Short selection key, e.g. `jb95`.
    pub const fn key(self) -> &'static str {
        match self {
            GameVariant::AllAmerican => "all-american",
            GameVariant::TensOrBetter => "tens-or-better",
            GameVariant::BonusPoker => "bonus-poker",
            GameVariant::DoubleBonus => "double-bonus",
            GameVariant::DoubleBonusBonus => "double-bonus-bonus",
            GameVariant::JacksOrBetter => "jacks-or-better",
            GameVariant::JacksOrBetter95 => "jb95",
            GameVariant::JacksOrBetter86 => "jb86",
            GameVariant::JacksOrBetter85 => "jb85",
            GameVariant::JacksOrBetter75 => "jb75",
            GameVariant::JacksOrBetter65 => "jb65",
        }
    }

    /// Lowest pair rank that classifies as [`HandCategory::Pair`].
    pub const fn min_pair_rank(self) -> Rank {
        match self {
            GameVariant::TensOrBetter => Rank::Ten,
            _ => Rank::Jack,
        }
    }

    /// Next selectable variant, wrapping around.
    pub fn next(self) -> GameVariant {
        let list = Self::SELECTABLE;
        match list.iter().position(|&v| v == self) {
            Some(i) => list[(i + 1) % list.len()],
            None => list[0],
        }
    }

    /// Previous selectable variant, wrapping around.
    pub fn prev(self) -> GameVariant {
        let list = Self::SELECTABLE;
        match list.iter().position(|&v| v == self) {
            Some(i) => list[(i + list.len() - 1) % list.len()],
            None => list[0],
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VariantParseError {
    #[error("unknown game variant: '{0}'")]
    Unknown(String),
}

impl FromStr for GameVariant {
    type Err = VariantParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        GameVariant::ALL
            .iter()
            .copied()
            .find(|v| v.key().eq_ignore_ascii_case(t) || v.label().eq_ignore_ascii_case(t))
            .ok_or_else(|| VariantParseError::Unknown(s.to_string()))
    }
}

const BASE: [u64; 10] = [800, 50, 25, 9, 6, 4, 3, 2, 1, 0];

/// Payout multipliers of the unit bet, one per [`HandCategory`].
///
/// ```
/// use videopoker::evaluator::HandCategory;
/// use videopoker::paytable::{GameVariant, Paytable};
///
/// let table = Paytable::for_variant(GameVariant::JacksOrBetter65);
/// assert_eq!(table[HandCategory::FullHouse], 6);
/// assert_eq!(table[HandCategory::Flush], 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paytable {
    variant: GameVariant,
    multipliers: [u64; 10],
}

impl Default for Paytable {
    fn default() -> Self {
        Self::for_variant(GameVariant::default())
    }
}

impl Paytable {
    pub fn for_variant(variant: GameVariant) -> Self {
        let mut m = BASE;
        let mut set = |c: HandCategory, v: u64| m[c.index()] = v;
        match variant {
            GameVariant::JacksOrBetter95 => set(HandCategory::Flush, 5),
            GameVariant::JacksOrBetter86 => set(HandCategory::FullHouse, 8),
            GameVariant::JacksOrBetter85 => {
                set(HandCategory::FullHouse, 8);
                set(HandCategory::Flush, 5);
            }
            GameVariant::JacksOrBetter75 => {
                set(HandCategory::FullHouse, 7);
                set(HandCategory::Flush, 5);
            }
            GameVariant::JacksOrBetter65 | GameVariant::TensOrBetter => {
                set(HandCategory::FullHouse, 6);
                set(HandCategory::Flush, 5);
            }
            GameVariant::AllAmerican => {
                set(HandCategory::FullHouse, 8);
                set(HandCategory::Flush, 8);
                set(HandCategory::Straight, 8);
                set(HandCategory::Pair, 1);
            }
            GameVariant::JacksOrBetter
            | GameVariant::BonusPoker
            | GameVariant::DoubleBonus
            | GameVariant::DoubleBonusBonus => {}
        }
        Self { variant, multipliers: m }
    }

    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    pub fn payout(&self, category: HandCategory) -> u64 {
        self.multipliers[category.index()]
    }

    /// `(category, multiplier)` rows, strongest first.
    pub fn rows(&self) -> impl Iterator<Item = (HandCategory, u64)> + '_ {
        HandCategory::ALL.iter().map(move |&c| (c, self.payout(c)))
    }
}

impl Index<HandCategory> for Paytable {
    type Output = u64;
    fn index(&self, category: HandCategory) -> &u64 {
        &self.multipliers[category.index()]
    }
}
