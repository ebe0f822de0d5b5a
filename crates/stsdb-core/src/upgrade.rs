//! Card upgrade rules
//!
//! Most cards upgrade at most once, swapping in an upgraded cost and text.
//! Searing Blow is the exception: it can be upgraded any number of times and
//! its damage grows with each step.

use crate::table::{Card, UpgradeRule};

/// Name of the only card with an unbounded upgrade
pub const UNBOUNDED_UPGRADE_CARD: &str = "Searing Blow";

/// Damage of the unbounded card before any upgrade
pub const UNBOUNDED_BASE_DAMAGE: i128 = 12;

/// How a card reacts to upgrade requests, resolved once when the card table is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeKind {
    /// The card has no upgrade
    None,
    /// A single upgrade step replacing cost and description
    Binary {
        cost: Option<u32>,
        description: String,
    },
    /// Repeatable upgrade with quadratic damage scaling
    Unbounded,
}

impl UpgradeKind {
    /// Pick the upgrade kind for a card from its canonical name and optional rule
    pub fn resolve(canonical_name: &str, rule: Option<&UpgradeRule>) -> Self {
        if canonical_name == UNBOUNDED_UPGRADE_CARD {
            return UpgradeKind::Unbounded;
        }

        match rule {
            Some(rule) if rule.has_upgrade => UpgradeKind::Binary {
                cost: rule.cost_upgraded,
                description: rule.description_upgraded.clone(),
            },
            _ => UpgradeKind::None,
        }
    }

    /// Upgrade cap reported to callers: 0, 1, or -1 for "no cap"
    pub fn max_upgrade_times(&self) -> i64 {
        match self {
            UpgradeKind::None => 0,
            UpgradeKind::Binary { .. } => 1,
            UpgradeKind::Unbounded => -1,
        }
    }

    /// Apply `requested` upgrades to `card` in place, returning how many were applied
    ///
    /// `requested` must be non-negative; the query layer rejects negative counts.
    pub fn apply(&self, card: &mut Card, requested: i64) -> i64 {
        match self {
            UpgradeKind::None => 0,
            UpgradeKind::Binary { cost, description } => {
                if requested > 0 {
                    card.cost = *cost;
                    card.description = description.clone();
                    1
                } else {
                    0
                }
            }
            UpgradeKind::Unbounded => {
                if requested > 0 {
                    card.description = unbounded_description(requested);
                }
                requested
            }
        }
    }
}

/// Damage of the unbounded card after `times` upgrades
pub fn unbounded_damage(times: i64) -> i128 {
    let n = i128::from(times);
    (n * (n + 7)).div_euclid(2) + UNBOUNDED_BASE_DAMAGE
}

/// Card text of the unbounded card after `times` upgrades
pub fn unbounded_description(times: i64) -> String {
    format!(
        "Deal {} damage. Can be Upgraded any number of times.",
        unbounded_damage(times)
    )
}
