//! Typed records decoded from the raw dataset tables

use crate::error::{Error, Result};
use crate::parser::RawRow;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Token standing for an absent value in optional fields
pub const NULL_TOKEN: &str = "NULL";

/// A card as stored in the card table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Canonical card name
    pub name: String,
    /// Rarity, absent for curses and statuses
    pub rarity: Option<String>,
    /// Card type (Attack, Skill, ...)
    #[serde(rename = "type")]
    pub card_type: String,
    /// Energy cost, absent for X-cost and unplayable cards
    pub cost: Option<u32>,
    /// Card text
    pub description: String,
}

impl Card {
    /// Decode a card from a `name;rarity;type;cost;description` row
    pub fn from_row(row: &RawRow, source: &Path) -> Result<Self> {
        Ok(Self {
            name: row.get(0).to_string(),
            rarity: decode_optional(row.get(1)),
            card_type: row.get(2).to_string(),
            cost: decode_cost(row, 3, "cost", source)?,
            description: row.get(4).to_string(),
        })
    }
}

/// A relic as stored in the relic table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relic {
    /// Canonical relic name
    pub name: String,
    /// Rarity (Starter, Common, ...)
    pub rarity: String,
    /// Relic text
    pub description: String,
}

impl Relic {
    /// Decode a relic from a `name;rarity;description` row
    pub fn from_row(row: &RawRow) -> Self {
        Self {
            name: row.get(0).to_string(),
            rarity: row.get(1).to_string(),
            description: row.get(2).to_string(),
        }
    }
}

/// Upgrade rule for a single card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeRule {
    /// Card this rule belongs to
    pub name: String,
    /// Whether the card can be upgraded at all
    pub has_upgrade: bool,
    /// Cost after upgrading
    pub cost_upgraded: Option<u32>,
    /// Card text after upgrading
    pub description_upgraded: String,
}

impl UpgradeRule {
    /// Decode a rule from a `name;has_upgrade;cost_upgraded;description_upgraded` row
    pub fn from_row(row: &RawRow, source: &Path) -> Result<Self> {
        Ok(Self {
            name: row.get(0).to_string(),
            has_upgrade: row.get(1) == "true",
            cost_upgraded: decode_cost(row, 2, "cost_upgraded", source)?,
            description_upgraded: row.get(3).to_string(),
        })
    }
}

fn decode_optional(raw: &str) -> Option<String> {
    if raw == NULL_TOKEN {
        None
    } else {
        Some(raw.to_string())
    }
}

fn decode_cost(row: &RawRow, index: usize, field: &'static str, source: &Path) -> Result<Option<u32>> {
    let raw = row.get(index);
    if raw == NULL_TOKEN {
        return Ok(None);
    }

    raw.parse::<u32>().map(Some).map_err(|_| Error::InvalidField {
        path: source.to_path_buf(),
        line: row.line,
        field,
        value: raw.to_string(),
    })
}
