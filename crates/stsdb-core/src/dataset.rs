//! Loading the five dataset tables into immutable lookup structures

use crate::error::{Error, Result};
use crate::parser::{parse_table, parse_table_str, RawTable, TableId};
use crate::relation::Relation;
use crate::table::{Card, Relic, UpgradeRule};
use crate::upgrade::UpgradeKind;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

const BUNDLED_CARDS: &str = include_str!("../data/card.csv");
const BUNDLED_RELICS: &str = include_str!("../data/relic.csv");
const BUNDLED_CARD_UPGRADES: &str = include_str!("../data/card_upgrade.csv");
const BUNDLED_CARD_PLAYABILITY: &str = include_str!("../data/play.csv");
const BUNDLED_RELIC_AVAILABILITY: &str = include_str!("../data/relic_availability.csv");

/// How query names are matched against stored names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Names are lowercased on both sides before comparing
    #[default]
    CaseInsensitive,
    /// Names must match byte for byte
    Exact,
}

impl MatchMode {
    /// Lookup key for `name` under this mode
    pub fn key(self, name: &str) -> String {
        match self {
            MatchMode::CaseInsensitive => name.to_lowercase(),
            MatchMode::Exact => name.to_string(),
        }
    }

    /// Mode name as accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::CaseInsensitive => "case-insensitive",
            MatchMode::Exact => "exact",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "case-insensitive" | "insensitive" => Ok(MatchMode::CaseInsensitive),
            "exact" => Ok(MatchMode::Exact),
            _ => Err(Error::InvalidMatchMode(s.to_string())),
        }
    }
}

/// A card together with its resolved upgrade behavior
#[derive(Debug, Clone)]
pub struct CardRecord {
    /// The card as stored
    pub card: Card,
    /// How the card upgrades
    pub upgrade: UpgradeKind,
}

/// The whole dataset, read-only after construction
#[derive(Debug, Clone)]
pub struct Dataset {
    mode: MatchMode,
    cards: HashMap<String, CardRecord>,
    relics: HashMap<String, Relic>,
    card_playability: Relation,
    relic_availability: Relation,
}

impl Dataset {
    /// Load the five tables from `dir`
    pub fn load_dir<P: AsRef<Path>>(dir: P, mode: MatchMode) -> Result<Self> {
        let dir = dir.as_ref();
        debug!(dir = %dir.display(), %mode, "loading dataset from directory");
        Self::build(mode, |table| parse_table(dir.join(table.file_name()), table))
    }

    /// Load the dataset compiled into this crate
    pub fn bundled(mode: MatchMode) -> Result<Self> {
        debug!(%mode, "loading bundled dataset");
        Self::build(mode, |table| {
            let content = match table {
                TableId::Cards => BUNDLED_CARDS,
                TableId::Relics => BUNDLED_RELICS,
                TableId::CardUpgrades => BUNDLED_CARD_UPGRADES,
                TableId::CardPlayability => BUNDLED_CARD_PLAYABILITY,
                TableId::RelicAvailability => BUNDLED_RELIC_AVAILABILITY,
            };
            parse_table_str(content, table.file_name(), table)
        })
    }

    /// Build the dataset from already parsed tables
    pub fn from_tables(
        mode: MatchMode,
        cards: &RawTable,
        relics: &RawTable,
        card_upgrades: &RawTable,
        card_playability: &RawTable,
        relic_availability: &RawTable,
    ) -> Result<Self> {
        let upgrades = index_upgrades(mode, card_upgrades)?;

        let mut card_map = HashMap::with_capacity(cards.row_count());
        for row in &cards.rows {
            let card = Card::from_row(row, &cards.source_path)?;
            let key = mode.key(&card.name);
            let upgrade = UpgradeKind::resolve(&card.name, upgrades.get(&key));
            let name = card.name.clone();
            if let Some(previous) = card_map.insert(key, CardRecord { card, upgrade }) {
                report_overwrite("card", row.line, &previous.card.name, &name);
            }
        }

        let mut relic_map = HashMap::with_capacity(relics.row_count());
        for row in &relics.rows {
            let relic = Relic::from_row(row);
            let name = relic.name.clone();
            if let Some(previous) = relic_map.insert(mode.key(&name), relic) {
                report_overwrite("relic", row.line, &previous.name, &name);
            }
        }

        Ok(Self {
            mode,
            cards: card_map,
            relics: relic_map,
            card_playability: Relation::from_table(card_playability),
            relic_availability: Relation::from_table(relic_availability),
        })
    }

    fn build<F>(mode: MatchMode, mut load: F) -> Result<Self>
    where
        F: FnMut(TableId) -> Result<RawTable>,
    {
        let mut tables = Vec::with_capacity(TableId::ALL.len());
        for table in TableId::ALL {
            let raw = load(table)?;
            debug!(
                table = table.file_name(),
                rows = raw.row_count(),
                "loaded table"
            );
            tables.push(raw);
        }

        Self::from_tables(mode, &tables[0], &tables[1], &tables[2], &tables[3], &tables[4])
    }

    /// Matching mode the tables were keyed with
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Look up a card by (already normalized) key
    pub fn card(&self, key: &str) -> Option<&CardRecord> {
        self.cards.get(key)
    }

    /// Look up a relic by (already normalized) key
    pub fn relic(&self, key: &str) -> Option<&Relic> {
        self.relics.get(key)
    }

    /// Heroes that can play the card with this canonical name
    pub fn playable_by(&self, canonical_name: &str) -> &[String] {
        self.card_playability.get(canonical_name)
    }

    /// Heroes the relic with this canonical name is available to
    pub fn available_to(&self, canonical_name: &str) -> &[String] {
        self.relic_availability.get(canonical_name)
    }

    /// Number of cards
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Number of relics
    pub fn relic_count(&self) -> usize {
        self.relics.len()
    }
}

/// Later rows replace earlier ones with the same key. Distinct names folding
/// onto one key hide a record from every query, so that case is a warning.
fn report_overwrite(kind: &str, line: u64, previous: &str, name: &str) {
    if previous == name {
        debug!(kind, line, name, "duplicate row overwrites earlier entry");
    } else {
        warn!(kind, line, previous, name, "name collides with earlier entry under case folding");
    }
}

fn index_upgrades(mode: MatchMode, table: &RawTable) -> Result<HashMap<String, UpgradeRule>> {
    let mut rules = HashMap::with_capacity(table.row_count());
    for row in &table.rows {
        let rule = UpgradeRule::from_row(row, &table.source_path)?;
        rules.insert(mode.key(&rule.name), rule);
    }
    Ok(rules)
}
