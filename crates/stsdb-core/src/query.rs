//! Card and relic queries over a loaded [`Dataset`]

use crate::dataset::{Dataset, MatchMode};
use crate::table::{Card, Relic};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

/// Why a query found nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryError {
    /// The requested upgrade count was negative
    #[error("upgrade times must not be negative")]
    InvalidUpgradeTimes,
    /// No card matched the name
    #[error("card not found")]
    CardNotFound,
    /// No relic matched the name
    #[error("relic not found")]
    RelicNotFound,
}

/// Outcome of a query
///
/// Serializes as `{"found": true, "entry": ...}` or `{"found": false, "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult<T> {
    Found(T),
    NotFound(QueryError),
}

impl<T> QueryResult<T> {
    /// Whether the query found an entry
    pub fn is_found(&self) -> bool {
        matches!(self, QueryResult::Found(_))
    }

    /// The entry, if found
    pub fn entry(&self) -> Option<&T> {
        match self {
            QueryResult::Found(entry) => Some(entry),
            QueryResult::NotFound(_) => None,
        }
    }

    /// The error, if nothing was found
    pub fn error(&self) -> Option<QueryError> {
        match self {
            QueryResult::Found(_) => None,
            QueryResult::NotFound(error) => Some(*error),
        }
    }
}

impl<T: Serialize> Serialize for QueryResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("QueryResult", 2)?;
        match self {
            QueryResult::Found(entry) => {
                state.serialize_field("found", &true)?;
                state.serialize_field("entry", entry)?;
            }
            QueryResult::NotFound(error) => {
                state.serialize_field("found", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// A card enriched with playability and upgrade tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardEntry {
    #[serde(flatten)]
    pub card: Card,
    /// Heroes that can play this card, in source order
    pub playable_by: Vec<String>,
    /// Upgrade count as requested by the caller
    pub requested_upgrade_times: i64,
    /// Upgrade count actually applied
    pub applied_upgrade_times: i64,
    /// 0, 1, or -1 when the card has no upgrade cap
    pub max_upgrade_times: i64,
}

/// A relic enriched with hero availability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelicEntry {
    #[serde(flatten)]
    pub relic: Relic,
    /// Heroes this relic is available to, in source order
    pub available_to: Vec<String>,
}

/// Read-only query front end over a dataset
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryEngine<'a> {
    /// Create an engine over `dataset`, matching names with the dataset's mode
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Matching mode in effect
    pub fn mode(&self) -> MatchMode {
        self.dataset.mode()
    }

    /// Look up a card and apply `upgrade_times` upgrades to it
    pub fn query_card(&self, name: &str, upgrade_times: i64) -> QueryResult<CardEntry> {
        if upgrade_times < 0 {
            debug!(name, upgrade_times, "rejected negative upgrade count");
            return QueryResult::NotFound(QueryError::InvalidUpgradeTimes);
        }

        let key = self.mode().key(name);
        let Some(record) = self.dataset.card(&key) else {
            debug!(name, mode = %self.mode(), "card not found");
            return QueryResult::NotFound(QueryError::CardNotFound);
        };

        let mut card = record.card.clone();
        let applied_upgrade_times = record.upgrade.apply(&mut card, upgrade_times);
        let playable_by = self.dataset.playable_by(&card.name).to_vec();

        debug!(
            name = %card.name,
            requested = upgrade_times,
            applied = applied_upgrade_times,
            "card found"
        );

        QueryResult::Found(CardEntry {
            card,
            playable_by,
            requested_upgrade_times: upgrade_times,
            applied_upgrade_times,
            max_upgrade_times: record.upgrade.max_upgrade_times(),
        })
    }

    /// Look up a relic
    pub fn query_relic(&self, name: &str) -> QueryResult<RelicEntry> {
        let key = self.mode().key(name);
        let Some(relic) = self.dataset.relic(&key) else {
            debug!(name, mode = %self.mode(), "relic not found");
            return QueryResult::NotFound(QueryError::RelicNotFound);
        };

        debug!(name = %relic.name, "relic found");

        QueryResult::Found(RelicEntry {
            available_to: self.dataset.available_to(&relic.name).to_vec(),
            relic: relic.clone(),
        })
    }
}
