//! stsdb-core: Core library for querying Slay the Spire cards and relics
//!
//! This library provides functionality to:
//! - Parse the semicolon-delimited dataset tables (cards, relics, upgrades, relations)
//! - Build an immutable, name-keyed dataset once at startup
//! - Resolve card upgrades, including Searing Blow's unbounded upgrade
//! - Answer card and relic queries as serializable found/not-found results

pub mod dataset;
pub mod error;
pub mod parser;
pub mod query;
pub mod relation;
pub mod table;
pub mod upgrade;

pub use dataset::{CardRecord, Dataset, MatchMode};
pub use error::{Error, Result};
pub use parser::{parse_table, parse_table_str, RawRow, RawTable, TableId};
pub use query::{CardEntry, QueryEngine, QueryError, QueryResult, RelicEntry};
pub use relation::Relation;
pub use table::{Card, Relic, UpgradeRule};
pub use upgrade::{unbounded_damage, unbounded_description, UpgradeKind};
