//! Semicolon-delimited parser for the dataset tables

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// The five tables that make up the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    /// `name;rarity;type;cost;description`
    Cards,
    /// `name;rarity;description`
    Relics,
    /// `name;has_upgrade;cost_upgraded;description_upgraded`
    CardUpgrades,
    /// `card_name;hero_name`
    CardPlayability,
    /// `relic_name;hero_name`
    RelicAvailability,
}

impl TableId {
    /// All tables, in load order
    pub const ALL: [TableId; 5] = [
        TableId::Cards,
        TableId::Relics,
        TableId::CardUpgrades,
        TableId::CardPlayability,
        TableId::RelicAvailability,
    ];

    /// File name of the table inside a dataset directory
    pub fn file_name(self) -> &'static str {
        match self {
            TableId::Cards => "card.csv",
            TableId::Relics => "relic.csv",
            TableId::CardUpgrades => "card_upgrade.csv",
            TableId::CardPlayability => "play.csv",
            TableId::RelicAvailability => "relic_availability.csv",
        }
    }

    /// Exact number of fields every row must have
    pub fn field_count(self) -> usize {
        match self {
            TableId::Cards => 5,
            TableId::Relics => 3,
            TableId::CardUpgrades => 4,
            TableId::CardPlayability | TableId::RelicAvailability => 2,
        }
    }
}

/// A table as read from its source, before typed decoding
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Which table this is
    pub table: TableId,
    /// Rows in source order
    pub rows: Vec<RawRow>,
    /// Source file path (or a display name for in-memory sources)
    pub source_path: PathBuf,
}

impl RawTable {
    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A single row with its fields split out
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the source
    pub line: u64,
    /// Field values, exactly `table.field_count()` of them
    pub fields: Vec<String>,
}

impl RawRow {
    /// Get a field by index
    pub fn get(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or_default()
    }
}

/// Parse a table file from disk
pub fn parse_table<P: AsRef<Path>>(path: P, table: TableId) -> Result<RawTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::DataSourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;

    read_rows(BufReader::new(file), path.to_path_buf(), table)
}

/// Parse a table from a string (used for the bundled dataset and in tests)
pub fn parse_table_str(content: &str, source_name: &str, table: TableId) -> Result<RawTable> {
    read_rows(content.as_bytes(), PathBuf::from(source_name), table)
}

fn read_rows<R: Read>(reader: R, path: PathBuf, table: TableId) -> Result<RawTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true) // field count is checked per row below
        .from_reader(reader);

    let expected = table.field_count();
    let mut rows = Vec::new();

    for (row_idx, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| Error::Csv {
            path: path.clone(),
            source: e,
        })?;

        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(row_idx as u64 + 1);

        if record.len() != expected {
            return Err(Error::MalformedRow {
                path,
                line,
                expected,
                found: record.len(),
            });
        }

        rows.push(RawRow {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(RawTable {
        table,
        rows,
        source_path: path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_table() {
        let content = "Burning Blood;Starter;At the end of combat, heal 6 HP.\nAnchor;Common;Start each combat with 10 Block.\n";
        let table = parse_table_str(content, "relic.csv", TableId::Relics).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0].get(0), "Burning Blood");
        assert_eq!(table.rows[0].get(2), "At the end of combat, heal 6 HP.");
        assert_eq!(table.rows[1].line, 2);
    }

    #[test]
    fn test_parse_quoted_delimiter() {
        let content = "Odd;Common;\"Gain 1 Energy; draw 1 card.\"\n";
        let table = parse_table_str(content, "relic.csv", TableId::Relics).unwrap();

        assert_eq!(table.rows[0].get(2), "Gain 1 Energy; draw 1 card.");
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let content = "Strike;Ironclad\nStrike;Silent;Extra\n";
        let err = parse_table_str(content, "play.csv", TableId::CardPlayability).unwrap_err();

        match err {
            Error::MalformedRow {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_table("/nonexistent/card.csv", TableId::Cards).unwrap_err();
        assert!(matches!(err, Error::DataSourceUnavailable { .. }));
    }

    #[test]
    fn test_field_counts() {
        assert_eq!(TableId::Cards.field_count(), 5);
        assert_eq!(TableId::Relics.field_count(), 3);
        assert_eq!(TableId::CardUpgrades.field_count(), 4);
        assert_eq!(TableId::CardPlayability.field_count(), 2);
        assert_eq!(TableId::RelicAvailability.field_count(), 2);
    }
}
