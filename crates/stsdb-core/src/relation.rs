//! One-to-many relations built from two-column tables

use crate::parser::RawTable;
use std::collections::HashMap;

/// Maps a base name to the names associated with it, in source row order
#[derive(Debug, Clone, Default)]
pub struct Relation {
    groups: HashMap<String, Vec<String>>,
}

impl Relation {
    /// Group a two-column table by its first column
    ///
    /// Rows keep their source order within each group. Duplicates are kept.
    pub fn from_table(table: &RawTable) -> Self {
        Self::from_pairs(
            table
                .rows
                .iter()
                .map(|row| (row.get(0).to_string(), row.get(1).to_string())),
        )
    }

    /// Group `(base, associated)` pairs by base name
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut groups: HashMap<String, Vec<String>> = HashMap::new();
        for (base, associated) in pairs {
            groups.entry(base).or_default().push(associated);
        }
        Self { groups }
    }

    /// Names associated with `base`, empty if there are none
    pub fn get(&self, base: &str) -> &[String] {
        self.groups.get(base).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct base names
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the relation has no rows at all
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_table_str, TableId};

    #[test]
    fn test_relation_preserves_order() {
        let content = "Strike;Ironclad\nBash;Ironclad\nStrike;Silent\nStrike;Defect\n";
        let table = parse_table_str(content, "play.csv", TableId::CardPlayability).unwrap();
        let relation = Relation::from_table(&table);

        assert_eq!(relation.get("Strike"), ["Ironclad", "Silent", "Defect"]);
        assert_eq!(relation.get("Bash"), ["Ironclad"]);
        assert_eq!(relation.len(), 2);
    }

    #[test]
    fn test_relation_keeps_duplicates() {
        let relation = Relation::from_pairs(vec![
            ("Anchor".to_string(), "Ironclad".to_string()),
            ("Anchor".to_string(), "Ironclad".to_string()),
        ]);

        assert_eq!(relation.get("Anchor").len(), 2);
    }

    #[test]
    fn test_relation_missing_is_empty() {
        let relation = Relation::default();

        assert!(relation.get("Circlet").is_empty());
        assert!(relation.is_empty());
    }

    #[test]
    fn test_relation_is_case_sensitive() {
        let relation = Relation::from_pairs(vec![("Bash".to_string(), "Ironclad".to_string())]);

        assert!(relation.get("bash").is_empty());
    }
}
