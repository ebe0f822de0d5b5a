use std::fs;
use std::path::Path;
use stsdb_core::{Dataset, Error, MatchMode, QueryEngine, QueryError, TableId};
use tempfile::TempDir;

fn write_dataset(dir: &Path, cards: &str) {
    fs::write(dir.join("card.csv"), cards).unwrap();
    fs::write(
        dir.join("relic.csv"),
        "Burning Blood;Starter;At the end of combat, heal 6 HP.\n",
    )
    .unwrap();
    fs::write(
        dir.join("card_upgrade.csv"),
        "Bash;true;2;Deal 10 damage. Apply 3 Vulnerable.\n",
    )
    .unwrap();
    fs::write(dir.join("play.csv"), "Bash;Ironclad\nBash;Ironclad\n").unwrap();
    fs::write(dir.join("relic_availability.csv"), "Burning Blood;Ironclad\n").unwrap();
}

#[test]
fn test_load_dir_and_query() {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path(), "Bash;Basic;Attack;2;Deal 8 damage. Apply 2 Vulnerable.\n");

    let data = Dataset::load_dir(dir.path(), MatchMode::CaseInsensitive).unwrap();
    let engine = QueryEngine::new(&data);

    let result = engine.query_card("BASH", 1);
    let entry = result.entry().unwrap();
    assert_eq!(entry.card.name, "Bash");
    assert_eq!(entry.playable_by, ["Ironclad", "Ironclad"]);
    assert_eq!(entry.applied_upgrade_times, 1);

    assert!(engine.query_relic("burning blood").is_found());
    assert_eq!(data.card_count(), 1);
    assert_eq!(data.relic_count(), 1);
}

#[test]
fn test_load_dir_missing_table() {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path(), "Bash;Basic;Attack;2;Deal 8 damage.\n");
    fs::remove_file(dir.path().join(TableId::RelicAvailability.file_name())).unwrap();

    let err = Dataset::load_dir(dir.path(), MatchMode::Exact).unwrap_err();
    match err {
        Error::DataSourceUnavailable { path, .. } => {
            assert!(path.ends_with("relic_availability.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_dir_malformed_row() {
    let dir = TempDir::new().unwrap();
    write_dataset(
        dir.path(),
        "Bash;Basic;Attack;2;Deal 8 damage.\nStrike;Basic;Attack;1\n",
    );

    let err = Dataset::load_dir(dir.path(), MatchMode::Exact).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedRow {
            line: 2,
            expected: 5,
            found: 4,
            ..
        }
    ));
}

#[test]
fn test_exact_mode_from_disk() {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path(), "Bash;Basic;Attack;2;Deal 8 damage.\n");

    let data = Dataset::load_dir(dir.path(), MatchMode::Exact).unwrap();
    let engine = QueryEngine::new(&data);

    assert_eq!(engine.query_card("bash", 0).error(), Some(QueryError::CardNotFound));
    assert!(engine.query_card("Bash", 0).is_found());
}
