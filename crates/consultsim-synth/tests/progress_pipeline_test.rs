//! Progress-month pass against fixture databases.

use chrono::NaiveDate;
use consultsim_core::config::ProgressConfig;
use consultsim_core::constants::{MAPPING_TABLE, PROGRESS_TABLE};
use consultsim_core::errors::{EntitySkip, ErrorCode};
use consultsim_core::models::{DeliverableId, InsertShape};
use consultsim_storage::queries::progress;
use consultsim_storage::EntityStore;
use consultsim_synth::{populate_progress_months, run_progress_months, status_code, RunOutcome};
use test_fixtures::{
    consulting_db, consulting_db_file, drop_table, map_consultant, seed_consultants,
    seed_deliverable,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn store(shape: InsertShape) -> EntityStore {
    let conn = consulting_db(shape);
    seed_consultants(&conn, 3);
    EntityStore::from_connection(conn).unwrap()
}

#[test]
fn range_spans_union_of_mappings() {
    let store = store(InsertShape::Bare);
    seed_deliverable(store.conn(), 1);
    map_consultant(store.conn(), 1, 1, Some("2024-01-15"), Some("2024-02-20"));
    map_consultant(store.conn(), 2, 1, Some("2024-02-01"), Some("2024-03-10"));

    let summary = run_progress_months(&store, &ProgressConfig::default()).unwrap();
    assert_eq!(summary.records_inserted, 3);
    assert_eq!(summary.entities, 1);

    let rows = progress::load_all(store.conn()).unwrap();
    let months: Vec<NaiveDate> = rows.iter().map(|r| r.report_month).collect();
    assert_eq!(months, vec![ymd(2024, 1, 1), ymd(2024, 2, 1), ymd(2024, 3, 1)]);
    let pcts: Vec<f64> = rows.iter().map(|r| r.percentage_complete).collect();
    assert_eq!(pcts, vec![0.0, 30.91, 83.64]);
}

#[test]
fn final_month_pinned_when_configured() {
    let store = store(InsertShape::Bare);
    seed_deliverable(store.conn(), 1);
    map_consultant(store.conn(), 1, 1, Some("2024-01-15"), Some("2024-03-10"));

    let config = ProgressConfig {
        complete_final_month: Some(true),
    };
    run_progress_months(&store, &config).unwrap();
    let rows = progress::load_all(store.conn()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].percentage_complete, 100.0);
}

#[test]
fn unmapped_deliverables_are_excluded() {
    let store = store(InsertShape::Bare);
    seed_deliverable(store.conn(), 1);
    seed_deliverable(store.conn(), 2);
    map_consultant(store.conn(), 1, 2, Some("2024-05-03"), Some("2024-05-28"));

    let summary = run_progress_months(&store, &ProgressConfig::default()).unwrap();
    assert_eq!(summary.entities, 1);
    let rows = progress::load_all(store.conn()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].deliverable_id, DeliverableId(2));
    assert_eq!(rows[0].report_month, ymd(2024, 5, 1));
    assert_eq!(rows[0].percentage_complete, 0.0);
}

#[test]
fn deliverables_with_bad_dates_are_skipped() {
    let store = store(InsertShape::Bare);
    for id in 1..=3 {
        seed_deliverable(store.conn(), id);
    }
    map_consultant(store.conn(), 1, 1, Some("2024-01-01"), Some("2024-04-01"));
    map_consultant(store.conn(), 1, 2, Some("2024-01-01"), None);
    map_consultant(store.conn(), 1, 3, Some("next spring"), Some("2024-04-01"));

    let summary = run_progress_months(&store, &ProgressConfig::default()).unwrap();
    assert_eq!(summary.entities, 3);
    assert_eq!(summary.records_inserted, 4);
    assert_eq!(summary.skipped.len(), 2);
    assert!(matches!(summary.skipped[0], EntitySkip::MissingDate { .. }));
    assert!(matches!(summary.skipped[1], EntitySkip::UnparseableDate { .. }));

    let rows = progress::load_all(store.conn()).unwrap();
    assert!(rows.iter().all(|r| r.deliverable_id == DeliverableId(1)));
    assert_eq!(rows.last().unwrap().percentage_complete, 100.0);
}

#[test]
fn no_mapped_deliverables_is_zero() {
    let store = store(InsertShape::Bare);
    seed_deliverable(store.conn(), 1);
    let result = run_progress_months(&store, &ProgressConfig::default());
    assert_eq!(status_code(&result), 0);
    assert_eq!(result.unwrap().outcome, RunOutcome::NothingToDo);
}

#[test]
fn missing_mapping_table_is_fatal() {
    let store = store(InsertShape::Bare);
    drop_table(store.conn(), MAPPING_TABLE);
    let result = run_progress_months(&store, &ProgressConfig::default());
    assert_eq!(status_code(&result), -1);
    assert_eq!(result.unwrap_err().error_code(), "TABLE_MISSING");
}

#[test]
fn missing_target_table_is_fatal() {
    let store = store(InsertShape::Bare);
    seed_deliverable(store.conn(), 1);
    map_consultant(store.conn(), 1, 1, Some("2024-01-01"), Some("2024-02-01"));
    drop_table(store.conn(), PROGRESS_TABLE);
    let result = run_progress_months(&store, &ProgressConfig::default());
    assert_eq!(status_code(&result), -1);
}

#[test]
fn keyed_rows_and_tags() {
    let store = store(InsertShape::WithKeyAndTag);
    seed_deliverable(store.conn(), 1);
    seed_deliverable(store.conn(), 2);
    map_consultant(store.conn(), 1, 1, Some("2024-01-01"), Some("2024-03-01"));
    map_consultant(store.conn(), 2, 2, Some("2024-06-01"), Some("2024-07-15"));

    run_progress_months(&store, &ProgressConfig::default()).unwrap();
    let tagged: Vec<(i64, String)> = store
        .conn()
        .prepare("SELECT id, event_type FROM Deliverable_Progress_Month ORDER BY id")
        .unwrap()
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(tagged.len(), 5);
    for (i, (id, tag)) in tagged.iter().enumerate() {
        assert_eq!(*id, i as i64 + 1);
        assert_eq!(tag, "progress_update");
    }
}

#[test]
fn rerun_is_idempotent() {
    let store = store(InsertShape::WithKey);
    seed_deliverable(store.conn(), 1);
    map_consultant(store.conn(), 1, 1, Some("2023-11-20T08:30:00"), Some("2024-02-05"));

    let first = run_progress_months(&store, &ProgressConfig::default()).unwrap();
    let before = progress::load_all(store.conn()).unwrap();
    let second = run_progress_months(&store, &ProgressConfig::default()).unwrap();
    assert_eq!(first.records_inserted, second.records_inserted);
    assert_eq!(before, progress::load_all(store.conn()).unwrap());
}

#[test]
fn populate_from_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = consulting_db_file(dir.path(), InsertShape::Bare);
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        seed_consultants(&conn, 1);
        seed_deliverable(&conn, 1);
        map_consultant(&conn, 1, 1, Some("2024-01-01"), Some("2024-12-31"));
    }
    let result = populate_progress_months(&path);
    assert_eq!(status_code(&result), 12);
}
