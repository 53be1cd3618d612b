//! Tests for seed-entity reads.

use consultsim_core::errors::StorageError;
use consultsim_core::models::{ConsultantId, DeliverableId, InsertShape, TitleId};
use consultsim_storage::queries::entities::*;
use test_fixtures::*;

#[test]
fn consultant_ids_are_ascending() {
    let conn = consulting_db(InsertShape::Bare);
    seed_consultants(&conn, 3);
    let ids = consultant_ids(&conn).unwrap();
    assert_eq!(ids, vec![ConsultantId::from(1), ConsultantId::from(2), ConsultantId::from(3)]);
}

#[test]
fn text_consultant_ids_are_read_as_stored() {
    let conn = consulting_db(InsertShape::Bare);
    seed_text_consultants(&conn, &["C002", "C001"]);
    let ids = consultant_ids(&conn).unwrap();
    assert_eq!(ids, vec![ConsultantId::from("C001"), ConsultantId::from("C002")]);
}

#[test]
fn null_consultant_id_is_an_error() {
    let conn = consulting_db(InsertShape::Bare);
    conn.execute_batch(
        "DROP TABLE Consultant; CREATE TABLE Consultant (ConsultantID TEXT);
         INSERT INTO Consultant VALUES (NULL);",
    )
    .unwrap();
    assert!(matches!(
        consultant_ids(&conn).unwrap_err(),
        StorageError::SqliteError { .. }
    ));
}

#[test]
fn missing_consultant_table_is_reported() {
    let conn = consulting_db(InsertShape::Bare);
    drop_table(&conn, "Consultant");
    let err = consultant_ids(&conn).unwrap_err();
    assert!(matches!(err, StorageError::TableMissing { ref table } if table == "Consultant"));
}

#[test]
fn title_ids_sorted_even_when_inserted_out_of_order() {
    let conn = consulting_db(InsertShape::Bare);
    seed_titles(&conn, &[5, 1, 3]);
    let ids = title_ids(&conn).unwrap();
    assert_eq!(ids, vec![TitleId(1), TitleId(3), TitleId(5)]);
}

#[test]
fn deliverable_ranges_aggregate_mappings() {
    let conn = consulting_db(InsertShape::Bare);
    seed_consultants(&conn, 2);
    seed_deliverable(&conn, 10);
    seed_deliverable(&conn, 20);
    seed_deliverable(&conn, 30); // no mapping: excluded
    map_consultant(&conn, 1, 10, Some("2024-02-01"), Some("2024-03-10"));
    map_consultant(&conn, 2, 10, Some("2024-01-15"), Some("2024-02-20"));
    map_consultant(&conn, 1, 20, Some("2023-06-01 09:00:00"), None);

    let ranges = deliverable_ranges(&conn).unwrap();
    assert_eq!(ranges.len(), 2);

    assert_eq!(ranges[0].deliverable_id, DeliverableId(10));
    assert_eq!(ranges[0].actual_start.as_deref(), Some("2024-01-15"));
    assert_eq!(ranges[0].actual_end.as_deref(), Some("2024-03-10"));

    assert_eq!(ranges[1].deliverable_id, DeliverableId(20));
    assert_eq!(ranges[1].actual_start.as_deref(), Some("2023-06-01 09:00:00"));
    assert_eq!(ranges[1].actual_end, None);
}

#[test]
fn numeric_dates_come_back_as_text() {
    let conn = consulting_db(InsertShape::Bare);
    seed_deliverable(&conn, 1);
    conn.execute(
        "INSERT INTO Consultant_Deliverable_Mapping VALUES (1, 1, 20240101, 20240301)",
        [],
    )
    .unwrap();
    let ranges = deliverable_ranges(&conn).unwrap();
    assert_eq!(ranges[0].actual_start.as_deref(), Some("20240101"));
}

#[test]
fn missing_mapping_table_is_reported() {
    let conn = consulting_db(InsertShape::Bare);
    drop_table(&conn, "Consultant_Deliverable_Mapping");
    let err = deliverable_ranges(&conn).unwrap_err();
    assert!(err.is_structural());
}
