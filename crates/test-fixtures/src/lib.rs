//! Test fixtures for consultsim: a miniature consulting database.
//!
//! Builds the six tables the post-processing stage touches, in any of the
//! output-table shapes the simulator emits, and seeds them with rows.
//!
//! # Panics
//! Every helper panics on SQLite errors; fixtures are for tests only.

use std::path::{Path, PathBuf};

use consultsim_core::models::InsertShape;
use rusqlite::{params, Connection};

const ENTITY_SCHEMA: &str = r#"
CREATE TABLE Consultant (
    ConsultantID INTEGER PRIMARY KEY,
    FirstName TEXT,
    LastName TEXT
);
CREATE TABLE Title (
    TitleID INTEGER PRIMARY KEY,
    Title TEXT NOT NULL
);
CREATE TABLE Deliverable (
    DeliverableID INTEGER PRIMARY KEY,
    Name TEXT
);
CREATE TABLE Consultant_Deliverable_Mapping (
    ConsultantID INTEGER NOT NULL,
    DeliverableID INTEGER NOT NULL,
    start_date TEXT,
    end_date TEXT
);
"#;

/// Create the four source tables.
pub fn create_entity_tables(conn: &Connection) {
    conn.execute_batch(ENTITY_SCHEMA).expect("create entity tables");
}

/// Create the two output tables in the given shape.
pub fn create_output_tables(conn: &Connection, shape: InsertShape) {
    let (key, tag) = match shape {
        InsertShape::Bare => ("", ""),
        InsertShape::WithKey => ("id INTEGER PRIMARY KEY,", ""),
        InsertShape::WithKeyAndTag => ("id INTEGER PRIMARY KEY,", ", event_type TEXT"),
    };
    conn.execute_batch(&format!(
        "CREATE TABLE Consultant_Title_History (
            {key}
            ConsultantID INTEGER NOT NULL,
            TitleID INTEGER NOT NULL,
            StartDate TEXT NOT NULL,
            EndDate TEXT,
            Salary REAL NOT NULL{tag}
        );
        CREATE TABLE Deliverable_Progress_Month (
            {key}
            DeliverableID INTEGER NOT NULL,
            Report_Month TEXT NOT NULL,
            PercentageComplete REAL NOT NULL{tag}
        );"
    ))
    .expect("create output tables");
}

/// An in-memory database with every table and no rows.
pub fn consulting_db(shape: InsertShape) -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    create_entity_tables(&conn);
    create_output_tables(&conn, shape);
    conn
}

/// A file-backed database with every table, at `dir/consulting.db`.
pub fn consulting_db_file(dir: &Path, shape: InsertShape) -> PathBuf {
    let path = dir.join("consulting.db");
    let conn = Connection::open(&path).expect("create db file");
    create_entity_tables(&conn);
    create_output_tables(&conn, shape);
    path
}

/// Insert titles with the given ids.
pub fn seed_titles(conn: &Connection, ids: &[i64]) {
    for id in ids {
        conn.execute(
            "INSERT INTO Title (TitleID, Title) VALUES (?1, ?2)",
            params![id, format!("Level {id}")],
        )
        .expect("insert title");
    }
}

/// Insert the standard six-level ladder.
pub fn seed_standard_titles(conn: &Connection) {
    seed_titles(conn, &[1, 2, 3, 4, 5, 6]);
}

/// Insert consultants `1..=count`.
pub fn seed_consultants(conn: &Connection, count: i64) {
    for id in 1..=count {
        conn.execute(
            "INSERT INTO Consultant (ConsultantID, FirstName, LastName) VALUES (?1, ?2, ?3)",
            params![id, "First", format!("Consultant{id}")],
        )
        .expect("insert consultant");
    }
}

/// Recreate `Consultant` with a TEXT key column holding `ids`.
pub fn seed_text_consultants(conn: &Connection, ids: &[&str]) {
    conn.execute_batch(
        "DROP TABLE Consultant;
         CREATE TABLE Consultant (ConsultantID TEXT PRIMARY KEY, FirstName TEXT, LastName TEXT);",
    )
    .expect("recreate consultant table");
    for id in ids {
        conn.execute(
            "INSERT INTO Consultant (ConsultantID, FirstName, LastName) VALUES (?1, ?2, ?3)",
            params![id, "First", format!("Consultant {id}")],
        )
        .expect("insert text consultant");
    }
}

/// Insert one deliverable.
pub fn seed_deliverable(conn: &Connection, id: i64) {
    conn.execute(
        "INSERT INTO Deliverable (DeliverableID, Name) VALUES (?1, ?2)",
        params![id, format!("Deliverable {id}")],
    )
    .expect("insert deliverable");
}

/// Map a consultant onto a deliverable for the given (raw text) dates.
pub fn map_consultant(
    conn: &Connection,
    consultant_id: i64,
    deliverable_id: i64,
    start_date: Option<&str>,
    end_date: Option<&str>,
) {
    conn.execute(
        "INSERT INTO Consultant_Deliverable_Mapping
            (ConsultantID, DeliverableID, start_date, end_date)
         VALUES (?1, ?2, ?3, ?4)",
        params![consultant_id, deliverable_id, start_date, end_date],
    )
    .expect("insert mapping");
}

/// Drop a table by name.
pub fn drop_table(conn: &Connection, table: &str) {
    conn.execute_batch(&format!("DROP TABLE \"{table}\""))
        .expect("drop table");
}
