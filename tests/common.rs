#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, pointed at a config file that never exists so the user's
/// own configuration cannot leak into the tests.
pub fn rdb() -> Command {
    let mut cmd = cargo_bin_cmd!("rdbaccess");
    cmd.env(
        "RDBACCESS_CONFIG",
        env::temp_dir().join("rdbaccess_tests_no_such.conf"),
    );
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdbaccess.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary file path inside tempdir and ensure it's removed
pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdbaccess.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const PEOPLE_SCHEMA: &str = "
    CREATE TABLE people (
        id     INTEGER PRIMARY KEY AUTOINCREMENT,
        name   TEXT NOT NULL,
        age    INTEGER,
        score  REAL,
        avatar BLOB
    );
";

/// Create the `people` table directly through rusqlite, bypassing the CLI.
pub fn seed_people(db_path: &str) {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute_batch(PEOPLE_SCHEMA).expect("create schema");
}

pub fn count_people(db_path: &str) -> i64 {
    let conn = Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM people", [], |row| row.get(0))
        .expect("count people")
}
