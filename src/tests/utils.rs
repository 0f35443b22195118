use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::router::AppState;
use tempfile::TempDir;

/// Fresh database file using the production schema. Keep the `TempDir`
/// alive for as long as the database is used.
pub fn init_test_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir failed: {e}"));
    let path = dir.path().join("test.sqlite3");
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    (dir, db)
}

pub fn test_config() -> Config {
    Config {
        lead_api_key: Some("test-lead-key".into()),
        ..Config::default()
    }
}

pub fn init_test_state() -> (TempDir, AppState) {
    let (dir, db) = init_test_db();
    (dir, AppState::new(db, test_config()))
}
