pub mod connection;
pub mod customers;
pub mod users;
pub mod web_leads;
pub mod zones;

pub use connection::{init_db, Database};
pub use customers::CustomerStore;
pub use web_leads::WebLeadStore;
pub use zones::ZoneStore;

use rusqlite::{types::Type, ErrorCode, Row};

use crate::auth::token::generate_token;
use crate::lfpe::{StatusKind, StoreError};

/// Random URL-safe record id.
pub fn new_id() -> String {
    generate_token(12)
}

pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Constraint violations are the backend refusing the write; anything else
/// means the store itself is in trouble.
pub(crate) fn store_err(e: rusqlite::Error) -> StoreError {
    match &e {
        rusqlite::Error::SqliteFailure(err, msg) if err.code == ErrorCode::ConstraintViolation => {
            StoreError::Rejected(msg.clone().unwrap_or_else(|| e.to_string()))
        }
        _ => StoreError::Unavailable(e.to_string()),
    }
}

pub(crate) fn get_status<S: StatusKind>(row: &Row<'_>, idx: usize) -> rusqlite::Result<S> {
    let raw: String = row.get(idx)?;
    S::parse(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, format!("unknown status {raw}").into())
    })
}
