// src/db/zones.rs
use rusqlite::{params, OptionalExtension, Row};

use super::{new_id, now_unix, store_err, Database};
use crate::domain::{Zone, ZoneFields};
use crate::lfpe::{EntityStore, StoreError};

fn from_row(row: &Row<'_>) -> rusqlite::Result<Zone> {
    Ok(Zone {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub struct ZoneStore<'a> {
    db: &'a Database,
}

impl<'a> ZoneStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl EntityStore<Zone> for ZoneStore<'_> {
    fn list(&self) -> Result<Vec<Zone>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare("select id, name from zones order by name collate nocase")
                .map_err(store_err)?;
            let rows = stmt.query_map([], from_row).map_err(store_err)?;

            let mut zones = Vec::new();
            for r in rows {
                zones.push(r.map_err(store_err)?);
            }
            Ok(zones)
        })
    }

    fn create(&self, fields: &ZoneFields) -> Result<Zone, StoreError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "insert into zones (id, name, created_at) values (?, ?, ?) returning id, name",
                params![new_id(), fields.name, now_unix()],
                from_row,
            )
            .map_err(store_err)
        })
    }

    fn update(&self, id: &str, fields: &ZoneFields) -> Result<Zone, StoreError> {
        self.db
            .with_conn(|conn| {
                conn.query_row(
                    "update zones set name = ? where id = ? returning id, name",
                    params![fields.name, id],
                    from_row,
                )
                .optional()
                .map_err(store_err)
            })?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Customers keep their dangling `zone_id`; views show the fallback name.
    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let deleted = self.db.with_conn(|conn| {
            conn.execute("delete from zones where id = ?", params![id])
                .map_err(store_err)
        })?;
        if deleted == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
