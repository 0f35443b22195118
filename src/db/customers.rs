// src/db/customers.rs
use rusqlite::{params, OptionalExtension, Row};

use super::{get_status, new_id, now_unix, store_err, Database};
use crate::domain::{Customer, CustomerFields};
use crate::lfpe::{EntityStore, StatusKind, StoreError};

const COLUMNS: &str = "id, name, email, zone_id, status, created_at, updated_at";

fn from_row(row: &Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        zone_id: row.get(3)?,
        status: get_status(row, 4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

pub struct CustomerStore<'a> {
    db: &'a Database,
}

impl<'a> CustomerStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl EntityStore<Customer> for CustomerStore<'_> {
    fn list(&self) -> Result<Vec<Customer>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&format!(
                    "select {COLUMNS} from customers order by created_at, rowid"
                ))
                .map_err(store_err)?;
            let rows = stmt.query_map([], from_row).map_err(store_err)?;

            let mut customers = Vec::new();
            for r in rows {
                customers.push(r.map_err(store_err)?);
            }
            Ok(customers)
        })
    }

    fn create(&self, fields: &CustomerFields) -> Result<Customer, StoreError> {
        let now = now_unix();
        self.db.with_conn(|conn| {
            conn.query_row(
                &format!(
                    "insert into customers (id, name, email, zone_id, status, created_at, updated_at)
                     values (?, ?, ?, ?, ?, ?, ?)
                     returning {COLUMNS}"
                ),
                params![
                    new_id(),
                    fields.name,
                    fields.email,
                    fields.zone_id,
                    fields.status.as_str(),
                    now,
                    now
                ],
                from_row,
            )
            .map_err(store_err)
        })
    }

    fn update(&self, id: &str, fields: &CustomerFields) -> Result<Customer, StoreError> {
        let now = now_unix();
        self.db
            .with_conn(|conn| {
                conn.query_row(
                    &format!(
                        "update customers
                         set name = ?, email = ?, zone_id = ?, status = ?, updated_at = ?
                         where id = ?
                         returning {COLUMNS}"
                    ),
                    params![
                        fields.name,
                        fields.email,
                        fields.zone_id,
                        fields.status.as_str(),
                        now,
                        id
                    ],
                    from_row,
                )
                .optional()
                .map_err(store_err)
            })?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let deleted = self.db.with_conn(|conn| {
            conn.execute("delete from customers where id = ?", params![id])
                .map_err(store_err)
        })?;
        if deleted == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
