// src/db/web_leads.rs
use rusqlite::{params, OptionalExtension, Row};

use super::{get_status, new_id, now_unix, store_err, Database};
use crate::domain::{WebLead, WebLeadFields};
use crate::lfpe::{EntityStore, StatusKind, StoreError};

const COLUMNS: &str =
    "id, full_name, phone, email, status, requested_products, created_at, updated_at";

fn from_row(row: &Row<'_>) -> rusqlite::Result<WebLead> {
    Ok(WebLead {
        id: row.get(0)?,
        full_name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
        status: get_status(row, 4)?,
        requested_products: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

pub struct WebLeadStore<'a> {
    db: &'a Database,
}

impl<'a> WebLeadStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl EntityStore<WebLead> for WebLeadStore<'_> {
    /// Newest enquiries first.
    fn list(&self) -> Result<Vec<WebLead>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&format!(
                    "select {COLUMNS} from web_leads order by created_at desc, rowid desc"
                ))
                .map_err(store_err)?;
            let rows = stmt.query_map([], from_row).map_err(store_err)?;

            let mut leads = Vec::new();
            for r in rows {
                leads.push(r.map_err(store_err)?);
            }
            Ok(leads)
        })
    }

    fn create(&self, fields: &WebLeadFields) -> Result<WebLead, StoreError> {
        let now = now_unix();
        self.db.with_conn(|conn| {
            conn.query_row(
                &format!(
                    "insert into web_leads
                       (id, full_name, phone, email, status, requested_products, created_at, updated_at)
                     values (?, ?, ?, ?, ?, ?, ?, ?)
                     returning {COLUMNS}"
                ),
                params![
                    new_id(),
                    fields.full_name,
                    fields.phone,
                    fields.email,
                    fields.status.as_str(),
                    fields.requested_products,
                    now,
                    now
                ],
                from_row,
            )
            .map_err(store_err)
        })
    }

    fn update(&self, id: &str, fields: &WebLeadFields) -> Result<WebLead, StoreError> {
        let now = now_unix();
        self.db
            .with_conn(|conn| {
                conn.query_row(
                    &format!(
                        "update web_leads
                         set full_name = ?, phone = ?, email = ?, status = ?,
                             requested_products = ?, updated_at = ?
                         where id = ?
                         returning {COLUMNS}"
                    ),
                    params![
                        fields.full_name,
                        fields.phone,
                        fields.email,
                        fields.status.as_str(),
                        fields.requested_products,
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
            conn.execute("delete from web_leads where id = ?", params![id])
                .map_err(store_err)
        })?;
        if deleted == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
