use thiserror::Error;

use super::Entity;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(String),
    /// The backend refused the write (constraint violation and the like).
    #[error("{0}")]
    Rejected(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistent collection of one entity type.
pub trait EntityStore<E: Entity> {
    fn list(&self) -> Result<Vec<E>, StoreError>;
    fn create(&self, fields: &E::Fields) -> Result<E, StoreError>;
    fn update(&self, id: &str, fields: &E::Fields) -> Result<E, StoreError>;
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}
