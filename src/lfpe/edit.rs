use thiserror::Error;

use super::{Entity, EntityStore, StoreError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("unknown field {0}")]
    UnknownField(String),
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
    #[error("a save for this record is already in progress")]
    AlreadySubmitting,
    #[error("no edit in progress")]
    NotEditing,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EditError {
    /// Validation errors never reached the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EditError::MissingField(_) | EditError::UnknownField(_) | EditError::InvalidValue { .. }
        )
    }
}

/// Editable form state for one record type.
pub trait Draft: Clone + Default + std::fmt::Debug {
    type Record;
    type Fields;

    /// Field names that must be non-blank at commit time.
    const REQUIRED: &'static [&'static str];

    fn from_record(record: &Self::Record) -> Self;

    /// Current text of a form field, `None` for unknown names.
    fn field(&self, name: &str) -> Option<&str>;

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), EditError>;

    /// Writable payload with blank optionals normalised to `None`.
    fn to_fields(&self) -> Self::Fields;
}

/// Trimmed text, or `None` when nothing but whitespace is left.
pub fn blank_to_none(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    Submitting,
}

/// One open edit (or create) dialog.
#[derive(Debug, Clone)]
pub struct EditSession<D: Draft> {
    target: Option<String>,
    draft: D,
    phase: Phase,
    error: Option<String>,
}

impl<D: Draft> EditSession<D> {
    /// Snapshot the editable fields of `record`, which is stored under `id`.
    pub fn begin(id: impl Into<String>, record: &D::Record) -> Self {
        Self {
            target: Some(id.into()),
            draft: D::from_record(record),
            phase: Phase::Open,
            error: None,
        }
    }

    /// Empty draft for a create flow.
    pub fn begin_new() -> Self {
        Self {
            target: None,
            draft: D::default(),
            phase: Phase::Open,
            error: None,
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn update_field(&mut self, name: &str, value: &str) -> Result<(), EditError> {
        self.draft.set_field(name, value)
    }

    pub fn validate(&self) -> Result<(), EditError> {
        for name in D::REQUIRED {
            let value = self.draft.field(name).unwrap_or_default();
            if value.trim().is_empty() {
                return Err(EditError::MissingField(*name));
            }
        }
        Ok(())
    }

    /// Validate and lock the session until [`EditSession::fail`] or a drop.
    pub fn submit(&mut self) -> Result<D::Fields, EditError> {
        if self.phase == Phase::Submitting {
            return Err(EditError::AlreadySubmitting);
        }
        if let Err(e) = self.validate() {
            self.error = Some(e.to_string());
            return Err(e);
        }
        self.phase = Phase::Submitting;
        self.error = None;
        Ok(self.draft.to_fields())
    }

    /// Store rejected the write: reopen with the draft untouched.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = Phase::Open;
        self.error = Some(message.into());
    }

    /// Submit and run the matching store call. On error the draft is kept.
    pub fn commit<S>(&mut self, store: &S) -> Result<D::Record, EditError>
    where
        D::Record: Entity<Fields = D::Fields>,
        S: EntityStore<D::Record>,
    {
        let fields = self.submit()?;
        let result = match &self.target {
            Some(id) => store.update(id, &fields),
            None => store.create(&fields),
        };
        match result {
            Ok(record) => {
                self.phase = Phase::Open;
                Ok(record)
            }
            Err(e) => {
                self.fail(e.to_string());
                Err(e.into())
            }
        }
    }

    pub fn cancel(self) {}
}
