use thiserror::Error;
use tracing::{debug, warn};

use super::edit::{EditError, EditSession};
use super::filter::{matches, Dimension, FilterState, Selection};
use super::paginate::{paginate, PageMeta};
use super::store::{EntityStore, StoreError};
use super::{Entity, HasStatus, StatusKind};

/// What the view is showing on top of the list.
#[derive(Debug, Clone)]
pub enum ViewState<E: Entity> {
    Browsing,
    Editing(EditSession<E::Draft>),
    ViewingDetail(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("another dialog is already open")]
    Busy,
    #[error("record {0} is not in the current list")]
    UnknownRecord(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome<E> {
    Saved(E),
    /// The record was deleted underneath the draft; the draft was dropped.
    Discarded,
}

/// The rows of the current page plus where they sit in the filtered list.
#[derive(Debug)]
pub struct Listing<'a, E> {
    pub rows: Vec<&'a E>,
    pub meta: PageMeta,
}

/// Filter state, snapshot and dialog state of one entity-management view.
#[derive(Debug, Clone)]
pub struct ViewController<E: Entity> {
    snapshot: Vec<E>,
    filters: FilterState,
    page_size: usize,
    state: ViewState<E>,
}

impl<E: Entity> ViewController<E> {
    pub fn new(snapshot: Vec<E>, page_size: usize) -> Self {
        Self {
            snapshot,
            filters: FilterState::default(),
            page_size: page_size.max(1),
            state: ViewState::Browsing,
        }
    }

    /// Restore filter state (e.g. from a query string), clamping the page.
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self.clamp_page();
        self
    }

    pub fn snapshot(&self) -> &[E] {
        &self.snapshot
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn state(&self) -> &ViewState<E> {
        &self.state
    }

    pub fn find(&self, id: &str) -> Option<&E> {
        self.snapshot.iter().find(|r| r.id() == id)
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filters.set_search(text);
    }

    pub fn select(&mut self, dimension: Dimension, selection: Selection) {
        self.filters.select(dimension, selection);
    }

    pub fn goto_page(&mut self, page: usize) {
        self.filters.set_page(page);
        self.clamp_page();
    }

    pub fn next_page(&mut self) {
        let next = self.listing().meta.next();
        self.filters.set_page(next);
    }

    pub fn previous_page(&mut self) {
        let previous = self.listing().meta.previous();
        self.filters.set_page(previous);
    }

    pub fn filtered(&self) -> Vec<&E> {
        self.snapshot
            .iter()
            .filter(|r| matches(*r, &self.filters))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.snapshot
            .iter()
            .filter(|r| matches(*r, &self.filters))
            .count()
    }

    pub fn listing(&self) -> Listing<'_, E> {
        let filtered = self.filtered();
        let page = paginate(&filtered, self.filters.page(), self.page_size);
        Listing {
            rows: page.visible.to_vec(),
            meta: page.meta,
        }
    }

    /// Replace the snapshot wholesale.
    ///
    /// A draft whose record disappeared is dropped silently, and a changed
    /// filtered count sends the view back to page 1.
    pub fn refresh(&mut self, snapshot: Vec<E>) {
        let before = self.filtered_count();
        self.snapshot = snapshot;
        let stale = match &self.state {
            ViewState::Editing(session) => session.target().filter(|id| self.find(id).is_none()),
            ViewState::ViewingDetail(id) => Some(id.as_str()).filter(|id| self.find(id).is_none()),
            ViewState::Browsing => None,
        }
        .map(str::to_string);
        if let Some(id) = stale {
            debug!(record = %id, "record vanished, closing dialog");
            self.state = ViewState::Browsing;
        }
        self.settle_page(before);
    }

    pub fn begin_edit(&mut self, id: &str) -> Result<(), ControllerError> {
        self.ensure_browsing()?;
        let record = self
            .find(id)
            .ok_or_else(|| ControllerError::UnknownRecord(id.to_string()))?;
        self.state = ViewState::Editing(EditSession::begin(record.id(), record));
        Ok(())
    }

    pub fn begin_create(&mut self) -> Result<(), ControllerError> {
        self.ensure_browsing()?;
        self.state = ViewState::Editing(EditSession::begin_new());
        Ok(())
    }

    pub fn session(&self) -> Option<&EditSession<E::Draft>> {
        match &self.state {
            ViewState::Editing(session) => Some(session),
            _ => None,
        }
    }

    pub fn update_field(&mut self, name: &str, value: &str) -> Result<(), EditError> {
        match &mut self.state {
            ViewState::Editing(session) => session.update_field(name, value),
            _ => Err(EditError::NotEditing),
        }
    }

    /// Commit the open session.
    ///
    /// Success (or a concurrent delete) returns to `Browsing`; any error keeps
    /// the session open with its draft and message.
    pub fn commit<S>(&mut self, store: &S) -> Result<CommitOutcome<E>, EditError>
    where
        S: EntityStore<E>,
    {
        let ViewState::Editing(session) = &mut self.state else {
            return Err(EditError::NotEditing);
        };

        match session.commit(store) {
            Ok(record) => {
                let before = self.filtered_count();
                match self.snapshot.iter_mut().find(|r| r.id() == record.id()) {
                    Some(slot) => *slot = record.clone(),
                    None => self.snapshot.push(record.clone()),
                }
                self.state = ViewState::Browsing;
                self.settle_page(before);
                Ok(CommitOutcome::Saved(record))
            }
            Err(EditError::Store(StoreError::NotFound(id))) => {
                debug!(record = %id, "record deleted before commit, dropping draft");
                let before = self.filtered_count();
                self.snapshot.retain(|r| r.id() != id);
                self.state = ViewState::Browsing;
                self.settle_page(before);
                Ok(CommitOutcome::Discarded)
            }
            Err(e) => {
                if !e.is_validation() {
                    warn!(error = %e, "commit failed, keeping draft");
                }
                Err(e)
            }
        }
    }

    pub fn cancel(&mut self) {
        if let ViewState::Editing(_) = self.state {
            self.state = ViewState::Browsing;
        }
    }

    pub fn view_detail(&mut self, id: &str) -> Result<(), ControllerError> {
        self.ensure_browsing()?;
        if self.find(id).is_none() {
            return Err(ControllerError::UnknownRecord(id.to_string()));
        }
        self.state = ViewState::ViewingDetail(id.to_string());
        Ok(())
    }

    pub fn detail(&self) -> Option<&E> {
        match &self.state {
            ViewState::ViewingDetail(id) => self.find(id),
            _ => None,
        }
    }

    pub fn close_detail(&mut self) {
        if let ViewState::ViewingDetail(_) = self.state {
            self.state = ViewState::Browsing;
        }
    }

    fn ensure_browsing(&self) -> Result<(), ControllerError> {
        match self.state {
            ViewState::Browsing => Ok(()),
            _ => Err(ControllerError::Busy),
        }
    }

    fn clamp_page(&mut self) {
        let effective = self.listing().meta.page;
        if effective != self.filters.page() {
            self.filters.set_page(effective);
        }
    }

    fn settle_page(&mut self, filtered_before: usize) {
        if self.filtered_count() != filtered_before {
            self.filters.reset_page();
        } else {
            self.clamp_page();
        }
    }
}

impl<E: HasStatus> ViewController<E> {
    /// Per-status totals over the whole snapshot, ignoring active filters.
    pub fn status_totals(&self) -> Vec<(E::Status, usize)> {
        E::Status::ALL
            .iter()
            .map(|status| {
                let count = self.snapshot.iter().filter(|r| r.status() == *status).count();
                (*status, count)
            })
            .collect()
    }
}
