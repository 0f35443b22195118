//! List-Filter-Paginate-Edit: the state machine shared by every entity view.
//!
//! A view is a [`ViewController`] over some [`Entity`]. The controller runs the
//! snapshot through the filter predicate, slices the result with the paginator and
//! holds at most one [`EditSession`] whose commit goes through an [`EntityStore`].

pub mod controller;
pub mod edit;
pub mod filter;
pub mod paginate;
pub mod store;

pub use controller::{CommitOutcome, ControllerError, Listing, ViewController, ViewState};
pub use edit::{Draft, EditError, EditSession};
pub use filter::{matches, Dimension, FilterState, Selection};
pub use paginate::{page_window, paginate, Page, PageMeta};
pub use store::{EntityStore, StoreError};

/// Descriptor tying a record type to the accessors the LFPE pattern needs.
pub trait Entity: Clone {
    /// Writable payload sent to the store; never carries ids or timestamps.
    type Fields: Clone + std::fmt::Debug;
    type Draft: Draft<Record = Self, Fields = Self::Fields>;

    /// Categorical filter dimensions this entity can be narrowed by.
    const DIMENSIONS: &'static [Dimension];

    fn id(&self) -> &str;

    /// Text fields the free-text search is tested against.
    fn search_fields(&self) -> Vec<&str>;

    /// Record value for a categorical dimension, `None` when unset.
    fn dimension_value(&self, dimension: Dimension) -> Option<&str>;
}

/// Closed set of workflow states with a display table per variant.
pub trait StatusKind: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn color(&self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == raw)
    }
}

/// Entities whose records move through a [`StatusKind`] workflow.
pub trait HasStatus: Entity {
    type Status: StatusKind;

    fn status(&self) -> Self::Status;
}
