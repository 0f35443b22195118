use std::collections::BTreeMap;

use super::Entity;

/// Categorical axes a list can be narrowed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Zone,
    Status,
}

impl Dimension {
    /// Query-string key carrying the selection.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Zone => "zone",
            Dimension::Status => "status",
        }
    }
}

/// Selection on one dimension; `All` is the "no restriction" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "all" {
            Selection::All
        } else {
            Selection::Only(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => "all",
            Selection::Only(v) => v,
        }
    }

    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

/// Search text, categorical selections and the 1-based page of one view.
///
/// Every mutation of the search text or a selection sends the view back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    selections: BTreeMap<Dimension, Selection>,
    page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            selections: BTreeMap::new(),
            page: 1,
        }
    }
}

impl FilterState {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selection(&self, dimension: Dimension) -> &Selection {
        static ALL: Selection = Selection::All;
        self.selections.get(&dimension).unwrap_or(&ALL)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    pub fn select(&mut self, dimension: Dimension, selection: Selection) {
        match selection {
            Selection::All => {
                self.selections.remove(&dimension);
            }
            only => {
                self.selections.insert(dimension, only);
            }
        }
        self.page = 1;
    }

    /// Page changes do not touch the criteria. Zero is treated as page 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Rebuild from decoded query pairs (`q`, `zone`, `status`, `page`).
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut state = FilterState::default();
        let mut page = 1;
        for (key, value) in pairs {
            match key {
                "q" => state.search = value.to_string(),
                "zone" => {
                    state.select(Dimension::Zone, Selection::parse(value));
                }
                "status" => {
                    state.select(Dimension::Status, Selection::parse(value));
                }
                "page" => page = value.trim().parse().unwrap_or(1),
                _ => {}
            }
        }
        state.set_page(page);
        state
    }

    /// Query pairs reproducing this state; defaults are left out.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("q", self.search.clone()));
        }
        for (dimension, selection) in &self.selections {
            pairs.push((dimension.key(), selection.as_str().to_string()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        pairs
    }
}

/// Filter predicate: case-insensitive search AND every declared dimension.
pub fn matches<E: Entity>(record: &E, filters: &FilterState) -> bool {
    let needle = filters.search().to_lowercase();
    let search_ok = needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));

    search_ok
        && E::DIMENSIONS
            .iter()
            .all(|d| filters.selection(*d).admits(record.dimension_value(*d)))
}
