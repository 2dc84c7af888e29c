//! Bookkeeping for the search widget, kept apart from the view

use crate::shared::api_utils::ApiError;
use contracts::domain::a002_drug::dto::{DrugSearchHit, DrugSearchResponse};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Numbers search requests so that only the newest one may update the view
#[derive(Debug, Clone, Default)]
pub struct LatestRequest {
    counter: Arc<AtomicU64>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request; every earlier id stops being current
    pub fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.counter.load(Ordering::Relaxed) == id
    }
}

/// What the results area shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchView {
    pub hits: Vec<DrugSearchHit>,
    pub error: Option<String>,
}

impl SearchView {
    /// A failed search clears the table; rows of an older query never stay
    /// under the error message
    pub fn from_result(result: Result<DrugSearchResponse, ApiError>) -> Self {
        match result {
            Ok(hits) => Self { hits, error: None },
            Err(e) => Self {
                hits: Vec::new(),
                error: Some(format!("Search failed: {}", e)),
            },
        }
    }
}
