//! Query adapter and the search backend seam.
//!
//! The board only ever observes a successful, ordered result page; how the
//! backend produced it is not its concern. An in-memory index lives in
//! [`memory`] so the binary and tests run without any external service.

pub mod memory;

use serde::{Deserialize, Serialize};

pub use memory::MemoryIndex;

// Error types
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SearchError {
    #[error("Unknown facet field: {field}")]
    UnknownFacetField { field: String },

    #[error("Index error: {reason}")]
    Index { reason: String },
}

pub type SearchResult<T> = Result<T, SearchError>;

/// One search hit. Immutable once received from the backend; `rank` is the
/// 1-based display position assigned when the item's body spawns and stays
/// stable for that body's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub object_id: String,
    #[serde(default)]
    pub rank: usize,
    pub title: String,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub genres: Vec<String>,
    pub popularity: f32,
    pub vote_average: f32,
    pub vote_count: u32,
    pub bayesian_avg: f32,
    /// Release date in milliseconds since the Unix epoch; 0 means unknown.
    pub release_date: i64,
    pub runtime: u32,
    pub record_type: String,
}

impl ResultItem {
    pub fn release_year(&self) -> Option<i32> {
        if self.release_date == 0 {
            return None;
        }
        Some(year_of_epoch_ms(self.release_date))
    }
}

/// Calendar year of a Unix-epoch millisecond timestamp (proleptic Gregorian).
fn year_of_epoch_ms(ms: i64) -> i32 {
    let days = ms.div_euclid(86_400_000);
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (if month <= 2 { y + 1 } else { y }) as i32
}

/// Ordered, bounded page of results plus the match total.
#[derive(Debug, Clone, Default)]
pub struct ResultPage {
    pub items: Vec<ResultItem>,
    pub total: usize,
}

impl ResultPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Fixed facet refinement sent with every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetFilter {
    pub field: String,
    pub value: String,
}

impl FacetFilter {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Black-box search backend: text in, ordered bounded page out.
pub trait SearchBackend {
    fn search(
        &self,
        query: &str,
        facet: &FacetFilter,
        page_size: usize,
    ) -> SearchResult<ResultPage>;
}

/// Forwards user text input to the backend with the fixed refinement and
/// page size; the board reacts only to the page that comes back.
pub struct QueryAdapter<B: SearchBackend> {
    backend: B,
    facet: FacetFilter,
    page_size: usize,
}

impl<B: SearchBackend> QueryAdapter<B> {
    pub fn new(backend: B, facet: FacetFilter, page_size: usize) -> Self {
        Self {
            backend,
            facet,
            page_size,
        }
    }

    pub fn query(&self, text: &str) -> SearchResult<ResultPage> {
        self.backend.search(text, &self.facet, self.page_size)
    }
}
