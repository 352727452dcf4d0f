//! In-memory search index over a fixed catalog.
//!
//! Good enough to drive the board end-to-end: facet refinement, token
//! scoring over title/genres/overview, and a bounded ordered page.

use super::{FacetFilter, ResultItem, ResultPage, SearchBackend, SearchError, SearchResult};

const SAMPLE_CATALOG: &str = include_str!("catalog.json");

pub struct MemoryIndex {
    items: Vec<ResultItem>,
}

impl MemoryIndex {
    pub fn from_items(items: Vec<ResultItem>) -> Self {
        Self { items }
    }

    /// The embedded movie catalog used by the binary and the tests.
    pub fn sample_catalog() -> Self {
        let items: Vec<ResultItem> =
            serde_json::from_str(SAMPLE_CATALOG).expect("embedded catalog is valid JSON");
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn score(item: &ResultItem, tokens: &[String]) -> f32 {
    let title = item.title.to_lowercase();
    let genres = item.genres.join(" ").to_lowercase();
    let overview = item.overview.as_deref().unwrap_or("").to_lowercase();
    let tagline = item.tagline.as_deref().unwrap_or("").to_lowercase();

    let mut score = 0.0;
    for token in tokens {
        if title.contains(token.as_str()) {
            score += 3.0;
        }
        if genres.contains(token.as_str()) {
            score += 2.0;
        }
        if overview.contains(token.as_str()) {
            score += 1.0;
        }
        if tagline.contains(token.as_str()) {
            score += 1.0;
        }
    }
    score
}

impl SearchBackend for MemoryIndex {
    fn search(
        &self,
        query: &str,
        facet: &FacetFilter,
        page_size: usize,
    ) -> SearchResult<ResultPage> {
        if facet.field != "record_type" {
            return Err(SearchError::UnknownFacetField {
                field: facet.field.clone(),
            });
        }

        let refined = self
            .items
            .iter()
            .filter(|item| item.record_type == facet.value);

        let tokens: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();

        let mut scored: Vec<(f32, &ResultItem)> = if tokens.is_empty() {
            // Empty query browses the whole refined set
            refined.map(|item| (0.0, item)).collect()
        } else {
            refined
                .map(|item| (score(item, &tokens), item))
                .filter(|(score, _)| *score > 0.0)
                .collect()
        };

        scored.sort_by(|(sa, a), (sb, b)| {
            sb.total_cmp(sa)
                .then(b.bayesian_avg.total_cmp(&a.bayesian_avg))
        });

        let total = scored.len();
        let items = scored
            .into_iter()
            .take(page_size)
            .map(|(_, item)| item.clone())
            .collect();

        Ok(ResultPage { items, total })
    }
}
