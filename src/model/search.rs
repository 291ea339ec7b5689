use log::debug;
use serde::Serialize;

use super::decode_title;
use crate::api::{RecipeApi, RecipeSummary};
use crate::error::FetchError;

/// A query and the summaries it returned
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    pub query: String,
    pub results: Vec<RecipeSummary>,
}

/// One page of search results, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsPage {
    pub items: Vec<RecipeSummary>,
    /// Zero-based page index
    pub page: usize,
    pub total_pages: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl Search {
    /// Run `query` against the API
    pub async fn fetch(api: &dyn RecipeApi, query: &str) -> Result<Self, FetchError> {
        let results = api.search(query).await?;
        debug!("search {:?}: {} results", query, results.len());
        Ok(Self::new(query, results))
    }

    pub fn new(query: impl Into<String>, results: Vec<RecipeSummary>) -> Self {
        let results = results
            .into_iter()
            .map(|summary| RecipeSummary {
                title: decode_title(&summary.title),
                ..summary
            })
            .collect();

        Search {
            query: query.into(),
            results,
        }
    }

    /// Results `[page * page_size, page * page_size + page_size)`, clipped to bounds
    pub fn paginate(&self, page: usize, page_size: usize) -> &[RecipeSummary] {
        let len = self.results.len();
        let start = page.saturating_mul(page_size).min(len);
        let end = start.saturating_add(page_size).min(len);
        &self.results[start..end]
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            0
        } else {
            self.results.len().div_ceil(page_size)
        }
    }

    /// [`paginate`](Self::paginate) plus the neighbouring pages that exist
    pub fn page(&self, page: usize, page_size: usize) -> ResultsPage {
        let total_pages = self.total_pages(page_size);
        let prev = (page > 0 && page < total_pages).then(|| page - 1);
        let next = (page.saturating_add(1) < total_pages).then(|| page + 1);

        ResultsPage {
            items: self.paginate(page, page_size).to_vec(),
            page,
            total_pages,
            prev,
            next,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.results.iter().any(|summary| summary.id == id)
    }
}
