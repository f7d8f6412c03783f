use reqwest::Client;
use swapi::{Pagination, PlanetDto, PlanetsPage};
use tracing::debug;

use crate::api::{ClientError, fetch_page};

const FIRST_PAGE: u32 = 1;

/// Page to ask for after `pagination`, `None` once the last page is loaded.
pub fn next_page_param(pagination: &Pagination) -> Option<u32> {
    if pagination.per_page == 0 {
        return None;
    }

    let total_pages = pagination
        .total_items
        .div_ceil(u64::from(pagination.per_page));

    (u64::from(pagination.page) < total_pages)
        .then(|| pagination.page.checked_add(1))
        .flatten()
}

/// Infinite list of planets, one page appended per `load_next`.
pub struct PlanetFeed {
    client: Client,
    base_url: String,
    pages: Vec<PlanetsPage>,
}

impl PlanetFeed {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            pages: Vec::new(),
        }
    }

    pub fn next_page(&self) -> Option<u32> {
        match self.pages.last() {
            Some(last) => next_page_param(&last.pagination),
            None => Some(FIRST_PAGE),
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page().is_some()
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages.len()
    }

    /// Returns `false` when there was nothing left to load.
    pub async fn load_next(&mut self) -> Result<bool, ClientError> {
        let Some(page) = self.next_page() else {
            return Ok(false);
        };

        let loaded = fetch_page(&self.client, &self.base_url, page).await?;
        debug!("Loaded page {page} with {} planets", loaded.data.len());

        self.pages.push(loaded);

        Ok(true)
    }

    pub async fn load_all(&mut self, max_pages: Option<usize>) -> Result<(), ClientError> {
        while max_pages.is_none_or(|max| self.pages.len() < max) {
            if !self.load_next().await? {
                break;
            }
        }

        Ok(())
    }

    pub fn planets(&self) -> Vec<PlanetDto> {
        self.pages
            .iter()
            .flat_map(|page| page.data.iter().cloned())
            .collect()
    }
}
