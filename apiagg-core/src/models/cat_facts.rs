//! Cat facts envelope.

use serde::{Deserialize, Serialize};

/// A single cat fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatFact {
    /// The fact text.
    pub fact: String,
    /// Length of the fact as reported by the provider.
    pub length: u32,
}

/// One page of cat facts, in the provider's pagination envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatFactsPage {
    /// Current page number (1-based).
    #[serde(alias = "currentPage")]
    pub current_page: u32,

    /// Facts on this page.
    pub data: Vec<CatFact>,

    /// URL of the first page.
    #[serde(default, alias = "firstPageUrl")]
    pub first_page_url: Option<String>,

    /// Index of the first fact on this page.
    #[serde(default)]
    pub from: Option<u32>,

    /// Last page number.
    #[serde(default, alias = "lastPage")]
    pub last_page: Option<u32>,

    /// URL of the last page.
    #[serde(default, alias = "lastPageUrl")]
    pub last_page_url: Option<String>,

    /// URL of the next page.
    #[serde(default, alias = "nextPageUrl")]
    pub next_page_url: Option<String>,

    /// Base path of the listing.
    #[serde(default)]
    pub path: Option<String>,

    /// Page size.
    #[serde(default, alias = "perPage")]
    pub per_page: Option<u32>,

    /// URL of the previous page.
    #[serde(default, alias = "prevPageUrl")]
    pub prev_page_url: Option<String>,

    /// Index of the last fact on this page.
    #[serde(default)]
    pub to: Option<u32>,

    /// Total number of facts.
    #[serde(default)]
    pub total: Option<u32>,
}

impl CatFactsPage {
    /// Returns true if there is a page after this one.
    pub fn has_next_page(&self) -> bool {
        match self.last_page {
            Some(last) => self.current_page < last,
            None => self.next_page_url.is_some(),
        }
    }
}
