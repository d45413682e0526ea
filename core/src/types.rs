//! Per-call query parameters for the exercises API.
//!
//! Nothing here is retained after a call returns.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIST_LIMIT: u32 = 20;
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

/// Pagination for the exercises collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_list_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

impl ListParams {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

/// A search term plus result cap. The term is sent as given; an empty term
/// is the caller's problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub search: String,
    #[serde(default = "default_search_limit")]
    pub limit: u32,
}

impl SearchParams {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

fn default_list_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

fn default_search_limit() -> u32 {
    DEFAULT_SEARCH_LIMIT
}
