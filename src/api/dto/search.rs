//! Query parameters for the post search endpoint.

use serde::Deserialize;

use crate::domain::entities::PostSearch;

/// `GET /all-blogs?filter=<category>&search=<title regex>`
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub filter: Option<String>,
    pub search: Option<String>,
}

impl From<SearchQuery> for PostSearch {
    fn from(query: SearchQuery) -> Self {
        PostSearch::new(query.search, query.filter)
    }
}
