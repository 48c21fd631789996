//! Upstream response envelope.

use crate::CatalogRecord;
use serde::{Deserialize, Serialize};

/// Search and lookup response body.
///
/// # Examples
///
/// ```
/// use appfinder_core::SearchResponse;
///
/// let body = r#"{"resultCount": 1, "results": [{"trackId": 7, "trackName": "Go"}]}"#;
/// let response: SearchResponse = serde_json::from_str(body).unwrap();
///
/// assert_eq!(response.result_count, 1);
/// assert_eq!(response.into_records(8).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    /// Number of results the upstream reports
    #[serde(rename = "resultCount", default)]
    pub result_count: usize,
    /// Returned records in upstream order
    #[serde(default)]
    pub results: Vec<CatalogRecord>,
}

impl SearchResponse {
    /// Keep at most `min(result_count, cap)` records, preserving order.
    pub fn into_records(self, cap: usize) -> Vec<CatalogRecord> {
        let keep = self.result_count.min(cap);
        self.results.into_iter().take(keep).collect()
    }
}
