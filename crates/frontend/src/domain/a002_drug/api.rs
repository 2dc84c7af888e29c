use crate::shared::api_utils::{api_url, get_json, ApiError};
use contracts::domain::a002_drug::dto::DrugSearchResponse;

const SEARCH_PATH: &str = "/api/drugs/search";

/// Whether `query` is long enough to hit the server
pub fn is_searchable(query: &str, min_len: usize) -> bool {
    query.trim().chars().count() >= min_len
}

pub fn search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}?q={}",
        api_url(base_url, SEARCH_PATH),
        urlencoding::encode(query.trim())
    )
}

/// Drugs whose name contains `query`
///
/// Short queries return an empty list without a request.
pub async fn search_drugs(
    base_url: &str,
    query: &str,
    min_len: usize,
) -> Result<DrugSearchResponse, ApiError> {
    if !is_searchable(query, min_len) {
        return Ok(Vec::new());
    }
    get_json(&search_url(base_url, query)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_is_searchable() {
        assert!(!is_searchable("", 2));
        assert!(!is_searchable("a", 2));
        assert!(!is_searchable(" a ", 2));
        assert!(is_searchable("am", 2));
        assert!(is_searchable("ép", 2));
        assert!(is_searchable("a", 1));
    }

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(search_url("", "para"), "/api/drugs/search?q=para");
        assert_eq!(
            search_url("", " vitamin c&d "),
            "/api/drugs/search?q=vitamin%20c%26d"
        );
    }

    #[test]
    fn test_short_query_skips_request() {
        let hits = block_on(search_drugs("", "a", 2)).unwrap();
        assert!(hits.is_empty());
    }
}
