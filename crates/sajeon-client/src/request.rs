use sajeon_types::types::{DictType, SearchMode};

pub const BASE_HOST: &str = "https://ac-dict.naver.com";

/// Everything needed for one auto-complete GET, computed up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub url: String,
    pub params: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, String)>,
}

impl SearchRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Endpoint URL for a dictionary.
pub fn base_url(dict: DictType) -> String {
    format!("{}/{}/ac", BASE_HOST, dict.code())
}

/// Map a query and the two selectors onto concrete request parameters.
/// Pure data transformation, no I/O.
pub fn build_search_request(query: &str, dict: DictType, mode: SearchMode) -> SearchRequest {
    let (st, r_lt) = mode.codes();

    SearchRequest {
        url: base_url(dict),
        params: vec![
            ("st", st.to_string()),
            ("r_lt", r_lt.to_string()),
            ("q", query.to_string()),
            ("r_format", "json".to_string()),
            ("r_enc", "UTF-8".to_string()),
        ],
        headers: vec![("referer", dict.referer().to_string())],
    }
}
