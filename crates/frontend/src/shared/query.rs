//! List query: search, filters and paging turned into a query string.

use serde::Serialize;

use super::config::config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search_term: String,
    pub search_by: String,
    /// Extra filters, sent in insertion order.
    pub filters: Vec<(String, String)>,
    /// 1-based.
    pub page: u32,
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            search_by: String::new(),
            filters: Vec::new(),
            page: 1,
            limit: config().initial_page_size(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    search_term: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search_by: Option<&'a str>,
    page: u32,
    limit: u32,
}

impl ListQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            search_term: String::new(),
            search_by: String::new(),
            filters: Vec::new(),
            page,
            limit,
        }
    }

    /// Replaces a filter value in place, or appends it.
    pub fn set_filter(&mut self, key: &str, value: &str) {
        match self.filters.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.filters.push((key.to_string(), value.to_string())),
        }
    }

    pub fn with_filter(mut self, key: &str, value: &str) -> Self {
        self.set_filter(key, value);
        self
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Query string without the leading `?`.
    ///
    /// `searchTerm` and `searchBy` are sent together, and only when the
    /// trimmed term is not empty.
    pub fn to_query_string(&self) -> String {
        let term = self.search_term.trim();
        let searching = !term.is_empty();
        let params = QueryParams {
            search_term: searching.then_some(term),
            search_by: searching.then_some(self.search_by.as_str()),
            page: self.page.max(1),
            limit: self.limit,
        };
        let mut query = serde_qs::to_string(&params).unwrap_or_else(|e| {
            log::warn!("query serialization failed: {}", e);
            format!("page={}&limit={}", params.page, params.limit)
        });

        for (key, value) in &self.filters {
            if value.trim().is_empty() {
                continue;
            }
            query.push('&');
            query.push_str(&urlencoding::encode(key));
            query.push('=');
            query.push_str(&urlencoding::encode(value));
        }
        query
    }

    /// `path?query`.
    pub fn apply_to(&self, path: &str) -> String {
        format!("{}?{}", path, self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &str) -> Vec<(String, String)> {
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn keys(query: &str) -> Vec<String> {
        pairs(query).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn blank_search_is_omitted() {
        let mut query = ListQuery::new(2, 25);
        query.search_term = "   ".into();
        query.search_by = "name".into();
        assert_eq!(keys(&query.to_query_string()), vec!["page", "limit"]);
    }

    #[test]
    fn search_sends_term_and_field_together() {
        let mut query = ListQuery::new(1, 10);
        query.search_term = " shirt ".into();
        query.search_by = "name".into();
        let pairs = pairs(&query.to_query_string());
        assert!(pairs.contains(&("searchTerm".into(), "shirt".into())));
        assert!(pairs.contains(&("searchBy".into(), "name".into())));
    }

    #[test]
    fn filters_follow_in_order_and_skip_empty_values() {
        let mut query = ListQuery::new(1, 10);
        query.set_filter("status", "pending");
        query.set_filter("courier", "");
        query.set_filter("paymentStatus", "paid");
        query.set_filter("status", "shipped");

        assert_eq!(
            keys(&query.to_query_string()),
            vec!["page", "limit", "status", "paymentStatus"]
        );
        assert_eq!(query.filter("status"), Some("shipped"));
    }

    #[test]
    fn page_zero_is_sent_as_first_page() {
        let query = ListQuery::new(0, 10);
        assert!(query.apply_to("/order").starts_with("/order?page=1&"));
    }
}
