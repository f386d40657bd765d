use serde::{Deserialize, Deserializer, Serialize};

/// Envelope every endpoint answers with.
///
/// `data` falls back to `T::default()` when it is absent or `null`; write
/// endpoints often answer that way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status: u16,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: T,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(default, alias = "rows", alias = "data", alias = "results")]
    pub items: Vec<T>,
    #[serde(default, alias = "totalItems", alias = "count")]
    pub total: u64,
    #[serde(default = "first_page", alias = "currentPage")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            limit: 0,
            total_pages: 0,
        }
    }
}

impl<T> Paginated<T> {
    /// Page count, derived from `total`/`limit` when the server omits it.
    pub fn page_count(&self) -> u32 {
        if self.total_pages > 0 {
            return self.total_pages;
        }
        if self.limit == 0 || self.total == 0 {
            return 1;
        }
        self.total.div_ceil(self.limit as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_data_defaults() {
        let resp: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"status":200,"message":"Deleted"}"#).unwrap();
        assert_eq!(resp.message, "Deleted");
        assert!(resp.data.is_null());
    }

    #[test]
    fn null_data_on_write_defaults() {
        #[derive(Debug, Default, PartialEq, Deserialize)]
        struct Saved {
            id: String,
        }

        let resp: ApiResponse<Saved> =
            serde_json::from_str(r#"{"status":200,"message":"FAQ updated","data":null}"#).unwrap();
        assert_eq!(resp.message, "FAQ updated");
        assert_eq!(resp.data, Saved::default());

        let resp: ApiResponse<Option<Saved>> =
            serde_json::from_str(r#"{"status":200,"message":null,"data":null}"#).unwrap();
        assert_eq!(resp.message, "");
        assert_eq!(resp.data, None);
    }

    #[test]
    fn paginated_accepts_rows_alias() {
        let page: Paginated<u32> =
            serde_json::from_str(r#"{"rows":[1,2,3],"totalItems":23,"limit":10}"#).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count(), 3);
    }

    #[test]
    fn page_count_prefers_server_value() {
        let page = Paginated::<u8> {
            total: 100,
            limit: 10,
            total_pages: 7,
            ..Default::default()
        };
        assert_eq!(page.page_count(), 7);
        assert_eq!(Paginated::<u8>::default().page_count(), 1);
    }
}
