//! Generic CRUD plumbing shared by every resource screen.
//!
//! A resource is described once by implementing [`Resource`]; the service,
//! the paginated list hook and the table view are generic over it.

pub mod details;
pub mod export_toolbar;
pub mod hook;
pub mod list_view;
pub mod service;
pub mod tracker;

use serde::de::DeserializeOwned;

pub use details::{success_message, DetailsFrame, PageActions};
pub use export_toolbar::{export_filename, export_toolbar, ExportFormat};
pub use hook::{use_resource_list, ResourceListState};
pub use list_view::{confirm, resource_list_view, FilterSpec, ListOptions, ListRow};
pub use service::ResourceService;
pub use tracker::{AbortHandle, FetchTicket, FetchTracker};

pub trait Resource: 'static {
    type Item: DeserializeOwned + Clone + Default + Send + Sync + 'static;

    /// API path segment, e.g. `"product"`.
    const PATH: &'static str;
    /// Key of the list tab; the list fetches only while it is active.
    const TAB_KEY: &'static str;
    /// Human title of the list tab.
    const TITLE: &'static str;

    fn item_id(item: &Self::Item) -> String;

    /// Tab key of the details page for `id`.
    fn details_key(id: &str) -> String {
        format!("{}_details_{}", Self::PATH, id)
    }
}

/// Id used in the details key of a record that does not exist yet.
pub const NEW_ID: &str = "new";

/// Parses a details tab key of resource `path`.
///
/// `Some(None)` is the "new record" page, `Some(Some(id))` an existing one.
pub fn details_id(key: &str, path: &str) -> Option<Option<String>> {
    let id = key.strip_prefix(path)?.strip_prefix("_details_")?;
    match id {
        "" => None,
        NEW_ID => Some(None),
        id => Some(Some(id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reviews;

    impl Resource for Reviews {
        type Item = String;
        const PATH: &'static str = "product-review";
        const TAB_KEY: &'static str = "a013_product_review";
        const TITLE: &'static str = "Reviews";

        fn item_id(item: &String) -> String {
            item.clone()
        }
    }

    #[test]
    fn details_keys_round_trip() {
        let key = Reviews::details_key("r-7");
        assert_eq!(key, "product-review_details_r-7");
        assert_eq!(details_id(&key, Reviews::PATH), Some(Some("r-7".to_string())));
        assert_eq!(details_id("product-review_details_new", Reviews::PATH), Some(None));
    }

    #[test]
    fn other_resources_do_not_match() {
        assert_eq!(details_id("product-review_details_r-7", "product"), None);
        assert_eq!(details_id("product_details_", "product"), None);
        assert_eq!(details_id("a001_product", "product"), None);
    }
}
