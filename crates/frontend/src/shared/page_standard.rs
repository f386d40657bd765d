//! Page categories of tab pages.
//!
//! Every tab page carries an HTML `id` of the form `{tab}--{category}`
//! (e.g. `"a003_order--list"`) and a `data-page-category` attribute, so a
//! page found in the DOM inspector leads straight to its module.

/// Paginated table with search and filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Form or read-only view of one record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Headline figures and charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Pages about the signed-in account.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// `{tab}--{category}` with both parts present.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((tab, category)) if !tab.is_empty() && !category.is_empty())
}

pub fn is_known_category(category: &str) -> bool {
    ALL_CATEGORIES.contains(&category)
}

/// Root CSS class for a page of `category`.
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_need_both_parts() {
        assert!(is_valid_page_id("a003_order--list"));
        assert!(is_valid_page_id("sys_user_profile--system"));
        assert!(!is_valid_page_id("a003_order"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a003_order--"));
    }

    #[test]
    fn categories_map_to_classes() {
        assert!(is_known_category(PAGE_CAT_DASHBOARD));
        assert!(!is_known_category("usecase"));
        assert_eq!(page_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
    }
}
