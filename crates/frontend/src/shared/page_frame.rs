//! Root wrapper of every page rendered inside a tab.

use leptos::prelude::*;

use super::page_standard::{is_known_category, is_valid_page_id, page_class};

/// Sets `id`, `data-page-category` and the category class on the page root.
///
/// ```ignore
/// view! {
///     <PageFrame page_id="a003_order--list" category=PAGE_CAT_LIST>
///         <div class="page__header">...</div>
///         <div class="page__content">...</div>
///     </PageFrame>
/// }
/// ```
#[component]
pub fn PageFrame(
    /// `{tab}--{category}`, e.g. `"a003_order--list"`.
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants.
    category: &'static str,
    /// Extra classes appended after the category class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) || !is_known_category(category) {
        log::warn!("page '{}' has a non-standard id or category '{}'", page_id, category);
    }

    let full_class = if class.is_empty() {
        page_class(category).to_string()
    } else {
        format!("{} {}", page_class(category), class)
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
