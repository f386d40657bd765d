//! Titles of tabs, for the menu and for tabs restored from the URL.

use crate::domain::a001_product::Products;
use crate::domain::a002_category::Categories;
use crate::domain::a003_order::Orders;
use crate::domain::a004_customer::Customers;
use crate::domain::a005_coupon::Coupons;
use crate::domain::a006_courier::Couriers;
use crate::domain::a007_staff::StaffMembers;
use crate::domain::a008_media::MediaLibrary;
use crate::domain::a009_blog::BlogPosts;
use crate::domain::a010_job::Jobs;
use crate::domain::a011_faq::Faqs;
use crate::domain::a012_newsletter::Subscribers;
use crate::domain::a013_product_review::Reviews;
use crate::domain::a014_transaction::Transactions;
use crate::domain::a015_inquiry::Inquiries;
use crate::shared::resource::{details_id, Resource};
use crate::system::user_profile;

pub const DASHBOARD_KEY: &str = "d400_overview";
pub const DASHBOARD_TITLE: &str = "Dashboard";

/// `(tab key, title)` of every list screen.
pub const LIST_TABS: [(&str, &str); 15] = [
    (Products::TAB_KEY, Products::TITLE),
    (Categories::TAB_KEY, Categories::TITLE),
    (Orders::TAB_KEY, Orders::TITLE),
    (Customers::TAB_KEY, Customers::TITLE),
    (Coupons::TAB_KEY, Coupons::TITLE),
    (Couriers::TAB_KEY, Couriers::TITLE),
    (StaffMembers::TAB_KEY, StaffMembers::TITLE),
    (MediaLibrary::TAB_KEY, MediaLibrary::TITLE),
    (BlogPosts::TAB_KEY, BlogPosts::TITLE),
    (Jobs::TAB_KEY, Jobs::TITLE),
    (Faqs::TAB_KEY, Faqs::TITLE),
    (Subscribers::TAB_KEY, Subscribers::TITLE),
    (Reviews::TAB_KEY, Reviews::TITLE),
    (Transactions::TAB_KEY, Transactions::TITLE),
    (Inquiries::TAB_KEY, Inquiries::TITLE),
];

/// `(resource path, entity name)` of every resource with a details tab.
const DETAIL_ENTITIES: [(&str, &str); 13] = [
    (Products::PATH, "Product"),
    (Categories::PATH, "Category"),
    (Orders::PATH, "Order"),
    (Customers::PATH, "Customer"),
    (Coupons::PATH, "Coupon"),
    (Couriers::PATH, "Courier"),
    (StaffMembers::PATH, "Staff"),
    (BlogPosts::PATH, "Post"),
    (Jobs::PATH, "Job"),
    (Faqs::PATH, "FAQ"),
    (Subscribers::PATH, "Newsletter"),
    (Reviews::PATH, "Review"),
    (Inquiries::PATH, "Inquiry"),
];

/// Title of a fixed tab, or `""` for keys that are not fixed tabs.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        DASHBOARD_KEY => DASHBOARD_TITLE,
        user_profile::TAB_KEY => "My profile",
        _ => LIST_TABS
            .iter()
            .find(|(tab_key, _)| *tab_key == key)
            .map(|(_, title)| *title)
            .unwrap_or(""),
    }
}

/// Title of a details tab: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Title for any tab key; details keys are labelled from their id and
/// unknown keys fall back to the key itself.
pub fn tab_title(key: &str) -> String {
    let fixed = tab_label_for_key(key);
    if !fixed.is_empty() {
        return fixed.to_string();
    }
    DETAIL_ENTITIES
        .iter()
        .find_map(|(path, entity)| {
            details_id(key, path).map(|id| match id {
                Some(id) => detail_tab_label(entity, &id),
                None => format!("New {}", entity.to_lowercase()),
            })
        })
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_keys_use_resource_titles() {
        assert_eq!(tab_label_for_key("a003_order"), "Orders");
        assert_eq!(tab_label_for_key("a010_job"), "Careers");
        assert_eq!(tab_label_for_key("d400_overview"), "Dashboard");
        assert_eq!(tab_label_for_key("nope"), "");
    }

    #[test]
    fn details_keys_are_labelled_by_entity() {
        assert_eq!(tab_title("order_details_o-9"), "Order · o-9");
        assert_eq!(tab_title("product_details_new"), "New product");
        assert_eq!(tab_title("product-review_details_r-1"), "Review · r-1");
        assert_eq!(tab_title("newsletter_details_new"), "New newsletter");
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        assert_eq!(tab_title("x_details_1"), "x_details_1");
    }
}
