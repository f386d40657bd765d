//! Tab content registry: the single mapping from `tab.key` to a view.

use leptos::prelude::*;

use super::tab_labels::DASHBOARD_KEY;
use crate::dashboards::OverviewDashboard;
use crate::domain::a001_product::{ui::ProductDetails, ui::ProductList, Products};
use crate::domain::a002_category::{ui::CategoryDetails, ui::CategoryList, Categories};
use crate::domain::a003_order::{ui::OrderDetails, ui::OrderList, Orders};
use crate::domain::a004_customer::{ui::CustomerDetails, ui::CustomerList, Customers};
use crate::domain::a005_coupon::{ui::CouponDetails, ui::CouponList, Coupons};
use crate::domain::a006_courier::{ui::CourierDetails, ui::CourierList, Couriers};
use crate::domain::a007_staff::{ui::StaffDetails, ui::StaffList, StaffMembers};
use crate::domain::a008_media::{ui::MediaLibraryPage, MediaLibrary};
use crate::domain::a009_blog::{ui::BlogPostDetails, ui::BlogPostList, BlogPosts};
use crate::domain::a010_job::{ui::JobDetails, ui::JobList, Jobs};
use crate::domain::a011_faq::{ui::FaqDetails, ui::FaqList, Faqs};
use crate::domain::a012_newsletter::{ui::NewsletterCampaign, ui::SubscriberList, Subscribers};
use crate::domain::a013_product_review::{ui::ReviewDetails, ui::ReviewList, Reviews};
use crate::domain::a014_transaction::{ui::TransactionList, Transactions};
use crate::domain::a015_inquiry::{ui::InquiryDetails, ui::InquiryList, Inquiries};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::resource::{details_id, Resource};
use crate::system::auth::guard::RequireAdmin;
use crate::system::user_profile::{self, ui::UserProfilePage};

/// Renders the content of the tab `key`.
///
/// `tabs_store` closes the tab when a details page asks for it.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    match key {
        DASHBOARD_KEY => view! { <OverviewDashboard /> }.into_any(),
        user_profile::TAB_KEY => view! { <UserProfilePage /> }.into_any(),

        Products::TAB_KEY => view! { <ProductList /> }.into_any(),
        Categories::TAB_KEY => view! { <CategoryList /> }.into_any(),
        Orders::TAB_KEY => view! { <OrderList /> }.into_any(),
        Customers::TAB_KEY => view! { <CustomerList /> }.into_any(),
        Coupons::TAB_KEY => view! { <CouponList /> }.into_any(),
        Couriers::TAB_KEY => view! { <CourierList /> }.into_any(),
        StaffMembers::TAB_KEY => view! { <RequireAdmin><StaffList /></RequireAdmin> }.into_any(),
        MediaLibrary::TAB_KEY => view! { <MediaLibraryPage /> }.into_any(),
        BlogPosts::TAB_KEY => view! { <BlogPostList /> }.into_any(),
        Jobs::TAB_KEY => view! { <JobList /> }.into_any(),
        Faqs::TAB_KEY => view! { <FaqList /> }.into_any(),
        Subscribers::TAB_KEY => view! { <SubscriberList /> }.into_any(),
        Reviews::TAB_KEY => view! { <ReviewList /> }.into_any(),
        Transactions::TAB_KEY => view! { <TransactionList /> }.into_any(),
        Inquiries::TAB_KEY => view! { <InquiryList /> }.into_any(),

        k => render_details(k, on_close).unwrap_or_else(|| {
            log::warn!("unknown tab key: {}", k);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }),
    }
}

/// Details pages; records that must exist reject the "new" key.
fn render_details(key: &str, on_close: Callback<()>) -> Option<AnyView> {
    if let Some(id) = details_id(key, Products::PATH) {
        return Some(view! { <ProductDetails id=id on_close=on_close /> }.into_any());
    }
    if let Some(id) = details_id(key, Categories::PATH) {
        return Some(view! { <CategoryDetails id=id on_close=on_close /> }.into_any());
    }
    if let Some(id) = details_id(key, Orders::PATH).flatten() {
        return Some(view! { <OrderDetails id=id on_close=on_close /> }.into_any());
    }
    if let Some(id) = details_id(key, Customers::PATH).flatten() {
        return Some(view! { <CustomerDetails id=id on_close=on_close /> }.into_any());
    }
    if let Some(id) = details_id(key, Coupons::PATH) {
        return Some(view! { <CouponDetails id=id on_close=on_close /> }.into_any());
    }
    if let Some(id) = details_id(key, Couriers::PATH) {
        return Some(view! { <CourierDetails id=id on_close=on_close /> }.into_any());
    }
    if let Some(id) = details_id(key, StaffMembers::PATH) {
        return Some(
            view! {
                <RequireAdmin>
                    <StaffDetails id=id.clone() on_close=on_close />
                </RequireAdmin>
            }
            .into_any(),
        );
    }
    if let Some(id) = details_id(key, BlogPosts::PATH) {
        return Some(view! { <BlogPostDetails id=id on_close=on_close /> }.into_any());
    }
    if let Some(id) = details_id(key, Jobs::PATH) {
        return Some(view! { <JobDetails id=id on_close=on_close /> }.into_any());
    }
    if let Some(id) = details_id(key, Faqs::PATH) {
        return Some(view! { <FaqDetails id=id on_close=on_close /> }.into_any());
    }
    if let Some(None) = details_id(key, Subscribers::PATH) {
        return Some(view! { <NewsletterCampaign on_close=on_close /> }.into_any());
    }
    if let Some(id) = details_id(key, Reviews::PATH).flatten() {
        return Some(view! { <ReviewDetails id=id on_close=on_close /> }.into_any());
    }
    if let Some(id) = details_id(key, Inquiries::PATH).flatten() {
        return Some(view! { <InquiryDetails id=id on_close=on_close /> }.into_any());
    }
    None
}
