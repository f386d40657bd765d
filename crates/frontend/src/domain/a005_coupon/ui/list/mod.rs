use contracts::domain::a005_coupon::aggregate::Coupon;
use leptos::prelude::*;

use crate::domain::a005_coupon::Coupons;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ActiveBadge;
use crate::shared::format::{format_date, format_money};
use crate::shared::resource::{
    resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow, Resource,
};

impl ListRow for Coupon {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("Code", 120.0),
            ("Discount", 90.0),
            ("Min. order", 100.0),
            ("Used", 90.0),
            ("Starts", 110.0),
            ("Expires", 110.0),
            ("Status", 100.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        let usage = match self.max_uses {
            Some(max) => format!("{} / {}", self.used_count, max),
            None => self.used_count.to_string(),
        };
        vec![
            view! { <code>{self.code.clone()}</code> }.into_any(),
            self.discount_label().into_any(),
            format_money(self.min_order_amount).into_any(),
            usage.into_any(),
            format_date(&self.starts_at).into_any(),
            format_date(&self.expires_at).into_any(),
            view! { <ActiveBadge active=self.is_active /> }.into_any(),
        ]
    }
}

#[component]
pub fn CouponList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<Coupons>();

    let mut options = ListOptions::new("a005_coupon--list", Coupons::TITLE)
        .with_details::<Coupons>(ctx, "Coupon");
    options.create_label = "New coupon";
    options.search_fields = vec![("code", "Code")];
    options.filters = vec![
        FilterSpec::new("discountType", "Type")
            .option("percentage", "Percentage")
            .option("fixed", "Fixed amount"),
        FilterSpec::new("isActive", "Status")
            .option("true", "Active")
            .option("false", "Inactive"),
    ];
    options.deletable = true;

    resource_list_view(state, options)
}
