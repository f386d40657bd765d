use contracts::domain::a013_product_review::aggregate::ProductReview;
use leptos::prelude::*;

use crate::domain::a013_product_review::Reviews;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{Badge, BadgeVariant};
use crate::shared::format::format_opt_date;
use crate::shared::resource::{
    resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow, Resource,
};

impl ListRow for ProductReview {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("Product", 180.0),
            ("Customer", 150.0),
            ("Rating", 100.0),
            ("Comment", 280.0),
            ("Status", 100.0),
            ("Date", 110.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        let status = if self.is_approved {
            view! { <Badge variant=BadgeVariant::Success>"Approved"</Badge> }.into_any()
        } else {
            view! { <Badge variant=BadgeVariant::Warning>"Pending"</Badge> }.into_any()
        };
        vec![
            self.product_name.clone().into_any(),
            self.customer_name.clone().into_any(),
            view! { <span class="stars">{self.stars()}</span> }.into_any(),
            self.comment.clone().into_any(),
            status,
            format_opt_date(self.created_at.as_deref()).into_any(),
        ]
    }
}

#[component]
pub fn ReviewList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<Reviews>();

    let rating_filter = (1..=5).rev().fold(FilterSpec::new("rating", "Rating"), |spec, n| {
        spec.option(&n.to_string(), &format!("{} stars", n))
    });

    let mut options =
        ListOptions::new("a013_product_review--list", Reviews::TITLE).with_viewer::<Reviews>(ctx, "Review");
    options.search_fields = vec![("productName", "Product"), ("customerName", "Customer")];
    options.filters = vec![
        FilterSpec::new("isApproved", "Status")
            .option("false", "Pending")
            .option("true", "Approved"),
        rating_filter,
    ];
    options.deletable = true;

    resource_list_view(state, options)
}
