use contracts::domain::a001_product::{Product, ProductStatus};
use leptos::prelude::*;

use crate::domain::a001_product::Products;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::static_url;
use crate::shared::components::{Badge, BadgeVariant};
use crate::shared::format::format_money;
use crate::shared::resource::{
    resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow, Resource,
};

fn status_badge(status: ProductStatus) -> AnyView {
    let variant = match status {
        ProductStatus::Published => BadgeVariant::Success,
        ProductStatus::Draft => BadgeVariant::Warning,
        ProductStatus::Archived => BadgeVariant::Neutral,
    };
    view! { <Badge variant=variant>{status.label()}</Badge> }.into_any()
}

impl ListRow for Product {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("Image", 70.0),
            ("Name", 220.0),
            ("SKU", 110.0),
            ("Category", 140.0),
            ("Price", 100.0),
            ("Stock", 80.0),
            ("Variants", 80.0),
            ("Status", 100.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        let image = match self.images.first() {
            Some(file) => view! { <img class="list-thumb" src=static_url(file) alt="" /> }.into_any(),
            None => "-".into_any(),
        };
        let price = match self.discount_price {
            Some(discount) if discount > 0.0 && discount < self.price => view! {
                <span class="price price--discounted">
                    <s>{format_money(self.price)}</s>
                    " "
                    {format_money(discount)}
                </span>
            }
            .into_any(),
            _ => format_money(self.price).into_any(),
        };
        let stock_class = if self.stock <= 0 { "stock stock--out" } else { "stock" };
        vec![
            image,
            self.name.clone().into_any(),
            self.sku.clone().unwrap_or_default().into_any(),
            self.category_name.clone().unwrap_or_default().into_any(),
            price,
            view! { <span class=stock_class>{self.stock}</span> }.into_any(),
            self.variants.len().to_string().into_any(),
            status_badge(self.status),
        ]
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<Products>();

    let status_filter = ProductStatus::ALL
        .iter()
        .fold(FilterSpec::new("status", "Status"), |spec, status| {
            spec.option(status.as_str(), status.label())
        });

    let mut options = ListOptions::new("a001_product--list", Products::TITLE)
        .with_details::<Products>(ctx, "Product");
    options.create_label = "New product";
    options.search_fields = vec![("name", "Name"), ("sku", "SKU")];
    options.filters = vec![status_filter];
    options.deletable = true;

    resource_list_view(state, options)
}
