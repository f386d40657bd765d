use contracts::domain::a003_order::aggregate::{Order, OrderStatus, PaymentStatus};
use leptos::prelude::*;

use crate::domain::a003_order::Orders;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{Badge, BadgeVariant};
use crate::shared::format::{format_money, format_opt_date};
use crate::shared::resource::{
    resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow, Resource,
};

/// Also used by the dashboard's recent orders.
pub fn status_badge(status: OrderStatus) -> AnyView {
    let variant = match status {
        OrderStatus::Pending => BadgeVariant::Warning,
        OrderStatus::Processing | OrderStatus::Shipped => BadgeVariant::Primary,
        OrderStatus::Delivered => BadgeVariant::Success,
        OrderStatus::Cancelled | OrderStatus::Returned => BadgeVariant::Error,
    };
    view! { <Badge variant=variant>{status.label()}</Badge> }.into_any()
}

fn payment_badge(status: PaymentStatus) -> AnyView {
    let variant = match status {
        PaymentStatus::Paid => BadgeVariant::Success,
        PaymentStatus::Pending => BadgeVariant::Warning,
        PaymentStatus::Failed => BadgeVariant::Error,
        PaymentStatus::Refunded => BadgeVariant::Neutral,
    };
    view! { <Badge variant=variant>{status.label()}</Badge> }.into_any()
}

impl ListRow for Order {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("Order", 110.0),
            ("Customer", 180.0),
            ("Items", 70.0),
            ("Total", 110.0),
            ("Payment", 110.0),
            ("Status", 110.0),
            ("Placed", 110.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        let quantity: u32 = self.items.iter().map(|item| item.quantity).sum();
        vec![
            format!("#{}", self.order_number).into_any(),
            self.customer_name.clone().into_any(),
            quantity.to_string().into_any(),
            format_money(self.total).into_any(),
            payment_badge(self.payment_status),
            status_badge(self.status),
            format_opt_date(self.created_at.as_deref()).into_any(),
        ]
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<Orders>();

    let status_filter = OrderStatus::ALL
        .iter()
        .fold(FilterSpec::new("status", "Status"), |spec, status| {
            spec.option(status.as_str(), status.label())
        });
    let payment_filter = PaymentStatus::ALL
        .iter()
        .fold(FilterSpec::new("paymentStatus", "Payment"), |spec, status| {
            spec.option(status.as_str(), status.label())
        });

    let mut options =
        ListOptions::new("a003_order--list", Orders::TITLE).with_viewer::<Orders>(ctx, "Order");
    options.search_fields = vec![
        ("orderNumber", "Order number"),
        ("customerName", "Customer"),
        ("phone", "Phone"),
    ];
    options.filters = vec![status_filter, payment_filter];

    resource_list_view(state, options)
}
