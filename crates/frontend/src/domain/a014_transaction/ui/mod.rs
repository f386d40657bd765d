use contracts::domain::a014_transaction::aggregate::{Transaction, TransactionStatus};
use leptos::prelude::*;

use crate::domain::a014_transaction::{settled_label, Transactions};
use crate::shared::components::{Badge, BadgeVariant};
use crate::shared::format::{format_datetime, format_money};
use crate::shared::resource::{
    export_toolbar, resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow,
    Resource,
};

impl ListRow for Transaction {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("Transaction", 160.0),
            ("Order", 100.0),
            ("Customer", 170.0),
            ("Amount", 110.0),
            ("Method", 110.0),
            ("Status", 100.0),
            ("Date", 140.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        let variant = match self.status {
            TransactionStatus::Completed => BadgeVariant::Success,
            TransactionStatus::Pending => BadgeVariant::Warning,
            TransactionStatus::Failed => BadgeVariant::Error,
            TransactionStatus::Refunded => BadgeVariant::Neutral,
        };
        let status = self.status.label();
        vec![
            view! { <code>{self.transaction_id.clone()}</code> }.into_any(),
            format!("#{}", self.order_number).into_any(),
            self.customer_name.clone().into_any(),
            format_money(self.amount).into_any(),
            self.payment_method.clone().into_any(),
            view! { <Badge variant=variant>{status}</Badge> }.into_any(),
            self.created_at
                .as_deref()
                .map(format_datetime)
                .unwrap_or_default()
                .into_any(),
        ]
    }
}

#[component]
pub fn TransactionList() -> impl IntoView {
    let state = use_resource_list::<Transactions>();

    let status_filter = TransactionStatus::ALL
        .iter()
        .fold(FilterSpec::new("status", "Status"), |spec, status| {
            spec.option(status.as_str(), status.label())
        });

    let mut options = ListOptions::new("a014_transaction--list", Transactions::TITLE);
    options.search_fields = vec![
        ("transactionId", "Transaction"),
        ("orderNumber", "Order"),
        ("customerName", "Customer"),
    ];
    options.filters = vec![status_filter];
    let export = export_toolbar(state, "transactions", "Transactions");
    options.toolbar = Some(ViewFn::from(move || {
        view! {
            <span class="list-summary">{move || state.items.with(|items| settled_label(items))}</span>
            {export.run()}
        }
    }));

    resource_list_view(state, options)
}
