use contracts::domain::a004_customer::aggregate::Customer;
use leptos::prelude::*;

use crate::domain::a004_customer::Customers;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::static_url;
use crate::shared::components::{Badge, BadgeVariant};
use crate::shared::format::format_opt_date;
use crate::shared::resource::{
    resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow, Resource,
};

impl ListRow for Customer {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("", 50.0),
            ("Name", 180.0),
            ("Email", 200.0),
            ("Phone", 130.0),
            ("Orders", 80.0),
            ("Status", 100.0),
            ("Joined", 110.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        let avatar = match &self.avatar {
            Some(file) => view! { <img class="avatar avatar--small" src=static_url(file) alt="" /> }.into_any(),
            None => view! { <span class="avatar avatar--small avatar--empty"></span> }.into_any(),
        };
        let status = if self.is_blocked {
            view! { <Badge variant=BadgeVariant::Error>"Blocked"</Badge> }.into_any()
        } else {
            view! { <Badge variant=BadgeVariant::Success>"Active"</Badge> }.into_any()
        };
        vec![
            avatar,
            self.name.clone().into_any(),
            self.email.clone().into_any(),
            self.phone.clone().unwrap_or_else(|| "-".into()).into_any(),
            self.order_count.to_string().into_any(),
            status,
            format_opt_date(self.created_at.as_deref()).into_any(),
        ]
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<Customers>();

    let mut options = ListOptions::new("a004_customer--list", Customers::TITLE)
        .with_viewer::<Customers>(ctx, "Customer");
    options.search_fields = vec![("name", "Name"), ("email", "Email"), ("phone", "Phone")];
    options.filters = vec![FilterSpec::new("isBlocked", "Status")
        .option("false", "Active")
        .option("true", "Blocked")];
    options.deletable = true;

    resource_list_view(state, options)
}
