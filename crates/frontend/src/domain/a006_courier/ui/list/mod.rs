use contracts::domain::a006_courier::aggregate::Courier;
use leptos::prelude::*;

use crate::domain::a006_courier::Couriers;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ActiveBadge;
use crate::shared::resource::{
    resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow, Resource,
};

impl ListRow for Courier {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("Name", 180.0),
            ("Phone", 130.0),
            ("Email", 180.0),
            ("Tracking", 200.0),
            ("Status", 100.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        vec![
            self.name.clone().into_any(),
            self.phone.clone().into_any(),
            self.email.clone().unwrap_or_else(|| "-".into()).into_any(),
            self.tracking_url.clone().unwrap_or_else(|| "-".into()).into_any(),
            view! { <ActiveBadge active=self.is_active /> }.into_any(),
        ]
    }
}

#[component]
pub fn CourierList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<Couriers>();

    let mut options = ListOptions::new("a006_courier--list", Couriers::TITLE)
        .with_details::<Couriers>(ctx, "Courier");
    options.create_label = "New courier";
    options.search_fields = vec![("name", "Name"), ("phone", "Phone")];
    options.filters = vec![FilterSpec::new("isActive", "Status")
        .option("true", "Active")
        .option("false", "Inactive")];
    options.deletable = true;

    resource_list_view(state, options)
}
