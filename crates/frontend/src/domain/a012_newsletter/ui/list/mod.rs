use contracts::domain::a012_newsletter::aggregate::Subscriber;
use leptos::prelude::*;

use crate::domain::a012_newsletter::Subscribers;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ActiveBadge;
use crate::shared::format::format_opt_date;
use crate::shared::resource::{
    export_toolbar, resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow,
    Resource, NEW_ID,
};

impl ListRow for Subscriber {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![("Email", 280.0), ("Status", 120.0), ("Subscribed", 120.0)]
    }

    fn cells(&self) -> Vec<AnyView> {
        vec![
            self.email.clone().into_any(),
            view! { <ActiveBadge active=self.is_active inactive_label="Unsubscribed" /> }.into_any(),
            format_opt_date(self.subscribed_at.as_deref()).into_any(),
        ]
    }
}

#[component]
pub fn SubscriberList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<Subscribers>();

    let mut options = ListOptions::new("a012_newsletter--list", Subscribers::TITLE);
    options.create_label = "Send newsletter";
    options.on_create = Some(Callback::new(move |_| {
        ctx.open_tab(&Subscribers::details_key(NEW_ID), "New newsletter")
    }));
    options.search_fields = vec![("email", "Email")];
    options.filters = vec![FilterSpec::new("isActive", "Status")
        .option("true", "Active")
        .option("false", "Unsubscribed")];
    options.deletable = true;
    options.toolbar = Some(export_toolbar(state, "subscribers", "Subscribers"));

    resource_list_view(state, options)
}
