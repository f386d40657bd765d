use contracts::domain::a007_staff::aggregate::{Staff, StaffRole};
use leptos::prelude::*;

use crate::domain::a007_staff::StaffMembers;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::static_url;
use crate::shared::components::{ActiveBadge, Badge, BadgeVariant};
use crate::shared::resource::{
    resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow, Resource,
};

impl ListRow for Staff {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("", 50.0),
            ("Name", 180.0),
            ("Email", 200.0),
            ("Role", 100.0),
            ("Online", 80.0),
            ("Status", 100.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        let avatar = match &self.avatar {
            Some(file) => view! { <img class="avatar avatar--small" src=static_url(file) alt="" /> }.into_any(),
            None => view! { <span class="avatar avatar--small avatar--empty"></span> }.into_any(),
        };
        let role_variant = if self.role == StaffRole::Admin {
            BadgeVariant::Primary
        } else {
            BadgeVariant::Neutral
        };
        let role = self.role.label();
        let online_class = if self.is_online {
            "presence presence--online"
        } else {
            "presence"
        };
        vec![
            avatar,
            self.name.clone().into_any(),
            self.email.clone().into_any(),
            view! { <Badge variant=role_variant>{role}</Badge> }.into_any(),
            view! { <span class=online_class title=if self.is_online { "Online" } else { "Offline" }></span> }.into_any(),
            view! { <ActiveBadge active=self.is_active /> }.into_any(),
        ]
    }
}

#[component]
pub fn StaffList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<StaffMembers>();

    let role_filter = StaffRole::ALL
        .iter()
        .fold(FilterSpec::new("role", "Role"), |spec, role| {
            spec.option(role.as_str(), role.label())
        });

    let mut options = ListOptions::new("a007_staff--list", StaffMembers::TITLE)
        .with_details::<StaffMembers>(ctx, "Staff");
    options.create_label = "New staff member";
    options.search_fields = vec![("name", "Name"), ("email", "Email")];
    options.filters = vec![
        role_filter,
        FilterSpec::new("isActive", "Status")
            .option("true", "Active")
            .option("false", "Inactive"),
    ];
    options.deletable = true;

    resource_list_view(state, options)
}
