use contracts::domain::a010_job::aggregate::{EmploymentType, Job};
use leptos::prelude::*;

use crate::domain::a010_job::Jobs;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ActiveBadge;
use crate::shared::format::format_date;
use crate::shared::resource::{
    resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow, Resource,
};

impl ListRow for Job {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("Title", 220.0),
            ("Department", 140.0),
            ("Location", 140.0),
            ("Type", 100.0),
            ("Deadline", 110.0),
            ("Status", 100.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        vec![
            self.title.clone().into_any(),
            self.department.clone().into_any(),
            self.location.clone().into_any(),
            self.employment_type.label().into_any(),
            format_date(&self.deadline).into_any(),
            view! { <ActiveBadge active=self.is_active active_label="Open" inactive_label="Closed" /> }.into_any(),
        ]
    }
}

#[component]
pub fn JobList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<Jobs>();

    let type_filter = EmploymentType::ALL
        .iter()
        .fold(FilterSpec::new("employmentType", "Type"), |spec, kind| {
            spec.option(kind.as_str(), kind.label())
        });

    let mut options =
        ListOptions::new("a010_job--list", Jobs::TITLE).with_details::<Jobs>(ctx, "Job");
    options.create_label = "New job";
    options.search_fields = vec![("title", "Title"), ("department", "Department")];
    options.filters = vec![
        type_filter,
        FilterSpec::new("isActive", "Status")
            .option("true", "Open")
            .option("false", "Closed"),
    ];
    options.deletable = true;

    resource_list_view(state, options)
}
