use contracts::domain::a015_inquiry::aggregate::{Inquiry, InquiryStatus};
use leptos::prelude::*;

use crate::domain::a015_inquiry::Inquiries;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{Badge, BadgeVariant};
use crate::shared::format::format_opt_date;
use crate::shared::resource::{
    resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow, Resource,
};

pub fn inquiry_badge(status: InquiryStatus) -> AnyView {
    let variant = match status {
        InquiryStatus::New => BadgeVariant::Primary,
        InquiryStatus::InProgress => BadgeVariant::Warning,
        InquiryStatus::Resolved => BadgeVariant::Success,
    };
    view! { <Badge variant=variant>{status.label()}</Badge> }.into_any()
}

impl ListRow for Inquiry {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("Name", 160.0),
            ("Email", 200.0),
            ("Subject", 260.0),
            ("Status", 110.0),
            ("Received", 110.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        vec![
            self.name.clone().into_any(),
            self.email.clone().into_any(),
            self.subject.clone().into_any(),
            inquiry_badge(self.status),
            format_opt_date(self.created_at.as_deref()).into_any(),
        ]
    }
}

#[component]
pub fn InquiryList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<Inquiries>();

    let status_filter = InquiryStatus::ALL
        .iter()
        .fold(FilterSpec::new("status", "Status"), |spec, s| {
            spec.option(s.as_str(), s.label())
        });

    let mut options = ListOptions::new("a015_inquiry--list", Inquiries::TITLE)
        .with_viewer::<Inquiries>(ctx, "Inquiry");
    options.search_fields = vec![("name", "Name"), ("email", "Email"), ("subject", "Subject")];
    options.filters = vec![status_filter];
    options.deletable = true;

    resource_list_view(state, options)
}
